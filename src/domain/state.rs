// 盤面状態と手の適用

use serde::Serialize;

use crate::chain::run_cascade;
use crate::constants::{DEFAULT_H, DEFAULT_W};
use crate::domain::error::{MoveError, StateError};
use crate::vlog;

/// 1手。叩くセルの0始まり座標。
#[derive(Clone, Copy, Debug, PartialEq, Eq, Serialize)]
pub struct Move {
    pub x: usize,
    pub y: usize,
}

impl std::fmt::Display for Move {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{},{}", self.x, self.y)
    }
}

/// 盤面状態のスナップショット。
///
/// セルは行優先で、0 が空、1..=4 が残り必要ヒット数。
/// 構築後は不変で、手の適用は常に新しい状態を生成する。
/// 探索中の兄弟ノード間で可変状態を共有しない。
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct GameState {
    width: usize,
    height: usize,
    cells: Vec<u8>,
    moves_left: u32,
}

impl GameState {
    /// 盤面を構築する。寸法が 1 未満、またはセル数が
    /// 幅×高さと一致しない場合は `InvalidConstruction`。
    pub fn new(
        width: usize,
        height: usize,
        cells: Vec<u8>,
        moves_left: u32,
    ) -> Result<Self, StateError> {
        if width < 1 || height < 1 || cells.len() != width * height {
            return Err(StateError::InvalidConstruction {
                width,
                height,
                cells: cells.len(),
            });
        }
        Ok(Self {
            width,
            height,
            cells,
            moves_left,
        })
    }

    /// 標準サイズ（5x6）の盤面を構築する
    pub fn with_default_size(cells: Vec<u8>, moves_left: u32) -> Result<Self, StateError> {
        Self::new(DEFAULT_W, DEFAULT_H, cells, moves_left)
    }

    pub fn width(&self) -> usize {
        self.width
    }

    pub fn height(&self) -> usize {
        self.height
    }

    pub fn moves_left(&self) -> u32 {
        self.moves_left
    }

    pub fn cells(&self) -> &[u8] {
        &self.cells
    }

    /// (x,y) のカウンタを取得。範囲チェックは呼び出し側の責任。
    pub fn get(&self, x: usize, y: usize) -> u8 {
        self.cells[y * self.width + x]
    }

    /// 勝利状態か（全セルが0）
    pub fn winning(&self) -> bool {
        self.cells.iter().all(|&b| b == 0)
    }

    /// 敗北状態か（手数切れかつ未クリア）
    pub fn lost(&self) -> bool {
        self.moves_left == 0 && !self.winning()
    }

    /// (x,y) を叩いて新しい状態を生成する。
    ///
    /// カウンタを1減らし、0に到達したときだけ連鎖シミュレーションを
    /// 走らせる。元の状態は一切変更しない。
    pub fn apply_move(&self, x: usize, y: usize) -> Result<GameState, MoveError> {
        if self.moves_left == 0 {
            return Err(MoveError::NoMovesLeft);
        }
        if x >= self.width || y >= self.height {
            return Err(MoveError::OutOfBounds { x, y });
        }
        let idx = y * self.width + x;
        if self.cells[idx] == 0 {
            return Err(MoveError::EmptyCell { x, y });
        }

        let mut cells = self.cells.clone();
        cells[idx] -= 1;
        if cells[idx] == 0 {
            let exploded = run_cascade(&mut cells, self.width, self.height, x, y);
            vlog!("[盤面] ({},{}) 起点の連鎖: {}セル爆発", x, y, exploded);
        }

        Ok(GameState {
            width: self.width,
            height: self.height,
            cells,
            moves_left: self.moves_left - 1,
        })
    }
}
