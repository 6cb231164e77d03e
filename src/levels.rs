// レベルデータ

use serde::{Deserialize, Serialize};

use crate::constants::{DEFAULT_H, DEFAULT_W};
use crate::domain::{GameState, StateError};

/// 青バブルは4回割る必要がある
pub const B: u8 = 4;
/// 黄バブルは3回
pub const Y: u8 = 3;
/// 緑バブルは2回
pub const G: u8 = 2;
/// 赤バブルは1回
pub const R: u8 = 1;

/// レベル 1-10（制限1手、中央を叩くと全消し）
#[rustfmt::skip]
pub const LEVEL_1_10: [u8; 30] = [
    G, G, G, G, G,
    G, R, G, R, G,
    G, 0, R, 0, G,
    G, 0, R, 0, G,
    G, R, Y, R, G,
    G, G, G, G, G,
];

/// レベル 1-10 の制限手数
pub const LEVEL_1_10_MOVES: u32 = 1;

/// レベル 1-98（制限4手）
#[rustfmt::skip]
pub const LEVEL_1_98: [u8; 30] = [
    Y, B, B, G, 0,
    Y, R, Y, 0, R,
    G, G, Y, G, G,
    B, B, R, B, G,
    R, G, Y, R, B,
    R, B, Y, B, G,
];

/// レベル 1-98 の制限手数
pub const LEVEL_1_98_MOVES: u32 = 4;

/// 組み込みレベルの一覧（名前、盤面、制限手数）
pub fn builtin_levels() -> Vec<(&'static str, Vec<u8>, u32)> {
    vec![
        ("1-10", LEVEL_1_10.to_vec(), LEVEL_1_10_MOVES),
        ("1-98", LEVEL_1_98.to_vec(), LEVEL_1_98_MOVES),
    ]
}

/// JSONから読み込むレベル定義。
/// 寸法を省略した場合は標準サイズ（5x6）を使う。
#[derive(Clone, Debug, Serialize, Deserialize)]
pub struct LevelSpec {
    #[serde(default = "default_width")]
    pub width: usize,
    #[serde(default = "default_height")]
    pub height: usize,
    /// 行優先のカウンタ列（0=空、1..=4=残りヒット数）
    pub cells: Vec<u8>,
    /// 制限手数
    pub moves: u32,
}

fn default_width() -> usize {
    DEFAULT_W
}

fn default_height() -> usize {
    DEFAULT_H
}

impl LevelSpec {
    /// 盤面状態へ変換する
    pub fn into_state(self) -> Result<GameState, StateError> {
        GameState::new(self.width, self.height, self.cells, self.moves)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn builtin_levels_are_valid() {
        for (name, cells, moves) in builtin_levels() {
            let gs = GameState::with_default_size(cells, moves);
            assert!(gs.is_ok(), "レベル {} が不正", name);
        }
    }

    #[test]
    fn level_spec_defaults_to_5x6() {
        let spec: LevelSpec = serde_json::from_str(
            r#"{"cells":[0,0,0,0,0,0,0,0,0,0,0,0,0,0,0,0,0,0,0,0,0,0,0,0,0,0,0,0,0,0],"moves":1}"#,
        )
        .unwrap();
        let gs = spec.into_state().unwrap();
        assert_eq!(gs.width(), DEFAULT_W);
        assert_eq!(gs.height(), DEFAULT_H);
    }

    #[test]
    fn level_spec_rejects_size_mismatch() {
        let spec: LevelSpec =
            serde_json::from_str(r#"{"width":2,"height":2,"cells":[1,1,1],"moves":1}"#).unwrap();
        assert!(spec.into_state().is_err());
    }
}
