// エラー定義

use thiserror::Error;

/// 盤面構築時のエラー。探索中には発生しない。
#[derive(Clone, Copy, Debug, PartialEq, Eq, Error)]
pub enum StateError {
    #[error("盤面の構成が不正です: 幅={width} 高さ={height} セル数={cells}")]
    InvalidConstruction {
        width: usize,
        height: usize,
        cells: usize,
    },
}

/// 手の適用時のエラー。
/// ソルバーは候補を正のカウンタを持つセルに限定するため、
/// これらは外部呼び出し向けのガードとしてのみ働く。
#[derive(Clone, Copy, Debug, PartialEq, Eq, Error)]
pub enum MoveError {
    #[error("残り手数がありません")]
    NoMovesLeft,
    #[error("座標が盤面外です: ({x},{y})")]
    OutOfBounds { x: usize, y: usize },
    #[error("空セルは叩けません: ({x},{y})")]
    EmptyCell { x: usize, y: usize },
}
