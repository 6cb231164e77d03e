// Bubble Blast 全探索ソルバー - ライブラリモジュール

pub mod chain; // 連鎖シミュレーション
pub mod constants;
pub mod domain; // ドメイン層
pub mod levels;
pub mod logging;
pub mod search; // 探索

// 外部クレートの再エクスポート
pub use anyhow::{anyhow, Context, Result};

// 主要な型を再エクスポート
pub use constants::{DEFAULT_H, DEFAULT_W};
pub use domain::{GameState, Move, MoveError, StateError};
pub use levels::LevelSpec;
pub use search::solve;
