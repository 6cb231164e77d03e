// ドメイン層 - 盤面状態と手の適用

pub mod error;
pub mod state;

pub use error::{MoveError, StateError};
pub use state::{GameState, Move};
