// 連鎖シミュレーション（同期ティックのセル・オートマトン）

pub mod cascade;
pub mod particle;

pub use cascade::run_cascade;
pub use particle::{Particle, ParticleState};
