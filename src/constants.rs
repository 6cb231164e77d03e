// 盤面定数

/// 標準レベルの盤面サイズ（幅）
pub const DEFAULT_W: usize = 5;
/// 標準レベルの盤面サイズ（高さ）
pub const DEFAULT_H: usize = 6;

/// 同時に存在しうる粒子数の上限（1セルの爆発につき4方向）
pub const fn max_particles(w: usize, h: usize) -> usize {
    4 * w * h
}
