// 爆発の衝撃波を表す一時的な粒子

/// 粒子の状態。移動中は4方向のいずれか、
/// `Collided`/`Dead` は同一ティック内でのみ現れる退場マーカー。
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum ParticleState {
    Left,
    Right,
    Up,
    Down,
    Collided,
    Dead,
}

/// 1回の連鎖計算の中だけで生きる粒子。
/// 連鎖が収束した時点で全て破棄され、外部には公開されない。
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub struct Particle {
    pub x: isize,
    pub y: isize,
    pub state: ParticleState,
}

impl Particle {
    /// (x,y) を起点に4方向の粒子を生成して追記する
    pub fn spawn_at(x: usize, y: usize, particles: &mut Vec<Particle>) {
        for state in [
            ParticleState::Left,
            ParticleState::Right,
            ParticleState::Up,
            ParticleState::Down,
        ] {
            particles.push(Particle {
                x: x as isize,
                y: y as isize,
                state,
            });
        }
    }

    /// 移動中（方向を持つ）か
    pub fn is_heading(&self) -> bool {
        !matches!(self.state, ParticleState::Collided | ParticleState::Dead)
    }
}
