// 連鎖（爆発の波及）のシミュレーション
//
// 1ティック = 移動→解決→退場の3パス。全粒子がティック開始時点の
// 盤面を観測してから減算する必要があるため、粒子ごとの1パスに
// まとめてはならない。

use crate::chain::particle::{Particle, ParticleState};
use crate::constants::max_particles;
use crate::vlog;

/// (x,y) のカウンタが0に到達した直後の連鎖を収束まで適用する。
///
/// `cells` はクローン済みの作業バッファで、この呼び出しの中だけで
/// 自由に書き換えられる。爆発したセル数を返す。
pub fn run_cascade(cells: &mut [u8], width: usize, height: usize, x: usize, y: usize) -> usize {
    let mut particles: Vec<Particle> = Vec::with_capacity(max_particles(width, height));
    Particle::spawn_at(x, y, &mut particles);
    let mut exploded = 1usize; // 起点セル自身
    let mut tick = 0usize;

    while !particles.is_empty() {
        tick += 1;

        // (1) 移動フェーズ: 全粒子が1セル進み、盤面外なら Dead、
        //     カウンタ正のセルに乗ったら Collided
        for p in particles.iter_mut() {
            match p.state {
                ParticleState::Left => {
                    p.x -= 1;
                    if p.x < 0 {
                        p.state = ParticleState::Dead;
                    }
                }
                ParticleState::Right => {
                    p.x += 1;
                    if p.x >= width as isize {
                        p.state = ParticleState::Dead;
                    }
                }
                ParticleState::Up => {
                    p.y -= 1;
                    if p.y < 0 {
                        p.state = ParticleState::Dead;
                    }
                }
                ParticleState::Down => {
                    p.y += 1;
                    if p.y >= height as isize {
                        p.state = ParticleState::Dead;
                    }
                }
                // 退場マーカーはティック末尾で除去済み
                ParticleState::Collided | ParticleState::Dead => unreachable!(),
            }
            if p.state != ParticleState::Dead {
                let idx = p.y as usize * width + p.x as usize;
                if cells[idx] > 0 {
                    p.state = ParticleState::Collided;
                }
            }
        }

        // (2) 解決フェーズ: 衝突粒子をインデックス順に処理。
        //     カウンタ1のセルは0になって爆発し、4方向の粒子を追記する。
        //     同ティック内で既に0になったセルへのヒットは無効
        //     （1セルは高々1回しか爆発しない）。
        let mut i = 0;
        while i < particles.len() {
            if particles[i].state == ParticleState::Collided {
                let cx = particles[i].x as usize;
                let cy = particles[i].y as usize;
                let idx = cy * width + cx;
                match cells[idx] {
                    0 => {} // 先行の粒子が処理済み
                    1 => {
                        cells[idx] = 0;
                        exploded += 1;
                        vlog!("[連鎖] tick={}: ({},{}) が爆発", tick, cx, cy);
                        Particle::spawn_at(cx, cy, &mut particles);
                    }
                    _ => cells[idx] -= 1,
                }
            }
            i += 1;
        }

        // (3) 退場フェーズ: Collided/Dead を除去
        particles.retain(Particle::is_heading);
    }

    exploded
}

#[cfg(test)]
mod tests {
    use super::*;

    // 各テストの起点セルは apply_move 相当の減算を済ませた 0 とする
    fn cascade(cells: &mut [u8], w: usize, h: usize, x: usize, y: usize) -> usize {
        run_cascade(cells, w, h, x, y)
    }

    #[test]
    fn lone_explosion_dies_at_borders() {
        let mut cells = vec![0u8; 9];
        let n = cascade(&mut cells, 3, 3, 1, 1);
        assert_eq!(n, 1);
        assert!(cells.iter().all(|&b| b == 0));
    }

    #[test]
    fn particle_travels_over_empty_cells() {
        // [0 0 0 1]: 左端の爆発から右向き粒子が空セルを越えて届く
        let mut cells = vec![0, 0, 0, 1];
        let n = cascade(&mut cells, 4, 1, 0, 0);
        assert_eq!(n, 2);
        assert_eq!(cells, vec![0, 0, 0, 0]);
    }

    #[test]
    fn hit_decrements_without_explosion() {
        // [0 3]: 粒子のヒットで3→2、爆発はしない
        let mut cells = vec![0, 3];
        let n = cascade(&mut cells, 2, 1, 0, 0);
        assert_eq!(n, 1);
        assert_eq!(cells, vec![0, 2]);
    }

    #[test]
    fn chain_propagates_through_neighbours() {
        // [0 1 1 1]: 爆発が右方向へ連鎖
        let mut cells = vec![0, 1, 1, 1];
        let n = cascade(&mut cells, 4, 1, 0, 0);
        assert_eq!(n, 4);
        assert_eq!(cells, vec![0, 0, 0, 0]);
    }

    #[test]
    fn cell_explodes_at_most_once_per_tick() {
        // 十字の中央を起点に、上下左右の1が同ティックで爆発。
        // 互いのセルへ同時に粒子が飛び込むが、既に0のセルへの
        // ヒットは無効のため、カウンタが負になることはない。
        #[rustfmt::skip]
        let mut cells = vec![
            0, 1, 0,
            1, 0, 1,
            0, 1, 0,
        ];
        let n = cascade(&mut cells, 3, 3, 1, 1);
        assert_eq!(n, 5);
        assert!(cells.iter().all(|&b| b == 0));
    }

    #[test]
    fn counters_never_go_negative() {
        // リング状の1: 2ティック目に各隅へ2方向から同時にヒットが届く。
        // 二重減算があれば u8 がラップして 255 が現れる。
        #[rustfmt::skip]
        let mut cells = vec![
            1, 1, 1,
            1, 0, 1,
            1, 1, 1,
        ];
        let n = cascade(&mut cells, 3, 3, 1, 1);
        assert_eq!(n, 9);
        assert!(cells.iter().all(|&b| b < 5));
        assert!(cells.iter().all(|&b| b == 0));
    }
}
