// DFS探索ロジック
//
// 可能な盤面状態の木を深さ優先で全探索する単純なソルバー。
// 枝刈りもメモ化もしない。残り手数が6手以下なら十分実用的な速度で、
// それを超える手数では指数的に遅くなる（仕様であってバグではない）。

use crate::domain::{GameState, Move, MoveError};
use crate::vlog;

/// 与えられた盤面を解く。
///
/// 解が見つかれば手順を逆順（最後の手が先頭、最初の手が末尾）で
/// 返す。解なしは `None`。空の手順は「既に勝利している」を意味する
/// 正常な成功結果であり、解なしとは区別される。
///
/// 候補は行優先（yが外側、xが内側）の順に試し、最初に見つかった解を
/// 即座に返す（最短解や辞書順最小解は探さない）。複数解が存在する
/// 場合にどの解が返るかはこの順序に依存する。
///
/// `Err` は候補セルの事前フィルタにより到達しないはずの内部エラー
/// のみ（手数切れ状態は敗北判定で弾かれ、候補は正のカウンタに限る）。
pub fn solve(state: &GameState) -> Result<Option<Vec<Move>>, MoveError> {
    if state.winning() {
        return Ok(Some(Vec::new()));
    }
    if state.lost() {
        return Ok(None);
    }

    // 全候補を試す
    for y in 0..state.height() {
        for x in 0..state.width() {
            if state.get(x, y) > 0 {
                let child = state.apply_move(x, y)?;
                if let Some(mut moves) = solve(&child)? {
                    vlog!("[探索] 採用: ({},{}) 残り{}手", x, y, state.moves_left());
                    moves.push(Move { x, y });
                    return Ok(Some(moves));
                }
            }
        }
    }
    Ok(None)
}
