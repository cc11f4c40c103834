//! The settlement driver: replays settled holes in order and derives the
//! full game state.

use std::collections::BTreeMap;

use crate::domain::{GameRecord, PlayerName, Title};

use super::bank::BankLedger;
use super::side_pool::SidePool;
use super::{head_to_head, penalty, title, HoleOutcome, OutcomeKind, Settlement};

/// Replay every settled hole of `game` from hole 1 and derive points,
/// titles, side-pool points and log lines.
///
/// The fold is deterministic and idempotent: identical records produce
/// byte-identical settlements, and settling a prefix then re-settling after
/// more holes reproduces the prefix outcomes exactly. Unconfirmed holes are
/// skipped entirely; the side-pool chase walks the settled sequence, not raw
/// hole numbers.
///
/// # Panics
/// Panics if the record has fewer than two players; `GameRecord` construction
/// guarantees 2..=4.
pub fn settle(game: &GameRecord) -> Settlement {
    assert!(
        game.players.len() >= 2,
        "settlement requires at least two players"
    );

    let mut points: BTreeMap<PlayerName, i64> =
        game.players.iter().map(|p| (p.clone(), 0)).collect();
    let mut titles: BTreeMap<PlayerName, Title> =
        game.players.iter().map(|p| (p.clone(), Title::None)).collect();
    let mut bank = BankLedger::new();
    let mut side_pool = game.side_stake.map(|_| SidePool::new(&game.players));
    let mut outcomes = Vec::new();

    for (hole_index, sheet) in game.settled_holes() {
        let spec = game.round.hole(hole_index);
        let hole_no = (hole_index + 1) as u8;

        // 1) Penalties, gated by the title carried into this hole and
        //    floor-clamped at each balance. Deductions feed the pool.
        let mut penalty_pool = 0;
        let mut deductions: Vec<(PlayerName, i64)> = Vec::new();
        for player in &game.players {
            let entry = &sheet.entries[player];
            let wanted = penalty::penalty_points(titles[player], &entry.events);
            let balance = points.get_mut(player).expect("player tracked");
            let actual = wanted.min(*balance);
            if actual > 0 {
                *balance -= actual;
                penalty_pool += actual;
                deductions.push((player.clone(), actual));
            }
        }

        // 2) Head-to-head resolution on raw strokes.
        let raw: BTreeMap<PlayerName, u32> = game
            .players
            .iter()
            .map(|p| (p.clone(), sheet.entries[p].strokes))
            .collect();
        let kind = head_to_head::resolve(&game.players, &raw, &game.handicaps, spec.stroke_index);

        // 3) Bank settlement (plus birdie transfer) or carry-over.
        let (bank_award, birdie_bonus, side_points, log) = match &kind {
            OutcomeKind::Win { player: winner } => {
                let is_birdie = raw[winner] + 1 <= u32::from(spec.par);
                let mut birdie_bonus = 0;
                if is_birdie {
                    for player in &game.players {
                        if player == winner {
                            continue;
                        }
                        let balance = points.get_mut(player).expect("player tracked");
                        if *balance > 0 {
                            *balance -= 1;
                            birdie_bonus += 1;
                        }
                    }
                }

                let award = bank.settle_win(penalty_pool, birdie_bonus);
                *points.get_mut(winner).expect("player tracked") += award;

                let side_points = match side_pool.as_mut() {
                    Some(pool) => pool.record_win(winner, raw[winner], spec.par),
                    None => 0,
                };

                let log = win_log(
                    hole_no,
                    winner,
                    award,
                    is_birdie,
                    birdie_bonus,
                    side_points,
                    &deductions,
                );
                (award, birdie_bonus, side_points, log)
            }
            OutcomeKind::Tie => {
                let pot = bank.carry_tie(penalty_pool);
                if let Some(pool) = side_pool.as_mut() {
                    pool.record_tie();
                }
                (0, 0, 0, tie_log(hole_no, pot, &deductions))
            }
        };

        // 4) Titles earned this hole apply from the next hole on.
        for player in &game.players {
            let next = title::next_title(titles[player], points[player]);
            titles.insert(player.clone(), next);
        }

        outcomes.push(HoleOutcome {
            hole_no,
            kind,
            bank_award,
            penalty_pool,
            birdie_bonus,
            side_points,
            log,
        });
    }

    let holes_settled = outcomes.len() as u32;
    Settlement {
        points,
        titles,
        side_points: side_pool
            .map(SidePool::into_points)
            .unwrap_or_default(),
        outcomes,
        bank: bank.pot(),
        holes_settled,
    }
}

fn win_log(
    hole_no: u8,
    winner: &PlayerName,
    award: i64,
    is_birdie: bool,
    birdie_bonus: i64,
    side_points: i64,
    deductions: &[(PlayerName, i64)],
) -> String {
    let birdie_tag = if is_birdie { " (birdie)" } else { "" };
    let mut log = format!("Hole {}: {} wins +{} pts{}", hole_no, winner, award, birdie_tag);
    append_penalties(&mut log, deductions);
    if birdie_bonus > 0 {
        log.push_str(&format!(" | birdie takes {} pts", birdie_bonus));
    }
    if side_points > 0 {
        log.push_str(&format!(" | side pool +{} pts", side_points));
    }
    log
}

fn tie_log(hole_no: u8, pot: i64, deductions: &[(PlayerName, i64)]) -> String {
    let mut log = format!("Hole {}: tie, bank carries {} pts", hole_no, pot);
    append_penalties(&mut log, deductions);
    log
}

fn append_penalties(log: &mut String, deductions: &[(PlayerName, i64)]) {
    if deductions.is_empty() {
        return;
    }
    let parts: Vec<String> = deductions
        .iter()
        .map(|(player, pts)| format!("{} -{}", player, pts))
        .collect();
    log.push_str(&format!(" | penalties: {}", parts.join(", ")));
}
