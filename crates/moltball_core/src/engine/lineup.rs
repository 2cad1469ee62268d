//! Greedy lineup selection: best-fitting available player for each
//! formation slot, each player used at most once.

use crate::models::{PlayerAttributes, Position};

/// Slots a player covers as a near fit (worth a +10 bonus) besides their
/// exact nominal position (+20). Wing-backs have no near fits of their own;
/// they only cover LB/RB slots via those positions' entries.
fn near_slots(position: Position) -> &'static [Position] {
    use crate::models::Position::*;
    match position {
        GK => &[GK],
        LB => &[LB, LWB, LM],
        CB => &[CB],
        RB => &[RB, RWB, RM],
        CDM => &[CDM, CM],
        CM => &[CM, CDM, CAM],
        CAM => &[CAM, CM],
        LM => &[LM, LW, LB],
        RM => &[RM, RW, RB],
        LW => &[LW, LM],
        RW => &[RW, RM],
        ST => &[ST, CAM],
        LWB | RWB => &[],
    }
}

/// Fit score of `player` for `slot`: overall plus a positional bonus.
pub fn fit_score(player: &PlayerAttributes, slot: Position) -> u16 {
    let bonus = if player.position == slot {
        20
    } else if near_slots(player.position).contains(&slot) {
        10
    } else {
        0
    };
    player.overall as u16 + bonus
}

/// Assign the best available player to each slot in formation order.
///
/// Ties go to the first-encountered roster player. A roster smaller than
/// the formation leaves trailing slots unfilled, so the returned lineup can
/// be shorter than `slots`.
pub fn select_lineup<'a>(
    roster: &'a [PlayerAttributes],
    slots: &[Position],
) -> Vec<&'a PlayerAttributes> {
    let mut taken = vec![false; roster.len()];
    let mut lineup = Vec::with_capacity(slots.len().min(roster.len()));

    for &slot in slots {
        let mut best: Option<usize> = None;
        let mut best_score = 0u16;

        for (idx, player) in roster.iter().enumerate() {
            if taken[idx] {
                continue;
            }
            let score = fit_score(player, slot);
            if best.is_none() || score > best_score {
                best = Some(idx);
                best_score = score;
            }
        }

        if let Some(idx) = best {
            taken[idx] = true;
            lineup.push(&roster[idx]);
        }
    }

    lineup
}
