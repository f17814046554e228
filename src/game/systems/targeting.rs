//! Target evaluation system.
//!
//! For every opponent, estimates how many turns it takes to line up a shot
//! and which command starts that path. Two paths are considered: travel along
//! X then face along Y, or the reverse. The residual offset on the second axis
//! is discounted by the engagement range.

use std::collections::BTreeMap;

use log::warn;

use crate::config::game::ENGAGEMENT_RANGE;
use crate::game::types::{ArenaSnapshot, Command, CostOption, Heading, PlayerState};

/// One of the two candidate paths: face `primary`, cover `primary_delta`,
/// then face `secondary` with `secondary_delta` cells still to spare.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
struct AxisPlan {
    primary: Heading,
    secondary: Heading,
    primary_delta: i64,
    secondary_delta: i64,
}

impl AxisPlan {
    /// Saturates instead of overflowing on far-apart coordinates.
    fn cost(&self, heading: Heading) -> i64 {
        let facing = i64::from(heading.turn_cost(self.primary).abs());
        let correction = i64::from(self.primary.turn_cost(self.secondary).abs());
        let residual = (self.secondary_delta.saturating_abs() - ENGAGEMENT_RANGE).max(0);

        facing
            .saturating_add(self.primary_delta.saturating_abs())
            .saturating_add(correction)
            .saturating_add(residual)
    }

    /// First command of the plan. Order matters: face the primary axis, walk
    /// while the other axis is still off, then correct onto the secondary
    /// axis, then close in if the primary distance is out of range.
    fn next_command(&self, heading: Heading) -> Command {
        if let Some(turn) = Command::turn_towards(heading.turn_cost(self.primary)) {
            return turn;
        }
        if self.secondary_delta != 0 {
            return Command::Forward;
        }
        if let Some(turn) = Command::turn_towards(self.primary.turn_cost(self.secondary)) {
            return turn;
        }
        if self.primary_delta.saturating_abs() > ENGAGEMENT_RANGE {
            Command::Forward
        } else {
            Command::Fire
        }
    }
}

/// Heading that moves along an axis towards a signed offset, or `current`
/// when there is nothing to cover.
fn heading_towards(delta: i64, positive: Heading, negative: Heading, current: Heading) -> Heading {
    match delta {
        d if d > 0 => positive,
        d if d < 0 => negative,
        _ => current,
    }
}

/// Cost and next command to engage `opponent` from `me`.
pub fn evaluate_opponent(me: &PlayerState, opponent: &PlayerState) -> CostOption {
    let dx = opponent.x.saturating_sub(me.x);
    let dy = opponent.y.saturating_sub(me.y);

    let mut x_dir = heading_towards(dx, Heading::East, Heading::West, me.direction);
    let mut y_dir = heading_towards(dy, Heading::South, Heading::North, me.direction);
    if dx != 0 && dy == 0 {
        y_dir = x_dir;
    }
    if dx == 0 && dy != 0 {
        x_dir = y_dir;
    }

    let x_plan = AxisPlan {
        primary: x_dir,
        secondary: y_dir,
        primary_delta: dx,
        secondary_delta: dy,
    };
    let y_plan = AxisPlan {
        primary: y_dir,
        secondary: x_dir,
        primary_delta: dy,
        secondary_delta: dx,
    };

    let x_cost = x_plan.cost(me.direction);
    let y_cost = y_plan.cost(me.direction);
    // X wins ties.
    let (cost, plan) = if x_cost <= y_cost {
        (x_cost, x_plan)
    } else {
        (y_cost, y_plan)
    };

    let next_move = if cost == 0 {
        Command::Fire
    } else {
        plan.next_command(me.direction)
    };

    CostOption { cost, next_move }
}

/// Evaluate every player except `self_id`.
///
/// Returns an empty map when `self_id` is not part of the arena.
pub fn evaluate<'a>(snapshot: &'a ArenaSnapshot, self_id: &str) -> BTreeMap<&'a str, CostOption> {
    let Some(me) = snapshot.arena.state.get(self_id) else {
        warn!("Player {} missing from arena state, no opponent evaluated", self_id);
        return BTreeMap::new();
    };

    snapshot
        .arena
        .state
        .iter()
        .filter(|(id, _)| id.as_str() != self_id)
        .map(|(id, opponent)| (id.as_str(), evaluate_opponent(me, opponent)))
        .collect()
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::game::types::{Arena, Links, SelfLink};
    use Heading::*;

    fn me(direction: Heading) -> PlayerState {
        PlayerState::new(0, 0, direction)
    }

    fn at(x: i64, y: i64) -> PlayerState {
        PlayerState::new(x, y, North)
    }

    fn snapshot(self_id: &str, players: Vec<(&str, PlayerState)>) -> ArenaSnapshot {
        ArenaSnapshot {
            links: Links {
                self_link: SelfLink { href: self_id.to_string() },
            },
            arena: Arena {
                dims: [20, 20],
                state: players.into_iter().map(|(id, p)| (id.to_string(), p)).collect(),
            },
        }
    }

    #[test]
    fn co_located_opponent_is_aligned() {
        for h in [North, East, South, West] {
            let option = evaluate_opponent(&me(h), &at(0, 0));
            assert_eq!(option, CostOption { cost: 0, next_move: Command::Fire });
        }
    }

    #[test]
    fn turns_right_towards_opponent_east_when_facing_north() {
        // x path: 1 + 5 = 6, y path: 1 + (5 - 3) = 3
        let option = evaluate_opponent(&me(North), &at(5, 0));
        assert_eq!(option.next_move, Command::Right);
        assert_eq!(option.cost, 3);
    }

    #[test]
    fn walks_forward_when_facing_opponent_out_of_range() {
        // x path: 5, y path: 5 - 3 = 2
        let option = evaluate_opponent(&me(East), &at(5, 0));
        assert_eq!(option.next_move, Command::Forward);
        assert_eq!(option.cost, 2);
    }

    #[test]
    fn fires_when_facing_opponent_in_range() {
        let option = evaluate_opponent(&me(East), &at(2, 0));
        assert_eq!(option, CostOption { cost: 0, next_move: Command::Fire });

        let option = evaluate_opponent(&me(North), &at(0, -3));
        assert_eq!(option, CostOption { cost: 0, next_move: Command::Fire });
    }

    #[test]
    fn equal_axis_costs_follow_x_axis() {
        // x path: 1 + 1 + 1 + 0 = 3 (R), y path: 0 + 2 + 1 + 0 = 3 (F)
        let option = evaluate_opponent(&me(North), &at(1, -2));
        assert_eq!(option, CostOption { cost: 3, next_move: Command::Right });
    }

    #[test]
    fn far_apart_coordinates_saturate() {
        let west_edge = PlayerState::new(-10, 0, East);
        let option = evaluate_opponent(&west_edge, &at(i64::MAX, 0));
        assert_eq!(option.next_move, Command::Forward);
        assert!(option.cost > 0);

        let corner = PlayerState::new(i64::MAX, i64::MIN, South);
        let option = evaluate_opponent(&corner, &at(i64::MIN, i64::MAX));
        assert!(option.cost > 0);
    }

    #[test]
    fn opponent_behind_costs_a_reversal() {
        // x path: 2 + 0, y path: 2 + 2
        let option = evaluate_opponent(&me(North), &at(0, 2));
        assert_eq!(option, CostOption { cost: 2, next_move: Command::Right });
    }

    #[test]
    fn turns_left_towards_opponent_north_when_facing_east() {
        // x path: 1 + (5 - 3) = 3, y path: 1 + 5 = 6
        let option = evaluate_opponent(&me(East), &at(0, -5));
        assert_eq!(option, CostOption { cost: 3, next_move: Command::Left });
    }

    #[test]
    fn diagonal_prefers_cheaper_axis() {
        // x path: 1 + 2 + 1 + 0 = 4, y path: 2 + 3 + 1 + 0 = 6
        let option = evaluate_opponent(&me(North), &at(2, 3));
        assert_eq!(option, CostOption { cost: 4, next_move: Command::Right });
    }

    #[test]
    fn moves_forward_along_primary_axis_while_offset_remains() {
        // x path: 0 + 3 + 1 + 2 = 6, y path: 1 + 5 + 1 + 0 = 7
        let option = evaluate_opponent(&me(West), &at(-3, -5));
        assert_eq!(option, CostOption { cost: 6, next_move: Command::Forward });
    }

    #[test]
    fn next_command_priority_order() {
        let plan = |primary, secondary, primary_delta, secondary_delta| AxisPlan {
            primary,
            secondary,
            primary_delta,
            secondary_delta,
        };

        // facing the primary axis wins over everything else
        assert_eq!(plan(West, North, 5, 5).next_command(North), Command::Left);
        assert_eq!(plan(East, North, 5, 5).next_command(North), Command::Right);
        // aligned, perpendicular offset left
        assert_eq!(plan(East, South, 1, 1).next_command(East), Command::Forward);
        // aligned, no offset, secondary correction
        assert_eq!(plan(East, North, 1, 0).next_command(East), Command::Left);
        assert_eq!(plan(East, South, 1, 0).next_command(East), Command::Right);
        // aligned on both, distance decides
        assert_eq!(plan(East, East, 4, 0).next_command(East), Command::Forward);
        assert_eq!(plan(East, East, -4, 0).next_command(East), Command::Forward);
        assert_eq!(plan(East, East, 3, 0).next_command(East), Command::Fire);
    }

    #[test]
    fn costs_are_never_negative() {
        for h in [North, East, South, West] {
            for x in -8..=8 {
                for y in -8..=8 {
                    let option = evaluate_opponent(&me(h), &at(x, y));
                    assert!(option.cost >= 0, "{:?} ({}, {}) -> {:?}", h, x, y, option);
                }
            }
        }
    }

    #[test]
    fn evaluate_skips_self() {
        let snapshot = snapshot(
            "me",
            vec![("me", me(East)), ("a", at(5, 0)), ("b", at(0, -5))],
        );
        let options = evaluate(&snapshot, "me");
        assert_eq!(options.len(), 2);
        assert!(!options.contains_key("me"));
        assert_eq!(options["a"].next_move, Command::Forward);
        assert_eq!(options["b"].next_move, Command::Left);
    }

    #[test]
    fn evaluate_is_deterministic() {
        let snapshot = snapshot(
            "me",
            vec![("me", me(South)), ("a", at(4, 7)), ("b", at(-2, 1)), ("c", at(0, -9))],
        );
        assert_eq!(evaluate(&snapshot, "me"), evaluate(&snapshot, "me"));
    }

    #[test]
    fn evaluate_without_self_is_empty() {
        let snapshot = snapshot("ghost", vec![("a", at(1, 1)), ("b", at(2, 2))]);
        assert!(evaluate(&snapshot, "ghost").is_empty());
    }
}
