//! Turn decision system.
//!
//! Hunts the cheapest opponent to engage, or, right after taking a hit, goes
//! after the weakest opponent that still has points.

use std::collections::BTreeMap;

use log::{debug, info, warn};

use crate::config::game::COST_CEILING_MARGIN;
use crate::game::systems::targeting::evaluate;
use crate::game::types::{ArenaSnapshot, Command, CostOption};

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Mode {
    Hunt,
    Flee,
}

/// Outcome of one turn: the mode used, the chosen target (self when nobody
/// qualified) and the command to send.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Decision<'a> {
    pub mode: Mode,
    pub target: &'a str,
    pub command: Command,
}

/// Command to play for this snapshot.
pub fn decide(snapshot: &ArenaSnapshot) -> Command {
    plan_turn(snapshot).command
}

pub fn plan_turn(snapshot: &ArenaSnapshot) -> Decision<'_> {
    debug!("IN: {:?}", snapshot);

    let self_id = snapshot.self_id();
    let Some(me) = snapshot.own_state() else {
        warn!("Own id {} not found in arena state, answering {}", self_id, Command::Fire);
        return Decision {
            mode: Mode::Hunt,
            target: self_id,
            command: Command::Fire,
        };
    };

    let options = evaluate(snapshot, self_id);
    debug!("OPTIONS: {:?}", options);

    let decision = if me.was_hit {
        flee(snapshot, self_id, &options)
    } else {
        hunt(snapshot, self_id, &options)
    };

    match decision.mode {
        Mode::Hunt => info!("Next: target={} command={}", decision.target, decision.command),
        Mode::Flee => info!("RUN: target={} command={}", decision.target, decision.command),
    }
    decision
}

/// Cheapest opponent below `width + height + margin`; the first one in
/// enumeration order wins ties.
fn hunt<'a>(
    snapshot: &ArenaSnapshot,
    self_id: &'a str,
    options: &BTreeMap<&'a str, CostOption>,
) -> Decision<'a> {
    let ceiling = snapshot
        .width()
        .saturating_add(snapshot.height())
        .saturating_add(COST_CEILING_MARGIN);

    let best = options
        .iter()
        .filter(|(_, option)| option.cost < ceiling)
        .min_by_key(|(_, option)| option.cost);

    match best {
        Some((&target, option)) => Decision {
            mode: Mode::Hunt,
            target,
            command: option.next_move,
        },
        None => Decision {
            mode: Mode::Hunt,
            target: self_id,
            command: Command::Fire,
        },
    }
}

/// Lowest positive score among the opponents; movement cost is ignored.
fn flee<'a>(
    snapshot: &'a ArenaSnapshot,
    self_id: &'a str,
    options: &BTreeMap<&'a str, CostOption>,
) -> Decision<'a> {
    let weakest = snapshot
        .arena
        .state
        .iter()
        .filter(|(id, state)| id.as_str() != self_id && state.score > 0)
        .min_by_key(|(_, state)| state.score);

    match weakest {
        Some((target, _)) => Decision {
            mode: Mode::Flee,
            target: target.as_str(),
            command: options
                .get(target.as_str())
                .map_or(Command::Fire, |option| option.next_move),
        },
        None => Decision {
            mode: Mode::Flee,
            target: self_id,
            command: Command::Fire,
        },
    }
}
