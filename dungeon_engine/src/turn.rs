//! The turn executor.
//!
//! One turn evaluates the player's action, lets everything in the room react
//! to it (and to each other's reactions), then ticks the clock so monsters
//! get their swing, and finally reports what happened to the player.

use crate::action::Action;
use crate::world::{ItemId, World};

use log::{debug, warn};

/// Reactions to reactions stop nesting past this depth.
pub const MAX_CASCADE_DEPTH: usize = 32;

/// Run one full turn for an already parsed action. Returns the descriptions in order.
pub fn execute(world: &mut World, action: &Action) -> Vec<String> {
    let starting_state = world.player.state();

    let mut text = vec![action.evaluate(world)];
    cascade(world, action, &mut text, 0);
    cascade(world, &Action::Turn, &mut text, 0);
    text.extend(world.player.state_changes(&starting_state));
    text
}

/// Every reaction to `action` from items in the player's room, in registration order.
pub fn gather_reactions(world: &World, action: &Action) -> Vec<Action> {
    let in_scope: Vec<ItemId> = world.descendants(world.here()).map(|placed| placed.item).collect();
    in_scope
        .into_iter()
        .flat_map(|id| action.reactions_from(world, id))
        .collect()
}

/// Evaluate all reactions to `action`, then everything those reactions provoke.
fn cascade(world: &mut World, action: &Action, text: &mut Vec<String>, depth: usize) {
    if depth >= MAX_CASCADE_DEPTH {
        warn!("reaction cascade reached depth {depth} at {action:?}; stopping here");
        return;
    }

    let reactions = gather_reactions(world, action);
    if reactions.is_empty() {
        return;
    }
    debug!("{} reaction(s) to {action:?} at depth {depth}", reactions.len());

    for reaction in &reactions {
        text.push(reaction.evaluate(world));
    }
    for reaction in &reactions {
        cascade(world, reaction, text, depth + 1);
    }
}
