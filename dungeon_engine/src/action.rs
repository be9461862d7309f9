//! Things that happen in the world.
//!
//! Every command the player gives and every reaction an item has becomes an
//! [`Action`]. Evaluating an action applies its effect to the [`World`] and
//! returns the sentence describing what happened, in one step.

use crate::error::ContainmentError;
use crate::item::{Eating, Item, ItemKind};
use crate::player::{FLOOR_LABEL, INVENTORY_LABEL};
use crate::room::Direction;
use crate::text::{a, capitalize, commify, sentence};
use crate::world::{DoorId, ItemId, Location, RoomId, World};

use log::{info, warn};

#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Action {
    Go {
        direction: Direction,
        door: DoorId,
        destination: RoomId,
    },
    Take {
        items: Vec<ItemId>,
    },
    Drop {
        items: Vec<ItemId>,
    },
    Eat {
        item: ItemId,
    },
    Attack {
        target: ItemId,
        weapon: ItemId,
    },
    /// A monster lashes out at the player.
    Strike {
        attacker: ItemId,
    },
    /// The player speaks.
    Talk {
        words: String,
    },
    /// An item speaks.
    Say {
        speaker: ItemId,
        words: String,
    },
    Put {
        item: ItemId,
        target: ItemId,
        label: String,
    },
    /// An item relocates itself.
    Move {
        item: ItemId,
        destination: Location,
        label: String,
        text: String,
    },
    Look,
    Inventory,
    /// Time passes.
    Turn,
}

impl Action {
    /// Apply the action and describe it. Evaluating twice applies it twice.
    pub fn evaluate(&self, world: &mut World) -> String {
        match self {
            Action::Go {
                direction,
                door,
                destination,
            } => go(world, *direction, *door, *destination),
            Action::Take { items } => take(world, items),
            Action::Drop { items } => drop_items(world, items),
            Action::Eat { item } => eat(world, *item),
            Action::Attack { target, weapon } => attack(world, *target, *weapon),
            Action::Strike { attacker } => strike(world, *attacker),
            Action::Talk { words } => format!("You say, \"{}\"", sentence(words)),
            Action::Say { speaker, words } => {
                let noun = world.item(*speaker).map(Item::noun).unwrap_or_default();
                format!("The {noun} says, \"{words}\"")
            },
            Action::Put { item, target, label } => put(world, *item, *target, label),
            Action::Move {
                item,
                destination,
                label,
                text,
            } => relocate(world, *item, *destination, label, text),
            Action::Look => look(world),
            Action::Inventory => inventory(world),
            Action::Turn => String::new(),
        }
    }

    /// Ask one item how it reacts to this action.
    /// The action picks the hook; the item's reflexes and kind decide the answer.
    pub fn reactions_from(&self, world: &World, id: ItemId) -> Vec<Action> {
        let Some(item) = world.item(id) else {
            return Vec::new();
        };
        if !item.is_active() {
            return Vec::new();
        }
        match self {
            Action::Go { .. } => item.on_enter(),
            Action::Take { items } => item.on_take(items),
            Action::Drop { items } => item.on_drop(items),
            Action::Talk { words } => item.on_talk(words),
            Action::Say { speaker, words } => item.on_say(*speaker, words),
            Action::Attack { target, .. } => item.on_attack(*target),
            Action::Turn => item.on_turn(),
            _ => Vec::new(),
        }
    }
}

fn noun_of(world: &World, id: ItemId) -> String {
    world.item(id).map(Item::noun).unwrap_or_default()
}

fn go(world: &mut World, direction: Direction, door: DoorId, destination: RoomId) -> String {
    let door_description = world.door(door).map(|door| door.description.clone()).unwrap_or_default();
    world.player.room = destination;
    let arrival = look(world);
    if let Some(room) = world.room(destination) {
        info!("player went {direction} into '{}' ({destination})", room.key);
    }
    format!("You go through the {door_description} to the {direction}. {arrival}")
}

fn look(world: &World) -> String {
    world.current_room().map(|room| room.describe(world)).unwrap_or_default()
}

fn take(world: &mut World, items: &[ItemId]) -> String {
    let mut taken = Vec::new();
    let mut refusals = Vec::new();

    for &id in items {
        let Some(item) = world.item(id) else {
            continue;
        };
        let noun = item.noun();
        if let Some(reason) = item.take_denied_reason() {
            refusals.push(reason);
            continue;
        }
        if !world.can_remove(id) {
            let holder = world.holder(id).map(Item::noun).unwrap_or_default();
            refusals.push(format!("The {holder} won't let you take the {noun}."));
            continue;
        }
        match world.place(id, Location::Player, INVENTORY_LABEL) {
            Ok(()) => {
                info!("player took the {noun} ({id})");
                taken.push(format!("the {noun}"));
            },
            Err(err) => {
                warn!("couldn't move the {noun} into the player's bag: {err}");
                refusals.push(format!("You can't take the {noun}."));
            },
        }
    }

    let mut parts = Vec::new();
    if !taken.is_empty() {
        parts.push(format!("You take {}.", commify(&taken)));
    }
    parts.extend(refusals);
    parts.join(" ")
}

fn drop_items(world: &mut World, items: &[ItemId]) -> String {
    let here = world.here();
    let mut dropped = Vec::new();
    for &id in items {
        let noun = noun_of(world, id);
        match world.place(id, here, FLOOR_LABEL) {
            Ok(()) => {
                info!("player dropped the {noun} ({id})");
                dropped.push(format!("the {noun}"));
            },
            Err(err) => warn!("couldn't drop the {noun}: {err}"),
        }
    }
    if dropped.is_empty() {
        String::new()
    } else {
        format!("You drop {}.", commify(&dropped))
    }
}

fn eat(world: &mut World, id: ItemId) -> String {
    let Some(item) = world.item(id) else {
        return String::new();
    };
    match item.eating() {
        Eating::Swallowed(text) => {
            info!("player ate the {} ({id})", item.noun());
            world.discard(id);
            text
        },
        Eating::Refused(text) => text,
    }
}

fn attack(world: &mut World, target: ItemId, weapon: ItemId) -> String {
    let Some(tool) = world.item(weapon) else {
        return String::new();
    };
    let damage = tool.damage();
    if damage <= 0 {
        return format!(
            "{} is not an effective weapon. You do zero damage.",
            capitalize(&a(&tool.describe()))
        );
    }
    let strike_text = match &tool.kind {
        ItemKind::Weapon { strike, .. } => strike.clone(),
        _ => String::new(),
    };

    let Some(victim) = world.item_mut(target) else {
        return strike_text;
    };
    let outcome = victim.suffer(damage);
    info!(
        "player hit the {} ({target}) for {damage}, {} hit points left",
        victim.noun(),
        victim.hit_points
    );
    if victim.is_monster() && !victim.alive() {
        info!("the {} ({target}) is dead", victim.noun());
    }
    format!("{strike_text} {outcome}")
}

fn strike(world: &mut World, attacker: ItemId) -> String {
    let Some((damage, text)) = world
        .item(attacker)
        .filter(|monster| monster.alive())
        .and_then(Item::strike)
        .map(|strike| (strike.damage, strike.text.clone()))
    else {
        return String::new();
    };
    world.player.take_damage(damage);
    info!(
        "{} struck the player for {damage}, {} hit points left",
        noun_of(world, attacker),
        world.player.hit_points
    );
    text
}

fn put(world: &mut World, item: ItemId, target: ItemId, label: &str) -> String {
    let noun = noun_of(world, item);
    let target_noun = noun_of(world, target);
    match world.place(item, Location::Item(target), label) {
        Ok(()) => {
            info!("player put the {noun} {label} the {target_noun}");
            format!("You put the {noun} {label} the {target_noun}.")
        },
        Err(ContainmentError::Cycle { .. }) => {
            format!("You can't put the {noun} {label} the {target_noun}. It would end up inside itself.")
        },
        Err(err) => {
            warn!("couldn't put the {noun} {label} the {target_noun}: {err}");
            format!("You can't put the {noun} {label} the {target_noun}.")
        },
    }
}

fn relocate(world: &mut World, item: ItemId, destination: Location, label: &str, text: &str) -> String {
    match world.place(item, destination, label) {
        Ok(()) => {
            info!("the {} ({item}) moved to {destination:?}", noun_of(world, item));
            text.to_string()
        },
        Err(err) => {
            warn!("the {} ({item}) couldn't move: {err}", noun_of(world, item));
            String::new()
        },
    }
}

fn inventory(world: &World) -> String {
    let carried: Vec<String> = world
        .player
        .inventory
        .items()
        .filter_map(|id| world.item(id))
        .map(|item| a(&item.describe()))
        .collect();
    if carried.is_empty() {
        "You aren't carrying anything.".to_string()
    } else {
        format!("You are carrying {}.", commify(&carried))
    }
}
