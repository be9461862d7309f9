//! Loader utilities for building a `World` from serialized data.
//!
//! World content lives in a RON `WorldDef` (see the `dungeon_data` crate). It
//! is validated as a whole first, so a broken file reports every problem at
//! once, and then fed through the [`WorldBuilder`].

use std::fs;
use std::path::Path;

use anyhow::{Context, Result, anyhow, bail};
use log::info;

use dungeon_data::{ItemDef, ItemKindDef, ReflexDef, WorldDef};

use crate::builder::WorldBuilder;
use crate::item::{Item, ItemKind, Monster, Reflex, Strike};
use crate::world::{ItemId, Location, RoomId, World};

/// Load and build the world stored at `path`.
///
/// # Errors
/// Errors bubble up from file IO, deserialization, validation or construction.
pub fn load_world(path: &Path) -> Result<World> {
    let def = load_worlddef(path).context("while loading worlddef from file")?;
    build_world_from_def(&def).context("while building world from worlddef")
}

/// Load a `WorldDef` from a RON file.
///
/// # Errors
/// - the file can't be read or isn't valid RON for a `WorldDef`
pub fn load_worlddef(path: &Path) -> Result<WorldDef> {
    let text = fs::read_to_string(path).with_context(|| format!("reading worlddef from '{}'", path.display()))?;
    parse_worlddef(&text).with_context(|| format!("parsing worlddef RON from '{}'", path.display()))
}

/// Parse a `WorldDef` from RON text.
///
/// # Errors
/// - the text isn't valid RON for a `WorldDef`
pub fn parse_worlddef(text: &str) -> Result<WorldDef> {
    Ok(ron::from_str(text)?)
}

/// Validate the `WorldDef` and return a single aggregated error.
fn validate_worlddef(def: &WorldDef) -> Result<()> {
    let errors = dungeon_data::validate_world(def);
    if errors.is_empty() {
        return Ok(());
    }
    let details = errors
        .into_iter()
        .map(|err| format!("- {err}"))
        .collect::<Vec<_>>()
        .join("\n");
    bail!("worlddef validation failed:\n{details}");
}

/// Convert a `WorldDef` into a ready-to-play `World`.
///
/// # Errors
/// - the definition fails validation
/// - a reference can't be resolved while building
pub fn build_world_from_def(def: &WorldDef) -> Result<World> {
    validate_worlddef(def)?;
    let mut builder = WorldBuilder::new();

    for room in &def.rooms {
        builder.room(&room.id, &room.desc)?;
    }
    for door in &def.doors {
        let from = room_ref(&builder, &door.from)?;
        let to = room_ref(&builder, &door.to)?;
        builder.door(from, to, door.direction, &door.desc)?;
    }
    for item_def in &def.items {
        builder.item(item_from_def(item_def))?;
    }
    for item_def in &def.items {
        let id = item_ref(&builder, &item_def.name)?;
        for reflex in &item_def.reflexes {
            let reflex = reflex_from_def(&builder, reflex)?;
            builder.reflex(id, reflex)?;
        }
    }
    for placement in &def.placements {
        let item = item_ref(&builder, &placement.item)?;
        let within = match builder.room_id(&placement.within) {
            Some(room) => Location::Room(room),
            None => Location::Item(item_ref(&builder, &placement.within)?),
        };
        builder.place(item, within, &placement.label)?;
    }

    let start = room_ref(&builder, &def.game.player.start_room)?;
    builder.start_in(start).hit_points(def.game.player.hit_points);
    let world = builder.build()?;

    info!("{} rooms added to World", world.rooms.len());
    info!("{} doors added to World", world.doors.len());
    info!("{} items added to World", world.items.len());
    info!(
        "player starts in '{}' with {} hit points",
        def.game.player.start_room, world.player.hit_points
    );
    Ok(world)
}

fn room_ref(builder: &WorldBuilder, key: &str) -> Result<RoomId> {
    builder.room_id(key).ok_or_else(|| anyhow!("unknown room '{key}'"))
}

fn item_ref(builder: &WorldBuilder, name: &str) -> Result<ItemId> {
    builder.item_id(name).ok_or_else(|| anyhow!("unknown item '{name}'"))
}

fn item_from_def(def: &ItemDef) -> Item {
    let kind = match &def.kind {
        ItemKindDef::Furniture => ItemKind::Furniture,
        ItemKindDef::Weapon { damage, strike } => ItemKind::Weapon {
            damage: *damage,
            strike: strike.clone(),
        },
        ItemKindDef::Food { taste } => ItemKind::Food { taste: taste.clone() },
        ItemKindDef::Monster {
            dead_desc,
            strike,
            carcass,
        } => ItemKind::Monster(Monster {
            dead_description: dead_desc.clone(),
            strike: strike.as_ref().map(|strike| Strike {
                damage: strike.damage,
                text: strike.text.clone(),
            }),
            carcass: carcass.clone(),
        }),
    };

    let mut item = Item::new(&def.name, &def.desc, kind).with_hit_points(def.hit_points);
    if let Some(portable) = def.portable {
        item = item.portable(portable);
    }
    if let Some(refusal) = &def.refusal {
        item = item.with_refusal(refusal);
    }
    item
}

fn reflex_from_def(builder: &WorldBuilder, def: &ReflexDef) -> Result<Reflex> {
    Ok(match def {
        ReflexDef::Greet { words } => Reflex::Greet { words: words.clone() },
        ReflexDef::Guard { item, words } => Reflex::Guard {
            item: item_ref(builder, item)?,
            words: words.clone(),
        },
        ReflexDef::Confide { cue, words } => Reflex::Confide {
            cue: cue.clone(),
            words: words.clone(),
        },
        ReflexDef::Overhear { cue, words } => Reflex::Overhear {
            cue: cue.clone(),
            words: words.clone(),
        },
        ReflexDef::Pounce { bait, label, text } => Reflex::Pounce {
            bait: item_ref(builder, bait)?,
            label: label.clone(),
            text: text.clone(),
        },
        ReflexDef::Retaliate { words } => Reflex::Retaliate { words: words.clone() },
    })
}
