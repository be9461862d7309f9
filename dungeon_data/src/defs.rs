use serde::{Deserialize, Serialize};
use std::fmt;

/// Stable identifier used across `WorldDef` references.
///
/// Rooms use lowercase keys (`"kitchen"`); items use their uppercase command token (`"AXE"`).
pub type Id = String;

/// Top-level world content loaded by the engine.
#[derive(Debug, Clone, Serialize, Deserialize, Default)]
pub struct WorldDef {
    pub game: GameDef,
    #[serde(default)]
    pub rooms: Vec<RoomDef>,
    #[serde(default)]
    pub doors: Vec<DoorDef>,
    #[serde(default)]
    pub items: Vec<ItemDef>,
    #[serde(default)]
    pub placements: Vec<PlacementDef>,
}

/// Game-level metadata and startup configuration.
#[derive(Debug, Clone, Serialize, Deserialize, Default)]
pub struct GameDef {
    pub title: String,
    #[serde(default)]
    pub intro: String,
    pub player: PlayerDef,
}

/// Where the player starts and how much punishment they can take.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct PlayerDef {
    pub start_room: Id,
    pub hit_points: i32,
}

impl Default for PlayerDef {
    fn default() -> Self {
        Self {
            start_room: String::new(),
            hit_points: 10,
        }
    }
}

/// A room: just a key and the phrase that completes "You are in ...".
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct RoomDef {
    pub id: Id,
    pub desc: String,
}

/// A door between two rooms. `to` lies in `direction` from `from`; the reverse link is implied.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct DoorDef {
    pub from: Id,
    pub to: Id,
    pub direction: Direction,
    pub desc: String,
}

/// Anything that can be placed somewhere: furniture, weapons, food and monsters.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct ItemDef {
    pub name: Id,
    pub desc: String,
    pub kind: ItemKindDef,
    #[serde(default)]
    pub hit_points: i32,
    /// Defaults to "not a monster" when omitted.
    #[serde(default)]
    pub portable: Option<bool>,
    /// Replaces the stock "Yuck" line when the player tries to eat something inedible.
    #[serde(default)]
    pub refusal: Option<String>,
    #[serde(default)]
    pub reflexes: Vec<ReflexDef>,
}

/// Archetype of an item.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq, Eq)]
pub enum ItemKindDef {
    Furniture,
    Weapon {
        damage: i32,
        strike: String,
    },
    Food {
        taste: String,
    },
    Monster {
        dead_desc: String,
        #[serde(default)]
        strike: Option<StrikeDef>,
        #[serde(default)]
        carcass: Option<String>,
    },
}

/// A monster's attack on the player.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq, Eq)]
pub struct StrikeDef {
    pub damage: i32,
    pub text: String,
}

/// Declarative reaction an item has to what goes on around it.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq, Eq)]
pub enum ReflexDef {
    /// Speak when the player walks into the room.
    Greet { words: String },
    /// Protest when the player tries to take `item` off of this one.
    Guard { item: Id, words: String },
    /// Answer when the player says something containing `cue`.
    Confide { cue: String, words: String },
    /// Answer when another item in the room says something containing `cue`.
    Overhear { cue: String, words: String },
    /// Move onto `bait` when the player drops it.
    Pounce { bait: Id, label: String, text: String },
    /// Speak after surviving an attack.
    Retaliate { words: String },
}

/// Initial placement of an item inside a room or another item.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct PlacementDef {
    pub item: Id,
    pub label: String,
    pub within: Id,
}

/// Compass directions a door can lead.
#[derive(Debug, Clone, Copy, Serialize, Deserialize, PartialEq, Eq, PartialOrd, Ord, Hash)]
pub enum Direction {
    North,
    East,
    South,
    West,
}

impl Direction {
    pub const ALL: [Direction; 4] = [Direction::North, Direction::East, Direction::South, Direction::West];

    /// Parse a full direction word or its single-letter abbreviation, ignoring case.
    pub fn parse(token: &str) -> Option<Direction> {
        match token.to_uppercase().as_str() {
            "N" | "NORTH" => Some(Direction::North),
            "E" | "EAST" => Some(Direction::East),
            "S" | "SOUTH" => Some(Direction::South),
            "W" | "WEST" => Some(Direction::West),
            _ => None,
        }
    }

    pub fn opposite(self) -> Direction {
        match self {
            Direction::North => Direction::South,
            Direction::East => Direction::West,
            Direction::South => Direction::North,
            Direction::West => Direction::East,
        }
    }
}

impl fmt::Display for Direction {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let word = match self {
            Direction::North => "north",
            Direction::East => "east",
            Direction::South => "south",
            Direction::West => "west",
        };
        f.write_str(word)
    }
}
