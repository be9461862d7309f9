//! Rooms and the doors between them.
//!
//! A [`Room`] holds items and up to one door per compass direction. A [`Door`]
//! joins exactly two rooms and can be walked through from either side.

use crate::container::Container;
use crate::item::describe_placed;
use crate::text::a;
use crate::world::{DoorId, RoomId, World};

use std::collections::BTreeMap;

pub use dungeon_data::Direction;

/// A location in the game world.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Room {
    pub id: RoomId,
    /// Short key used by world files and logs (`"kitchen"`).
    pub key: String,
    /// Completes the sentence "You are in ...".
    pub description: String,
    pub contents: Container,
    pub doors: BTreeMap<Direction, DoorId>,
}

impl Room {
    pub fn new(id: RoomId, key: &str, description: &str) -> Self {
        Self {
            id,
            key: key.to_string(),
            description: description.to_string(),
            contents: Container::new(),
            doors: BTreeMap::new(),
        }
    }

    /// Full description of the room: where you are, what's here, and the ways out.
    pub fn describe(&self, world: &World) -> String {
        let mut parts = vec![format!("You are in {}.", self.description)];
        for placed in self.contents.placed() {
            describe_placed(world, placed, None, &mut parts);
        }
        for (direction, door) in &self.doors {
            if let Some(door) = world.door(*door) {
                parts.push(format!("There is {} to the {direction}.", a(&door.description)));
            }
        }
        parts.join(" ")
    }
}

/// A passage between two rooms.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Door {
    pub id: DoorId,
    pub description: String,
    rooms: (RoomId, RoomId),
}

impl Door {
    pub fn new(id: DoorId, description: &str, one: RoomId, other: RoomId) -> Self {
        Self {
            id,
            description: description.to_string(),
            rooms: (one, other),
        }
    }

    /// The room on the far side when entering from `room`.
    pub fn from(&self, room: RoomId) -> Option<RoomId> {
        match self.rooms {
            (one, other) if one == room => Some(other),
            (one, other) if other == room => Some(one),
            _ => None,
        }
    }
}
