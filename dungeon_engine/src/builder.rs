//! Programmatic construction of worlds.
//!
//! [`WorldBuilder`] is the content API: add rooms, hang doors, create items
//! and place them, then [`build`](WorldBuilder::build). Names and keys are
//! checked for uniqueness as they arrive, so the finished world can be
//! searched by name unambiguously.

use crate::error::WorldError;
use crate::item::{Item, Reflex};
use crate::player::DEFAULT_HIT_POINTS;
use crate::room::Direction;
use crate::world::{DoorId, ItemId, Location, RoomId, World};

use log::info;

use std::collections::HashMap;

#[derive(Debug, Default)]
pub struct WorldBuilder {
    world: World,
    rooms: HashMap<String, RoomId>,
    items: HashMap<String, ItemId>,
    start: Option<RoomId>,
    hit_points: Option<i32>,
}

impl WorldBuilder {
    pub fn new() -> Self {
        Self::default()
    }

    /// Add a room under a unique key.
    ///
    /// # Errors
    /// - a room with this key already exists
    pub fn room(&mut self, key: &str, description: &str) -> Result<RoomId, WorldError> {
        if self.rooms.contains_key(key) {
            return Err(WorldError::DuplicateName {
                kind: "room",
                name: key.to_string(),
            });
        }
        let id = self.world.add_room(key, description);
        self.rooms.insert(key.to_string(), id);
        Ok(id)
    }

    /// Join two rooms with a door; `to` lies in `direction` from `from`.
    ///
    /// # Errors
    /// - see [`World::connect`]
    pub fn door(&mut self, from: RoomId, to: RoomId, direction: Direction, description: &str) -> Result<DoorId, WorldError> {
        self.world.connect(from, to, direction, description)
    }

    /// Add an item. It exists but sits nowhere until placed.
    ///
    /// # Errors
    /// - an item with the same name (ignoring case) already exists
    pub fn item(&mut self, item: Item) -> Result<ItemId, WorldError> {
        let key = item.name.to_uppercase();
        if self.items.contains_key(&key) {
            return Err(WorldError::DuplicateName {
                kind: "item",
                name: item.name,
            });
        }
        let id = self.world.add_item(item);
        self.items.insert(key, id);
        Ok(id)
    }

    /// Give an existing item another reflex.
    ///
    /// # Errors
    /// - the item doesn't exist
    pub fn reflex(&mut self, item: ItemId, reflex: Reflex) -> Result<(), WorldError> {
        let target = self
            .world
            .item_mut(item)
            .ok_or_else(|| WorldError::UnknownItem(item.to_string()))?;
        target.reflexes.push(reflex);
        Ok(())
    }

    /// # Errors
    /// - see [`World::place`]
    pub fn place(&mut self, item: ItemId, within: Location, label: &str) -> Result<(), WorldError> {
        Ok(self.world.place(item, within, label)?)
    }

    /// Place an item in a room.
    ///
    /// # Errors
    /// - see [`World::place`]
    pub fn place_in_room(&mut self, item: ItemId, room: RoomId, label: &str) -> Result<(), WorldError> {
        self.place(item, Location::Room(room), label)
    }

    /// Place an item on (or in, or under) another item.
    ///
    /// # Errors
    /// - see [`World::place`]
    pub fn place_on(&mut self, item: ItemId, holder: ItemId, label: &str) -> Result<(), WorldError> {
        self.place(item, Location::Item(holder), label)
    }

    pub fn start_in(&mut self, room: RoomId) -> &mut Self {
        self.start = Some(room);
        self
    }

    pub fn hit_points(&mut self, hit_points: i32) -> &mut Self {
        self.hit_points = Some(hit_points);
        self
    }

    pub fn room_id(&self, key: &str) -> Option<RoomId> {
        self.rooms.get(key).copied()
    }

    pub fn item_id(&self, name: &str) -> Option<ItemId> {
        self.items.get(&name.to_uppercase()).copied()
    }

    /// Finish the world with the player in the starting room.
    ///
    /// # Errors
    /// - no starting room was given, or it doesn't exist
    pub fn build(self) -> Result<World, WorldError> {
        let start = self.start.ok_or(WorldError::NoStartRoom)?;
        let mut world = self.world;
        if world.room(start).is_none() {
            return Err(WorldError::UnknownRoom(start.to_string()));
        }
        world.player.room = start;
        world.player.hit_points = self.hit_points.unwrap_or(DEFAULT_HIT_POINTS);
        info!(
            "world built: {} room(s), {} door(s), {} item(s)",
            world.rooms.len(),
            world.doors.len(),
            world.items.len()
        );
        Ok(world)
    }
}
