//! Data structures representing the game world.
//!
//! This module defines [`World`], the arena that owns every room, door and item
//! plus the player, and the containment operations that keep each item in
//! exactly one place.

use crate::container::{Container, PlacedItem};
use crate::error::{ContainmentError, WorldError};
use crate::item::Item;
use crate::player::Player;
use crate::room::{Direction, Door, Room};

use log::{info, warn};
use variantly::Variantly;

use std::fmt;

/// Index of an item in the world arena.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord)]
pub struct ItemId(pub usize);

/// Index of a room in the world arena.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord, Default)]
pub struct RoomId(pub usize);

/// Index of a door in the world arena.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord)]
pub struct DoorId(pub usize);

impl fmt::Display for ItemId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "item #{}", self.0)
    }
}

impl fmt::Display for RoomId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "room #{}", self.0)
    }
}

impl fmt::Display for DoorId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "door #{}", self.0)
    }
}

/// Kinds of places where an item may be located.
/// Rooms *are* locations, so they never have one of their own.
/// Eaten or otherwise removed items are located `Nowhere`.
#[derive(Copy, Debug, Default, Clone, Variantly, PartialEq, Eq)]
pub enum Location {
    Room(RoomId),
    Item(ItemId),
    Player,
    #[default]
    Nowhere,
}

/// Complete state of the running game.
#[derive(Debug, Clone, Default)]
pub struct World {
    pub rooms: Vec<Room>,
    pub doors: Vec<Door>,
    pub items: Vec<Item>,
    pub player: Player,
}

impl World {
    /// Create an empty world. The player stands in `RoomId(0)` until told otherwise.
    pub fn new() -> World {
        Self::default()
    }

    pub fn add_room(&mut self, key: &str, description: &str) -> RoomId {
        let id = RoomId(self.rooms.len());
        self.rooms.push(Room::new(id, key, description));
        id
    }

    /// Move an item into the arena. It starts out `Nowhere`.
    pub fn add_item(&mut self, mut item: Item) -> ItemId {
        let id = ItemId(self.items.len());
        item.id = id;
        item.location = Location::Nowhere;
        self.items.push(item);
        id
    }

    /// Hang a door between two rooms: `to` lies in `direction` from `from`.
    ///
    /// # Errors
    /// - either room is unknown
    /// - the door would lead back into the room it starts from
    /// - one of the two rooms already has a door on that side
    pub fn connect(
        &mut self,
        from: RoomId,
        to: RoomId,
        direction: Direction,
        description: &str,
    ) -> Result<DoorId, WorldError> {
        for room in [from, to] {
            if self.room(room).is_none() {
                return Err(WorldError::UnknownRoom(room.to_string()));
            }
        }
        if from == to {
            return Err(WorldError::SelfDoor(from));
        }
        for (room, side) in [(from, direction), (to, direction.opposite())] {
            if self.rooms[room.0].doors.contains_key(&side) {
                return Err(WorldError::DoorSlotTaken { room, direction: side });
            }
        }

        let id = DoorId(self.doors.len());
        self.doors.push(Door::new(id, description, from, to));
        self.rooms[from.0].doors.insert(direction, id);
        self.rooms[to.0].doors.insert(direction.opposite(), id);
        Ok(id)
    }

    pub fn room(&self, id: RoomId) -> Option<&Room> {
        self.rooms.get(id.0)
    }

    pub fn item(&self, id: ItemId) -> Option<&Item> {
        self.items.get(id.0)
    }

    pub fn item_mut(&mut self, id: ItemId) -> Option<&mut Item> {
        self.items.get_mut(id.0)
    }

    pub fn door(&self, id: DoorId) -> Option<&Door> {
        self.doors.get(id.0)
    }

    /// Find an item anywhere in the world by its command token.
    pub fn item_named(&self, name: &str) -> Option<ItemId> {
        self.items.iter().find(|item| item.name.eq_ignore_ascii_case(name)).map(|item| item.id)
    }

    /// The room the player is standing in.
    pub fn current_room(&self) -> Option<&Room> {
        self.room(self.player.room)
    }

    /// The player's room as a location.
    pub fn here(&self) -> Location {
        Location::Room(self.player.room)
    }

    /// Where a door on the given side of a room leads.
    pub fn exit(&self, room: RoomId, direction: Direction) -> Option<(DoorId, RoomId)> {
        let door = *self.room(room)?.doors.get(&direction)?;
        let destination = self.door(door)?.from(room)?;
        Some((door, destination))
    }

    pub fn container(&self, location: Location) -> Option<&Container> {
        match location {
            Location::Room(id) => self.rooms.get(id.0).map(|room| &room.contents),
            Location::Item(id) => self.items.get(id.0).map(|item| &item.contents),
            Location::Player => Some(&self.player.inventory),
            Location::Nowhere => None,
        }
    }

    fn container_mut(&mut self, location: Location) -> Option<&mut Container> {
        match location {
            Location::Room(id) => self.rooms.get_mut(id.0).map(|room| &mut room.contents),
            Location::Item(id) => self.items.get_mut(id.0).map(|item| &mut item.contents),
            Location::Player => Some(&mut self.player.inventory),
            Location::Nowhere => None,
        }
    }

    /// Put an item somewhere, taking it out of wherever it was first.
    ///
    /// # Errors
    /// - the item or the location doesn't exist
    /// - the location is the item itself or something inside it
    pub fn place(&mut self, item: ItemId, location: Location, label: impl Into<String>) -> Result<(), ContainmentError> {
        if self.item(item).is_none() {
            return Err(ContainmentError::NoSuchItem(item));
        }
        if self.container(location).is_none() {
            return Err(ContainmentError::NoSuchLocation(location));
        }
        if let Location::Item(target) = location
            && self.is_within(target, item)
        {
            return Err(ContainmentError::Cycle { item, target });
        }

        self.remove(item);
        if let Some(container) = self.container_mut(location) {
            container.insert(item, label);
        }
        if let Some(moved) = self.item_mut(item) {
            moved.location = location;
        }
        Ok(())
    }

    /// Take an item out of its container. It is left `Nowhere`.
    pub fn remove(&mut self, item: ItemId) -> Option<PlacedItem> {
        let location = self.item(item)?.location;
        let placed = self.container_mut(location).and_then(|container| container.remove(item));
        if let Some(removed) = self.item_mut(item) {
            removed.location = Location::Nowhere;
        }
        placed
    }

    /// Remove an item from the game for good. Whatever it held drops into its
    /// former container under the same labels.
    pub fn discard(&mut self, item: ItemId) {
        let Some(doomed) = self.item(item) else {
            return;
        };
        let parent = doomed.location;
        let children = doomed.contents.placed().to_vec();
        let name = doomed.name.clone();

        if !parent.is_nowhere() {
            for child in children {
                if let Err(err) = self.place(child.item, parent, child.label) {
                    warn!("could not lift {} out of '{name}': {err}", child.item);
                }
            }
        }
        self.remove(item);
        info!("'{name}' ({item}) removed from the world");
    }

    /// Items placed directly in a location, in insertion order.
    pub fn children(&self, location: Location) -> &[PlacedItem] {
        self.container(location).map_or(&[][..], Container::placed)
    }

    /// Every item transitively held by a location, depth-first and pre-order.
    pub fn descendants(&self, location: Location) -> Descendants<'_> {
        Descendants {
            world: self,
            stack: self.children(location).iter().rev().collect(),
        }
    }

    /// Find an item by name: direct children first, then inside each child in turn.
    pub fn lookup(&self, location: Location, name: &str) -> Option<ItemId> {
        let children = self.children(location);
        children
            .iter()
            .map(|placed| placed.item)
            .find(|id| self.item(*id).is_some_and(|item| item.name.eq_ignore_ascii_case(name)))
            .or_else(|| {
                children
                    .iter()
                    .find_map(|placed| self.lookup(Location::Item(placed.item), name))
            })
    }

    pub fn room_lookup(&self, name: &str) -> Option<ItemId> {
        self.lookup(self.here(), name)
    }

    pub fn inventory_lookup(&self, name: &str) -> Option<ItemId> {
        self.lookup(Location::Player, name)
    }

    /// Inventory first, then the room.
    pub fn reachable_lookup(&self, name: &str) -> Option<ItemId> {
        self.inventory_lookup(name).or_else(|| self.room_lookup(name))
    }

    /// The only living monster in the room, if there is exactly one.
    pub fn sole_living_monster(&self) -> Option<ItemId> {
        let mut monsters = self
            .descendants(self.here())
            .map(|placed| placed.item)
            .filter(|id| self.item(*id).is_some_and(|item| item.is_monster() && item.alive()));
        let first = monsters.next()?;
        monsters.next().is_none().then_some(first)
    }

    /// The item directly holding this one, if it sits inside an item.
    pub fn holder(&self, item: ItemId) -> Option<&Item> {
        match self.item(item)?.location {
            Location::Item(holder) => self.item(holder),
            _ => None,
        }
    }

    /// Whether the item's current holder lets go of it.
    pub fn can_remove(&self, item: ItemId) -> bool {
        self.holder(item).is_none_or(|holder| holder.yields(item))
    }

    /// True if `candidate` is `ancestor` or sits somewhere inside it.
    pub fn is_within(&self, candidate: ItemId, ancestor: ItemId) -> bool {
        let mut current = Location::Item(candidate);
        for _ in 0..=self.items.len() {
            match current {
                Location::Item(id) if id == ancestor => return true,
                Location::Item(id) => {
                    current = self.item(id).map_or(Location::Nowhere, |item| item.location);
                },
                _ => return false,
            }
        }
        false
    }
}

/// Lazy pre-order walk over everything inside a location.
pub struct Descendants<'a> {
    world: &'a World,
    stack: Vec<&'a PlacedItem>,
}

impl<'a> Iterator for Descendants<'a> {
    type Item = &'a PlacedItem;

    fn next(&mut self) -> Option<Self::Item> {
        let placed = self.stack.pop()?;
        if let Some(item) = self.world.item(placed.item) {
            self.stack.extend(item.contents.placed().iter().rev());
        }
        Some(placed)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::item::{Item, Monster};

    fn world_with_room() -> (World, RoomId) {
        let mut world = World::new();
        let room = world.add_room("hall", "a hall");
        world.player.room = room;
        (world, room)
    }

    fn located_once(world: &World, item: ItemId) -> usize {
        let mut count = usize::from(world.player.inventory.contains(item));
        count += world.rooms.iter().filter(|room| room.contents.contains(item)).count();
        count += world.items.iter().filter(|holder| holder.contents.contains(item)).count();
        count
    }

    #[test]
    fn place_moves_item_and_keeps_one_location() {
        let (mut world, room) = world_with_room();
        let table = world.add_item(Item::furniture("TABLE", "wooden table"));
        let bread = world.add_item(Item::food("BREAD", "loaf of bread", "Tasty."));
        world.place(table, Location::Room(room), "in the center of the room").unwrap();
        world.place(bread, Location::Item(table), "on").unwrap();
        assert_eq!(world.item(bread).unwrap().location, Location::Item(table));

        world.place(bread, Location::Player, "in your bag").unwrap();
        assert_eq!(world.item(bread).unwrap().location, Location::Player);
        assert!(!world.item(table).unwrap().contents.contains(bread));
        assert_eq!(located_once(&world, bread), 1);
    }

    #[test]
    fn place_rejects_cycles_and_missing_locations() {
        let (mut world, room) = world_with_room();
        let chest = world.add_item(Item::furniture("CHEST", "chest"));
        let box_ = world.add_item(Item::furniture("BOX", "box"));
        world.place(chest, Location::Room(room), "on the floor").unwrap();
        world.place(box_, Location::Item(chest), "inside").unwrap();

        assert_eq!(
            world.place(chest, Location::Item(box_), "inside"),
            Err(ContainmentError::Cycle { item: chest, target: box_ })
        );
        assert_eq!(
            world.place(chest, Location::Item(chest), "inside"),
            Err(ContainmentError::Cycle { item: chest, target: chest })
        );
        assert_eq!(
            world.place(chest, Location::Nowhere, "nowhere"),
            Err(ContainmentError::NoSuchLocation(Location::Nowhere))
        );
        assert_eq!(world.item(chest).unwrap().location, Location::Room(room));
    }

    #[test]
    fn lookup_prefers_direct_children() {
        let (mut world, room) = world_with_room();
        let table = world.add_item(Item::furniture("TABLE", "table"));
        let cup = world.add_item(Item::furniture("CUP", "cup"));
        world.place(table, Location::Room(room), "here").unwrap();
        world.place(cup, Location::Item(table), "on").unwrap();

        assert_eq!(world.lookup(Location::Room(room), "CUP"), Some(cup));
        assert_eq!(world.lookup(Location::Room(room), "table"), Some(table));
        assert_eq!(world.lookup(Location::Room(room), "SPOON"), None);
        assert_eq!(world.lookup(Location::Player, "CUP"), None);
    }

    #[test]
    fn descendants_walk_pre_order() {
        let (mut world, room) = world_with_room();
        let a = world.add_item(Item::furniture("A", "a"));
        let b = world.add_item(Item::furniture("B", "b"));
        let c = world.add_item(Item::furniture("C", "c"));
        let d = world.add_item(Item::furniture("D", "d"));
        world.place(a, Location::Room(room), "x").unwrap();
        world.place(b, Location::Item(a), "x").unwrap();
        world.place(c, Location::Item(b), "x").unwrap();
        world.place(d, Location::Room(room), "x").unwrap();

        let order: Vec<ItemId> = world.descendants(Location::Room(room)).map(|p| p.item).collect();
        assert_eq!(order, vec![a, b, c, d]);
    }

    #[test]
    fn discard_lifts_children_into_former_container() {
        let (mut world, room) = world_with_room();
        let tray = world.add_item(Item::furniture("TRAY", "tray"));
        let sandwich = world.add_item(Item::food("SANDWICH", "sandwich", "Yum."));
        world.place(tray, Location::Room(room), "on the floor").unwrap();
        world.place(sandwich, Location::Item(tray), "on").unwrap();

        world.discard(tray);
        assert!(world.item(tray).unwrap().location.is_nowhere());
        assert_eq!(world.item(sandwich).unwrap().location, Location::Room(room));
        assert_eq!(world.rooms[room.0].contents.label_of(sandwich), Some("on"));
    }

    #[test]
    fn living_monsters_hold_on_to_things() {
        let (mut world, room) = world_with_room();
        let pirate = world.add_item(Item::monster("PIRATE", "pirate", 10, Monster::new("dead pirate")));
        let parrot = world.add_item(Item::furniture("PARROT", "parrot"));
        world.place(pirate, Location::Room(room), "across from you").unwrap();
        world.place(parrot, Location::Item(pirate), "on the shoulder of").unwrap();

        assert!(!world.can_remove(parrot));
        assert!(world.can_remove(pirate));
        world.item_mut(pirate).unwrap().hit_points = 0;
        assert!(world.can_remove(parrot));
    }

    #[test]
    fn doors_link_both_ways() {
        let (mut world, hall) = world_with_room();
        let kitchen = world.add_room("kitchen", "a kitchen");
        let door = world.connect(hall, kitchen, Direction::East, "oaken door").unwrap();

        assert_eq!(world.exit(hall, Direction::East), Some((door, kitchen)));
        assert_eq!(world.exit(kitchen, Direction::West), Some((door, hall)));
        assert_eq!(world.exit(hall, Direction::North), None);
        assert_eq!(
            world.connect(hall, kitchen, Direction::East, "second door"),
            Err(WorldError::DoorSlotTaken {
                room: hall,
                direction: Direction::East
            })
        );
        assert_eq!(world.connect(hall, hall, Direction::South, "mirror"), Err(WorldError::SelfDoor(hall)));
    }

    #[test]
    fn sole_living_monster_requires_exactly_one() {
        let (mut world, room) = world_with_room();
        assert_eq!(world.sole_living_monster(), None);
        let blob = world.add_item(Item::monster("BLOB", "blob", 7, Monster::new("dead blob")));
        world.place(blob, Location::Room(room), "here").unwrap();
        assert_eq!(world.sole_living_monster(), Some(blob));
        let rat = world.add_item(Item::monster("RAT", "rat", 1, Monster::new("dead rat")));
        world.place(rat, Location::Room(room), "here").unwrap();
        assert_eq!(world.sole_living_monster(), None);
        world.item_mut(rat).unwrap().hit_points = 0;
        assert_eq!(world.sole_living_monster(), Some(blob));
    }
}
