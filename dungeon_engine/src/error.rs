//! Errors raised while building or rearranging the world.
//!
//! Mistakes the player makes at the prompt are not errors in this sense; those
//! are [`BadCommand`](crate::parse::BadCommand)s and end up as ordinary text.

use thiserror::Error;

use crate::room::Direction;
use crate::world::{ItemId, Location, RoomId};

/// Why an item could not be placed somewhere.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum ContainmentError {
    #[error("no such item: {0}")]
    NoSuchItem(ItemId),
    #[error("cannot place anything at {0:?}")]
    NoSuchLocation(Location),
    #[error("{item} cannot go inside {target}, which it already contains")]
    Cycle { item: ItemId, target: ItemId },
}

/// Problems found while assembling a world.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum WorldError {
    #[error("unknown room '{0}'")]
    UnknownRoom(String),
    #[error("unknown item '{0}'")]
    UnknownItem(String),
    #[error("duplicate {kind} '{name}'")]
    DuplicateName { kind: &'static str, name: String },
    #[error("{room} already has a door to the {direction}")]
    DoorSlotTaken { room: RoomId, direction: Direction },
    #[error("a door cannot lead from {0} back into itself")]
    SelfDoor(RoomId),
    #[error("world has no starting room")]
    NoStartRoom,
    #[error(transparent)]
    Containment(#[from] ContainmentError),
}
