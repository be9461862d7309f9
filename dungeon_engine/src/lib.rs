#![warn(clippy::pedantic)]
#![allow(clippy::must_use_candidate)]

// Core modules
pub mod action;
pub mod builder;
pub mod command;
pub mod config;
pub mod container;
pub mod data_paths;
pub mod error;
pub mod game;
pub mod item;
pub mod loader;
pub mod parse;
pub mod player;
pub mod reaction;
pub mod repl;
pub mod room;
pub mod style;
pub mod text;
pub mod turn;
pub mod world;

// Re-exports for convenience
pub use action::Action;
pub use builder::WorldBuilder;
pub use config::EngineConfig;
pub use container::{Container, PlacedItem};
pub use error::{ContainmentError, WorldError};
pub use game::Game;
pub use item::{Item, ItemKind, Monster, Reflex, Strike};
pub use loader::load_world;
pub use parse::{BadCommand, Parse};
pub use player::Player;
pub use repl::run_repl;
pub use room::{Direction, Door, Room};
pub use text::Output;
pub use world::{DoorId, ItemId, Location, RoomId, World};
