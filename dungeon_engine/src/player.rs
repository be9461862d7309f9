//! Player -- the adventurer, their bag and their health.
use crate::container::Container;
use crate::world::RoomId;

/// Label for anything the player is carrying.
pub const INVENTORY_LABEL: &str = "in your bag";
/// Label for anything the player drops.
pub const FLOOR_LABEL: &str = "on the floor";

pub const DEFAULT_HIT_POINTS: i32 = 10;

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Player {
    pub room: RoomId,
    pub hit_points: i32,
    pub inventory: Container,
}

impl Default for Player {
    fn default() -> Player {
        Self::new(RoomId::default(), DEFAULT_HIT_POINTS)
    }
}

/// The parts of the player that are compared before and after a turn.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct PlayerState {
    pub hit_points: i32,
}

impl Player {
    pub fn new(room: RoomId, hit_points: i32) -> Self {
        Self {
            room,
            hit_points,
            inventory: Container::new(),
        }
    }

    pub fn state(&self) -> PlayerState {
        PlayerState {
            hit_points: self.hit_points,
        }
    }

    pub fn alive(&self) -> bool {
        self.hit_points > 0
    }

    pub fn take_damage(&mut self, damage: i32) {
        self.hit_points = self.hit_points.saturating_sub(damage);
    }

    /// Report anything about the player that got worse since `before`.
    pub fn state_changes(&self, before: &PlayerState) -> Option<String> {
        let lost = before.hit_points.saturating_sub(self.hit_points);
        if lost <= 0 {
            None
        } else if self.alive() {
            Some(format!(
                "You take {lost} damage and have {} hit points left.",
                self.hit_points
            ))
        } else {
            Some(format!("You take {lost} damage. You are dead."))
        }
    }
}
