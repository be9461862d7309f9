//! How items respond to what goes on around them.
//!
//! Each hook answers one kind of [`Action`] with the reactions it provokes
//! from this item. Hooks only look; nothing changes until the turn executor
//! evaluates what they return. [`Action::reactions_from`] picks the hook and
//! skips dead monsters before any of these run.

use crate::action::Action;
use crate::item::{Item, Reflex};
use crate::world::{ItemId, Location};

impl Item {
    /// The player walked into the room.
    pub fn on_enter(&self) -> Vec<Action> {
        self.reflexes
            .iter()
            .filter_map(|reflex| match reflex {
                Reflex::Greet { words } => Some(self.says(words)),
                _ => None,
            })
            .collect()
    }

    /// The player reached for `taken`. Guards object while the item is still on them.
    pub fn on_take(&self, taken: &[ItemId]) -> Vec<Action> {
        self.reflexes
            .iter()
            .filter_map(|reflex| match reflex {
                Reflex::Guard { item, words } if taken.contains(item) && self.contents.contains(*item) => {
                    Some(self.says(words))
                },
                _ => None,
            })
            .collect()
    }

    /// The player put `dropped` down. Anything baited by one of them goes after it.
    pub fn on_drop(&self, dropped: &[ItemId]) -> Vec<Action> {
        self.reflexes
            .iter()
            .filter_map(|reflex| match reflex {
                Reflex::Pounce { bait, label, text } if dropped.contains(bait) => Some(Action::Move {
                    item: self.id,
                    destination: Location::Item(*bait),
                    label: label.clone(),
                    text: text.clone(),
                }),
                _ => None,
            })
            .collect()
    }

    /// The player said `words` out loud.
    pub fn on_talk(&self, words: &str) -> Vec<Action> {
        let heard = words.to_uppercase();
        self.reflexes
            .iter()
            .filter_map(|reflex| match reflex {
                Reflex::Confide { cue, words } if heard.contains(&cue.to_uppercase()) => Some(self.says(words)),
                _ => None,
            })
            .collect()
    }

    /// Another item said `words`. Nobody answers themselves.
    pub fn on_say(&self, speaker: ItemId, words: &str) -> Vec<Action> {
        if speaker == self.id {
            return Vec::new();
        }
        let heard = words.to_uppercase();
        self.reflexes
            .iter()
            .filter_map(|reflex| match reflex {
                Reflex::Overhear { cue, words } if heard.contains(&cue.to_uppercase()) => Some(self.says(words)),
                _ => None,
            })
            .collect()
    }

    /// Something was attacked. Only the target itself answers.
    pub fn on_attack(&self, target: ItemId) -> Vec<Action> {
        if target != self.id || !self.alive() {
            return Vec::new();
        }
        self.reflexes
            .iter()
            .filter_map(|reflex| match reflex {
                Reflex::Retaliate { words } => Some(self.says(words)),
                _ => None,
            })
            .collect()
    }

    /// Time passed. Living monsters with an attack use it.
    pub fn on_turn(&self) -> Vec<Action> {
        if self.alive() && self.strike().is_some() {
            vec![Action::Strike { attacker: self.id }]
        } else {
            Vec::new()
        }
    }

    fn says(&self, words: &str) -> Action {
        Action::Say {
            speaker: self.id,
            words: words.to_string(),
        }
    }
}
