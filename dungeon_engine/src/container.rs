//! Ordered, labeled item storage.
//!
//! Rooms, items and the player each embed a [`Container`]. It only records
//! *what* sits inside and *how* ("on the floor", "in your bag"); the matching
//! back-reference on the item is kept in step by [`World::place`](crate::World::place).

use crate::world::ItemId;

/// An item together with the phrase describing where it sits in its container.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct PlacedItem {
    pub item: ItemId,
    pub label: String,
}

/// Items held by something, kept in insertion order.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct Container {
    placed: Vec<PlacedItem>,
}

impl Container {
    pub fn new() -> Self {
        Self::default()
    }

    /// Add an item, or relabel it in place if it is already here.
    pub fn insert(&mut self, item: ItemId, label: impl Into<String>) {
        let label = label.into();
        match self.placed.iter_mut().find(|placed| placed.item == item) {
            Some(existing) => existing.label = label,
            None => self.placed.push(PlacedItem { item, label }),
        }
    }

    /// Take an item out, returning its placement if it was here.
    pub fn remove(&mut self, item: ItemId) -> Option<PlacedItem> {
        let index = self.placed.iter().position(|placed| placed.item == item)?;
        Some(self.placed.remove(index))
    }

    pub fn contains(&self, item: ItemId) -> bool {
        self.placed.iter().any(|placed| placed.item == item)
    }

    pub fn label_of(&self, item: ItemId) -> Option<&str> {
        self.placed
            .iter()
            .find(|placed| placed.item == item)
            .map(|placed| placed.label.as_str())
    }

    pub fn placed(&self) -> &[PlacedItem] {
        &self.placed
    }

    pub fn items(&self) -> impl Iterator<Item = ItemId> + '_ {
        self.placed.iter().map(|placed| placed.item)
    }

    pub fn len(&self) -> usize {
        self.placed.len()
    }

    pub fn is_empty(&self) -> bool {
        self.placed.is_empty()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn keeps_insertion_order() {
        let mut container = Container::new();
        container.insert(ItemId(3), "on the floor");
        container.insert(ItemId(1), "against the wall");
        container.insert(ItemId(2), "by the door");
        assert_eq!(container.items().collect::<Vec<_>>(), vec![ItemId(3), ItemId(1), ItemId(2)]);
    }

    #[test]
    fn reinserting_relabels_without_reordering() {
        let mut container = Container::new();
        container.insert(ItemId(0), "on the floor");
        container.insert(ItemId(1), "by the door");
        container.insert(ItemId(0), "against the wall");
        assert_eq!(container.len(), 2);
        assert_eq!(container.label_of(ItemId(0)), Some("against the wall"));
        assert_eq!(container.items().next(), Some(ItemId(0)));
    }

    #[test]
    fn remove_returns_placement() {
        let mut container = Container::new();
        container.insert(ItemId(5), "inside");
        let removed = container.remove(ItemId(5));
        assert_eq!(
            removed,
            Some(PlacedItem {
                item: ItemId(5),
                label: "inside".into()
            })
        );
        assert!(container.is_empty());
        assert_eq!(container.remove(ItemId(5)), None);
    }
}
