//! Item types and related helpers.
//!
//! Everything the player can pick up, eat, swing or fight is an [`Item`]. Any item
//! can hold other items; what sets furniture, weapons, food and monsters apart
//! is the [`ItemKind`]. Functions here handle state-dependent descriptions and
//! the per-kind rules for eating and being attacked.

use crate::container::{Container, PlacedItem};
use crate::text::{a, capitalize};
use crate::world::{ItemId, Location, World};

use variantly::Variantly;

/// Hit points at or below this leave only a smear on the floor.
pub const BLASTED_THRESHOLD: i32 = -100;

/// Anything in the `World` that can be placed somewhere.
///
/// `name` is the single uppercase token the player types (`"AXE"`), while
/// `description` is the noun phrase used in prose ("heavy dwarven axe").
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Item {
    pub id: ItemId,
    pub name: String,
    pub description: String,
    pub hit_points: i32,
    pub portable: bool,
    pub kind: ItemKind,
    pub location: Location,
    pub contents: Container,
    pub reflexes: Vec<Reflex>,
    /// Replaces the stock complaint when someone tries to eat this.
    pub refusal: Option<String>,
}

/// Archetype of an item.
#[derive(Debug, Clone, PartialEq, Eq, Variantly)]
pub enum ItemKind {
    Furniture,
    Weapon { damage: i32, strike: String },
    Food { taste: String },
    Monster(Monster),
}

/// Extra state only monsters carry.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Monster {
    pub dead_description: String,
    pub strike: Option<Strike>,
    /// What eating the corpse tastes like. Without one the corpse is inedible.
    pub carcass: Option<String>,
}

impl Monster {
    pub fn new(dead_description: &str) -> Self {
        Self {
            dead_description: dead_description.to_string(),
            strike: None,
            carcass: None,
        }
    }

    #[must_use]
    pub fn with_strike(mut self, damage: i32, text: &str) -> Self {
        self.strike = Some(Strike {
            damage,
            text: text.to_string(),
        });
        self
    }

    #[must_use]
    pub fn with_carcass(mut self, taste: &str) -> Self {
        self.carcass = Some(taste.to_string());
        self
    }
}

/// A monster's attack on the player, delivered once per turn.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Strike {
    pub damage: i32,
    pub text: String,
}

/// Declarative reactions an item has to what happens around it.
/// See the hooks in [`crate::reaction`].
#[derive(Debug, Clone, PartialEq, Eq, Variantly)]
pub enum Reflex {
    Greet { words: String },
    Guard { item: ItemId, words: String },
    Confide { cue: String, words: String },
    /// Answers another item that says something containing `cue`.
    Overhear { cue: String, words: String },
    Pounce { bait: ItemId, label: String, text: String },
    Retaliate { words: String },
}

/// What happens when the player tries to eat something.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Eating {
    Swallowed(String),
    Refused(String),
}

impl Item {
    /// A new item of the given kind. Monsters stay put unless told otherwise.
    pub fn new(name: &str, description: &str, kind: ItemKind) -> Self {
        Self {
            id: ItemId(0),
            name: name.to_string(),
            description: description.to_string(),
            hit_points: 0,
            portable: !kind.is_monster(),
            kind,
            location: Location::Nowhere,
            contents: Container::new(),
            reflexes: Vec::new(),
            refusal: None,
        }
    }

    pub fn furniture(name: &str, description: &str) -> Self {
        Self::new(name, description, ItemKind::Furniture).portable(false)
    }

    pub fn weapon(name: &str, description: &str, damage: i32, strike: &str) -> Self {
        Self::new(
            name,
            description,
            ItemKind::Weapon {
                damage,
                strike: strike.to_string(),
            },
        )
    }

    pub fn food(name: &str, description: &str, taste: &str) -> Self {
        Self::new(
            name,
            description,
            ItemKind::Food {
                taste: taste.to_string(),
            },
        )
    }

    pub fn monster(name: &str, description: &str, hit_points: i32, monster: Monster) -> Self {
        Self::new(name, description, ItemKind::Monster(monster)).with_hit_points(hit_points)
    }

    #[must_use]
    pub fn portable(mut self, portable: bool) -> Self {
        self.portable = portable;
        self
    }

    #[must_use]
    pub fn with_hit_points(mut self, hit_points: i32) -> Self {
        self.hit_points = hit_points;
        self
    }

    #[must_use]
    pub fn with_refusal(mut self, refusal: &str) -> Self {
        self.refusal = Some(refusal.to_string());
        self
    }

    #[must_use]
    pub fn with_reflex(mut self, reflex: Reflex) -> Self {
        self.reflexes.push(reflex);
        self
    }

    /// The name as it reads in a sentence ("the axe").
    pub fn noun(&self) -> String {
        self.name.to_lowercase()
    }

    pub fn is_monster(&self) -> bool {
        self.kind.is_monster()
    }

    pub fn alive(&self) -> bool {
        self.hit_points > 0
    }

    pub fn is_blasted(&self) -> bool {
        self.hit_points <= BLASTED_THRESHOLD
    }

    /// Dead monsters don't react to anything. Everything else might.
    pub fn is_active(&self) -> bool {
        !self.is_monster() || self.alive()
    }

    /// The description as it stands right now, taking death into account.
    pub fn describe(&self) -> String {
        match &self.kind {
            ItemKind::Monster(_) if self.is_blasted() => format!("spattering of {} bits", self.noun()),
            ItemKind::Monster(monster) if !self.alive() => monster.dead_description.clone(),
            _ => self.description.clone(),
        }
    }

    /// Damage dealt when swung at something. Only weapons hurt.
    pub fn damage(&self) -> i32 {
        match &self.kind {
            ItemKind::Weapon { damage, .. } => *damage,
            _ => 0,
        }
    }

    pub fn strike(&self) -> Option<&Strike> {
        match &self.kind {
            ItemKind::Monster(monster) => monster.strike.as_ref(),
            _ => None,
        }
    }

    /// Whether this item lets something it holds be taken away.
    pub fn yields(&self, _held: ItemId) -> bool {
        !(self.is_monster() && self.alive())
    }

    /// Why the player can't pick this up, if they can't.
    pub fn take_denied_reason(&self) -> Option<String> {
        (!self.portable).then(|| format!("You can't take the {}.", self.noun()))
    }

    /// Decide what eating this item would mean. Nothing is changed here.
    pub fn eating(&self) -> Eating {
        match &self.kind {
            ItemKind::Food { taste } => Eating::Swallowed(taste.clone()),
            ItemKind::Monster(_) if self.alive() => {
                Eating::Refused(format!("Are you out of your mind?! This is a live {}.", self.noun()))
            },
            ItemKind::Monster(_) if self.is_blasted() => Eating::Refused(format!(
                "The {} is splattered all over the place. There's nothing left to eat.",
                self.noun()
            )),
            ItemKind::Monster(Monster {
                carcass: Some(taste), ..
            }) => Eating::Swallowed(taste.clone()),
            _ => Eating::Refused(
                self.refusal
                    .clone()
                    .unwrap_or_else(|| format!("Yuck. You can't eat {}.", a(&self.describe()))),
            ),
        }
    }

    /// Apply a blow and describe how this item took it.
    pub fn suffer(&mut self, damage: i32) -> String {
        let noun = self.noun();
        if !self.is_monster() {
            return format!("I don't know why you're attacking an innocent {noun}.");
        }

        let was_alive = self.alive();
        self.hit_points = self.hit_points.saturating_sub(damage);
        if self.alive() {
            format!("The {noun} is wounded but still alive. And now it's mad.")
        } else if self.is_blasted() {
            format!("The {noun} is blasted to smithereens.")
        } else if was_alive {
            format!("The {noun} is dead. Good job, murderer.")
        } else {
            format!("The {noun} was already dead, but you hack at it anyway.")
        }
    }
}

/// Describe a placed item and, beneath it, everything it holds.
///
/// Top-level items read "By the door is a wooden chest."; nested ones read
/// "Inside the wooden chest is a jeweled dagger."
pub fn describe_placed(world: &World, placed: &PlacedItem, holder: Option<&Item>, out: &mut Vec<String>) {
    let Some(item) = world.item(placed.item) else {
        return;
    };
    let label = capitalize(&placed.label);
    let sentence = match holder {
        None => format!("{label} is {}.", a(&item.describe())),
        Some(holder) => format!("{label} the {} is {}.", holder.describe(), a(&item.describe())),
    };
    out.push(sentence);
    for child in item.contents.placed() {
        describe_placed(world, child, Some(item), out);
    }
}
