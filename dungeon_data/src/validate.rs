use std::collections::{HashMap, HashSet};
use std::fmt;

use crate::*;

/// Tokens the command parser reserves; an item named after one could never be referred to.
const RESERVED_TOKENS: &[&str] = &["AND", "WITH"];

/// Validation error for malformed or missing references in a `WorldDef`.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum ValidationError {
    DuplicateId { kind: &'static str, id: String },
    MissingReference { kind: &'static str, id: String, context: String },
    DoorSlotTaken { room: String, direction: Direction },
    InvalidValue { context: String },
}

impl fmt::Display for ValidationError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            ValidationError::DuplicateId { kind, id } => {
                write!(f, "duplicate {kind} id '{id}'")
            },
            ValidationError::MissingReference { kind, id, context } => {
                write!(f, "missing {kind} '{id}' ({context})")
            },
            ValidationError::DoorSlotTaken { room, direction } => {
                write!(f, "room '{room}' has more than one door to the {direction}")
            },
            ValidationError::InvalidValue { context } => {
                write!(f, "invalid value ({context})")
            },
        }
    }
}

impl std::error::Error for ValidationError {}

/// Validate cross-references and basic invariants in a `WorldDef`.
///
/// ```
/// use dungeon_data::{GameDef, PlayerDef, RoomDef, WorldDef, validate_world};
///
/// let world = WorldDef {
///     game: GameDef {
///         title: "Demo".into(),
///         intro: "Intro".into(),
///         player: PlayerDef {
///             start_room: "start".into(),
///             hit_points: 10,
///         },
///     },
///     rooms: vec![RoomDef {
///         id: "start".into(),
///         desc: "a room".into(),
///     }],
///     ..WorldDef::default()
/// };
/// assert!(validate_world(&world).is_empty());
/// ```
pub fn validate_world(world: &WorldDef) -> Vec<ValidationError> {
    let mut errors = Vec::new();

    let mut rooms = HashSet::new();
    let mut items = HashSet::new();

    track_ids("room", world.rooms.iter().map(|r| r.id.as_str()), &mut rooms, &mut errors);
    track_ids("item", world.items.iter().map(|i| i.name.as_str()), &mut items, &mut errors);

    if world.game.player.start_room.trim().is_empty() {
        errors.push(ValidationError::InvalidValue {
            context: "player start room missing".to_string(),
        });
    } else {
        check_ref(
            "room",
            &world.game.player.start_room,
            &rooms,
            "player start room".to_string(),
            &mut errors,
        );
    }
    if world.game.player.hit_points <= 0 {
        errors.push(ValidationError::InvalidValue {
            context: format!("player starts dead ({} hit points)", world.game.player.hit_points),
        });
    }

    for item in &world.items {
        validate_item_name(&item.name, &mut errors);
        for reflex in &item.reflexes {
            match reflex {
                ReflexDef::Guard { item: guarded, .. } => {
                    check_ref("item", guarded, &items, format!("item '{}' guard", item.name), &mut errors);
                },
                ReflexDef::Pounce { bait, .. } => {
                    check_ref("item", bait, &items, format!("item '{}' pounce", item.name), &mut errors);
                },
                ReflexDef::Greet { .. }
                | ReflexDef::Confide { .. }
                | ReflexDef::Overhear { .. }
                | ReflexDef::Retaliate { .. } => {},
            }
        }
    }

    validate_doors(world, &rooms, &mut errors);
    validate_placements(world, &rooms, &items, &mut errors);

    errors
}

fn validate_item_name(name: &str, errors: &mut Vec<ValidationError>) {
    if name.is_empty() || name.chars().any(char::is_whitespace) {
        errors.push(ValidationError::InvalidValue {
            context: format!("item name '{name}' must be a single word"),
        });
    } else if name != name.to_uppercase() {
        errors.push(ValidationError::InvalidValue {
            context: format!("item name '{name}' must be uppercase"),
        });
    } else if RESERVED_TOKENS.contains(&name) || Direction::parse(name).is_some() {
        errors.push(ValidationError::InvalidValue {
            context: format!("item name '{name}' collides with a command keyword"),
        });
    }
}

fn validate_doors(world: &WorldDef, rooms: &HashSet<String>, errors: &mut Vec<ValidationError>) {
    let mut slots = HashSet::new();
    for door in &world.doors {
        let context = format!("door '{}'", door.desc);
        check_ref("room", &door.from, rooms, context.clone(), errors);
        check_ref("room", &door.to, rooms, context, errors);
        if door.from == door.to {
            errors.push(ValidationError::InvalidValue {
                context: format!("door '{}' leads from '{}' back into itself", door.desc, door.from),
            });
            continue;
        }
        for (room, direction) in [(&door.from, door.direction), (&door.to, door.direction.opposite())] {
            if !slots.insert((room.as_str(), direction)) {
                errors.push(ValidationError::DoorSlotTaken {
                    room: room.clone(),
                    direction,
                });
            }
        }
    }
}

fn validate_placements(
    world: &WorldDef,
    rooms: &HashSet<String>,
    items: &HashSet<String>,
    errors: &mut Vec<ValidationError>,
) {
    let mut placed = HashSet::new();
    // item -> the item it sits in, for cycle detection
    let mut holders: HashMap<&str, &str> = HashMap::new();

    for placement in &world.placements {
        check_ref(
            "item",
            &placement.item,
            items,
            format!("placement within '{}'", placement.within),
            errors,
        );
        if !rooms.contains(&placement.within) && !items.contains(&placement.within) {
            errors.push(ValidationError::MissingReference {
                kind: "room or item",
                id: placement.within.clone(),
                context: format!("placement of '{}'", placement.item),
            });
        }
        if !placed.insert(placement.item.as_str()) {
            errors.push(ValidationError::InvalidValue {
                context: format!("item '{}' placed more than once", placement.item),
            });
        }
        if items.contains(&placement.within) {
            holders.insert(placement.item.as_str(), placement.within.as_str());
        }
    }

    for start in holders.keys() {
        let mut current = *start;
        for _ in 0..holders.len() {
            let Some(next) = holders.get(current) else {
                break;
            };
            if next == start {
                errors.push(ValidationError::InvalidValue {
                    context: format!("item '{start}' ends up inside itself"),
                });
                break;
            }
            current = next;
        }
    }
}

/// Holds the set of known identifiers for one kind of entity.
fn track_ids<'a>(
    kind: &'static str,
    ids: impl Iterator<Item = &'a str>,
    set: &mut HashSet<String>,
    errors: &mut Vec<ValidationError>,
) {
    for id in ids {
        if !set.insert(id.to_string()) {
            errors.push(ValidationError::DuplicateId {
                kind,
                id: id.to_string(),
            });
        }
    }
}

fn check_ref(kind: &'static str, id: &str, set: &HashSet<String>, context: String, errors: &mut Vec<ValidationError>) {
    if !set.contains(id) {
        errors.push(ValidationError::MissingReference {
            kind,
            id: id.to_string(),
            context,
        });
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn room(id: &str) -> RoomDef {
        RoomDef {
            id: id.to_string(),
            desc: format!("room {id}"),
        }
    }

    fn furniture(name: &str) -> ItemDef {
        ItemDef {
            name: name.to_string(),
            desc: format!("plain {}", name.to_lowercase()),
            kind: ItemKindDef::Furniture,
            hit_points: 0,
            portable: Some(false),
            refusal: None,
            reflexes: Vec::new(),
        }
    }

    fn place(item: &str, within: &str) -> PlacementDef {
        PlacementDef {
            item: item.to_string(),
            label: "on".to_string(),
            within: within.to_string(),
        }
    }

    fn base_world() -> WorldDef {
        WorldDef {
            game: GameDef {
                title: "Demo".into(),
                intro: "Intro".into(),
                player: PlayerDef {
                    start_room: "start".into(),
                    hit_points: 10,
                },
            },
            rooms: vec![room("start"), room("hall")],
            ..WorldDef::default()
        }
    }

    #[test]
    fn clean_world_has_no_errors() {
        let mut world = base_world();
        world.items = vec![furniture("TABLE"), furniture("CUP")];
        world.placements = vec![place("TABLE", "start"), place("CUP", "TABLE")];
        world.doors = vec![DoorDef {
            from: "start".into(),
            to: "hall".into(),
            direction: Direction::North,
            desc: "arch".into(),
        }];
        assert!(validate_world(&world).is_empty());
    }

    #[test]
    fn duplicate_ids_are_reported() {
        let mut world = base_world();
        world.rooms = vec![room("start"), room("start")];
        world.items = vec![furniture("CUP"), furniture("CUP")];

        let errors = validate_world(&world);
        assert!(
            errors
                .iter()
                .any(|err| matches!(err, ValidationError::DuplicateId { kind, id } if *kind == "room" && id == "start"))
        );
        assert!(
            errors
                .iter()
                .any(|err| matches!(err, ValidationError::DuplicateId { kind, id } if *kind == "item" && id == "CUP"))
        );
    }

    #[test]
    fn missing_references_are_reported() {
        let mut world = base_world();
        world.items = vec![furniture("LAMP")];
        world.placements = vec![place("LAMP", "attic")];

        let errors = validate_world(&world);
        assert!(errors.iter().any(
            |err| matches!(err, ValidationError::MissingReference { id, .. } if id == "attic")
        ));
    }

    #[test]
    fn conflicting_door_slots_are_reported() {
        let mut world = base_world();
        world.rooms.push(room("cellar"));
        world.doors = vec![
            DoorDef {
                from: "start".into(),
                to: "hall".into(),
                direction: Direction::East,
                desc: "oaken door".into(),
            },
            DoorDef {
                from: "cellar".into(),
                to: "start".into(),
                direction: Direction::West,
                desc: "trapdoor".into(),
            },
        ];

        let errors = validate_world(&world);
        assert_eq!(
            errors,
            vec![ValidationError::DoorSlotTaken {
                room: "start".into(),
                direction: Direction::East,
            }]
        );
    }

    #[test]
    fn self_door_is_rejected() {
        let mut world = base_world();
        world.doors = vec![DoorDef {
            from: "start".into(),
            to: "start".into(),
            direction: Direction::South,
            desc: "mirror".into(),
        }];
        assert_eq!(validate_world(&world).len(), 1);
    }

    #[test]
    fn bad_item_names_are_rejected() {
        let mut world = base_world();
        world.items = vec![furniture("AND"), furniture("lamp"), furniture("TWO WORDS"), furniture("N")];
        let errors = validate_world(&world);
        assert_eq!(errors.len(), 4);
        assert!(errors.iter().all(|err| matches!(err, ValidationError::InvalidValue { .. })));
    }

    #[test]
    fn containment_cycles_and_double_placement_are_rejected() {
        let mut world = base_world();
        world.items = vec![furniture("BOX"), furniture("BAG")];
        world.placements = vec![place("BOX", "BAG"), place("BAG", "BOX"), place("BOX", "start")];

        let errors = validate_world(&world);
        assert!(errors.iter().any(
            |err| matches!(err, ValidationError::InvalidValue { context } if context.contains("placed more than once"))
        ));
        assert!(errors.iter().any(
            |err| matches!(err, ValidationError::InvalidValue { context } if context.contains("inside itself"))
        ));
    }

    #[test]
    fn dangling_reflex_targets_are_reported() {
        let mut world = base_world();
        let mut pirate = furniture("PIRATE");
        pirate.reflexes.push(ReflexDef::Guard {
            item: "PARROT".into(),
            words: "Hands off!".into(),
        });
        world.items = vec![pirate];

        let errors = validate_world(&world);
        assert!(errors.iter().any(
            |err| matches!(err, ValidationError::MissingReference { kind, id, .. } if *kind == "item" && id == "PARROT")
        ));
    }

    #[test]
    fn player_must_start_alive_somewhere() {
        let mut world = base_world();
        world.game.player.start_room = "nowhere".into();
        world.game.player.hit_points = 0;
        assert_eq!(validate_world(&world).len(), 2);
    }
}
