use dungeon_engine as de;
use de::loader::{build_world_from_def, parse_worlddef};
use de::{Action, Game, Item, Location, Monster, Output, Reflex, WorldBuilder};

const CASTLE: &str = include_str!("../data/world.ron");

fn castle() -> Game {
    let def = parse_worlddef(CASTLE).expect("bundled world parses");
    let world = build_world_from_def(&def).expect("bundled world builds");
    Game::new(world)
}

/// The sentences a turn produced, with empty ones dropped.
fn turn(game: &mut Game, line: &str) -> Vec<String> {
    match game.execute(line) {
        Output::Wrapped(parts) => parts.into_iter().filter(|part| !part.is_empty()).collect(),
        Output::Raw(text) => panic!("\"{line}\" did not take a turn: {text}"),
    }
}

fn rejected(game: &mut Game, line: &str) -> String {
    match game.execute(line) {
        Output::Raw(text) => text,
        Output::Wrapped(parts) => panic!("\"{line}\" took a turn: {parts:?}"),
    }
}

fn walk(game: &mut Game, lines: &[&str]) {
    for line in lines {
        turn(game, line);
    }
}

#[test]
fn bundled_world_opens_in_the_entryway() {
    let mut game = castle();
    assert_eq!(
        turn(&mut game, "look"),
        vec![
            "You are in a dusty entryway to a castle. \
             In the center of the room is a stone pedestal. \
             On the stone pedestal is a ring of great power. \
             By the door is a TV tray. \
             On the TV tray is a ham and cheese sandwich. \
             There is an oaken door to the east. \
             There is a dank tunnel to the south."
        ]
    );
    assert_eq!(game.turns(), 1);
}

#[test]
fn take_accepts_a_list_of_items() {
    let mut game = castle();
    assert_eq!(turn(&mut game, "take ring and sandwich"), vec!["You take the ring and the sandwich."]);
    assert_eq!(
        turn(&mut game, "i"),
        vec!["You are carrying a ring of great power and a ham and cheese sandwich."]
    );
    assert_eq!(rejected(&mut game, "take ring"), "No RING here to take.");
}

#[test]
fn furniture_stays_put() {
    let mut game = castle();
    assert_eq!(turn(&mut game, "take pedestal"), vec!["You can't take the pedestal."]);
    assert_eq!(
        turn(&mut game, "get tray and sandwich"),
        vec!["You take the sandwich. You can't take the tray."]
    );
}

#[test]
fn implicit_attack_needs_a_monster() {
    let mut game = castle();
    turn(&mut game, "take ring");
    assert_eq!(rejected(&mut game, "attack with ring"), "Attack what?");
    assert_eq!(game.turns(), 1);
}

#[test]
fn the_blob_strikes_every_turn_until_blasted() {
    let mut game = castle();
    turn(&mut game, "take ring");
    let arrival = turn(&mut game, "s");
    assert_eq!(arrival.len(), 3);
    assert!(arrival[0].starts_with("You go through the dank tunnel to the south. You are in the lair"));
    assert_eq!(arrival[1], "The blobbyblob extrudes a blobby arm and smashes at you!");
    assert_eq!(arrival[2], "You take 3 damage and have 7 hit points left.");

    assert_eq!(rejected(&mut game, "attack with"), "Attack what?");

    assert_eq!(
        turn(&mut game, "attack with ring"),
        vec!["A sphere of light emanates from the ring. The blobbyblob is blasted to smithereens."]
    );
    assert_eq!(
        turn(&mut game, "eat blobbyblob"),
        vec!["The blobbyblob is splattered all over the place. There's nothing left to eat."]
    );
    let look = turn(&mut game, "look");
    assert_eq!(look.len(), 1);
    assert!(look[0].contains("Across from you is a spattering of blobbyblob bits."));
    assert_eq!(game.world().player.hit_points, 7);
}

#[test]
fn a_wounded_blob_keeps_fighting_back() {
    let mut game = castle();
    walk(&mut game, &["s", "take axe"]);
    let swing = turn(&mut game, "attack blobbyblob with axe");
    assert_eq!(
        swing,
        vec![
            "You swing your axe and connect! The blobbyblob is wounded but still alive. And now it's mad.",
            "The blobbyblob extrudes a blobby arm and smashes at you!",
            "You take 3 damage and have 1 hit points left.",
        ]
    );
    let swing = turn(&mut game, "kill blobbyblob with axe");
    assert_eq!(swing.len(), 3);
    assert_eq!(swing[2], "You take 3 damage. You are dead.");
    assert!(game.is_over());
    assert_eq!(game.run("eat blobbyblob"), "The game is over.");
}

#[test]
fn lingering_near_the_blob_is_fatal() {
    let mut game = castle();
    walk(&mut game, &["s", "look", "look"]);
    assert_eq!(game.world().player.hit_points, 1);
    assert!(!game.is_over());
    let last = turn(&mut game, "look");
    assert_eq!(last.last().map(String::as_str), Some("You take 3 damage. You are dead."));
    assert!(game.is_over());
    assert_eq!(game.turns(), 4);
}

#[test]
fn the_pirate_greets_guards_and_confides() {
    let mut game = castle();
    turn(&mut game, "e");
    let arrival = turn(&mut game, "e");
    assert_eq!(arrival.len(), 2);
    assert!(arrival[0].contains(
        "In the middle of the room is a pirate with a wooden leg and an eye patch. \
         On the right shoulder of the pirate with a wooden leg and an eye patch is \
         a green and blue parrot with a tiny eye patch."
    ));
    assert_eq!(arrival[1], "The pirate says, \"Arr, matey!\"");

    assert_eq!(
        turn(&mut game, "take parrot"),
        vec![
            "The pirate won't let you take the parrot.",
            "The pirate says, \"Oi, ye swarthy dog! Hands off me parrot!\"",
        ]
    );
    assert_eq!(
        turn(&mut game, "say what is the magic word"),
        vec![
            "You say, \"What is the magic word?\"",
            "The pirate says, \"Arr, the magic word be 'Frobnicate'!\"",
            "The parrot says, \"Squawk! Frobnicate! Frobnicate!\"",
        ]
    );
    assert_eq!(turn(&mut game, "talk about the weather"), vec!["You say, \"About the weather.\""]);
}

#[test]
fn a_dead_pirate_gives_up_the_parrot() {
    let mut game = castle();
    walk(&mut game, &["e", "e", "take sword"]);
    assert_eq!(
        turn(&mut game, "attack pirate with sword"),
        vec!["Oof, this sword is heavy but you manage to swing it. The pirate is wounded but still alive. And now it's mad."]
    );
    assert_eq!(
        turn(&mut game, "attack pirate with sword"),
        vec!["Oof, this sword is heavy but you manage to swing it. The pirate is dead. Good job, murderer."]
    );
    assert_eq!(turn(&mut game, "take parrot"), vec!["You take the parrot."]);
    let look = turn(&mut game, "look");
    assert!(look[0].contains("In the middle of the room is a dead pirate with his eye patch askew."));
}

#[test]
fn dropped_bread_lures_the_parrot() {
    let mut game = castle();
    walk(&mut game, &["e", "take bread", "e"]);
    assert_eq!(
        turn(&mut game, "drop bread"),
        vec!["You drop the bread.", "The parrot flies down and starts eating the bread."]
    );
    let look = turn(&mut game, "look");
    assert!(look[0].contains(
        "On the floor is a loaf of bread. On the loaf of bread is a green and blue parrot with a tiny eye patch."
    ));
}

#[test]
fn eating_food_leaves_what_was_on_it_behind() {
    let mut game = castle();
    turn(&mut game, "take ring");
    assert_eq!(turn(&mut game, "put ring on sandwich"), vec!["You put the ring on the sandwich."]);
    assert_eq!(
        turn(&mut game, "eat sandwich"),
        vec!["Mmmm, tasty. But I think you got a spot of mustard on your tunic."]
    );
    let look = turn(&mut game, "look");
    assert!(look[0].contains("By the door is a TV tray. On the TV tray is a ring of great power."));
    assert_eq!(rejected(&mut game, "eat sandwich"), "No SANDWICH here to eat.");
}

#[test]
fn weapons_with_custom_refusals() {
    let mut game = castle();
    walk(&mut game, &["e", "e", "take sword"]);
    assert_eq!(
        turn(&mut game, "eat sword"),
        vec!["What are you, a sword swallower?! You can't eat a sword."]
    );
}

#[test]
fn put_refuses_to_nest_an_item_in_itself() {
    let mut game = castle();
    turn(&mut game, "take ring");
    let ring = game.world().item_named("RING").expect("ring exists");
    let text = de::turn::execute(
        game.world_mut(),
        &Action::Put {
            item: ring,
            target: ring,
            label: "on".into(),
        },
    );
    assert_eq!(text[0], "You can't put the ring on the ring. It would end up inside itself.");
    assert_eq!(game.world().item(ring).map(|item| item.location), Some(Location::Player));
}

#[test]
fn reactions_run_in_placement_order_and_cascade() {
    let mut builder = WorldBuilder::new();
    let hall = builder.room("hall", "a hall").unwrap();
    let gallery = builder.room("gallery", "a gallery").unwrap();
    builder.door(hall, gallery, de::Direction::North, "arch").unwrap();

    let owl = builder
        .item(Item::monster("OWL", "owl", 3, Monster::new("dead owl")).with_reflex(Reflex::Greet {
            words: "Hoo.".into(),
        }))
        .unwrap();
    let cat = builder
        .item(
            Item::monster("CAT", "cat", 3, Monster::new("dead cat").with_strike(1, "The cat scratches you."))
                .with_reflex(Reflex::Greet { words: "Mrow.".into() })
                .with_reflex(Reflex::Overhear {
                    cue: "HOO".into(),
                    words: "Hiss!".into(),
                }),
        )
        .unwrap();
    let perch = builder.item(Item::furniture("PERCH", "perch")).unwrap();
    builder.place_in_room(perch, gallery, "in the corner").unwrap();
    builder.place_on(owl, perch, "on").unwrap();
    builder.place_in_room(cat, gallery, "under a bench").unwrap();
    builder.start_in(hall).hit_points(5);

    let mut game = Game::new(builder.build().unwrap());
    let parts = turn(&mut game, "n");
    assert_eq!(parts[1..].to_vec(), vec![
        "The owl says, \"Hoo.\"",
        "The cat says, \"Mrow.\"",
        "The cat says, \"Hiss!\"",
        "The cat scratches you.",
        "You take 1 damage and have 4 hit points left.",
    ]);
    assert!(game.world().item(owl).is_some_and(|item| item.location == Location::Item(perch)));
}

#[test]
fn help_and_quit_are_free() {
    let mut game = castle();
    assert!(rejected(&mut game, "help").starts_with("Commands:"));
    assert_eq!(rejected(&mut game, "dance"), "Don't know how to dance.");
    assert_eq!(rejected(&mut game, "quit"), "Farewell, adventurer.");
    assert!(game.is_over());
    assert_eq!(game.turns(), 0);
}
