//! Command module
//!
//! The verb table. Turn commands parse their arguments into an [`Action`] and
//! take a turn; meta commands act on the session directly and never advance
//! the clock.

use crate::action::Action;
use crate::game::Game;
use crate::parse::{BadCommand, WITH, arg, direction, items, rest};
use crate::room::Direction;
use crate::text::Output;
use crate::world::World;

/// Parses the full token list (verb included) into an action.
pub type TurnParser = fn(&World, &[String]) -> Result<Action, BadCommand>;
/// Runs against the session itself.
pub type MetaCommand = fn(&mut Game) -> Output;

#[derive(Debug, Clone, Copy)]
pub enum CommandKind {
    Turn(TurnParser),
    Meta(MetaCommand),
}

/// One entry in the verb table.
#[derive(Debug)]
pub struct Command {
    pub verbs: &'static [&'static str],
    pub usage: &'static str,
    pub kind: CommandKind,
}

pub static COMMANDS: &[Command] = &[
    Command {
        verbs: &["GO", "WALK", "MOVE"],
        usage: "GO <direction>",
        kind: CommandKind::Turn(parse_go),
    },
    Command {
        verbs: &["TAKE", "GET"],
        usage: "TAKE <item> [AND <item>...]",
        kind: CommandKind::Turn(parse_take),
    },
    Command {
        verbs: &["DROP"],
        usage: "DROP <item> [AND <item>...]",
        kind: CommandKind::Turn(parse_drop),
    },
    Command {
        verbs: &["EAT"],
        usage: "EAT <item>",
        kind: CommandKind::Turn(parse_eat),
    },
    Command {
        verbs: &["ATTACK", "HIT", "KILL"],
        usage: "ATTACK [<monster>] WITH <weapon>",
        kind: CommandKind::Turn(parse_attack),
    },
    Command {
        verbs: &["PUT", "PLACE"],
        usage: "PUT <item> ON|IN|UNDER <item>",
        kind: CommandKind::Turn(parse_put),
    },
    Command {
        verbs: &["SAY", "TALK"],
        usage: "SAY <words>",
        kind: CommandKind::Turn(parse_say),
    },
    Command {
        verbs: &["LOOK", "L"],
        usage: "LOOK",
        kind: CommandKind::Turn(parse_look),
    },
    Command {
        verbs: &["INVENTORY", "I", "INV"],
        usage: "INVENTORY",
        kind: CommandKind::Turn(parse_inventory),
    },
    Command {
        verbs: &["HELP"],
        usage: "HELP",
        kind: CommandKind::Meta(help),
    },
    Command {
        verbs: &["QUIT"],
        usage: "QUIT",
        kind: CommandKind::Meta(quit),
    },
];

/// A bare direction ("N", "EAST") walks that way.
static WALK_SHORTCUT: Command = Command {
    verbs: &[],
    usage: "<direction>",
    kind: CommandKind::Turn(parse_direction_shortcut),
};

/// Find the command for a verb, ignoring case.
pub fn lookup(verb: &str) -> Option<&'static Command> {
    COMMANDS
        .iter()
        .find(|command| command.verbs.iter().any(|v| v.eq_ignore_ascii_case(verb)))
        .or_else(|| Direction::parse(verb).map(|_| &WALK_SHORTCUT))
}

fn parse_go(world: &World, args: &[String]) -> Result<Action, BadCommand> {
    walk(world, args, 1)
}

fn parse_direction_shortcut(world: &World, args: &[String]) -> Result<Action, BadCommand> {
    walk(world, args, 0)
}

fn walk(world: &World, args: &[String], at: usize) -> Result<Action, BadCommand> {
    let room = world.player.room;
    direction(args, at)
        .or_else(|token| format!("Don't know how to go {token}."))
        .maybe(|dir| world.exit(room, dir).map(|(door, destination)| (dir, door, destination)))
        .or_else(|dir| format!("No door to the {dir}."))
        .or("Go where?")
        .to_action(|(direction, door, destination)| {
            Ok(Action::Go {
                direction,
                door,
                destination,
            })
        })
}

fn parse_take(world: &World, args: &[String]) -> Result<Action, BadCommand> {
    items(args, 1, |token| world.room_lookup(token))
        .or_else(|token| format!("No {token} here to take."))
        .or("Take what?")
        .to_action(|items| Ok(Action::Take { items }))
}

fn parse_drop(world: &World, args: &[String]) -> Result<Action, BadCommand> {
    items(args, 1, |token| world.inventory_lookup(token))
        .or_else(|token| format!("You aren't carrying any {token}."))
        .or("Drop what?")
        .to_action(|items| Ok(Action::Drop { items }))
}

fn parse_eat(world: &World, args: &[String]) -> Result<Action, BadCommand> {
    arg(args, 1)
        .maybe(|token| world.reachable_lookup(token))
        .or_else(|token| format!("No {token} here to eat."))
        .or("Eat what?")
        .to_action(|item| Ok(Action::Eat { item }))
}

/// `ATTACK X WITH Y`, or `ATTACK WITH Y` when only one monster could be meant.
/// A bare `ATTACK WITH` names neither, so the target is what's missing.
fn parse_attack(world: &World, args: &[String]) -> Result<Action, BadCommand> {
    let implicit = args.get(1).is_some_and(|token| token == WITH);
    let with_at = if implicit { 1 } else { 2 };

    let target = if implicit {
        arg(args, 1).maybe(|_| if args.len() > 2 { world.sole_living_monster() } else { None })
    } else {
        arg(args, 1)
            .maybe(|token| world.room_lookup(token))
            .or_else(|token| format!("No {token} here to attack."))
    }
    .or("Attack what?");

    let weapon = arg(args, with_at)
        .expect(WITH)
        .maybe(|_| args.get(with_at + 1).map(String::as_str))
        .maybe(|token| world.inventory_lookup(token))
        .or_else(|token| format!("You aren't carrying any {token}."))
        .or("Attack with what?");

    target
        .zip(weapon)
        .to_action(|(target, weapon)| Ok(Action::Attack { target, weapon }))
}

fn placement_label(token: &str) -> Option<&'static str> {
    match token {
        "ON" | "ONTO" => Some("on"),
        "IN" | "INTO" | "INSIDE" => Some("in"),
        "UNDER" => Some("under"),
        _ => None,
    }
}

fn parse_put(world: &World, args: &[String]) -> Result<Action, BadCommand> {
    let item = arg(args, 1)
        .maybe(|token| world.inventory_lookup(token))
        .or_else(|token| format!("You aren't carrying any {token}."))
        .or("Put what?");

    let label = arg(args, 2)
        .maybe(placement_label)
        .or_else(|token| format!("Can't put anything {} something.", token.to_lowercase()))
        .or("Put it where?");

    let preposition = args.get(2).and_then(|token| placement_label(token)).unwrap_or("on");
    let target = arg(args, 3)
        .maybe(|token| world.room_lookup(token))
        .or_else(|token| format!("No {token} here."))
        .or(format!("Put it {preposition} what?"));

    item.zip(label).zip(target).to_action(|((item, label), target)| {
        Ok(Action::Put {
            item,
            target,
            label: label.to_string(),
        })
    })
}

fn parse_say(_world: &World, args: &[String]) -> Result<Action, BadCommand> {
    rest(args, 1).or("Say what?").to_action(|words| Ok(Action::Talk { words }))
}

fn parse_look(_world: &World, _args: &[String]) -> Result<Action, BadCommand> {
    Ok(Action::Look)
}

fn parse_inventory(_world: &World, _args: &[String]) -> Result<Action, BadCommand> {
    Ok(Action::Inventory)
}

fn help(_game: &mut Game) -> Output {
    let mut lines = vec!["Commands:".to_string()];
    for command in COMMANDS {
        let aliases = command.verbs.get(1..).unwrap_or_default();
        if aliases.is_empty() {
            lines.push(format!("  {}", command.usage));
        } else {
            lines.push(format!("  {:<34} (also {})", command.usage, aliases.join(", ")));
        }
    }
    lines.push("  N, E, S, W                         (walk that way)".to_string());
    Output::Raw(lines.join("\n"))
}

fn quit(game: &mut Game) -> Output {
    game.end();
    Output::Raw("Farewell, adventurer.".to_string())
}
