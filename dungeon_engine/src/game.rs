//! A running game session.
//!
//! [`Game`] owns the [`World`] and threads it through each command: look up
//! the verb, parse the arguments, run the turn, and decide whether the game
//! has ended.

use crate::command::{self, CommandKind};
use crate::text::{DEFAULT_WRAP_WIDTH, Output};
use crate::turn;
use crate::world::World;

use log::info;

pub const GAME_OVER: &str = "The game is over.";

#[derive(Debug, Clone)]
pub struct Game {
    world: World,
    width: usize,
    over: bool,
    turns: usize,
}

impl Game {
    pub fn new(world: World) -> Self {
        Self::with_width(world, DEFAULT_WRAP_WIDTH)
    }

    pub fn with_width(world: World, width: usize) -> Self {
        Self {
            world,
            width,
            over: false,
            turns: 0,
        }
    }

    pub fn world(&self) -> &World {
        &self.world
    }

    pub fn world_mut(&mut self) -> &mut World {
        &mut self.world
    }

    /// Number of turns taken so far. Meta commands and rejected input don't count.
    pub fn turns(&self) -> usize {
        self.turns
    }

    pub fn is_over(&self) -> bool {
        self.over
    }

    /// End the session. Every later command just reports that the game is over.
    pub fn end(&mut self) {
        if !self.over {
            info!("game ended after {} turn(s)", self.turns);
        }
        self.over = true;
    }

    /// Run one line of input and return the text to print.
    pub fn run(&mut self, line: &str) -> String {
        self.execute(line).render(self.width)
    }

    /// Run one line of input.
    pub fn execute(&mut self, line: &str) -> Output {
        if self.over {
            return Output::Raw(GAME_OVER.to_string());
        }

        let tokens: Vec<String> = line.split_whitespace().map(str::to_uppercase).collect();
        let Some(verb) = tokens.first() else {
            return Output::Raw(String::new());
        };
        let Some(command) = command::lookup(verb) else {
            return Output::Raw(format!("Don't know how to {}.", verb.to_lowercase()));
        };

        match command.kind {
            CommandKind::Meta(run) => run(self),
            CommandKind::Turn(parse) => match parse(&self.world, &tokens) {
                Ok(action) => {
                    self.turns += 1;
                    info!("================> TURN {} <================", self.turns);
                    let text = turn::execute(&mut self.world, &action);
                    if !self.world.player.alive() {
                        info!("player died on turn {}", self.turns);
                        self.end();
                    }
                    Output::Wrapped(text)
                },
                Err(bad) => {
                    info!("rejected \"{}\": {bad}", line.trim());
                    Output::Raw(bad.to_string())
                },
            },
        }
    }
}
