//! The read-eval-print loop.
//!
//! Reads a line, hands it to [`Game::run`], prints the result, and stops once
//! the game is over. All game logic lives in [`Game`]; this module only deals
//! with the terminal.

mod input;

use crate::config::EngineConfig;
use crate::game::Game;
use crate::style::GameStyle;

use anyhow::Result;
use log::info;

use input::{InputEvent, InputManager};

pub fn run_repl(game: &mut Game, config: &EngineConfig) -> Result<()> {
    let mut input_manager = InputManager::new(config.history);

    while !game.is_over() {
        let prompt = format!("\n[hp: {}]> ", game.world().player.hit_points)
            .prompt_style()
            .to_string();

        let Ok(input_event) = input_manager.read_line(&prompt) else {
            println!("{}", "Failed to read input. Try again.".error_style());
            continue;
        };

        let input = match input_event {
            InputEvent::Line(line) => line,
            InputEvent::Eof => "quit".to_string(),
            InputEvent::Interrupted => {
                println!("Command canceled.");
                continue;
            },
        };

        let response = game.run(&input);
        if !response.is_empty() {
            println!("{response}");
        }
    }

    info!("leaving the REPL after {} turn(s)", game.turns());
    println!("\n{}", "Thanks for playing.".farewell_style());
    Ok(())
}
