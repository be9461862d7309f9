#![warn(clippy::pedantic)]
#![allow(clippy::must_use_candidate)]
//! ** Dungeon **
//! A line-command dungeon crawl

use dungeon_engine::loader::{build_world_from_def, load_worlddef};
use dungeon_engine::style::{GameStyle, set_color_enabled};
use dungeon_engine::text::wrap;
use dungeon_engine::{EngineConfig, Game, run_repl};

use anyhow::{Context, Result};
use log::info;

use std::io::Write;

fn main() -> Result<()> {
    env_logger::init();
    let config = EngineConfig::load().context("while loading engine config")?;
    set_color_enabled(config.color);

    let world_path = config.world_path();
    info!("Start: loading world from '{}'...", world_path.display());
    let def = load_worlddef(&world_path).context("while loading dungeon world")?;
    let world = build_world_from_def(&def).context("while building dungeon world")?;
    info!("World loaded successfully.");

    // clear the screen
    print!("\x1B[2J\x1B[H");
    std::io::stdout().flush()?;

    println!("{:^72}", def.game.title.to_uppercase().title_style());
    if !def.game.intro.is_empty() {
        println!("\n{}", wrap(&def.game.intro, config.wrap_width).description_style());
    }

    if let Some(room) = world.current_room() {
        println!("\n{}", wrap(&room.describe(&world), config.wrap_width));
    }

    let mut game = Game::with_width(world, config.wrap_width);
    run_repl(&mut game, &config)
}
