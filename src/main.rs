// Disable console on Windows for non-dev builds.
#![cfg_attr(not(feature = "dev"), windows_subsystem = "windows")]

use anyhow::{Context, Result};
use bevy::prelude::*;
use clap::Parser;
use snake_arcade::cmdline::Args;
use snake_arcade::headless::{parse_moves, HeadlessGame};
use snake_arcade::snake_game::GameConfig;
use snake_arcade::AppPlugin;

fn main() -> AppExit {
    let args = Args::parse();
    let config = match args.game_config().context("invalid game configuration") {
        Ok(config) => config,
        Err(e) => {
            eprintln!("error: {e:#}");
            return AppExit::error();
        }
    };
    if args.sim {
        match run_headless(&args, &config) {
            Ok(()) => AppExit::Success,
            Err(e) => {
                eprintln!("error: {e:#}");
                AppExit::error()
            }
        }
    } else {
        App::new().add_plugins(AppPlugin { config }).run()
    }
}

fn run_headless(args: &Args, config: &GameConfig) -> Result<()> {
    let script = parse_moves(&args.moves).context("invalid --moves script")?;
    let report = HeadlessGame::new(config).run(args.ticks, &script);
    if args.json {
        println!("{}", serde_json::to_string_pretty(&report).context("serializing report")?);
    } else {
        println!("{report}");
    }
    Ok(())
}
