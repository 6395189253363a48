use std::io::{self, BufRead, Write};
use std::path::PathBuf;

use anyhow::Context;
use bevy::prelude::*;
use clap::Parser;
use tracing::{info, warn};
use tracing_subscriber::EnvFilter;

use twin_checkers::core::settings_persistence::{default_settings_path, load_or_default, load_settings};
use twin_checkers::core::{CorePlugin, Difficulty, GameMode, GameSettings, SettingsStore};
use twin_checkers::game::events::PickEvent;
use twin_checkers::game::resources::TurnEngine;
use twin_checkers::game::rules::{BoardLookup, PickOutcome};
use twin_checkers::game::CheckersPlugin;
use twin_checkers::input::{parse_command, resolve_click, TextCommand, HELP};
use twin_checkers::ui::{render_history, render_moves, render_record, render_state};

/// Two-board checkers in the terminal
#[derive(Parser, Debug)]
#[command(name = "twin-checkers", version, about)]
struct Args {
    /// Game mode to store (pvp or pvc)
    #[arg(long)]
    mode: Option<GameMode>,

    /// Computer difficulty to store (easy, medium or hard)
    #[arg(long)]
    difficulty: Option<Difficulty>,

    /// Settings file; fails on an unreadable file instead of using defaults
    #[arg(long)]
    settings: Option<PathBuf>,

    /// Do not write settings back to disk
    #[arg(long)]
    no_save: bool,

    /// Log filter used when RUST_LOG is not set
    #[arg(long, default_value = "info")]
    log_level: String,
}

fn main() -> anyhow::Result<()> {
    let args = Args::parse();

    let filter = EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new(&args.log_level));
    tracing_subscriber::fmt()
        .with_env_filter(filter)
        .with_writer(io::stderr)
        .init();

    let (settings, path) = match &args.settings {
        Some(path) if path.exists() => {
            let settings = load_settings(path)
                .with_context(|| format!("failed to load settings from {}", path.display()))?;
            (settings, path.clone())
        }
        Some(path) => (GameSettings::default(), path.clone()),
        None => {
            let path = default_settings_path();
            (load_or_default(&path), path)
        }
    };
    let settings = apply_overrides(settings, &args);

    info!(
        "[CLI] Starting: mode={} difficulty={} board_size={}",
        settings.mode, settings.difficulty, settings.board_size
    );

    let lookup = BoardLookup::new(settings.board_size);
    let mut app = App::new();
    app.insert_resource(settings)
        .insert_resource(SettingsStore {
            path,
            autosave: !args.no_save,
        })
        .add_plugins((CorePlugin, CheckersPlugin));
    app.update();

    println!("{}", render_state(app.world().resource::<TurnEngine>().state()));
    println!("Type 'help' for commands.");

    run_repl(&mut app, &lookup)
}

fn apply_overrides(mut settings: GameSettings, args: &Args) -> GameSettings {
    if let Some(mode) = args.mode {
        settings.mode = mode;
    }
    if let Some(difficulty) = args.difficulty {
        settings.difficulty = difficulty;
    }
    settings
}

fn run_repl(app: &mut App, lookup: &BoardLookup) -> anyhow::Result<()> {
    let stdin = io::stdin();
    let mut stdout = io::stdout();

    loop {
        print!("> ");
        stdout.flush()?;

        let mut line = String::new();
        if stdin.lock().read_line(&mut line)? == 0 {
            break;
        }
        if line.trim().is_empty() {
            continue;
        }

        let command = match parse_command(&line, lookup) {
            Ok(command) => command,
            Err(e) => {
                warn!("[CLI] {}", e);
                continue;
            }
        };

        let engine = app.world().resource::<TurnEngine>();
        match command {
            TextCommand::Pick(pick) => submit_pick(app, pick),
            TextCommand::Click(square) => {
                let pick = resolve_click(engine.state(), square);
                submit_pick(app, pick);
            }
            TextCommand::Game(game_command) => {
                app.world_mut().write_message(game_command);
                app.update();
                let settings = app.world().resource::<GameSettings>();
                println!("mode={} difficulty={}", settings.mode, settings.difficulty);
                println!("{}", render_state(app.world().resource::<TurnEngine>().state()));
            }
            TextCommand::Show => println!("{}", render_state(engine.state())),
            TextCommand::Moves => println!("{}", render_moves(engine.state())),
            TextCommand::History => println!("{}", render_history(engine.state())),
            TextCommand::Json => println!("{}", serde_json::to_string_pretty(&engine.snapshot())?),
            TextCommand::Help => println!("{HELP}"),
            TextCommand::Quit => break,
        }
    }

    Ok(())
}

/// Queue one pick, run a frame and print what happened
fn submit_pick(app: &mut App, pick: PickEvent) {
    app.world_mut().write_message(pick);
    app.update();

    let engine = app.world().resource::<TurnEngine>();
    match engine.last_outcome() {
        Some(PickOutcome::Ignored) | None => println!("(ignored)"),
        Some(PickOutcome::Selected { .. }) => {
            println!("{}", render_state(engine.state()));
            println!("{}", render_moves(engine.state()));
        }
        Some(PickOutcome::Deselected) => println!("Selection cleared"),
        Some(PickOutcome::Moved(record)) => {
            println!("{}", render_record(record));
            println!("{}", render_state(engine.state()));
        }
    }
}
