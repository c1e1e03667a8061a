//! Gridgen - random bordered grid generator.

mod adapters;
mod cassette;
mod cli;
mod config;
mod context;
mod error;
mod grid;
mod output;
mod params;
mod ports;

use std::path::Path;
use std::process;

use clap::Parser;

use crate::cli::Cli;
use crate::config::Config;
use crate::context::RandomContext;
use crate::error::GridError;
use crate::grid::Grid;
use crate::output::{resolve_output_path, write_grid_file, write_grid_stdout};
use crate::params::{resolve_spec, validate_file_name, validate_seed_source, validate_spec};

fn main() {
    let cli = Cli::parse();

    if let Err(e) = run(&cli) {
        eprintln!("Error: {e}");
        process::exit(1);
    }
}

fn run(cli: &Cli) -> Result<(), GridError> {
    // Load config
    let config_path = config::discover_config_path(cli.config.as_deref());
    let config = Config::load(&config_path).map_err(GridError::Config)?;

    // Resolve and validate parameters before touching the filesystem
    let spec = resolve_spec(cli, &config).map_err(GridError::InvalidArgument)?;
    validate_spec(&spec).map_err(GridError::InvalidArgument)?;
    if let Some(name) = cli.name.as_deref() {
        validate_file_name(name).map_err(GridError::InvalidArgument)?;
    }

    // Pick the draw source (live / recording / replaying)
    let replay_path = std::env::var("GRIDGEN_REPLAY").ok();
    let is_recording = std::env::var("GRIDGEN_REC").is_ok_and(|v| v == "true" || v == "1");
    validate_seed_source(cli.seed, replay_path.is_some()).map_err(GridError::InvalidArgument)?;

    let (mut ctx, recording_session) = if let Some(ref cassette_path) = replay_path {
        (RandomContext::replaying(Path::new(cassette_path))?, None)
    } else if is_recording {
        let (ctx, session) = RandomContext::recording(cli.seed);
        (ctx, Some(session))
    } else {
        (RandomContext::live(cli.seed), None)
    };

    if cli.verbose {
        eprintln!("Grid: {}x{} threshold {}", spec.width, spec.height, spec.threshold);
        eprintln!("Draws: {}", ctx.description);
    }

    let grid = Grid::generate(&spec, ctx.source.as_mut());
    // Release the recorder reference held by the source before finishing
    drop(ctx);

    if cli.verbose {
        eprintln!("Blocked cells: {} of {} interior", grid.blocked_count(), grid.interior_count());
    }

    if cli.stdout {
        write_grid_stdout(&grid)?;
    } else {
        let dir = cli.dir.as_deref().unwrap_or(config.defaults.dir.as_str());
        let output_path = resolve_output_path(dir, cli.name.as_deref(), &spec);
        write_grid_file(&grid, &output_path)?;
        eprintln!("Saved: {}", output_path.display());
    }

    if let Some(session) = recording_session {
        match session.finish() {
            Ok(path) => eprintln!("Cassette saved: {}", path.display()),
            Err(e) => eprintln!("Warning: failed to save cassette: {e}"),
        }
    }

    Ok(())
}
