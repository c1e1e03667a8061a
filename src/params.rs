//! Parameter resolution and validation between CLI, config and generator.

use crate::cli::Cli;
use crate::config::Config;
use crate::grid::GridSpec;

/// Resolve grid parameters: explicit flags, then preset, then config defaults.
///
/// # Errors
///
/// Returns an error if the requested preset does not exist.
pub fn resolve_spec(cli: &Cli, config: &Config) -> Result<GridSpec, String> {
    let preset = cli.preset.as_deref().map(|name| config.preset(name)).transpose()?;
    let defaults = &config.defaults;

    Ok(GridSpec {
        width: cli.width.or(preset.and_then(|p| p.width)).unwrap_or(defaults.width),
        height: cli.height.or(preset.and_then(|p| p.height)).unwrap_or(defaults.height),
        threshold: cli
            .threshold
            .or(preset.and_then(|p| p.threshold))
            .unwrap_or(defaults.threshold),
    })
}

/// Validate that a grid dimension leaves room for the border.
///
/// # Errors
///
/// Returns an error if the value is below 2.
pub fn validate_dimension(name: &str, value: usize) -> Result<(), String> {
    if value < 2 {
        Err(format!("{name} must be at least 2, got {value}"))
    } else {
        Ok(())
    }
}

/// Validate the open-cell probability.
///
/// # Errors
///
/// Returns an error if the threshold is not a finite value in [0, 1].
pub fn validate_threshold(threshold: f64) -> Result<(), String> {
    if (0.0..=1.0).contains(&threshold) {
        Ok(())
    } else {
        Err(format!("threshold must be within [0, 1], got {threshold}"))
    }
}

/// Validate an output file name.
///
/// # Errors
///
/// Returns an error if the name is empty or contains a path separator.
pub fn validate_file_name(name: &str) -> Result<(), String> {
    if name.is_empty() {
        return Err("file name must not be empty".to_string());
    }
    if name.contains(['/', '\\']) || name == "." || name == ".." {
        return Err(format!("file name '{name}' must not contain a path; use --dir instead"));
    }
    Ok(())
}

/// Validate that the total cell count fits in memory addressing.
///
/// # Errors
///
/// Returns an error if `width * height` overflows or exceeds `isize::MAX`.
pub fn validate_cell_count(width: usize, height: usize) -> Result<(), String> {
    match width.checked_mul(height) {
        Some(cells) if isize::try_from(cells).is_ok() => Ok(()),
        _ => Err(format!("grid of {width}x{height} cells is too large")),
    }
}

/// Reject `--seed` when draws are replayed from a cassette.
///
/// # Errors
///
/// Returns an error if both a seed and a replay cassette are given.
pub fn validate_seed_source(seed: Option<u64>, replaying: bool) -> Result<(), String> {
    match seed {
        Some(seed) if replaying => Err(format!(
            "--seed {seed} has no effect while GRIDGEN_REPLAY is set; drop one of them"
        )),
        _ => Ok(()),
    }
}

/// Validate a fully resolved grid spec.
///
/// # Errors
///
/// Returns the first failing check.
pub fn validate_spec(spec: &GridSpec) -> Result<(), String> {
    validate_dimension("width", spec.width)?;
    validate_dimension("height", spec.height)?;
    validate_cell_count(spec.width, spec.height)?;
    validate_threshold(spec.threshold)
}
