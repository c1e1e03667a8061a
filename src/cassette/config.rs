//! Cassette loading for replay.

use std::path::Path;

use super::format::Cassette;

/// Load a cassette file, checking that it holds usable draws.
///
/// # Errors
///
/// Returns an error if the file cannot be read or parsed, holds no draws,
/// or holds a draw outside `[0, 1)`.
pub fn load_cassette(path: &Path) -> Result<Cassette, String> {
    let content = std::fs::read_to_string(path)
        .map_err(|e| format!("Failed to read cassette file {}: {e}", path.display()))?;
    let cassette: Cassette = serde_yaml::from_str(&content)
        .map_err(|e| format!("Failed to parse cassette file {}: {e}", path.display()))?;

    if cassette.draws.is_empty() {
        return Err(format!("Cassette file {} has no draws", path.display()));
    }
    if let Some(bad) = cassette.draws.iter().find(|d| !(0.0..1.0).contains(*d)) {
        return Err(format!("Cassette file {} has draw {bad} outside [0, 1)", path.display()));
    }
    Ok(cassette)
}
