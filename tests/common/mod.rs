//! Shared helpers for binary-level tests.

use assert_cmd::Command;

/// The `gridgen` binary isolated from the user's config and cassette env vars.
pub fn cmd() -> Command {
    let mut cmd = Command::cargo_bin("gridgen").unwrap();
    cmd.env("GRIDGEN_CONFIG", "/nonexistent/gridgen/config.toml")
        .env_remove("GRIDGEN_REPLAY")
        .env_remove("GRIDGEN_REC");
    cmd
}
