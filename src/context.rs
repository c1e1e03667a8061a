//! Random context selecting the draw source for a run.

use std::path::{Path, PathBuf};
use std::sync::{Arc, Mutex};

use crate::adapters::live::{SeededRandom, ThreadRandom};
use crate::adapters::recording::RecordingRandom;
use crate::adapters::sequence::SequenceRandom;
use crate::cassette::config::load_cassette;
use crate::cassette::recorder::CassetteRecorder;
use crate::error::GridError;
use crate::ports::RandomSource;

/// Bundles the random source used by the generator.
pub struct RandomContext {
    /// Random source port.
    pub source: Box<dyn RandomSource>,
    /// Short description of where draws come from, for verbose output.
    pub description: String,
}

/// Handle to a recording session that must be finished after use.
pub struct RecordingSession {
    recorder: Arc<Mutex<CassetteRecorder>>,
}

impl RecordingSession {
    /// Finish the recording and write the cassette file to disk.
    ///
    /// # Errors
    ///
    /// Returns an error if the cassette file cannot be written.
    pub fn finish(self) -> Result<PathBuf, String> {
        let recorder = Arc::try_unwrap(self.recorder)
            .map_err(|_| "Recording adapter still has references".to_string())?
            .into_inner()
            .map_err(|e| format!("Recorder lock poisoned: {e}"))?;
        recorder.finish().map_err(|e| format!("Failed to write cassette: {e}"))
    }
}

impl RandomContext {
    /// Create a live context, seeded when `seed` is given.
    #[must_use]
    pub fn live(seed: Option<u64>) -> Self {
        match seed {
            Some(seed) => Self {
                source: Box::new(SeededRandom::new(seed)),
                description: format!("seeded ({seed})"),
            },
            None => Self { source: Box::new(ThreadRandom), description: "thread rng".into() },
        }
    }

    /// Create a recording context that wraps a live source with a recorder.
    ///
    /// The cassette is written under `.gridgen/cassettes/<timestamp>/`.
    #[must_use]
    pub fn recording(seed: Option<u64>) -> (Self, RecordingSession) {
        let live = Self::live(seed);

        let timestamp = chrono::Utc::now().format("%Y-%m-%dT%H-%M-%S").to_string();
        let path = PathBuf::from(".gridgen/cassettes")
            .join(&timestamp)
            .join("draws.cassette.yaml");
        let recorder = Arc::new(Mutex::new(CassetteRecorder::new(
            path,
            format!("{timestamp}-draws"),
            get_commit_hash(),
        )));

        let ctx = Self {
            source: Box::new(RecordingRandom::new(live.source, Arc::clone(&recorder))),
            description: format!("recording {}", live.description),
        };
        (ctx, RecordingSession { recorder })
    }

    /// Create a replaying context from a cassette file.
    ///
    /// # Errors
    ///
    /// Returns an error if the cassette file cannot be loaded.
    pub fn replaying(path: &Path) -> Result<Self, GridError> {
        let cassette = load_cassette(path)
            .map_err(|e| GridError::Config(format!("Failed to load cassette: {e}")))?;
        let description = format!("replaying {} draws from {}", cassette.draws.len(), path.display());
        Ok(Self { source: Box::new(SequenceRandom::new(cassette.draws)), description })
    }
}

/// Get the current git commit hash, or "unknown" if unavailable.
fn get_commit_hash() -> String {
    std::process::Command::new("git")
        .args(["rev-parse", "HEAD"])
        .output()
        .ok()
        .filter(|o| o.status.success())
        .and_then(|o| String::from_utf8(o.stdout).ok())
        .map_or_else(|| "unknown".to_string(), |s| s.trim().to_string())
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::cassette::format::Cassette;

    #[test]
    fn seeded_live_contexts_agree() {
        let mut a = RandomContext::live(Some(5));
        let mut b = RandomContext::live(Some(5));
        assert_eq!(a.description, "seeded (5)");
        for _ in 0..8 {
            assert!((a.source.next_unit() - b.source.next_unit()).abs() < f64::EPSILON);
        }
    }

    #[test]
    fn replaying_serves_cassette_draws() {
        let dir = std::env::temp_dir().join("gridgen_context_replay_test");
        std::fs::create_dir_all(&dir).unwrap();
        let path = dir.join("draws.cassette.yaml");
        let cassette = Cassette {
            name: "t".into(),
            recorded_at: chrono::Utc::now(),
            commit: "c".into(),
            draws: vec![0.2, 0.8],
        };
        std::fs::write(&path, serde_yaml::to_string(&cassette).unwrap()).unwrap();

        let mut ctx = RandomContext::replaying(&path).unwrap();
        assert!((ctx.source.next_unit() - 0.2).abs() < f64::EPSILON);
        assert!((ctx.source.next_unit() - 0.8).abs() < f64::EPSILON);

        let _ = std::fs::remove_dir_all(&dir);
    }

    #[test]
    fn replaying_missing_cassette_is_config_error() {
        let result = RandomContext::replaying(Path::new("/nonexistent/draws.cassette.yaml"));
        assert!(matches!(result, Err(GridError::Config(_))));
    }
}
