//! Recording adapter for the random source port.

use std::sync::{Arc, Mutex, PoisonError};

use crate::cassette::recorder::CassetteRecorder;
use crate::ports::RandomSource;

/// Records every draw while delegating to an inner source.
pub struct RecordingRandom {
    inner: Box<dyn RandomSource>,
    recorder: Arc<Mutex<CassetteRecorder>>,
}

impl RecordingRandom {
    /// Creates a new recording source wrapping the given implementation.
    pub fn new(inner: Box<dyn RandomSource>, recorder: Arc<Mutex<CassetteRecorder>>) -> Self {
        Self { inner, recorder }
    }
}

impl RandomSource for RecordingRandom {
    fn next_unit(&mut self) -> f64 {
        let draw = self.inner.next_unit();
        self.recorder.lock().unwrap_or_else(PoisonError::into_inner).record(draw);
        draw
    }
}
