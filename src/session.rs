//! Request/session context with equality-based invalidation.
//!
//! Holds the last-seen inputs and the artifact paths generated from them.
//! Submitting different inputs drops the cached paths, so callers never
//! offer artifacts that no longer match what the user typed.

use crate::fields::NdaFields;
use crate::pipeline::Artifacts;

/// Per-session state for an interactive front-end.
#[derive(Debug, Default)]
pub struct Session {
    last_fields: Option<NdaFields>,
    artifacts: Option<Artifacts>,
}

impl Session {
    /// Create an empty session.
    pub fn new() -> Self {
        Self::default()
    }

    /// Record the current inputs, invalidating cached artifacts if they
    /// differ from the last-seen inputs.
    pub fn update_inputs(&mut self, fields: &NdaFields) {
        if self.last_fields.as_ref() != Some(fields) {
            self.artifacts = None;
        }
        self.last_fields = Some(fields.clone());
    }

    /// Record freshly generated artifacts.
    pub fn record(&mut self, artifacts: Artifacts) {
        self.artifacts = Some(artifacts);
    }

    /// Artifacts for the current inputs, if any have been generated.
    pub fn artifacts(&self) -> Option<&Artifacts> {
        self.artifacts.as_ref()
    }
}
