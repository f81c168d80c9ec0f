// src/presentation/http/state.rs
use super::error::ErrorEnvelope;
use crate::application::services::ApplicationServices;
use std::sync::Arc;

pub const DEFAULT_MAX_UPLOAD_BYTES: usize = 25 * 1024 * 1024;

#[derive(Clone)]
pub struct HttpState {
    pub services: Arc<ApplicationServices>,
    pub error_envelope: ErrorEnvelope,
    pub max_upload_bytes: usize,
}

impl HttpState {
    pub fn new(services: Arc<ApplicationServices>) -> Self {
        Self {
            services,
            error_envelope: ErrorEnvelope::default(),
            max_upload_bytes: DEFAULT_MAX_UPLOAD_BYTES,
        }
    }

    #[must_use]
    pub fn with_error_envelope(mut self, envelope: ErrorEnvelope) -> Self {
        self.error_envelope = envelope;
        self
    }

    #[must_use]
    pub fn with_max_upload_bytes(mut self, bytes: usize) -> Self {
        self.max_upload_bytes = bytes;
        self
    }
}
