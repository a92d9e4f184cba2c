use crate::config::{Config, DecodeMode};
use crate::enums::Status;
use crate::error::StatusError;

/// Encodes statuses for storage and decodes untrusted external values
/// according to a [`DecodeMode`].
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct StatusCodec {
    mode: DecodeMode,
}

impl StatusCodec {
    pub fn new(mode: DecodeMode) -> Self {
        Self { mode }
    }

    pub fn from_config(config: &Config) -> Self {
        Self::new(config.decode_mode)
    }

    pub fn mode(&self) -> DecodeMode {
        self.mode
    }

    pub fn encode(&self, status: Status) -> &'static str {
        status.value()
    }

    pub fn decode(&self, input: &str) -> Result<Status, StatusError> {
        match self.mode {
            DecodeMode::Lenient => Ok(Status::resolve(input)),
            DecodeMode::Strict => input.parse::<Status>().map_err(|err| {
                tracing::warn!(input = %input, "rejected status code");
                err
            }),
        }
    }

    /// Absent input is rejected in both modes.
    pub fn decode_opt(&self, input: Option<&str>) -> Result<Status, StatusError> {
        self.decode(input.ok_or(StatusError::InvalidArgument)?)
    }
}
