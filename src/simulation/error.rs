//! Error types for the simulation core.

use thiserror::Error;

/// Errors raised while building a [`Color`](super::color::Color).
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum ColorError {
    /// A channel value fell outside `0..=255`.
    #[error("invalid {channel} channel value {value}, expected 0..=255")]
    ChannelOutOfRange {
        /// Name of the offending channel.
        channel: &'static str,
        /// The rejected value.
        value: i64,
    },
    /// A serialized color did not have three or four channels.
    #[error("expected 3 or 4 color channels, got {0}")]
    ChannelCount(usize),
}

/// Errors raised while loading or validating [`Params`](super::params::Params).
#[derive(Debug, Error)]
pub enum ConfigError {
    /// The config file could not be read or written.
    #[error("config i/o failed: {0}")]
    Io(#[from] std::io::Error),
    /// The config file is not valid JSON for `Params`.
    #[error("config is not valid: {0}")]
    Json(#[from] serde_json::Error),
    /// A parameter is out of its allowed range.
    #[error("invalid parameter `{name}`: {reason}")]
    Invalid {
        /// Parameter name as it appears in the config.
        name: &'static str,
        /// What is wrong with it.
        reason: &'static str,
    },
}
