//! Typed error variants for the recap-config crate.
//!
//! Produced by `Profile::load` and `Profile::save`. Callers that do not
//! care about the specific failure mode can let these coerce into
//! `anyhow::Error` at the application boundary.

use thiserror::Error;

/// Errors that can occur when loading or saving the settings profile.
#[derive(Debug, Error)]
pub enum ProfileError {
    /// An I/O error occurred reading or writing the profile file.
    #[error("I/O error accessing profile: {0}")]
    Io(#[from] std::io::Error),

    /// The profile file contained TOML that could not be parsed.
    #[error("TOML parse error in profile: {0}")]
    Parse(#[from] toml::de::Error),

    /// The profile could not be serialized to TOML.
    #[error("TOML serialize error writing profile: {0}")]
    Serialize(#[from] toml::ser::Error),
}
