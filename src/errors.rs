//! Error types produced while talking to the engine or converting objects.

use thiserror::Error;

use crate::engine::FrameReleases;
use crate::release::StabilityRule;

/// Error returned by a call into the analysis engine.
#[derive(Clone, Debug, Error, PartialEq, Eq)]
pub enum EngineError {
    /// Returned when the engine reports a non-zero status code.
    #[error("{call} failed for '{name}' with status {code}")]
    Status {
        /// Engine call that failed.
        call: &'static str,
        /// Name of the object the call addressed.
        name: String,
        /// Status code returned by the engine.
        code: i32,
    },
    /// Returned when the named object does not exist in the model.
    #[error("no {kind} named '{name}' exists in the model")]
    NotFound {
        /// Category of the object, such as "material".
        kind: &'static str,
        /// Requested name.
        name: String,
    },
}

/// Which end of a bar a release belongs to.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum BarEnd {
    /// The start of the bar.
    Start,
    /// The end of the bar.
    End,
}

/// Error returned when a bar release cannot be expressed in the engine.
///
/// The conversion examples in [`crate::bar_release_to_sap`] show how each
/// variant arises.
#[derive(Clone, Debug, Error, PartialEq)]
pub enum ReleaseError {
    /// Returned when one side of the release is not configured.
    #[error("{0:?} release was not set, no release was applied")]
    Missing(BarEnd),
    /// Returned when the released degrees of freedom leave the bar unstable.
    ///
    /// The arrays built before the check are kept for inspection.
    #[error("unstable release not applied: {rule}")]
    Unstable {
        /// First stability rule that failed.
        rule: StabilityRule,
        /// Release and spring arrays in engine order.
        arrays: Box<FrameReleases>,
    },
}

/// Error returned when adapter settings cannot be loaded.
#[derive(Debug, Error)]
pub enum ConfigError {
    /// Returned when the settings file cannot be read.
    #[error("could not read settings from '{path}': {source}")]
    Io {
        /// Path that was read.
        path: String,
        /// Underlying I/O failure.
        #[source]
        source: std::io::Error,
    },
    /// Returned when the settings document is not valid.
    #[error("invalid settings document: {0}")]
    Parse(#[from] serde_json::Error),
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn status_error_names_call_and_object() {
        let error = EngineError::Status {
            call: "PropMaterial.SetMPIsotropic",
            name: "S355".to_string(),
            code: 1,
        };
        assert_eq!(
            error.to_string(),
            "PropMaterial.SetMPIsotropic failed for 'S355' with status 1"
        );
    }

    #[test]
    fn missing_release_names_the_end() {
        assert_eq!(
            ReleaseError::Missing(BarEnd::End).to_string(),
            "End release was not set, no release was applied"
        );
    }
}
