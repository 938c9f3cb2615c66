use std::path::PathBuf;

use thiserror::Error;

/// Errors shared by every braillogo crate.
#[derive(Error, Debug)]
pub enum BrailleError {
    /// The image-decoding capability is not compiled in or not usable.
    #[error("Capacité manquante : {capability} ({hint})")]
    MissingDependency {
        /// What is missing.
        capability: String,
        /// How to get it.
        hint: String,
    },

    /// Input image missing, unreadable, or in an unsupported format.
    #[error("Impossible de décoder {path} : {reason}")]
    Decode {
        /// Path of the offending file.
        path: PathBuf,
        /// Underlying decoder message.
        reason: String,
    },

    /// Degenerate input, e.g. a zero-width image or zero target columns.
    #[error("Entrée invalide : {0}")]
    InvalidInput(String),

    /// Pixel buffer length does not match its declared size.
    #[error("Dimensions invalides : {width}×{height}")]
    InvalidDimensions {
        /// Width value.
        width: u32,
        /// Height value.
        height: u32,
    },

    /// Invalid configuration value or structure.
    #[error("Configuration invalide : {0}")]
    Config(String),

    /// The resampling backend rejected the operation.
    #[error("Redimensionnement échoué : {0}")]
    Resize(String),
}
