/// Image sources for braillogo: decoding and Lanczos resampling.

#[cfg(feature = "image-source")]
pub mod backend;
#[cfg(feature = "image-source")]
pub mod image;
#[cfg(feature = "image-source")]
pub mod resize;

use bl_core::error::BrailleError;
use bl_core::traits::ImageBackend;

/// Backend compilé dans ce binaire.
///
/// # Errors
/// Returns [`BrailleError::MissingDependency`] when the crate was built
/// without the `image-source` feature.
#[cfg(feature = "image-source")]
#[allow(clippy::unnecessary_wraps)]
pub fn default_backend() -> Result<Box<dyn ImageBackend>, BrailleError> {
    log::debug!("Backend image : fast_image_resize (Lanczos3)");
    Ok(Box::new(backend::FirBackend::new()))
}

/// Backend compilé dans ce binaire.
///
/// # Errors
/// Returns [`BrailleError::MissingDependency`] when the crate was built
/// without the `image-source` feature.
#[cfg(not(feature = "image-source"))]
pub fn default_backend() -> Result<Box<dyn ImageBackend>, BrailleError> {
    Err(BrailleError::MissingDependency {
        capability: "décodage d'images".into(),
        hint: "recompiler avec --features image-source".into(),
    })
}

#[cfg(test)]
mod tests {
    use super::*;

    #[cfg(not(feature = "image-source"))]
    #[test]
    fn backend_missing_without_feature() {
        let err = default_backend().err().unwrap();
        assert!(matches!(err, BrailleError::MissingDependency { .. }));
    }

    #[cfg(feature = "image-source")]
    #[test]
    fn backend_available_with_feature() {
        assert!(default_backend().is_ok());
    }
}
