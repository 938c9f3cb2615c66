use std::path::Path;

use crate::error::BrailleError;
use crate::frame::FrameBuffer;

/// Capacité de décodage et de redimensionnement d'images.
///
/// Implémenté par : `FirBackend` (crate `bl-source`). Le cœur de l'encodeur
/// ne dépend que de ce trait et se teste sur des grilles synthétiques.
///
/// # Example
/// ```
/// use bl_core::traits::ImageBackend;
/// use bl_core::frame::FrameBuffer;
/// use bl_core::error::BrailleError;
/// use std::path::Path;
///
/// struct Blank;
/// impl ImageBackend for Blank {
///     fn load(&self, _path: &Path) -> Result<FrameBuffer, BrailleError> {
///         Ok(FrameBuffer::new(4, 4))
///     }
///     fn resize(&self, _src: &FrameBuffer, w: u32, h: u32) -> Result<FrameBuffer, BrailleError> {
///         Ok(FrameBuffer::new(w, h))
///     }
/// }
/// ```
pub trait ImageBackend {
    /// Décode `path` en pixels RGBA 8 bits.
    ///
    /// # Errors
    /// [`BrailleError::Decode`] si le fichier manque, est illisible ou d'un
    /// format non supporté.
    fn load(&self, path: &Path) -> Result<FrameBuffer, BrailleError>;

    /// Rééchantillonne `src` en `width`×`height`.
    ///
    /// # Errors
    /// [`BrailleError::Resize`] si le backend refuse les dimensions.
    fn resize(&self, src: &FrameBuffer, width: u32, height: u32)
    -> Result<FrameBuffer, BrailleError>;
}
