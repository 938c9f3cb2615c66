use std::path::Path;

use bl_core::error::BrailleError;
use bl_core::frame::FrameBuffer;

/// Décode une image depuis le disque et la normalise en RGBA 8 bits.
///
/// # Errors
/// Returns [`BrailleError::Decode`] if the file is missing, unreadable, or
/// not in a supported format (PNG, JPEG, BMP, GIF).
///
/// # Example
/// ```no_run
/// use bl_source::image::load_image;
/// use std::path::Path;
/// let frame = load_image(Path::new("icon.png")).unwrap();
/// ```
pub fn load_image(path: &Path) -> Result<FrameBuffer, BrailleError> {
    let img = image::open(path).map_err(|e| BrailleError::Decode {
        path: path.to_path_buf(),
        reason: e.to_string(),
    })?;
    let rgba = img.to_rgba8();
    let (width, height) = rgba.dimensions();
    FrameBuffer::from_rgba(width, height, rgba.into_raw())
}
