use std::cell::RefCell;
use std::path::Path;

use bl_core::error::BrailleError;
use bl_core::frame::FrameBuffer;
use bl_core::traits::ImageBackend;

use crate::image::load_image;
use crate::resize::Resizer;

/// Backend de production : décodage `image`, rééchantillonnage
/// `fast_image_resize` (Lanczos3).
///
/// # Example
/// ```
/// use bl_core::frame::FrameBuffer;
/// use bl_core::traits::ImageBackend;
/// use bl_source::backend::FirBackend;
///
/// let backend = FirBackend::new();
/// let out = backend.resize(&FrameBuffer::new(128, 128), 60, 60).unwrap();
/// assert_eq!((out.width, out.height), (60, 60));
/// ```
#[derive(Default)]
pub struct FirBackend {
    resizer: RefCell<Resizer>,
}

impl FirBackend {
    /// Create a backend with a fresh resizer.
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }
}

impl ImageBackend for FirBackend {
    fn load(&self, path: &Path) -> Result<FrameBuffer, BrailleError> {
        load_image(path)
    }

    fn resize(
        &self,
        src: &FrameBuffer,
        width: u32,
        height: u32,
    ) -> Result<FrameBuffer, BrailleError> {
        let mut dst = FrameBuffer::new(width, height);
        self.resizer.borrow_mut().resize_into(src, &mut dst)?;
        Ok(dst)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn load_then_resize_round() {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("square.png");
        image::RgbaImage::from_pixel(4, 4, image::Rgba([0, 0, 0, 255]))
            .save(&path)
            .unwrap();

        let backend = FirBackend::new();
        let frame = backend.load(&path).unwrap();
        let small = backend.resize(&frame, 2, 4).unwrap();
        assert!(small.data.chunks_exact(4).all(|px| px[3] > 250));
    }
}
