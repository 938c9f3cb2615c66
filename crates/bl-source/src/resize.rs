use bl_core::error::BrailleError;
use bl_core::frame::FrameBuffer;
use fast_image_resize::images::Image;
use fast_image_resize::{FilterType, PixelType, ResizeAlg, ResizeOptions, Resizer as FirResizer};

/// Resizer réutilisable wrappant fast_image_resize, filtre Lanczos3.
///
/// Lanczos limite l'aliasing du canal alpha avant le seuillage.
///
/// # Example
/// ```
/// use bl_source::resize::Resizer;
/// let r = Resizer::new();
/// ```
pub struct Resizer {
    inner: FirResizer,
    options: ResizeOptions,
    /// Scratch image for source (owned buffer to avoid the mut borrow issue).
    src_buf: Vec<u8>,
}

impl Resizer {
    /// Create a new Lanczos3 resizer.
    #[must_use]
    pub fn new() -> Self {
        Self {
            inner: FirResizer::new(),
            options: ResizeOptions::new()
                .resize_alg(ResizeAlg::Convolution(FilterType::Lanczos3)),
            src_buf: Vec::new(),
        }
    }

    /// Resize `src` into `dst`. Dimensions of `dst` determine output size.
    ///
    /// # Errors
    /// Returns [`BrailleError::Resize`] if either image has invalid
    /// dimensions or the resize operation fails.
    ///
    /// # Example
    /// ```
    /// use bl_source::resize::Resizer;
    /// use bl_core::frame::FrameBuffer;
    /// let mut r = Resizer::new();
    /// let src = FrameBuffer::new(100, 100);
    /// let mut dst = FrameBuffer::new(60, 60);
    /// r.resize_into(&src, &mut dst).unwrap();
    /// ```
    pub fn resize_into(
        &mut self,
        src: &FrameBuffer,
        dst: &mut FrameBuffer,
    ) -> Result<(), BrailleError> {
        if src.width == dst.width && src.height == dst.height {
            dst.data.copy_from_slice(&src.data);
            return Ok(());
        }

        // fast_image_resize veut un &mut sur la source
        self.src_buf.clear();
        self.src_buf.extend_from_slice(&src.data);

        let (src_w, src_h) = (src.width, src.height);
        let src_image = Image::from_slice_u8(src_w, src_h, &mut self.src_buf, PixelType::U8x4)
            .map_err(|e| BrailleError::Resize(format!("source {src_w}×{src_h} : {e}")))?;

        let (dst_w, dst_h) = (dst.width, dst.height);
        let mut dst_image = Image::from_slice_u8(dst_w, dst_h, &mut dst.data, PixelType::U8x4)
            .map_err(|e| BrailleError::Resize(format!("destination {dst_w}×{dst_h} : {e}")))?;

        self.inner
            .resize(&src_image, &mut dst_image, Some(&self.options))
            .map_err(|e| BrailleError::Resize(e.to_string()))?;

        Ok(())
    }
}

impl Default for Resizer {
    fn default() -> Self {
        Self::new()
    }
}
