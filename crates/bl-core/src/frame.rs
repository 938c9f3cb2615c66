use crate::error::BrailleError;

/// Grille de pixels RGBA, row-major, 4 bytes par pixel.
///
/// Sert à la fois d'image source décodée et d'image redimensionnée.
/// Un buffer neuf est entièrement transparent (alpha = 0).
///
/// # Example
/// ```
/// use bl_core::frame::FrameBuffer;
/// let fb = FrameBuffer::new(10, 10);
/// assert_eq!(fb.data.len(), 400);
/// ```
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct FrameBuffer {
    /// Pixels RGBA, row-major, 4 bytes par pixel.
    pub data: Vec<u8>,
    /// Width in pixels.
    pub width: u32,
    /// Height in pixels.
    pub height: u32,
}

impl FrameBuffer {
    /// Crée un buffer transparent aux dimensions données.
    ///
    /// # Example
    /// ```
    /// use bl_core::frame::FrameBuffer;
    /// let fb = FrameBuffer::new(100, 50);
    /// assert_eq!(fb.width, 100);
    /// assert_eq!(fb.height, 50);
    /// assert_eq!(fb.data.len(), 100 * 50 * 4);
    /// ```
    #[must_use]
    pub fn new(width: u32, height: u32) -> Self {
        Self {
            data: vec![0u8; width as usize * height as usize * 4],
            width,
            height,
        }
    }

    /// Wrap an existing RGBA buffer.
    ///
    /// # Errors
    /// Returns [`BrailleError::InvalidDimensions`] if `data` does not hold
    /// exactly `width * height * 4` bytes.
    ///
    /// # Example
    /// ```
    /// use bl_core::frame::FrameBuffer;
    /// let fb = FrameBuffer::from_rgba(1, 1, vec![1, 2, 3, 4]).unwrap();
    /// assert_eq!(fb.pixel(0, 0), (1, 2, 3, 4));
    /// assert!(FrameBuffer::from_rgba(2, 2, vec![0; 3]).is_err());
    /// ```
    pub fn from_rgba(width: u32, height: u32, data: Vec<u8>) -> Result<Self, BrailleError> {
        if data.len() != width as usize * height as usize * 4 {
            return Err(BrailleError::InvalidDimensions { width, height });
        }
        Ok(Self {
            data,
            width,
            height,
        })
    }

    /// Buffer uniforme, chaque pixel valant `rgba`.
    ///
    /// # Example
    /// ```
    /// use bl_core::frame::FrameBuffer;
    /// let fb = FrameBuffer::filled(2, 2, [255, 0, 0, 255]);
    /// assert_eq!(fb.alpha(1, 1), Some(255));
    /// ```
    #[must_use]
    pub fn filled(width: u32, height: u32, rgba: [u8; 4]) -> Self {
        let mut fb = Self::new(width, height);
        fb.fill(rgba);
        fb
    }

    /// Remplit tout le buffer avec `rgba`.
    pub fn fill(&mut self, rgba: [u8; 4]) {
        for px in self.data.chunks_exact_mut(4) {
            px.copy_from_slice(&rgba);
        }
    }

    /// Écrit le pixel (x, y). Hors bornes : no-op.
    pub fn set_pixel(&mut self, x: u32, y: u32, rgba: [u8; 4]) {
        if let Some(idx) = self.index(x, y) {
            self.data[idx..idx + 4].copy_from_slice(&rgba);
        }
    }

    /// Accès au pixel (x, y) → (r, g, b, a). Hors bornes : (0, 0, 0, 0).
    ///
    /// # Example
    /// ```
    /// use bl_core::frame::FrameBuffer;
    /// let fb = FrameBuffer::new(10, 10);
    /// assert_eq!(fb.pixel(0, 0), (0, 0, 0, 0));
    /// ```
    #[inline(always)]
    #[must_use]
    pub fn pixel(&self, x: u32, y: u32) -> (u8, u8, u8, u8) {
        match self.index(x, y) {
            Some(idx) => (
                self.data[idx],
                self.data[idx + 1],
                self.data[idx + 2],
                self.data[idx + 3],
            ),
            None => (0, 0, 0, 0),
        }
    }

    /// Canal alpha du pixel (x, y), `None` hors de l'image.
    ///
    /// # Example
    /// ```
    /// use bl_core::frame::FrameBuffer;
    /// let fb = FrameBuffer::filled(2, 4, [0, 0, 0, 200]);
    /// assert_eq!(fb.alpha(1, 3), Some(200));
    /// assert_eq!(fb.alpha(2, 0), None);
    /// ```
    #[inline(always)]
    #[must_use]
    pub fn alpha(&self, x: u32, y: u32) -> Option<u8> {
        self.index(x, y).map(|idx| self.data[idx + 3])
    }

    #[inline(always)]
    fn index(&self, x: u32, y: u32) -> Option<usize> {
        if x >= self.width || y >= self.height {
            return None;
        }
        let idx = (y as usize * self.width as usize + x as usize) * 4;
        (idx + 3 < self.data.len()).then_some(idx)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn new_buffer_is_transparent() {
        let fb = FrameBuffer::new(3, 5);
        assert!((0..5).all(|y| (0..3).all(|x| fb.alpha(x, y) == Some(0))));
    }

    #[test]
    fn set_pixel_is_row_major() {
        let mut fb = FrameBuffer::new(2, 2);
        fb.set_pixel(1, 0, [9, 8, 7, 6]);
        assert_eq!(&fb.data[4..8], &[9, 8, 7, 6]);
        assert_eq!(fb.pixel(0, 1), (0, 0, 0, 0));
    }

    #[test]
    fn out_of_bounds_reads_are_absent() {
        let fb = FrameBuffer::filled(2, 4, [255; 4]);
        assert_eq!(fb.alpha(0, 4), None);
        assert_eq!(fb.pixel(5, 5), (0, 0, 0, 0));
    }
}
