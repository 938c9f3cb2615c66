use bl_core::error::BrailleError;

use crate::dots::{CELL_HEIGHT, CELL_WIDTH};

/// Pixel grid the source image is resampled to before encoding.
///
/// `px_w` is always a multiple of 2 and `px_h` a multiple of 4, so the grid
/// splits into whole braille cells.
///
/// # Example
/// ```
/// use bl_braille::plan::ResizePlan;
/// let plan = ResizePlan::compute(128, 128, 30).unwrap();
/// assert_eq!((plan.px_w, plan.px_h), (60, 60));
/// assert_eq!((plan.cols(), plan.rows()), (30, 15));
/// ```
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub struct ResizePlan {
    /// Target width in pixels.
    pub px_w: u32,
    /// Target height in pixels.
    pub px_h: u32,
}

impl ResizePlan {
    /// Compute the target grid for a `src_w`×`src_h` image rendered on
    /// `target_cols` braille columns, keeping the aspect ratio.
    ///
    /// The height is truncated, then padded up to the next multiple of 4.
    ///
    /// # Errors
    /// Returns [`BrailleError::InvalidInput`] for a zero-width or
    /// zero-height source, zero columns, a column count too large to
    /// address in pixels, or a source so wide that the target height
    /// truncates to zero.
    pub fn compute(src_w: u32, src_h: u32, target_cols: u32) -> Result<Self, BrailleError> {
        if src_w == 0 || src_h == 0 {
            return Err(BrailleError::InvalidInput(format!(
                "image vide ({src_w}×{src_h})"
            )));
        }
        if target_cols == 0 {
            return Err(BrailleError::InvalidInput(
                "la largeur cible doit être d'au moins 1 colonne".into(),
            ));
        }
        let px_w = target_cols.checked_mul(CELL_WIDTH).ok_or_else(|| {
            BrailleError::InvalidInput(format!("largeur cible trop grande : {target_cols}"))
        })?;

        let ratio = f64::from(src_h) / f64::from(src_w);
        let truncated = (f64::from(px_w) * ratio).floor();
        if truncated > f64::from(u32::MAX - CELL_HEIGHT) {
            return Err(BrailleError::InvalidInput(format!(
                "hauteur cible trop grande pour {src_w}×{src_h}"
            )));
        }
        let mut px_h = truncated as u32;
        if px_h == 0 {
            return Err(BrailleError::InvalidInput(format!(
                "image trop large ({src_w}×{src_h}) pour {target_cols} colonnes : hauteur nulle"
            )));
        }
        px_h += (CELL_HEIGHT - px_h % CELL_HEIGHT) % CELL_HEIGHT;

        Ok(Self { px_w, px_h })
    }

    /// Number of braille columns.
    #[must_use]
    pub fn cols(&self) -> u32 {
        self.px_w / CELL_WIDTH
    }

    /// Number of braille rows.
    #[must_use]
    pub fn rows(&self) -> u32 {
        self.px_h / CELL_HEIGHT
    }
}
