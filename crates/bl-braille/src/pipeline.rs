use std::path::Path;

use bl_core::config::{EncodeConfig, OutputMode};
use bl_core::error::BrailleError;
use bl_core::frame::FrameBuffer;
use bl_core::traits::ImageBackend;

use crate::encode::encode_rows;
use crate::format::{render_plain, render_rust_const};
use crate::plan::ResizePlan;
use crate::trim::{join_rows, trim_rows};

/// Charge `path` via `backend` et le convertit en texte braille trimé.
///
/// # Errors
/// Propagates decode errors from the backend, [`BrailleError::InvalidInput`]
/// for degenerate images, and resize failures.
pub fn image_to_braille(
    backend: &dyn ImageBackend,
    path: &Path,
    target_cols: u32,
    threshold: u8,
) -> Result<String, BrailleError> {
    let frame = backend.load(path)?;
    log::info!(
        "Image chargée : {} ({}×{})",
        path.display(),
        frame.width,
        frame.height
    );
    frame_to_braille(backend, &frame, target_cols, threshold)
}

/// Convertit une frame déjà décodée : plan → resize → encodage → trim.
///
/// Rows are joined with `\n`, without a trailing newline. A fully
/// transparent frame gives the empty string.
///
/// # Errors
/// [`BrailleError::InvalidInput`] for a zero-sized frame, zero columns or a
/// frame too wide to yield one pixel row, or whatever the backend's resize
/// returns.
pub fn frame_to_braille(
    backend: &dyn ImageBackend,
    frame: &FrameBuffer,
    target_cols: u32,
    threshold: u8,
) -> Result<String, BrailleError> {
    let plan = ResizePlan::compute(frame.width, frame.height, target_cols)?;
    log::debug!(
        "Plan : {}×{} px → {} colonnes × {} lignes",
        plan.px_w,
        plan.px_h,
        plan.cols(),
        plan.rows()
    );
    let resized = backend.resize(frame, plan.px_w, plan.px_h)?;
    let rows = trim_rows(encode_rows(&resized, threshold));
    log::debug!("{} lignes après trim", rows.len());
    Ok(join_rows(&rows))
}

/// Format the trimmed text according to `config.output`.
///
/// # Example
/// ```
/// use bl_core::config::{EncodeConfig, OutputMode};
/// use bl_braille::pipeline::render_output;
///
/// let mut config = EncodeConfig::default();
/// assert_eq!(render_output("\u{28FF}", &config), "\u{28FF}\n");
/// config.output = OutputMode::RustConst;
/// assert!(render_output("\u{28FF}", &config).starts_with("pub const LOGO_BRAILLE"));
/// ```
#[must_use]
pub fn render_output(text: &str, config: &EncodeConfig) -> String {
    match config.output {
        OutputMode::Plain => render_plain(text),
        OutputMode::RustConst => render_rust_const(text, &config.const_name),
    }
}

/// Full run: load, convert and format with the settings of `config`.
///
/// # Errors
/// Same as [`image_to_braille`].
pub fn run(
    backend: &dyn ImageBackend,
    path: &Path,
    config: &EncodeConfig,
) -> Result<String, BrailleError> {
    let text = image_to_braille(backend, path, config.width, config.threshold)?;
    Ok(render_output(&text, config))
}
