/// Braille encoding engine for braillogo.
///
/// Turns an RGBA frame into rows of U+2800 braille cells, 2×4 pixels each,
/// using alpha as the only on/off signal.

pub mod dots;
pub mod encode;
pub mod format;
pub mod pipeline;
pub mod plan;
pub mod trim;

pub use dots::{BLANK, BRAILLE_BASE, DOT_MAP, braille_char};
pub use pipeline::{frame_to_braille, image_to_braille, render_output};
pub use plan::ResizePlan;
