/// Shared types, configuration and traits for braillogo.
///
/// Holds the RGBA pixel grid, the error taxonomy, the TOML configuration
/// and the image-backend trait used by the encoder.

pub mod config;
pub mod error;
pub mod frame;
pub mod traits;

pub use config::{EncodeConfig, OutputMode};
pub use error::BrailleError;
pub use frame::FrameBuffer;
pub use traits::ImageBackend;
