use bl_core::frame::FrameBuffer;

use crate::dots::{CELL_HEIGHT, CELL_WIDTH, DOT_MAP, braille_char};

/// Bitmask of the cell at (`row`, `col`).
///
/// A dot is lit when its pixel's alpha is strictly above `threshold`.
/// Dots falling outside the frame contribute nothing.
///
/// # Example
/// ```
/// use bl_core::frame::FrameBuffer;
/// use bl_braille::encode::encode_cell;
///
/// let frame = FrameBuffer::filled(2, 4, [0, 0, 0, 255]);
/// assert_eq!(encode_cell(&frame, 0, 0, 40), 0xFF);
/// assert_eq!(encode_cell(&frame, 0, 0, 255), 0x00);
/// ```
#[inline]
#[must_use]
pub fn encode_cell(frame: &FrameBuffer, row: u32, col: u32, threshold: u8) -> u8 {
    let mut code = 0u8;
    for &(dy, dx, bit) in &DOT_MAP {
        let x = col * CELL_WIDTH + dx;
        let y = row * CELL_HEIGHT + dy;
        if let Some(a) = frame.alpha(x, y)
            && a > threshold
        {
            code |= bit;
        }
    }
    code
}

/// Encode a resampled frame into one string per braille row, untrimmed.
///
/// The frame is expected to be sized by a [`crate::plan::ResizePlan`]:
/// `width / 2` columns by `height / 4` rows.
///
/// # Example
/// ```
/// use bl_core::frame::FrameBuffer;
/// use bl_braille::encode::encode_rows;
///
/// let rows = encode_rows(&FrameBuffer::new(4, 8), 40);
/// assert_eq!(rows, vec!["\u{2800}\u{2800}", "\u{2800}\u{2800}"]);
/// ```
#[must_use]
pub fn encode_rows(frame: &FrameBuffer, threshold: u8) -> Vec<String> {
    let cols = frame.width / CELL_WIDTH;
    let rows = frame.height / CELL_HEIGHT;
    debug_assert!(
        frame.width % CELL_WIDTH == 0 && frame.height % CELL_HEIGHT == 0,
        "frame {}×{} is not a whole number of cells",
        frame.width,
        frame.height
    );

    (0..rows)
        .map(|row| {
            (0..cols)
                .map(|col| braille_char(encode_cell(frame, row, col, threshold)))
                .collect()
        })
        .collect()
}
