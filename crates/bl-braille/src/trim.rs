use crate::dots::BLANK;

/// Strip trailing blank cells from each row, then drop the leading and
/// trailing rows left empty. Interior blank rows and leading blank cells
/// inside a row are kept, so the drawing's layout is preserved.
///
/// # Example
/// ```
/// use bl_braille::trim::trim_rows;
/// let rows = vec![
///     "\u{2800}\u{2800}".to_string(),
///     "\u{2800}\u{28FF}\u{2800}".to_string(),
///     "\u{2800}".to_string(),
/// ];
/// assert_eq!(trim_rows(rows), vec!["\u{2800}\u{28FF}".to_string()]);
/// ```
#[must_use]
pub fn trim_rows(rows: Vec<String>) -> Vec<String> {
    let rows: Vec<String> = rows
        .into_iter()
        .map(|mut row| {
            let kept = row.trim_end_matches(BLANK).len();
            row.truncate(kept);
            row
        })
        .collect();

    let is_blank = |row: &String| row.trim().is_empty();
    let Some(first) = rows.iter().position(|r| !is_blank(r)) else {
        return Vec::new();
    };
    let last = rows.iter().rposition(|r| !is_blank(r)).unwrap_or(first);

    rows.into_iter()
        .skip(first)
        .take(last - first + 1)
        .collect()
}

/// Join rows with `\n`, no trailing newline.
#[must_use]
pub fn join_rows(rows: &[String]) -> String {
    rows.join("\n")
}

/// Re-apply [`trim_rows`] to already joined text.
///
/// # Example
/// ```
/// use bl_braille::trim::trim_text;
/// let once = trim_text("\u{2800}\n\u{28FF}\u{2800}\n");
/// assert_eq!(once, "\u{28FF}");
/// assert_eq!(trim_text(&once), once);
/// ```
#[must_use]
pub fn trim_text(text: &str) -> String {
    let rows = text.split('\n').map(String::from).collect();
    join_rows(&trim_rows(rows))
}

#[cfg(test)]
mod tests {
    use super::*;

    fn rows(lines: &[&str]) -> Vec<String> {
        lines.iter().map(|s| (*s).to_string()).collect()
    }

    #[test]
    fn all_blank_rows_vanish() {
        let out = trim_rows(rows(&["\u{2800}\u{2800}", "\u{2800}", ""]));
        assert!(out.is_empty());
        assert_eq!(join_rows(&out), "");
    }

    #[test]
    fn interior_blank_rows_are_kept() {
        let out = trim_rows(rows(&["\u{28FF}", "\u{2800}\u{2800}", "\u{28FF}"]));
        assert_eq!(out, rows(&["\u{28FF}", "", "\u{28FF}"]));
    }

    #[test]
    fn leading_blank_cells_are_kept() {
        let out = trim_rows(rows(&["\u{2800}\u{2800}\u{2801}"]));
        assert_eq!(out, rows(&["\u{2800}\u{2800}\u{2801}"]));
    }

    #[test]
    fn only_trailing_rows_are_dropped() {
        let out = trim_rows(rows(&["\u{28FF}", "\u{2800}"]));
        assert_eq!(join_rows(&out), "\u{28FF}");
    }

    #[test]
    fn trimming_is_idempotent() {
        let once = join_rows(&trim_rows(rows(&[
            "\u{2800}",
            "\u{2800}\u{2847}\u{2800}",
            "\u{2800}",
            "\u{28FF}\u{28FF}",
            "\u{2800}\u{2800}",
        ])));
        assert_eq!(once, "\u{2800}\u{2847}\n\n\u{28FF}\u{28FF}");
        assert_eq!(trim_text(&once), once);
    }

    #[test]
    fn trim_text_on_empty_is_empty() {
        assert_eq!(trim_text(""), "");
    }
}
