/// Plain output: the text followed by one newline.
///
/// # Example
/// ```
/// use bl_braille::format::render_plain;
/// assert_eq!(render_plain("\u{28FF}"), "\u{28FF}\n");
/// ```
#[must_use]
pub fn render_plain(text: &str) -> String {
    let mut out = String::with_capacity(text.len() + 1);
    out.push_str(text);
    out.push('\n');
    out
}

/// Emit `text` as a Rust `&str` constant named `const_name`.
///
/// Backslashes and double quotes are escaped. Each row sits on its own
/// source line ending in `\n\` so the value holds every row followed by a
/// newline, the same bytes [`render_plain`] prints.
///
/// # Example
/// ```
/// use bl_braille::format::render_rust_const;
/// let src = render_rust_const("\u{28FF}\n\u{2801}", "LOGO_BRAILLE");
/// assert_eq!(
///     src,
///     "pub const LOGO_BRAILLE: &str = \"\\\n\u{28FF}\\n\\\n\u{2801}\\n\\\n\";\n"
/// );
/// ```
#[must_use]
pub fn render_rust_const(text: &str, const_name: &str) -> String {
    let escaped = text.replace('\\', "\\\\").replace('"', "\\\"");

    let mut out = format!("pub const {const_name}: &str = \"\\\n");
    for line in escaped.split('\n') {
        out.push_str(line);
        out.push_str("\\n\\\n");
    }
    out.push_str("\";\n");
    out
}

/// Decode a declaration produced by [`render_rust_const`] back to the
/// string value the Rust compiler would see.
///
/// Only the escapes [`render_rust_const`] emits are understood (`\\`, `\"`,
/// `\n` and line continuations). Returns `None` on anything else.
///
/// # Example
/// ```
/// use bl_braille::format::{render_plain, render_rust_const, unescape_rust_const};
/// let text = "\u{2847}\n\u{28FF}";
/// let decoded = unescape_rust_const(&render_rust_const(text, "X")).unwrap();
/// assert_eq!(decoded, render_plain(text));
/// ```
#[must_use]
pub fn unescape_rust_const(literal: &str) -> Option<String> {
    let start = literal.find("= \"")? + 3;
    let end = literal.rfind("\";")?;
    let body = literal.get(start..end)?;

    let mut out = String::with_capacity(body.len());
    let mut chars = body.chars().peekable();
    while let Some(c) = chars.next() {
        if c != '\\' {
            out.push(c);
            continue;
        }
        match chars.next()? {
            '\\' => out.push('\\'),
            '"' => out.push('"'),
            'n' => out.push('\n'),
            // line continuation: skip the newline and the next line's indent
            '\n' => {
                while chars
                    .next_if(|c| matches!(c, ' ' | '\t' | '\n' | '\r'))
                    .is_some()
                {}
            }
            _ => return None,
        }
    }
    Some(out)
}
