//! Escape-free text utilities: stripping sequences and centering lines.

/// Default target width for [`center`].
pub const DEFAULT_CENTER_WIDTH: usize = 80;

/// Strips every `\x1b[<digits>m` color sequence from `text`.
///
/// Only sequences whose parameter bytes are all digits are removed;
/// anything else, including multi-parameter sequences, passes through
/// untouched.
///
/// # Example
///
/// ```rust
/// assert_eq!(tinge::clean("\x1b[1m\x1b[31mfoo\x1b[0m\x1b[0m"), "foo");
/// ```
pub fn clean(text: &str) -> String {
    let bytes = text.as_bytes();
    let mut out = String::with_capacity(text.len());
    let mut start = 0;
    let mut i = 0;
    while i < bytes.len() {
        if bytes[i] == 0x1b && bytes.get(i + 1) == Some(&b'[') {
            let mut j = i + 2;
            while j < bytes.len() && bytes[j].is_ascii_digit() {
                j += 1;
            }
            if j > i + 2 && bytes.get(j) == Some(&b'm') {
                out.push_str(&text[start..i]);
                i = j + 1;
                start = i;
                continue;
            }
        }
        i += 1;
    }
    out.push_str(&text[start..]);
    out
}

/// Alias for [`clean`].
pub fn strip(text: &str) -> String {
    clean(text)
}

/// Centers each line of `text` to `width` columns.
///
/// Lines are trimmed, then padded with spaces on both sides until their
/// code-point count reaches `width`; an odd leftover space goes on the
/// trailing side. Counting code points rather than bytes keeps multi-byte
/// characters one column wide. Lines already at or past `width` are left
/// as trimmed.
///
/// # Example
///
/// ```rust
/// let centered = tinge::center("✩", 5);
/// assert_eq!(centered, "  ✩  ");
/// ```
pub fn center(text: &str, width: usize) -> String {
    let lines: Vec<String> = text
        .split('\n')
        .map(|line| pad_both(line.trim(), width))
        .collect();
    lines.join("\n")
}

fn pad_both(line: &str, width: usize) -> String {
    let pad = width.saturating_sub(line.chars().count());
    let left = pad / 2;
    let right = pad - left;
    format!("{}{}{}", " ".repeat(left), line, " ".repeat(right))
}
