//! Inline markup scanning.
//!
//! Finds `<name>content</name>` spans in text, where the closing tag may
//! repeat the name or be the bare `</>`. Content is matched non-greedily
//! (the nearest closer wins) and may span newlines. The scanner only
//! locates spans; applying the named style is the caller's job, which is
//! what lets nested expansion re-enter the full resolution pipeline.

use crate::style::name::{is_name_char, is_name_start};

/// One matched tag span inside a larger text.
pub(crate) struct TagMatch<'a> {
    /// Byte offset of the `<` that opens the tag.
    pub start: usize,
    /// Byte offset one past the closing tag.
    pub end: usize,
    /// The tag name, with the caller's original case.
    pub name: &'a str,
    /// The raw content between the open and close tags.
    pub inner: &'a str,
}

/// Finds the leftmost complete tag pair in `text`.
///
/// A `<` that does not begin a well-formed, closed tag is ordinary text;
/// scanning resumes at the next byte, so a later tag can still match.
pub(crate) fn find_tag(text: &str) -> Option<TagMatch<'_>> {
    let bytes = text.as_bytes();
    let mut i = 0;
    while i < bytes.len() {
        if bytes[i] == b'<' {
            if let Some(tag) = match_tag_at(text, i) {
                return Some(tag);
            }
        }
        i += 1;
    }
    None
}

fn match_tag_at(text: &str, open: usize) -> Option<TagMatch<'_>> {
    let (name, after_open) = parse_open_tag(&text[open..])?;
    let content_start = open + after_open;
    let rest = &text[content_start..];

    // nearest closer wins: either </name> (case-sensitive) or </>
    let named = format!("</{}>", name);
    let (close_at, close_len) = match (rest.find(&named), rest.find("</>")) {
        (Some(n), Some(e)) if e < n => (e, 3),
        (Some(n), _) => (n, named.len()),
        (None, Some(e)) => (e, 3),
        (None, None) => return None,
    };

    Some(TagMatch {
        start: open,
        end: content_start + close_at + close_len,
        name,
        inner: &rest[..close_at],
    })
}

/// Parses `<name>` at the start of `s`, returning the name and the byte
/// offset just past the `>`.
fn parse_open_tag(s: &str) -> Option<(&str, usize)> {
    let rest = &s[1..];
    for (idx, c) in rest.char_indices() {
        if idx == 0 {
            if !is_name_start(c) {
                return None;
            }
        } else if c == '>' {
            return Some((&rest[..idx], idx + 2));
        } else if !is_name_char(c) {
            return None;
        }
    }
    None
}
