//! Literal query highlighting for display.
//!
//! Highlighting is a plain case-insensitive substring match on the raw query,
//! not a fuzzy one. A tool that matched only through fuzzy scoring, or only
//! through its tags or category, shows no highlight at all.

use std::borrow::Cow;

use regex::RegexBuilder;

pub const MARK_OPEN: &str = "<mark>";
pub const MARK_CLOSE: &str = "</mark>";

/// Wrap the first case-insensitive occurrence of `query` in `<mark>` tags.
pub fn highlight<'a>(text: &'a str, query: &str) -> Cow<'a, str> {
    highlight_with(text, query, |matched| format!("{MARK_OPEN}{matched}{MARK_CLOSE}"))
}

/// Like [`highlight`], with a caller-supplied wrapper for the matched text.
///
/// The matched slice keeps its original casing. An empty or whitespace-only
/// query leaves the text untouched.
pub fn highlight_with<'a, F>(text: &'a str, query: &str, wrap: F) -> Cow<'a, str>
where
    F: FnOnce(&str) -> String,
{
    if query.trim().is_empty() {
        return Cow::Borrowed(text);
    }
    let Ok(pattern) = RegexBuilder::new(&regex::escape(query))
        .case_insensitive(true)
        .build()
    else {
        return Cow::Borrowed(text);
    };

    match pattern.find(text) {
        Some(found) => {
            let mut out = String::with_capacity(text.len() + MARK_OPEN.len() + MARK_CLOSE.len());
            out.push_str(&text[..found.start()]);
            out.push_str(&wrap(found.as_str()));
            out.push_str(&text[found.end()..]);
            Cow::Owned(out)
        }
        None => Cow::Borrowed(text),
    }
}
