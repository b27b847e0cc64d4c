//! Visibility rewriting for emitted snippets.
//!
//! A purely lexical, line-scoped transformation: a line whose content
//! starts with the `public` token gets that token replaced by `internal`,
//! unless the line carries the `// no-replace` opt-out marker. Nothing is
//! parsed; indented or mid-line modifiers are left alone on purpose.

use std::borrow::Cow;

/// Leading token marking a broadly visible declaration
pub const PUBLIC_MODIFIER: &str = "public";

/// Token substituted for [`PUBLIC_MODIFIER`]
pub const INTERNAL_MODIFIER: &str = "internal";

/// In-line marker suppressing the rewrite for that line
pub const NO_REPLACE_MARKER: &str = "// no-replace";

/// Rewrite leading `public` modifiers to `internal`, line by line
///
/// Line endings are normalized to `\n`; the input's trailing-newline
/// presence is preserved.
pub fn rewrite_visibility(raw: &str) -> String {
    let mut lines: Vec<Cow<'_, str>> = Vec::new();
    for line in raw.lines() {
        if starts_with_public(line) && !line.contains(NO_REPLACE_MARKER) {
            let rest = &line[PUBLIC_MODIFIER.len()..];
            lines.push(Cow::Owned(format!("{INTERNAL_MODIFIER}{rest}")));
        } else {
            lines.push(Cow::Borrowed(line));
        }
    }
    let mut text = lines.join("\n");
    if raw.ends_with('\n') {
        text.push('\n');
    }
    text
}

/// Apply the rewrite unless the pass keeps public modifiers
///
/// With `use_public_modifier` set, the raw text passes through
/// byte-identical.
pub fn apply(raw: &str, use_public_modifier: bool) -> Cow<'_, str> {
    if use_public_modifier {
        Cow::Borrowed(raw)
    } else {
        Cow::Owned(rewrite_visibility(raw))
    }
}

/// Whether a line begins with the `public` token
///
/// The token must end the line or be followed by a non-identifier
/// character, so `publicity` does not match.
fn starts_with_public(line: &str) -> bool {
    line.strip_prefix(PUBLIC_MODIFIER)
        .is_some_and(|rest| {
            rest.chars()
                .next()
                .is_none_or(|c| !c.is_ascii_alphanumeric() && c != '_')
        })
}
