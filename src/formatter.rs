//! Renders a token sequence as the textual descriptor list printed by the CLI.

use std::fmt::Write;

use crate::token::Token;

/// Format tokens as `NAME` / `NAME:value` descriptors joined by `", "`.
#[must_use]
pub fn format(tokens: &[Token]) -> String {
    let mut out = String::new();
    for (i, token) in tokens.iter().enumerate() {
        if i > 0 {
            out.push_str(", ");
        }
        // Writing into a String cannot fail.
        let _ = write!(out, "{token}");
    }
    out
}
