//! Environment variable substitution in path lists.
//!
//! `$NAME` (NAME = longest run of ASCII alphanumerics and `_`) is replaced by
//! the variable's value, or removed when the variable is unset or empty.
//! With [`PathStyle::Posix`] a backslash copies the next character verbatim,
//! so `\$HOME` stays literal. Windows paths use `\` as separator and have no
//! escapes.

use std::iter::Peekable;
use std::str::Chars;

use crate::ports::Environment;

use super::style::PathStyle;

/// Expand `$NAME` references and escapes in `input`.
pub fn substitute(input: &str, style: PathStyle, env: &dyn Environment) -> String {
    let mut out = String::with_capacity(input.len());
    let mut chars = input.chars().peekable();

    while let Some(ch) = chars.next() {
        match ch {
            '\\' if style.has_escapes() => {
                // A trailing backslash escapes nothing.
                if let Some(escaped) = chars.next() {
                    out.push(escaped);
                }
            }
            '$' => {
                let name = take_var_name(&mut chars);
                if name.is_empty() {
                    continue;
                }
                if let Some(value) = env.var(&name).filter(|v| !v.is_empty()) {
                    out.push_str(&value);
                }
            }
            _ => out.push(ch),
        }
    }

    out
}

fn take_var_name(chars: &mut Peekable<Chars<'_>>) -> String {
    let mut name = String::new();
    while let Some(&c) = chars.peek() {
        if c.is_ascii_alphanumeric() || c == '_' {
            name.push(c);
            chars.next();
        } else {
            break;
        }
    }
    name
}
