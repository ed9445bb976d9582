//! Bulk-text projection of a pair collection.
//!
//! One pair per line, written as `name: value`. A disabled pair carries a
//! leading `#`. The line is split at the first unescaped `:` and whitespace
//! around name and value is trimmed on read. Blank lines are ignored and a
//! line without a separator is a name with an empty value.
//!
//! Escapes keep the projection lossless for values that span lines or carry
//! surrounding whitespace, and for names that contain the separator or start
//! with the marker:
//!
//! | Escape     | Meaning |
//! |------------|---------|
//! | `\\`       | backslash |
//! | `\n`       | newline |
//! | `\r`       | carriage return |
//! | `\:`       | literal `:` |
//! | `\#`       | literal `#` |
//! | `\s`       | space |
//! | `\t`       | tab |
//! | `\u{XXXX}` | the character with that hex code point |
//!
//! The encoder only emits `\s`, `\t` and `\u{..}` for the first and last
//! character of a value, where trimming would otherwise drop them. Any other
//! backslash sequence is kept literally.

use super::collection::{Pair, PairCollection};

/// Prefix marking a disabled pair in bulk text.
pub const DISABLED_MARKER: char = '#';

const SEPARATOR: char = ':';
const ESCAPE: char = '\\';

/// Renders a collection as bulk text.
///
/// Pairs with both name and value empty are the editor's placeholder rows
/// and are not written.
#[must_use]
pub fn to_bulk_text(pairs: &PairCollection) -> String {
    pairs
        .iter()
        .filter(|p| !p.is_blank())
        .map(encode_line)
        .collect::<Vec<_>>()
        .join("\n")
}

/// Parses bulk text into a collection with fresh ids.
#[must_use]
pub fn from_bulk_text(text: &str) -> PairCollection {
    parse_lines(text)
        .map(|(name, value, enabled)| Pair::with_id(String::new(), name, value, enabled))
        .collect()
}

/// Parses bulk text, reusing ids from `previous` where a line is recognizably
/// the same pair.
///
/// Matching is positional: the i-th parsed line inherits the id of the i-th
/// pair `previous` would have written, provided both carry the same name.
/// Every other line receives a fresh id.
#[must_use]
pub fn from_bulk_text_with_ids(text: &str, previous: &PairCollection) -> PairCollection {
    let mut written = previous.iter().filter(|p| !p.is_blank());
    parse_lines(text)
        .map(|(name, value, enabled)| {
            let id = written
                .next()
                .filter(|prev| prev.name == name)
                .map(|prev| prev.id.clone())
                .unwrap_or_default();
            Pair::with_id(id, name, value, enabled)
        })
        .collect()
}

fn parse_lines(text: &str) -> impl Iterator<Item = (String, String, bool)> + '_ {
    text.lines().filter_map(parse_line)
}

fn parse_line(line: &str) -> Option<(String, String, bool)> {
    let trimmed = line.trim();
    if trimmed.is_empty() {
        return None;
    }

    let (enabled, rest) = match trimmed.strip_prefix(DISABLED_MARKER) {
        Some(rest) => (false, rest.trim_start()),
        None => (true, trimmed),
    };
    // A bare marker carries no pair.
    if rest.is_empty() {
        return None;
    }

    let (raw_name, raw_value) = split_unescaped(rest);
    let name = unescape(raw_name.trim());
    let value = raw_value.map(|v| unescape(v.trim())).unwrap_or_default();
    Some((name, value, enabled))
}

fn split_unescaped(line: &str) -> (&str, Option<&str>) {
    let mut escaped = false;
    for (index, ch) in line.char_indices() {
        if escaped {
            escaped = false;
        } else if ch == ESCAPE {
            escaped = true;
        } else if ch == SEPARATOR {
            return (&line[..index], Some(&line[index + ch.len_utf8()..]));
        }
    }
    (line, None)
}

fn unescape(raw: &str) -> String {
    let mut out = String::with_capacity(raw.len());
    let mut chars = raw.chars();
    while let Some(ch) = chars.next() {
        if ch != ESCAPE {
            out.push(ch);
            continue;
        }
        match chars.next() {
            Some('n') => out.push('\n'),
            Some('r') => out.push('\r'),
            Some('s') => out.push(' '),
            Some('t') => out.push('\t'),
            Some('u') => match code_point(chars.as_str()) {
                Some((c, rest)) => {
                    out.push(c);
                    chars = rest.chars();
                }
                None => {
                    out.push(ESCAPE);
                    out.push('u');
                }
            },
            Some(c @ (ESCAPE | SEPARATOR | DISABLED_MARKER)) => out.push(c),
            Some(other) => {
                out.push(ESCAPE);
                out.push(other);
            }
            None => out.push(ESCAPE),
        }
    }
    out
}

/// Reads `{XXXX}` at the start of `rest`, returning the char and what follows.
fn code_point(rest: &str) -> Option<(char, &str)> {
    let body = rest.strip_prefix('{')?;
    let end = body.find('}')?;
    let c = u32::from_str_radix(&body[..end], 16)
        .ok()
        .and_then(char::from_u32)?;
    Some((c, &body[end + 1..]))
}

fn encode_line(pair: &Pair) -> String {
    let mut line = String::new();
    if !pair.enabled {
        line.push(DISABLED_MARKER);
        line.push(' ');
    }
    line.push_str(&escape(&pair.name, true));
    line.push(SEPARATOR);
    if !pair.value.is_empty() {
        line.push(' ');
        line.push_str(&escape(&pair.value, false));
    }
    line
}

fn escape(text: &str, is_name: bool) -> String {
    let mut out = String::with_capacity(text.len());
    let last = text.chars().count().saturating_sub(1);
    for (index, ch) in text.chars().enumerate() {
        let at_edge = index == 0 || index == last;
        match ch {
            ' ' if !is_name && at_edge => out.push_str("\\s"),
            '\t' if !is_name && at_edge => out.push_str("\\t"),
            c if !is_name && at_edge && c.is_whitespace() && c != '\n' && c != '\r' => {
                out.push_str(&format!("\\u{{{:x}}}", u32::from(c)));
            }
            ESCAPE => out.push_str("\\\\"),
            '\n' => out.push_str("\\n"),
            '\r' => out.push_str("\\r"),
            SEPARATOR if is_name => out.push_str("\\:"),
            DISABLED_MARKER if is_name && index == 0 => out.push_str("\\#"),
            _ => out.push(ch),
        }
    }
    out
}
