//! Content-line primitives: escaping, folding, and UTC timestamps.

use chrono::{DateTime, TimeZone, Utc};

/// Maximum length of a physical content line, in octets, excluding CRLF.
pub const MAX_LINE_OCTETS: usize = 75;

/// Line terminator required between content lines.
pub const CRLF: &str = "\r\n";

/// Escapes reserved characters in a TEXT property value.
///
/// Backslash goes first so the escapes inserted for `;`, `,` and newlines are
/// not escaped a second time. CRLF, LF and a lone CR all become `\n`; other
/// control characters except HTAB are dropped.
pub fn escape_text(text: &str) -> String {
    text.replace('\\', "\\\\")
        .replace(';', "\\;")
        .replace(',', "\\,")
        .replace("\r\n", "\\n")
        .replace(['\n', '\r'], "\\n")
        .chars()
        .filter(|c| !c.is_control() || *c == '\t')
        .collect()
}

/// Reverses [`escape_text`].
///
/// Unknown escape sequences are kept verbatim.
pub fn unescape_text(text: &str) -> String {
    let mut out = String::with_capacity(text.len());
    let mut chars = text.chars();

    while let Some(c) = chars.next() {
        if c != '\\' {
            out.push(c);
            continue;
        }
        match chars.next() {
            Some('\\') => out.push('\\'),
            Some(';') => out.push(';'),
            Some(',') => out.push(','),
            Some('n' | 'N') => out.push('\n'),
            Some(other) => {
                out.push('\\');
                out.push(other);
            }
            None => out.push('\\'),
        }
    }

    out
}

/// Folds one logical content line so no physical line exceeds
/// [`MAX_LINE_OCTETS`].
///
/// Continuation lines start with a single space, which counts toward their
/// length. Splits only happen on UTF-8 character boundaries, so a chunk may
/// come out a few octets short when a multi-byte character straddles the
/// limit.
pub fn fold_line(line: &str) -> String {
    if line.len() <= MAX_LINE_OCTETS {
        return line.to_string();
    }

    let mut folded = String::with_capacity(line.len() + (line.len() / MAX_LINE_OCTETS) * 3);
    let mut rest = line;
    let mut limit = MAX_LINE_OCTETS;

    while rest.len() > limit {
        let split = floor_char_boundary(rest, limit);
        folded.push_str(&rest[..split]);
        folded.push_str(CRLF);
        folded.push(' ');
        rest = &rest[split..];
        limit = MAX_LINE_OCTETS - 1;
    }
    folded.push_str(rest);

    folded
}

/// Reverses [`fold_line`] on any folded text.
pub fn unfold(text: &str) -> String {
    text.replace("\r\n ", "")
}

/// Formats an instant as `YYYYMMDDTHHMMSS` in UTC.
///
/// The `Z` suffix is left to the caller. Sub-second precision is truncated.
pub fn format_timestamp<Tz: TimeZone>(instant: &DateTime<Tz>) -> String {
    instant
        .with_timezone(&Utc)
        .format("%Y%m%dT%H%M%S")
        .to_string()
}

/// Drops every control character from a value that is not TEXT.
///
/// URIs, UIDs and PRODID have no escaping; a CR or LF in them would end the
/// content line early.
pub(crate) fn raw_value(value: &str) -> String {
    value.chars().filter(|c| !c.is_control()).collect()
}

/// Builds a folded `NAME:value` line from a URI or other non-TEXT value.
pub(crate) fn property(name: &str, value: &str) -> String {
    fold_line(&format!("{}:{}", name, raw_value(value)))
}

/// Builds a folded `NAME:value` line, escaping the value as TEXT.
pub(crate) fn text_property(name: &str, value: &str) -> String {
    fold_line(&format!("{}:{}", name, escape_text(value)))
}

/// Builds a folded UTC date-time line (`NAME:YYYYMMDDTHHMMSSZ`).
pub(crate) fn utc_property(name: &str, instant: &DateTime<Utc>) -> String {
    property(name, &format!("{}Z", format_timestamp(instant)))
}

/// Largest index `<= limit` that lies on a character boundary of `s`.
fn floor_char_boundary(s: &str, limit: usize) -> usize {
    (0..=limit.min(s.len()))
        .rev()
        .find(|&i| s.is_char_boundary(i))
        .unwrap_or(0)
}
