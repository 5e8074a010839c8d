//! Leaf value text: quoted strings and integer bases

use crate::config::IntBase;

/// Double-quote a string, escaping quotes, backslashes and control characters.
pub(crate) fn quote(s: &str) -> String {
    let mut out = String::with_capacity(s.len() + 2);
    out.push('"');
    for c in s.chars() {
        match c {
            '"' => out.push_str("\\\""),
            '\\' => out.push_str("\\\\"),
            '\n' => out.push_str("\\n"),
            '\r' => out.push_str("\\r"),
            '\t' => out.push_str("\\t"),
            '\x07' => out.push_str("\\a"),
            '\x08' => out.push_str("\\b"),
            '\x0b' => out.push_str("\\v"),
            '\x0c' => out.push_str("\\f"),
            c if c.is_control() || !is_printable(c) => {
                let code = c as u32;
                if code < 0x80 {
                    out.push_str(&format!("\\x{:02x}", code));
                } else if code <= 0xffff {
                    out.push_str(&format!("\\u{:04x}", code));
                } else {
                    out.push_str(&format!("\\U{:08x}", code));
                }
            }
            c => out.push(c),
        }
    }
    out.push('"');
    out
}

/// False for invisible format characters and for separators other than
/// the ASCII space.
fn is_printable(c: char) -> bool {
    !matches!(
        c,
        '\u{a0}'
            | '\u{ad}'
            | '\u{600}'..='\u{605}'
            | '\u{61c}'
            | '\u{6dd}'
            | '\u{70f}'
            | '\u{1680}'
            | '\u{180e}'
            | '\u{2000}'..='\u{200f}'
            | '\u{2028}'..='\u{202f}'
            | '\u{205f}'..='\u{2064}'
            | '\u{2066}'..='\u{206f}'
            | '\u{3000}'
            | '\u{feff}'
            | '\u{fff9}'..='\u{fffb}'
            | '\u{110bd}'
            | '\u{1d173}'..='\u{1d17a}'
            | '\u{e0001}'
            | '\u{e0020}'..='\u{e007f}'
    )
}

/// Re-render a decimal integer in the requested base.
///
/// Text that is not a plain decimal integer comes back unchanged.
pub(crate) fn int_in_base(value: &str, base: IntBase) -> String {
    if base == IntBase::Decimal {
        return value.to_string();
    }
    let Ok(n) = value.parse::<i128>() else {
        return value.to_string();
    };
    let sign = if n < 0 { "-" } else { "" };
    let m = n.unsigned_abs();
    match base {
        IntBase::Hex => format!("{}0x{:x}", sign, m),
        IntBase::Octal => format!("{}0o{:o}", sign, m),
        IntBase::Binary => format!("{}0b{:b}", sign, m),
        IntBase::Decimal => value.to_string(),
    }
}
