//! Type name shortening
//!
//! Collapses fully qualified import paths in type and function names down to
//! their last package component, for display only. Anything that cannot be
//! parsed with confidence is returned unchanged.

use log::trace;

/// Shorten a type name for display
///
/// Examples:
/// - `github.com/foo/bar/baz.MyType` -> `baz.MyType`
/// - `[]*github.com/foo/bar.T` -> `[]*bar.T`
/// - `map[string]github.com/a/b.V` -> `map[string]b.V`
/// - `fmt.Stringer` -> `fmt.Stringer`
pub fn shorten_type(typ: &str) -> String {
    match shorten(typ) {
        Some(short) => short,
        None => {
            trace!("leaving type name unshortened: {}", typ);
            typ.to_string()
        }
    }
}

/// Shorten a fully qualified function symbol
///
/// `github.com/foo/bar.(*T).Method` -> `bar.(*T).Method`
pub fn shorten_function_name(name: &str) -> String {
    // Generic instantiations may carry their own qualified paths
    let head = match name.find('[') {
        Some(i) => &name[..i],
        None => name,
    };
    let Some(slash) = head.rfind('/') else {
        return name.to_string();
    };
    if head[slash + 1..].contains('.') {
        name[slash + 1..].to_string()
    } else {
        name.to_string()
    }
}

fn shorten(typ: &str) -> Option<String> {
    if let Some(rest) = typ.strip_prefix("map[") {
        let close = matching_bracket(rest)?;
        let key = shorten(&rest[..close])?;
        let value = shorten(&rest[close + 1..])?;
        return Some(format!("map[{}]{}", key, value));
    }

    if let Some(rest) = typ.strip_prefix('[') {
        let close = rest.find(']')?;
        if !rest[..close].bytes().all(|b| b.is_ascii_digit()) {
            return None;
        }
        let elem = shorten(&rest[close + 1..])?;
        return Some(format!("{}{}", &typ[..close + 2], elem));
    }

    if let Some(rest) = typ.strip_prefix('*') {
        return Some(format!("*{}", shorten(rest)?));
    }

    if matches!(typ, "interface {}" | "interface{}" | "struct {}" | "struct{}") {
        return Some(typ.to_string());
    }

    if contains_anonymous_type(typ) {
        return None;
    }

    if let Some(lbrk) = typ.find('[') {
        let args = typ[lbrk + 1..].strip_suffix(']')?;
        let name = shorten(&typ[..lbrk])?;
        let args = split_top_level(args)
            .into_iter()
            .map(|arg| shorten(arg.trim()))
            .collect::<Option<Vec<_>>>()?;
        return Some(format!("{}[{}]", name, args.join(", ")));
    }

    shorten_plain(typ)
}

/// Shorten a possibly package-qualified identifier.
fn shorten_plain(typ: &str) -> Option<String> {
    if typ.is_empty() {
        return None;
    }
    let valid = typ
        .chars()
        .all(|c| c.is_alphanumeric() || matches!(c, '_' | '.' | '/' | '@' | '%' | '-'));
    if !valid {
        return None;
    }
    if typ.matches('/').count() <= 1 {
        return Some(typ.to_string());
    }
    let slash = typ.rfind('/')?;
    Some(typ[slash + 1..].to_string())
}

/// Anonymous struct, interface or func types with a non-empty body
fn contains_anonymous_type(typ: &str) -> bool {
    const OPENERS: [(&str, char); 6] = [
        ("interface {", '}'),
        ("interface{", '}'),
        ("struct {", '}'),
        ("struct{", '}'),
        ("func(", ')'),
        ("func (", ')'),
    ];
    OPENERS.iter().any(|(open, close)| {
        typ.match_indices(open)
            .any(|(i, _)| typ[i + open.len()..].chars().next() != Some(*close))
    })
}

/// Index of the `]` closing a bracket already opened before `s`.
fn matching_bracket(s: &str) -> Option<usize> {
    let mut depth = 1usize;
    for (i, b) in s.bytes().enumerate() {
        match b {
            b'[' => depth += 1,
            b']' => {
                depth -= 1;
                if depth == 0 {
                    return Some(i);
                }
            }
            _ => {}
        }
    }
    None
}

fn split_top_level(args: &str) -> Vec<&str> {
    let mut parts = Vec::new();
    let mut depth = 0i32;
    let mut start = 0;
    for (i, b) in args.bytes().enumerate() {
        match b {
            b'[' | b'(' | b'{' => depth += 1,
            b']' | b')' | b'}' => depth -= 1,
            b',' if depth == 0 => {
                parts.push(&args[start..i]);
                start = i + 1;
            }
            _ => {}
        }
    }
    parts.push(&args[start..]);
    parts
}
