//! Variable formatter
//!
//! Renders a variable snapshot as text, either compactly on one line or
//! spread over indented lines when nested containers would make a single
//! line unreadable.

mod flags;
mod leaf;

use crate::config::FormatOptions;
use crate::typename::shorten_type;
use crate::variable::{Kind, Variable};

use flags::RenderFlags;
use leaf::{int_in_base, quote};

/// One nesting level in multi-line output
const INDENT: &str = "\t";

/// Render `root` on a single line with the default options
pub fn format_single_line(root: &Variable, include_type: bool, full_types: bool) -> String {
    Formatter::default().single_line(root, include_type, full_types)
}

/// Render `root` across indented lines with the default options
pub fn format_multi_line(root: &Variable, base_indent: &str) -> String {
    Formatter::default().multi_line(root, base_indent)
}

/// Stateless renderer; holds only its options and is safe to share.
#[derive(Debug, Clone, Default)]
pub struct Formatter {
    options: FormatOptions,
}

impl Formatter {
    pub fn new(options: FormatOptions) -> Self {
        Self { options }
    }

    pub fn single_line(&self, root: &Variable, include_type: bool, full_types: bool) -> String {
        let mut buf = String::new();
        self.write_to(
            &mut buf,
            root,
            RenderFlags::single_line(include_type, full_types),
            "",
        );
        buf
    }

    /// Type names are always shown at the top level.
    pub fn multi_line(&self, root: &Variable, base_indent: &str) -> String {
        let mut buf = String::new();
        self.write_to(&mut buf, root, RenderFlags::multi_line(), base_indent);
        buf
    }

    fn write_to(&self, buf: &mut String, v: &Variable, flags: RenderFlags, indent: &str) {
        if v.is_unreadable() {
            buf.push_str(&format!("(unreadable {})", v.unreadable));
            return;
        }

        if !flags.top && v.is_absent() {
            if flags.include_type && !v.type_name.is_empty() && v.type_name != "void" {
                buf.push_str(&self.display_type(&v.type_name, flags));
                buf.push(' ');
            }
            buf.push_str("nil");
            return;
        }

        match v.kind {
            Kind::Slice => self.write_slice(buf, v, flags, indent),
            Kind::Array => {
                if flags.include_type {
                    self.write_type_prefix(buf, v, flags);
                }
                self.write_list(buf, v, flags, indent);
            }
            Kind::Ptr => self.write_pointer(buf, v, flags, flags.nested(), indent, "*"),
            Kind::UnsafePointer => {
                let addr = v.children.first().map_or(v.addr, |target| target.addr);
                buf.push_str(&format!("unsafe.Pointer({})", hex(addr)));
            }
            Kind::Chan if flags.newlines => self.write_struct(buf, v, flags, indent),
            Kind::Chan => self.write_chan(buf, v, flags),
            Kind::Struct => self.write_struct(buf, v, flags, indent),
            Kind::Interface => self.write_interface(buf, v, flags, indent),
            Kind::Map => self.write_map(buf, v, flags, indent),
            Kind::Func => {
                if v.value.is_empty() {
                    buf.push_str("nil");
                } else {
                    buf.push_str(&v.value);
                }
            }
            Kind::String => self.write_string(buf, v),
            kind if kind.is_complex() && v.children.len() >= 2 => {
                buf.push_str(&format!(
                    "({} + {}i)",
                    v.children[0].value, v.children[1].value
                ));
            }
            _ => self.write_basic(buf, v),
        }
    }

    fn display_type(&self, type_name: &str, flags: RenderFlags) -> String {
        if flags.full_types {
            type_name.to_string()
        } else {
            shorten_type(type_name)
        }
    }

    fn write_type_prefix(&self, buf: &mut String, v: &Variable, flags: RenderFlags) {
        buf.push_str(&self.display_type(&v.type_name, flags));
        buf.push(' ');
    }

    fn write_slice(&self, buf: &mut String, v: &Variable, flags: RenderFlags, indent: &str) {
        if flags.include_type {
            buf.push_str(&format!(
                "{} len: {}, cap: {}, ",
                self.display_type(&v.type_name, flags),
                v.len,
                v.cap
            ));
        }
        if v.base == 0 && v.children.is_empty() {
            buf.push_str("nil");
            return;
        }
        self.write_list(buf, v, flags, indent);
    }

    /// Elements of an array or slice; their type is implied by the container.
    fn write_list(&self, buf: &mut String, v: &Variable, flags: RenderFlags, indent: &str) {
        let nl = self.should_expand(v, flags);
        let child_flags = flags
            .nested()
            .with_newlines(nl)
            .with_include_type(false);
        let child_indent = format!("{}{}", indent, INDENT);

        let items = v
            .children
            .iter()
            .map(|child| self.render(child, child_flags, &child_indent))
            .collect();
        let marker = truncation_marker(v.children.len(), v.omitted(v.children.len()));
        write_items(buf, ('[', ']'), items, marker, nl, indent);
    }

    fn write_struct(&self, buf: &mut String, v: &Variable, flags: RenderFlags, indent: &str) {
        if v.children.is_empty() && v.len != 0 {
            buf.push_str(&format!(
                "(*{})({})",
                self.display_type(&v.type_name, flags),
                hex(v.addr)
            ));
            return;
        }

        let mut include_type = flags.include_type;
        if v.kind == Kind::Struct && !v.value.is_empty() {
            buf.push_str(&format!(
                "{}({}) ",
                self.display_type(&v.type_name, flags),
                v.value
            ));
            include_type = false;
        }
        if include_type {
            self.write_type_prefix(buf, v, flags);
        }

        let nl = self.should_expand(v, flags);
        // Fields mix types, so each one shows its own
        let child_flags = flags.nested().with_newlines(nl).with_include_type(true);
        let child_indent = format!("{}{}", indent, INDENT);

        let items = v
            .children
            .iter()
            .map(|field| {
                format!(
                    "{}: {}",
                    field.name,
                    self.render(field, child_flags, &child_indent)
                )
            })
            .collect();
        let marker = truncation_marker(v.children.len(), v.omitted(v.children.len()));
        write_items(buf, ('{', '}'), items, marker, nl, indent);
    }

    /// Children alternate key, value.
    fn write_map(&self, buf: &mut String, v: &Variable, flags: RenderFlags, indent: &str) {
        if flags.include_type {
            self.write_type_prefix(buf, v, flags);
        }
        if v.base == 0 && v.children.is_empty() {
            buf.push_str("nil");
            return;
        }

        let nl = flags.newlines && !v.children.is_empty();
        let key_flags = flags
            .nested()
            .with_newlines(false)
            .with_include_type(false);
        let value_flags = flags
            .nested()
            .with_newlines(nl)
            .with_include_type(false);
        let child_indent = format!("{}{}", indent, INDENT);

        let items: Vec<String> = v
            .children
            .chunks_exact(2)
            .map(|pair| {
                format!(
                    "{}: {}",
                    self.render(&pair[0], key_flags, &child_indent),
                    self.render(&pair[1], value_flags, &child_indent)
                )
            })
            .collect();
        let pairs = items.len();
        let marker = truncation_marker(pairs, v.omitted(pairs));
        write_items(buf, ('[', ']'), items, marker, nl, indent);
    }

    /// `prefix` precedes the rendered target; interfaces pass an empty one.
    fn write_pointer(
        &self,
        buf: &mut String,
        v: &Variable,
        flags: RenderFlags,
        target_flags: RenderFlags,
        indent: &str,
        prefix: &str,
    ) {
        if v.type_name.is_empty() {
            buf.push_str("nil");
            return;
        }
        let Some(target) = v.children.first() else {
            buf.push_str(&format!("({})(?)", self.display_type(&v.type_name, flags)));
            return;
        };
        if target.only_addr && target.addr != 0 {
            buf.push_str(&format!(
                "({})({})",
                self.display_type(&v.type_name, flags),
                hex(target.addr)
            ));
            return;
        }
        buf.push_str(prefix);
        self.write_to(buf, target, target_flags, indent);
    }

    fn write_chan(&self, buf: &mut String, v: &Variable, flags: RenderFlags) {
        if v.children.is_empty() {
            buf.push_str("nil");
            return;
        }
        let len = &v.children[0].value;
        let cap = v.children.get(1).map_or("?", |c| c.value.as_str());
        buf.push_str(&format!(
            "{} {}/{}",
            self.display_type(&v.type_name, flags),
            len,
            cap
        ));
    }

    fn write_interface(&self, buf: &mut String, v: &Variable, flags: RenderFlags, indent: &str) {
        // Escaped interface variable that went out of scope
        if v.addr == 0 {
            buf.push_str("nil");
            return;
        }
        let Some(data) = v.children.first() else {
            if flags.include_type {
                self.write_type_prefix(buf, v, flags);
            }
            buf.push_str("nil");
            return;
        };

        if flags.include_type {
            if data.kind == Kind::Invalid {
                self.write_type_prefix(buf, v, flags);
                if data.addr == 0 {
                    buf.push_str("nil");
                    return;
                }
            } else {
                buf.push_str(&format!(
                    "{}({}) ",
                    self.display_type(&v.type_name, flags),
                    self.display_type(&data.type_name, flags)
                ));
            }
        }

        // The dynamic type is shown by whichever level did not show it yet
        let data_flags = flags.nested().with_include_type(!flags.include_type);
        if data.kind == Kind::Ptr {
            self.write_pointer(buf, data, flags, data_flags, indent, "");
        } else {
            self.write_to(buf, data, data_flags, indent);
        }
    }

    fn write_string(&self, buf: &mut String, v: &Variable) {
        buf.push_str(&quote(&v.value));
        let missing = v.len.saturating_sub(v.value.len() as i64);
        if missing > 0 {
            buf.push_str(&format!("...+{} more", missing));
        }
    }

    fn write_basic(&self, buf: &mut String, v: &Variable) {
        if v.value.is_empty() {
            buf.push_str(&format!("(unknown {})", v.kind));
        } else if v.kind.is_integer() {
            buf.push_str(&int_in_base(&v.value, self.options.int_base));
        } else {
            buf.push_str(&v.value);
        }
    }

    fn render(&self, v: &Variable, flags: RenderFlags, indent: &str) -> String {
        let mut out = String::new();
        self.write_to(&mut out, v, flags, indent);
        out
    }

    /// Decide whether a struct, array or slice gets one child per line.
    ///
    /// Looks one level down, through pointer chains only.
    fn should_expand(&self, v: &Variable, flags: RenderFlags) -> bool {
        if !flags.newlines || v.children.is_empty() {
            return false;
        }
        if flags.top && self.options.expand_top_level {
            return true;
        }
        v.children.iter().any(|child| {
            let (kind, through_ptr) = child.recursive_kind();
            match kind {
                Kind::String => {
                    through_ptr || child.value.len() > self.options.short_string_len
                }
                kind => kind.is_composite(),
            }
        })
    }
}

fn hex(addr: u64) -> String {
    format!("0x{:x}", addr)
}

/// `...+N more` after shown elements, bare `...` when none were shown
fn truncation_marker(shown: usize, omitted: i64) -> Option<String> {
    if omitted <= 0 {
        None
    } else if shown == 0 {
        Some("...".to_string())
    } else {
        Some(format!("...+{} more", omitted))
    }
}

fn write_items(
    buf: &mut String,
    (open, close): (char, char),
    items: Vec<String>,
    marker: Option<String>,
    nl: bool,
    indent: &str,
) {
    let count = items.len();
    buf.push(open);
    for (i, item) in items.into_iter().enumerate() {
        if nl {
            buf.push('\n');
            buf.push_str(indent);
            buf.push_str(INDENT);
        }
        buf.push_str(&item);
        if i + 1 < count {
            buf.push(',');
            if !nl {
                buf.push(' ');
            }
        } else if nl && marker.is_some() {
            buf.push(',');
        }
    }
    if let Some(marker) = marker {
        if count > 0 {
            if nl {
                buf.push('\n');
                buf.push_str(indent);
                buf.push_str(INDENT);
            } else {
                buf.push(',');
            }
        }
        buf.push_str(&marker);
    }
    if nl {
        buf.push('\n');
        buf.push_str(indent);
    }
    buf.push(close);
}
