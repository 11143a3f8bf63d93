//! Reflective type-name parsing for enum meta-vars.
//!
//! Enum meta-var type names arrive as compiler-reflected pretty-function
//! strings (`… [T = foo::bar::OperandShape]`). The manifest vocabulary wants
//! the clean terminal name, so this parser extracts the template payload,
//! strips `namespace::` qualifiers (including inside template argument
//! lists), and normalizes whitespace. The output format is a contract with
//! downstream manifest consumers.

/// Extract a clean type name from a reflected pretty-function string, or
/// from a bare qualified name.
pub fn parse_type_name(pretty: &str) -> String {
    strip_qualifiers(extract_payload(pretty))
}

/// Locate the `[T = …]` payload if present; otherwise the whole input is
/// treated as the type name.
fn extract_payload(pretty: &str) -> &str {
    for marker in ["[with T = ", "[T = "] {
        if let Some(pos) = pretty.find(marker) {
            let rest = &pretty[pos + marker.len()..];
            let end = rest.rfind(']').unwrap_or(rest.len());
            return rest[..end].trim();
        }
    }
    pretty.trim()
}

/// Drop every `identifier::` qualifier and collapse whitespace. Spaces
/// survive only between two adjacent identifiers (`unsigned long`); a comma
/// is always followed by exactly one space.
fn strip_qualifiers(payload: &str) -> String {
    let mut out = String::with_capacity(payload.len());
    let mut ident = String::new();
    let mut chars = payload.chars().peekable();
    while let Some(c) = chars.next() {
        if c.is_alphanumeric() || c == '_' {
            ident.push(c);
        } else if c == ':' && chars.peek() == Some(&':') {
            chars.next();
            ident.clear();
        } else {
            if !ident.is_empty() {
                out.push_str(&ident);
                ident.clear();
            }
            if c.is_whitespace() {
                while chars.peek().is_some_and(|c| c.is_whitespace()) {
                    chars.next();
                }
                let prev_is_ident = out.chars().last().is_some_and(|c| c.is_alphanumeric() || c == '_');
                let next_is_ident = chars.peek().is_some_and(|c| c.is_alphanumeric() || *c == '_');
                if prev_is_ident && next_is_ident {
                    out.push(' ');
                }
            } else {
                out.push(c);
                if c == ',' {
                    out.push(' ');
                    while chars.peek().is_some_and(|c| c.is_whitespace()) {
                        chars.next();
                    }
                }
            }
        }
    }
    if !ident.is_empty() {
        out.push_str(&ident);
    }
    out
}
