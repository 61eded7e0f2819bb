//! Enum naming rules
//!
//! The generated methods hang off the enum types and value tables that
//! protoc-gen-go emits, so the symbol and the value prefix must spell the
//! enum the same way those tables do.

use heck::ToShoutySnakeCase;

/// Names derived from an enum's declared name
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct EnumNaming {
    /// Go identifier of the enum (`Color`, `HTTPStatus`)
    pub symbol: String,
    /// Conventional value prefix (`COLOR`, `HTTP_STATUS`)
    pub prefix: String,
}

/// Derive the Go symbol and value prefix for an enum
pub fn derive_naming(declared_name: &str) -> EnumNaming {
    EnumNaming {
        symbol: camel_case(declared_name),
        prefix: declared_name.to_shouty_snake_case(),
    }
}

/// Convert an identifier to upper camel case
///
/// Separators (`_`, `-`, `.`, space) are dropped and the letter after them
/// or after a digit is upper-cased. Existing capitals, acronym runs
/// included, are left alone. Any other character is dropped.
pub fn camel_case(s: &str) -> String {
    let mut out = String::with_capacity(s.len());
    let mut cap_next = true;

    for c in s.trim().chars() {
        if c.is_ascii_alphabetic() {
            out.push(if cap_next { c.to_ascii_uppercase() } else { c });
            cap_next = false;
        } else if c.is_ascii_digit() {
            out.push(c);
            cap_next = true;
        } else {
            cap_next = matches!(c, '_' | '-' | '.' | ' ');
        }
    }

    out
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_derive_naming_simple() {
        let naming = derive_naming("Color");
        assert_eq!(naming.symbol, "Color");
        assert_eq!(naming.prefix, "COLOR");
    }

    #[test]
    fn test_derive_naming_compound() {
        let naming = derive_naming("OrderStatus");
        assert_eq!(naming.symbol, "OrderStatus");
        assert_eq!(naming.prefix, "ORDER_STATUS");

        let naming = derive_naming("order_status");
        assert_eq!(naming.symbol, "OrderStatus");
        assert_eq!(naming.prefix, "ORDER_STATUS");
    }

    #[test]
    fn test_derive_naming_acronym() {
        let naming = derive_naming("HTTPStatus");
        assert_eq!(naming.symbol, "HTTPStatus");
        assert_eq!(naming.prefix, "HTTP_STATUS");
    }

    #[test]
    fn test_derive_naming_collapses_separators() {
        assert_eq!(derive_naming("Foo_Bar").symbol, "FooBar");
        assert_eq!(derive_naming("_private").symbol, "Private");
        assert_eq!(derive_naming("inner_kind").symbol, "InnerKind");
    }

    #[test]
    fn test_camel_case() {
        assert_eq!(camel_case(""), "");
        assert_eq!(camel_case("size"), "Size");
        assert_eq!(camel_case("v2_mode"), "V2Mode");
        assert_eq!(camel_case("a1b"), "A1B");
        assert_eq!(camel_case("dotted.name-with dash"), "DottedNameWithDash");
        assert_eq!(camel_case("__double__under"), "DoubleUnder");
    }

    #[test]
    fn test_naming_is_idempotent() {
        for name in ["Color", "order_status", "HTTPStatus", "_private", "a1b", "Foo_Bar"] {
            let naming = derive_naming(name);
            assert_eq!(camel_case(&naming.symbol), naming.symbol, "{}", name);
            assert_eq!(
                naming.prefix.to_shouty_snake_case(),
                naming.prefix,
                "{}",
                name
            );
        }
    }
}
