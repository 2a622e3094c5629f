//! Newtype IDs for type-safe entity references.
//!
//! Use the `define_id!` macro to create type-safe ID wrappers that prevent
//! accidentally mixing IDs from different entity types.

/// Macro to define a type-safe ID wrapper.
///
/// Creates a newtype wrapper around `i32` with:
/// - `Serialize`/`Deserialize` with `#[serde(transparent)]`
/// - `Debug`, `Clone`, `Copy`, `PartialEq`, `Eq`, `Hash`, `Display`
/// - Conversion methods: `new()`, `as_i32()`, `parse_lenient()`
/// - `From<i32>` and `Into<i32>` implementations
///
/// # Example
///
/// ```rust
/// # use cake_shop_core::define_id;
/// define_id!(ProductId);
/// define_id!(BatchId);
///
/// let product_id = ProductId::new(1);
/// let batch_id = BatchId::new(1);
///
/// // These are different types, so this won't compile:
/// // let _: ProductId = batch_id;
/// ```
#[macro_export]
macro_rules! define_id {
    ($name:ident) => {
        #[derive(
            Debug,
            Clone,
            Copy,
            PartialEq,
            Eq,
            Hash,
            ::serde::Serialize,
            ::serde::Deserialize
        )]
        #[serde(transparent)]
        pub struct $name(i32);

        impl $name {
            /// Create a new ID from an i32 value.
            #[must_use]
            pub const fn new(id: i32) -> Self {
                Self(id)
            }

            /// Get the underlying i32 value.
            #[must_use]
            pub const fn as_i32(&self) -> i32 {
                self.0
            }

            /// Coerce loosely typed input (route params, form fields) into an ID.
            ///
            /// Leading whitespace and an optional sign are accepted, then the
            /// longest run of ASCII digits is read. Anything after the digits is
            /// ignored, so `"12abc"` yields `12`. Returns `None` when no digit is
            /// present or the value does not fit in an `i32`.
            #[must_use]
            pub fn parse_lenient(input: &str) -> Option<Self> {
                $crate::types::id::parse_leading_int(input).map(Self)
            }
        }

        impl ::core::fmt::Display for $name {
            fn fmt(&self, f: &mut ::core::fmt::Formatter<'_>) -> ::core::fmt::Result {
                write!(f, "{}", self.0)
            }
        }

        impl From<i32> for $name {
            fn from(id: i32) -> Self {
                Self(id)
            }
        }

        impl From<$name> for i32 {
            fn from(id: $name) -> Self {
                id.0
            }
        }
    };
}

define_id!(ProductId);

/// Read a leading integer the way loosely typed clients coerce ids.
#[doc(hidden)]
#[must_use]
pub fn parse_leading_int(input: &str) -> Option<i32> {
    let trimmed = input.trim_start();
    let (negative, rest) = trimmed.strip_prefix('-').map_or_else(
        || (false, trimmed.strip_prefix('+').unwrap_or(trimmed)),
        |rest| (true, rest),
    );

    let digits_len = rest.bytes().take_while(u8::is_ascii_digit).count();
    if digits_len == 0 {
        return None;
    }

    let value: i64 = rest.get(..digits_len)?.parse().ok()?;
    let value = if negative { -value } else { value };
    i32::try_from(value).ok()
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_product_id_display() {
        assert_eq!(ProductId::new(7).to_string(), "7");
    }

    #[test]
    fn test_product_id_serde_transparent() {
        let json = serde_json::to_string(&ProductId::new(3)).ok();
        assert_eq!(json.as_deref(), Some("3"));
    }

    #[test]
    fn test_parse_lenient_plain() {
        assert_eq!(ProductId::parse_lenient("5"), Some(ProductId::new(5)));
    }

    #[test]
    fn test_parse_lenient_trailing_garbage() {
        assert_eq!(ProductId::parse_lenient("  12abc"), Some(ProductId::new(12)));
        assert_eq!(ProductId::parse_lenient("3.9"), Some(ProductId::new(3)));
    }

    #[test]
    fn test_parse_lenient_sign() {
        assert_eq!(ProductId::parse_lenient("-4"), Some(ProductId::new(-4)));
        assert_eq!(ProductId::parse_lenient("+4"), Some(ProductId::new(4)));
    }

    #[test]
    fn test_parse_lenient_rejects_non_numeric() {
        assert_eq!(ProductId::parse_lenient(""), None);
        assert_eq!(ProductId::parse_lenient("abc"), None);
        assert_eq!(ProductId::parse_lenient("-"), None);
    }

    #[test]
    fn test_parse_lenient_overflow() {
        assert_eq!(ProductId::parse_lenient("99999999999"), None);
    }
}
