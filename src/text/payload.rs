//! Payload formats.

use core::fmt;
use core::marker::PhantomData;
use core::str::FromStr;

use alloc::string::{String, ToString};

use crate::error::ParseError;
use crate::text::reader::{escape_into, starts_with_null, Reader, ESCAPE};

/// Spelling of node values in the text format.
pub trait PayloadFormat {
    /// Value stored in each node.
    type Value;
}

/// Payload format which can be read.
pub trait ReadPayload: PayloadFormat {
    /// Reads one payload.
    ///
    /// Whitespace before the payload is not yet skipped. The reader must be
    /// left right before the delimiter following the payload.
    ///
    /// # Errors
    ///
    /// Returns the error for a malformed or unconvertible payload.
    fn read(&self, reader: &mut Reader<'_>) -> Result<Self::Value, ParseError>;
}

/// Payload format which can be written.
pub trait WritePayload: PayloadFormat {
    /// Appends one payload to `out`.
    fn write(&self, value: &Self::Value, out: &mut String);
}

/// Converts a text to a value, keeping the text for the error.
fn convert<V: FromStr>(text: String) -> Result<V, ParseError> {
    text.parse().map_err(|_| ParseError::InvalidValue(text))
}

/// Plain escaped text, such as `hello` or `4\,2`.
///
/// A text which reads as the `null` keyword is written with its first
/// letter escaped.
pub struct Bare<V> {
    /// Value type.
    _value: PhantomData<fn() -> V>,
}

impl<V> Bare<V> {
    /// Creates the format.
    #[inline]
    #[must_use]
    pub const fn new() -> Self {
        Self {
            _value: PhantomData,
        }
    }
}

impl<V> PayloadFormat for Bare<V> {
    type Value = V;
}

impl<V: FromStr> ReadPayload for Bare<V> {
    fn read(&self, reader: &mut Reader<'_>) -> Result<V, ParseError> {
        let text = reader.read_text(&[',', ']'])?;
        convert(text)
    }
}

impl<V: fmt::Display> WritePayload for Bare<V> {
    fn write(&self, value: &V, out: &mut String) {
        let text = value.to_string();
        match text.strip_prefix('n') {
            Some(rest) if starts_with_null(&text) => {
                out.push(ESCAPE);
                out.push('n');
                escape_into(rest, out);
            }
            _ => escape_into(&text, out),
        }
    }
}

/// Key and value in parentheses, such as `(name,42)`.
///
/// Values of this format are `(key, value)` tuples.
pub struct Keyed<K, V> {
    /// Key and value types.
    _value: PhantomData<fn() -> (K, V)>,
}

impl<K, V> Keyed<K, V> {
    /// Creates the format.
    #[inline]
    #[must_use]
    pub const fn new() -> Self {
        Self {
            _value: PhantomData,
        }
    }
}

impl<K, V> PayloadFormat for Keyed<K, V> {
    type Value = (K, V);
}

impl<K: FromStr, V: FromStr> ReadPayload for Keyed<K, V> {
    fn read(&self, reader: &mut Reader<'_>) -> Result<(K, V), ParseError> {
        reader.expect('(')?;
        let key = reader.read_text(&[',', ')'])?;
        if reader.bump() != Some(',') {
            return Err(ParseError::MalformedPayload);
        }
        let value = reader.read_text(&[')'])?;
        reader.expect(')')?;

        Ok((convert(key)?, convert(value)?))
    }
}

impl<K: fmt::Display, V: fmt::Display> WritePayload for Keyed<K, V> {
    fn write(&self, (key, value): &(K, V), out: &mut String) {
        out.push('(');
        escape_into(&key.to_string(), out);
        out.push(',');
        escape_into(&value.to_string(), out);
        out.push(')');
    }
}

macro_rules! impl_marker_traits {
    ($ty:ident<$($param:ident),+>, $name:literal) => {
        impl<$($param),+> Default for $ty<$($param),+> {
            #[inline]
            fn default() -> Self {
                Self::new()
            }
        }

        impl<$($param),+> Clone for $ty<$($param),+> {
            #[inline]
            fn clone(&self) -> Self {
                *self
            }
        }

        impl<$($param),+> Copy for $ty<$($param),+> {}

        impl<$($param),+> fmt::Debug for $ty<$($param),+> {
            fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
                f.write_str($name)
            }
        }
    };
}

impl_marker_traits!(Bare<V>, "Bare");
impl_marker_traits!(Keyed<K, V>, "Keyed");

#[cfg(test)]
mod tests {
    use super::*;

    fn write<P: WritePayload>(format: P, value: &P::Value) -> String {
        let mut out = String::new();
        format.write(value, &mut out);
        out
    }

    #[test]
    fn bare_null_is_escaped() {
        assert_eq!(write(Bare::<String>::new(), &"null".to_string()), r"\null");
        assert_eq!(write(Bare::<String>::new(), &"null x".to_string()), r"\null x");
        assert_eq!(write(Bare::<String>::new(), &"nullable".to_string()), "nullable");
    }

    #[test]
    fn keyed_reads_spaced_payload() {
        let mut reader = Reader::new(" ( right right , 5 ),");
        let (key, value): (String, i32) = Keyed::new().read(&mut reader).unwrap();
        assert_eq!(key, "right right");
        assert_eq!(value, 5);
        assert_eq!(reader.rest(), ",");
    }

    #[test]
    fn keyed_errors() {
        let read = |s: &str| Keyed::<String, i32>::new().read(&mut Reader::new(s));
        assert_eq!(read("(a)"), Err(ParseError::MalformedPayload));
        assert_eq!(read("(a,b,c)"), Err(ParseError::MalformedPayload));
        assert_eq!(read("a,1)"), Err(ParseError::Expected('(')));
        assert_eq!(read("(a,x)"), Err(ParseError::InvalidValue("x".to_string())));
        assert_eq!(read("(a,1"), Err(ParseError::UnexpectedEnd));
    }
}
