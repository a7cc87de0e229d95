// SPDX-License-Identifier: Apache-2.0
// Copyright 2026 Joe Pearson
//
// Licensed under the Apache License, Version 2.0 (the "License");
// you may not use this file except in compliance with the License.
// You may obtain a copy of the License at
//
//     http://www.apache.org/licenses/LICENSE-2.0
//
// Unless required by applicable law or agreed to in writing, software
// distributed under the License is distributed on an "AS IS" BASIS,
// WITHOUT WARRANTIES OR CONDITIONS OF ANY KIND, either express or implied.
// See the License for the specific language governing permissions and
// limitations under the License.

use std::borrow::Cow;
use std::fmt;
use std::str;

use crate::Error;

/// A fixed-length field type.
///
/// This trait is implemented by all ARINC 424 fields. Each field is created
/// [`from_bytes`](FixedField::from_bytes) and either stores a reference to
/// those bytes or the value decoded from them.
pub trait FixedField<'a>: Sized {
    /// The fixed length of this field in bytes.
    const LENGTH: usize;

    /// Parse this field from a byte slice.
    ///
    /// # Errors
    ///
    /// Returns an error if the byte slice is too short or contains invalid data.
    fn from_bytes(bytes: &'a [u8]) -> Result<Self, Error>;
}

/// Returns the first `N` bytes as array or an error if there are less.
#[inline]
fn take<const N: usize>(bytes: &[u8]) -> Result<&[u8; N], Error> {
    bytes
        .get(..N)
        .and_then(|b| b.try_into().ok())
        .ok_or(Error::InvalidFieldLength {
            expected: N,
            actual: bytes.len(),
        })
}

/////////////////////////////////////////////////////////////////////////////
// Alphanumeric Field
/////////////////////////////////////////////////////////////////////////////

/// A alpha/numeric field (left-justified, space-padded).
#[derive(Clone, Copy, Eq, PartialEq, Ord, PartialOrd, Hash)]
pub struct Alphanumeric<'a, const N: usize>(pub(super) &'a [u8; N]);

impl<'a, const N: usize> Alphanumeric<'a, N> {
    /// Returns the field as a bytes.
    #[inline]
    pub fn as_bytes(&self) -> &'a [u8] {
        self.0
    }

    /// Returns the field as a string with surrounding spaces removed.
    ///
    /// The bytes are read as Latin-1. Only a field with bytes outside of
    /// ASCII is copied.
    #[inline]
    pub fn as_str(&self) -> Cow<'a, str> {
        if self.0.is_ascii() {
            if let Ok(s) = str::from_utf8(self.0) {
                return Cow::Borrowed(s.trim());
            }
        }

        let s: String = self.0.iter().map(|&b| char::from(b)).collect();
        Cow::Owned(s.trim().to_owned())
    }

    /// Returns `true` if the field contains only spaces.
    #[inline]
    pub fn is_blank(&self) -> bool {
        self.0.iter().all(|&b| b == b' ')
    }

    /// Returns the first byte of the field.
    #[inline]
    pub fn first(&self) -> u8 {
        self.0[0]
    }
}

impl<'a, const N: usize> FixedField<'a> for Alphanumeric<'a, N> {
    const LENGTH: usize = N;

    fn from_bytes(bytes: &'a [u8]) -> Result<Self, Error> {
        take::<N>(bytes).map(Self)
    }
}

impl<const N: usize> fmt::Debug for Alphanumeric<'_, N> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "\"{}\"", self.as_str())
    }
}

impl<const N: usize> fmt::Display for Alphanumeric<'_, N> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.as_str())
    }
}

impl<const N: usize> From<Alphanumeric<'_, N>> for String {
    fn from(a: Alphanumeric<'_, N>) -> Self {
        a.as_str().into_owned()
    }
}

/////////////////////////////////////////////////////////////////////////////
// Numeric Field
/////////////////////////////////////////////////////////////////////////////

/// A numeric field (right-justified, zero-padded).
#[derive(Clone, Copy, Eq, PartialEq, Ord, PartialOrd, Hash)]
pub struct Numeric<'a, const N: usize>(pub(super) &'a [u8; N]);

macro_rules! numeric_impl {
    ($n:tt => $($method:ident : $t:ty),+) => {
        impl<'a> Numeric<'a, $n> {
            $(
                #[inline]
                pub fn $method(&self) -> Result<$t, Error> {
                    parse_numeric!("Numeric Field", $t, self.0)
                }
            )+
        }
    };
}

// Only parsers that can't overflow are implemented for a field's length. For
// example, a three byte long field can't be parsed to an unsigned 8 bit
// integer.
numeric_impl!(1 => as_u8: u8);
numeric_impl!(2 => as_u8: u8, as_u16: u16);
numeric_impl!(3 => as_u16: u16);
numeric_impl!(4 => as_u16: u16, as_u32: u32);
numeric_impl!(5 => as_u32: u32);

impl<'a, const N: usize> Numeric<'a, N> {
    /// Returns `true` if the field contains only spaces.
    #[inline]
    pub fn is_blank(&self) -> bool {
        self.0.iter().all(|&b| b == b' ')
    }
}

impl<'a, const N: usize> FixedField<'a> for Numeric<'a, N> {
    const LENGTH: usize = N;

    fn from_bytes(bytes: &'a [u8]) -> Result<Self, Error> {
        take::<N>(bytes).map(Self)
    }
}

impl<const N: usize> fmt::Debug for Numeric<'_, N> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let s = String::from_utf8_lossy(self.0);
        write!(f, "{s}")
    }
}

/////////////////////////////////////////////////////////////////////////////
// Optional Field Support
/////////////////////////////////////////////////////////////////////////////

/// Optional field that may contain only spaces.
///
/// Allows fields to be `None` when they contain only spaces, e.g. a runway
/// without bearing.
impl<'a, T> FixedField<'a> for Option<T>
where
    T: FixedField<'a>,
{
    const LENGTH: usize = T::LENGTH;

    fn from_bytes(bytes: &'a [u8]) -> Result<Self, Error> {
        if bytes
            .get(..T::LENGTH)
            .is_some_and(|b| b.iter().all(|&c| c == b' '))
        {
            Ok(None)
        } else {
            T::from_bytes(bytes).map(Some)
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn alphanumeric_is_trimmed() {
        let ident = Alphanumeric::<5>::from_bytes(b" JFK  ").expect("field should parse");
        assert_eq!(ident.as_str(), "JFK");
        assert_eq!(ident.as_bytes(), b" JFK ");
        assert!(!ident.is_blank());
    }

    #[test]
    fn alphanumeric_is_latin1() {
        let name = Alphanumeric::<30>::from_bytes(b"LUIS MU\xD1OZ MARIN INTL         ")
            .expect("field should parse");
        assert_eq!(name.as_str(), "LUIS MU\u{D1}OZ MARIN INTL");
        assert_eq!(String::from(name), "LUIS MU\u{D1}OZ MARIN INTL");
        assert!(matches!(name.as_str(), Cow::Owned(_)));

        let ident = Alphanumeric::<4>::from_bytes(b"KJFK").expect("field should parse");
        assert!(matches!(ident.as_str(), Cow::Borrowed("KJFK")));
    }

    #[test]
    fn fails_on_short_field() {
        assert_eq!(
            Alphanumeric::<4>::from_bytes(b"KJF"),
            Err(Error::InvalidFieldLength {
                expected: 4,
                actual: 3
            })
        );
    }

    #[test]
    fn parses_numeric() {
        let n = Numeric::<5>::from_bytes(b"30067").expect("field should parse");
        assert_eq!(n.as_u32(), Ok(30067));

        let n = Numeric::<4>::from_bytes(b"00A0").expect("field should parse");
        assert!(matches!(n.as_u16(), Err(Error::NotANumber { .. })));
    }

    #[test]
    fn blank_optional_field_is_none() {
        let n = Option::<Numeric<4>>::from_bytes(b"    ").expect("field should parse");
        assert_eq!(n, None);

        let n = Option::<Numeric<4>>::from_bytes(b"0440").expect("field should parse");
        assert!(n.is_some());
    }
}
