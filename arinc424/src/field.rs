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

use std::fmt;

use crate::Error;

/// A fixed-length field type.
///
/// Implemented by the fields that need more than a plain number or text to
/// be decoded, e.g. coordinates or the magnetic variation. Each field is
/// created [`from_bytes`](FixedField::from_bytes) and may borrow those bytes.
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

/////////////////////////////////////////////////////////////////////////////
// Alphanumeric Field
/////////////////////////////////////////////////////////////////////////////

/// A alpha/numeric field (left-justified, space-padded).
#[derive(Clone, Copy, Eq, PartialEq, Ord, PartialOrd, Hash)]
pub struct Alphanumeric<'a, const N: usize>(pub(crate) &'a [u8; N]);

impl<'a, const N: usize> Alphanumeric<'a, N> {
    /// Returns the field as a UTF-8 string with trailing spaces removed.
    ///
    /// Returns an empty string if the field contains invalid UTF-8.
    #[inline]
    pub fn as_str(&self) -> &'a str {
        std::str::from_utf8(self.0).unwrap_or("").trim_end()
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
        bytes
            .get(..N)
            .and_then(|b| <&[u8; N]>::try_from(b).ok())
            .map(Self)
            .ok_or(Error::InvalidFieldLength {
                expected: N,
                actual: bytes.len(),
            })
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

/////////////////////////////////////////////////////////////////////////////
// Numbers
/////////////////////////////////////////////////////////////////////////////

/// Parses unsigned ASCII digits of any width.
pub(crate) fn digits(bytes: &[u8]) -> Result<u64, Error> {
    if bytes.is_empty() || !bytes.iter().all(u8::is_ascii_digit) {
        return Err(Error::NotANumber {
            bytes: bytes.to_vec(),
        });
    }

    Ok(bytes
        .iter()
        .fold(0u64, |acc, &b| acc * 10 + (b & 0x0F) as u64))
}

/// Parses a right-justified number which is zero or space padded and may
/// have a leading sign.
///
/// Returns `None` if the field contains only spaces.
pub(crate) fn signed(bytes: &[u8]) -> Result<Option<i64>, Error> {
    let text = bytes.trim_ascii();

    let (sign, text) = match text.first() {
        None => return Ok(None),
        Some(b'-') => (-1, &text[1..]),
        Some(b'+') => (1, &text[1..]),
        Some(_) => (1, text),
    };

    digits(text)
        .map(|n| Some(sign * n as i64))
        .map_err(|_| Error::NotANumber {
            bytes: bytes.to_vec(),
        })
}

/////////////////////////////////////////////////////////////////////////////
// Optional Field Support
/////////////////////////////////////////////////////////////////////////////

/// Optional field that may contain only spaces.
///
/// Allows fields to be `None` when they contain only spaces (i.e., data from an
/// older version).
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
    fn parses_padded_numbers() {
        assert_eq!(signed(b"00145"), Ok(Some(145)));
        assert_eq!(signed(b"  145"), Ok(Some(145)));
        assert_eq!(signed(b"-0012"), Ok(Some(-12)));
        assert_eq!(signed(b"+00150"), Ok(Some(150)));
        assert_eq!(signed(b"     "), Ok(None));
    }

    #[test]
    fn rejects_non_numeric() {
        assert_eq!(
            signed(b"1 2"),
            Err(Error::NotANumber {
                bytes: b"1 2".to_vec()
            })
        );
        assert!(signed(b"-").is_err());
        assert!(digits(b"12A4").is_err());
    }

    #[test]
    fn alphanumeric_requires_enough_bytes() {
        assert_eq!(
            Alphanumeric::<4>::from_bytes(b"KD"),
            Err(Error::InvalidFieldLength {
                expected: 4,
                actual: 2
            })
        );
        let ident = Alphanumeric::<4>::from_bytes(b"DEN ").expect("ident should parse");
        assert_eq!(ident.as_str(), "DEN");
    }
}
