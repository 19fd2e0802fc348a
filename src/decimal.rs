//! Conversion between [`BigInt`] and base-10 text.
//!
//! Text is processed in chunks of [`CHUNK_DIGITS`] decimal digits, the largest power of ten that
//! fits in a single limb, so both directions cost one limb pass per chunk rather than per digit.
use crate::error::{Error, ParseErrorKind, Result};
use crate::low_level::{div_rem_small, mul_add_small};
use crate::BigInt;
use std::fmt;
use std::str::FromStr;
use tracing::debug;

const CHUNK_DIGITS: usize = 19;
const CHUNK_BASE: u64 = 10_000_000_000_000_000_000;

fn parse_error(input: &str, kind: ParseErrorKind) -> Error {
    debug!(input, %kind, "rejected decimal input");
    Error::Parse {
        input: input.to_owned(),
        kind,
    }
}

impl BigInt {
    /// Parses `-?[0-9]+`. Leading zeros are accepted; `+`, whitespace and separators are not.
    pub fn from_decimal_str(s: &str) -> Result<BigInt> {
        let (negative, body) = match s.strip_prefix('-') {
            Some(rest) => (true, rest),
            None => (false, s),
        };
        if body.is_empty() {
            let kind = if negative {
                ParseErrorKind::BareSign
            } else {
                ParseErrorKind::Empty
            };
            return Err(parse_error(s, kind));
        }
        let offset = s.len() - body.len();
        if let Some((index, character)) = body.char_indices().find(|(_, c)| !c.is_ascii_digit()) {
            return Err(parse_error(
                s,
                ParseErrorKind::InvalidDigit {
                    character,
                    index: index + offset,
                },
            ));
        }

        let bytes = body.as_bytes();
        // The first chunk takes the remainder so every later chunk is exactly CHUNK_DIGITS wide.
        let head = match bytes.len() % CHUNK_DIGITS {
            0 => CHUNK_DIGITS,
            n => n,
        };
        let mut digits = Vec::with_capacity(bytes.len() / CHUNK_DIGITS + 1);
        mul_add_small(&mut digits, 0, chunk_value(&bytes[..head]));
        for chunk in bytes[head..].chunks(CHUNK_DIGITS) {
            mul_add_small(&mut digits, CHUNK_BASE, chunk_value(chunk));
        }
        Ok(BigInt::from_digits(digits, negative))
    }

    /// Canonical base-10 rendering: a single `-` for negative values and no leading zeros.
    pub fn to_decimal_string(&self) -> String {
        if self.is_zero() {
            return "0".to_owned();
        }
        let mut magnitude = self.digits.clone();
        let mut chunks = Vec::with_capacity(magnitude.len() * 20 / CHUNK_DIGITS + 1);
        while !magnitude.is_empty() {
            chunks.push(div_rem_small(&mut magnitude, CHUNK_BASE));
            while magnitude.last() == Some(&0) {
                magnitude.pop();
            }
        }
        let mut out = String::with_capacity(chunks.len() * CHUNK_DIGITS + 1);
        if self.negative {
            out.push('-');
        }
        let mut chunks = chunks.iter().rev();
        if let Some(most_significant) = chunks.next() {
            out.push_str(&most_significant.to_string());
        }
        for chunk in chunks {
            out.push_str(&format!("{:019}", chunk));
        }
        out
    }
}

fn chunk_value(chunk: &[u8]) -> u64 {
    chunk
        .iter()
        .fold(0u64, |acc, &b| acc * 10 + u64::from(b - b'0'))
}

impl FromStr for BigInt {
    type Err = Error;

    fn from_str(s: &str) -> Result<BigInt> {
        BigInt::from_decimal_str(s)
    }
}

impl fmt::Display for BigInt {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let rendered = self.to_decimal_string();
        let (non_negative, digits) = match rendered.strip_prefix('-') {
            Some(rest) => (false, rest),
            None => (true, rendered.as_str()),
        };
        f.pad_integral(non_negative, "", digits)
    }
}
