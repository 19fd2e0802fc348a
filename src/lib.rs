//! Arbitrary-precision signed integers with Karatsuba multiplication.
//!
//! Magnitudes are stored as little-endian `u64` limbs (base 2^64). All arithmetic produces
//! canonical values: no high zero limbs, and zero is never negative.

use std::cmp::Ordering;
use std::ops::Mul;

pub mod addsub;
pub mod decimal;
pub mod error;
pub mod karatsuba;
mod low_level;
pub mod schoolbook_mul;
pub mod split;
#[cfg(test)]
mod test_utils;

pub use crate::error::{Error, ParseErrorKind, Result};
pub use crate::karatsuba::{
    compare_algorithms, karatsuba_mul, multiply, multiply_decimal, Comparison, KaratsubaConfig,
};
pub use crate::schoolbook_mul::schoolbook_mul;

#[derive(PartialEq, Eq, Clone, Hash)]
pub struct BigInt {
    negative: bool,
    digits: Vec<u64>,
}

/// The sign of a [`BigInt`]. `Zero` is reported exactly when the magnitude is zero.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Sign {
    Negative,
    Zero,
    Positive,
}

impl Mul for Sign {
    type Output = Sign;

    fn mul(self, other: Sign) -> Sign {
        match (self, other) {
            (Sign::Zero, _) | (_, Sign::Zero) => Sign::Zero,
            (l, r) if l == r => Sign::Positive,
            _ => Sign::Negative,
        }
    }
}

impl std::fmt::Debug for BigInt {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("BigInt")
            .field("negative", &self.negative)
            .field("digits", &format!("{:x?}", &self.digits))
            .finish()
    }
}

impl PartialOrd for BigInt {
    fn partial_cmp(&self, other: &Self) -> Option<Ordering> {
        Some(self.cmp(other))
    }
}
impl Ord for BigInt {
    fn cmp(&self, other: &Self) -> Ordering {
        let sign_cmp = other.negative.cmp(&self.negative);
        if sign_cmp != Ordering::Equal {
            return sign_cmp;
        }
        if self.negative {
            other.cmp_abs(self)
        } else {
            self.cmp_abs(other)
        }
    }
}

impl Default for BigInt {
    fn default() -> Self {
        BigInt::ZERO
    }
}

impl BigInt {
    pub const ZERO: BigInt = BigInt {
        digits: Vec::new(),
        negative: false,
    };

    pub fn one() -> Self {
        BigInt::from_u64(1)
    }

    /// Builds a value from little-endian limbs, stripping high zero limbs.
    pub fn from_digits(digits: Vec<u64>, negative: bool) -> Self {
        BigInt { digits, negative }.normalize()
    }

    pub fn digits(&self) -> &[u64] {
        &self.digits
    }

    /// Number of base-2^64 limbs in the magnitude. Zero has no limbs.
    pub fn limb_len(&self) -> usize {
        self.digits.len()
    }

    pub fn is_zero(&self) -> bool {
        self.digits.is_empty()
    }

    pub fn is_negative(&self) -> bool {
        self.negative
    }

    pub fn sign(&self) -> Sign {
        if self.is_zero() {
            Sign::Zero
        } else if self.negative {
            Sign::Negative
        } else {
            Sign::Positive
        }
    }

    pub fn abs(&self) -> BigInt {
        BigInt {
            digits: self.digits.clone(),
            negative: false,
        }
    }

    /// Returns the magnitude with the given sign applied. A zero magnitude stays zero.
    pub(crate) fn with_sign(mut self, sign: Sign) -> Self {
        self.negative = sign == Sign::Negative;
        self.normalize()
    }

    pub fn cmp_abs(&self, other: &Self) -> Ordering {
        let len_cmp = self.digits.len().cmp(&other.digits.len());
        if len_cmp != Ordering::Equal {
            return len_cmp;
        }
        for (s, o) in self.digits.iter().rev().zip(other.digits.iter().rev()) {
            let digit_cmp = s.cmp(o);
            if digit_cmp != Ordering::Equal {
                return digit_cmp;
            }
        }
        Ordering::Equal
    }
    fn normalize_in_place(&mut self) {
        while self.digits.last() == Some(&0) {
            self.digits.pop();
        }
        if self.digits.is_empty() {
            self.negative = false;
        }
    }
    fn normalize(mut self) -> Self {
        self.normalize_in_place();
        self
    }
    fn neg_in_place(&mut self) {
        if !self.is_zero() {
            self.negative = !self.negative;
        }
    }
    pub fn from_u64(x: u64) -> Self {
        BigInt {
            digits: vec![x],
            negative: false,
        }
        .normalize()
    }
    fn from_u128(x: u128, negative: bool) -> Self {
        BigInt {
            digits: vec![x as u64, (x >> 64) as u64],
            negative,
        }
        .normalize()
    }
}

impl<'a, 'b> Mul<&'b BigInt> for &'a BigInt {
    type Output = BigInt;

    fn mul(self, other: &'b BigInt) -> BigInt {
        karatsuba_mul(self, other)
    }
}

impl Mul for BigInt {
    type Output = BigInt;

    fn mul(self, other: BigInt) -> BigInt {
        &self * &other
    }
}

impl<'a> Mul<&'a BigInt> for BigInt {
    type Output = BigInt;

    fn mul(self, other: &'a BigInt) -> BigInt {
        &self * other
    }
}

impl<'a> Mul<BigInt> for &'a BigInt {
    type Output = BigInt;

    fn mul(self, other: BigInt) -> BigInt {
        self * &other
    }
}

macro_rules! impl_from_unsigned {
    ($($t: ty),*) => {$(
        impl From<$t> for BigInt {
            fn from(x: $t) -> Self {
                BigInt::from_u128(x as u128, false)
            }
        }
    )*};
}

macro_rules! impl_from_signed {
    ($($t: ty),*) => {$(
        impl From<$t> for BigInt {
            fn from(x: $t) -> Self {
                BigInt::from_u128(x.unsigned_abs() as u128, x < 0)
            }
        }
    )*};
}

impl_from_unsigned!(u8, u16, u32, u64, u128, usize);
impl_from_signed!(i8, i16, i32, i64, i128, isize);
