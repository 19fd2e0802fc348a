//! Limb-window extraction and scaling by powers of the base.
use crate::error::{Error, Result};
use crate::BigInt;

fn checked_offset(arg: &'static str, m: i64) -> Result<usize> {
    if m < 0 {
        return Err(Error::InvalidArgument {
            arg,
            msg: format!("limb offset must be non-negative, got {}", m),
        });
    }
    Ok(m as usize)
}

impl BigInt {
    /// Splits the magnitude into `(high, low)` with `|self| = high * B^m + low` and
    /// `0 <= low < B^m`. Both halves are non-negative; the sign of `self` is dropped.
    pub fn split_at(&self, m: usize) -> (BigInt, BigInt) {
        let m = std::cmp::min(m, self.digits.len());
        let (low, high) = self.digits.split_at(m);
        (
            BigInt::from_digits(high.to_vec(), false),
            BigInt::from_digits(low.to_vec(), false),
        )
    }

    /// [`split_at`](BigInt::split_at) for offsets coming from outside the crate.
    pub fn checked_split_at(&self, m: i64) -> Result<(BigInt, BigInt)> {
        let m = checked_offset("m", m)?;
        Ok(self.split_at(m))
    }

    /// Returns `self * B^m`, a left shift by `m` whole limbs.
    pub fn scale_by_power(&self, m: usize) -> BigInt {
        if self.is_zero() || m == 0 {
            return self.clone();
        }
        let mut digits = Vec::with_capacity(self.digits.len() + m);
        digits.resize(m, 0);
        digits.extend_from_slice(&self.digits);
        BigInt {
            digits,
            negative: self.negative,
        }
    }

    pub fn checked_scale_by_power(&self, m: i64) -> Result<BigInt> {
        let m = checked_offset("m", m)?;
        Ok(self.scale_by_power(m))
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::test_utils::*;
    use proptest::prelude::*;

    #[test]
    fn split_past_the_end() {
        let x = BigInt::from_digits(vec![7, 9], true);
        let (high, low) = x.split_at(5);
        assert_eq!(high, BigInt::ZERO);
        assert_eq!(low, x.abs());
        let (high, low) = x.split_at(0);
        assert_eq!(high, x.abs());
        assert_eq!(low, BigInt::ZERO);
    }

    #[test]
    fn split_low_half_is_canonical() {
        let x = BigInt::from_digits(vec![0, 0, 3], false);
        let (high, low) = x.split_at(2);
        assert_eq!(high, BigInt::from(3));
        assert_eq!(low, BigInt::ZERO);
        assert_eq!(low.limb_len(), 0);
    }

    #[test]
    fn negative_offsets_are_rejected() {
        let x = BigInt::from(12345);
        assert!(matches!(
            x.checked_split_at(-1),
            Err(Error::InvalidArgument { arg: "m", .. })
        ));
        assert!(matches!(
            x.checked_scale_by_power(-3),
            Err(Error::InvalidArgument { .. })
        ));
        assert_eq!(x.checked_split_at(0).unwrap(), (x.clone(), BigInt::ZERO));
        assert_eq!(x.checked_scale_by_power(1).unwrap().digits(), &[0, 12345]);
    }

    #[test]
    fn scale_zero_stays_zero() {
        assert_eq!(BigInt::ZERO.scale_by_power(4), BigInt::ZERO);
    }

    proptest! {
        #[test]
        fn split_recombines(x in nonnegative_bigint(0..12), m in 0usize..14) {
            let (high, low) = x.split_at(m);
            assert!(!high.is_negative() && !low.is_negative());
            assert!(low.limb_len() <= m);
            assert_eq!(high.scale_by_power(m) + low, x);
        }
    }
    proptest! {
        #[test]
        fn split_ignores_sign(x in any_bigint(0..12), m in 0usize..14) {
            assert_eq!(x.split_at(m), x.abs().split_at(m));
        }
    }
    proptest! {
        #[test]
        fn scale_matches_repeated_shift(x in any_bigint(0..8), m in 0usize..6) {
            let mut expected = x.clone();
            for _ in 0..m {
                expected = expected.scale_by_power(1);
            }
            let scaled = x.scale_by_power(m);
            assert_eq!(scaled, expected);
            assert_eq!(scaled.sign(), x.sign());
            if !x.is_zero() {
                assert_eq!(scaled.limb_len(), x.limb_len() + m);
            }
        }
    }
}
