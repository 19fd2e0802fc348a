//! Sign-aware addition and subtraction.
//!
//! Every operator funnels into [`BigInt::add_signed_assign`], which works on the magnitude of the
//! right-hand side together with an explicit sign, so subtraction never has to build a negated
//! copy of its operand.
use crate::low_level::{add_assign_digits, sub_assign_digits, sub_assign_digits_reverse};
use crate::BigInt;
use std::cmp::Ordering;
use std::ops::{Add, AddAssign, Neg, Sub, SubAssign};

impl BigInt {
    fn add_signed_assign(&mut self, other_digits: &[u64], other_negative: bool) {
        if other_digits.is_empty() {
            return;
        }
        if self.is_zero() {
            self.digits.extend_from_slice(other_digits);
            self.negative = other_negative;
            return;
        }
        if self.negative == other_negative {
            add_assign_digits(&mut self.digits, other_digits);
        } else {
            match cmp_digits(&self.digits, other_digits) {
                Ordering::Greater => sub_assign_digits(&mut self.digits, other_digits),
                Ordering::Equal => {
                    *self = BigInt::ZERO;
                    return;
                }
                Ordering::Less => {
                    sub_assign_digits_reverse(&mut self.digits, other_digits);
                    self.negative = other_negative;
                }
            }
        }
        self.normalize_in_place();
    }
}

fn cmp_digits(l: &[u64], r: &[u64]) -> Ordering {
    l.len()
        .cmp(&r.len())
        .then_with(|| l.iter().rev().cmp(r.iter().rev()))
}

impl AddAssign for BigInt {
    fn add_assign(&mut self, mut other: Self) {
        // Reuse whichever allocation is already the larger one.
        if self.digits.len() < other.digits.len() {
            std::mem::swap(self, &mut other);
        }
        self.add_signed_assign(&other.digits, other.negative);
    }
}

impl<'a> AddAssign<&'a BigInt> for BigInt {
    fn add_assign(&mut self, other: &'a Self) {
        self.add_signed_assign(&other.digits, other.negative);
    }
}

impl SubAssign for BigInt {
    fn sub_assign(&mut self, other: Self) {
        *self -= &other;
    }
}

impl<'a> SubAssign<&'a BigInt> for BigInt {
    fn sub_assign(&mut self, other: &'a Self) {
        self.add_signed_assign(&other.digits, !other.negative);
    }
}

impl Add for BigInt {
    type Output = Self;

    fn add(mut self, other: Self) -> Self {
        self += other;
        self
    }
}

impl<'a> Add<&'a BigInt> for BigInt {
    type Output = Self;

    fn add(mut self, other: &'a Self) -> Self {
        self += other;
        self
    }
}

impl<'a> Add<BigInt> for &'a BigInt {
    type Output = BigInt;

    fn add(self, mut other: BigInt) -> BigInt {
        other += self;
        other
    }
}

impl<'a, 'b> Add<&'b BigInt> for &'a BigInt {
    type Output = BigInt;

    fn add(self, other: &'b BigInt) -> BigInt {
        let (big, small) = if self.digits.len() > other.digits.len() {
            (self, other)
        } else {
            (other, self)
        };
        big.clone() + small
    }
}

impl Sub for BigInt {
    type Output = Self;

    fn sub(mut self, other: Self) -> Self {
        self -= &other;
        self
    }
}

impl<'a> Sub<&'a BigInt> for BigInt {
    type Output = Self;

    fn sub(mut self, other: &'a Self) -> Self {
        self -= other;
        self
    }
}

impl<'a> Sub<BigInt> for &'a BigInt {
    type Output = BigInt;

    fn sub(self, mut other: BigInt) -> BigInt {
        other -= self;
        -other
    }
}

impl<'a, 'b> Sub<&'b BigInt> for &'a BigInt {
    type Output = BigInt;

    fn sub(self, other: &'b BigInt) -> BigInt {
        self.clone() - other
    }
}

impl Neg for BigInt {
    type Output = Self;

    fn neg(mut self) -> Self {
        self.neg_in_place();
        self
    }
}

impl<'a> Neg for &'a BigInt {
    type Output = BigInt;

    fn neg(self) -> BigInt {
        -self.clone()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::test_utils::*;
    use crate::Sign;
    use proptest::prelude::*;

    fn big(s: &str) -> BigInt {
        s.parse().unwrap()
    }

    #[test]
    fn carry_across_limbs() {
        let a = BigInt::from(u64::MAX);
        let sum = &a + &BigInt::one();
        assert_eq!(sum.digits(), &[0, 1]);
        assert_eq!(sum - BigInt::one(), a);
    }

    #[test]
    fn subtraction_crosses_zero() {
        let diff = big("5") - big("18446744073709551621");
        assert_eq!(diff, big("-18446744073709551616"));
        assert_eq!(diff.sign(), Sign::Negative);
        assert_eq!(&diff + big("18446744073709551616"), BigInt::ZERO);
    }

    #[test]
    fn cancellation_is_canonical_zero() {
        let a = big("-340282366920938463463374607431768211456");
        let zero = &a - &a;
        assert_eq!(zero, BigInt::ZERO);
        assert_eq!(zero.sign(), Sign::Zero);
        assert!(!zero.is_negative());
        assert_eq!(zero.limb_len(), 0);
    }

    proptest! {
        #[test]
        fn test_addition_methods_match(a in any_bigint(0..20),b in any_bigint(0..20)) {
            let reference_sum = &a + &b;
            assert_eq!(reference_sum, &b + &a);
            assert_eq!(reference_sum, a.clone() + &b);
            assert_eq!(reference_sum, b.clone() + &a);
            assert_eq!(reference_sum, &a + b.clone());
            assert_eq!(reference_sum, &b + a.clone());
            assert_eq!(reference_sum, a.clone() + b.clone());
            assert_eq!(reference_sum, b.clone() + a.clone());
        }
    }
    proptest! {
        #[test]
        fn test_additive_identity(a in any_bigint(0..20)) {
            assert_eq!(a, BigInt::ZERO + &a);
            assert_eq!(a, &a - BigInt::ZERO);
        }
    }
    proptest! {
        #[test]
        fn test_additive_associativity(
            a in any_bigint(0..20),
            b in any_bigint(0..20),
            c in any_bigint(0..20),
            ) {
            assert_eq!(&a + (&b + &c), (&a + &b) + &c);
        }
    }
    proptest! {
        #[test]
        fn test_add_matches_i128(a in any::<i64>(), b in any::<i64>()) {
            let sum = BigInt::from(a) + BigInt::from(b);
            assert_eq!(sum, BigInt::from(a as i128 + b as i128));
            let diff = BigInt::from(a) - BigInt::from(b);
            assert_eq!(diff, BigInt::from(a as i128 - b as i128));
       }
    }
    proptest! {
        #[test]
        fn test_subtraction_methods_match(a in any_bigint(0..20),b in any_bigint(0..20)) {
            let reference_diff = &a - &b;
            assert_eq!(reference_diff, a.clone() - &b);
            assert_eq!(reference_diff, &a - b.clone());
            assert_eq!(reference_diff, a.clone() - b.clone());
            assert_eq!(reference_diff, -(&b - &a));
        }
    }
    proptest! {
        #[test]
        fn test_sub_then_add_roundtrips(a in any_bigint(0..20),b in any_bigint(0..20)) {
            assert_eq!((&a - &b) + &b, a);
        }
    }
}
