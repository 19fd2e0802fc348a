use crate::low_level::add_to_digits;
use crate::BigInt;

/// Quadratic long multiplication. This is the base case of the Karatsuba recursion and the
/// reference every faster product is checked against.
pub fn schoolbook_mul(l: &BigInt, r: &BigInt) -> BigInt {
    if l.is_zero() || r.is_zero() {
        return BigInt::ZERO;
    }
    let mut digits = vec![0; l.digits.len() + r.digits.len() + 1];
    for (i, &l_digit) in l.digits.iter().enumerate() {
        if l_digit == 0 {
            continue;
        }
        let mut carry: u64 = 0;
        for (&r_digit, digit) in r.digits.iter().zip(digits[i..].iter_mut()) {
            // (2^64 - 1)^2 + 2 * (2^64 - 1) == 2^128 - 1, so this never overflows.
            let acc = (l_digit as u128) * (r_digit as u128) + (*digit as u128) + (carry as u128);
            *digit = acc as u64;
            carry = (acc >> 64) as u64;
        }
        if carry != 0 {
            add_to_digits(carry, &mut digits[i + r.digits.len()..]);
        }
    }
    let negative = l.negative ^ r.negative;
    BigInt { digits, negative }.normalize()
}
