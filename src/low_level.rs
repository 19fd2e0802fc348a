pub fn add_to_digits(x: u64, digits: &mut [u64]) {
    let (res, overflow) = digits[0].overflowing_add(x);
    digits[0] = res;
    if overflow {
        add_to_digits(1, &mut digits[1..]);
    }
}

pub fn sub_from_digits(x: u64, digits: &mut [u64]) {
    let (res, overflow) = digits[0].overflowing_sub(x);
    digits[0] = res;
    if overflow {
        sub_from_digits(1, &mut digits[1..]);
    }
}

pub fn add_assign_digits(target: &mut Vec<u64>, other: &[u64]) {
    let target_len = std::cmp::max(target.len(), other.len()) + 1;
    target.resize(target_len, 0);
    add_assign_digits_slice(&mut *target, other);
}

pub fn add_assign_digits_slice(target: &mut [u64], other: &[u64]) {
    let mut carry = false;
    for (target_digit, &other_digit) in target.iter_mut().zip(other.iter()) {
        let (res, carry1) = target_digit.overflowing_add(carry as u64);
        let (res, carry2) = res.overflowing_add(other_digit);
        *target_digit = res;
        carry = carry1 || carry2;
    }
    if carry {
        add_to_digits(1, &mut target[other.len()..]);
    }
}

// Precondition: target >= other
pub fn sub_assign_digits(target: &mut [u64], other: &[u64]) {
    let mut borrow = false;
    for (target_digit, &other_digit) in target.iter_mut().zip(other.iter()) {
        let (res, borrow1) = target_digit.overflowing_sub(borrow as u64);
        let (res, borrow2) = res.overflowing_sub(other_digit);
        *target_digit = res;
        borrow = borrow1 || borrow2;
    }
    if borrow {
        sub_from_digits(1, &mut target[other.len()..]);
    }
}
// Precondition: target <= other
pub fn sub_assign_digits_reverse(target: &mut Vec<u64>, other: &[u64]) {
    target.resize(other.len(), 0);
    let mut borrow = false;
    for (target_digit, &other_digit) in target.iter_mut().zip(other.iter()) {
        let (res, borrow1) = other_digit.overflowing_sub(borrow as u64);
        let (res, borrow2) = res.overflowing_sub(*target_digit);
        *target_digit = res;
        borrow = borrow1 || borrow2;
    }
    assert!(!borrow);
}

/// `digits = digits * factor + addend`, growing by at most one limb.
pub fn mul_add_small(digits: &mut Vec<u64>, factor: u64, addend: u64) {
    let mut carry = addend as u128;
    for digit in digits.iter_mut() {
        let prod = (*digit as u128) * (factor as u128) + carry;
        *digit = prod as u64;
        carry = prod >> 64;
    }
    if carry != 0 {
        digits.push(carry as u64);
    }
}

/// Divides `digits` in place by `divisor`, returning the remainder. The quotient may be left
/// with high zero limbs.
pub fn div_rem_small(digits: &mut [u64], divisor: u64) -> u64 {
    assert!(divisor != 0, "div_rem_small by 0");
    let divisor = divisor as u128;
    let mut rem = 0u128;
    for digit in digits.iter_mut().rev() {
        let current = (rem << 64) | (*digit as u128);
        *digit = (current / divisor) as u64;
        rem = current % divisor;
    }
    rem as u64
}
