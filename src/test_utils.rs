use crate::BigInt;
use proptest::prelude::*;

pub fn any_bigint(range: std::ops::Range<usize>) -> impl Strategy<Value = BigInt> {
    (
        proptest::collection::vec(any::<u64>(), range),
        any::<bool>(),
    )
        .prop_map(|(digits, negative)| BigInt::from_digits(digits, negative))
}
pub fn nonnegative_bigint(range: std::ops::Range<usize>) -> impl Strategy<Value = BigInt> {
    proptest::collection::vec(any::<u64>(), range).prop_map(|digits| BigInt::from_digits(digits, false))
}
/// Limbs drawn from a handful of edge values so carries and borrows actually ripple.
pub fn carry_heavy_bigint(range: std::ops::Range<usize>) -> impl Strategy<Value = BigInt> {
    (
        proptest::collection::vec(prop_oneof![Just(0u64), Just(1u64), Just(u64::MAX), any::<u64>()], range),
        any::<bool>(),
    )
        .prop_map(|(digits, negative)| BigInt::from_digits(digits, negative))
}
