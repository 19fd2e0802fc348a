//! Karatsuba multiplication.
//!
//! Each operand's magnitude is split at `m = max(len x, len y) / 2` limbs into a high half and a
//! low half, `x = a * B^m + b` and `y = c * B^m + d`. Three recursive products replace the four
//! of the naive expansion:
//!
//! ```text
//! ac    = a * c
//! bd    = b * d
//! ad_bc = (a + b) * (c + d) - ac - bd
//! x * y = ac * B^(2m) + ad_bc * B^m + bd
//! ```
//!
//! The recursion only ever sees non-negative magnitudes; the sign of the product is computed once
//! up front and applied to the final result.
use crate::error::Result;
use crate::schoolbook_mul::schoolbook_mul;
use crate::BigInt;
use tracing::{instrument, trace};

/// Operands with at most this many limbs go straight to [`schoolbook_mul`].
pub const DEFAULT_CUTOFF_LIMBS: usize = 1;
/// Sub-products of operands at least this many limbs long are computed on the rayon pool.
pub const DEFAULT_PARALLEL_LIMBS: usize = 512;

/// Tuning knobs for [`KaratsubaConfig::multiply`]. None of them change the result.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct KaratsubaConfig {
    cutoff_limbs: usize,
    parallel_limbs: usize,
}

impl Default for KaratsubaConfig {
    fn default() -> Self {
        KaratsubaConfig {
            cutoff_limbs: DEFAULT_CUTOFF_LIMBS,
            parallel_limbs: DEFAULT_PARALLEL_LIMBS,
        }
    }
}

impl KaratsubaConfig {
    pub fn new() -> Self {
        Self::default()
    }

    /// Sets the base-case threshold. Values below one are raised to one, since splitting a
    /// single limb makes no progress.
    pub fn with_cutoff(mut self, limbs: usize) -> Self {
        self.cutoff_limbs = std::cmp::max(limbs, 1);
        self
    }

    /// Sets the operand length at which the three sub-products are evaluated concurrently.
    /// Has no effect without the `parallel` feature.
    pub fn with_parallel_threshold(mut self, limbs: usize) -> Self {
        self.parallel_limbs = limbs;
        self
    }

    pub fn sequential(self) -> Self {
        self.with_parallel_threshold(usize::MAX)
    }

    pub fn cutoff_limbs(&self) -> usize {
        self.cutoff_limbs
    }

    pub fn parallel_limbs(&self) -> usize {
        self.parallel_limbs
    }

    #[instrument(
        skip_all,
        level = "debug",
        fields(x_limbs = x.limb_len(), y_limbs = y.limb_len())
    )]
    pub fn multiply(&self, x: &BigInt, y: &BigInt) -> BigInt {
        let sign = x.sign() * y.sign();
        self.multiply_magnitudes(&x.abs(), &y.abs()).with_sign(sign)
    }

    fn multiply_magnitudes(&self, x: &BigInt, y: &BigInt) -> BigInt {
        debug_assert!(!x.is_negative() && !y.is_negative());
        if std::cmp::min(x.limb_len(), y.limb_len()) <= self.cutoff_limbs {
            return schoolbook_mul(x, y);
        }
        let n = std::cmp::max(x.limb_len(), y.limb_len());
        let m = split_point(x.limb_len(), y.limb_len());
        trace!(n, m, "karatsuba split");
        let (a, b) = x.split_at(m);
        let (c, d) = y.split_at(m);
        let a_plus_b = &a + &b;
        let c_plus_d = &c + &d;
        let (ac, bd, sum_prod) = self.sub_products(n, [(&a, &c), (&b, &d), (&a_plus_b, &c_plus_d)]);
        // Transiently negative until bd is added back below.
        let ad_bc = sum_prod - &ac - &bd;
        ac.scale_by_power(2 * m) + ad_bc.scale_by_power(m) + bd
    }

    #[cfg(feature = "parallel")]
    fn sub_products(&self, n: usize, ops: [(&BigInt, &BigInt); 3]) -> (BigInt, BigInt, BigInt) {
        let [(a, c), (b, d), (s, t)] = ops;
        if n < self.parallel_limbs {
            return (
                self.multiply_magnitudes(a, c),
                self.multiply_magnitudes(b, d),
                self.multiply_magnitudes(s, t),
            );
        }
        trace!(n, "karatsuba fan-out");
        let (ac, (bd, st)) = rayon::join(
            || self.multiply_magnitudes(a, c),
            || {
                rayon::join(
                    || self.multiply_magnitudes(b, d),
                    || self.multiply_magnitudes(s, t),
                )
            },
        );
        (ac, bd, st)
    }

    #[cfg(not(feature = "parallel"))]
    fn sub_products(&self, _n: usize, ops: [(&BigInt, &BigInt); 3]) -> (BigInt, BigInt, BigInt) {
        let [(a, c), (b, d), (s, t)] = ops;
        (
            self.multiply_magnitudes(a, c),
            self.multiply_magnitudes(b, d),
            self.multiply_magnitudes(s, t),
        )
    }
}

/// Limb offset the operands are split at: half the longer length, rounded down, so an odd
/// length leaves the extra limb in the high half.
fn split_point(x_limbs: usize, y_limbs: usize) -> usize {
    std::cmp::max(x_limbs, y_limbs) / 2
}

pub fn karatsuba_mul(x: &BigInt, y: &BigInt) -> BigInt {
    KaratsubaConfig::default().multiply(x, y)
}

/// The multiplication entry point. Exact for all inputs; there is no failure mode.
pub fn multiply(x: &BigInt, y: &BigInt) -> BigInt {
    karatsuba_mul(x, y)
}

/// Parses two decimal strings, multiplies them and renders the product.
pub fn multiply_decimal(x: &str, y: &str) -> Result<String> {
    let x = BigInt::from_decimal_str(x)?;
    let y = BigInt::from_decimal_str(y)?;
    Ok(karatsuba_mul(&x, &y).to_decimal_string())
}

/// A Karatsuba product alongside the schoolbook baseline for the same operands.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Comparison {
    pub x: BigInt,
    pub y: BigInt,
    pub karatsuba: BigInt,
    pub schoolbook: BigInt,
}

impl Comparison {
    pub fn matches(&self) -> bool {
        self.karatsuba == self.schoolbook
    }
}

pub fn compare_algorithms(x: &BigInt, y: &BigInt) -> Comparison {
    Comparison {
        x: x.clone(),
        y: y.clone(),
        karatsuba: karatsuba_mul(x, y),
        schoolbook: schoolbook_mul(x, y),
    }
}
