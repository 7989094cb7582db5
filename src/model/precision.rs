//! Arbitrary-precision exponentiation and truncation.
//!
//! A document's log-likelihood is a sum of many negative logarithms and easily
//! reaches `-10_000`. `f64::exp` underflows to zero long before that, which
//! would erase the ordering between categories. [`DecimalExp`] instead splits
//! the exponent into an integer part and a fractional remainder:
//!
//! ```text
//! e^L = e^i · e^r        L = i + r,  i = trunc(L),  |r| < 1
//! ```
//!
//! `e^i` is computed by repeated squaring of a high-precision `e` in decimal
//! arithmetic, `e^r` with the native `f64::exp` (safe, since `|r| < 1`), and
//! the two are multiplied as decimals.

use std::str::FromStr;

use bigdecimal::{BigDecimal, RoundingMode};
use num_traits::{FromPrimitive, One};

use crate::error::{CatbayesError, Result};

/// Euler's number to 100 significant digits.
const EULER: &str = "2.718281828459045235360287471352662497757247093699959574966967627724076630353547594571382178525166427";

/// Highest precision [`DecimalExp`] supports; bounded by [`EULER`].
pub const MAX_DECIMAL_PRECISION: u64 = 100;

/// Computes `e^x` as a [`BigDecimal`] without floating-point underflow.
#[derive(Debug, Clone)]
pub struct DecimalExp {
    euler: BigDecimal,
    precision: u64,
}

impl DecimalExp {
    /// Create an exponentiator carrying `precision` significant digits.
    pub fn new(precision: u64) -> Result<Self> {
        if precision == 0 || precision > MAX_DECIMAL_PRECISION {
            return Err(CatbayesError::config(format!(
                "decimal precision must be within 1..={MAX_DECIMAL_PRECISION}, got {precision}"
            )));
        }
        let euler = BigDecimal::from_str(EULER)
            .map_err(|e| CatbayesError::other(format!("invalid constant e: {e}")))?;
        Ok(Self { euler, precision })
    }

    /// Significant digits carried by every intermediate result.
    pub fn precision(&self) -> u64 {
        self.precision
    }

    /// `e^exponent`, split into an exact-ish integer power and a native
    /// fractional power.
    pub fn exp(&self, exponent: f64) -> Result<BigDecimal> {
        if !exponent.is_finite() {
            return Err(CatbayesError::invalid_model(format!(
                "cannot exponentiate non-finite value {exponent}"
            )));
        }

        let integer = exponent.trunc();
        let fraction = exponent - integer;

        let magnitude = self.integer_power(integer.abs() as u64);
        let integer_part = if integer < 0.0 {
            magnitude.inverse().with_prec(self.precision)
        } else {
            magnitude
        };

        let fractional_part = BigDecimal::from_f64(fraction.exp()).ok_or_else(|| {
            CatbayesError::invalid_model(format!("cannot represent e^{fraction}"))
        })?;

        Ok((&integer_part * &fractional_part).with_prec(self.precision))
    }

    /// `e^n` by square-and-multiply, rounding to the working precision after
    /// every product.
    fn integer_power(&self, mut n: u64) -> BigDecimal {
        let mut result = BigDecimal::one();
        let mut base = self.euler.with_prec(self.precision);

        while n > 0 {
            if n & 1 == 1 {
                result = (&result * &base).with_prec(self.precision);
            }
            n >>= 1;
            if n > 0 {
                base = (&base * &base).with_prec(self.precision);
            }
        }

        result
    }
}

/// Truncate `value` toward zero to `digits` decimal places.
///
/// ```
/// use std::str::FromStr;
/// use bigdecimal::BigDecimal;
/// use catbayes::model::precision::truncate;
///
/// let value = BigDecimal::from_str("2.00005").unwrap();
/// assert_eq!(truncate(&value, 4), BigDecimal::from_str("2.0000").unwrap());
/// ```
pub fn truncate(value: &BigDecimal, digits: u32) -> BigDecimal {
    value.with_scale_round(i64::from(digits), RoundingMode::Down)
}

/// Truncate `value` to `digits` decimal places and convert it to the nearest
/// `f64` of the truncated decimal text.
pub fn truncate_to_f64(value: &BigDecimal, digits: u32) -> Result<f64> {
    truncate(value, digits)
        .to_string()
        .parse::<f64>()
        .map_err(|e| CatbayesError::other(format!("cannot represent {value} as f64: {e}")))
}
