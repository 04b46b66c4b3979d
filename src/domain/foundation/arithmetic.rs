//! Display-safe arithmetic.
//!
//! Dashboard figures never panic: division by zero falls back, and sums or
//! products that leave `Decimal`'s range pin to its nearest bound.

use rust_decimal::Decimal;

/// Divides `numerator` by `denominator`, returning `fallback` when the
/// denominator is zero.
///
/// Every ratio on the dashboard goes through this helper so an empty
/// window or an unproductive week shows as zero rather than an error.
pub fn safe_divide(numerator: Decimal, denominator: Decimal, fallback: Decimal) -> Decimal {
    if denominator.is_zero() {
        return fallback;
    }
    numerator.checked_div(denominator).unwrap_or(fallback)
}

/// [`safe_divide`] with the standard zero fallback.
pub fn ratio_or_zero(numerator: Decimal, denominator: Decimal) -> Decimal {
    safe_divide(numerator, denominator, Decimal::ZERO)
}

/// Adds `a` and `b`, pinning to `Decimal::MAX` / `Decimal::MIN` on overflow.
pub fn bounded_add(a: Decimal, b: Decimal) -> Decimal {
    a.checked_add(b).unwrap_or_else(|| pinned(b.is_sign_negative()))
}

/// Multiplies `a` by `b`, pinning to `Decimal::MAX` / `Decimal::MIN` on overflow.
pub fn bounded_mul(a: Decimal, b: Decimal) -> Decimal {
    a.checked_mul(b)
        .unwrap_or_else(|| pinned(a.is_sign_negative() != b.is_sign_negative()))
}

fn pinned(negative: bool) -> Decimal {
    if negative {
        Decimal::MIN
    } else {
        Decimal::MAX
    }
}
