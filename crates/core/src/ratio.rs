//! Null-safe ratio helpers.
//!
//! An empty bucket or a zero baseline means "no observable effect", so every
//! ratio here yields zero instead of failing.

use rust_decimal::Decimal;

/// `numerator / denominator`, or zero when the denominator is zero.
#[must_use]
pub fn safe_div(numerator: Decimal, denominator: Decimal) -> Decimal {
    if denominator.is_zero() {
        return Decimal::ZERO;
    }
    numerator / denominator
}

/// Relative change from `base` to `current` in percent, zero when `base` is zero.
#[must_use]
pub fn pct_change(current: Decimal, base: Decimal) -> Decimal {
    safe_div(current - base, base) * Decimal::ONE_HUNDRED
}

/// `part / whole` in percent, zero when `whole` is zero.
#[must_use]
pub fn pct_of(part: Decimal, whole: Decimal) -> Decimal {
    safe_div(part, whole) * Decimal::ONE_HUNDRED
}

/// Arithmetic mean, zero for an empty input.
pub fn mean<I>(values: I) -> Decimal
where
    I: IntoIterator<Item = Decimal>,
{
    let mut total = Decimal::ZERO;
    let mut count: u64 = 0;
    for value in values {
        total += value;
        count += 1;
    }
    safe_div(total, Decimal::from(count))
}

/// Clamps `value` into `[-limit, limit]`.
#[must_use]
pub fn clip_symmetric(value: Decimal, limit: Decimal) -> Decimal {
    let limit = limit.abs();
    value.clamp(-limit, limit)
}
