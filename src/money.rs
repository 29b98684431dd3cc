//! Fixed-point money amounts.
//!
//! All monetary fields in the data model use [Money] so that summing many
//! records stays exact. Amounts are stored as integer cents; floating point
//! only appears when computing percentage ratios and when formatting.

use std::{
    fmt,
    iter::Sum,
    ops::{Add, AddAssign, Neg, Sub, SubAssign},
};

use serde::{Deserialize, Deserializer, Serialize, Serializer, de};

/// A signed money amount in integer cents.
///
/// The upstream API serialises amounts as JSON numbers in major units
/// (dollars), and form fields arrive as numeric strings. Both are accepted.
/// Malformed input degrades to zero rather than failing the whole document,
/// so a single bad record cannot take down a report.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq, PartialOrd, Ord, Hash)]
pub struct Money(i64);

impl Money {
    /// Zero dollars and zero cents.
    pub const ZERO: Money = Money(0);

    /// Creates an amount from integer cents.
    pub const fn from_cents(cents: i64) -> Self {
        Self(cents)
    }

    /// Creates an amount from major units, rounding to the nearest cent.
    ///
    /// Non-finite input (the result of parsing garbage) becomes zero.
    pub fn from_major(value: f64) -> Self {
        if value.is_finite() {
            Self((value * 100.0).round() as i64)
        } else {
            Self::ZERO
        }
    }

    /// The raw value in cents.
    pub const fn cents(self) -> i64 {
        self.0
    }

    /// The value in major units, for ratio math and display formatting only.
    pub fn as_major(self) -> f64 {
        self.0 as f64 / 100.0
    }

    /// Whether the amount is exactly zero.
    pub const fn is_zero(self) -> bool {
        self.0 == 0
    }

    /// Whether the amount is below zero.
    pub const fn is_negative(self) -> bool {
        self.0 < 0
    }

    /// This amount's share of `total` as a whole percentage, clamped to
    /// 0-100. A zero or negative total yields 0 for every share, never a
    /// division error.
    pub fn percent_of(self, total: Money) -> u8 {
        if total.0 <= 0 {
            return 0;
        }

        let ratio = self.0 as f64 / total.0 as f64 * 100.0;
        ratio.round().clamp(0.0, 100.0) as u8
    }
}

impl fmt::Display for Money {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let sign = if self.0 < 0 { "-" } else { "" };
        let abs = self.0.unsigned_abs();
        write!(f, "{sign}{}.{:02}", abs / 100, abs % 100)
    }
}

impl Add for Money {
    type Output = Money;

    fn add(self, rhs: Money) -> Money {
        Money(self.0 + rhs.0)
    }
}

impl AddAssign for Money {
    fn add_assign(&mut self, rhs: Money) {
        self.0 += rhs.0;
    }
}

impl Sub for Money {
    type Output = Money;

    fn sub(self, rhs: Money) -> Money {
        Money(self.0 - rhs.0)
    }
}

impl SubAssign for Money {
    fn sub_assign(&mut self, rhs: Money) {
        self.0 -= rhs.0;
    }
}

impl Neg for Money {
    type Output = Money;

    fn neg(self) -> Money {
        Money(-self.0)
    }
}

impl Sum for Money {
    fn sum<I: Iterator<Item = Money>>(iter: I) -> Money {
        iter.fold(Money::ZERO, Add::add)
    }
}

impl Serialize for Money {
    fn serialize<S: Serializer>(&self, serializer: S) -> Result<S::Ok, S::Error> {
        serializer.serialize_f64(self.as_major())
    }
}

impl<'de> Deserialize<'de> for Money {
    fn deserialize<D: Deserializer<'de>>(deserializer: D) -> Result<Self, D::Error> {
        deserializer.deserialize_any(MoneyVisitor)
    }
}

struct MoneyVisitor;

impl<'de> de::Visitor<'de> for MoneyVisitor {
    type Value = Money;

    fn expecting(&self, formatter: &mut fmt::Formatter) -> fmt::Result {
        formatter.write_str("a number or numeric string amount")
    }

    fn visit_f64<E: de::Error>(self, value: f64) -> Result<Money, E> {
        Ok(Money::from_major(value))
    }

    fn visit_i64<E: de::Error>(self, value: i64) -> Result<Money, E> {
        Ok(Money::from_major(value as f64))
    }

    fn visit_u64<E: de::Error>(self, value: u64) -> Result<Money, E> {
        Ok(Money::from_major(value as f64))
    }

    fn visit_str<E: de::Error>(self, value: &str) -> Result<Money, E> {
        match value.trim().parse::<f64>() {
            Ok(number) => Ok(Money::from_major(number)),
            Err(_) => {
                tracing::warn!("treating malformed amount {value:?} as zero");
                Ok(Money::ZERO)
            }
        }
    }

    fn visit_unit<E: de::Error>(self) -> Result<Money, E> {
        Ok(Money::ZERO)
    }

    fn visit_none<E: de::Error>(self) -> Result<Money, E> {
        Ok(Money::ZERO)
    }
}

#[cfg(test)]
mod tests {
    use super::Money;

    #[test]
    fn display_formats_two_decimal_places() {
        assert_eq!(Money::from_cents(0).to_string(), "0.00");
        assert_eq!(Money::from_cents(5).to_string(), "0.05");
        assert_eq!(Money::from_cents(1050).to_string(), "10.50");
        assert_eq!(Money::from_cents(-1050).to_string(), "-10.50");
    }

    #[test]
    fn from_major_rounds_to_nearest_cent() {
        assert_eq!(Money::from_major(12.34), Money::from_cents(1234));
        assert_eq!(Money::from_major(12.345), Money::from_cents(1235));
        assert_eq!(Money::from_major(-0.005), Money::from_cents(-1));
    }

    #[test]
    fn from_major_treats_non_finite_as_zero() {
        assert_eq!(Money::from_major(f64::NAN), Money::ZERO);
        assert_eq!(Money::from_major(f64::INFINITY), Money::ZERO);
    }

    #[test]
    fn summing_cents_avoids_float_drift() {
        // 0.1 + 0.2 famously does not equal 0.3 in binary floating point.
        let total: Money = [Money::from_major(0.1), Money::from_major(0.2)]
            .into_iter()
            .sum();

        assert_eq!(total, Money::from_cents(30));
    }

    #[test]
    fn deserializes_numbers_and_numeric_strings() {
        assert_eq!(
            serde_json::from_str::<Money>("12.5").unwrap(),
            Money::from_cents(1250)
        );
        assert_eq!(
            serde_json::from_str::<Money>("\"12.5\"").unwrap(),
            Money::from_cents(1250)
        );
        assert_eq!(
            serde_json::from_str::<Money>("250").unwrap(),
            Money::from_cents(25000)
        );
    }

    #[test]
    fn malformed_amounts_degrade_to_zero() {
        assert_eq!(
            serde_json::from_str::<Money>("\"not a number\"").unwrap(),
            Money::ZERO
        );
        assert_eq!(serde_json::from_str::<Money>("null").unwrap(), Money::ZERO);
    }

    #[test]
    fn serializes_as_major_units() {
        let json = serde_json::to_string(&Money::from_cents(1234)).unwrap();
        assert_eq!(json, "12.34");
    }

    #[test]
    fn percent_of_rounds_and_clamps() {
        let total = Money::from_cents(300);
        assert_eq!(Money::from_cents(100).percent_of(total), 33);
        assert_eq!(Money::from_cents(200).percent_of(total), 67);
        assert_eq!(Money::from_cents(600).percent_of(total), 100);
    }

    #[test]
    fn percent_of_zero_total_is_zero() {
        assert_eq!(Money::from_cents(500).percent_of(Money::ZERO), 0);
        assert_eq!(Money::ZERO.percent_of(Money::ZERO), 0);
    }
}
