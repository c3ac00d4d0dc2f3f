//! Fixed-point money and quantity types.
//!
//! Costs are never held in binary floating point. `Money` counts whole cents,
//! `Quantity` counts thousandths of a unit, and the product of the two is kept
//! exactly as an [`ExtendedCost`] until a total is rounded back to cents.

use std::fmt;
use std::iter::Sum;
use std::ops::Add;
use std::str::FromStr;

use serde::de::{self, Visitor};
use serde::{Deserialize, Deserializer, Serialize, Serializer};

use crate::error::{PotluckError, PotluckResult};

const CENT_DIGITS: u32 = 2;
const MILLI_DIGITS: u32 = 3;

/// Scale of an extended cost: quantity thousandths times cents.
const EXTENDED_PER_CENT: i128 = 10i128.pow(MILLI_DIGITS);

/// A non-negative currency amount in cents.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Hash, PartialOrd, Ord)]
pub struct Money(i64);

/// A non-negative item quantity in thousandths of its unit of measure.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Hash, PartialOrd, Ord)]
pub struct Quantity(i64);

/// Exact `quantity x cost_perunit` in thousandths of a cent.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, PartialOrd, Ord)]
pub struct ExtendedCost(i128);

impl Money {
    pub const ZERO: Money = Money(0);

    pub fn from_cents(cents: i64) -> Self {
        Money(cents)
    }

    pub fn cents(self) -> i64 {
        self.0
    }
}

impl Quantity {
    pub const ZERO: Quantity = Quantity(0);

    pub fn from_units(units: i64) -> PotluckResult<Self> {
        units
            .checked_mul(10i64.pow(MILLI_DIGITS))
            .map(Quantity)
            .ok_or_else(|| PotluckError::InvalidInput(format!("quantity {} is too large", units)))
    }

    pub fn from_thousandths(thousandths: i64) -> Self {
        Quantity(thousandths)
    }

    pub fn thousandths(self) -> i64 {
        self.0
    }

    pub fn checked_add(self, other: Quantity) -> PotluckResult<Quantity> {
        self.0
            .checked_add(other.0)
            .map(Quantity)
            .ok_or_else(|| PotluckError::AggregationFailure("quantity total overflowed".into()))
    }
}

impl ExtendedCost {
    pub fn of(quantity: Quantity, unit_cost: Money) -> Self {
        ExtendedCost(quantity.0 as i128 * unit_cost.0 as i128)
    }

    /// Round to the nearest cent, halves away from zero.
    pub fn to_money(self) -> PotluckResult<Money> {
        let half = EXTENDED_PER_CENT / 2;
        let rounded = if self.0 >= 0 {
            (self.0 + half) / EXTENDED_PER_CENT
        } else {
            (self.0 - half) / EXTENDED_PER_CENT
        };
        i64::try_from(rounded)
            .map(Money)
            .map_err(|_| PotluckError::AggregationFailure("cost total overflowed".into()))
    }
}

impl Add for ExtendedCost {
    type Output = ExtendedCost;

    fn add(self, rhs: ExtendedCost) -> ExtendedCost {
        ExtendedCost(self.0 + rhs.0)
    }
}

impl Sum for ExtendedCost {
    fn sum<I: Iterator<Item = ExtendedCost>>(iter: I) -> Self {
        iter.fold(ExtendedCost::default(), Add::add)
    }
}

/// Parse a non-negative decimal string into an integer scaled by `10^digits`.
fn parse_scaled(s: &str, digits: u32, label: &str) -> PotluckResult<i64> {
    let text = s.trim();
    let invalid = || PotluckError::InvalidInput(format!("'{}' is not a valid {}", s, label));

    if text.starts_with('-') {
        return Err(PotluckError::InvalidInput(format!(
            "{} must not be negative: '{}'",
            label, s
        )));
    }

    let (whole, frac) = match text.split_once('.') {
        Some((whole, frac)) => (whole, frac),
        None => (text, ""),
    };

    if whole.is_empty() || !whole.bytes().all(|b| b.is_ascii_digit()) {
        return Err(invalid());
    }
    if !frac.bytes().all(|b| b.is_ascii_digit()) {
        return Err(invalid());
    }
    if frac.len() > digits as usize {
        return Err(PotluckError::InvalidInput(format!(
            "{} allows at most {} decimal places: '{}'",
            label, digits, s
        )));
    }

    let scale = 10i64.pow(digits);
    let whole: i64 = whole.parse().map_err(|_| invalid())?;
    let frac: i64 = if frac.is_empty() {
        0
    } else {
        let padded = format!("{:0<width$}", frac, width = digits as usize);
        padded.parse().map_err(|_| invalid())?
    };

    whole
        .checked_mul(scale)
        .and_then(|w| w.checked_add(frac))
        .ok_or_else(invalid)
}

impl FromStr for Money {
    type Err = PotluckError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        parse_scaled(s, CENT_DIGITS, "amount").map(Money)
    }
}

impl FromStr for Quantity {
    type Err = PotluckError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        parse_scaled(s, MILLI_DIGITS, "quantity").map(Quantity)
    }
}

impl fmt::Display for Money {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let sign = if self.0 < 0 { "-" } else { "" };
        let abs = self.0.unsigned_abs();
        write!(f, "{}{}.{:02}", sign, abs / 100, abs % 100)
    }
}

impl fmt::Display for Quantity {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let scale = 10u64.pow(MILLI_DIGITS);
        let sign = if self.0 < 0 { "-" } else { "" };
        let abs = self.0.unsigned_abs();
        let whole = abs / scale;
        let frac = abs % scale;

        if frac == 0 {
            write!(f, "{}{}", sign, whole)
        } else {
            let frac = format!("{:03}", frac);
            write!(f, "{}{}.{}", sign, whole, frac.trim_end_matches('0'))
        }
    }
}

// Serialised as decimal strings so no consumer ever sees a float.

impl Serialize for Money {
    fn serialize<S: Serializer>(&self, serializer: S) -> Result<S::Ok, S::Error> {
        serializer.collect_str(self)
    }
}

impl Serialize for Quantity {
    fn serialize<S: Serializer>(&self, serializer: S) -> Result<S::Ok, S::Error> {
        serializer.collect_str(self)
    }
}

/// Accepts a decimal string, an integer or a float literal.
struct DecimalVisitor<T>(std::marker::PhantomData<T>);

impl<T> Visitor<'_> for DecimalVisitor<T>
where
    T: FromStr<Err = PotluckError>,
{
    type Value = T;

    fn expecting(&self, f: &mut fmt::Formatter) -> fmt::Result {
        f.write_str("a non-negative decimal number or decimal string")
    }

    fn visit_str<E: de::Error>(self, v: &str) -> Result<T, E> {
        v.parse().map_err(E::custom)
    }

    fn visit_u64<E: de::Error>(self, v: u64) -> Result<T, E> {
        self.visit_str(&v.to_string())
    }

    fn visit_i64<E: de::Error>(self, v: i64) -> Result<T, E> {
        self.visit_str(&v.to_string())
    }

    // Shortest round-trip formatting recovers the literal that was written.
    fn visit_f64<E: de::Error>(self, v: f64) -> Result<T, E> {
        self.visit_str(&v.to_string())
    }
}

impl<'de> Deserialize<'de> for Money {
    fn deserialize<D: Deserializer<'de>>(deserializer: D) -> Result<Self, D::Error> {
        deserializer.deserialize_any(DecimalVisitor(std::marker::PhantomData))
    }
}

impl<'de> Deserialize<'de> for Quantity {
    fn deserialize<D: Deserializer<'de>>(deserializer: D) -> Result<Self, D::Error> {
        deserializer.deserialize_any(DecimalVisitor(std::marker::PhantomData))
    }
}
