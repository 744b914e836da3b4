use std::fmt;

use chrono::{Datelike, NaiveDate, Weekday};
use rust_decimal::Decimal;
use serde::{Deserialize, Serialize};

/// The two meal opportunities in a calendar day, ordered Lunch before Supper.
#[derive(Debug, Clone, Copy, Serialize, Deserialize, PartialEq, Eq, PartialOrd, Ord)]
pub enum MealSlot {
    Lunch,
    Supper,
}

impl MealSlot {
    pub fn label(&self) -> &'static str {
        match self {
            MealSlot::Lunch => "Lunch",
            MealSlot::Supper => "Supper",
        }
    }
}

impl fmt::Display for MealSlot {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.label())
    }
}

/// Pricing class of a calendar day. Friday is the only special day; Saturday
/// and Sunday price like any other weekday.
#[derive(Debug, Clone, Copy, Serialize, Deserialize, PartialEq, Eq)]
pub enum DayClass {
    Weekday,
    Friday,
}

impl DayClass {
    pub fn of(date: NaiveDate) -> Self {
        if date.weekday() == Weekday::Fri {
            DayClass::Friday
        } else {
            DayClass::Weekday
        }
    }
}

/// Names one of the four editable rates.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum RateField {
    WeekdayLunch,
    WeekdaySupper,
    FridayLunch,
    FridaySupper,
}

impl RateField {
    pub const ALL: [RateField; 4] = [
        RateField::WeekdayLunch,
        RateField::WeekdaySupper,
        RateField::FridayLunch,
        RateField::FridaySupper,
    ];

    /// Stable token used on the command line (`rates set <key> <value>`).
    pub fn key(&self) -> &'static str {
        match self {
            RateField::WeekdayLunch => "weekday-lunch",
            RateField::WeekdaySupper => "weekday-supper",
            RateField::FridayLunch => "friday-lunch",
            RateField::FridaySupper => "friday-supper",
        }
    }

    pub fn label(&self) -> &'static str {
        match self {
            RateField::WeekdayLunch => "Weekday lunch",
            RateField::WeekdaySupper => "Weekday supper",
            RateField::FridayLunch => "Friday lunch",
            RateField::FridaySupper => "Friday supper",
        }
    }

    pub fn parse(token: &str) -> Option<Self> {
        let needle = token.trim().to_lowercase();
        RateField::ALL
            .into_iter()
            .find(|field| field.key() == needle)
    }
}

impl fmt::Display for RateField {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.key())
    }
}

/// The four current per-meal rates.
///
/// Invariant: every value is a finite decimal ≥ 0. Negative inputs clamp to
/// zero at every entry point, so a table read from disk or edited by the
/// user never carries a negative rate into a calculation.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
pub struct RateTable {
    pub weekday_lunch: Decimal,
    pub weekday_supper: Decimal,
    pub friday_lunch: Decimal,
    pub friday_supper: Decimal,
}

impl Default for RateTable {
    fn default() -> Self {
        Self {
            weekday_lunch: Decimal::from(50),
            weekday_supper: Decimal::from(50),
            friday_lunch: Decimal::from(120),
            friday_supper: Decimal::from(50),
        }
    }
}

impl RateTable {
    pub fn lunch_rate(&self, class: DayClass) -> Decimal {
        match class {
            DayClass::Weekday => self.weekday_lunch,
            DayClass::Friday => self.friday_lunch,
        }
    }

    pub fn supper_rate(&self, class: DayClass) -> Decimal {
        match class {
            DayClass::Weekday => self.weekday_supper,
            DayClass::Friday => self.friday_supper,
        }
    }

    pub fn rate(&self, field: RateField) -> Decimal {
        match field {
            RateField::WeekdayLunch => self.weekday_lunch,
            RateField::WeekdaySupper => self.weekday_supper,
            RateField::FridayLunch => self.friday_lunch,
            RateField::FridaySupper => self.friday_supper,
        }
    }

    /// Sets one rate, clamping negative values to zero.
    pub fn set(&mut self, field: RateField, value: Decimal) {
        let value = value.max(Decimal::ZERO);
        match field {
            RateField::WeekdayLunch => self.weekday_lunch = value,
            RateField::WeekdaySupper => self.weekday_supper = value,
            RateField::FridayLunch => self.friday_lunch = value,
            RateField::FridaySupper => self.friday_supper = value,
        }
    }

    /// Re-clamps every field. Applied after deserializing a table from disk
    /// so hand-edited files cannot smuggle a negative rate in.
    pub fn sanitize(&mut self) {
        for field in RateField::ALL {
            self.set(field, self.rate(field));
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn saturday_and_sunday_use_weekday_rates() {
        // 2024-06-07 is a Friday.
        let friday = NaiveDate::from_ymd_opt(2024, 6, 7).unwrap();
        let saturday = NaiveDate::from_ymd_opt(2024, 6, 8).unwrap();
        let sunday = NaiveDate::from_ymd_opt(2024, 6, 9).unwrap();
        assert_eq!(DayClass::of(friday), DayClass::Friday);
        assert_eq!(DayClass::of(saturday), DayClass::Weekday);
        assert_eq!(DayClass::of(sunday), DayClass::Weekday);
    }

    #[test]
    fn set_clamps_negative_rates_to_zero() {
        let mut rates = RateTable::default();
        rates.set(RateField::FridaySupper, Decimal::from(-25));
        assert_eq!(rates.friday_supper, Decimal::ZERO);
        rates.set(RateField::WeekdayLunch, Decimal::from(80));
        assert_eq!(rates.weekday_lunch, Decimal::from(80));
    }

    #[test]
    fn field_tokens_round_trip() {
        for field in RateField::ALL {
            assert_eq!(RateField::parse(field.key()), Some(field));
        }
        assert_eq!(RateField::parse("FRIDAY-LUNCH"), Some(RateField::FridayLunch));
        assert_eq!(RateField::parse("dinner"), None);
    }

    #[test]
    fn default_table_matches_house_rates() {
        let rates = RateTable::default();
        assert_eq!(rates.weekday_lunch, Decimal::from(50));
        assert_eq!(rates.weekday_supper, Decimal::from(50));
        assert_eq!(rates.friday_lunch, Decimal::from(120));
        assert_eq!(rates.friday_supper, Decimal::from(50));
    }
}
