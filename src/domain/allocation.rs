use chrono::NaiveDate;
use rust_decimal::Decimal;
use serde::{Deserialize, Serialize};

use crate::errors::{LedgerError, Result};

use super::rates::{DayClass, MealSlot, RateTable};

/// Upper bound on funded meals per calculation. Bounds the walk when a rate
/// is zero and the budget alone would never stop it.
pub const MAX_FUNDED_MEALS: usize = 100;

/// One funded meal, created only by [`allocate`].
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
pub struct MealEvent {
    pub date: NaiveDate,
    pub slot: MealSlot,
    pub cost: Decimal,
    pub day_label: String,
}

impl MealEvent {
    fn new(date: NaiveDate, slot: MealSlot, cost: Decimal) -> Self {
        Self {
            date,
            slot,
            cost,
            day_label: date.format("%A").to_string(),
        }
    }
}

/// The complete outcome of one allocation run.
///
/// `rates_used` is a copy taken at calculation time: editing the live rate
/// table afterwards never changes a result that was already produced.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
pub struct CalculationResult {
    pub start_date: NaiveDate,
    pub budget: Decimal,
    pub meals_funded: Vec<MealEvent>,
    pub meal_count: usize,
    pub remainder: Decimal,
    pub rates_used: RateTable,
}

impl CalculationResult {
    /// Date of the last funded meal, if any meal was funded at all.
    pub fn last_meal_date(&self) -> Option<NaiveDate> {
        self.meals_funded.last().map(|meal| meal.date)
    }
}

/// Greedily spreads `budget` across lunch/supper slots starting at
/// `start_date`, charging the Friday or weekday rate per day.
///
/// Walks one day at a time, funding Lunch then Supper whenever the
/// remaining budget covers the slot's rate. The walk stops when the
/// remaining budget drops below the cheaper of the current day's two rates
/// (no later day at these rates could fund it), when the budget is fully
/// spent, or at the [`MAX_FUNDED_MEALS`] cap.
///
/// Fails with [`LedgerError::InvalidBudget`] when `budget` is not positive;
/// once past that check the function cannot fail.
pub fn allocate(
    budget: Decimal,
    start_date: NaiveDate,
    rates: &RateTable,
) -> Result<CalculationResult> {
    if budget <= Decimal::ZERO {
        return Err(LedgerError::InvalidBudget);
    }

    let mut remaining = budget;
    let mut cursor = start_date;
    let mut meals: Vec<MealEvent> = Vec::new();

    while remaining > Decimal::ZERO && meals.len() < MAX_FUNDED_MEALS {
        let class = DayClass::of(cursor);
        let lunch_cost = rates.lunch_rate(class);
        let supper_cost = rates.supper_rate(class);

        if remaining >= lunch_cost && meals.len() < MAX_FUNDED_MEALS {
            remaining -= lunch_cost;
            meals.push(MealEvent::new(cursor, MealSlot::Lunch, lunch_cost));
        }
        if remaining >= supper_cost && meals.len() < MAX_FUNDED_MEALS {
            remaining -= supper_cost;
            meals.push(MealEvent::new(cursor, MealSlot::Supper, supper_cost));
        }

        // No future day at these rates can fund another meal.
        if remaining < lunch_cost.min(supper_cost) {
            break;
        }

        match cursor.succ_opt() {
            Some(next) => cursor = next,
            // Calendar overflow; unreachable for any realistic start date.
            None => break,
        }
    }

    Ok(CalculationResult {
        start_date,
        budget,
        meal_count: meals.len(),
        meals_funded: meals,
        remainder: remaining,
        rates_used: rates.clone(),
    })
}

#[cfg(test)]
mod tests {
    use super::*;

    fn monday() -> NaiveDate {
        // 2024-06-03 is a Monday.
        NaiveDate::from_ymd_opt(2024, 6, 3).unwrap()
    }

    #[test]
    fn non_positive_budget_is_rejected() {
        let rates = RateTable::default();
        assert!(matches!(
            allocate(Decimal::ZERO, monday(), &rates),
            Err(LedgerError::InvalidBudget)
        ));
        assert!(matches!(
            allocate(Decimal::from(-10), monday(), &rates),
            Err(LedgerError::InvalidBudget)
        ));
    }

    #[test]
    fn lunch_precedes_supper_within_a_day() {
        let rates = RateTable::default();
        let result = allocate(Decimal::from(100), monday(), &rates).unwrap();
        assert_eq!(result.meal_count, 2);
        assert_eq!(result.meals_funded[0].slot, MealSlot::Lunch);
        assert_eq!(result.meals_funded[1].slot, MealSlot::Supper);
        assert_eq!(result.meals_funded[0].date, result.meals_funded[1].date);
    }

    #[test]
    fn zero_cost_slot_is_bounded_by_the_meal_cap() {
        let mut rates = RateTable::default();
        rates.weekday_supper = Decimal::ZERO;
        rates.friday_supper = Decimal::ZERO;
        // Budget too small for any lunch, so only free suppers accrue.
        let result = allocate(Decimal::from(10), monday(), &rates).unwrap();
        assert_eq!(result.meal_count, MAX_FUNDED_MEALS);
        assert_eq!(result.remainder, Decimal::from(10));
    }

    #[test]
    fn exhausted_budget_stops_before_free_meals_accrue_forever() {
        let mut rates = RateTable::default();
        rates.weekday_supper = Decimal::ZERO;
        // Lunch consumes the whole budget; the same-day free supper is still
        // funded, then the spent budget ends the walk.
        let result = allocate(Decimal::from(50), monday(), &rates).unwrap();
        assert_eq!(result.meal_count, 2);
        assert_eq!(result.remainder, Decimal::ZERO);
    }
}
