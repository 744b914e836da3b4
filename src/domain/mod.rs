//! Core meal-allocation domain: rates, the greedy allocator, and stored
//! records.

pub mod allocation;
pub mod rates;
pub mod record;
pub mod time;

pub use allocation::{allocate, CalculationResult, MealEvent, MAX_FUNDED_MEALS};
pub use rates::{DayClass, MealSlot, RateField, RateTable};
pub use record::{Record, DEFAULT_PAYEE};
pub use time::Clock;
