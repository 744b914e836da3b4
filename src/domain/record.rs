use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};

use super::allocation::CalculationResult;

/// Label applied when the user leaves the payee blank.
pub const DEFAULT_PAYEE: &str = "Default";

/// A stored calculation: one [`CalculationResult`] plus ownership metadata.
/// Records are immutable once created; the store only ever appends.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
pub struct Record {
    pub id: u64,
    pub payee: String,
    pub created_at: DateTime<Utc>,
    pub result: CalculationResult,
}

impl Record {
    /// Builds a record, coercing an empty or whitespace payee to
    /// [`DEFAULT_PAYEE`]. Ids are assigned by the record store.
    pub fn new(
        id: u64,
        payee: impl Into<String>,
        created_at: DateTime<Utc>,
        result: CalculationResult,
    ) -> Self {
        let payee = payee.into();
        let trimmed = payee.trim();
        let payee = if trimmed.is_empty() {
            DEFAULT_PAYEE.to_string()
        } else {
            trimmed.to_string()
        };
        Self {
            id,
            payee,
            created_at,
            result,
        }
    }
}
