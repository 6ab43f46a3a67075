//! Rental entity and its status state machine.

use chrono::Utc;
use serde::{Deserialize, Serialize};

/// Opaque car identifier. The reference API accepts either a string or a
/// number here and performs no inventory check against it.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(untagged)]
pub enum CarId {
    Number(i64),
    Text(String),
}

impl std::fmt::Display for CarId {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            CarId::Number(n) => write!(f, "{}", n),
            CarId::Text(s) => write!(f, "{}", s),
        }
    }
}

impl From<&str> for CarId {
    fn from(s: &str) -> Self {
        CarId::Text(s.to_string())
    }
}

impl From<i64> for CarId {
    fn from(n: i64) -> Self {
        CarId::Number(n)
    }
}

/// Rental lifecycle state
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "SCREAMING_SNAKE_CASE")]
pub enum RentalStatus {
    Active,
    Completed,
    Cancelled,
}

impl RentalStatus {
    /// Wire representation, matching the serialized form
    pub fn as_str(&self) -> &'static str {
        match self {
            RentalStatus::Active => "ACTIVE",
            RentalStatus::Completed => "COMPLETED",
            RentalStatus::Cancelled => "CANCELLED",
        }
    }
}

/// A car rental held by the rental store.
///
/// The owning user is fixed at creation; `user_id` is a non-owning
/// back-reference that the domain layer only ever compares, never
/// dereferences.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Rental {
    /// Sequential identifier assigned by the store
    pub id: u64,

    /// Identifier of the owning user
    pub user_id: u64,

    /// Opaque car identifier
    pub car_id: CarId,

    /// Timestamp string; defaults to creation time when omitted
    pub start_date: String,

    /// Timestamp string; `null` until set or backfilled on completion
    pub end_date: Option<String>,

    /// Current lifecycle state, starts at `ACTIVE`
    pub status: RentalStatus,
}

/// Field bundle for a rental about to be inserted; the store assigns the id.
#[derive(Debug, Clone)]
pub struct NewRental {
    pub user_id: u64,
    pub car_id: CarId,
    pub start_date: Option<String>,
    pub end_date: Option<String>,
}

impl NewRental {
    /// Validate rental fields, collecting every violated rule.
    ///
    /// Kept permissive on purpose: `car_id` is already constrained to
    /// string-or-number by its type, so only the owner reference can fail.
    pub fn validate(&self) -> Vec<String> {
        let mut errors = Vec::new();

        if self.user_id == 0 {
            errors.push("User ID must be a positive integer".to_string());
        }

        errors
    }
}

impl Rental {
    pub fn is_active(&self) -> bool {
        self.status == RentalStatus::Active
    }

    /// Apply a status transition.
    ///
    /// The reference system imposes no terminal-state guard: a completed
    /// rental may still be cancelled and vice versa. All status changes are
    /// funneled through here so a stricter policy would be a one-line
    /// change.
    fn transition(&mut self, next: RentalStatus) {
        if next == RentalStatus::Completed && self.end_date.is_none() {
            self.end_date = Some(Utc::now().to_rfc3339());
        }
        self.status = next;
    }

    /// Mark the rental completed, backfilling `end_date` with the current
    /// time only when it is not already set.
    pub fn complete(&mut self) {
        self.transition(RentalStatus::Completed);
    }

    /// Mark the rental cancelled. Cancellation is a status change, not a
    /// removal.
    pub fn cancel(&mut self) {
        self.transition(RentalStatus::Cancelled);
    }
}
