//! Status and priority enumerations for purchases and tasks.

use std::str::FromStr;

use serde::{Deserialize, Serialize};

/// Type-safe enumeration of purchase lifecycle statuses.
///
/// Wire tokens follow the marketplace API convention (`ACTIVE`,
/// `CANCELLED`, ...). Tokens this crate does not know about decode to
/// [`PurchaseStatus::Unknown`] so a snapshot never fails to load over a
/// status added upstream.
#[derive(Debug, Clone, Copy, Serialize, Deserialize, PartialEq, Eq)]
#[serde(rename_all = "SCREAMING_SNAKE_CASE")]
pub enum PurchaseStatus {
    /// Payment has not cleared yet
    AwaitingPayment,

    /// Paid, waiting for the first session to be scheduled
    AwaitingScheduling,

    /// Service is in progress; the only status that produces tasks
    Active,

    /// Service concluded normally
    Finalized,

    /// Purchase was cancelled or refunded
    Cancelled,

    /// Unrecognized wire token
    #[serde(other)]
    Unknown,
}

impl FromStr for PurchaseStatus {
    type Err = String;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.to_uppercase().as_str() {
            "AWAITING_PAYMENT" => Ok(PurchaseStatus::AwaitingPayment),
            "AWAITING_SCHEDULING" => Ok(PurchaseStatus::AwaitingScheduling),
            "ACTIVE" => Ok(PurchaseStatus::Active),
            "FINALIZED" => Ok(PurchaseStatus::Finalized),
            "CANCELLED" => Ok(PurchaseStatus::Cancelled),
            _ => Err(format!("Invalid purchase status: {s}")),
        }
    }
}

impl PurchaseStatus {
    /// Convert to the wire token used by the marketplace API.
    pub fn as_str(&self) -> &'static str {
        match self {
            PurchaseStatus::AwaitingPayment => "AWAITING_PAYMENT",
            PurchaseStatus::AwaitingScheduling => "AWAITING_SCHEDULING",
            PurchaseStatus::Active => "ACTIVE",
            PurchaseStatus::Finalized => "FINALIZED",
            PurchaseStatus::Cancelled => "CANCELLED",
            PurchaseStatus::Unknown => "UNKNOWN",
        }
    }
}

/// Type-safe enumeration of task priority tiers.
#[derive(Debug, Clone, Copy, Serialize, Deserialize, PartialEq, Eq)]
#[serde(rename_all = "lowercase")]
pub enum TaskPriority {
    /// Needs attention now
    High,

    /// Should be handled soon
    Medium,

    /// Can wait
    Low,
}

impl FromStr for TaskPriority {
    type Err = String;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.to_lowercase().as_str() {
            "high" => Ok(TaskPriority::High),
            "medium" => Ok(TaskPriority::Medium),
            "low" => Ok(TaskPriority::Low),
            _ => Err(format!("Invalid task priority: {s}")),
        }
    }
}

impl TaskPriority {
    /// Convert to the lowercase string representation.
    pub fn as_str(&self) -> &'static str {
        match self {
            TaskPriority::High => "high",
            TaskPriority::Medium => "medium",
            TaskPriority::Low => "low",
        }
    }

    /// Sort rank for display ordering. Lower ranks sort first.
    pub fn rank(&self) -> u8 {
        match self {
            TaskPriority::High => 0,
            TaskPriority::Medium => 1,
            TaskPriority::Low => 2,
        }
    }

    /// Get priority with consistent icon formatting for display.
    ///
    /// Returns a formatted string that includes both an icon and the
    /// priority name. This method ensures consistent visual representation
    /// across all display contexts.
    ///
    /// # Icons Used
    /// - `▲ High` - Triangle for urgent tasks
    /// - `● Medium` - Filled circle for normal tasks
    /// - `○ Low` - Open circle for tasks that can wait
    ///
    /// # Examples
    ///
    /// ```rust
    /// use spotter_core::models::TaskPriority;
    ///
    /// assert_eq!(TaskPriority::High.with_icon(), "▲ High");
    /// assert_eq!(TaskPriority::Medium.with_icon(), "● Medium");
    /// assert_eq!(TaskPriority::Low.with_icon(), "○ Low");
    /// ```
    pub fn with_icon(&self) -> &'static str {
        match self {
            TaskPriority::High => "▲ High",
            TaskPriority::Medium => "● Medium",
            TaskPriority::Low => "○ Low",
        }
    }
}
