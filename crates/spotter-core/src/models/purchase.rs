//! Purchase model definitions and related functionality.

use jiff::Timestamp;
use serde::{Deserialize, Serialize};

use super::PurchaseStatus;

/// Represents a marketplace purchase joining a client to a professional's
/// service plan.
///
/// Purchases are owned by the marketplace backend; this crate only ever
/// reads them. Field names on the wire are camelCase per the backend API.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
#[serde(rename_all = "camelCase")]
pub struct Purchase {
    /// Unique identifier for the purchase
    pub id: String,

    /// Lifecycle status; only `ACTIVE` purchases produce tasks
    pub status: PurchaseStatus,

    /// Timestamp when the purchase was created (UTC)
    pub created_at: Timestamp,

    /// The purchased service plan
    pub plan: Plan,

    /// The client who bought the plan
    pub buyer: UserRef,

    /// The professional delivering the plan
    pub professional: UserRef,
}

/// A service plan as sold on the marketplace.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
#[serde(rename_all = "camelCase")]
pub struct Plan {
    /// Unique identifier for the plan
    pub id: String,

    /// Display name of the plan
    pub name: String,

    /// Optional plan description
    #[serde(default)]
    pub description: Option<String>,

    /// Features included in the plan (missing array decodes as empty)
    #[serde(default)]
    pub features: Vec<Feature>,
}

/// One feature line inside a purchased plan.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
#[serde(rename_all = "camelCase")]
pub struct Feature {
    /// Stable feature identifier, resolved against the catalog
    pub id: String,

    /// Whether this feature has already been delivered for this purchase
    #[serde(default)]
    pub is_completed: bool,
}

/// A lightweight reference to a marketplace user.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
#[serde(rename_all = "camelCase")]
pub struct UserRef {
    /// Unique identifier for the user
    pub id: String,

    /// Display name, if the profile has one
    #[serde(default)]
    pub name: Option<String>,
}

impl UserRef {
    /// Returns the display name, falling back when it is missing or empty.
    ///
    /// An empty string counts as absent, matching how the marketplace
    /// treats unfilled profile names.
    pub fn name_or<'a>(&'a self, fallback: &'a str) -> &'a str {
        match self.name.as_deref() {
            Some(name) if !name.is_empty() => name,
            _ => fallback,
        }
    }
}
