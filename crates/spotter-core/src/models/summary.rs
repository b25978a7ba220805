//! Purchase summary types and functionality.

use jiff::Timestamp;
use serde::{Deserialize, Serialize};

use super::{Purchase, PurchaseStatus};

/// Summary information about a purchase with feature statistics.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct PurchaseSummary {
    /// Purchase ID
    pub id: String,
    /// Name of the purchased plan
    pub plan_name: String,
    /// Buyer display name, if any
    pub buyer_name: Option<String>,
    /// Professional display name, if any
    pub professional_name: Option<String>,
    /// Purchase status
    pub status: PurchaseStatus,
    /// Creation timestamp
    pub created_at: Timestamp,
    /// Total number of plan features
    pub total_features: u32,
    /// Number of completed features
    pub completed_features: u32,
    /// Number of pending features
    pub pending_features: u32,
}

impl From<&Purchase> for PurchaseSummary {
    fn from(purchase: &Purchase) -> Self {
        let total_features = purchase.plan.features.len() as u32;
        let completed_features = purchase
            .plan
            .features
            .iter()
            .filter(|feature| feature.is_completed)
            .count() as u32;
        let pending_features = total_features - completed_features;

        Self {
            id: purchase.id.clone(),
            plan_name: purchase.plan.name.clone(),
            buyer_name: purchase.buyer.name.clone(),
            professional_name: purchase.professional.name.clone(),
            status: purchase.status,
            created_at: purchase.created_at,
            total_features,
            completed_features,
            pending_features,
        }
    }
}
