//! Filter types for querying purchases.

use super::{Purchase, PurchaseStatus};

/// Filter options for listing purchases.
#[derive(Debug, Clone, Copy, Default)]
pub struct PurchaseFilter {
    /// Filter by purchase status.
    /// If None, purchases of every status are included.
    pub status: Option<PurchaseStatus>,
}

impl PurchaseFilter {
    /// Create a filter matching only purchases with the given status.
    pub fn with_status(status: PurchaseStatus) -> Self {
        Self {
            status: Some(status),
        }
    }

    /// Returns whether a purchase passes this filter.
    pub fn matches(&self, purchase: &Purchase) -> bool {
        match self.status {
            Some(status) => purchase.status == status,
            None => true,
        }
    }
}

impl From<&crate::params::ListPurchases> for PurchaseFilter {
    /// Convert ListPurchases parameters to a PurchaseFilter.
    ///
    /// The status string is expected to have been validated by
    /// [`crate::operations::parse_status_filter`] before conversion; an
    /// unparseable status here simply yields an unfiltered listing.
    fn from(params: &crate::params::ListPurchases) -> Self {
        let status = params
            .status
            .as_deref()
            .and_then(|s| s.parse::<PurchaseStatus>().ok());
        Self { status }
    }
}
