//! Common business operations for the caseload system.
//!
//! This module contains shared parsing and validation operations that are
//! used across different interfaces (CLI, MCP server, etc.). These
//! operations extract common patterns to reduce code duplication while
//! maintaining consistency.

use std::str::FromStr;

use jiff::Timestamp;

use crate::{
    models::{ProfessionalRole, PurchaseStatus, UserRole},
    CaseloadError, Result,
};

/// Parse an optional viewing-role string.
///
/// Absent input defaults to the professional view; the tool is primarily
/// aimed at coaches triaging their caseload.
///
/// # Arguments
///
/// * `role` - Optional role string ('professional' or 'client')
///
/// # Returns
///
/// The parsed role, or [`UserRole::Professional`] when absent
///
/// # Errors
///
/// * `CaseloadError::InvalidInput` - When the role string is not recognized
///
/// # Examples
///
/// ```rust
/// # use spotter_core::{models::UserRole, operations::parse_user_role};
/// assert_eq!(parse_user_role(None).unwrap(), UserRole::Professional);
/// assert_eq!(parse_user_role(Some("client")).unwrap(), UserRole::Client);
/// assert!(parse_user_role(Some("admin")).is_err());
/// ```
pub fn parse_user_role(role: Option<&str>) -> Result<UserRole> {
    match role {
        None => Ok(UserRole::default()),
        Some(s) => UserRole::from_str(s).map_err(|_| {
            CaseloadError::invalid_input("role")
                .with_reason(format!("Invalid role: {s}. Must be 'professional' or 'client'"))
        }),
    }
}

/// Parse an optional professional-role filter for catalog listings.
///
/// # Errors
///
/// * `CaseloadError::InvalidInput` - When the role string is not recognized
pub fn parse_professional_role(role: Option<&str>) -> Result<Option<ProfessionalRole>> {
    match role {
        None => Ok(None),
        Some(s) => ProfessionalRole::from_str(s).map(Some).map_err(|_| {
            CaseloadError::invalid_input("role")
                .with_reason(format!("Invalid role: {s}. Must be 'nutritionist' or 'trainer'"))
        }),
    }
}

/// Parse an optional purchase-status filter.
///
/// Status tokens are accepted in either wire form (`ACTIVE`) or lowercase
/// (`active`).
///
/// # Errors
///
/// * `CaseloadError::InvalidInput` - When the status string is not a known
///   lifecycle status
///
/// # Examples
///
/// ```rust
/// # use spotter_core::{models::PurchaseStatus, operations::parse_status_filter};
/// assert_eq!(parse_status_filter(None).unwrap(), None);
/// assert_eq!(
///     parse_status_filter(Some("active")).unwrap(),
///     Some(PurchaseStatus::Active)
/// );
/// assert!(parse_status_filter(Some("paused")).is_err());
/// ```
pub fn parse_status_filter(status: Option<&str>) -> Result<Option<PurchaseStatus>> {
    match status {
        None => Ok(None),
        Some(s) => PurchaseStatus::from_str(s).map(Some).map_err(|_| {
            CaseloadError::invalid_input("status").with_reason(format!(
                "Invalid status: {s}. Must be one of 'awaiting_payment', \
                 'awaiting_scheduling', 'active', 'finalized', or 'cancelled'"
            ))
        }),
    }
}

/// Parse an optional reference instant for task derivation.
///
/// Absent input means "now"; callers resolve that at the moment of
/// derivation so tests can inject a fixed clock.
///
/// # Errors
///
/// * `CaseloadError::InvalidInput` - When the timestamp string is not valid
///   RFC 3339
///
/// # Examples
///
/// ```rust
/// # use spotter_core::operations::parse_as_of;
/// assert!(parse_as_of(Some("2024-03-01T12:00:00Z")).unwrap().is_some());
/// assert_eq!(parse_as_of(None).unwrap(), None);
/// assert!(parse_as_of(Some("yesterday")).is_err());
/// ```
pub fn parse_as_of(as_of: Option<&str>) -> Result<Option<Timestamp>> {
    match as_of {
        None => Ok(None),
        Some(s) => s.parse::<Timestamp>().map(Some).map_err(|e| {
            CaseloadError::invalid_input("as_of").with_reason(format!(
                "Invalid timestamp: {e}. Use RFC 3339 format, e.g. 2024-03-01T12:00:00Z"
            ))
        }),
    }
}
