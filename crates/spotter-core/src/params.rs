//! Parameter structures for caseload operations
//!
//! This module contains shared parameter structures that can be used across
//! different interfaces (CLI, MCP, etc.) without framework-specific derives
//! or dependencies. These structures provide a clean interface for passing
//! data between different layers of the application.
//!
//! ## Architecture: Parameter Wrapper Pattern
//!
//! This module implements a parameter wrapper pattern that enables clean
//! separation of concerns between the core domain logic and
//! interface-specific frameworks:
//!
//! ```text
//! ┌─────────────────┐    ┌─────────────────┐    ┌─────────────────┐
//! │   CLI Args      │    │   MCP Params    │    │  Core Params    │
//! │  (clap derives) │───▶│ (serde derives) │───▶│ (minimal deps)  │
//! └─────────────────┘    └─────────────────┘    └─────────────────┘
//! ```
//!
//! ### Benefits
//!
//! 1. **Separation of Concerns**: Core parameter structures remain
//!    independent of UI framework dependencies (clap, schemars).
//!
//! 2. **Interface Flexibility**: Each interface (CLI, MCP, future REST API)
//!    can add its own framework-specific derives without polluting core
//!    logic.
//!
//! 3. **Conditional Compilation**: Features like JSON schema generation can
//!    be enabled only where needed, keeping core lightweight.
//!
//! ### Usage Pattern
//!
//! Interface layers create wrapper structs that:
//! - Add framework-specific derives (clap::Args, schemars::JsonSchema, etc.)
//! - Use transparent serialization (`#[serde(transparent)]`)
//! - Convert to core parameters via `From` implementations
//!
//! ```ignore
//! // In the CLI module
//! #[derive(Args)]
//! pub struct TasksArgs {
//!     #[arg(long)]
//!     pub role: Option<String>,
//!     #[arg(long)]
//!     pub as_of: Option<String>,
//! }
//!
//! impl From<TasksArgs> for ListTasks {
//!     fn from(args: TasksArgs) -> Self {
//!         ListTasks {
//!             role: args.role,
//!             as_of: args.as_of,
//!         }
//!     }
//! }
//!
//! // In the MCP module
//! #[derive(Deserialize, JsonSchema)]
//! #[serde(transparent)]
//! struct ListTasksRequest(spotter_core::params::ListTasks);
//! ```

#[cfg(feature = "schema")]
use schemars::JsonSchema;
use serde::{Deserialize, Serialize};

use jiff::Timestamp;

use crate::{
    models::{ProfessionalRole, PurchaseStatus, UserRole},
    operations, Result,
};

/// Generic parameters for operations requiring just an ID.
///
/// Used for operations like show_purchase.
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
#[cfg_attr(feature = "schema", derive(JsonSchema))]
pub struct Id {
    /// The ID of the resource to operate on
    pub id: String,
}

/// Parameters for deriving the pending task list.
///
/// Controls which side of the marketplace the worklist is rendered for and
/// which instant urgency is measured against.
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
#[cfg_attr(feature = "schema", derive(JsonSchema))]
pub struct ListTasks {
    /// Viewing role: 'professional' (default) or 'client'
    pub role: Option<String>,

    /// Reference instant in RFC 3339 format; defaults to the current time
    pub as_of: Option<String>,
}

impl ListTasks {
    /// Validate parameters and return the parsed role and reference instant.
    ///
    /// # Returns
    ///
    /// A tuple of the viewing role (defaulting to professional) and the
    /// optional reference instant; `None` means "resolve to now at
    /// derivation time"
    ///
    /// # Errors
    ///
    /// * `CaseloadError::InvalidInput` - When the role string is not
    ///   recognized or the timestamp is not valid RFC 3339
    ///
    /// # Examples
    ///
    /// ```rust
    /// use spotter_core::{models::UserRole, params::ListTasks};
    ///
    /// let params = ListTasks {
    ///     role: Some("client".to_string()),
    ///     as_of: None,
    /// };
    /// let (role, as_of) = params.validate()?;
    /// assert_eq!(role, UserRole::Client);
    /// assert_eq!(as_of, None);
    /// # use spotter_core::Result;
    /// # Result::<()>::Ok(())
    /// ```
    pub fn validate(&self) -> Result<(UserRole, Option<Timestamp>)> {
        let role = operations::parse_user_role(self.role.as_deref())?;
        let as_of = operations::parse_as_of(self.as_of.as_deref())?;
        Ok((role, as_of))
    }
}

/// Parameters for listing purchases.
///
/// Optionally narrows the listing to one lifecycle status.
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
#[cfg_attr(feature = "schema", derive(JsonSchema))]
pub struct ListPurchases {
    /// Status filter: 'awaiting_payment', 'awaiting_scheduling', 'active',
    /// 'finalized', or 'cancelled'
    pub status: Option<String>,
}

impl ListPurchases {
    /// Validate parameters and return the parsed status filter.
    ///
    /// # Errors
    ///
    /// * `CaseloadError::InvalidInput` - When the status string is not a
    ///   known lifecycle status
    pub fn validate(&self) -> Result<Option<PurchaseStatus>> {
        operations::parse_status_filter(self.status.as_deref())
    }
}

/// Parameters for listing the feature catalog.
///
/// Optionally narrows the listing to one professional role.
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
#[cfg_attr(feature = "schema", derive(JsonSchema))]
pub struct ListCatalog {
    /// Role filter: 'nutritionist' or 'trainer'
    pub role: Option<String>,
}

impl ListCatalog {
    /// Validate parameters and return the parsed role filter.
    ///
    /// # Errors
    ///
    /// * `CaseloadError::InvalidInput` - When the role string is not
    ///   recognized
    pub fn validate(&self) -> Result<Option<ProfessionalRole>> {
        operations::parse_professional_role(self.role.as_deref())
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::CaseloadError;

    #[test]
    fn test_list_tasks_validate_defaults() {
        let params = ListTasks::default();

        let (role, as_of) = params.validate().unwrap();
        assert_eq!(role, UserRole::Professional);
        assert_eq!(as_of, None);
    }

    #[test]
    fn test_list_tasks_validate_client_with_as_of() {
        let params = ListTasks {
            role: Some("client".to_string()),
            as_of: Some("2024-03-01T12:00:00Z".to_string()),
        };

        let (role, as_of) = params.validate().unwrap();
        assert_eq!(role, UserRole::Client);
        assert!(as_of.is_some());
    }

    #[test]
    fn test_list_tasks_validate_invalid_role() {
        let params = ListTasks {
            role: Some("admin".to_string()),
            as_of: None,
        };

        let result = params.validate();
        assert!(result.is_err());

        match result.unwrap_err() {
            CaseloadError::InvalidInput { field, reason } => {
                assert_eq!(field, "role");
                assert!(reason.contains("Invalid role: admin"));
            }
            _ => panic!("Expected InvalidInput error"),
        }
    }

    #[test]
    fn test_list_tasks_validate_invalid_as_of() {
        let params = ListTasks {
            role: None,
            as_of: Some("not-a-timestamp".to_string()),
        };

        let result = params.validate();
        assert!(result.is_err());

        match result.unwrap_err() {
            CaseloadError::InvalidInput { field, .. } => {
                assert_eq!(field, "as_of");
            }
            _ => panic!("Expected InvalidInput error"),
        }
    }

    #[test]
    fn test_list_purchases_validate() {
        let params = ListPurchases {
            status: Some("active".to_string()),
        };
        assert_eq!(params.validate().unwrap(), Some(PurchaseStatus::Active));

        let params = ListPurchases::default();
        assert_eq!(params.validate().unwrap(), None);
    }

    #[test]
    fn test_list_purchases_validate_invalid_status() {
        let params = ListPurchases {
            status: Some("paused".to_string()),
        };
        assert!(params.validate().is_err());
    }

    #[test]
    fn test_list_catalog_validate() {
        let params = ListCatalog {
            role: Some("trainer".to_string()),
        };
        assert_eq!(
            params.validate().unwrap(),
            Some(ProfessionalRole::Trainer)
        );

        let params = ListCatalog::default();
        assert_eq!(params.validate().unwrap(), None);
    }

    #[test]
    fn test_list_catalog_validate_invalid_role() {
        let params = ListCatalog {
            role: Some("coach".to_string()),
        };
        assert!(params.validate().is_err());
    }
}
