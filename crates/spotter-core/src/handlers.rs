//! Core handler functions for unified business logic.
//!
//! This module provides a unified interface for all business operations,
//! consolidating logic that would otherwise be duplicated between CLI and MCP
//! interfaces. Each handler function encapsulates a complete business workflow
//! and returns structured data that can be formatted by different interfaces.
//!
//! ## Architecture
//!
//! The handlers follow a consistent pattern:
//!
//! ```text
//! Interface → Handler → Operations + Engine → Models
//! ```
//!
//! - **Handlers**: High-level business workflows (this module)
//! - **Parameters**: Request parameters and validation ([`crate::params`])
//! - **Engine**: Task derivation ([`crate::engine`])
//! - **Caseload**: Loaded purchase snapshot ([`crate::caseload`])
//!
//! All handlers are synchronous. The caseload is loaded once at startup and
//! every operation reads from memory; only [`crate::CaseloadBuilder`] does
//! I/O.
//!
//! ## Handler Patterns
//!
//! ### Query Handlers
//! Return domain objects directly:
//! ```text
//! pub fn handle_show_purchase(caseload: &Caseload, params: &Id) -> Result<Purchase>
//! ```
//!
//! ### List Handlers
//! Return collections for consistent formatting:
//! ```text
//! pub fn handle_list_tasks(caseload: &Caseload, params: &ListTasks) -> Result<Vec<RequiredTask>>
//! ```
//!
//! List handlers return collections in derivation order; interfaces wrap them
//! in display types such as [`crate::display::RequiredTasks`] to apply
//! presentation ordering.
//!
//! ## Usage Examples
//!
//! ### CLI Integration
//! ```rust,no_run
//! # use spotter_core::{
//! #     display::RequiredTasks, handle_list_tasks, params::ListTasks, CaseloadBuilder,
//! # };
//! # async {
//! # let caseload = CaseloadBuilder::new().build().await?;
//! # let params = ListTasks::default();
//! let tasks = handle_list_tasks(&caseload, &params)?;
//! let output = format!("{}", RequiredTasks::sorted(tasks));
//! // renderer.render(&output)?;
//! # Result::<(), spotter_core::CaseloadError>::Ok(())
//! # };
//! ```
//!
//! ### MCP Integration
//! ```rust,no_run
//! # use spotter_core::{
//! #     display::RequiredTasks, handle_list_tasks, params::ListTasks, CaseloadBuilder,
//! # };
//! # async {
//! # let caseload = CaseloadBuilder::new().build().await?;
//! # let params = ListTasks::default();
//! let tasks = handle_list_tasks(&caseload, &params)?;
//! let output = format!("{}", RequiredTasks::sorted(tasks));
//! // Ok(CallToolResult::success(vec![Content::text(output)]))
//! # Result::<(), spotter_core::CaseloadError>::Ok(())
//! # };
//! ```

use jiff::Timestamp;

use crate::{
    catalog::{self, CatalogEntry},
    models::{Purchase, PurchaseFilter, PurchaseSummary, RequiredTask},
    params::{Id, ListCatalog, ListPurchases, ListTasks},
    Caseload, CaseloadError, Result,
};

/// Handle listing derived tasks for a viewer role.
///
/// Runs the derivation engine over the caseload and returns every pending
/// task, in derivation order (purchase order, then feature order within each
/// plan). When `as_of` is not given, elapsed days are measured against the
/// wall clock.
///
/// # Arguments
///
/// * `caseload` - The loaded purchase snapshot
/// * `params` - List parameters containing the viewer role and reference time
///
/// # Returns
///
/// A vector of RequiredTask objects in derivation order
///
/// # Errors
///
/// Returns [`CaseloadError::InvalidInput`] if the role or reference time
/// fails validation.
///
/// # Examples
///
/// ```rust,no_run
/// # use spotter_core::{handlers::handle_list_tasks, params::ListTasks, CaseloadBuilder};
/// # async {
/// let caseload = CaseloadBuilder::new().build().await?;
/// let params = ListTasks {
///     role: Some("professional".to_string()),
///     as_of: None,
/// };
/// let tasks = handle_list_tasks(&caseload, &params)?;
/// # Result::<(), spotter_core::CaseloadError>::Ok(())
/// # };
/// ```
pub fn handle_list_tasks(caseload: &Caseload, params: &ListTasks) -> Result<Vec<RequiredTask>> {
    let (role, as_of) = params.validate()?;
    let now = as_of.unwrap_or_else(Timestamp::now);
    Ok(caseload.derive_tasks(role, now))
}

/// Handle listing purchases with optional status filtering.
///
/// Converts purchases to summaries with feature count information for
/// consistent list display across interfaces.
///
/// # Arguments
///
/// * `caseload` - The loaded purchase snapshot
/// * `params` - List parameters containing the optional status filter
///
/// # Returns
///
/// A vector of PurchaseSummary objects with feature counts
///
/// # Errors
///
/// Returns [`CaseloadError::InvalidInput`] if the status filter is not a
/// known status token.
///
/// # Examples
///
/// ```rust,no_run
/// # use spotter_core::{handlers::handle_list_purchases, params::ListPurchases, CaseloadBuilder};
/// # async {
/// let caseload = CaseloadBuilder::new().build().await?;
/// let params = ListPurchases {
///     status: Some("active".to_string()),
/// };
/// let summaries = handle_list_purchases(&caseload, &params)?;
/// # Result::<(), spotter_core::CaseloadError>::Ok(())
/// # };
/// ```
pub fn handle_list_purchases(
    caseload: &Caseload,
    params: &ListPurchases,
) -> Result<Vec<PurchaseSummary>> {
    // Reject unknown status tokens before filtering
    params.validate()?;
    let filter = PurchaseFilter::from(params);
    let purchases = caseload.filtered_purchases(&filter);
    Ok(purchases.into_iter().map(Into::into).collect())
}

/// Handle showing a complete purchase with its feature checklist.
///
/// # Arguments
///
/// * `caseload` - The loaded purchase snapshot
/// * `params` - ID parameters specifying which purchase to retrieve
///
/// # Returns
///
/// The Purchase with the matching id
///
/// # Errors
///
/// Returns [`CaseloadError::PurchaseNotFound`] if no purchase in the
/// caseload has the given id.
///
/// # Examples
///
/// ```rust,no_run
/// # use spotter_core::{handlers::handle_show_purchase, params::Id, CaseloadBuilder};
/// # async {
/// let caseload = CaseloadBuilder::new().build().await?;
/// let params = Id {
///     id: "pur_1".to_string(),
/// };
/// let purchase = handle_show_purchase(&caseload, &params)?;
/// # Result::<(), spotter_core::CaseloadError>::Ok(())
/// # };
/// ```
pub fn handle_show_purchase(caseload: &Caseload, params: &Id) -> Result<Purchase> {
    caseload
        .find_purchase(&params.id)
        .cloned()
        .ok_or_else(|| CaseloadError::PurchaseNotFound {
            id: params.id.clone(),
        })
}

/// Handle listing the feature catalog.
///
/// Returns the built-in table of features tasks can be derived from, in
/// catalog order, optionally restricted to one professional role.
///
/// # Arguments
///
/// * `params` - List parameters containing the optional role filter
///
/// # Returns
///
/// A vector of CatalogEntry objects in catalog order
///
/// # Errors
///
/// Returns [`CaseloadError::InvalidInput`] if the role filter is not a known
/// professional role.
///
/// # Examples
///
/// ```rust
/// # use spotter_core::{handlers::handle_list_catalog, params::ListCatalog};
/// let params = ListCatalog {
///     role: Some("nutritionist".to_string()),
/// };
/// let entries = handle_list_catalog(&params)?;
/// assert!(!entries.is_empty());
/// # Result::<(), spotter_core::CaseloadError>::Ok(())
/// ```
pub fn handle_list_catalog(params: &ListCatalog) -> Result<Vec<CatalogEntry>> {
    let role = params.validate()?;
    let entries = match role {
        Some(role) => catalog::for_role(role).into_iter().cloned().collect(),
        None => catalog::entries().to_vec(),
    };
    Ok(entries)
}

#[cfg(test)]
mod tests {
    use std::fs;

    use super::*;
    use crate::{
        models::{ProfessionalRole, PurchaseStatus, TaskPriority},
        CaseloadBuilder,
    };
    use tempfile::TempDir;

    const SNAPSHOT_JSON: &str = r#"[
        {
            "id": "pur_1",
            "status": "ACTIVE",
            "createdAt": "2024-03-01T12:00:00Z",
            "plan": {
                "id": "plan_1",
                "name": "Acompanhamento completo",
                "features": [
                    {"id": "initial_consultation", "isCompleted": true},
                    {"id": "diet_plan", "isCompleted": false},
                    {"id": "follow_up", "isCompleted": false}
                ]
            },
            "buyer": {"id": "usr_1", "name": "Ana"},
            "professional": {"id": "usr_2", "name": "Dr. Silva"}
        },
        {
            "id": "pur_2",
            "status": "CANCELLED",
            "createdAt": "2024-02-20T09:30:00Z",
            "plan": {
                "id": "plan_2",
                "name": "Treino trimestral",
                "features": [
                    {"id": "training_plan", "isCompleted": false}
                ]
            },
            "buyer": {"id": "usr_3", "name": "Bruno"},
            "professional": {"id": "usr_4", "name": "Carla"}
        }
    ]"#;

    async fn create_test_caseload() -> (TempDir, Caseload) {
        let dir = TempDir::new().unwrap();
        let path = dir.path().join("purchases.json");
        fs::write(&path, SNAPSHOT_JSON).unwrap();

        let caseload = CaseloadBuilder::new()
            .with_snapshot_path(Some(&path))
            .build()
            .await
            .unwrap();
        (dir, caseload)
    }

    #[tokio::test]
    async fn test_handle_list_tasks() {
        let (_dir, caseload) = create_test_caseload().await;

        // Five days after the active purchase was created
        let params = ListTasks {
            role: None,
            as_of: Some("2024-03-06T12:00:00Z".to_string()),
        };
        let result = handle_list_tasks(&caseload, &params);
        assert!(result.is_ok());

        // Completed and cancelled work is excluded; order follows the plan
        let tasks = result.unwrap();
        assert_eq!(tasks.len(), 2);
        assert_eq!(tasks[0].kind, "diet_plan");
        assert_eq!(tasks[0].title, "Plano alimentar para Ana");
        assert_eq!(tasks[0].priority, TaskPriority::Medium);
        assert_eq!(tasks[1].kind, "follow_up");
        assert_eq!(tasks[1].priority, TaskPriority::Low);
    }

    #[tokio::test]
    async fn test_handle_list_tasks_client_role() {
        let (_dir, caseload) = create_test_caseload().await;

        let params = ListTasks {
            role: Some("client".to_string()),
            as_of: Some("2024-03-06T12:00:00Z".to_string()),
        };
        let tasks = handle_list_tasks(&caseload, &params).unwrap();

        assert_eq!(tasks[0].title, "Plano alimentar com Dr. Silva");
        assert_eq!(tasks[0].action_link, "/professional/usr_2/plan/plan_1");
    }

    #[tokio::test]
    async fn test_handle_list_tasks_invalid_role() {
        let (_dir, caseload) = create_test_caseload().await;

        let params = ListTasks {
            role: Some("admin".to_string()),
            as_of: None,
        };
        let result = handle_list_tasks(&caseload, &params);
        assert!(matches!(
            result,
            Err(CaseloadError::InvalidInput { .. })
        ));
    }

    #[tokio::test]
    async fn test_handle_list_tasks_invalid_as_of() {
        let (_dir, caseload) = create_test_caseload().await;

        let params = ListTasks {
            role: None,
            as_of: Some("yesterday".to_string()),
        };
        let result = handle_list_tasks(&caseload, &params);
        assert!(matches!(
            result,
            Err(CaseloadError::InvalidInput { .. })
        ));
    }

    #[tokio::test]
    async fn test_handle_list_purchases() {
        let (_dir, caseload) = create_test_caseload().await;

        let params = ListPurchases { status: None };
        let result = handle_list_purchases(&caseload, &params);
        assert!(result.is_ok());

        let summaries = result.unwrap();
        assert_eq!(summaries.len(), 2);
        assert_eq!(summaries[0].id, "pur_1");
        assert_eq!(summaries[0].plan_name, "Acompanhamento completo");
        assert_eq!(summaries[0].total_features, 3);
        assert_eq!(summaries[0].completed_features, 1);
        assert_eq!(summaries[1].id, "pur_2");
    }

    #[tokio::test]
    async fn test_handle_list_purchases_filtered() {
        let (_dir, caseload) = create_test_caseload().await;

        let params = ListPurchases {
            status: Some("active".to_string()),
        };
        let summaries = handle_list_purchases(&caseload, &params).unwrap();

        assert_eq!(summaries.len(), 1);
        assert_eq!(summaries[0].status, PurchaseStatus::Active);
    }

    #[tokio::test]
    async fn test_handle_list_purchases_invalid_status() {
        let (_dir, caseload) = create_test_caseload().await;

        let params = ListPurchases {
            status: Some("paused".to_string()),
        };
        let result = handle_list_purchases(&caseload, &params);
        assert!(matches!(
            result,
            Err(CaseloadError::InvalidInput { .. })
        ));
    }

    #[tokio::test]
    async fn test_handle_show_purchase() {
        let (_dir, caseload) = create_test_caseload().await;

        let params = Id {
            id: "pur_1".to_string(),
        };
        let result = handle_show_purchase(&caseload, &params);
        assert!(result.is_ok());

        let purchase = result.unwrap();
        assert_eq!(purchase.plan.name, "Acompanhamento completo");
        assert_eq!(purchase.plan.features.len(), 3);
    }

    #[tokio::test]
    async fn test_handle_show_purchase_nonexistent() {
        let (_dir, caseload) = create_test_caseload().await;

        let params = Id {
            id: "pur_999".to_string(),
        };
        let result = handle_show_purchase(&caseload, &params);
        assert!(matches!(
            result,
            Err(CaseloadError::PurchaseNotFound { ref id }) if id == "pur_999"
        ));
    }

    #[test]
    fn test_handle_list_catalog() {
        let params = ListCatalog { role: None };
        let entries = handle_list_catalog(&params).unwrap();
        assert_eq!(entries.len(), catalog::entries().len());
    }

    #[test]
    fn test_handle_list_catalog_filtered() {
        let params = ListCatalog {
            role: Some("trainer".to_string()),
        };
        let entries = handle_list_catalog(&params).unwrap();
        assert!(!entries.is_empty());
        assert!(entries
            .iter()
            .all(|entry| entry.role == ProfessionalRole::Trainer));
    }

    #[test]
    fn test_handle_list_catalog_invalid_role() {
        let params = ListCatalog {
            role: Some("chef".to_string()),
        };
        let result = handle_list_catalog(&params);
        assert!(matches!(
            result,
            Err(CaseloadError::InvalidInput { .. })
        ));
    }
}
