//! Task derivation engine.
//!
//! Turns a slice of marketplace purchases into the worklist of pending
//! actions for one side of the marketplace. The pipeline is a pure
//! filter-and-map over purchases and their plan features:
//!
//! 1. Keep only purchases whose status is `ACTIVE`
//! 2. Within each, keep only features not yet completed
//! 3. Resolve each feature against the catalog; unknown ids derive nothing
//! 4. Compose the task title and action link for the viewing role
//! 5. Attach the priority and due date from the policy module
//!
//! The result preserves input order; sorting by priority is the display
//! layer's concern. The engine is total over well-typed input: it never
//! returns an error and never panics.

use jiff::Timestamp;

use crate::{
    catalog::{self, CatalogEntry},
    models::{Purchase, PurchaseStatus, RequiredTask, UserRole},
    policy,
};

/// Fallback buyer name for professional-facing task titles.
pub const DEFAULT_CLIENT_NAME: &str = "Cliente";

/// Fallback professional name for client-facing task titles.
pub const DEFAULT_PROFESSIONAL_NAME: &str = "Profissional";

/// Derive the pending worklist from a slice of purchases.
///
/// Every derived task traces back to exactly one (purchase, feature) pair
/// where the purchase is `ACTIVE` and the feature is not completed.
/// Features whose id is not in the catalog are skipped silently.
///
/// # Arguments
///
/// * `purchases` - Purchase records, typically one caseload snapshot
/// * `role` - Which side of the marketplace the worklist is rendered for
/// * `now` - The instant urgency is measured against; injected so callers
///   and tests control the clock
///
/// # Returns
///
/// Derived tasks in input order, unsorted
///
/// # Examples
///
/// ```rust
/// use jiff::Timestamp;
/// use spotter_core::{
///     engine::derive_tasks,
///     models::{Feature, Plan, Purchase, PurchaseStatus, UserRef, UserRole},
/// };
///
/// let purchased = Timestamp::from_second(1640995200).unwrap();
/// let purchases = vec![Purchase {
///     id: "pur_1".to_string(),
///     status: PurchaseStatus::Active,
///     created_at: purchased,
///     plan: Plan {
///         id: "plan_1".to_string(),
///         name: "Starter".to_string(),
///         description: None,
///         features: vec![Feature {
///             id: "initial_consultation".to_string(),
///             is_completed: false,
///         }],
///     },
///     buyer: UserRef {
///         id: "u_1".to_string(),
///         name: Some("Ana".to_string()),
///     },
///     professional: UserRef {
///         id: "u_2".to_string(),
///         name: None,
///     },
/// }];
///
/// let now = purchased.checked_add(jiff::SignedDuration::from_hours(24 * 5)).unwrap();
/// let tasks = derive_tasks(&purchases, UserRole::Professional, now);
/// assert_eq!(tasks.len(), 1);
/// assert_eq!(tasks[0].title, "Consulta inicial para Ana");
/// ```
pub fn derive_tasks(purchases: &[Purchase], role: UserRole, now: Timestamp) -> Vec<RequiredTask> {
    purchases
        .iter()
        .filter(|purchase| purchase.status == PurchaseStatus::Active)
        .flat_map(|purchase| tasks_for_purchase(purchase, role, now))
        .collect()
}

/// Derive the tasks one active purchase contributes to the worklist.
fn tasks_for_purchase(
    purchase: &Purchase,
    role: UserRole,
    now: Timestamp,
) -> impl Iterator<Item = RequiredTask> + '_ {
    let days_since_purchase = policy::days_between(purchase.created_at, now);
    purchase
        .plan
        .features
        .iter()
        .filter(|feature| !feature.is_completed)
        .filter_map(move |feature| {
            catalog::find(&feature.id)
                .map(|entry| build_task(purchase, entry, role, days_since_purchase))
        })
}

/// Compose a single task from a purchase and a resolved catalog entry.
fn build_task(
    purchase: &Purchase,
    entry: &CatalogEntry,
    role: UserRole,
    days_since_purchase: i64,
) -> RequiredTask {
    let (title, action_link) = match role {
        UserRole::Professional => (
            format!(
                "{} para {}",
                entry.label,
                purchase.buyer.name_or(DEFAULT_CLIENT_NAME)
            ),
            format!("/client/{}/plan/{}", purchase.buyer.id, purchase.plan.id),
        ),
        UserRole::Client => (
            format!(
                "{} com {}",
                entry.label,
                purchase.professional.name_or(DEFAULT_PROFESSIONAL_NAME)
            ),
            format!(
                "/professional/{}/plan/{}",
                purchase.professional.id, purchase.plan.id
            ),
        ),
    };

    RequiredTask {
        kind: entry.id.clone(),
        title,
        description: entry.description.clone(),
        priority: policy::determine_task_priority(&entry.id, days_since_purchase),
        due_date: policy::calculate_due_date(&entry.id, purchase.created_at),
        action_link,
    }
}
