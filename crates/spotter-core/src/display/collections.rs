//! Collection wrapper types for displaying groups of domain objects.
//!
//! This module provides wrapper types that format collections of domain objects
//! with consistent structure and empty collection handling.

use std::{fmt, ops::Index};

use crate::catalog::CatalogEntry;
use crate::models::{PurchaseSummary, RequiredTask};

/// Newtype wrapper for displaying collections of derived tasks.
///
/// This provides clean Display formatting for task collections without title
/// handling, allowing consumers to handle titles separately. Handles empty
/// collections gracefully.
///
/// Derivation leaves tasks in purchase order; use [`RequiredTasks::sorted`]
/// to put them in presentation order before formatting.
///
/// # Examples
///
/// ```rust
/// use jiff::Timestamp;
/// use spotter_core::{
///     display::RequiredTasks,
///     models::{RequiredTask, TaskPriority},
/// };
///
/// let task = RequiredTask {
///     kind: "diet_plan".to_string(),
///     title: "Plano alimentar para Ana".to_string(),
///     description: "Elaborar o plano alimentar do cliente".to_string(),
///     priority: TaskPriority::High,
///     due_date: Timestamp::now(),
///     action_link: "/client/usr_1/plan/plan_1".to_string(),
/// };
///
/// // Format a collection of tasks
/// let tasks = RequiredTasks(vec![task]);
/// let output = format!("{}", tasks);
/// assert!(output.contains("Plano alimentar para Ana"));
/// ```
pub struct RequiredTasks(pub Vec<RequiredTask>);

impl RequiredTasks {
    /// Wrap a task list in presentation order.
    ///
    /// Tasks are ordered by priority tier, high first. The sort is stable,
    /// so tasks within the same tier keep the order they were derived in.
    pub fn sorted(mut tasks: Vec<RequiredTask>) -> Self {
        tasks.sort_by_key(|task| task.priority.rank());
        Self(tasks)
    }

    /// Check if the collection is empty.
    pub fn is_empty(&self) -> bool {
        self.0.is_empty()
    }

    /// Get the number of tasks in the collection.
    pub fn len(&self) -> usize {
        self.0.len()
    }

    /// Get a reference to the task at the given index.
    pub fn get(&self, index: usize) -> Option<&RequiredTask> {
        self.0.get(index)
    }

    /// Get an iterator over the tasks.
    pub fn iter(&self) -> std::slice::Iter<'_, RequiredTask> {
        self.0.iter()
    }
}

impl Index<usize> for RequiredTasks {
    type Output = RequiredTask;

    fn index(&self, index: usize) -> &Self::Output {
        &self.0[index]
    }
}

impl IntoIterator for RequiredTasks {
    type Item = RequiredTask;
    type IntoIter = std::vec::IntoIter<Self::Item>;

    fn into_iter(self) -> Self::IntoIter {
        self.0.into_iter()
    }
}

impl<'a> IntoIterator for &'a RequiredTasks {
    type Item = &'a RequiredTask;
    type IntoIter = std::slice::Iter<'a, RequiredTask>;

    fn into_iter(self) -> Self::IntoIter {
        self.0.iter()
    }
}

impl fmt::Display for RequiredTasks {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        if self.0.is_empty() {
            writeln!(f, "No pending tasks.")
        } else {
            for task in &self.0 {
                write!(f, "{}", task)?;
            }
            Ok(())
        }
    }
}

/// Newtype wrapper for displaying collections of purchase summaries.
///
/// This wrapper provides Display implementation for collections of purchase
/// summaries without requiring title formatting logic. It handles empty
/// collections gracefully and formats each summary using the existing
/// PurchaseSummary Display trait.
///
/// # Examples
///
/// ```rust
/// use jiff::Timestamp;
/// use spotter_core::{
///     display::PurchaseSummaries,
///     models::{PurchaseStatus, PurchaseSummary},
/// };
///
/// let summary = PurchaseSummary {
///     id: "pur_1".to_string(),
///     plan_name: "Acompanhamento completo".to_string(),
///     buyer_name: Some("Ana".to_string()),
///     professional_name: Some("Dr. Silva".to_string()),
///     status: PurchaseStatus::Active,
///     created_at: Timestamp::now(),
///     total_features: 3,
///     completed_features: 1,
///     pending_features: 2,
/// };
/// let summaries = PurchaseSummaries(vec![summary]);
/// println!("{}", summaries);
/// ```
pub struct PurchaseSummaries(pub Vec<PurchaseSummary>);

impl PurchaseSummaries {
    /// Check if the collection is empty.
    pub fn is_empty(&self) -> bool {
        self.0.is_empty()
    }

    /// Get the number of summaries in the collection.
    pub fn len(&self) -> usize {
        self.0.len()
    }

    /// Get a reference to the summary at the given index.
    pub fn get(&self, index: usize) -> Option<&PurchaseSummary> {
        self.0.get(index)
    }

    /// Get an iterator over the summaries.
    pub fn iter(&self) -> std::slice::Iter<'_, PurchaseSummary> {
        self.0.iter()
    }
}

impl Index<usize> for PurchaseSummaries {
    type Output = PurchaseSummary;

    fn index(&self, index: usize) -> &Self::Output {
        &self.0[index]
    }
}

impl IntoIterator for PurchaseSummaries {
    type Item = PurchaseSummary;
    type IntoIter = std::vec::IntoIter<Self::Item>;

    fn into_iter(self) -> Self::IntoIter {
        self.0.into_iter()
    }
}

impl<'a> IntoIterator for &'a PurchaseSummaries {
    type Item = &'a PurchaseSummary;
    type IntoIter = std::slice::Iter<'a, PurchaseSummary>;

    fn into_iter(self) -> Self::IntoIter {
        self.0.iter()
    }
}

impl fmt::Display for PurchaseSummaries {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        if self.0.is_empty() {
            writeln!(f, "No purchases found.")
        } else {
            for summary in &self.0 {
                write!(f, "{}", summary)?;
            }
            Ok(())
        }
    }
}

/// Newtype wrapper for displaying collections of catalog entries.
///
/// Handles empty collections gracefully and formats each entry using the
/// existing CatalogEntry Display trait.
pub struct CatalogEntries(pub Vec<CatalogEntry>);

impl CatalogEntries {
    /// Check if the collection is empty.
    pub fn is_empty(&self) -> bool {
        self.0.is_empty()
    }

    /// Get the number of entries in the collection.
    pub fn len(&self) -> usize {
        self.0.len()
    }

    /// Get a reference to the entry at the given index.
    pub fn get(&self, index: usize) -> Option<&CatalogEntry> {
        self.0.get(index)
    }

    /// Get an iterator over the entries.
    pub fn iter(&self) -> std::slice::Iter<'_, CatalogEntry> {
        self.0.iter()
    }
}

impl Index<usize> for CatalogEntries {
    type Output = CatalogEntry;

    fn index(&self, index: usize) -> &Self::Output {
        &self.0[index]
    }
}

impl IntoIterator for CatalogEntries {
    type Item = CatalogEntry;
    type IntoIter = std::vec::IntoIter<Self::Item>;

    fn into_iter(self) -> Self::IntoIter {
        self.0.into_iter()
    }
}

impl<'a> IntoIterator for &'a CatalogEntries {
    type Item = &'a CatalogEntry;
    type IntoIter = std::slice::Iter<'a, CatalogEntry>;

    fn into_iter(self) -> Self::IntoIter {
        self.0.iter()
    }
}

impl fmt::Display for CatalogEntries {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        if self.0.is_empty() {
            writeln!(f, "No catalog features found.")
        } else {
            for entry in &self.0 {
                write!(f, "{}", entry)?;
            }
            Ok(())
        }
    }
}

#[cfg(test)]
mod tests {
    use jiff::Timestamp;

    use super::*;
    use crate::models::{PurchaseStatus, TaskPriority};

    fn create_test_task(title: &str, priority: TaskPriority) -> RequiredTask {
        RequiredTask {
            kind: "diet_plan".to_string(),
            title: title.to_string(),
            description: "Elaborar o plano alimentar do cliente".to_string(),
            priority,
            due_date: Timestamp::from_second(1640995200).unwrap(), // 2022-01-01 00:00:00 UTC
            action_link: "/client/usr_1/plan/plan_1".to_string(),
        }
    }

    fn create_test_summary() -> PurchaseSummary {
        PurchaseSummary {
            id: "pur_1".to_string(),
            plan_name: "Acompanhamento completo".to_string(),
            buyer_name: Some("Ana".to_string()),
            professional_name: Some("Dr. Silva".to_string()),
            status: PurchaseStatus::Active,
            created_at: Timestamp::from_second(1640995200).unwrap(),
            total_features: 3,
            completed_features: 1,
            pending_features: 2,
        }
    }

    #[test]
    fn test_required_tasks_display() {
        // Test with tasks
        let tasks = RequiredTasks(vec![create_test_task(
            "Plano alimentar para Ana",
            TaskPriority::High,
        )]);
        let output = format!("{}", tasks);
        assert!(output.contains("Plano alimentar para Ana"));
        assert!(output.contains("▲ High"));
        assert!(output.contains("/client/usr_1/plan/plan_1"));

        // Test empty collection
        let empty_tasks = RequiredTasks(vec![]);
        let empty_output = format!("{}", empty_tasks);
        assert_eq!(empty_output, "No pending tasks.\n");
    }

    #[test]
    fn test_sorted_orders_by_priority_tier() {
        let tasks = RequiredTasks::sorted(vec![
            create_test_task("Low first", TaskPriority::Low),
            create_test_task("Then high", TaskPriority::High),
            create_test_task("Then medium", TaskPriority::Medium),
        ]);

        assert_eq!(tasks[0].title, "Then high");
        assert_eq!(tasks[1].title, "Then medium");
        assert_eq!(tasks[2].title, "Low first");
    }

    #[test]
    fn test_sorted_is_stable_within_tier() {
        let tasks = RequiredTasks::sorted(vec![
            create_test_task("First medium", TaskPriority::Medium),
            create_test_task("High", TaskPriority::High),
            create_test_task("Second medium", TaskPriority::Medium),
        ]);

        assert_eq!(tasks[0].title, "High");
        assert_eq!(tasks[1].title, "First medium");
        assert_eq!(tasks[2].title, "Second medium");
    }

    #[test]
    fn test_purchase_summaries_display() {
        // Test with purchases
        let summaries = PurchaseSummaries(vec![create_test_summary()]);
        let output = format!("{}", summaries);
        assert!(output.contains("Acompanhamento completo"));
        assert!(output.contains("ID: pur_1"));
        assert!(output.contains("(1/3)"));

        // Test empty collection
        let empty_summaries = PurchaseSummaries(vec![]);
        let empty_output = format!("{}", empty_summaries);
        assert_eq!(empty_output, "No purchases found.\n");

        // Test multiple purchases
        let summary1 = create_test_summary();
        let mut summary2 = create_test_summary();
        summary2.id = "pur_2".to_string();
        summary2.plan_name = "Treino trimestral".to_string();
        let summaries = PurchaseSummaries(vec![summary1, summary2]);
        let output = format!("{}", summaries);
        assert!(output.contains("## Acompanhamento completo"));
        assert!(output.contains("## Treino trimestral"));
        // Verify it doesn't start with a title header
        assert!(!output.starts_with("# "));
    }

    #[test]
    fn test_catalog_entries_display() {
        let entries = CatalogEntries(crate::catalog::entries().to_vec());
        let output = format!("{}", entries);
        assert!(output.contains("Plano alimentar"));
        assert!(output.contains("`diet_plan`"));
        assert!(output.contains("Role: nutritionist"));
        assert!(output.contains("Role: trainer"));

        let empty = CatalogEntries(vec![]);
        assert_eq!(format!("{}", empty), "No catalog features found.\n");
    }
}
