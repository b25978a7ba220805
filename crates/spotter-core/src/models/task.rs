//! Derived task model.

use jiff::Timestamp;
use serde::{Deserialize, Serialize};

use super::TaskPriority;

/// A pending action derived from an active purchase.
///
/// Tasks are computed fresh on every derivation pass and never persisted;
/// a task has no identity beyond its position in the derived list. On the
/// wire the feature identifier travels under `type` and the remaining
/// fields are camelCase.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
#[serde(rename_all = "camelCase")]
pub struct RequiredTask {
    /// Feature identifier this task was derived from
    #[serde(rename = "type")]
    pub kind: String,

    /// Viewer-facing title naming the counterparty
    pub title: String,

    /// Catalog description of the feature
    pub description: String,

    /// Urgency tier
    pub priority: TaskPriority,

    /// When this task should be done by
    pub due_date: Timestamp,

    /// Application route for acting on the task
    pub action_link: String,
}
