//! Priority and due-date policy for derived tasks.
//!
//! Both public functions consult the same [`FeatureClass`] classification,
//! so a feature can never be urgent under the priority rule while relaxed
//! under the due-date rule:
//!
//! - **InitialContact** (first consultation or assessment): High after 3
//!   days, else Medium; due 3 days after purchase
//! - **PlanCreation** (diet or training plan): High after 5 days, else
//!   Medium; due 5 days after purchase
//! - **FollowUp** (follow-up sessions): Medium after 7 days, else Low; due
//!   14 days after purchase
//! - **Other** (everything else): always Low; due 7 days after purchase
//!
//! A "day" is a fixed 24-hour period on the UTC timeline. Elapsed days are
//! floored, so a purchase dated in the future counts as negative days and
//! lands in the lenient branch of each rule.

use jiff::{SignedDuration, Timestamp};

use crate::models::TaskPriority;

/// Seconds in one fixed 24-hour day.
const SECONDS_PER_DAY: i64 = 86_400;

/// Feature ids that open the coaching relationship.
const INITIAL_CONTACT: [&str; 2] = ["initial_consultation", "initial_assessment"];

/// Feature ids that deliver the personalized plan document.
const PLAN_CREATION: [&str; 2] = ["diet_plan", "training_plan"];

/// Feature ids for recurring follow-up sessions.
const FOLLOW_UP: [&str; 2] = ["follow_up", "follow_up_training"];

/// Urgency class of a catalog feature.
///
/// Membership is listed by hand above and kept in sync with the feature
/// catalog; a sync test fails if a classified id disappears from the
/// catalog.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum FeatureClass {
    /// First consultation or physical assessment
    InitialContact,

    /// Creation of the personalized diet or training plan
    PlanCreation,

    /// Recurring follow-up session
    FollowUp,

    /// Any feature without a dedicated urgency rule
    Other,
}

impl FeatureClass {
    /// Classify a feature id into its urgency class.
    ///
    /// Unknown ids fall into [`FeatureClass::Other`].
    pub fn classify(feature_id: &str) -> Self {
        if INITIAL_CONTACT.contains(&feature_id) {
            FeatureClass::InitialContact
        } else if PLAN_CREATION.contains(&feature_id) {
            FeatureClass::PlanCreation
        } else if FOLLOW_UP.contains(&feature_id) {
            FeatureClass::FollowUp
        } else {
            FeatureClass::Other
        }
    }

    /// Days after purchase at which a task of this class falls due.
    fn due_offset_days(self) -> i64 {
        match self {
            FeatureClass::InitialContact => 3,
            FeatureClass::PlanCreation => 5,
            FeatureClass::FollowUp => 14,
            FeatureClass::Other => 7,
        }
    }
}

/// Determine the priority tier for a pending feature.
///
/// Priority is a pure function of the feature id and the whole days elapsed
/// since the purchase was created; calling it twice with the same inputs
/// always yields the same tier.
///
/// # Arguments
///
/// * `feature_id` - Stable feature identifier
/// * `days_since_purchase` - Whole days elapsed since the purchase
///
/// # Returns
///
/// The priority tier for a task derived from this feature
///
/// # Examples
///
/// ```rust
/// use spotter_core::{models::TaskPriority, policy::determine_task_priority};
///
/// // An initial consultation becomes urgent after 3 days
/// assert_eq!(
///     determine_task_priority("initial_consultation", 5),
///     TaskPriority::High
/// );
/// assert_eq!(
///     determine_task_priority("initial_consultation", 2),
///     TaskPriority::Medium
/// );
/// ```
pub fn determine_task_priority(feature_id: &str, days_since_purchase: i64) -> TaskPriority {
    match FeatureClass::classify(feature_id) {
        FeatureClass::InitialContact => {
            if days_since_purchase > 3 {
                TaskPriority::High
            } else {
                TaskPriority::Medium
            }
        }
        FeatureClass::PlanCreation => {
            if days_since_purchase > 5 {
                TaskPriority::High
            } else {
                TaskPriority::Medium
            }
        }
        FeatureClass::FollowUp => {
            if days_since_purchase > 7 {
                TaskPriority::Medium
            } else {
                TaskPriority::Low
            }
        }
        FeatureClass::Other => TaskPriority::Low,
    }
}

/// Calculate the due date for a pending feature.
///
/// The due date is always the purchase creation date plus the class offset;
/// it does not move as time passes. Addition saturates to the purchase date
/// in the (unreachable in practice) overflow case, so this function is
/// total.
///
/// # Arguments
///
/// * `feature_id` - Stable feature identifier
/// * `purchase_date` - When the purchase was created
///
/// # Returns
///
/// The timestamp the derived task falls due
///
/// # Examples
///
/// ```rust
/// use jiff::Timestamp;
/// use spotter_core::policy::calculate_due_date;
///
/// let purchased = Timestamp::from_second(1640995200).unwrap();
/// let due = calculate_due_date("diet_plan", purchased);
/// assert_eq!(due.as_second() - purchased.as_second(), 5 * 86_400);
/// ```
pub fn calculate_due_date(feature_id: &str, purchase_date: Timestamp) -> Timestamp {
    let offset_days = FeatureClass::classify(feature_id).due_offset_days();
    purchase_date
        .checked_add(SignedDuration::from_hours(24 * offset_days))
        .unwrap_or(purchase_date)
}

/// Whole days elapsed between two timestamps.
///
/// Floors toward negative infinity, so `to` earlier than `from` yields a
/// negative count rather than rounding toward zero.
pub fn days_between(from: Timestamp, to: Timestamp) -> i64 {
    (to.as_second() - from.as_second()).div_euclid(SECONDS_PER_DAY)
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::catalog;

    fn ts(second: i64) -> Timestamp {
        Timestamp::from_second(second).unwrap()
    }

    #[test]
    fn test_classify_initial_contact() {
        assert_eq!(
            FeatureClass::classify("initial_consultation"),
            FeatureClass::InitialContact
        );
        assert_eq!(
            FeatureClass::classify("initial_assessment"),
            FeatureClass::InitialContact
        );
    }

    #[test]
    fn test_classify_plan_creation() {
        assert_eq!(
            FeatureClass::classify("diet_plan"),
            FeatureClass::PlanCreation
        );
        assert_eq!(
            FeatureClass::classify("training_plan"),
            FeatureClass::PlanCreation
        );
    }

    #[test]
    fn test_classify_follow_up() {
        assert_eq!(FeatureClass::classify("follow_up"), FeatureClass::FollowUp);
        assert_eq!(
            FeatureClass::classify("follow_up_training"),
            FeatureClass::FollowUp
        );
    }

    #[test]
    fn test_classify_other() {
        assert_eq!(
            FeatureClass::classify("whatsapp_support"),
            FeatureClass::Other
        );
        assert_eq!(
            FeatureClass::classify("massage_session"),
            FeatureClass::Other
        );
    }

    #[test]
    fn test_classified_ids_exist_in_catalog() {
        // The membership lists above are maintained by hand; fail loudly if
        // they drift from the catalog.
        for id in INITIAL_CONTACT.iter().chain(&PLAN_CREATION).chain(&FOLLOW_UP) {
            assert!(
                catalog::find(id).is_some(),
                "classified feature {id:?} is missing from the catalog"
            );
        }
    }

    #[test]
    fn test_initial_contact_priority_thresholds() {
        assert_eq!(
            determine_task_priority("initial_consultation", 3),
            TaskPriority::Medium
        );
        assert_eq!(
            determine_task_priority("initial_consultation", 4),
            TaskPriority::High
        );
        assert_eq!(
            determine_task_priority("initial_assessment", 0),
            TaskPriority::Medium
        );
    }

    #[test]
    fn test_plan_creation_priority_thresholds() {
        assert_eq!(
            determine_task_priority("diet_plan", 5),
            TaskPriority::Medium
        );
        assert_eq!(determine_task_priority("diet_plan", 6), TaskPriority::High);
        assert_eq!(
            determine_task_priority("training_plan", 6),
            TaskPriority::High
        );
    }

    #[test]
    fn test_follow_up_priority_thresholds() {
        assert_eq!(determine_task_priority("follow_up", 7), TaskPriority::Low);
        assert_eq!(
            determine_task_priority("follow_up", 8),
            TaskPriority::Medium
        );
        assert_eq!(
            determine_task_priority("follow_up_training", 2),
            TaskPriority::Low
        );
    }

    #[test]
    fn test_other_priority_always_low() {
        assert_eq!(
            determine_task_priority("whatsapp_support", 0),
            TaskPriority::Low
        );
        assert_eq!(
            determine_task_priority("whatsapp_support", 100),
            TaskPriority::Low
        );
        assert_eq!(
            determine_task_priority("unknown_feature", 50),
            TaskPriority::Low
        );
    }

    #[test]
    fn test_future_dated_purchase_is_lenient() {
        // Negative elapsed days must never read as urgent
        assert_eq!(
            determine_task_priority("initial_consultation", -1),
            TaskPriority::Medium
        );
        assert_eq!(determine_task_priority("follow_up", -3), TaskPriority::Low);
    }

    #[test]
    fn test_priority_is_idempotent() {
        let first = determine_task_priority("diet_plan", 10);
        let second = determine_task_priority("diet_plan", 10);
        assert_eq!(first, second);
    }

    #[test]
    fn test_due_date_offsets() {
        let purchased = ts(1640995200); // 2022-01-01 00:00:00 UTC

        let cases = [
            ("initial_consultation", 3),
            ("initial_assessment", 3),
            ("diet_plan", 5),
            ("training_plan", 5),
            ("follow_up", 14),
            ("follow_up_training", 14),
            ("whatsapp_support", 7),
            ("unknown_feature", 7),
        ];

        for (feature_id, expected_days) in cases {
            let due = calculate_due_date(feature_id, purchased);
            assert_eq!(
                due.as_second() - purchased.as_second(),
                expected_days * SECONDS_PER_DAY,
                "wrong due offset for {feature_id}"
            );
        }
    }

    #[test]
    fn test_due_date_never_precedes_purchase() {
        let purchased = ts(1640995200);
        for entry in catalog::entries() {
            let due = calculate_due_date(&entry.id, purchased);
            assert!(due >= purchased, "due date precedes purchase for {}", entry.id);
        }
    }

    #[test]
    fn test_days_between_exact_multiples() {
        let from = ts(1640995200);
        assert_eq!(days_between(from, ts(1640995200)), 0);
        assert_eq!(days_between(from, ts(1640995200 + 5 * SECONDS_PER_DAY)), 5);
    }

    #[test]
    fn test_days_between_floors_partial_days() {
        let from = ts(1640995200);
        // One second short of five full days
        let to = ts(1640995200 + 5 * SECONDS_PER_DAY - 1);
        assert_eq!(days_between(from, to), 4);
    }

    #[test]
    fn test_days_between_future_is_negative() {
        let from = ts(1640995200);
        // One hour before the purchase
        let to = ts(1640995200 - 3600);
        assert_eq!(days_between(from, to), -1);
    }
}
