//! In-memory activity registry with per-activity rosters.

mod activity;

use std::sync::Arc;

use indexmap::IndexMap;
use parking_lot::RwLock;
use thiserror::Error;

pub use activity::{Activity, Enrollment};

/// Point-in-time copy of every activity, in catalog order.
pub type Catalog = IndexMap<String, Activity>;

/// Reasons an enroll or unenroll is refused. None of them change the store.
///
/// The display strings are the messages shown to students.
#[derive(Error, Debug, Clone, PartialEq, Eq)]
pub enum EnrollmentError {
    #[error("Activity not found")]
    NotFound { activity: String },

    #[error("Student is already signed up")]
    AlreadyEnrolled { activity: String, participant: String },

    #[error("Student is not signed up for this activity")]
    NotEnrolled { activity: String, participant: String },
}

/// Shared registry of activities and their rosters.
///
/// The set of activities is fixed at construction, so only the rosters are
/// locked; each activity has its own lock and writers to different
/// activities never contend. Clones share the same data.
#[derive(Clone)]
pub struct ActivityStore {
    activities: Arc<IndexMap<String, RwLock<Activity>>>,
}

impl ActivityStore {
    /// Build a store from `(name, activity)` pairs. A repeated name keeps the
    /// first definition.
    pub fn new<I, S>(activities: I) -> Self
    where
        I: IntoIterator<Item = (S, Activity)>,
        S: Into<String>,
    {
        let mut map = IndexMap::new();
        for (name, activity) in activities {
            map.entry(name.into()).or_insert_with(|| RwLock::new(activity));
        }
        Self {
            activities: Arc::new(map),
        }
    }

    /// Build a store from the school's seed catalog
    pub fn seeded() -> Self {
        Self::new(crate::seed::activities())
    }

    /// Number of activities in the catalog
    pub fn len(&self) -> usize {
        self.activities.len()
    }

    pub fn is_empty(&self) -> bool {
        self.activities.is_empty()
    }

    /// Snapshot every activity. Each roster is copied under its read lock.
    pub fn list_activities(&self) -> Catalog {
        self.activities
            .iter()
            .map(|(name, activity)| (name.clone(), activity.read().clone()))
            .collect()
    }

    /// Snapshot a single activity
    pub fn activity(&self, name: &str) -> Result<Activity, EnrollmentError> {
        Ok(self.slot(name)?.read().clone())
    }

    /// Add `participant` to the end of the activity's roster.
    ///
    /// Capacity is advisory and not checked here.
    pub fn enroll(&self, name: &str, participant: &str) -> Result<Enrollment, EnrollmentError> {
        let mut activity = self.slot(name)?.write();
        if activity.is_enrolled(participant) {
            return Err(EnrollmentError::AlreadyEnrolled {
                activity: name.to_string(),
                participant: participant.to_string(),
            });
        }
        activity.participants.push(participant.to_string());
        Ok(Enrollment::new(name, participant))
    }

    /// Remove `participant` from the activity's roster.
    ///
    /// Removing someone who is not enrolled is an error, including a second
    /// removal of the same participant.
    pub fn unenroll(&self, name: &str, participant: &str) -> Result<Enrollment, EnrollmentError> {
        let mut activity = self.slot(name)?.write();
        let Some(position) = activity.participants.iter().position(|p| p == participant) else {
            return Err(EnrollmentError::NotEnrolled {
                activity: name.to_string(),
                participant: participant.to_string(),
            });
        };
        activity.participants.remove(position);
        Ok(Enrollment::new(name, participant))
    }

    fn slot(&self, name: &str) -> Result<&RwLock<Activity>, EnrollmentError> {
        self.activities
            .get(name)
            .ok_or_else(|| EnrollmentError::NotFound {
                activity: name.to_string(),
            })
    }
}
