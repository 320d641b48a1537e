use serde::{Deserialize, Serialize};

/// An extracurricular offering and its current roster.
///
/// The activity's name is not stored here; it is the key the store files the
/// record under.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Activity {
    pub description: String,
    /// Free-form day and time window, e.g. "Fridays, 3:30 PM - 5:00 PM".
    pub schedule: String,
    /// Advisory capacity. Enrollment does not check it.
    pub max_participants: u32,
    /// Enrolled participant identifiers, oldest first.
    pub participants: Vec<String>,
}

impl Activity {
    pub fn new(
        description: impl Into<String>,
        schedule: impl Into<String>,
        max_participants: u32,
    ) -> Self {
        Self {
            description: description.into(),
            schedule: schedule.into(),
            max_participants,
            participants: Vec::new(),
        }
    }

    /// Seed the roster with already-enrolled participants
    pub fn with_participants<I, S>(mut self, participants: I) -> Self
    where
        I: IntoIterator<Item = S>,
        S: Into<String>,
    {
        for participant in participants {
            let participant = participant.into();
            if !self.is_enrolled(&participant) {
                self.participants.push(participant);
            }
        }
        self
    }

    /// Check whether the participant is on the roster
    pub fn is_enrolled(&self, participant: &str) -> bool {
        self.participants.iter().any(|p| p == participant)
    }
}

/// Confirmation returned by a successful enroll or unenroll.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Enrollment {
    pub activity: String,
    pub participant: String,
}

impl Enrollment {
    pub(crate) fn new(activity: &str, participant: &str) -> Self {
        Self {
            activity: activity.to_string(),
            participant: participant.to_string(),
        }
    }
}
