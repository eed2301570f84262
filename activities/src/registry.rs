use std::collections::BTreeMap;

use thiserror::Error;

use crate::Activity;

#[derive(Debug, Error, PartialEq, Eq)]
pub enum RegistryError {
    #[error("Activity not found")]
    ActivityNotFound,
    #[error("{email} is already signed up for {activity}")]
    AlreadySignedUp { activity: String, email: String },
    #[error("{email} is not registered for {activity}")]
    NotRegistered { activity: String, email: String },
}

/// In-memory roster of all activities, keyed by name. Lives for the process
/// lifetime only; every restart starts over from the seed catalog.
#[derive(Debug, Clone, Default)]
pub struct ActivityRegistry {
    activities: BTreeMap<String, Activity>,
}

impl ActivityRegistry {
    pub fn new() -> Self {
        Self::default()
    }

    /// The fixed catalog the school starts each term with.
    pub fn with_defaults() -> Self {
        let mut registry = Self::new();
        registry.insert(
            "Chess Club",
            Activity::new(
                "Learn strategies and compete in chess tournaments",
                "Fridays, 3:30 PM - 5:00 PM",
                12,
            )
            .with_participants(["michael@mergington.edu", "daniel@mergington.edu"]),
        );
        registry.insert(
            "Programming Class",
            Activity::new(
                "Learn programming fundamentals and build software projects",
                "Tuesdays and Thursdays, 3:30 PM - 4:30 PM",
                20,
            )
            .with_participants(["emma@mergington.edu", "sophia@mergington.edu"]),
        );
        registry.insert(
            "Gym Class",
            Activity::new(
                "Physical education and sports activities",
                "Mondays, Wednesdays, Fridays, 2:00 PM - 3:00 PM",
                30,
            )
            .with_participants(["john@mergington.edu", "olivia@mergington.edu"]),
        );
        registry
    }

    pub fn insert(&mut self, name: impl Into<String>, activity: Activity) {
        self.activities.insert(name.into(), activity);
    }

    pub fn list(&self) -> &BTreeMap<String, Activity> {
        &self.activities
    }

    /// Adds `email` to the activity's roster. `max_participants` is advisory
    /// and never enforced here.
    pub fn signup(&mut self, activity_name: &str, email: &str) -> Result<(), RegistryError> {
        let activity = self
            .activities
            .get_mut(activity_name)
            .ok_or(RegistryError::ActivityNotFound)?;

        if activity.is_registered(email) {
            return Err(RegistryError::AlreadySignedUp {
                activity: activity_name.to_owned(),
                email: email.to_owned(),
            });
        }

        activity.participants.push(email.to_owned());
        tracing::info!("Signed up {} for {}", email, activity_name);

        Ok(())
    }

    /// Removes `email` from the activity's roster.
    pub fn unregister(&mut self, activity_name: &str, email: &str) -> Result<(), RegistryError> {
        let activity = self
            .activities
            .get_mut(activity_name)
            .ok_or(RegistryError::ActivityNotFound)?;

        let Some(position) = activity.participants.iter().position(|p| p == email) else {
            return Err(RegistryError::NotRegistered {
                activity: activity_name.to_owned(),
                email: email.to_owned(),
            });
        };

        activity.participants.remove(position);
        tracing::info!("Unregistered {} from {}", email, activity_name);

        Ok(())
    }
}
