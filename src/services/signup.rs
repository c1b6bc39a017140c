// SPDX-License-Identifier: MIT
// Copyright 2026 Roland Dreier <roland@rolandd.dev>

//! Signup and unregister workflow on top of the activity directory.

use crate::db::ActivityDirectory;
use crate::error::DirectoryError;
use crate::models::Activities;

/// Service for enrolling and removing participants.
#[derive(Clone, Default)]
pub struct SignupService {
    directory: ActivityDirectory,
}

impl SignupService {
    pub fn new(directory: ActivityDirectory) -> Self {
        Self { directory }
    }

    pub fn directory(&self) -> &ActivityDirectory {
        &self.directory
    }

    /// All activities with their current participants.
    pub async fn list_activities(&self) -> Activities {
        self.directory.list().await
    }

    /// Sign `email` up for `activity_name`, returning a confirmation message.
    pub async fn signup(&self, activity_name: &str, email: &str) -> Result<String, DirectoryError> {
        match self.directory.signup(activity_name, email).await {
            Ok(activity) => {
                tracing::info!(
                    activity = activity_name,
                    email,
                    participants = activity.participants.len(),
                    "Participant signed up"
                );
                if activity.spots_left() == 0 {
                    tracing::warn!(
                        activity = activity_name,
                        max_participants = activity.max_participants,
                        participants = activity.participants.len(),
                        "Activity at or over declared capacity"
                    );
                }
                Ok(format!("Signed up {email} for {activity_name}"))
            }
            Err(err) => {
                tracing::debug!(
                    activity = activity_name,
                    email,
                    error = %err,
                    "Signup rejected"
                );
                Err(err)
            }
        }
    }

    /// Remove `email` from `activity_name`, returning a confirmation message.
    pub async fn unregister(
        &self,
        activity_name: &str,
        email: &str,
    ) -> Result<String, DirectoryError> {
        match self.directory.unregister(activity_name, email).await {
            Ok(activity) => {
                tracing::info!(
                    activity = activity_name,
                    email,
                    participants = activity.participants.len(),
                    "Participant unregistered"
                );
                Ok(format!("Unregistered {email} from {activity_name}"))
            }
            Err(err) => {
                tracing::debug!(
                    activity = activity_name,
                    email,
                    error = %err,
                    "Unregister rejected"
                );
                Err(err)
            }
        }
    }
}
