// SPDX-License-Identifier: MIT
// Copyright 2026 Roland Dreier <roland@rolandd.dev>

//! In-memory activity directory.
//!
//! The whole mapping sits behind one async read/write lock. Writes hold the
//! lock across the membership check and the mutation, so two concurrent
//! signups of the same email can never both succeed.

use crate::db::seed::seed_activities;
use crate::error::DirectoryError;
use crate::models::{Activities, Activity};
use std::sync::Arc;
use tokio::sync::RwLock;

/// Shared handle to the activity directory. Clones share state.
#[derive(Clone, Default)]
pub struct ActivityDirectory {
    activities: Arc<RwLock<Activities>>,
}

impl ActivityDirectory {
    /// Create a directory holding the given activities.
    pub fn new(activities: Activities) -> Self {
        Self {
            activities: Arc::new(RwLock::new(activities)),
        }
    }

    /// Create a directory holding the startup seed set.
    pub fn seeded() -> Self {
        Self::new(seed_activities())
    }

    /// Snapshot of every activity.
    pub async fn list(&self) -> Activities {
        self.activities.read().await.clone()
    }

    /// Snapshot of one activity.
    pub async fn get(&self, name: &str) -> Option<Activity> {
        self.activities.read().await.get(name).cloned()
    }

    pub async fn len(&self) -> usize {
        self.activities.read().await.len()
    }

    pub async fn is_empty(&self) -> bool {
        self.activities.read().await.is_empty()
    }

    /// Append `email` to the activity's participants.
    ///
    /// Returns the updated record. Capacity is not checked.
    pub async fn signup(&self, name: &str, email: &str) -> Result<Activity, DirectoryError> {
        let mut activities = self.activities.write().await;
        let activity = activities
            .get_mut(name)
            .ok_or(DirectoryError::ActivityNotFound)?;

        if activity.is_registered(email) {
            return Err(DirectoryError::AlreadySignedUp(email.to_string()));
        }

        activity.participants.push(email.to_string());
        Ok(activity.clone())
    }

    /// Remove `email` from the activity's participants.
    ///
    /// Returns the updated record.
    pub async fn unregister(&self, name: &str, email: &str) -> Result<Activity, DirectoryError> {
        let mut activities = self.activities.write().await;
        let activity = activities
            .get_mut(name)
            .ok_or(DirectoryError::ActivityNotFound)?;

        let position = activity
            .participants
            .iter()
            .position(|p| p == email)
            .ok_or_else(|| DirectoryError::NotRegistered(email.to_string()))?;

        activity.participants.remove(position);
        Ok(activity.clone())
    }
}
