// SPDX-License-Identifier: MIT
// Copyright 2026 Roland Dreier <roland@kernel.org>

//! Extracurricular activity model for storage and API.

use indexmap::IndexMap;
use serde::{Deserialize, Serialize};

/// Directory contents keyed by activity name, in seed order.
pub type Activities = IndexMap<String, Activity>;

/// One activity record.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Activity {
    /// Free-text description shown on the activity card
    pub description: String,
    /// Free-text meeting schedule
    pub schedule: String,
    /// Declared capacity (informational, signups past it are accepted)
    pub max_participants: u32,
    /// Enrolled participant emails, in signup order
    pub participants: Vec<String>,
}

impl Activity {
    pub fn new(description: &str, schedule: &str, max_participants: u32) -> Self {
        Self {
            description: description.to_string(),
            schedule: schedule.to_string(),
            max_participants,
            participants: Vec::new(),
        }
    }

    /// Builder-style helper for seeding participants.
    pub fn with_participants(mut self, emails: &[&str]) -> Self {
        self.participants = emails.iter().map(|e| e.to_string()).collect();
        self
    }

    pub fn is_registered(&self, email: &str) -> bool {
        self.participants.iter().any(|p| p == email)
    }

    /// Seats left before the declared capacity; zero once over it.
    pub fn spots_left(&self) -> u32 {
        let taken = u32::try_from(self.participants.len()).unwrap_or(u32::MAX);
        self.max_participants.saturating_sub(taken)
    }
}

/// Confirmation body returned by signup and unregister.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct MessageResponse {
    pub message: String,
}
