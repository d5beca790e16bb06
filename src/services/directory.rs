// SPDX-License-Identifier: MIT
// Copyright 2026 Roland Dreier <roland@rolandd.dev>

//! In-memory activity directory with signup/unregister bookkeeping.

use crate::error::{AppError, Result};
use crate::models::{Activity, Directory};
use dashmap::DashMap;
use std::fs;
use std::path::Path;

/// Owned store of activities, shared through `AppState`.
///
/// Each mutation holds the activity's map entry for the whole
/// check-then-modify sequence, so concurrent requests against the same
/// activity are serialized.
#[derive(Debug, Default)]
pub struct ActivityDirectory {
    activities: DashMap<String, Activity>,
    /// Activity names in seed order; the set of names never changes
    /// after construction.
    order: Vec<String>,
    enforce_capacity: bool,
}

impl ActivityDirectory {
    pub fn new(seed: Directory, enforce_capacity: bool) -> Self {
        let order = seed.names().map(str::to_string).collect();
        Self {
            activities: seed.into_iter().collect(),
            order,
            enforce_capacity,
        }
    }

    /// Load a directory from a JSON file shaped like the `/activities` body.
    pub fn load_from_file<P: AsRef<Path>>(
        path: P,
        enforce_capacity: bool,
    ) -> std::result::Result<Self, SeedError> {
        let json_data =
            fs::read_to_string(path.as_ref()).map_err(|e| SeedError::Io(e.to_string()))?;
        Self::load_from_json(&json_data, enforce_capacity)
    }

    /// Load a directory from a JSON string.
    pub fn load_from_json(
        json_data: &str,
        enforce_capacity: bool,
    ) -> std::result::Result<Self, SeedError> {
        let seed: Directory =
            serde_json::from_str(json_data).map_err(|e| SeedError::Parse(e.to_string()))?;

        for (name, activity) in seed.iter() {
            if let Some(email) = activity.duplicate_participant() {
                return Err(SeedError::DuplicateParticipant {
                    activity: name.clone(),
                    email: email.to_string(),
                });
            }
        }

        tracing::info!(count = seed.len(), "Loaded activities");
        Ok(Self::new(seed, enforce_capacity))
    }

    /// Snapshot of every activity, keyed by name, in seed order.
    pub fn list(&self) -> Directory {
        self.order
            .iter()
            .filter_map(|name| {
                self.activities
                    .get(name)
                    .map(|entry| (name.clone(), entry.value().clone()))
            })
            .collect()
    }

    pub fn get(&self, name: &str) -> Option<Activity> {
        self.activities.get(name).map(|entry| entry.value().clone())
    }

    pub fn len(&self) -> usize {
        self.activities.len()
    }

    pub fn is_empty(&self) -> bool {
        self.activities.is_empty()
    }

    pub fn enforces_capacity(&self) -> bool {
        self.enforce_capacity
    }

    /// Add `email` to the activity's roster.
    pub fn signup(&self, name: &str, email: &str) -> Result<String> {
        let mut activity = self
            .activities
            .get_mut(name)
            .ok_or_else(AppError::activity_not_found)?;

        if activity.has_participant(email) {
            tracing::debug!(activity = name, email, "Duplicate signup rejected");
            return Err(AppError::Conflict(AppError::ALREADY_SIGNED_UP.to_string()));
        }

        if self.enforce_capacity && activity.is_full() {
            tracing::debug!(
                activity = name,
                email,
                max_participants = activity.max_participants,
                "Signup rejected, activity full"
            );
            return Err(AppError::Conflict(AppError::ACTIVITY_FULL.to_string()));
        }

        activity.participants.push(email.to_string());
        tracing::info!(
            activity = name,
            email,
            spots_left = activity.spots_left(),
            "Participant signed up"
        );

        Ok(format!("Signed up {} for {}", email, name))
    }

    /// Remove `email` from the activity's roster.
    pub fn unregister(&self, name: &str, email: &str) -> Result<String> {
        let mut activity = self
            .activities
            .get_mut(name)
            .ok_or_else(AppError::activity_not_found)?;

        let Some(position) = activity.participants.iter().position(|p| p == email) else {
            tracing::debug!(activity = name, email, "Unregister of non-participant rejected");
            return Err(AppError::Conflict(AppError::NOT_REGISTERED.to_string()));
        };

        activity.participants.remove(position);
        tracing::info!(activity = name, email, "Participant unregistered");

        Ok(format!("Unregistered {} from {}", email, name))
    }
}

/// Errors loading a seed file.
#[derive(Debug, thiserror::Error)]
pub enum SeedError {
    #[error("IO error: {0}")]
    Io(String),
    #[error("Parse error: {0}")]
    Parse(String),
    #[error("Duplicate participant {email} in {activity}")]
    DuplicateParticipant { activity: String, email: String },
}
