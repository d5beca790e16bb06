// SPDX-License-Identifier: MIT
// Copyright 2026 Roland Dreier <roland@kernel.org>

//! Extracurricular activity model for storage and API.

use serde::de::{Deserializer, MapAccess, Visitor};
use serde::ser::{SerializeMap, Serializer};
use serde::{Deserialize, Serialize};
use std::fmt;
use std::ops::Index;
#[cfg(feature = "binding-generation")]
use ts_rs::TS;

/// One extracurricular activity and its roster.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[cfg_attr(feature = "binding-generation", derive(TS))]
#[cfg_attr(
    feature = "binding-generation",
    ts(export, export_to = "static/generated/")
)]
pub struct Activity {
    /// Short description shown on the landing page
    pub description: String,
    /// Human-readable meeting schedule
    pub schedule: String,
    /// Roster capacity
    pub max_participants: u32,
    /// Participant emails in signup order (unique)
    #[serde(default)]
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

    pub fn with_participants(mut self, participants: &[&str]) -> Self {
        self.participants = participants.iter().map(|p| p.to_string()).collect();
        self
    }

    pub fn has_participant(&self, email: &str) -> bool {
        self.participants.iter().any(|p| p == email)
    }

    pub fn is_full(&self) -> bool {
        self.participants.len() >= self.max_participants as usize
    }

    /// Remaining open spots (0 when at or over capacity).
    pub fn spots_left(&self) -> u32 {
        (self.max_participants as usize).saturating_sub(self.participants.len()) as u32
    }

    /// First email that appears more than once, if any.
    pub fn duplicate_participant(&self) -> Option<&str> {
        self.participants
            .iter()
            .enumerate()
            .find(|(i, p)| self.participants[..*i].contains(p))
            .map(|(_, p)| p.as_str())
    }
}

/// Full activity directory keyed by activity name.
///
/// Entries keep insertion order and serialize as a JSON object in that
/// order, so listings match the order activities were seeded in.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct Directory {
    entries: Vec<(String, Activity)>,
}

impl Directory {
    pub fn new() -> Self {
        Self::default()
    }

    /// Insert or replace an activity. A replaced entry keeps its position.
    pub fn insert(&mut self, name: String, activity: Activity) -> Option<Activity> {
        match self.entries.iter_mut().find(|(n, _)| *n == name) {
            Some((_, existing)) => Some(std::mem::replace(existing, activity)),
            None => {
                self.entries.push((name, activity));
                None
            }
        }
    }

    pub fn get(&self, name: &str) -> Option<&Activity> {
        self.entries
            .iter()
            .find(|(n, _)| n == name)
            .map(|(_, activity)| activity)
    }

    pub fn contains_key(&self, name: &str) -> bool {
        self.get(name).is_some()
    }

    pub fn len(&self) -> usize {
        self.entries.len()
    }

    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }

    pub fn names(&self) -> impl Iterator<Item = &str> {
        self.entries.iter().map(|(name, _)| name.as_str())
    }

    pub fn values(&self) -> impl Iterator<Item = &Activity> {
        self.entries.iter().map(|(_, activity)| activity)
    }

    pub fn iter(&self) -> impl Iterator<Item = (&String, &Activity)> {
        self.entries.iter().map(|(name, activity)| (name, activity))
    }
}

impl Index<&str> for Directory {
    type Output = Activity;

    fn index(&self, name: &str) -> &Activity {
        self.get(name)
            .unwrap_or_else(|| panic!("no activity named {:?}", name))
    }
}

impl IntoIterator for Directory {
    type Item = (String, Activity);
    type IntoIter = std::vec::IntoIter<(String, Activity)>;

    fn into_iter(self) -> Self::IntoIter {
        self.entries.into_iter()
    }
}

impl FromIterator<(String, Activity)> for Directory {
    fn from_iter<I: IntoIterator<Item = (String, Activity)>>(iter: I) -> Self {
        let mut directory = Directory::new();
        for (name, activity) in iter {
            directory.insert(name, activity);
        }
        directory
    }
}

impl Serialize for Directory {
    fn serialize<S: Serializer>(&self, serializer: S) -> Result<S::Ok, S::Error> {
        let mut map = serializer.serialize_map(Some(self.entries.len()))?;
        for (name, activity) in &self.entries {
            map.serialize_entry(name, activity)?;
        }
        map.end()
    }
}

impl<'de> Deserialize<'de> for Directory {
    fn deserialize<D: Deserializer<'de>>(deserializer: D) -> Result<Self, D::Error> {
        struct DirectoryVisitor;

        impl<'de> Visitor<'de> for DirectoryVisitor {
            type Value = Directory;

            fn expecting(&self, f: &mut fmt::Formatter) -> fmt::Result {
                f.write_str("a map of activity name to activity")
            }

            fn visit_map<M: MapAccess<'de>>(self, mut access: M) -> Result<Directory, M::Error> {
                let mut directory = Directory::new();
                while let Some((name, activity)) = access.next_entry::<String, Activity>()? {
                    if directory.contains_key(&name) {
                        return Err(serde::de::Error::custom(format!(
                            "duplicate activity {:?}",
                            name
                        )));
                    }
                    directory.insert(name, activity);
                }
                Ok(directory)
            }
        }

        deserializer.deserialize_map(DirectoryVisitor)
    }
}

/// Activities the school starts every term with.
pub fn seed_activities() -> Directory {
    let mut directory = Directory::new();

    directory.insert(
        "Chess Club".to_string(),
        Activity::new(
            "Learn strategies and compete in chess tournaments",
            "Fridays, 3:30 PM - 5:00 PM",
            12,
        )
        .with_participants(&["michael@mergington.edu", "daniel@mergington.edu"]),
    );
    directory.insert(
        "Programming Class".to_string(),
        Activity::new(
            "Learn programming fundamentals and build software projects",
            "Tuesdays and Thursdays, 3:30 PM - 4:30 PM",
            20,
        )
        .with_participants(&["emma@mergington.edu", "sophia@mergington.edu"]),
    );
    directory.insert(
        "Gym Class".to_string(),
        Activity::new(
            "Physical education and sports activities",
            "Mondays, Wednesdays, Fridays, 2:00 PM - 3:00 PM",
            30,
        )
        .with_participants(&["john@mergington.edu", "olivia@mergington.edu"]),
    );
    directory.insert(
        "Basketball Team".to_string(),
        Activity::new(
            "Competitive basketball training and matches",
            "Mondays and Wednesdays, 4:00 PM - 5:30 PM",
            15,
        )
        .with_participants(&["alex@mergington.edu"]),
    );
    directory.insert(
        "Tennis Club".to_string(),
        Activity::new(
            "Tennis lessons and friendly competitions",
            "Saturdays, 10:00 AM - 12:00 PM",
            8,
        ),
    );
    directory.insert(
        "Art Club".to_string(),
        Activity::new(
            "Explore painting, drawing, and sculpture",
            "Tuesdays, 3:30 PM - 5:00 PM",
            18,
        )
        .with_participants(&["maya@mergington.edu", "lucas@mergington.edu"]),
    );
    directory.insert(
        "Drama Club".to_string(),
        Activity::new(
            "Theater performances and acting workshops",
            "Thursdays, 4:00 PM - 6:00 PM",
            25,
        )
        .with_participants(&["isabella@mergington.edu"]),
    );
    directory.insert(
        "Debate Team".to_string(),
        Activity::new(
            "Develop public speaking and argumentation skills",
            "Wednesdays, 3:30 PM - 5:00 PM",
            12,
        )
        .with_participants(&["ryan@mergington.edu", "sarah@mergington.edu"]),
    );
    directory.insert(
        "Science Club".to_string(),
        Activity::new(
            "Hands-on experiments and scientific exploration",
            "Fridays, 4:00 PM - 5:30 PM",
            20,
        )
        .with_participants(&["james@mergington.edu"]),
    );

    directory
}
