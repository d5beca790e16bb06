// SPDX-License-Identifier: MIT
// Copyright 2026 Roland Dreier <roland@kernel.org>

//! Mergington Activities: extracurricular signup API
//!
//! This crate provides the backend API for listing Mergington High School
//! activities and registering or unregistering students by email.

pub mod config;
pub mod error;
pub mod middleware;
pub mod models;
pub mod routes;
pub mod services;

use config::Config;
use services::ActivityDirectory;

/// Shared application state.
pub struct AppState {
    pub config: Config,
    pub directory: ActivityDirectory,
}

impl AppState {
    /// Build state from config, seeding the directory from `seed_path` when
    /// set and from the built-in activities otherwise.
    pub fn from_config(config: Config) -> Result<Self, services::SeedError> {
        let directory = match &config.seed_path {
            Some(path) => ActivityDirectory::load_from_file(path, config.enforce_capacity)?,
            None => ActivityDirectory::new(models::seed_activities(), config.enforce_capacity),
        };

        Ok(Self { config, directory })
    }
}
