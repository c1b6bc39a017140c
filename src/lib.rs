// SPDX-License-Identifier: MIT
// Copyright 2026 Roland Dreier <roland@kernel.org>

//! Mergington Activities: extracurricular signup service
//!
//! This crate provides the backend API for listing school activities and
//! signing students up for them or removing them by email.

pub mod config;
pub mod db;
pub mod error;
pub mod middleware;
pub mod models;
pub mod routes;
pub mod services;

use config::Config;
use db::ActivityDirectory;
use services::SignupService;

/// Shared application state.
pub struct AppState {
    pub config: Config,
    pub signup_service: SignupService,
}

impl AppState {
    pub fn new(config: Config, directory: ActivityDirectory) -> Self {
        Self {
            config,
            signup_service: SignupService::new(directory),
        }
    }
}
