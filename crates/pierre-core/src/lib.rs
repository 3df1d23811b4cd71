// ABOUTME: Core types and constants for the Pierre telemetry analytics engine
// ABOUTME: Foundation crate with error handling, telemetry constants, and domain models
//
// SPDX-License-Identifier: MIT OR Apache-2.0
// Copyright (c) 2025 Pierre Fitness Intelligence

#![deny(unsafe_code)]

//! # Pierre Core
//!
//! Foundation crate providing shared types and constants for the Pierre
//! performance telemetry engine. This crate is designed to change infrequently,
//! enabling incremental compilation benefits in the workspace.
//!
//! ## Modules
//!
//! - **errors**: Unified error handling with `AppError`, `ErrorCode`, and `AppResult`
//! - **constants**: Telemetry constants organized by domain (curves, routes, zones)
//! - **models**: Raw streams, combined metrics, power curves, zones, and routes

/// Unified error handling system with standard error codes
pub mod errors;

/// Telemetry constants and default values organized by domain
pub mod constants;

/// Core data models (streams, metrics, power curve, zones, routes, sport types)
pub mod models;
