//! Shift Compliance Engine
//!
//! This crate reconstructs per-employee shift timelines from timecard rows and
//! flags labor-compliance patterns in them. See [`analysis`] for the detectors
//! and [`api`] for the JSON adapter.

#![warn(missing_docs)]

pub mod analysis;
pub mod api;
pub mod config;
pub mod error;
pub mod models;
