//! Carbon Tracker - a terminal client for a gamified carbon footprint tracker
//!
//! This library exposes modules for use in integration tests.

pub mod activity;
pub mod adapters;
pub mod animation;
pub mod app;
pub mod carousel;
pub mod cli;
pub mod config;
pub mod error;
pub mod logging;
pub mod models;
pub mod state;
pub mod terminal;
pub mod traits;
pub mod ui;
