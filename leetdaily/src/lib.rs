//! leetdaily library
//!
//! Daily practice problem selection, the per-date record store, and the
//! assistance gateway. The `leetdaily` binary is a thin CLI over this crate.

pub mod app;
pub mod catalog;
pub mod commands;
pub mod config;
pub mod database;
pub mod error;
pub mod locale;
pub mod services;
