//! Spacemarks — bookmark management backend with local-to-cloud migration.
//!
//! This library crate exposes all modules for use by the binaries and
//! integration tests.

pub mod app;
pub mod database;
pub mod managers;
pub mod rpc_handler;
pub mod services;
pub mod storage;
pub mod types;
