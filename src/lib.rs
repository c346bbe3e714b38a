//! Shades - color families and random shades
//!
//! HTTP service, swatch page and CLI around the `shade-family` crate.
//! This library exposes modules for integration testing.

pub mod api;
pub mod error;
pub mod models;
pub mod server;
pub mod services;
