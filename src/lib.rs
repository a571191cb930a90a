//! itemdesk - a small item catalogue and contact-form web service
//!
//! itemdesk provides:
//! - A seeded in-memory item catalogue with store-assigned ids
//! - An append-only log of contact-form submissions
//! - A JSON HTTP API, a contact page and a health check

pub mod api;
pub mod config;
pub mod error;
pub mod store;
pub mod types;

pub use error::{Error, Result};
