//! In-memory stores
//!
//! Two independent accumulators live here:
//! - [`ItemStore`]: catalogue items plus the id counter
//! - [`SubmissionLog`]: contact-form submissions

pub mod items;
pub mod submissions;

pub use items::{ItemStore, FIRST_CREATED_ID};
pub use submissions::SubmissionLog;
