//! entix - Collections and entities over a journal document store
//!
//! A thin client toolkit that presents an external journal/entry/permission
//! store through a structured entity vocabulary: entities map to tagged
//! entries, collections map to journals, and permission strings are
//! translated between the two namings.

pub mod application;
pub mod cli;
pub mod domain;
pub mod error;
pub mod infrastructure;

pub use error::EntixError;
