//! Shared API types
//!
//! Wire format for the evaluation backend and the dashboard's own API.

pub mod types;
