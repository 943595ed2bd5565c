//! HTTP client for the external evaluation backend

pub mod client;

pub use client::BackendClient;
