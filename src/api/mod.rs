//! API Layer
//!
//! HTTP client for the SubTrack REST API.

pub mod client;

pub use client::*;
