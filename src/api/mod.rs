//! HTTP API Client
//!
//! Functions for communicating with the clinician REST endpoints.

pub mod client;

pub use client::{
    api_base, fetch_measurements, fetch_patients, fetch_threshold, set_api_base,
    update_threshold, ApiError,
};
