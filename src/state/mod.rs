//! State Management
//!
//! Global reactive state shared across pages and components.

pub mod global;

pub use global::{provide_global_state, GlobalState, DEFAULT_ERROR_MESSAGE, DEFAULT_SUCCESS_MESSAGE};
