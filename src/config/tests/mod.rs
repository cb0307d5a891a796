//! Unit tests for configuration loading and precedence.
//!
//! Tests are organised into modules by functional area:
//! - `helpers`: layer builders
//! - `precedence`: Layer precedence tests
//! - `operation_mode`: Operation mode determination tests
//! - `field_resolution`: URL, credential, filter, and sort resolution tests
//! - `timeout_loading`: `timeout_secs` loading tests

mod field_resolution;
mod helpers;
mod timeout_loading;
