//! Infrastructure adapters. Implement ports.
//!
//! HTTP challenge API and the terminal UI. Map errors to DomainError.

pub mod http;
pub mod ui;
