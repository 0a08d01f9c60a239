//! webhook-submit: acquire a webhook/token pair, then submit an SQL solution with it.
//! Hexagonal Architecture.

pub mod adapters;
pub mod domain;
pub mod ports;
pub mod shared;
pub mod usecases;
