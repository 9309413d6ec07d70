//! Business logic services
//!
//! Assemble endpoint responses from provider calls.

pub mod stock_service;
