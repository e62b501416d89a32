//! Common test utilities for API integration tests
//!
//! This module provides shared test infrastructure for integration tests,
//! including an in-memory chat store and schema helpers.

#![allow(dead_code)]

pub mod fixtures;

pub use fixtures::*;
