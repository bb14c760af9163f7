//! Integration tests for Layer 0: Foundation
//!
//! Tests for core types: Value, ObjectId, Error, persistent
//! collections, and observers.

mod collections;
mod errors;
mod ids;
mod observers;
