//! Core types for the Wargrid map engine.
//!
//! This crate provides:
//! - [`Value`] - Generic structured values used for map serialization
//! - [`ObjectId`] / [`IdSequence`] - Sequential per-map object identity
//! - [`Error`] - The error taxonomy shared by all layers
//! - [`Observers`] - A generic subscribe/notify primitive
//! - Persistent collections ([`WgVec`], [`WgMap`])

#![warn(missing_docs)]
#![warn(clippy::all)]
#![warn(clippy::pedantic)]

mod collections;
mod error;
mod id;
mod observe;
mod value;

pub use collections::{WgMap, WgVec};
pub use error::{Error, ErrorCategory, ErrorKind, Result};
pub use id::{IdSequence, ObjectId};
pub use observe::{Observers, SubscriptionId};
pub use value::Value;
