//! Error handling for CRILAYLA operations
//!
//! This module re-exports the error type used throughout the encoder. Every
//! failure is reported synchronously; a failed call leaves the destination
//! buffer contents unspecified.

pub use crate::common::CrilaylaError;
pub use crate::common::Result;
