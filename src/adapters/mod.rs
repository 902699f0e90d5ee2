//! Infrastructure adapters. Implement outbound ports.
//!
//! HTTP sources, flag lookup, filesystem. Map errors to DigestError.

pub mod flags;
pub mod persistence;
pub mod sources;
