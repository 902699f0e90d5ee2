//! Application use cases. Orchestrate domain logic via ports.

pub mod digest_service;

pub use digest_service::{Digest, DigestPorts, DigestService, assemble_report};
