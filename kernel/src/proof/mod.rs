//! Proof module: canonical JSON and domain-separated content hashing.
//!
//! Used to fingerprint graphs, colorings, and run reports so two runs can be
//! compared byte-for-byte. Depends on nothing else in the kernel.

pub mod canon;
pub mod hash;
pub mod hash_domain;
