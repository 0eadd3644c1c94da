//! Ferrous Blacklist Infrastructure Layer
pub mod sources;
