//! Core abstractions

pub mod config;
pub mod log;
pub mod requester;

// Re-export main types for cleaner imports
pub use requester::Requester;
