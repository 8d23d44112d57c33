pub mod config;
pub mod error;
pub mod hashing;
pub mod pipeline;
