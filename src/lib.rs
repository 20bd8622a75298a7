//! Cryptographically secure random strings and hex tokens.

pub mod charsets;
pub mod config;
pub mod entropy;
pub mod errors;
pub mod generators;
pub mod param;

pub use entropy::{SecureRandomSource, SystemRandom};
pub use errors::RandomError;
pub use generators::{
    Length, generate_string, generate_string_with, generate_token, generate_token_with,
};
