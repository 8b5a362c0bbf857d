//! Typed async client for the kenall postal code, address, corporate number
//! and holiday service, plus the `kenall` command line front end.

pub mod api;
pub mod cli;
pub mod config;
pub mod error;
pub mod output;

pub use api::{ClientConfig, KenallApi, KenallClient};
pub use error::{ErrorKind, KenallError, Result};

#[cfg(test)]
mod error_test;
