//! Access to the upstream schema registry.

pub mod avro;
pub mod client;
pub mod error;
pub mod service;

pub use error::RegistryError;
