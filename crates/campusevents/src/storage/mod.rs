//! Storage backends for the gateway.

mod rest;

pub use rest::RestRepository;
