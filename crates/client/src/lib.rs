//! campusevents_client - CLI client for the CampusEvents API.

pub mod admin;
pub mod cli;
pub mod client;
pub mod directory;
pub mod output;

pub use admin::{AdminForm, SubmitOutcome, SubmitStatus};
pub use client::EventsClient;
pub use directory::{Directory, LoadOutcome};
