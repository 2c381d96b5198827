//! campusevents_core - Domain layer for the CampusEvents directory.
//!
//! Pure types and operations shared between the API gateway and the CLI
//! client: the event data model, the filter/search engine, the calendar
//! month-grid projection, and the repository abstraction over the remote
//! event collection.

pub mod calendar;
pub mod event;
pub mod storage;
pub mod view;
