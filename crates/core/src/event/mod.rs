mod error;
mod list;
mod operations;
mod requests;
mod sample;
mod types;

pub use error::EventError;
pub use list::EventList;
pub use operations::{filter_events, EventFilter};
pub use requests::{CreateEventRequest, DEFAULT_EVENT_IMAGE};
pub use sample::sample_events;
pub use types::{Event, EventType};
