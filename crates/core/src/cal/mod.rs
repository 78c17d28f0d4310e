//! Calendar-feed service types and URL helpers.

mod types;
mod urls;

pub use types::{CreatedFeed, Event, EventStatus, Feed};
pub use urls::{subscribe_url, webcal_url};
