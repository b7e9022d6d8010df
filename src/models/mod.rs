pub mod record;
pub mod time;

pub use record::{ApproachRecord, ModelError, ModelResult, NeoRecord};
pub use time::{format_approach_time, parse_approach_time};
