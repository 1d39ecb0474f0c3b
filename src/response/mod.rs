/// The RSVP answer record and its enumerated choices
pub mod record;

pub use record::{Beverage, Companion, Dietary, Field, Guest, Record, Selection, Submission};
