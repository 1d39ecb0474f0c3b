pub mod cli;
pub mod config;
pub mod error;
pub mod io;
pub mod logging;
pub mod party;
pub mod response;
pub mod submit;
pub mod wizard;

pub use error::{Result, RsvpError};
