pub mod paths;

pub use paths::RsvpPaths;
