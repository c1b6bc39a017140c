//! Data layer (in-memory activity directory).

pub mod directory;
pub mod seed;

pub use directory::ActivityDirectory;
pub use seed::seed_activities;
