//! Domain models

pub mod types;
pub mod user;

pub use types::{AGE_RANGE_EDGES, AgeRange, Country, Gender, Nationality};
pub use user::UserRecord;
