pub mod followage;

pub use followage::{FollowageLookup, HttpFollowage};
