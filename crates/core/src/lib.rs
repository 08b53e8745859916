#![forbid(unsafe_code)]

pub mod catalog;
pub mod error;
pub mod filter;
pub mod model;
pub mod time;

pub use catalog::Catalog;
pub use error::Error;
pub use filter::{DecadeSelector, FilterState, filter, filter_ids};
pub use time::Clock;
