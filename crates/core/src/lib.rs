#![forbid(unsafe_code)]

pub mod content;
pub mod error;
pub mod intent;
pub mod modal;
pub mod model;
pub mod nav;
pub mod time;

pub use error::Error;
pub use time::Clock;
