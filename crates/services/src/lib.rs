#![forbid(unsafe_code)]

pub mod badge_engine;
pub mod error;
pub mod flow;
pub mod progress_service;

pub use molar_core::Clock;

pub use badge_engine::{BadgeEarned, BadgeEngine};
pub use error::{FlowError, ProgressServiceError};
pub use flow::AppFlow;
pub use progress_service::ProgressService;
