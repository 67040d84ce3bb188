pub mod config;
pub mod error;
pub mod models;
pub mod services;
pub mod transport;

pub use config::ClientConfig;
pub use error::AppError;
pub use services::{CoursesService, with_cancellation};
