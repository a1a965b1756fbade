pub mod app;
pub mod config;
pub mod form;
pub mod geolocation;
pub mod map;
pub mod render;
pub mod storage;
pub mod validation;
pub mod workout;

pub use app::{AppError, Mapty};
pub use workout::{ActivityType, Coords, Workout};
