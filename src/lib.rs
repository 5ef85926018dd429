pub mod config;
pub mod core;
pub mod domain;
pub mod utils;

#[cfg(feature = "cli")]
pub use config::CliConfig;

pub use config::toml_config::AppConfig;
pub use crate::core::{
    calendar::{day_type, Day, DayType},
    collections::{concatenate, filter_by_rating, most_expensive},
    engine::Engine,
    square::{square_async, DelayedSquare, SquareHandle},
    text::format_case,
    value::{length_or_double, TextOrNumber},
    vehicle::{describe, full_description, model_description, Vehicle},
};
pub use domain::model::{Output, Product, RatedItem};
pub use utils::error::{Result, UtilsError};
