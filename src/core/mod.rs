pub mod calendar;
pub mod collections;
pub mod engine;
pub mod operations;
pub mod square;
pub mod text;
pub mod value;
pub mod vehicle;

pub use crate::domain::model::{Output, Product, RatedItem};
pub use crate::domain::ports::{ConfigProvider, Operation};
pub use crate::utils::error::Result;
