//! One [`Operation`] per public transformation, so the CLI can run any of
//! them through the same [`Engine`](crate::core::engine::Engine).

use crate::core::calendar::{day_type, Day};
use crate::core::collections::{concatenate, filter_by_rating, most_expensive};
use crate::core::square::DelayedSquare;
use crate::core::text::format_case;
use crate::core::value::{length_or_double, TextOrNumber};
use crate::core::vehicle::{full_description, Vehicle};
use crate::core::{Operation, Output, Product, RatedItem};
use crate::utils::error::Result;
use async_trait::async_trait;

pub struct FormatOp {
    pub input: String,
    pub to_upper: Option<bool>,
}

#[async_trait]
impl Operation for FormatOp {
    fn name(&self) -> &'static str {
        "format"
    }

    async fn run(&self) -> Result<Output> {
        Ok(Output::Text(format_case(&self.input, self.to_upper)))
    }
}

pub struct FilterRatingOp {
    pub items: Vec<RatedItem>,
}

impl FilterRatingOp {
    pub fn from_json(json: &str) -> Result<Self> {
        Ok(Self {
            items: serde_json::from_str(json)?,
        })
    }
}

#[async_trait]
impl Operation for FilterRatingOp {
    fn name(&self) -> &'static str {
        "filter-rating"
    }

    async fn run(&self) -> Result<Output> {
        Ok(Output::Items(filter_by_rating(&self.items)))
    }
}

pub struct ConcatOp {
    pub sequences: Vec<Vec<serde_json::Value>>,
}

impl ConcatOp {
    /// Each argument must be a JSON array.
    pub fn from_json_args<S: AsRef<str>>(args: &[S]) -> Result<Self> {
        let sequences = args
            .iter()
            .map(|arg| serde_json::from_str(arg.as_ref()))
            .collect::<std::result::Result<Vec<_>, _>>()?;
        Ok(Self { sequences })
    }
}

#[async_trait]
impl Operation for ConcatOp {
    fn name(&self) -> &'static str {
        "concat"
    }

    async fn run(&self) -> Result<Output> {
        Ok(Output::Values(concatenate(self.sequences.iter().cloned())))
    }
}

pub struct LengthOrDoubleOp {
    pub value: TextOrNumber,
}

impl LengthOrDoubleOp {
    /// Finite numeric arguments are doubled; anything else, including
    /// `inf` and `NaN`, is measured as text.
    pub fn from_arg(arg: &str) -> Self {
        let value = match arg.parse::<f64>() {
            Ok(n) if n.is_finite() => TextOrNumber::Number(n),
            _ => TextOrNumber::Text(arg.to_string()),
        };
        Self { value }
    }
}

#[async_trait]
impl Operation for LengthOrDoubleOp {
    fn name(&self) -> &'static str {
        "length-or-double"
    }

    async fn run(&self) -> Result<Output> {
        Ok(Output::Number(length_or_double(&self.value)))
    }
}

pub struct MostExpensiveOp {
    pub products: Vec<Product>,
}

impl MostExpensiveOp {
    pub fn from_json(json: &str) -> Result<Self> {
        Ok(Self {
            products: serde_json::from_str(json)?,
        })
    }
}

#[async_trait]
impl Operation for MostExpensiveOp {
    fn name(&self) -> &'static str {
        "most-expensive"
    }

    async fn run(&self) -> Result<Output> {
        Ok(Output::Product(most_expensive(&self.products).cloned()))
    }
}

pub struct DayTypeOp {
    pub day: Day,
}

#[async_trait]
impl Operation for DayTypeOp {
    fn name(&self) -> &'static str {
        "day-type"
    }

    async fn run(&self) -> Result<Output> {
        Ok(Output::Text(day_type(self.day).to_string()))
    }
}

pub struct DescribeVehicleOp {
    pub vehicle: Vehicle,
}

#[async_trait]
impl Operation for DescribeVehicleOp {
    fn name(&self) -> &'static str {
        "describe-vehicle"
    }

    async fn run(&self) -> Result<Output> {
        Ok(Output::Text(full_description(&self.vehicle)))
    }
}

pub struct SquareOp {
    pub squarer: DelayedSquare,
    pub values: Vec<f64>,
}

#[async_trait]
impl Operation for SquareOp {
    fn name(&self) -> &'static str {
        "square"
    }

    /// All values are squared concurrently; the first failure, if any, is returned.
    async fn run(&self) -> Result<Output> {
        let squares = self
            .squarer
            .square_many(&self.values)
            .await
            .into_iter()
            .collect::<Result<Vec<f64>>>()?;

        match squares.as_slice() {
            [single] => Ok(Output::Number(*single)),
            _ => Ok(Output::Numbers(squares)),
        }
    }
}
