pub mod toml_config;

#[cfg(feature = "cli")]
pub use cli::{CliConfig, Command};

#[cfg(feature = "cli")]
mod cli {
    use super::toml_config::{AppConfig, MAX_DELAY_MS};
    use crate::core::calendar::Day;
    use crate::utils::error::Result;
    use crate::utils::validation::{self, Validate};
    use clap::{Parser, Subcommand};

    #[derive(Debug, Clone, Parser)]
    #[command(name = "small-utils")]
    #[command(about = "Small text, list and delayed-number utilities")]
    pub struct CliConfig {
        #[arg(long, global = true, help = "Path to a TOML configuration file")]
        pub config: Option<String>,

        #[arg(short, long, global = true, help = "Enable verbose output")]
        pub verbose: bool,

        #[arg(long, global = true, help = "Emit logs as JSON")]
        pub json_logs: bool,

        #[command(subcommand)]
        pub command: Command,
    }

    #[derive(Debug, Clone, Subcommand)]
    pub enum Command {
        /// Uppercase text; pass `--to-upper false` to lowercase it
        Format {
            input: String,
            #[arg(long)]
            to_upper: Option<bool>,
        },
        /// Keep items rated 4 or higher, e.g. '[{"title":"A","rating":5}]'
        FilterRating { items: String },
        /// Concatenate JSON arrays in argument order
        Concat { sequences: Vec<String> },
        /// Character count of text, or double a number
        LengthOrDouble {
            #[arg(allow_hyphen_values = true)]
            value: String,
        },
        /// Pick the highest-priced product, e.g. '[{"name":"x","price":3}]'
        MostExpensive { products: String },
        /// Classify a day as Weekday or Weekend
        DayType { day: Day },
        /// Describe a vehicle by make, year and optional model
        DescribeVehicle {
            make: String,
            year: u16,
            #[arg(long)]
            model: Option<String>,
        },
        /// Square numbers after a fixed delay
        Square {
            #[arg(required = true, allow_negative_numbers = true)]
            values: Vec<f64>,
            #[arg(long, help = "Override the delay in milliseconds")]
            delay_ms: Option<u64>,
        },
    }

    impl CliConfig {
        /// Loads the config file if one was given, then applies command-line overrides.
        pub fn load_app_config(&self) -> Result<AppConfig> {
            let mut app_config = match &self.config {
                Some(path) => AppConfig::from_file(path)?,
                None => AppConfig::default(),
            };

            if let Command::Square {
                delay_ms: Some(delay_ms),
                ..
            } = &self.command
            {
                app_config.square.delay_ms = Some(*delay_ms);
            }

            app_config.validate()?;
            Ok(app_config)
        }

        /// Validates the command line, then loads the config it points at.
        pub fn prepare(&self) -> Result<AppConfig> {
            self.validate()?;
            self.load_app_config()
        }
    }

    impl Validate for CliConfig {
        fn validate(&self) -> Result<()> {
            if let Some(path) = &self.config {
                validation::validate_path("config", path)?;
            }
            if let Command::Square {
                delay_ms: Some(delay_ms),
                ..
            } = &self.command
            {
                validation::validate_range("delay_ms", *delay_ms, 0, MAX_DELAY_MS)?;
            }
            Ok(())
        }
    }

}
