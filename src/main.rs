use clap::Parser;
use small_utils::config::Command;
use small_utils::core::operations::{
    ConcatOp, DayTypeOp, DescribeVehicleOp, FilterRatingOp, FormatOp, LengthOrDoubleOp,
    MostExpensiveOp, SquareOp,
};
use small_utils::core::Operation;
use small_utils::utils::error::ErrorSeverity;
use small_utils::utils::logger;
use small_utils::{AppConfig, CliConfig, DelayedSquare, Engine, UtilsError, Vehicle};

#[tokio::main]
async fn main() -> anyhow::Result<()> {
    let cli = CliConfig::parse();

    let app_config = match cli.prepare() {
        Ok(app_config) => app_config,
        Err(e) => {
            // No config to read logging settings from; fall back to the flags.
            init_logger(cli.json_logs, cli.verbose, None);
            tracing::error!("❌ Configuration validation failed: {}", e);
            exit_with(&e);
        }
    };

    init_logger(
        cli.json_logs || app_config.json_logs(),
        cli.verbose,
        app_config.log_level(),
    );

    tracing::debug!("CLI config: {:?}", cli);

    let result = match dispatch(cli.command, &app_config) {
        Ok(result) => result,
        Err(e) => exit_with(&e),
    };

    match result.await {
        Ok(rendered) => {
            println!("{}", rendered);
            Ok(())
        }
        Err(e) => exit_with(&e),
    }
}

type Pending = std::pin::Pin<Box<dyn std::future::Future<Output = small_utils::Result<String>>>>;

fn dispatch(command: Command, app_config: &AppConfig) -> small_utils::Result<Pending> {
    let pending = match command {
        Command::Format { input, to_upper } => run(FormatOp { input, to_upper }),
        Command::FilterRating { items } => run(FilterRatingOp::from_json(&items)?),
        Command::Concat { sequences } => run(ConcatOp::from_json_args(&sequences)?),
        Command::LengthOrDouble { value } => run(LengthOrDoubleOp::from_arg(&value)),
        Command::MostExpensive { products } => run(MostExpensiveOp::from_json(&products)?),
        Command::DayType { day } => run(DayTypeOp { day }),
        Command::DescribeVehicle { make, year, model } => {
            let vehicle = match model {
                Some(model) => Vehicle::with_model(make, year, model),
                None => Vehicle::new(make, year),
            };
            run(DescribeVehicleOp { vehicle })
        }
        Command::Square { values, .. } => run(SquareOp {
            squarer: DelayedSquare::from_config(app_config),
            values,
        }),
    };
    Ok(pending)
}

fn run<O: Operation + 'static>(operation: O) -> Pending {
    Box::pin(async move {
        let output = Engine::new(operation).run().await?;
        Ok(output.render())
    })
}

fn init_logger(json: bool, verbose: bool, level: Option<&str>) {
    if json {
        logger::init_json_logger(verbose, level);
    } else {
        logger::init_cli_logger(verbose, level);
    }
}

fn exit_with(e: &UtilsError) -> ! {
    tracing::error!("💡 Suggestion: {}", e.recovery_suggestion());
    eprintln!("❌ {}", e.user_friendly_message());
    eprintln!("💡 {}", e.recovery_suggestion());

    let exit_code = match e.severity() {
        ErrorSeverity::Low => 0,
        ErrorSeverity::Medium => 2,
        ErrorSeverity::High => 1,
        ErrorSeverity::Critical => 3,
    };
    std::process::exit(exit_code);
}
