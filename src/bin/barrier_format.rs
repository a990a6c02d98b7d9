use chart_barriers::{barriers_to_string, try_barriers_to_string, BarrierDisplayConfig};
use std::process::ExitCode;
use tracing_subscriber::{layer::SubscriberExt, util::SubscriberInitExt};

/// Format two barrier values and print them as a JSON array
///
/// Usage: barrier_format <barrier1> <barrier2>
/// Set BARRIER_IS_RELATIVE=true for signed offsets, BARRIER_STRICT=true to
/// reject NaN/Infinity.
fn main() -> ExitCode {
    // Initialize tracing
    tracing_subscriber::registry()
        .with(
            tracing_subscriber::EnvFilter::try_from_default_env()
                .unwrap_or_else(|_| "chart_barriers=info".into()),
        )
        .with(tracing_subscriber::fmt::layer())
        .init();

    let config = match BarrierDisplayConfig::from_env() {
        Ok(config) => config,
        Err(e) => {
            tracing::error!("Failed to load config: {}", e);
            return ExitCode::from(2);
        }
    };
    tracing::debug!(?config, "Loaded barrier display config");

    let args: Vec<String> = std::env::args().skip(1).collect();
    let (barrier1, barrier2) = match args.as_slice() {
        [a, b] => match (a.parse::<f64>(), b.parse::<f64>()) {
            (Ok(a), Ok(b)) => (a, b),
            _ => {
                eprintln!("Barrier values must be numbers, got: {} {}", a, b);
                return ExitCode::from(2);
            }
        },
        _ => {
            eprintln!("Usage: barrier_format <barrier1> <barrier2>");
            return ExitCode::from(2);
        }
    };

    let formatted = if config.strict {
        match try_barriers_to_string(config.is_relative, barrier1, barrier2) {
            Ok(formatted) => formatted,
            Err(e) => {
                tracing::error!("{}", e);
                return ExitCode::FAILURE;
            }
        }
    } else {
        barriers_to_string(config.is_relative, barrier1, barrier2)
    };

    match serde_json::to_string(&formatted) {
        Ok(json) => {
            println!("{}", json);
            ExitCode::SUCCESS
        }
        Err(e) => {
            tracing::error!("Failed to serialize barriers: {}", e);
            ExitCode::FAILURE
        }
    }
}
