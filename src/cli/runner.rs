use tracing::{debug, info, warn};
use tracing_subscriber::EnvFilter;

use harmony::{MeanParams, api};

use super::args::CliArgs;
use super::output;

/// Parse every raw argument as `f64`. Any failure discards the whole set;
/// a partial reduction over "the arguments that happened to parse" is never
/// computed.
fn parse_values(raw: &[String]) -> Vec<f64> {
    let parsed: Result<Vec<f64>, _> = raw.iter().map(|value| value.parse()).collect();
    match parsed {
        Ok(values) => values,
        Err(_) => {
            warn!("discarding input: not every argument parsed as a number");
            Vec::new()
        }
    }
}

pub fn run(args: CliArgs) -> Result<(), Box<dyn std::error::Error>> {
    if args.log {
        tracing_subscriber::fmt()
            .with_env_filter(
                EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("debug")),
            )
            .init();
    }

    if args.no_color {
        colored::control::set_override(false);
    }

    let values = parse_values(&args.values);
    let params = MeanParams {
        strategy: args.strategy,
    };

    debug!(
        "reducing {} value(s) with strategy {}",
        values.len(),
        params.strategy
    );

    // Empty and zero-containing inputs are deliberately absorbed into the
    // default result; the exit code stays 0 on every computed path.
    let report = match api::harmonic_mean_report(&values, &params) {
        Ok(report) => report,
        Err(e) => {
            info!("substituting default result: {e}");
            api::MeanReport {
                count: values.len(),
                strategy: params.strategy,
                mean: 0.0,
            }
        }
    };

    if args.json {
        output::print_json(&report)?;
    } else {
        output::print_styled(report.mean)?;
    }

    Ok(())
}
