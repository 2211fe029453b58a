use std::io::{self, Write};

use colored::Colorize;

use harmony::MeanReport;

use super::errors::AppError;

/// Print the result as bold gray text on a cyan banner.
pub fn print_styled(value: f64) -> Result<(), AppError> {
    let text = format_mean(value);
    let mut stdout = io::stdout();
    writeln!(stdout, "{}", text.black().on_cyan().bold())?;
    Ok(())
}

/// Print the full report as a single JSON line.
pub fn print_json(report: &MeanReport) -> Result<(), AppError> {
    let mut stdout = io::stdout();
    writeln!(stdout, "{}", serde_json::to_string(report)?)?;
    Ok(())
}

/// Keep a trailing `.0` on integral values, so the fallback result reads
/// `0.0` rather than `0`.
pub fn format_mean(value: f64) -> String {
    if value.is_finite() && value.fract() == 0.0 {
        format!("{value:.1}")
    } else {
        value.to_string()
    }
}
