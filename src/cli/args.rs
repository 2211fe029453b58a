use clap::Parser;

use harmony::Strategy;

#[derive(Parser)]
#[command(name = "harmony", version, about = "Harmonic mean CLI")]
pub struct CliArgs {
    /// Numbers to reduce. Every argument must parse as a float; if any one
    /// fails, the whole set is discarded and treated as empty.
    #[arg(value_name = "NUM", allow_negative_numbers = true)]
    pub values: Vec<String>,

    /// Reduction strategy (scalar or vectorized)
    #[arg(long, value_enum, default_value_t = Strategy::Vectorized)]
    pub strategy: Strategy,

    /// Print a JSON report instead of the styled number
    #[arg(long, default_value_t = false)]
    pub json: bool,

    /// Disable colored output
    #[arg(long, default_value_t = false)]
    pub no_color: bool,

    /// Enable logging
    #[arg(long, default_value_t = false)]
    pub log: bool,
}
