mod input;
mod output;

use clap::Parser;
use colored::Colorize;
use std::process;

use fin_ratio_core::{report, FinancialInputs};

/// Financial-statement ratio report
#[derive(Debug, Parser)]
#[command(
    name = "finratio",
    version,
    about = "Compute standard financial-statement ratios from a YAML figures file",
    long_about = "Reads one fiscal year's income-statement, balance-sheet and \
                  cash-flow figures from a YAML configuration file, echoes the \
                  raw figures, then prints margin, leverage, turnover and \
                  cash-conversion ratios to two decimal places."
)]
struct Cli {
    /// Path to the YAML configuration file with the financial figures
    #[arg(long)]
    config: String,
}

fn run(cli: &Cli) -> Result<(), Box<dyn std::error::Error>> {
    let inputs: FinancialInputs = input::file::read_yaml(&cli.config)?;
    output::print_inputs(&inputs);

    let report = report::compute(&inputs);
    output::print_report(&report);

    Ok(())
}

fn main() {
    let cli = Cli::parse();

    if let Err(e) = run(&cli) {
        eprintln!("{}: {}", "error".red().bold(), e);
        process::exit(1);
    }
}
