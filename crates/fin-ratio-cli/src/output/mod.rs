use std::fmt::Write;

use fin_ratio_core::{FinancialInputs, FinancialReport};

/// Render the raw figures, one `Name = <integer>` line per field in
/// declared order, followed by a blank line.
pub fn render_inputs(inputs: &FinancialInputs) -> String {
    let mut out = String::new();
    for (name, value) in inputs.fields() {
        let _ = writeln!(out, "{} = {}", name, value);
    }
    out.push('\n');
    out
}

/// Render the derived ratios to two decimal places, one line per field in
/// declared order, followed by a blank line. Infinite and NaN values render
/// as-is rather than failing.
pub fn render_report(report: &FinancialReport) -> String {
    let mut out = String::new();
    for (name, value) in report.fields() {
        let _ = writeln!(out, "{} = {:.2}", name, value);
    }
    out.push('\n');
    out
}

pub fn print_inputs(inputs: &FinancialInputs) {
    print!("{}", render_inputs(inputs));
}

pub fn print_report(report: &FinancialReport) {
    print!("{}", render_report(report));
}
