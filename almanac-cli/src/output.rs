//! Output formatting for solver results

use almanac_solver::SolveResult;
use chrono::TimeDelta;

/// Output formatter for solver results
pub struct OutputFormatter {
    quiet: bool,
}

impl OutputFormatter {
    /// Create a new output formatter
    pub fn new(quiet: bool) -> Self {
        Self { quiet }
    }

    /// Format and print the result
    pub fn print_result(&self, result: &SolveResult, parse_duration: TimeDelta) {
        let text = self.format_result(result, parse_duration);
        if !text.is_empty() {
            println!("{}", text);
        }
    }

    /// Render the result; quiet mode renders just the answer
    pub fn format_result(&self, result: &SolveResult, parse_duration: TimeDelta) -> String {
        match (&result.best, self.quiet) {
            (Some(best), true) => best.lowest().to_string(),
            (None, true) => String::new(),
            (Some(best), false) => format!(
                "{}: {} (parse: {}, solve: {})\n{}\nSeeds evaluated: {}",
                result.terminal,
                best.lowest(),
                format_duration(parse_duration),
                format_duration(result.duration()),
                best.record,
                best.evaluated
            ),
            (None, false) => "No seeds to evaluate.".to_string(),
        }
    }
}

/// Format a TimeDelta for display
fn format_duration(d: TimeDelta) -> String {
    let Some(micros) = d.num_microseconds() else {
        return "N/A".to_string();
    };

    if micros < 0 {
        return format!("-{}", format_duration(-d));
    }

    if micros < 1000 {
        format!("{}µs", micros)
    } else if micros < 1_000_000 {
        format!("{:.2}ms", micros as f64 / 1000.0)
    } else {
        format!("{:.2}s", micros as f64 / 1_000_000.0)
    }
}
