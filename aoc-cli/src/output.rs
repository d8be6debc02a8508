//! Output formatting for solver results
//!
//! Answers go to stdout; errors and warnings go to stderr.

use crate::aggregator::ResultKey;
use crate::executor::SolverResult;
use chrono::TimeDelta;
use std::time::{Duration, Instant};

/// Output formatter for solver results
pub struct OutputFormatter {
    quiet: bool,
    start_time: Instant,
}

impl OutputFormatter {
    pub fn new(quiet: bool) -> Self {
        Self {
            quiet,
            start_time: Instant::now(),
        }
    }

    /// Print the work about to run, and any input files it lacks
    pub fn print_plan(&self, solver_count: usize, missing_inputs: &[(u16, u8)]) {
        if !missing_inputs.is_empty() {
            eprintln!("Missing {} input file(s):", missing_inputs.len());
            for (year, day) in missing_inputs {
                eprintln!("  - {}/day{:02}.txt", year, day);
            }
        }
        if !self.quiet {
            println!("Running {} solver(s)...", solver_count);
        }
    }

    /// Format and print a single result
    pub fn print_result(&self, result: &SolverResult) {
        if self.quiet {
            self.print_quiet(result);
        } else {
            self.print_full(result);
        }
    }

    /// Print in quiet mode (just the answer)
    fn print_quiet(&self, result: &SolverResult) {
        match &result.answer {
            Ok(answer) => println!("{}", answer),
            Err(e) => eprintln!("Error: {}", e),
        }
    }

    /// Print full output with timing info
    fn print_full(&self, result: &SolverResult) {
        match &result.answer {
            Ok(_) => println!("{}", format_result_line(result)),
            Err(_) => eprintln!("{}", format_result_line(result)),
        }
    }

    /// Warn about expected results that never arrived
    pub fn print_outstanding<'a>(&self, outstanding: impl IntoIterator<Item = &'a ResultKey>) {
        let keys: Vec<_> = outstanding
            .into_iter()
            .map(|k| format!("{}/{:02} Part {}", k.year, k.day, k.part))
            .collect();
        if !keys.is_empty() {
            eprintln!("Warning: no result received for {}", keys.join(", "));
        }
    }

    /// Print a summary after all results
    /// Shows both total solve time (sum of durations) and actual elapsed wall-clock time
    pub fn print_summary(&self, results: &[SolverResult]) {
        if self.quiet {
            return;
        }
        let elapsed_time = self.start_time.elapsed();
        println!();
        for line in summary_lines(results, elapsed_time) {
            println!("{}", line);
        }
    }
}

/// One result as `2021/09 Part 1: answer (parse: .., solve: ..)`, or the
/// error in place of the answer
fn format_result_line(result: &SolverResult) -> String {
    let prefix = format!("{}/{:02} Part {}", result.year, result.day, result.part);

    match &result.answer {
        Ok(answer) => {
            let parse_timing = result
                .parse_duration
                .map(|d| format!("parse: {}, ", format_duration(d)))
                .unwrap_or_default();
            format!(
                "{}: {} ({}solve: {})",
                prefix,
                answer,
                parse_timing,
                format_duration(result.solve_duration)
            )
        }
        Err(e) => format!("{}: Error - {}", prefix, e),
    }
}

fn summary_lines(results: &[SolverResult], elapsed_time: Duration) -> Vec<String> {
    let total = results.len();
    let successes = results.iter().filter(|r| r.answer.is_ok()).count();
    let failures = total - successes;

    let total_parse_time: TimeDelta = results
        .iter()
        .filter(|r| r.answer.is_ok())
        .filter_map(|r| r.parse_duration)
        .sum();
    let total_solve_time: TimeDelta = results
        .iter()
        .filter(|r| r.answer.is_ok())
        .map(|r| r.solve_duration)
        .sum();
    let total_compute_time = total_parse_time + total_solve_time;

    let mut lines = vec![
        "--- Summary ---".to_string(),
        format!("Solvers: {} solved, {} failed", successes, failures),
        format!("Total parse time: {}", format_duration(total_parse_time)),
        format!("Total solve time: {}", format_duration(total_solve_time)),
        format!(
            "Elapsed wall-clock time: {}",
            format_std_duration(elapsed_time)
        ),
    ];
    if !elapsed_time.is_zero() {
        let total_compute_secs =
            total_compute_time.num_microseconds().unwrap_or(0) as f64 / 1_000_000.0;
        let speedup = total_compute_secs / elapsed_time.as_secs_f64();
        lines.push(format!("Speedup factor: {:.2}x", speedup));
    }
    lines
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

/// Format a std::time::Duration for display (used for wall-clock time)
fn format_std_duration(d: Duration) -> String {
    let micros = d.as_micros();
    if micros < 1000 {
        format!("{}µs", micros)
    } else if micros < 1_000_000 {
        format!("{:.2}ms", micros as f64 / 1000.0)
    } else {
        format!("{:.2}s", d.as_secs_f64())
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use aoc_solver::{ParseError, SolverError};

    fn solved(day: u8, answer: &str) -> SolverResult {
        SolverResult {
            year: 2021,
            day,
            part: 1,
            answer: Ok(answer.to_string()),
            solve_duration: TimeDelta::microseconds(1500),
            parse_duration: Some(TimeDelta::microseconds(250)),
        }
    }

    fn failed(day: u8) -> SolverResult {
        SolverResult {
            year: 2021,
            day,
            part: 2,
            answer: Err(SolverError::ParseError(ParseError::MissingData(
                "no rows".to_string(),
            ))),
            solve_duration: TimeDelta::zero(),
            parse_duration: None,
        }
    }

    #[test]
    fn test_format_duration_units() {
        assert_eq!(format_duration(TimeDelta::microseconds(999)), "999µs");
        assert_eq!(format_duration(TimeDelta::microseconds(1500)), "1.50ms");
        assert_eq!(format_duration(TimeDelta::milliseconds(2500)), "2.50s");
        assert_eq!(format_duration(TimeDelta::microseconds(-20)), "-20µs");
        assert_eq!(format_std_duration(Duration::from_micros(42)), "42µs");
    }

    #[test]
    fn test_result_lines() {
        assert_eq!(
            format_result_line(&solved(9, "15")),
            "2021/09 Part 1: 15 (parse: 250µs, solve: 1.50ms)"
        );
        assert_eq!(
            format_result_line(&failed(11)),
            "2021/11 Part 2: Error - Parse error: Missing data: no rows"
        );
    }

    #[test]
    fn test_summary_counts_only_successes() {
        let results = [solved(9, "15"), solved(12, "10"), failed(11)];
        let lines = summary_lines(&results, Duration::ZERO);

        assert_eq!(lines[0], "--- Summary ---");
        assert_eq!(lines[1], "Solvers: 2 solved, 1 failed");
        assert_eq!(lines[2], "Total parse time: 500µs");
        assert_eq!(lines[3], "Total solve time: 3.00ms");
        assert_eq!(lines.len(), 5);

        let lines = summary_lines(&results, Duration::from_millis(1));
        assert_eq!(lines[5], "Speedup factor: 3.50x");
    }
}
