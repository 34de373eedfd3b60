use clap::{Parser, ValueEnum};
use gestimate::prelude::*;
use std::io::{self, IsTerminal};
use tracing::{debug, warn, Subscriber};
use tracing_subscriber::{fmt, fmt::MakeWriter, prelude::*, EnvFilter};

const RESET: &str = "\x1b[0m";
const GREEN: &str = "\x1b[32m";

/// Environment variable holding the diagnostics filter, e.g. `GESTIMATE_LOG=gestimate=debug`.
const LOG_ENV: &str = "GESTIMATE_LOG";

const DEFAULT_LOG_FILTER: &str = "gestimate=warn";

#[derive(Clone, Copy, PartialEq, Eq, ValueEnum, Debug)]
enum ColorArg {
    Auto,
    Always,
    Never,
}

impl ColorArg {
    fn enabled(&self) -> bool {
        match self {
            ColorArg::Auto => io::stdout().is_terminal(),
            ColorArg::Always => true,
            ColorArg::Never => false,
        }
    }
}

/// A CLI tool for 3-point (PERT) estimation with confidence intervals
#[derive(Parser, Debug)]
#[command(author, version, about, long_about = None)]
struct Cli {
    /// Best case date
    #[arg(short, long, value_name = "YYYY/MM/DD")]
    best: String,

    /// Most likely case date
    #[arg(short, long, value_name = "YYYY/MM/DD")]
    likely: String,

    /// Worst case date
    #[arg(short, long, value_name = "YYYY/MM/DD")]
    worst: String,

    /// Whether to highlight the 95% row. `auto` colors only when stdout is a terminal.
    #[arg(long, value_enum, default_value_t = ColorArg::Auto)]
    color: ColorArg,
}

fn subscriber<W>(filter: EnvFilter, writer: W) -> impl Subscriber + Send + Sync
where
    W: for<'w> MakeWriter<'w> + Send + Sync + 'static,
{
    tracing_subscriber::registry()
        .with(fmt::layer().with_writer(writer).with_target(false))
        .with(filter)
}

fn init_tracing() {
    let filter =
        EnvFilter::try_from_env(LOG_ENV).unwrap_or_else(|_| EnvFilter::new(DEFAULT_LOG_FILTER));
    subscriber(filter, io::stderr).init();
}

/// Returns the one line shown to the user for a fatal error. The diagnostic event stays below
/// the default filter so the failure is not reported twice.
fn failure_message(e: &EstimateError) -> String {
    debug!(field = %e.field(), "estimate aborted");
    e.to_string()
}

fn main() {
    init_tracing();
    let cli = Cli::parse();
    debug!(?cli, "parsed arguments");

    match do_work(&cli) {
        Ok(output) => {
            print!("{output}");
        }
        Err(e) => {
            eprintln!("{}", failure_message(&e));
            std::process::exit(1);
        }
    }
}

fn do_work(cli: &Cli) -> Result<String, EstimateError> {
    let estimate = Estimate::parse(&cli.best, &cli.likely, &cli.worst)?;
    if !estimate.is_ordered() {
        warn!(
            best = %estimate.best,
            likely = %estimate.likely,
            worst = %estimate.worst,
            "dates are not ordered best <= likely <= worst; confidence dates may precede the mean"
        );
    }

    let intervals = estimate.pert().intervals();
    Ok(render_table(&intervals, cli.color.enabled()))
}

fn render_table(intervals: &ConfidenceIntervals, color: bool) -> String {
    let mut out = String::from("Confidence Interval Table\n--------------------------\n");
    for interval in intervals {
        if color && interval.level == ConfidenceLevel::P95 {
            out.push_str(&format!("{GREEN}{interval}{RESET}\n"));
        } else {
            out.push_str(&format!("{interval}\n"));
        }
    }
    out
}

#[cfg(test)]
mod tests {
    use super::*;
    use clap::error::ErrorKind;
    use rstest::*;
    use std::sync::{Arc, Mutex};

    /// Collects formatted log output in memory.
    #[derive(Clone, Default)]
    struct Captured(Arc<Mutex<Vec<u8>>>);

    impl io::Write for Captured {
        fn write(&mut self, buf: &[u8]) -> io::Result<usize> {
            self.0.lock().unwrap().extend_from_slice(buf);
            Ok(buf.len())
        }

        fn flush(&mut self) -> io::Result<()> {
            Ok(())
        }
    }

    impl Captured {
        fn contents(&self) -> String {
            String::from_utf8(self.0.lock().unwrap().clone()).unwrap()
        }
    }

    fn logged_failure(filter: &str) -> (String, String) {
        let err = Estimate::parse("2024-01-01", "2024/01/10", "2024/01/31").unwrap_err();
        let captured = Captured::default();
        let writer = captured.clone();
        let message = tracing::subscriber::with_default(
            subscriber(EnvFilter::new(filter), move || writer.clone()),
            || failure_message(&err),
        );
        (message, captured.contents())
    }

    const JANUARY_TABLE: &str = "Confidence Interval Table
--------------------------
68% Confidence: 2024/01/17
90% Confidence: 2024/01/20
95% Confidence: 2024/01/22
";

    fn cli(args: &[&str]) -> Cli {
        Cli::try_parse_from(["gestimate"].iter().chain(args)).unwrap()
    }

    #[rstest]
    #[case(&["-b", "2024/01/01", "-l", "2024/01/10", "-w", "2024/01/31", "--color", "never"])]
    #[case(&["--best", "2024/01/01", "--likely", "2024/01/10", "--worst", "2024/01/31", "--color=never"])]
    #[case(&["--worst=2024/01/31", "--best=2024/01/01", "--likely=2024/01/10", "--color", "never"])]
    fn test_table(#[case] args: &[&str]) {
        let res = do_work(&cli(args)).unwrap();
        assert_eq!(JANUARY_TABLE, res);
    }

    #[test]
    fn test_color_highlights_95() {
        let res = do_work(&cli(&[
            "-b", "2024/01/01", "-l", "2024/01/10", "-w", "2024/01/31", "--color", "always",
        ]))
        .unwrap();
        assert!(res.contains("90% Confidence: 2024/01/20\n\x1b[32m95% Confidence: 2024/01/22\x1b[0m\n"));
        assert!(!res.contains("\x1b[32m68%"));
    }

    #[rstest]
    #[case(&["-l", "2024/01/10", "-w", "2024/01/31"])]
    #[case(&["-b", "2024/01/01", "-w", "2024/01/31"])]
    #[case(&["-b", "2024/01/01", "-l", "2024/01/10"])]
    fn test_missing_required(#[case] args: &[&str]) {
        let res = Cli::try_parse_from(["gestimate"].iter().chain(args));
        assert_eq!(
            ErrorKind::MissingRequiredArgument,
            res.unwrap_err().kind()
        );
    }

    #[test]
    fn test_bad_color() {
        let res = Cli::try_parse_from([
            "gestimate", "-b", "2024/01/01", "-l", "2024/01/10", "-w", "2024/01/31", "--color",
            "green",
        ]);
        assert_eq!(ErrorKind::InvalidValue, res.unwrap_err().kind());
    }

    #[rstest]
    #[case(&["-b", "2024-01-01", "-l", "2024/01/10", "-w", "2024/01/31"], "Invalid best date format: ")]
    #[case(&["-b", "2024/01/01", "-l", "2024/13/01", "-w", "2024/01/31"], "Invalid likely date format: ")]
    #[case(&["-b", "2024/01/01", "-l", "2024/01/10", "-w", "2024/02/30"], "Invalid worst date format: ")]
    fn test_invalid_date(#[case] args: &[&str], #[case] prefix: &str) {
        let err = do_work(&cli(args)).unwrap_err();
        assert!(err.to_string().starts_with(prefix));
    }

    #[test]
    fn test_failure_reported_once_by_default() {
        let (message, logged) = logged_failure(DEFAULT_LOG_FILTER);
        assert!(message.starts_with("Invalid best date format: "));
        assert_eq!("", logged);
    }

    #[test]
    fn test_failure_logged_when_debugging() {
        let (_, logged) = logged_failure("gestimate=debug");
        assert!(logged.contains("estimate aborted"));
        assert!(logged.contains("best"));
    }
}
