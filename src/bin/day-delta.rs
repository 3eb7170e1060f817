use clap::{ArgAction, Parser};
use day_delta::{DeltaCalculator, DeltaError, DiagnosticSink, LogSink, ValidityPolicy};

/// Count the whole days strictly between two proleptic Gregorian dates.
#[derive(Parser, Debug)]
#[command(name = "day-delta", version, about)]
pub struct Options {
    /// First date, `YYYY-MM-DD` or `-YYYY-MM-DD`.
    #[arg(long, short = '1', value_name = "YYYY-MM-DD", allow_hyphen_values = true)]
    date1: String,

    /// Second date, `YYYY-MM-DD` or `-YYYY-MM-DD`.
    #[arg(long, short = '2', value_name = "YYYY-MM-DD", allow_hyphen_values = true)]
    date2: String,

    /// Earliest accepted date: none, gregorian-adoption or formula-limit.
    #[arg(long, env = "DAY_DELTA_POLICY", default_value_t = ValidityPolicy::GregorianAdoption)]
    policy: ValidityPolicy,

    /// Also print the Julian Day Number of each date.
    #[arg(long)]
    jdn: bool,

    /// Log more; repeat for more detail.
    #[arg(long, short, action = ArgAction::Count)]
    verbose: u8,

    /// Log less; repeat to silence warnings too.
    #[arg(long, short, action = ArgAction::Count, conflicts_with = "verbose")]
    quiet: u8,
}

fn main() {
    let options = Options::parse();
    init_logging(i16::from(options.verbose) - i16::from(options.quiet));

    // Rejections are logged by the sink, so the error needs no printing here.
    match run(&options, LogSink) {
        Ok(output) => print!("{output}"),
        Err(_) => std::process::exit(1),
    }
}

fn init_logging(verbosity: i16) {
    let level = match verbosity {
        ..=-2 => log::LevelFilter::Error,
        -1 => log::LevelFilter::Warn,
        0 => log::LevelFilter::Info,
        1 => log::LevelFilter::Debug,
        _ => log::LevelFilter::Trace,
    };

    env_logger::Builder::from_default_env()
        .filter_module("day_delta", level)
        .filter_module(module_path!(), level)
        .init();
}

/// Everything the command prints on success. Nothing is produced unless
/// both dates are valid.
fn run(options: &Options, sink: impl DiagnosticSink) -> Result<String, DeltaError> {
    log::info!(
        "Calculating days between {} and {} ({} policy)",
        options.date1,
        options.date2,
        options.policy
    );

    let calculator = DeltaCalculator::new(options.policy).with_sink(sink);
    let report = calculator.report(&options.date1, &options.date2)?;

    let mut output = String::new();
    if options.jdn {
        output.push_str(&format!("date1: {} JDN {}\n", report.first, report.first_jdn));
        output.push_str(&format!("date2: {} JDN {}\n", report.second, report.second_jdn));
    }
    output.push_str(&format!("{}\n", report.delta));
    Ok(output)
}
