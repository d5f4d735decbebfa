mod bootstrap;
mod render;

use anyhow::Result;
use clap::Parser;
use report_core::settings::Settings;
use report_data::analysis::analyze_file;

fn main() -> Result<()> {
    let settings = Settings::parse();
    bootstrap::setup_logging(&settings.log_level)?;

    tracing::info!("expense-report v{} starting", env!("CARGO_PKG_VERSION"));

    let as_of = settings
        .as_of
        .unwrap_or_else(|| chrono::Local::now().date_naive());

    let report = match analyze_file(&settings.file, as_of) {
        Ok(report) => report,
        Err(err) => {
            // Exactly one user-facing message per failed run; the caller
            // retries by running again with another file.
            eprintln!("{}", err);
            std::process::exit(1);
        }
    };

    tracing::debug!(
        "{} rows read, {} skipped, load {:.3}s, parse {:.3}s",
        report.metadata.rows_read,
        report.metadata.rows_skipped,
        report.metadata.load_time_seconds,
        report.metadata.parse_time_seconds,
    );

    match settings.output.as_str() {
        "json" => println!("{}", serde_json::to_string_pretty(&report.analysis)?),
        _ => print!("{}", render::render_report(&report.analysis)),
    }

    Ok(())
}
