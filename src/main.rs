use chrono::Local;
use cve_track::adapters::outbound::filesystem::{FileReportSink, FileVendorListSource};
use cve_track::adapters::outbound::network::NvdFeedClient;
use cve_track::application::dto::TrackRequest;
use cve_track::application::use_cases::TrackCvesUseCase;
use cve_track::cli::Args;
use cve_track::cve_tracking::domain::SeverityBucket;
use cve_track::ports::outbound::ReportSink;
use cve_track::shared::error::{ExitCode, TrackError};
use cve_track::shared::Result;
use owo_colors::OwoColorize;
use std::process;

fn main() {
    if let Err(e) = run() {
        eprintln!("\n❌ An error occurred:\n");
        eprintln!("{}", e);

        // Display error chain
        let mut source = e.source();
        while let Some(err) = source {
            eprintln!("\nCaused by: {}", err);
            source = err.source();
        }

        eprintln!();
        process::exit(exit_code_for(&e).as_i32());
    }
}

/// Caller-side validation failures exit with a distinct code so CI can
/// tell bad invocations from runtime failures.
fn exit_code_for(error: &anyhow::Error) -> ExitCode {
    match error.downcast_ref::<TrackError>() {
        Some(TrackError::Validation { .. }) => ExitCode::InvalidArguments,
        _ => ExitCode::ApplicationError,
    }
}

fn run() -> Result<()> {
    let args = Args::parse_args();
    args.validate()?;

    let vendor_source = FileVendorListSource::new(args.file.clone());
    let feed_source = NvdFeedClient::new()?;

    let use_case = TrackCvesUseCase::new(feed_source, vendor_source);
    let response = use_case.execute(TrackRequest::new(args.days))?;

    eprintln!(
        "✅ Normalized {} feed entries ({} skipped), {} matched your vendor list",
        response.normalized, response.skipped, response.matched
    );
    print_summary(&response.buckets);

    eprintln!("{}", args.format.progress_message());
    let formatter = args.format.create_formatter();
    let sink = FileReportSink::new(args.output_dir.clone());
    let today = Local::now().date_naive();

    for bucket in SeverityBucket::ALL {
        let content = formatter.format(response.buckets.records(bucket), bucket, response.days)?;
        let file_name = FileReportSink::report_file_name(today, bucket, formatter.file_extension());
        let path = sink.persist(&file_name, &content)?;
        eprintln!("✅ Report written: {}", path.display());
    }

    Ok(())
}

fn print_summary(buckets: &cve_track::cve_tracking::domain::SeverityBuckets) {
    let high = buckets.records(SeverityBucket::High).len();
    let medium = buckets.records(SeverityBucket::Medium).len();
    let low = buckets.records(SeverityBucket::Low).len();
    let unspecified = buckets.records(SeverityBucket::Unspecified).len();

    eprintln!(
        "   {} {}  {} {}  {} {}  {} {}",
        high.red().bold(),
        "HIGH".red(),
        medium.yellow().bold(),
        "MEDIUM".yellow(),
        low.green().bold(),
        "LOW".green(),
        unspecified.dimmed(),
        "UNSPECIFIED".dimmed(),
    );
}
