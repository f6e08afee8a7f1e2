/// Outbound ports (Driven ports) - Infrastructure interfaces
///
/// These ports define the interfaces that the application core uses
/// to interact with external systems (network, file system, console).
pub mod feed_source;
pub mod report_formatter;
pub mod report_sink;
pub mod vendor_list_source;

pub use feed_source::FeedSource;
pub use report_formatter::ReportFormatter;
pub use report_sink::ReportSink;
pub use vendor_list_source::VendorListSource;
