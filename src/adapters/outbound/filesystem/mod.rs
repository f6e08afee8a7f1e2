mod report_writer;
mod vendor_file;

pub use report_writer::FileReportSink;
pub use vendor_file::FileVendorListSource;
