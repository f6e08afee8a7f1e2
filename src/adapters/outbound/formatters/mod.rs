mod html_formatter;
mod text_formatter;

pub use html_formatter::HtmlReportFormatter;
pub use text_formatter::TextReportFormatter;
