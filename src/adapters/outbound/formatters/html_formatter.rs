use crate::cve_tracking::domain::{SeverityBucket, VulnerabilityRecord};
use crate::ports::outbound::ReportFormatter;
use crate::shared::Result;

use super::TextReportFormatter;

/// HtmlReportFormatter adapter for self-contained HTML report artifacts
///
/// Same content as the text report, rendered as a standalone page with
/// real hyperlinks to the NVD detail pages, suitable for opening in a
/// browser.
pub struct HtmlReportFormatter;

impl HtmlReportFormatter {
    pub fn new() -> Self {
        Self
    }

    /// Escapes text for safe embedding in HTML element content
    fn escape_html(text: &str) -> String {
        text.replace('&', "&amp;")
            .replace('<', "&lt;")
            .replace('>', "&gt;")
            .replace('"', "&quot;")
    }

    fn render_record(output: &mut String, record: &VulnerabilityRecord) {
        output.push_str("    <article>\n");
        output.push_str(&format!(
            "      <h2><a href=\"{}\">{}</a></h2>\n",
            record.id().detail_url(),
            Self::escape_html(record.id().as_str())
        ));
        output.push_str(&format!(
            "      <p>Last Modified: {}</p>\n",
            record.last_modified().format("%Y-%m-%d")
        ));
        output.push_str(&format!(
            "      <p>{}</p>\n",
            Self::escape_html(record.description())
        ));
        output.push_str("    </article>\n");
    }
}

impl Default for HtmlReportFormatter {
    fn default() -> Self {
        Self::new()
    }
}

impl ReportFormatter for HtmlReportFormatter {
    fn format(
        &self,
        records: &[VulnerabilityRecord],
        severity: SeverityBucket,
        days: u32,
    ) -> Result<String> {
        let header = TextReportFormatter::header(records.len(), severity, days);

        let mut output = String::new();
        output.push_str("<!DOCTYPE html>\n<html lang=\"en\">\n  <head>\n");
        output.push_str("    <meta charset=\"utf-8\">\n");
        output.push_str(&format!(
            "    <title>{} CVE report</title>\n",
            severity.label()
        ));
        output.push_str(
            "    <style>body { font-family: sans-serif; margin: 2em; } article { margin-bottom: 1.5em; }</style>\n",
        );
        output.push_str("  </head>\n  <body>\n");
        output.push_str(&format!("    <h1>{}</h1>\n", Self::escape_html(&header)));

        for record in records {
            Self::render_record(&mut output, record);
        }

        output.push_str("  </body>\n</html>\n");
        Ok(output)
    }

    fn file_extension(&self) -> &'static str {
        "html"
    }
}
