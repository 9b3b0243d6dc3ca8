//! Renders overlap reports as plain text.

use crate::overlap::OverlapReport;
use indoc::formatdoc;

/// Marks an item that can be converted into a string for display on a terminal.
pub trait Viewable {
    /// Converts the item into a string for display on a terminal.
    fn view(&self) -> String;
}

/// An [`OverlapReport`] paired with the names the user typed for each
/// channel, which is how the channels are labeled in the output.
#[derive(Debug)]
pub struct LabeledReport<'a> {
    report: &'a OverlapReport,
    first: &'a str,
    second: &'a str,
}

impl<'a> LabeledReport<'a> {
    /// Labels `report` with the names of its two channels.
    pub fn new(report: &'a OverlapReport, first: &'a str, second: &'a str) -> Self {
        Self {
            report,
            first,
            second,
        }
    }
}

impl Viewable for LabeledReport<'_> {
    fn view(&self) -> String {
        let report = self.report;
        let ranked = report
            .viewed_videos()
            .iter()
            .enumerate()
            .map(|(i, (id, views))| format!("{}. Video ID: {id}, View Count: {views}\n", i + 1))
            .collect::<String>();

        formatdoc! {"
            {}: {} subscribers, {} views
            {}: {} subscribers, {} views

            Number of common subscribers: {}
            Percentage of common subscribers: {:.2}%

            Most commonly viewed videos:
            {ranked}
            Percentage of views that are common to both channels: {:.2}%",
            self.first,
            report.first().subscriber_count(),
            report.first().view_count(),
            self.second,
            report.second().subscriber_count(),
            report.second().view_count(),
            report.common_subscribers(),
            report.common_subscriber_percent(),
            report.view_overlap_percent(),
            ranked = ranked,
        }
    }
}

/// Renders `report` as lines of text, labeling its channels `first` and
/// `second`.
pub fn render(report: &OverlapReport, first: &str, second: &str) -> Vec<String> {
    LabeledReport::new(report, first, second)
        .view()
        .lines()
        .map(String::from)
        .collect()
}
