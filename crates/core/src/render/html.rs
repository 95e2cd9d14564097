//! HTML body for the driver completion email.

use std::fmt::Write;

use crate::report::CompletionSummary;

/// Renders the driver completion summary as an HTML email body.
///
/// `day_of_report` is the formatted report timestamp; `summary` holds the
/// terminal subtotals in first-seen order.
#[must_use]
pub fn render_driver_report(
    day_of_report: &str,
    total_summary: &CompletionSummary,
    summary: &[CompletionSummary],
) -> String {
    let mut body = String::with_capacity(1024);

    body.push_str("<html><body>");
    let _ = write!(
        body,
        "<h2>Driver Completion Report</h2><p>Report generated: {}</p>",
        escape(day_of_report)
    );

    let _ = write!(
        body,
        "<h3>{}</h3><p>Active: {} &mdash; Complete: {} &mdash; Total: {} ({}% complete)</p>",
        escape(&total_summary.name),
        total_summary.active,
        total_summary.complete,
        total_summary.total,
        total_summary.percent_complete,
    );

    body.push_str(
        "<h3>By Terminal</h3>\
         <table border=\"1\" cellpadding=\"4\" cellspacing=\"0\">\
         <tr><th>Terminal</th><th>Active</th><th>Complete</th><th>Total</th><th>% Complete</th></tr>",
    );
    for terminal in summary {
        let _ = write!(
            body,
            "<tr><td>{}</td><td>{}</td><td>{}</td><td>{}</td><td>{}</td></tr>",
            escape(&terminal.name),
            terminal.active,
            terminal.complete,
            terminal.total,
            terminal.percent_complete,
        );
    }
    body.push_str("</table></body></html>");

    body
}

/// Minimal HTML entity escaping for interpolated text.
fn escape(text: &str) -> String {
    text.replace('&', "&amp;")
        .replace('<', "&lt;")
        .replace('>', "&gt;")
}

#[cfg(test)]
mod tests {
    use super::*;

    fn terminal(name: &str, active: u64, complete: u64, percent: f64) -> CompletionSummary {
        CompletionSummary {
            name: name.to_string(),
            active,
            complete,
            total: active + complete,
            percent_complete: percent,
        }
    }

    #[test]
    fn test_render_contains_timestamp_total_and_terminals() {
        let total = terminal("Total", 4, 2, 33.33);
        let terminals = vec![
            terminal("North", 3, 2, 40.0),
            terminal("South", 1, 0, 0.0),
        ];

        let html = render_driver_report("01/15/2024, 14:03:07", &total, &terminals);

        assert!(html.contains("01/15/2024, 14:03:07"));
        assert!(html.contains("<td>North</td>"));
        assert!(html.contains("<td>South</td>"));
        assert!(html.contains("<td>40</td>"));
        assert_eq!(html.matches("<tr>").count(), 3); // header + 2 terminals
    }

    #[test]
    fn test_render_escapes_terminal_names() {
        let total = terminal("Total", 0, 0, 0.0);
        let terminals = vec![terminal("North & <East>", 0, 0, 0.0)];

        let html = render_driver_report("01/15/2024, 14:03:07", &total, &terminals);

        assert!(html.contains("North &amp; &lt;East&gt;"));
        assert!(!html.contains("<East>"));
    }
}
