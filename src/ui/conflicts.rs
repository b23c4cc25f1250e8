use crate::core::conflicts::ConflictReport;
use crate::ui::messages::warning;

/// Lines under the warning headline: one per named conflict, then "+N more".
pub fn conflict_lines(report: &ConflictReport, limit: usize) -> Vec<String> {
    let preview = report.preview(limit);

    let mut lines: Vec<String> = preview
        .shown
        .iter()
        .map(|ev| format!("  • #{} {} ({})", ev.id, ev.title, ev.time_range()))
        .collect();

    if let Some(more) = preview.more_label() {
        lines.push(format!("  {more}"));
    }
    lines
}

pub fn print_conflict_warning(report: &ConflictReport, limit: usize) {
    warning(format!(
        "Schedule conflict with {} event(s):",
        report.count()
    ));
    for l in conflict_lines(report, limit) {
        println!("{l}");
    }
}
