use drilling_dashboard::panels::*;
use drilling_dashboard::{ChartView, DashboardCommand, ReadingLog};

#[test]
fn headings_match_dashboard_sections() {
    assert_eq!(ChartPanel::default().title_and_icon(), "📊 Live Drilling Data");
    assert_eq!(StatusPanel::default().title_and_icon(), "⚙ Current Status");
    assert_eq!(ExportPanel::default().title_and_icon(), "📂 Export Data");
}

#[test]
fn full_label_contains_both_icon_and_title() {
    let p = StatusPanel::default();
    let label = p.title_and_icon();
    assert!(label.contains(p.title()));
    assert!(label.starts_with(p.icon()));
    assert!(label.ends_with(p.title()));
}

#[test]
fn panels_only_claim_their_own_commands() {
    let mut status = StatusPanel::default();
    let cmd = DashboardCommand::ReplaceChart(ChartView::from_log(&ReadingLog::new()));
    let returned = status.apply(cmd.clone());
    assert_eq!(returned, Some(cmd.clone()));
    assert!(status.view().is_none());

    let mut chart = ChartPanel::default();
    assert_eq!(chart.apply(cmd), None);
    assert!(chart.view().is_some());
}
