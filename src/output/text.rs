//! Terminal rendering of dashboard views.
//!
//! The dashboard has four tabs. `View` names them; `render_view` draws the
//! selected one as plain text with color highlights.

use crate::parser::schema::Dashboard;
use clap::ValueEnum;
use colored::*;
use std::fmt;

const RULE: &str = "---------------------------------------------------";

/// Dashboard tab
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, ValueEnum)]
pub enum View {
    /// Summary cards
    #[default]
    Overview,
    /// Daily rollup and type distribution
    Activities,
    /// Resting, min and max heart rate per day
    HeartRate,
    /// Sleep stages and score per night
    Sleep,
}

impl View {
    pub const ALL: [View; 4] = [View::Overview, View::Activities, View::HeartRate, View::Sleep];

    pub fn title(self) -> &'static str {
        match self {
            View::Overview => "Overview",
            View::Activities => "Activities",
            View::HeartRate => "Heart Rate",
            View::Sleep => "Sleep",
        }
    }
}

impl fmt::Display for View {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.title())
    }
}

/// Render one view of a dashboard for the terminal
pub fn render_view(dashboard: &Dashboard, view: View) -> String {
    let mut out = String::new();

    out.push_str(&render_tabs(view));
    out.push_str(RULE);
    out.push('\n');

    let body = match view {
        View::Overview => render_overview(dashboard),
        View::Activities => render_activities(dashboard),
        View::HeartRate => render_heart_rate(dashboard),
        View::Sleep => render_sleep(dashboard),
    };
    out.push_str(&body);

    out.push_str(RULE);
    out.push('\n');
    out
}

fn render_tabs(selected: View) -> String {
    let tabs: Vec<String> = View::ALL
        .iter()
        .map(|&tab| {
            if tab == selected {
                format!("[{}]", tab.title()).bold().cyan().to_string()
            } else {
                format!(" {} ", tab.title()).dimmed().to_string()
            }
        })
        .collect();
    format!("\n{}\n", tabs.join(" "))
}

fn render_overview(dashboard: &Dashboard) -> String {
    let summary = &dashboard.summary;
    let mut out = String::new();

    out.push_str(&format!("  Activities:     {}\n", summary.total_activities));
    out.push_str(&format!("  Distance:       {} km\n", summary.total_distance));
    out.push_str(&format!("  Duration:       {} h\n", summary.total_duration));
    out.push_str(&format!("  Calories:       {}\n", summary.total_calories));
    out.push_str(&format!(
        "  Avg Heart Rate: {} bpm\n",
        highlight_non_finite(&summary.avg_heart_rate)
    ));
    out.push_str(&format!(
        "  Avg Steps:      {}\n",
        highlight_non_finite(&summary.avg_steps)
    ));
    out
}

fn render_activities(dashboard: &Dashboard) -> String {
    let mut out = String::new();

    out.push_str(&format!("{}\n", "Daily Activity".bold()));
    if dashboard.daily_activity.is_empty() {
        out.push_str("  (no dated activities)\n");
    }
    for day in &dashboard.daily_activity {
        out.push_str(&format!(
            "  {:<12} {:>3} x {:>8.1} km {:>6.1} h {:>7.0} kcal\n",
            day.date, day.count, day.distance_km, day.duration_hours, day.calories
        ));
    }

    out.push_str(&format!("\n{}\n", "By Type".bold()));
    if dashboard.activity_types.is_empty() {
        out.push_str("  (no activities)\n");
    }
    for share in &dashboard.activity_types {
        out.push_str(&format!(
            "  {:<20} {:>4} {:>9.1} km\n",
            share.activity_type, share.count, share.distance_km
        ));
    }
    out
}

fn render_heart_rate(dashboard: &Dashboard) -> String {
    let mut out = String::new();

    out.push_str(&format!(
        "  {:<12} {:>7} {:>5} {:>5}\n",
        "Date".bold(),
        "Resting".bold(),
        "Min".bold(),
        "Max".bold()
    ));
    if dashboard.heart_rate.is_empty() {
        out.push_str("  (no resting heart rate data)\n");
    }
    for point in &dashboard.heart_rate {
        out.push_str(&format!(
            "  {:<12} {:>7.0} {:>5} {:>5}\n",
            point.date,
            point.resting,
            format_optional(point.min),
            format_optional(point.max)
        ));
    }
    out
}

fn render_sleep(dashboard: &Dashboard) -> String {
    let mut out = String::new();

    out.push_str(&format!(
        "  {:<12} {:>6} {:>6} {:>6} {:>6} {:>6}\n",
        "Date".bold(),
        "Total".bold(),
        "Deep".bold(),
        "Light".bold(),
        "REM".bold(),
        "Score".bold()
    ));
    if dashboard.sleep.is_empty() {
        out.push_str("  (no sleep data)\n");
    }
    for night in &dashboard.sleep {
        out.push_str(&format!(
            "  {:<12} {:>6} {:>6} {:>6} {:>6} {:>6}\n",
            night.date,
            night.total_hours,
            night.deep_hours,
            night.light_hours,
            night.rem_hours,
            format_optional(night.score)
        ));
    }
    out
}

fn format_optional(value: Option<f64>) -> String {
    value.map(|v| format!("{:.0}", v)).unwrap_or_else(|| "-".to_string())
}

fn highlight_non_finite(value: &str) -> String {
    if value.parse::<f64>().is_ok_and(f64::is_finite) {
        value.to_string()
    } else {
        value.yellow().to_string()
    }
}
