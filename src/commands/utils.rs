use crate::output::read_dashboard;
use crate::utils::config::SCHEMA_VERSION;
use anyhow::Result;
use std::path::PathBuf;

/// Validate a dashboard JSON file
pub fn validate_dashboard_file(file_path: PathBuf) -> Result<()> {
    println!("Validating dashboard: {}", file_path.display());

    let dashboard = read_dashboard(&file_path)?;

    println!("✓ Valid dashboard JSON");
    println!("  Version: {}", dashboard.version);
    println!("  Generated: {}", dashboard.generated_at);
    println!(
        "  Records: {} activities, {} daily stats, {} nights",
        dashboard.record_counts.activities,
        dashboard.record_counts.daily_stats,
        dashboard.record_counts.sleep
    );
    println!("  Days with activity: {}", dashboard.daily_activity.len());
    println!("  Activity types: {}", dashboard.activity_types.len());

    Ok(())
}

/// Display schema information
pub fn display_schema(show_details: bool) {
    println!("fitdash Dashboard Schema");
    println!("Current Version: {}", SCHEMA_VERSION);
    println!();

    if show_details {
        println!("Schema Structure:");
        println!("  version: string            - Schema version (e.g., '1.0.0')");
        println!("  generatedAt: string        - RFC 3339 timestamp");
        println!("  recordCounts: object       - Input records per file");
        println!("  summary: object            - Display strings for the summary cards");
        println!("    totalActivities: number");
        println!("    totalDistance: string    - km, one decimal");
        println!("    totalDuration: string    - hours, one decimal");
        println!("    totalCalories: string    - rounded");
        println!("    avgHeartRate: string     - rounded, 'NaN' with no activities");
        println!("    avgSteps: string         - rounded, 'NaN' with no daily stats");
        println!("  dailyActivity: array       - Per-day rollup, chronological");
        println!("    date, count, distanceKm, durationHours, calories");
        println!("  activityTypes: array       - Per-type rollup, first-seen order");
        println!("    activityType, count, distanceKm");
        println!("  heartRate: array           - Days with a resting heart rate");
        println!("    date, resting, min?, max?");
        println!("  sleep: array               - Nightly sleep, hours as strings");
        println!("    date, totalHours, deepHours, lightHours, remHours, score?");
    } else {
        println!("Use --show for detailed schema information");
    }
}

/// Display version information
pub fn display_version() {
    println!("fitdash v{}", env!("CARGO_PKG_VERSION"));
    println!("Dashboard Schema: v{}", SCHEMA_VERSION);
    println!();
    println!("Activity, daily health and sleep dashboards from fitness CSV exports.");
}
