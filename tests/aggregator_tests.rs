use fitdash::aggregator::{
    build_daily_rollup, build_heart_rate_series, build_sleep_series, build_type_distribution,
    calculate_summary,
};
use fitdash::parser::{ActivityRecord, DailyStatRecord, SleepRecord};
use pretty_assertions::assert_eq;

fn activity(
    start_time: Option<&str>,
    activity_type: Option<&str>,
    distance: Option<f64>,
    duration: Option<f64>,
) -> ActivityRecord {
    ActivityRecord {
        activity_id: Some("1".to_string()),
        start_time: start_time.map(str::to_string),
        activity_type: activity_type.map(str::to_string),
        distance,
        duration,
        ..Default::default()
    }
}

fn day(date: &str, steps: Option<f64>, resting_hr: Option<f64>) -> DailyStatRecord {
    DailyStatRecord {
        date: Some(date.to_string()),
        steps,
        resting_hr,
        min_hr: Some(45.0),
        max_hr: Some(170.0),
    }
}

#[test]
fn test_summary_example() {
    let activities = vec![
        ActivityRecord {
            activity_id: Some("a".to_string()),
            distance: Some(1000.0),
            duration: Some(3600.0),
            calories: Some(100.0),
            avg_hr: Some(120.0),
            ..Default::default()
        },
        ActivityRecord {
            activity_id: Some("b".to_string()),
            distance: Some(2000.0),
            duration: Some(1800.0),
            calories: Some(50.0),
            avg_hr: Some(140.0),
            ..Default::default()
        },
    ];

    let card = calculate_summary(&activities, &[]).formatted();

    assert_eq!(card.total_activities, 2);
    assert_eq!(card.total_distance, "3.0");
    assert_eq!(card.total_duration, "1.5");
    assert_eq!(card.total_calories, "150");
    assert_eq!(card.avg_heart_rate, "130");
}

#[test]
fn test_empty_activities_average_is_not_finite() {
    let stats = calculate_summary(&[], &[day("2024-03-01", Some(8000.0), None)]);

    assert_eq!(stats.activity_count, 0);
    assert_eq!(stats.total_distance_km, 0.0);
    assert!(stats.total_distance_km.is_sign_positive());
    assert_eq!(stats.formatted().total_distance, "0.0");
    assert_eq!(stats.formatted().total_duration, "0.0");
    assert_eq!(stats.formatted().total_calories, "0");
    assert!(!stats.avg_heart_rate.is_finite());
    assert!(stats.avg_heart_rate.is_nan());
    assert_eq!(stats.formatted().avg_heart_rate, "NaN");
    assert_eq!(stats.avg_daily_steps, 8000.0);
}

#[test]
fn test_empty_daily_stats_steps_not_finite() {
    let stats = calculate_summary(&[], &[]);
    assert!(stats.avg_daily_steps.is_nan());
}

#[test]
fn test_steps_average_counts_missing_as_zero() {
    let days = vec![
        day("2024-03-01", Some(10000.0), None),
        day("2024-03-02", None, None),
    ];
    let stats = calculate_summary(&[], &days);
    assert_eq!(stats.avg_daily_steps, 5000.0);
    assert_eq!(stats.formatted().avg_steps, "5000");
}

#[test]
fn test_summary_distance_matches_daily_total() {
    let activities = vec![
        activity(Some("2024-03-01 07:00:00"), None, Some(5200.0), None),
        activity(Some("2024-03-01 18:00:00"), None, Some(3100.0), None),
        activity(Some("2024-03-04 07:00:00"), None, None, None),
        activity(Some("2024-03-05 07:00:00"), None, Some(10000.0), None),
    ];

    let summary = calculate_summary(&activities, &[]);
    let daily_total: f64 = build_daily_rollup(&activities)
        .iter()
        .map(|d| d.distance_km)
        .sum();

    assert!((summary.total_distance_km - daily_total).abs() < 1e-9);
    assert!((summary.total_distance_km - 18.3).abs() < 1e-9);
}

#[test]
fn test_same_day_activities_grouped() {
    let activities = vec![
        activity(Some("2024-03-01 07:00:00"), Some("running"), Some(5000.0), Some(1800.0)),
        activity(Some("2024-03-01 18:30:00"), Some("cycling"), Some(20000.0), Some(3600.0)),
    ];

    let days = build_daily_rollup(&activities);

    assert_eq!(days.len(), 1);
    assert_eq!(days[0].date, "2024-03-01");
    assert_eq!(days[0].count, 2);
    assert_eq!(days[0].distance_km, 25.0);
    assert_eq!(days[0].duration_hours, 1.5);
}

#[test]
fn test_activity_without_start_time_dropped() {
    let activities = vec![
        activity(None, Some("running"), Some(5000.0), None),
        activity(Some("2024-03-02 07:00:00"), Some("running"), Some(1000.0), None),
    ];

    let days = build_daily_rollup(&activities);

    assert_eq!(days.len(), 1);
    assert_eq!(days[0].count, 1);
    assert_eq!(days[0].distance_km, 1.0);
}

#[test]
fn test_daily_rollup_chronological_for_unpadded_dates() {
    let activities = vec![
        activity(Some("2024-10-01 07:00:00"), None, None, None),
        activity(Some("2024-9-30 07:00:00"), None, None, None),
    ];

    let dates: Vec<String> = build_daily_rollup(&activities)
        .into_iter()
        .map(|d| d.date)
        .collect();

    assert_eq!(dates, vec!["2024-9-30", "2024-10-01"]);
}

#[test]
fn test_type_distribution_defaults_to_unknown() {
    let activities = vec![activity(None, None, Some(3000.0), None)];

    let shares = build_type_distribution(&activities);

    assert_eq!(shares.len(), 1);
    assert_eq!(shares[0].activity_type, "unknown");
    assert_eq!(shares[0].count, 1);
    assert_eq!(shares[0].distance_km, 3.0);
}

#[test]
fn test_type_distribution_first_seen_order() {
    let activities = vec![
        activity(None, Some("walking"), Some(1000.0), None),
        activity(None, Some("running"), Some(5000.0), None),
        activity(None, Some("running"), Some(5000.0), None),
        activity(None, Some("running"), Some(5000.0), None),
        activity(None, Some("cycling"), None, None),
        activity(None, Some("walking"), Some(2000.0), None),
    ];

    let shares = build_type_distribution(&activities);
    let order: Vec<(&str, u32)> = shares
        .iter()
        .map(|s| (s.activity_type.as_str(), s.count))
        .collect();

    assert_eq!(order, vec![("walking", 2), ("running", 3), ("cycling", 1)]);
    assert_eq!(shares[0].distance_km, 3.0);
    assert_eq!(shares[2].distance_km, 0.0);
}

#[test]
fn test_heart_rate_series_filters_missing_resting() {
    let days = vec![
        day("2024-03-01", None, Some(52.0)),
        day("2024-03-02", None, Some(0.0)),
        day("2024-03-03", None, None),
        day("2024-03-04", None, Some(55.0)),
    ];

    let series = build_heart_rate_series(&days);
    let dates: Vec<&str> = series.iter().map(|p| p.date.as_str()).collect();

    assert_eq!(dates, vec!["2024-03-01", "2024-03-04"]);
    assert_eq!(series[0].resting, 52.0);
    assert_eq!(series[0].min, Some(45.0));
    assert_eq!(series[0].max, Some(170.0));
}

#[test]
fn test_heart_rate_series_keeps_input_order() {
    let days = vec![
        day("2024-03-05", None, Some(50.0)),
        day("2024-03-01", None, Some(51.0)),
    ];

    let series = build_heart_rate_series(&days);
    assert_eq!(series[0].date, "2024-03-05");
    assert_eq!(series[1].date, "2024-03-01");
}

#[test]
fn test_sleep_series_example() {
    let nights = vec![SleepRecord {
        date: Some("2024-03-01".to_string()),
        total_sleep_seconds: Some(28800.0),
        deep_sleep_seconds: Some(3600.0),
        sleep_score: Some(85.0),
        ..Default::default()
    }];

    let series = build_sleep_series(&nights);

    assert_eq!(series.len(), 1);
    assert_eq!(series[0].date, "2024-03-01");
    assert_eq!(series[0].total_hours, "8.0");
    assert_eq!(series[0].deep_hours, "1.0");
    assert_eq!(series[0].light_hours, "0.0");
    assert_eq!(series[0].score, Some(85.0));
}
