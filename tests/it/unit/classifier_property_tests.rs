//! Sweeps over the displacement domain for the classifier and projector.

use crate::helpers::scenario_config;
use heartrate::gesture::{preview_label, preview_rating, project, resolve, ThresholdConfig};
use heartrate::types::{Decision, Tint};

fn sweep() -> impl Iterator<Item = f32> {
    (-1200..=1200).map(|step| step as f32 * 0.5)
}

fn configs() -> Vec<ThresholdConfig> {
    vec![
        scenario_config(),
        ThresholdConfig::with_thresholds(40.0, 41.0, 500.0),
        ThresholdConfig::with_thresholds(120.0, 300.0, 80.0),
    ]
}

#[test]
fn test_rate_only_past_dont_know_and_never_zero() {
    for config in configs() {
        for d in sweep() {
            if let Decision::Rate { stars } = resolve(d, &config) {
                assert!(d > config.dont_know_threshold, "rated at {d}");
                assert!((1..=5).contains(&stars), "{stars} stars at {d}");
            }
        }
    }
}

#[test]
fn test_branches_match_expected_region() {
    for config in configs() {
        for d in sweep() {
            let expected = if d > config.dont_know_threshold {
                "rate"
            } else if d < -config.dont_care_threshold {
                "dont_care"
            } else if d < -config.dont_know_threshold {
                "dont_know"
            } else {
                "none"
            };
            let actual = match resolve(d, &config) {
                Decision::Rate { .. } => "rate",
                Decision::DontCare => "dont_care",
                Decision::DontKnow => "dont_know",
                Decision::None => "none",
            };
            assert_eq!(actual, expected, "displacement {d}");
        }
    }
}

#[test]
fn test_preview_rating_monotonic() {
    for config in configs() {
        let mut last = 0;
        for d in sweep().filter(|d| *d > 0.0) {
            let rating = preview_rating(d, &config);
            assert!(rating >= last, "preview dropped at {d}");
            last = rating;
        }
    }
}

#[test]
fn test_preview_label_agrees_with_feedback() {
    for config in configs() {
        for d in sweep() {
            assert_eq!(project(d, &config).visible_label, preview_label(d, &config));
        }
    }
}

#[test]
fn test_rotation_bounded() {
    for config in configs() {
        for d in sweep() {
            let rotation = project(d, &config).rotation_degrees;
            assert!(rotation.abs() <= config.max_rotation_degrees, "{rotation} at {d}");
        }
    }
}

#[test]
fn test_purple_wins_over_red() {
    let config = scenario_config();
    for d in sweep().filter(|d| *d < -config.dont_care_threshold / 4.0) {
        assert_eq!(project(d, &config).tint, Some(Tint::Purple), "at {d}");
    }
}
