//! Snapshot tests using the insta crate.
//!
//! Decisions serialize with the rating service's status vocabulary; these
//! snapshots pin that wire shape.
//!
//! To update snapshots after intentional changes:
//! ```sh
//! cargo insta test --accept
//! ```

use heartrate::types::{Decision, SwipeLabel};

#[test]
fn snapshot_decisions() {
    let decisions = vec![
        Decision::None,
        Decision::Rate { stars: 3 },
        Decision::DontKnow,
        Decision::DontCare,
    ];
    insta::assert_json_snapshot!(decisions, @r#"
    [
      {
        "status": "NONE"
      },
      {
        "status": "RATED",
        "stars": 3
      },
      {
        "status": "DONT_KNOW"
      },
      {
        "status": "DONT_CARE"
      }
    ]
    "#);
}

#[test]
fn snapshot_labels() {
    let labels = vec![SwipeLabel::Like, SwipeLabel::Nope, SwipeLabel::DontCare];
    insta::assert_json_snapshot!(labels, @r#"
    [
      "like",
      "nope",
      "dontCare"
    ]
    "#);
}

#[test]
fn test_decision_deserializes_from_service_status() {
    let decision: Decision = serde_json::from_str(r#"{"status":"RATED","stars":5}"#).unwrap();
    assert_eq!(decision, Decision::Rate { stars: 5 });
    let decision: Decision = serde_json::from_str(r#"{"status":"DONT_CARE"}"#).unwrap();
    assert_eq!(decision, Decision::DontCare);
}
