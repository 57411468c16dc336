//! HTTP sink against a local tiny_http stand-in for the rating service.

use heartrate::sink::{DecisionSink, HttpDecisionSink, SinkError, Submission};
use heartrate::types::{Decision, RatingSubject};
use std::io::Read;
use std::sync::mpsc;
use std::thread::{self, JoinHandle};
use std::time::Duration;
use tiny_http::{Response, Server};
use uuid::Uuid;

/// What the stand-in server saw for one request
#[derive(Debug)]
struct Seen {
    method: String,
    url: String,
    body: String,
    authorization: Option<String>,
}

const NEXT_ITEM: &str =
    r#"{"id":"00000000-0000-0000-0000-0000000000aa","name":"Next item","imageUrl":null}"#;

/// Serve `count` requests, answering each with `status` (next-item queries get `NEXT_ITEM`).
fn serve(count: usize, status: u16) -> (String, JoinHandle<Vec<Seen>>) {
    let server = Server::http("127.0.0.1:0").unwrap();
    let addr = server.server_addr().to_ip().unwrap();
    let handle = thread::spawn(move || {
        let mut seen = Vec::new();
        for _ in 0..count {
            let mut request = server.recv().unwrap();
            let mut body = String::new();
            request.as_reader().read_to_string(&mut body).unwrap();
            let authorization = request
                .headers()
                .iter()
                .find(|h| h.field.equiv("Authorization"))
                .map(|h| h.value.as_str().to_string());
            let url = request.url().to_string();
            seen.push(Seen {
                method: request.method().to_string(),
                url: url.clone(),
                body,
                authorization,
            });
            let payload = if url.ends_with("/next-for-user") { NEXT_ITEM } else { "{}" };
            request
                .respond(Response::from_string(payload).with_status_code(status))
                .unwrap();
        }
        seen
    });
    (format!("http://{addr}"), handle)
}

#[test]
fn test_rating_posts_star_count() {
    let (base, server) = serve(1, 200);
    let sink = HttpDecisionSink::new(base, Some("token-123".into())).unwrap();
    let id = Uuid::new_v4();
    let submission = Submission::new(id, Decision::Rate { stars: 4 }).unwrap();

    sink.post_decision(&submission).unwrap();

    let seen = server.join().unwrap();
    assert_eq!(seen[0].method, "POST");
    assert_eq!(seen[0].url, format!("/api/items/{id}/rate"));
    assert_eq!(seen[0].body, "4");
    assert_eq!(seen[0].authorization.as_deref(), Some("Bearer token-123"));
}

#[test]
fn test_dont_know_and_dont_care_paths() {
    let (base, server) = serve(2, 200);
    let sink = HttpDecisionSink::new(base, None).unwrap();
    let id = Uuid::new_v4();

    sink.post_decision(&Submission::new(id, Decision::DontKnow).unwrap())
        .unwrap();
    sink.post_decision(&Submission::new(id, Decision::DontCare).unwrap())
        .unwrap();

    let seen = server.join().unwrap();
    assert_eq!(seen[0].url, format!("/api/items/{id}/dont-know"));
    assert_eq!(seen[1].url, format!("/api/items/{id}/dont-care"));
    assert!(seen.iter().all(|s| s.authorization.is_none()));
}

#[test]
fn test_error_status_surfaces() {
    let (base, server) = serve(1, 404);
    let sink = HttpDecisionSink::new(base, None).unwrap();
    let submission = Submission::new(Uuid::new_v4(), Decision::DontCare).unwrap();

    let err = sink.post_decision(&submission).unwrap_err();
    assert!(matches!(err, SinkError::Status { status: 404, .. }));
    server.join().unwrap();
}

#[test]
fn test_submit_is_fire_and_forget_and_delivers_next_item() {
    let (base, server) = serve(2, 200);
    let (tx, rx) = mpsc::channel::<RatingSubject>();
    let sink = HttpDecisionSink::new(base, None).unwrap().with_next_items(tx);

    sink.submit(Submission::new(Uuid::new_v4(), Decision::Rate { stars: 2 }).unwrap());

    let next = rx.recv_timeout(Duration::from_secs(10)).unwrap();
    assert_eq!(next.name, "Next item");
    assert_eq!(next.image_url, None);

    let seen = server.join().unwrap();
    assert_eq!(seen[0].body, "2");
    assert_eq!(seen[1].method, "GET");
    assert_eq!(seen[1].url, "/api/items/next-for-user");
}
