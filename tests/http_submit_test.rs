//! HttpBackend against a local stand-in for the form endpoint.
//!
//! Each test spins up an Axum server on a random port that answers the way
//! the spreadsheet script does (or misbehaves like it sometimes does).

use std::sync::{Arc, Mutex};
use std::time::Duration;

use axum::{extract::State, http::StatusCode, routing::post, Json, Router};
use pretty_assertions::assert_eq;
use serde_json::Value;
use tokio::net::TcpListener;

use rsvp::config::SubmitConfig;
use rsvp::response::{Beverage, Companion, Dietary, Guest, Submission};
use rsvp::submit::{submit, HttpBackend, SubmitOutcome};

type Received = Arc<Mutex<Vec<Value>>>;

/// Start a server that records each JSON body and answers with `status` and `reply`
async fn start_endpoint(status: StatusCode, reply: &'static str) -> (String, Received) {
    let received: Received = Arc::new(Mutex::new(Vec::new()));

    let app = Router::new()
        .route(
            "/exec",
            post(move |State(store): State<Received>, Json(body): Json<Value>| async move {
                store.lock().unwrap().push(body);
                (status, reply)
            }),
        )
        .with_state(Arc::clone(&received));

    let listener = TcpListener::bind("127.0.0.1:0").await.unwrap();
    let port = listener.local_addr().unwrap().port();
    tokio::spawn(async move {
        axum::serve(listener, app).await.unwrap();
    });

    (format!("http://127.0.0.1:{port}/exec"), received)
}

fn backend(endpoint: String) -> HttpBackend {
    HttpBackend::new(&SubmitConfig {
        endpoint,
        timeout_seconds: 5,
    })
    .unwrap()
}

fn answers() -> Submission {
    Submission {
        name: Guest::Millena,
        companion: Companion::Alone,
        beverage: Beverage::Shared,
        dietary: Dietary::SausageMandatory,
    }
}

#[tokio::test]
async fn posts_the_record_as_json() {
    let (endpoint, received) = start_endpoint(StatusCode::OK, r#"{"result":"success"}"#).await;

    let outcome = submit(&backend(endpoint), &answers()).await;
    assert_eq!(outcome, SubmitOutcome::Accepted);

    let bodies = received.lock().unwrap().clone();
    assert_eq!(
        bodies,
        vec![serde_json::json!({
            "nome": "Millena",
            "acompanhante": "sozinho",
            "chopp": "rachar",
            "comida": "linguica",
        })]
    );
}

#[tokio::test]
async fn endpoint_error_is_rejected_with_its_message() {
    let (endpoint, _) =
        start_endpoint(StatusCode::OK, r#"{"result":"error","error":"planilha cheia"}"#).await;

    let outcome = submit(&backend(endpoint), &answers()).await;
    assert_eq!(outcome, SubmitOutcome::Rejected("planilha cheia".to_string()));
}

#[tokio::test]
async fn html_reply_is_treated_as_success() {
    let (endpoint, _) = start_endpoint(StatusCode::OK, "<html><body>Moved Temporarily</body></html>").await;

    let outcome = submit(&backend(endpoint), &answers()).await;
    assert_eq!(outcome, SubmitOutcome::Accepted);
}

#[tokio::test]
async fn status_code_does_not_decide_the_outcome() {
    let (endpoint, _) =
        start_endpoint(StatusCode::INTERNAL_SERVER_ERROR, r#"{"result":"success"}"#).await;

    let outcome = submit(&backend(endpoint), &answers()).await;
    assert_eq!(outcome, SubmitOutcome::Accepted);
}

#[tokio::test]
async fn closed_port_is_a_transport_failure() {
    // Bind and drop to get a port nobody listens on
    let listener = TcpListener::bind("127.0.0.1:0").await.unwrap();
    let port = listener.local_addr().unwrap().port();
    drop(listener);

    let outcome = tokio::time::timeout(
        Duration::from_secs(10),
        submit(&backend(format!("http://127.0.0.1:{port}/exec")), &answers()),
    )
    .await
    .unwrap();
    assert_eq!(outcome, SubmitOutcome::TransportFailed);
}

#[test]
fn rejects_an_unparseable_endpoint() {
    let result = HttpBackend::new(&SubmitConfig {
        endpoint: "not a url".to_string(),
        timeout_seconds: 5,
    });
    assert!(result.is_err());
}
