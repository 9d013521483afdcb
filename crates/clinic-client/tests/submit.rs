use std::net::SocketAddr;
use std::sync::Arc;
use std::sync::atomic::{AtomicUsize, Ordering};

use axum::Router;
use axum::http::StatusCode;
use axum::routing::post;

use clinic_api::state::AppStateInner;
use clinic_client::{Form, IntakeClient, SubmitOutcome};
use clinic_db::Database;

async fn spawn(app: Router) -> SocketAddr {
    let listener = tokio::net::TcpListener::bind("127.0.0.1:0").await.unwrap();
    let addr = listener.local_addr().unwrap();
    tokio::spawn(async move {
        axum::serve(listener, app).await.unwrap();
    });
    addr
}

/// Real intake service on an ephemeral port.
async fn spawn_intake() -> (SocketAddr, Arc<AppStateInner>, tempfile::TempDir) {
    let site = tempfile::tempdir().unwrap();
    let state = AppStateInner::new(Database::open_in_memory().unwrap());
    let addr = spawn(clinic_api::router(state.clone(), site.path())).await;
    (addr, state, site)
}

fn filled_appointment() -> Form {
    let mut form = Form::appointment();
    form.set("name", "John Smith");
    form.set("email", "john@example.com");
    form.set("phone", "+1 (555) 123-4567");
    form.set("date", "2026-11-02");
    form.set("department", "Cardiology");
    form.set("doctor", "Dr. Walter White");
    form
}

#[tokio::test]
async fn appointment_is_sent_and_form_reset() {
    let (addr, state, _site) = spawn_intake().await;
    let client = IntakeClient::new(&format!("http://{}", addr)).unwrap();
    let mut form = filled_appointment();

    let outcome = client.submit(&mut form).await;

    let (notice, ack) = match outcome {
        SubmitOutcome::Sent { notice, ack } => (notice, ack),
        other => panic!("expected Sent, got {:?}", other),
    };
    assert_eq!(notice, "Appointment scheduled successfully!");
    assert_eq!(ack.message, "Appointment scheduled successfully");
    assert_eq!(ack.data["doctor"], "Dr. Walter White");
    assert!(form.fields.iter().all(|f| f.value.is_empty()));

    let stored = state.db.get_appointment(ack.id).unwrap().unwrap();
    assert_eq!(stored.phone, "+1 (555) 123-4567");
    // Optional field left blank is posted as an empty entry
    assert_eq!(stored.message.as_deref(), Some(""));
}

#[tokio::test]
async fn contact_message_is_sent() {
    let (addr, state, _site) = spawn_intake().await;
    let client = IntakeClient::new(&format!("http://{}", addr)).unwrap();

    let mut form = Form::contact();
    form.set("name", "Jane Doe");
    form.set("email", "jane@example.com");
    form.set("subject", "Question");
    form.set("message", "Hello");

    let outcome = client.submit(&mut form).await;

    assert!(outcome.is_sent());
    assert_eq!(outcome.notice(), "Your message has been sent. Thank you!");
    assert_eq!(state.db.count_contact_messages().unwrap(), 1);
}

#[tokio::test]
async fn invalid_form_never_reaches_the_server() {
    let hits = Arc::new(AtomicUsize::new(0));
    let counter = hits.clone();
    let app = Router::new().route(
        "/api/appointments",
        post(move || {
            let counter = counter.clone();
            async move {
                counter.fetch_add(1, Ordering::SeqCst);
                StatusCode::OK
            }
        }),
    );
    let addr = spawn(app).await;
    let client = IntakeClient::new(&format!("http://{}", addr)).unwrap();

    let mut form = filled_appointment();
    form.set("email", "john.example.com");
    form.set("phone", "call me");

    let outcome = client.submit(&mut form).await;

    let SubmitOutcome::Invalid { fields } = &outcome else {
        panic!("expected Invalid, got {:?}", outcome);
    };
    assert_eq!(fields, &vec!["email".to_string(), "phone".to_string()]);
    assert_eq!(outcome.notice(), "Please fill in all required fields correctly.");
    assert_eq!(hits.load(Ordering::SeqCst), 0);
    // Values are kept so the user can correct them
    assert_eq!(form.field("name").unwrap().value, "John Smith");
}

#[tokio::test]
async fn server_error_renders_generic_failure() {
    let app = Router::new().route(
        "/api/contact",
        post(|| async { (StatusCode::INTERNAL_SERVER_ERROR, "boom") }),
    );
    let addr = spawn(app).await;
    let client = IntakeClient::new(&format!("http://{}", addr)).unwrap();

    let mut form = Form::contact();
    form.set("name", "Jane Doe");
    form.set("email", "jane@example.com");
    form.set("subject", "Question");
    form.set("message", "Hello");

    let outcome = client.submit(&mut form).await;

    assert!(matches!(outcome, SubmitOutcome::Failed { .. }));
    assert_eq!(outcome.notice(), "An error occurred. Please try again.");
    assert_eq!(form.field("subject").unwrap().value, "Question");
}

#[tokio::test]
async fn unreachable_server_renders_generic_failure() {
    let listener = tokio::net::TcpListener::bind("127.0.0.1:0").await.unwrap();
    let addr = listener.local_addr().unwrap();
    drop(listener);

    let client = IntakeClient::new(&format!("http://{}", addr)).unwrap();
    let mut form = filled_appointment();

    let outcome = client.submit(&mut form).await;

    assert!(matches!(outcome, SubmitOutcome::Failed { .. }));
}
