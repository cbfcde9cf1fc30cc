use std::sync::{Arc, Mutex};
use std::time::Duration;

use axum::extract::State;
use axum::http::StatusCode;
use axum::response::{IntoResponse, Response};
use axum::routing::post;
use axum::{Json, Router};
use serde_json::{Value, json};

use ocrclean::application::ports::{Summarizer, SummarizerError};
use ocrclean::domain::{GenerationRequest, SummaryConfig};
use ocrclean::infrastructure::summarization::{HttpSummarizer, MockSummarizer};

type Received = Arc<Mutex<Vec<Value>>>;

async fn summarize_inputs(State(received): State<Received>, Json(body): Json<Value>) -> Response {
    let inputs = body["inputs"].as_array().cloned().unwrap_or_default();
    received.lock().unwrap().push(body);
    let records: Vec<Value> = inputs
        .iter()
        .map(|input| json!({ "summary_text": format!("short {}", input.as_str().unwrap_or("")) }))
        .collect();
    Json(records).into_response()
}

async fn too_many_requests() -> Response {
    StatusCode::TOO_MANY_REQUESTS.into_response()
}

async fn server_error() -> Response {
    (StatusCode::INTERNAL_SERVER_ERROR, "model crashed").into_response()
}

async fn spawn(router: Router) -> String {
    let listener = tokio::net::TcpListener::bind("127.0.0.1:0").await.unwrap();
    let addr = listener.local_addr().unwrap();
    tokio::spawn(async move {
        axum::serve(listener, router).await.unwrap();
    });
    format!("http://{addr}/summarize")
}

fn chunks(count: usize) -> Vec<String> {
    (0..count).map(|i| format!("chunk {i}")).collect()
}

fn request(chunk_count: usize) -> GenerationRequest {
    GenerationRequest::for_chunks(
        &SummaryConfig {
            batch_size: 2,
            ..SummaryConfig::default()
        },
        chunk_count,
    )
}

#[tokio::test]
async fn given_more_chunks_than_batch_size_when_summarizing_then_sends_batches_in_order() {
    let received: Received = Arc::default();
    let router = Router::new()
        .route("/summarize", post(summarize_inputs))
        .with_state(Arc::clone(&received));
    let endpoint = spawn(router).await;
    let summarizer = HttpSummarizer::new(endpoint, None, Duration::from_secs(5)).unwrap();

    let records = summarizer
        .summarize_batch(&chunks(3), &request(3))
        .await
        .unwrap();

    let texts: Vec<&str> = records.iter().filter_map(|r| r.non_empty_text()).collect();
    assert_eq!(texts, vec!["short chunk 0", "short chunk 1", "short chunk 2"]);

    let bodies = received.lock().unwrap().clone();
    assert_eq!(bodies.len(), 2);
    assert_eq!(bodies[0]["inputs"].as_array().unwrap().len(), 2);
    assert_eq!(bodies[1]["inputs"].as_array().unwrap().len(), 1);
    assert_eq!(bodies[0]["parameters"]["max_length"], 160);
    assert_eq!(bodies[0]["parameters"]["do_sample"], false);
}

#[tokio::test]
async fn given_rate_limited_endpoint_when_summarizing_then_returns_rate_limited() {
    let endpoint = spawn(Router::new().route("/summarize", post(too_many_requests))).await;
    let summarizer = HttpSummarizer::new(endpoint, None, Duration::from_secs(5)).unwrap();

    let result = summarizer.summarize_batch(&chunks(1), &request(1)).await;

    assert!(matches!(result, Err(SummarizerError::RateLimited)));
}

#[tokio::test]
async fn given_failing_endpoint_when_summarizing_then_error_carries_status_and_body() {
    let endpoint = spawn(Router::new().route("/summarize", post(server_error))).await;
    let summarizer = HttpSummarizer::new(endpoint, None, Duration::from_secs(5)).unwrap();

    let result = summarizer.summarize_batch(&chunks(1), &request(1)).await;

    match result {
        Err(SummarizerError::InferenceFailed(message)) => {
            assert!(message.contains("500"));
            assert!(message.contains("model crashed"));
        }
        other => panic!("expected inference failure, got {other:?}"),
    }
}

#[tokio::test]
async fn given_mock_summarizer_when_summarizing_then_keeps_leading_words() {
    let summarizer = MockSummarizer::new();
    let request = GenerationRequest {
        max_length: 2,
        ..request(1)
    };

    let records = summarizer
        .summarize_batch(&["alpha beta gamma delta".to_string()], &request)
        .await
        .unwrap();

    assert_eq!(records[0].non_empty_text(), Some("alpha beta"));
}
