//! Single-job processing against mock servers

use crate::{closed_port_url, create_processor, serve_raw_once};
use link_survey::job::Failure;
use link_survey::{Job, Outcome};
use std::time::{Duration, Instant};
use wiremock::matchers::{any, method, path};
use wiremock::{Mock, MockServer, ResponseTemplate};

const TIMEOUT: Duration = Duration::from_secs(5);

fn html(body: &str) -> ResponseTemplate {
    ResponseTemplate::new(200).set_body_raw(body.as_bytes().to_vec(), "text/html; charset=utf-8")
}

#[tokio::test]
async fn test_blank_fields_make_no_request() {
    let mock_server = MockServer::start().await;

    Mock::given(any())
        .respond_with(ResponseTemplate::new(200))
        .expect(0)
        .mount(&mock_server)
        .await;

    let processor = create_processor(TIMEOUT);

    let blank_name = Job::new("   ", format!("{}/", mock_server.uri()));
    let result = processor.process(blank_name.clone()).await;
    assert!(!result.success);
    assert_eq!(result.status_code, None);
    assert_eq!(result.title, None);
    assert_eq!(result.duration, None);
    assert_eq!(result.job, blank_name);

    let blank_url = Job::new("Named", " \t ");
    let result = processor.process(blank_url).await;
    assert!(!result.success);
    assert_eq!(result.status_code, None);

    mock_server.verify().await;
}

#[tokio::test]
async fn test_not_found_keeps_status_and_name() {
    let mock_server = MockServer::start().await;

    Mock::given(method("GET"))
        .and(path("/missing"))
        .respond_with(
            ResponseTemplate::new(404)
                .set_body_raw("<title>Not Found</title>".as_bytes().to_vec(), "text/html"),
        )
        .mount(&mock_server)
        .await;

    let processor = create_processor(TIMEOUT);
    let job = Job::new("Missing Page", format!("{}/missing", mock_server.uri()));

    let outcome = processor.process_outcome(job).await;
    assert!(matches!(
        outcome,
        Outcome::Failed {
            reason: Failure::HttpStatus(404),
            ..
        }
    ));

    let result = outcome.into_result();
    assert!(!result.success);
    assert_eq!(result.status_code, Some(404));
    assert_eq!(result.title.as_deref(), Some("Missing Page"));
    assert!(result.duration.is_some());
}

#[tokio::test]
async fn test_server_error_is_failure_with_status() {
    let mock_server = MockServer::start().await;

    Mock::given(method("GET"))
        .respond_with(ResponseTemplate::new(503))
        .mount(&mock_server)
        .await;

    let processor = create_processor(TIMEOUT);
    let result = processor
        .process(Job::new("Busy", format!("{}/", mock_server.uri())))
        .await;

    assert!(!result.success);
    assert_eq!(result.status_code, Some(503));
    assert_eq!(result.title.as_deref(), Some("Busy"));
}

#[tokio::test]
async fn test_json_response_succeeds_with_suggested_name() {
    let mock_server = MockServer::start().await;

    Mock::given(method("GET"))
        .and(path("/todos/1"))
        .respond_with(ResponseTemplate::new(200).set_body_raw(
            r#"{"userId": 1, "id": 1, "title": "delectus aut autem"}"#
                .as_bytes()
                .to_vec(),
            "application/json",
        ))
        .mount(&mock_server)
        .await;

    let processor = create_processor(TIMEOUT);
    let result = processor
        .process(Job::new(
            "This is a test of getting, JSON",
            format!("{}/todos/1", mock_server.uri()),
        ))
        .await;

    assert!(result.success);
    assert_eq!(result.status_code, Some(200));
    assert_eq!(
        result.title.as_deref(),
        Some("This is a test of getting, JSON")
    );
}

#[tokio::test]
async fn test_title_fallback_chain() {
    let mock_server = MockServer::start().await;

    Mock::given(method("GET"))
        .and(path("/both"))
        .respond_with(html(
            "<html><head><title>  Page Title  </title></head><body><h1>Heading</h1></body></html>",
        ))
        .mount(&mock_server)
        .await;

    Mock::given(method("GET"))
        .and(path("/h1-only"))
        .respond_with(html(
            "<html><head></head><body><h1>\n  Only Heading\n</h1></body></html>",
        ))
        .mount(&mock_server)
        .await;

    Mock::given(method("GET"))
        .and(path("/neither"))
        .respond_with(html("<html><body><p>No headings here</p></body></html>"))
        .mount(&mock_server)
        .await;

    let processor = create_processor(TIMEOUT);
    let base = mock_server.uri();

    let both = processor
        .process(Job::new("Both", format!("{}/both", base)))
        .await;
    let h1_only = processor
        .process(Job::new("H1", format!("{}/h1-only", base)))
        .await;
    let neither = processor
        .process(Job::new("Fallback Name", format!("{}/neither", base)))
        .await;

    assert_eq!(both.title.as_deref(), Some("Page Title"));
    assert_eq!(h1_only.title.as_deref(), Some("Only Heading"));
    assert_eq!(neither.title.as_deref(), Some("Fallback Name"));

    for result in [&both, &h1_only, &neither] {
        assert!(result.success);
        assert_eq!(result.status_code, Some(200));
    }
}

#[tokio::test]
async fn test_uppercase_content_type_is_html() {
    let mock_server = MockServer::start().await;

    Mock::given(method("GET"))
        .respond_with(ResponseTemplate::new(200).set_body_raw(
            "<title>Shouting</title>".as_bytes().to_vec(),
            "TEXT/HTML",
        ))
        .mount(&mock_server)
        .await;

    let processor = create_processor(TIMEOUT);
    let result = processor
        .process(Job::new("Quiet", format!("{}/", mock_server.uri())))
        .await;

    assert_eq!(result.title.as_deref(), Some("Shouting"));
}

#[tokio::test]
async fn test_timeout_enforced() {
    let mock_server = MockServer::start().await;

    Mock::given(method("GET"))
        .respond_with(html("<title>Too Late</title>").set_delay(Duration::from_secs(5)))
        .mount(&mock_server)
        .await;

    let timeout = Duration::from_millis(500);
    let processor = create_processor(timeout);

    let start = Instant::now();
    let outcome = processor
        .process_outcome(Job::new("Slow", format!("{}/", mock_server.uri())))
        .await;
    let elapsed = start.elapsed();

    assert!(matches!(
        outcome,
        Outcome::Failed {
            reason: Failure::Transport(_),
            ..
        }
    ));
    assert!(!outcome.result().success);
    assert_eq!(outcome.result().status_code, None);
    assert!(
        elapsed >= Duration::from_millis(450),
        "returned too early: {:?}",
        elapsed
    );
    assert!(
        elapsed < Duration::from_secs(3),
        "returned too late: {:?}",
        elapsed
    );
}

#[tokio::test]
async fn test_connection_refused_is_transport_failure() {
    let processor = create_processor(TIMEOUT);
    let outcome = processor
        .process_outcome(Job::new("Nobody Home", closed_port_url()))
        .await;

    assert!(matches!(
        outcome,
        Outcome::Failed {
            reason: Failure::Transport(_),
            ..
        }
    ));

    let result = outcome.into_result();
    assert!(!result.success);
    assert_eq!(result.status_code, None);
    assert_eq!(result.title, None);
}

#[tokio::test]
async fn test_processing_is_repeatable() {
    let mock_server = MockServer::start().await;

    Mock::given(method("GET"))
        .respond_with(html("<title>Stable</title>"))
        .expect(2)
        .mount(&mock_server)
        .await;

    let processor = create_processor(TIMEOUT);
    let job = Job::new("Stable Site", format!("{}/", mock_server.uri()));

    let first = processor.process(job.clone()).await;
    let second = processor.process(job).await;

    assert_eq!(first.success, second.success);
    assert_eq!(first.status_code, second.status_code);
    assert_eq!(first.title, second.title);
    assert_eq!(first.title.as_deref(), Some("Stable"));
}

#[tokio::test]
async fn test_user_agent_sent() {
    let mock_server = MockServer::start().await;

    Mock::given(method("GET"))
        .and(wiremock::matchers::header("user-agent", "TestSurvey/1.0"))
        .respond_with(html("<title>Agent Seen</title>"))
        .expect(1)
        .mount(&mock_server)
        .await;

    let processor = create_processor(TIMEOUT);
    let result = processor
        .process(Job::new("Agent", format!("{}/", mock_server.uri())))
        .await;

    assert_eq!(result.title.as_deref(), Some("Agent Seen"));
}

#[tokio::test]
async fn test_non_ascii_content_type_still_html() {
    let mut response = b"HTTP/1.1 200 OK\r\nContent-Type: text/html; x=".to_vec();
    response.push(0xe9);
    let body = b"<title>Latin</title>";
    response.extend_from_slice(
        format!("\r\nContent-Length: {}\r\nConnection: close\r\n\r\n", body.len()).as_bytes(),
    );
    response.extend_from_slice(body);

    let url = serve_raw_once(response);
    let processor = create_processor(TIMEOUT);

    let outcome = processor.process_outcome(Job::new("Fallback", url)).await;

    assert!(matches!(outcome, Outcome::Succeeded(_)));
    let result = outcome.into_result();
    assert!(result.success);
    assert_eq!(result.status_code, Some(200));
    assert_eq!(result.title.as_deref(), Some("Latin"));
}

#[tokio::test]
async fn test_truncated_html_body_is_diagnostic() {
    let response = b"HTTP/1.1 200 OK\r\n\
Content-Type: text/html\r\n\
Content-Length: 1000\r\n\
Connection: close\r\n\
\r\n\
<html><title>Cut"
        .to_vec();

    let url = serve_raw_once(response);
    let processor = create_processor(TIMEOUT);
    let job = Job::new("Short Read", url);

    let outcome = processor.process_outcome(job.clone()).await;

    assert!(matches!(outcome, Outcome::SucceededWithDiagnostic { .. }));
    let result = outcome.into_result();
    assert!(result.success);
    assert_eq!(result.status_code, Some(200));
    assert_eq!(result.title.as_deref(), Some("Short Read"));
    assert!(result.duration.is_some());
    assert_eq!(result.job, job);
}
