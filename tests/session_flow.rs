use std::io::{BufRead, BufReader, Read, Write};
use std::net::{TcpListener, TcpStream};
use std::sync::mpsc::{Receiver, channel};
use std::thread;
use std::time::{Duration, Instant};

use practiceq::QuizApp;
use practiceq::config::Settings;
use practiceq::fetch::{FetchError, QuestionRequest, fetch_questions};
use practiceq::model::{AppState, Difficulty, QuestionType};

struct CapturedRequest {
    request_line: String,
    content_type: Option<String>,
    body: String,
}

/// Servidor HTTP de un solo uso: responde `status` + `body` y devuelve lo recibido.
fn one_shot_server(status: &'static str, body: &'static str) -> (String, Receiver<CapturedRequest>) {
    let listener = TcpListener::bind("127.0.0.1:0").expect("bind");
    let addr = listener.local_addr().expect("addr");
    let (tx, rx) = channel();

    thread::spawn(move || {
        let (stream, _) = listener.accept().expect("accept");
        let captured = read_request(&stream);
        let response = format!(
            "HTTP/1.1 {status}\r\nContent-Type: application/json\r\nContent-Length: {}\r\nConnection: close\r\n\r\n{body}",
            body.len()
        );
        let mut stream = stream;
        stream.write_all(response.as_bytes()).expect("write");
        stream.flush().ok();
        tx.send(captured).ok();
    });

    (format!("http://{addr}"), rx)
}

fn read_request(stream: &TcpStream) -> CapturedRequest {
    let mut reader = BufReader::new(stream);
    let mut request_line = String::new();
    reader.read_line(&mut request_line).expect("request line");

    let mut content_length = 0usize;
    let mut content_type = None;
    loop {
        let mut line = String::new();
        reader.read_line(&mut line).expect("header");
        let line = line.trim_end();
        if line.is_empty() {
            break;
        }
        if let Some((name, value)) = line.split_once(':') {
            match name.trim().to_ascii_lowercase().as_str() {
                "content-length" => content_length = value.trim().parse().unwrap_or(0),
                "content-type" => content_type = Some(value.trim().to_string()),
                _ => {}
            }
        }
    }

    let mut body = vec![0u8; content_length];
    reader.read_exact(&mut body).expect("body");
    CapturedRequest {
        request_line: request_line.trim_end().to_string(),
        content_type,
        body: String::from_utf8(body).expect("utf8 body"),
    }
}

/// Acepta la conexión y nunca responde.
fn silent_server(hold_for: Duration) -> String {
    let listener = TcpListener::bind("127.0.0.1:0").expect("bind");
    let addr = listener.local_addr().expect("addr");

    thread::spawn(move || {
        if let Ok((stream, _)) = listener.accept() {
            thread::sleep(hold_for);
            drop(stream);
        }
    });

    format!("http://{addr}")
}

fn closed_endpoint() -> String {
    let listener = TcpListener::bind("127.0.0.1:0").expect("bind");
    let addr = listener.local_addr().expect("addr");
    drop(listener);
    format!("http://{addr}")
}

fn settings_for(endpoint: String) -> Settings {
    Settings {
        endpoint,
        timeout_secs: 5,
    }
}

fn wait_until_loaded(app: &mut QuizApp) {
    let deadline = Instant::now() + Duration::from_secs(10);
    while app.is_loading() {
        assert!(Instant::now() < deadline, "la petición no terminó a tiempo");
        thread::sleep(Duration::from_millis(10));
        app.poll_fetch_result();
    }
}

const TWO_QUESTIONS: &str = r#"{"response": [
    {"type": "MCQ", "question": "2 + 2 = ?", "options": ["4", "5", "6"], "correct_answer": "4"},
    {"type": "Fill in the Blank", "question": "The borrow checker belongs to ___", "correct_answer": "Rust"}
]}"#;

#[test]
fn full_session_against_fake_service() {
    let (endpoint, captured) = one_shot_server("200 OK", TWO_QUESTIONS);
    let ctx = egui::Context::default();
    let mut app = QuizApp::new(settings_for(endpoint));

    app.config.topic = "Other".into();
    app.config.custom_topic = "   ".into();
    app.config.question_type = QuestionType::MultipleChoice;
    app.config.difficulty = Difficulty::Medium;
    app.config.question_count = "2".into();

    app.start_quiz(&ctx);
    assert_eq!(app.state, AppState::Loading);
    assert!(app.is_loading());

    // Segundo disparo mientras carga: no hace nada
    app.start_quiz(&ctx);

    wait_until_loaded(&mut app);
    assert_eq!(app.state, AppState::Answering);
    assert_eq!(app.questions.len(), 2);

    let request = captured.recv_timeout(Duration::from_secs(5)).expect("request");
    assert_eq!(request.request_line, "POST /get_questions HTTP/1.1");
    assert_eq!(request.content_type.as_deref(), Some("application/json"));
    let body: serde_json::Value = serde_json::from_str(&request.body).expect("json body");
    assert_eq!(
        body,
        serde_json::json!({
            "topic": "General Knowledge",
            "question_type": "Multiple Choice",
            "difficulty": "medium",
            "num_questions": 2
        })
    );

    app.record_answer(0, "4".into());
    app.record_answer(1, "rust".into());
    let result = app.submit().expect("graded");
    assert_eq!((result.score, result.total), (2, 2));
    assert_eq!(app.state, AppState::Graded);

    app.reset();
    assert_eq!(app.state, AppState::Configuring);
    assert!(app.questions.is_empty());
    assert!(app.answers.is_empty());
    assert_eq!(app.result(), None);
}

#[test]
fn network_failure_leaves_session_empty() {
    let ctx = egui::Context::default();
    let mut app = QuizApp::new(settings_for(closed_endpoint()));

    app.start_quiz(&ctx);
    wait_until_loaded(&mut app);

    assert_eq!(app.state, AppState::Configuring);
    assert!(app.questions.is_empty());
    assert!(!app.is_loading());
    assert!(!app.submitted);
    assert_eq!(app.score, 0);
    assert!(app.message.starts_with("Could not reach the question service"));
}

#[test]
fn retry_after_failure_keeps_configuration() {
    let ctx = egui::Context::default();
    let mut app = QuizApp::new(settings_for(closed_endpoint()));
    app.config.topic = "Rust".into();
    app.config.question_count = "1".into();

    app.start_quiz(&ctx);
    wait_until_loaded(&mut app);
    assert_eq!(app.state, AppState::Configuring);

    let (endpoint, _captured) = one_shot_server(
        "200 OK",
        r#"{"response": [{"type": "Fill in the Blank", "question": "Capital of France?", "correct_answer": "Paris"}]}"#,
    );
    app.settings.endpoint = endpoint;
    app.start_quiz(&ctx);
    wait_until_loaded(&mut app);

    assert_eq!(app.state, AppState::Answering);
    assert!(app.message.is_empty());
    assert_eq!(app.config.topic, "Rust");

    app.record_answer(0, "paris".into());
    assert_eq!(app.submit().map(|r| r.score), Some(1));
}

#[test]
fn zero_questions_yield_empty_session() {
    let (endpoint, captured) = one_shot_server("200 OK", r#"{"response": []}"#);
    let ctx = egui::Context::default();
    let mut app = QuizApp::new(settings_for(endpoint));
    app.config.question_count = "0".into();

    app.start_quiz(&ctx);
    wait_until_loaded(&mut app);

    let request = captured.recv_timeout(Duration::from_secs(5)).expect("request");
    assert!(request.body.contains("\"num_questions\":0"));
    assert_eq!(app.state, AppState::Answering);

    let result = app.submit().expect("graded");
    assert_eq!((result.score, result.total), (0, 0));
}

#[test]
fn malformed_body_is_reported_as_invalid_response() {
    let (endpoint, _captured) = one_shot_server("200 OK", "not json at all");
    let request = QuestionRequest {
        topic: "Databases".into(),
        question_type: QuestionType::FillInBlank,
        difficulty: Difficulty::Easy,
        num_questions: 1,
    };

    let err = fetch_questions(&settings_for(endpoint), &request).unwrap_err();
    assert!(err.is_malformed());
}

#[test]
fn service_error_detail_is_surfaced() {
    let (endpoint, _captured) =
        one_shot_server("400 Bad Request", r#"{"detail": "generation failed"}"#);
    let ctx = egui::Context::default();
    let mut app = QuizApp::new(settings_for(endpoint));

    app.start_quiz(&ctx);
    wait_until_loaded(&mut app);

    assert_eq!(app.state, AppState::Configuring);
    assert_eq!(
        app.message,
        FetchError::Http {
            status: 400,
            detail: Some("generation failed".into())
        }
        .to_string()
    );
}

#[test]
fn unanswered_request_times_out() {
    let ctx = egui::Context::default();
    let mut app = QuizApp::new(Settings {
        endpoint: silent_server(Duration::from_secs(8)),
        timeout_secs: 1,
    });

    let started = Instant::now();
    app.start_quiz(&ctx);
    wait_until_loaded(&mut app);

    assert!(started.elapsed() < Duration::from_secs(6));
    assert_eq!(app.state, AppState::Configuring);
    assert!(!app.is_loading());
    assert!(app.questions.is_empty());
    assert_eq!(app.message, FetchError::Timeout.to_string());
}
