use crate::config::Settings;
use crate::model::{Difficulty, Question, QuestionType};
use serde::{Deserialize, Serialize};
use thiserror::Error;

#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct QuestionRequest {
    pub topic: String,
    pub question_type: QuestionType,
    pub difficulty: Difficulty,
    pub num_questions: u32,
}

#[derive(Debug, Deserialize)]
struct QuestionResponse {
    response: Vec<Question>,
}

#[derive(Debug, Deserialize)]
struct ErrorBody {
    detail: String,
}

#[derive(Error, Debug, Clone, PartialEq, Eq)]
pub enum FetchError {
    #[error("Could not reach the question service: {0}")]
    Network(String),
    #[error("The question service did not answer in time")]
    Timeout,
    #[error("The question service returned HTTP {status}{}", detail_suffix(.detail))]
    Http { status: u16, detail: Option<String> },
    #[error("The question service sent an invalid response: {0}")]
    Malformed(String),
}

fn detail_suffix(detail: &Option<String>) -> String {
    detail.as_deref().map(|d| format!(": {d}")).unwrap_or_default()
}

impl FetchError {
    pub fn is_malformed(&self) -> bool {
        matches!(self, FetchError::Malformed(_))
    }
}

pub fn parse_response(body: &str) -> Result<Vec<Question>, FetchError> {
    serde_json::from_str::<QuestionResponse>(body)
        .map(|r| r.response)
        .map_err(|err| FetchError::Malformed(err.to_string()))
}

fn http_error(status: u16, body: &str) -> FetchError {
    let detail = serde_json::from_str::<ErrorBody>(body)
        .map(|b| b.detail)
        .ok()
        .or_else(|| {
            let trimmed = body.trim();
            (!trimmed.is_empty()).then(|| trimmed.to_owned())
        });
    FetchError::Http { status, detail }
}

#[cfg(not(target_arch = "wasm32"))]
pub fn fetch_questions(
    settings: &Settings,
    request: &QuestionRequest,
) -> Result<Vec<Question>, FetchError> {
    use std::time::Duration;

    let url = settings.questions_url();
    let client = reqwest::blocking::Client::builder()
        .timeout(Duration::from_secs(settings.timeout_secs))
        .build()
        .map_err(|err| FetchError::Network(err.to_string()))?;

    log::info!(
        "POST {url} (topic={}, type={:?}, difficulty={:?}, n={})",
        request.topic,
        request.question_type,
        request.difficulty,
        request.num_questions
    );

    let response = client
        .post(&url)
        .json(request)
        .send()
        .map_err(map_reqwest_error)?;

    let status = response.status();
    let body = response.text().map_err(map_reqwest_error)?;

    if !status.is_success() {
        return Err(http_error(status.as_u16(), &body));
    }

    let questions = parse_response(&body)?;
    log::info!("Recibidas {} preguntas", questions.len());
    Ok(questions)
}

#[cfg(not(target_arch = "wasm32"))]
fn map_reqwest_error(err: reqwest::Error) -> FetchError {
    if err.is_timeout() {
        FetchError::Timeout
    } else {
        FetchError::Network(err.to_string())
    }
}

#[cfg(target_arch = "wasm32")]
pub async fn fetch_questions(
    settings: &Settings,
    request: &QuestionRequest,
) -> Result<Vec<Question>, FetchError> {
    use wasm_bindgen::JsCast;
    use wasm_bindgen::JsValue;
    use wasm_bindgen::closure::Closure;
    use wasm_bindgen_futures::JsFuture;
    use web_sys::{AbortController, Request, RequestInit, RequestMode, Response};

    let url = settings.questions_url();
    let payload = serde_json::to_string(request)
        .map_err(|err| FetchError::Malformed(format!("could not encode request: {err}")))?;

    let window =
        web_sys::window().ok_or_else(|| FetchError::Network("no window in this context".into()))?;

    // El navegador no tiene timeout propio: se aborta con un temporizador
    let controller =
        AbortController::new().map_err(|err| FetchError::Network(format!("{err:?}")))?;
    let signal = controller.signal();

    let opts = RequestInit::new();
    opts.set_method("POST");
    opts.set_mode(RequestMode::Cors);
    opts.set_body(&JsValue::from_str(&payload));
    opts.set_signal(Some(&signal));

    let req = Request::new_with_str_and_init(&url, &opts)
        .map_err(|err| FetchError::Network(format!("{err:?}")))?;
    req.headers()
        .set("Content-Type", "application/json")
        .map_err(|err| FetchError::Network(format!("{err:?}")))?;

    let timeout_ms = i32::try_from(settings.timeout_secs.saturating_mul(1000)).unwrap_or(i32::MAX);
    let on_timeout = Closure::once_into_js(move || controller.abort());
    let timer = window
        .set_timeout_with_callback_and_timeout_and_arguments_0(on_timeout.unchecked_ref(), timeout_ms)
        .map_err(|err| FetchError::Network(format!("{err:?}")))?;

    log::info!("POST {url} (topic={}, n={})", request.topic, request.num_questions);

    let js_error = |err: JsValue| {
        if signal.aborted() {
            FetchError::Timeout
        } else {
            FetchError::Network(format!("{err:?}"))
        }
    };

    let outcome: Result<Vec<Question>, FetchError> = async {
        let resp_value = JsFuture::from(window.fetch_with_request(&req))
            .await
            .map_err(js_error)?;
        let response: Response = resp_value
            .dyn_into()
            .map_err(|_| FetchError::Malformed("fetch did not return a Response".into()))?;

        let text_promise = response
            .text()
            .map_err(|err| FetchError::Malformed(format!("{err:?}")))?;
        let body = JsFuture::from(text_promise)
            .await
            .map_err(js_error)?
            .as_string()
            .ok_or_else(|| FetchError::Malformed("response body is not text".into()))?;

        if !response.ok() {
            return Err(http_error(response.status(), &body));
        }
        parse_response(&body)
    }
    .await;

    window.clear_timeout_with_handle(timer);
    outcome
}
