use super::*;
use crate::fetch::{QuestionRequest, fetch_questions};
use crate::grading::{SessionResult, grade};
use std::sync::mpsc::TryRecvError;

impl QuizApp {
    /// Lanza la petición de preguntas con la configuración actual.
    /// Solo desde `Configuring` y sin otra petición en vuelo.
    pub fn start_quiz(&mut self, ctx: &egui::Context) {
        if self.pending_fetch.is_some() {
            log::debug!("Ya hay una petición en curso, se ignora");
            return;
        }
        if self.state != AppState::Configuring {
            log::debug!("start_quiz ignorado en estado {:?}", self.state);
            return;
        }

        let num_questions = match self.config.parsed_count() {
            Ok(n) => n,
            Err(err) => {
                self.message = err.to_string();
                return;
            }
        };

        let request = QuestionRequest {
            topic: self.config.effective_topic(),
            question_type: self.config.question_type,
            difficulty: self.config.difficulty,
            num_questions,
        };

        let (tx, rx) = std::sync::mpsc::channel::<FetchOutcome>();
        self.pending_fetch = Some(PendingFetch {
            rx,
            return_state: self.state,
        });
        self.submitted = false;
        self.score = 0;
        self.message.clear();
        self.state = AppState::Loading;

        let settings = self.settings.clone();
        let ctx = ctx.clone();

        #[cfg(not(target_arch = "wasm32"))]
        std::thread::spawn(move || {
            let outcome = fetch_questions(&settings, &request);
            // Si la sesión se reinició el receptor ya no existe
            if tx.send(outcome).is_err() {
                log::debug!("Resultado de petición descartado");
            }
            ctx.request_repaint();
        });

        #[cfg(target_arch = "wasm32")]
        wasm_bindgen_futures::spawn_local(async move {
            let outcome = fetch_questions(&settings, &request).await;
            if tx.send(outcome).is_err() {
                log::debug!("Resultado de petición descartado");
            }
            ctx.request_repaint();
        });
    }

    /// Se llama en cada frame; aplica el resultado si ya llegó.
    pub fn poll_fetch_result(&mut self) {
        let outcome = match self.pending_fetch.as_ref().map(|p| p.rx.try_recv()) {
            Some(Ok(outcome)) => outcome,
            Some(Err(TryRecvError::Disconnected)) => Err(FetchError::Network(
                "request worker stopped before answering".into(),
            )),
            Some(Err(TryRecvError::Empty)) | None => return,
        };
        self.apply_fetch_result(outcome);
    }

    pub fn apply_fetch_result(&mut self, outcome: FetchOutcome) {
        let return_state = self
            .pending_fetch
            .take()
            .map(|p| p.return_state)
            .unwrap_or(AppState::Configuring);

        match outcome {
            Ok(questions) => {
                log::info!("Sesión con {} preguntas", questions.len());
                self.questions = questions;
                self.answers.clear();
                self.submitted = false;
                self.score = 0;
                self.message.clear();
                self.state = AppState::Answering;
            }
            Err(err) => {
                log::error!("Error obteniendo preguntas: {err}");
                self.message = err.to_string();
                self.state = return_state;
            }
        }
    }

    pub fn record_answer(&mut self, index: usize, value: String) {
        if index >= self.questions.len() {
            log::warn!(
                "Respuesta para índice {index} ignorada ({} preguntas)",
                self.questions.len()
            );
            return;
        }
        self.answers.insert(index, value);
    }

    /// Corrige y pasa a `Graded`. `None` si no hay sesión de preguntas activa.
    pub fn submit(&mut self) -> Option<SessionResult> {
        if !matches!(self.state, AppState::Answering | AppState::Graded) {
            log::debug!("submit ignorado en estado {:?}", self.state);
            return None;
        }
        let result = grade(&self.questions, &self.answers);
        self.score = result.score;
        self.submitted = true;
        self.state = AppState::Graded;
        log::info!("Puntuación: {} / {}", result.score, result.total);
        Some(result)
    }
}
