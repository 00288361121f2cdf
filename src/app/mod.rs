use crate::config::{QuizConfiguration, Settings};
use crate::data::read_topics_embedded;
use crate::fetch::FetchError;
use crate::grading::AnswerSet;
use crate::model::{AppState, Question};
use std::sync::mpsc::Receiver;

// Submódulos
pub mod actions;
pub mod queries;
pub mod resets;

pub use crate::view_models::QuestionFeedback;

pub type FetchOutcome = Result<Vec<Question>, FetchError>;

/// Petición en vuelo: solo hay una a la vez.
pub struct PendingFetch {
    pub rx: Receiver<FetchOutcome>,
    pub return_state: AppState,
}

pub struct QuizApp {
    pub topics: Vec<String>,
    pub config: QuizConfiguration,
    pub settings: Settings,
    pub questions: Vec<Question>,
    pub answers: AnswerSet,
    pub submitted: bool,
    pub score: usize,
    pub state: AppState,
    /// Último error visible (fetch o número de preguntas)
    pub message: String,
    pub pending_fetch: Option<PendingFetch>,
}

impl QuizApp {
    pub fn new(settings: Settings) -> Self {
        let topics = read_topics_embedded();
        let config = QuizConfiguration::new(&topics[0]);

        Self {
            topics,
            config,
            settings,
            questions: Vec::new(),
            answers: AnswerSet::new(),
            submitted: false,
            score: 0,
            state: AppState::Configuring,
            message: String::new(),
            pending_fetch: None,
        }
    }
}

impl Default for QuizApp {
    fn default() -> Self {
        Self::new(Settings::default())
    }
}
