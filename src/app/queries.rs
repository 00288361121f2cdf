use super::*;
use crate::grading::{SessionResult, answer_matches};

impl QuizApp {
    pub fn is_loading(&self) -> bool {
        self.pending_fetch.is_some()
    }

    pub fn answer(&self, index: usize) -> Option<&str> {
        self.answers.get(&index).map(String::as_str)
    }

    pub fn is_correct(&self, index: usize) -> bool {
        self.questions
            .get(index)
            .is_some_and(|q| answer_matches(self.answer(index), &q.correct_answer))
    }

    /// Resultado visible; solo existe tras enviar
    pub fn result(&self) -> Option<SessionResult> {
        self.submitted.then(|| SessionResult {
            score: self.score,
            total: self.questions.len(),
        })
    }

    /// Filas de corrección para la vista de resultados
    pub fn feedback_rows(&self) -> Vec<QuestionFeedback> {
        self.questions
            .iter()
            .enumerate()
            .map(|(i, q)| QuestionFeedback {
                number: i + 1,
                prompt: q.prompt.clone(),
                your_answer: self.answer(i).map(str::to_owned),
                correct_answer: q.correct_answer.clone(),
                correct: self.is_correct(i),
            })
            .collect()
    }
}
