use crate::model::Question;
use std::collections::HashMap;

/// Respuestas del usuario por índice de pregunta. Ausente = sin responder.
pub type AnswerSet = HashMap<usize, String>;

#[derive(Clone, Copy, Debug, PartialEq, Eq, Default)]
pub struct SessionResult {
    pub score: usize,
    pub total: usize,
}

/// Comparación sin mayúsculas y sin recortar espacios. Sin respuesta nunca acierta.
pub fn answer_matches(answer: Option<&str>, correct_answer: &str) -> bool {
    answer.is_some_and(|a| a.to_lowercase() == correct_answer.to_lowercase())
}

pub fn grade(questions: &[Question], answers: &AnswerSet) -> SessionResult {
    let score = questions
        .iter()
        .enumerate()
        .filter(|(i, q)| answer_matches(answers.get(i).map(String::as_str), &q.correct_answer))
        .count();
    SessionResult {
        score,
        total: questions.len(),
    }
}
