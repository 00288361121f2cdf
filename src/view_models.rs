// src/view_models.rs

#[derive(Clone, Debug, PartialEq)]
pub struct QuestionFeedback {
    pub number: usize, // número "humano" (1,2,3…)
    pub prompt: String,
    pub your_answer: Option<String>,
    pub correct_answer: String,
    pub correct: bool,
}

impl QuestionFeedback {
    pub fn your_answer_label(&self) -> String {
        match self.your_answer.as_deref() {
            Some(answer) if !answer.is_empty() => format!("Your answer: {answer}"),
            _ => "Your answer: No answer".to_owned(),
        }
    }

    pub fn correct_answer_label(&self) -> String {
        format!("Correct answer: {}", self.correct_answer)
    }

    pub fn status_icon(&self) -> &'static str {
        if self.correct { "✅" } else { "❌" }
    }
}
