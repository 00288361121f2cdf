use serde::{Deserialize, Serialize};

/// Tipo de pregunta que se pide al servicio.
#[derive(Clone, Copy, Debug, Serialize, PartialEq, Eq, Hash, Default)]
pub enum QuestionType {
    #[default]
    #[serde(rename = "Fill in the blanks")]
    FillInBlank,
    #[serde(rename = "Multiple Choice")]
    MultipleChoice,
}

impl QuestionType {
    pub const ALL: [QuestionType; 2] = [QuestionType::FillInBlank, QuestionType::MultipleChoice];

    pub fn label(self) -> &'static str {
        match self {
            QuestionType::FillInBlank => "Fill in the Blanks",
            QuestionType::MultipleChoice => "Multiple Choice",
        }
    }
}

#[derive(Clone, Copy, Debug, Serialize, PartialEq, Eq, Hash, Default)]
#[serde(rename_all = "lowercase")]
pub enum Difficulty {
    #[default]
    Easy,
    Medium,
    Hard,
}

impl Difficulty {
    pub const ALL: [Difficulty; 3] = [Difficulty::Easy, Difficulty::Medium, Difficulty::Hard];

    pub fn label(self) -> &'static str {
        match self {
            Difficulty::Easy => "Easy",
            Difficulty::Medium => "Medium",
            Difficulty::Hard => "Hard",
        }
    }
}

#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum QuestionKind {
    Mcq,
    FillInBlank,
}

/// Pregunta recibida del servicio. Inmutable una vez instalada en la sesión.
#[derive(Deserialize, Debug, Clone, PartialEq)]
pub struct Question {
    #[serde(rename = "question")]
    pub prompt: String,
    #[serde(rename = "type", default)]
    pub kind_tag: String,
    #[serde(default)]
    pub options: Vec<String>,
    pub correct_answer: String,
}

impl Question {
    pub fn mcq(prompt: &str, options: &[&str], correct_answer: &str) -> Self {
        Self {
            prompt: prompt.to_owned(),
            kind_tag: "MCQ".to_owned(),
            options: options.iter().map(|o| (*o).to_owned()).collect(),
            correct_answer: correct_answer.to_owned(),
        }
    }

    pub fn fill_in_blank(prompt: &str, correct_answer: &str) -> Self {
        Self {
            prompt: prompt.to_owned(),
            kind_tag: "Fill in the Blank".to_owned(),
            options: Vec::new(),
            correct_answer: correct_answer.to_owned(),
        }
    }

    /// Solo "MCQ" es opción múltiple; cualquier otra etiqueta se trata como hueco
    pub fn kind(&self) -> QuestionKind {
        if self.kind_tag == "MCQ" {
            QuestionKind::Mcq
        } else {
            QuestionKind::FillInBlank
        }
    }
}

#[derive(Clone, Copy, Debug, PartialEq, Eq, Default)]
pub enum AppState {
    #[default]
    Configuring,
    Loading,
    Answering,
    Graded,
}
