use crate::data::{FALLBACK_TOPIC, OTHER_TOPIC};
use crate::model::{Difficulty, QuestionType};
use serde::{Deserialize, Serialize};
use thiserror::Error;

pub const MAX_QUESTIONS: u32 = 50;
pub const DEFAULT_QUESTION_COUNT: u32 = 2;
pub const DEFAULT_ENDPOINT: &str = "http://localhost:8000";
pub const DEFAULT_TIMEOUT_SECS: u64 = 30;

#[derive(Error, Debug, Clone, PartialEq, Eq)]
pub enum CountError {
    #[error("Number of questions must be a whole number")]
    NotANumber,
    #[error("Number of questions must be at most {}", MAX_QUESTIONS)]
    TooMany,
}

/// Opciones elegidas en la vista de configuración.
#[derive(Debug, Clone, PartialEq)]
pub struct QuizConfiguration {
    pub topic: String,
    pub custom_topic: String,
    pub question_type: QuestionType,
    pub difficulty: Difficulty,
    /// Texto tal cual lo escribe el usuario; se valida al empezar
    pub question_count: String,
}

impl QuizConfiguration {
    pub fn new(default_topic: &str) -> Self {
        Self {
            topic: default_topic.to_owned(),
            custom_topic: String::new(),
            question_type: QuestionType::default(),
            difficulty: Difficulty::default(),
            question_count: DEFAULT_QUESTION_COUNT.to_string(),
        }
    }

    pub fn is_custom_topic(&self) -> bool {
        self.topic == OTHER_TOPIC
    }

    /// Tema que se envía al servicio
    pub fn effective_topic(&self) -> String {
        if !self.is_custom_topic() {
            return self.topic.clone();
        }
        let custom = self.custom_topic.trim();
        if custom.is_empty() {
            FALLBACK_TOPIC.to_owned()
        } else {
            custom.to_owned()
        }
    }

    pub fn parsed_count(&self) -> Result<u32, CountError> {
        parse_question_count(&self.question_count)
    }
}

/// `0` se acepta (el servicio devuelve una lista vacía); negativos y texto no.
pub fn parse_question_count(input: &str) -> Result<u32, CountError> {
    let count = input
        .trim()
        .parse::<u32>()
        .map_err(|_| CountError::NotANumber)?;
    if count > MAX_QUESTIONS {
        return Err(CountError::TooMany);
    }
    Ok(count)
}

#[derive(Error, Debug)]
pub enum SettingsError {
    #[error("Could not read settings file {path}: {source}")]
    Read {
        path: String,
        source: std::io::Error,
    },
    #[error("Invalid settings file: {0}")]
    Parse(#[from] serde_yaml::Error),
}

/// Ajustes del cliente: dirección del servicio y timeout.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct Settings {
    pub endpoint: String,
    pub timeout_secs: u64,
}

impl Default for Settings {
    fn default() -> Self {
        Self {
            endpoint: DEFAULT_ENDPOINT.to_owned(),
            timeout_secs: DEFAULT_TIMEOUT_SECS,
        }
    }
}

impl Settings {
    pub fn from_yaml_str(content: &str) -> Result<Self, SettingsError> {
        let mut settings: Self = serde_yaml::from_str(content)?;
        // Un timeout de 0 haría fallar todas las peticiones
        if settings.timeout_secs == 0 {
            log::warn!("timeout_secs: 0 no es válido, se usa {DEFAULT_TIMEOUT_SECS}");
            settings.timeout_secs = DEFAULT_TIMEOUT_SECS;
        }
        Ok(settings)
    }

    /// Aplica overrides (vacíos se ignoran)
    pub fn with_overrides(mut self, endpoint: Option<String>, timeout_secs: Option<String>) -> Self {
        if let Some(endpoint) = endpoint.filter(|s| !s.trim().is_empty()) {
            self.endpoint = endpoint.trim().to_owned();
        }
        if let Some(raw) = timeout_secs.filter(|s| !s.trim().is_empty()) {
            match raw.trim().parse::<u64>() {
                Ok(secs) if secs > 0 => self.timeout_secs = secs,
                _ => log::warn!("PRACTICEQ_TIMEOUT_SECS inválido ({raw}), se usa {}", self.timeout_secs),
            }
        }
        self
    }

    #[cfg(not(target_arch = "wasm32"))]
    pub fn load() -> Result<Self, SettingsError> {
        let base = match std::env::var("PRACTICEQ_CONFIG") {
            Ok(path) if !path.trim().is_empty() => {
                let content = std::fs::read_to_string(&path)
                    .map_err(|source| SettingsError::Read { path: path.clone(), source })?;
                log::info!("Ajustes cargados de {path}");
                Self::from_yaml_str(&content)?
            }
            _ => Self::default(),
        };
        Ok(base.with_overrides(
            std::env::var("PRACTICEQ_ENDPOINT").ok(),
            std::env::var("PRACTICEQ_TIMEOUT_SECS").ok(),
        ))
    }

    #[cfg(target_arch = "wasm32")]
    pub fn load() -> Result<Self, SettingsError> {
        Ok(Self::default().with_overrides(option_env!("PRACTICEQ_ENDPOINT").map(str::to_owned), None))
    }

    /// URL completa de `/get_questions`
    pub fn questions_url(&self) -> String {
        let trimmed = self.endpoint.trim().trim_end_matches('/');
        if trimmed.ends_with("/get_questions") {
            trimmed.to_owned()
        } else {
            format!("{trimmed}/get_questions")
        }
    }
}
