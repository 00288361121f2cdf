// src/data.rs

use serde_yaml;

pub const OTHER_TOPIC: &str = "Other";
pub const FALLBACK_TOPIC: &str = "General Knowledge";

/// Carga el catálogo de temas desde el YAML embebido
pub fn read_topics_embedded() -> Vec<String> {
    let file_content = include_str!("data/topics.yaml");
    match serde_yaml::from_str::<Vec<String>>(file_content) {
        Ok(topics) if !topics.is_empty() => topics,
        Ok(_) => vec![OTHER_TOPIC.to_owned()],
        Err(err) => {
            log::error!("No se pudo parsear el catálogo de temas: {err}");
            vec![OTHER_TOPIC.to_owned()]
        }
    }
}
