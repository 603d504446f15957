// src/data.rs

use crate::model::{ModuleKind, Quiz};

/// Carga el banco de preguntas embebido del módulo indicado
pub fn read_quiz(kind: ModuleKind) -> Quiz {
    let file_content = match kind {
        ModuleKind::Phishing => include_str!("data/phishing.yaml"),
        ModuleKind::Passwords => include_str!("data/passwords.yaml"),
        ModuleKind::SocialEngineering => include_str!("data/social_engineering.yaml"),
    };
    let quiz: Quiz =
        serde_yaml::from_str(file_content).expect("No se pudo parsear el banco de preguntas YAML");
    if let Err(e) = quiz.validate() {
        panic!("Banco de preguntas inválido ({kind:?}): {e}");
    }
    quiz
}
