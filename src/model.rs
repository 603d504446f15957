use serde::{Deserialize, Serialize};

/// Módulos de quiz disponibles en el laboratorio.
#[derive(Clone, Copy, Debug, Serialize, Deserialize, PartialEq, Eq, Hash)]
pub enum ModuleKind {
    Phishing,
    Passwords,
    SocialEngineering,
}

impl ModuleKind {
    pub const ALL: [ModuleKind; 3] = [
        ModuleKind::Phishing,
        ModuleKind::Passwords,
        ModuleKind::SocialEngineering,
    ];
}

#[derive(Serialize, Deserialize, Debug, Clone)]
pub struct Question {
    pub id: usize,           // orden de aparición, empieza en 1
    pub prompt: String,      // Pregunta o escenario (texto ya renderizable)
    pub options: Vec<String>,
    pub correct_index: usize,
    pub explanation: String, // Se muestra tras verificar, acierte o no
    pub points: u32,
}

/// Banco de preguntas de un módulo. Se fija al cargarlo y no se muta.
#[derive(Serialize, Deserialize, Debug, Clone)]
pub struct Quiz {
    pub questions: Vec<Question>,
}

impl Quiz {
    pub fn len(&self) -> usize {
        self.questions.len()
    }

    pub fn is_empty(&self) -> bool {
        self.questions.is_empty()
    }

    /// Comprueba que el banco esté bien formado: ids consecutivos desde 1,
    /// al menos dos opciones por pregunta y `correct_index` dentro de rango.
    pub fn validate(&self) -> Result<(), String> {
        if self.questions.is_empty() {
            return Err("el banco no tiene preguntas".to_owned());
        }
        for (i, q) in self.questions.iter().enumerate() {
            if q.id != i + 1 {
                return Err(format!(
                    "la pregunta en posición {} tiene id {} (se esperaba {})",
                    i,
                    q.id,
                    i + 1
                ));
            }
            if q.options.len() < 2 {
                return Err(format!("la pregunta {} necesita al menos dos opciones", q.id));
            }
            if q.correct_index >= q.options.len() {
                return Err(format!(
                    "la pregunta {} marca como correcta la opción {} pero solo hay {}",
                    q.id,
                    q.correct_index,
                    q.options.len()
                ));
            }
        }
        Ok(())
    }
}

#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum AppState {
    Home,
    Quiz,
    Tips,
}

impl Default for AppState {
    fn default() -> Self {
        AppState::Home
    }
}
