use crate::engine::QuizSession;
use crate::model::{AppState, ModuleKind};
use crate::score::{AwarenessScore, ScoreHandle};
use std::cell::Cell;
use std::collections::HashSet;
use std::rc::Rc;

// Submódulos
pub mod actions;
pub mod navigation;
pub mod tips;
pub mod view_models;

// Re-export de view models
pub use crate::view_models::{CardTarget, ModuleCard};

pub struct TrainingApp {
    /// Marcador compartido; cada sesión de quiz recibe un clon del handle.
    pub score: ScoreHandle,
    score_view: Rc<Cell<u32>>, // lo alimenta la suscripción al marcador
    pub state: AppState,
    pub current_module: Option<ModuleKind>,
    pub session: Option<QuizSession>,
    pub completed_modules: HashSet<ModuleKind>,
    pub tips: tips::TipsState,
    pub message: String,
    pub confirm_reset: bool,
}

impl TrainingApp {
    pub fn new() -> Self {
        let score = AwarenessScore::handle();

        // La cabecera no consulta el acumulador: se suscribe y lee la celda
        // que el aviso de cada escritura deja al día.
        let score_view = Rc::new(Cell::new(0));
        {
            let view = Rc::clone(&score_view);
            score.borrow_mut().subscribe(move |total| view.set(total));
        }

        Self {
            score,
            score_view,
            state: AppState::Home,
            current_module: None,
            session: None,
            completed_modules: HashSet::new(),
            tips: tips::TipsState::default(),
            message: String::new(),
            confirm_reset: false,
        }
    }

    /// Total que muestra la cabecera, siempre al día tras cada escritura.
    pub fn score_total(&self) -> u32 {
        self.score_view.get()
    }
}

impl Default for TrainingApp {
    fn default() -> Self {
        Self::new()
    }
}

#[cfg(test)]
mod tests {
    use super::TrainingApp;

    #[test]
    fn la_cabecera_ve_cada_escritura_del_marcador() {
        let app = TrainingApp::new();
        assert_eq!(app.score_total(), 0);
        app.score.borrow_mut().add(25);
        assert_eq!(app.score_total(), 25);
        app.score.borrow_mut().reset();
        assert_eq!(app.score_total(), 0);
    }
}
