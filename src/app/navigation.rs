use super::*;
use crate::data::read_quiz;

impl TrainingApp {
    /// Entra en un módulo de quiz: crea una sesión nueva sobre su banco,
    /// con el marcador compartido inyectado.
    pub fn abrir_modulo(&mut self, kind: ModuleKind) {
        let quiz = read_quiz(kind);
        self.session = Some(QuizSession::new(quiz, Rc::clone(&self.score)));
        self.current_module = Some(kind);
        self.state = AppState::Quiz;
        self.message.clear();
    }

    pub fn abrir_consejos(&mut self) {
        self.state = AppState::Tips;
        self.message.clear();
    }

    /// Vuelve a la pantalla de inicio. La sesión del módulo se descarta:
    /// al volver a entrar se empieza una pasada nueva.
    pub fn volver_al_inicio(&mut self) {
        self.session = None;
        self.current_module = None;
        self.state = AppState::Home;
        self.message.clear();
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn abrir_modulo_crea_una_sesion_sobre_su_banco() {
        let mut app = TrainingApp::new();
        app.abrir_modulo(ModuleKind::SocialEngineering);
        assert_eq!(app.state, AppState::Quiz);
        assert_eq!(app.current_module, Some(ModuleKind::SocialEngineering));
        assert_eq!(app.session.as_ref().unwrap().len(), 3);
    }

    #[test]
    fn volver_al_inicio_descarta_la_sesion() {
        let mut app = TrainingApp::new();
        app.abrir_modulo(ModuleKind::Phishing);
        app.volver_al_inicio();
        assert_eq!(app.state, AppState::Home);
        assert!(app.session.is_none());
        assert!(app.current_module.is_none());
    }
}
