use super::*;
use crate::engine::Phase;
use eframe::egui;

impl TrainingApp {
    /// Marca una opción de la pregunta actual. La UI deshabilita las
    /// opciones en cuanto el resultado queda revelado, así que aquí solo
    /// llega mientras se responde.
    pub fn seleccionar_opcion(&mut self, index: usize) {
        if let Some(session) = &mut self.session {
            session.select(index);
        }
    }

    /// Verifica la respuesta marcada y deja el resultado a la vista.
    pub fn verificar_respuesta(&mut self) {
        let Some(session) = &mut self.session else {
            return;
        };
        session.submit();
        self.message = if session.answered_correctly() {
            "✅ ¡Correcto!".into()
        } else {
            "❌ Incorrecto".into()
        };
    }

    /// Pasa a la siguiente pregunta; si era la última, el módulo queda
    /// completado y se apunta en la pantalla de inicio.
    pub fn avanzar(&mut self) {
        let Some(session) = &mut self.session else {
            return;
        };
        session.advance();
        self.message.clear();
        if session.phase() == Phase::Completed {
            if let Some(kind) = self.current_module {
                self.completed_modules.insert(kind);
            }
        }
    }

    /// Vuelve a empezar la pasada del módulo actual. Los puntos ya ganados
    /// se conservan.
    pub fn reintentar_modulo(&mut self) {
        if let Some(session) = &mut self.session {
            session.restart();
        }
        self.message.clear();
    }

    /// Pone el marcador a cero. Solo se llama tras pasar por el diálogo de
    /// confirmación.
    pub fn reiniciar_puntuacion(&mut self) {
        self.score.borrow_mut().reset();
        self.confirm_reset = false;
        self.message.clear();
    }

    pub fn confirm_reset(&mut self, ctx: &egui::Context) {
        egui::Window::new("Confirmar reinicio")
            .collapsible(false)
            .resizable(false)
            .show(ctx, |ui| {
                ui.label("¿Seguro que quieres poner tu puntuación a cero? ¡Esta acción no se puede deshacer!");
                ui.horizontal(|ui| {
                    if ui.button("Sí, reiniciar").clicked() {
                        self.reiniciar_puntuacion();
                    }
                    if ui.button("No").clicked() {
                        self.confirm_reset = false;
                    }
                });
            });
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::engine::Phase;

    /// Recorre el módulo de phishing entero acertando solo la primera
    /// pregunta (10/10/15: la primera vale 10).
    #[test]
    fn un_modulo_entero_suma_solo_los_aciertos() {
        let mut app = TrainingApp::new();
        app.abrir_modulo(ModuleKind::Phishing);

        // Q1: phishing (correcta), Q2 y Q3: respuestas equivocadas
        for opcion in [1, 1, 0] {
            app.seleccionar_opcion(opcion);
            app.verificar_respuesta();
            app.avanzar();
        }

        let session = app.session.as_ref().unwrap();
        assert_eq!(session.phase(), Phase::Completed);
        assert!(app.completed_modules.contains(&ModuleKind::Phishing));
        // Q1 (10) acertada; Q2 es legítimo y Q3 es phishing, ambas falladas
        assert_eq!(app.score_total(), 10);
    }

    #[test]
    fn reintentar_conserva_la_puntuacion_y_reinicia_la_sesion() {
        let mut app = TrainingApp::new();
        app.abrir_modulo(ModuleKind::Passwords);
        app.seleccionar_opcion(2); // correcta, 10 puntos
        app.verificar_respuesta();
        app.reintentar_modulo();

        let session = app.session.as_ref().unwrap();
        assert_eq!(session.phase(), Phase::Answering);
        assert_eq!(session.current_index(), 0);
        assert_eq!(app.score_total(), 10);
    }

    #[test]
    fn reiniciar_puntuacion_pone_el_marcador_a_cero() {
        let mut app = TrainingApp::new();
        app.score.borrow_mut().add(45);
        app.confirm_reset = true;
        app.reiniciar_puntuacion();
        assert_eq!(app.score_total(), 0);
        assert!(!app.confirm_reset);
    }
}
