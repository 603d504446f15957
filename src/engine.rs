use crate::model::{Question, Quiz};
use crate::score::ScoreHandle;

/// Fase de la pregunta actual: responder, ver el resultado, o módulo acabado.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum Phase {
    Answering,
    Revealed,
    Completed,
}

/// Recorrido de un banco de preguntas, una pregunta cada vez. El mismo motor
/// sirve para cualquier módulo: el banco llega como configuración y los
/// puntos se abonan en el marcador compartido que se inyecta al construir.
///
/// Llamar a una operación fuera de su fase es un error del llamante (un bug
/// de integración con la UI, no una condición de ejecución) y se corta en
/// seco con pánico. La única excepción documentada es `advance` tras
/// `Completed`, que no hace nada.
pub struct QuizSession {
    quiz: Quiz,
    score: ScoreHandle,
    current: usize,
    selected: Option<usize>,
    phase: Phase,
}

impl QuizSession {
    pub fn new(quiz: Quiz, score: ScoreHandle) -> Self {
        assert!(!quiz.is_empty(), "la sesión necesita al menos una pregunta");
        Self {
            quiz,
            score,
            current: 0,
            selected: None,
            phase: Phase::Answering,
        }
    }

    pub fn phase(&self) -> Phase {
        self.phase
    }

    /// Índice de la pregunta en curso; vale `len()` cuando el módulo acabó.
    pub fn current_index(&self) -> usize {
        self.current
    }

    pub fn selected(&self) -> Option<usize> {
        self.selected
    }

    pub fn len(&self) -> usize {
        self.quiz.len()
    }

    pub fn is_empty(&self) -> bool {
        self.quiz.is_empty()
    }

    pub fn current_question(&self) -> &Question {
        self.quiz
            .questions
            .get(self.current)
            .expect("no hay pregunta en curso: el módulo está completado")
    }

    /// Fracción recorrida del banco, para la barra de progreso.
    pub fn progress(&self) -> f32 {
        self.current as f32 / self.quiz.len() as f32
    }

    /// Solo tiene sentido con el resultado ya revelado.
    pub fn answered_correctly(&self) -> bool {
        assert_eq!(
            self.phase,
            Phase::Revealed,
            "answered_correctly() fuera de la fase Revealed"
        );
        self.selected == Some(self.current_question().correct_index)
    }

    /// Marca la opción `index` de la pregunta actual. Un índice fuera de
    /// rango se rechaza (no se recorta al rango válido).
    pub fn select(&mut self, index: usize) {
        assert_eq!(
            self.phase,
            Phase::Answering,
            "select() fuera de la fase Answering"
        );
        let options = self.current_question().options.len();
        assert!(
            index < options,
            "opción {index} fuera de rango ({options} opciones)"
        );
        self.selected = Some(index);
    }

    /// Revela el resultado de la pregunta actual. Si la opción marcada es la
    /// correcta abona sus puntos una sola vez: repetir `submit` sin pasar de
    /// nuevo por `Answering` es imposible por construcción.
    pub fn submit(&mut self) {
        assert_eq!(
            self.phase,
            Phase::Answering,
            "submit() fuera de la fase Answering"
        );
        let selected = self.selected.expect("submit() sin opción seleccionada");
        let question = self.current_question();
        if selected == question.correct_index {
            self.score.borrow_mut().add(question.points);
        }
        self.phase = Phase::Revealed;
    }

    /// Pasa a la siguiente pregunta, o a `Completed` si era la última.
    pub fn advance(&mut self) {
        match self.phase {
            Phase::Answering => panic!("advance() antes de verificar la respuesta"),
            Phase::Completed => {} // sin efecto una vez acabado
            Phase::Revealed => {
                self.selected = None;
                self.current += 1;
                if self.current < self.quiz.len() {
                    self.phase = Phase::Answering;
                } else {
                    self.phase = Phase::Completed;
                }
            }
        }
    }

    /// Vuelve al principio del banco desde cualquier fase. Los puntos ya
    /// abonados no se retiran.
    pub fn restart(&mut self) {
        self.current = 0;
        self.selected = None;
        self.phase = Phase::Answering;
    }
}

#[cfg(test)]
mod tests {
    use super::{Phase, QuizSession};
    use crate::model::{Question, Quiz};
    use crate::score::{AwarenessScore, ScoreHandle};

    fn pregunta(id: usize, points: u32) -> Question {
        Question {
            id,
            prompt: format!("Pregunta {id}"),
            options: vec!["a".into(), "b".into(), "c".into()],
            correct_index: 1,
            explanation: "porque sí".into(),
            points,
        }
    }

    fn sesion(points: &[u32]) -> (QuizSession, ScoreHandle) {
        let quiz = Quiz {
            questions: points
                .iter()
                .enumerate()
                .map(|(i, p)| pregunta(i + 1, *p))
                .collect(),
        };
        let score = AwarenessScore::handle();
        (QuizSession::new(quiz, score.clone()), score)
    }

    fn responder(s: &mut QuizSession, opcion: usize) {
        s.select(opcion);
        s.submit();
        s.advance();
    }

    #[test]
    fn recorrido_con_fallo_intermedio_suma_solo_los_aciertos() {
        // Puntos 10/15/10: acierto, fallo, acierto => 20
        let (mut s, score) = sesion(&[10, 15, 10]);
        responder(&mut s, 1);
        responder(&mut s, 0);
        responder(&mut s, 1);
        assert_eq!(s.phase(), Phase::Completed);
        assert_eq!(score.borrow().total(), 20);
    }

    #[test]
    fn submit_no_abona_nada_con_respuesta_incorrecta() {
        let (mut s, score) = sesion(&[10]);
        s.select(0);
        s.submit();
        assert!(!s.answered_correctly());
        assert_eq!(score.borrow().total(), 0);
    }

    #[test]
    fn el_indice_actual_llega_al_total_al_completar() {
        let (mut s, _score) = sesion(&[10, 10]);
        responder(&mut s, 1);
        assert_eq!(s.current_index(), 1);
        responder(&mut s, 1);
        assert_eq!(s.current_index(), s.len());
        assert_eq!(s.phase(), Phase::Completed);
    }

    #[test]
    fn advance_tras_completar_no_hace_nada() {
        let (mut s, score) = sesion(&[10]);
        responder(&mut s, 1);
        s.advance();
        s.advance();
        assert_eq!(s.phase(), Phase::Completed);
        assert_eq!(s.current_index(), 1);
        assert_eq!(score.borrow().total(), 10);
    }

    #[test]
    fn restart_desde_completed_vuelve_al_principio_sin_tocar_el_marcador() {
        let (mut s, score) = sesion(&[10, 15]);
        responder(&mut s, 1);
        responder(&mut s, 1);
        assert_eq!(s.phase(), Phase::Completed);
        s.restart();
        assert_eq!(s.phase(), Phase::Answering);
        assert_eq!(s.current_index(), 0);
        assert_eq!(s.selected(), None);
        assert_eq!(score.borrow().total(), 25);
    }

    #[test]
    fn una_segunda_pasada_puede_volver_a_puntuar() {
        let (mut s, score) = sesion(&[10]);
        responder(&mut s, 1);
        s.restart();
        responder(&mut s, 1);
        assert_eq!(score.borrow().total(), 20);
    }

    #[test]
    fn restart_a_mitad_de_pasada_conserva_lo_ya_ganado() {
        let (mut s, score) = sesion(&[10, 15, 10]);
        responder(&mut s, 1);
        s.select(2);
        s.restart();
        assert_eq!(s.current_index(), 0);
        assert_eq!(s.selected(), None);
        assert_eq!(score.borrow().total(), 10);
    }

    #[test]
    fn advance_limpia_la_seleccion_anterior() {
        let (mut s, _score) = sesion(&[10, 10]);
        responder(&mut s, 2);
        assert_eq!(s.selected(), None);
        assert_eq!(s.phase(), Phase::Answering);
    }

    #[test]
    #[should_panic(expected = "fuera de la fase Answering")]
    fn submit_dos_veces_seguidas_se_rechaza() {
        let (mut s, _score) = sesion(&[10]);
        s.select(1);
        s.submit();
        s.submit();
    }

    #[test]
    #[should_panic(expected = "sin opción seleccionada")]
    fn submit_sin_seleccion_se_rechaza() {
        let (mut s, _score) = sesion(&[10]);
        s.submit();
    }

    #[test]
    #[should_panic(expected = "fuera de rango")]
    fn select_fuera_de_rango_se_rechaza() {
        let (mut s, _score) = sesion(&[10]);
        s.select(3);
    }

    #[test]
    #[should_panic(expected = "fuera de la fase Answering")]
    fn select_con_resultado_revelado_se_rechaza() {
        let (mut s, _score) = sesion(&[10]);
        s.select(1);
        s.submit();
        s.select(0);
    }

    #[test]
    #[should_panic(expected = "antes de verificar")]
    fn advance_sin_verificar_se_rechaza() {
        let (mut s, _score) = sesion(&[10]);
        s.select(1);
        s.advance();
    }
}
