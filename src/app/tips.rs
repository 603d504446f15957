use super::*;
use crate::tips::{self, Role, TipsError, TipsRequest};
use std::sync::mpsc::{Receiver, channel};

/// Puntos fijos por confirmar la lectura de los consejos generados.
pub const TIPS_POINTS: u32 = 20;

/// Panorama con el que se precarga el formulario.
const DEFAULT_THREATS: &str = "Aumento reciente de ataques de phishing dirigidos a credenciales de \
                               empleados y amenazas de ransomware a servidores de la empresa.";

/// Estado del módulo de consejos: formulario, petición en vuelo y resultado.
pub struct TipsState {
    pub role: Option<Role>,
    pub threats: String,
    pub pending: bool,
    pub tips: Option<Vec<String>>,
    pub error: Option<String>,
    pub acknowledged: bool,
    rx: Option<Receiver<Result<Vec<String>, TipsError>>>,
}

impl Default for TipsState {
    fn default() -> Self {
        Self {
            role: None,
            threats: DEFAULT_THREATS.to_owned(),
            pending: false,
            tips: None,
            error: None,
            acknowledged: false,
            rx: None,
        }
    }
}

impl TrainingApp {
    /// Lanza una generación de consejos en un hilo aparte. Solo puede haber
    /// una petición en vuelo: mientras dura, el formulario queda bloqueado.
    pub fn solicitar_consejos(&mut self) {
        if self.tips.pending {
            self.message = "⏳ Ya hay una generación en curso. Espera el resultado.".into();
            return;
        }
        let Some(role) = self.tips.role else {
            self.message = "Por favor selecciona un rol.".into();
            return;
        };
        let request = match TipsRequest::new(role, self.tips.threats.clone()) {
            Ok(r) => r,
            Err(e) => {
                self.message = e.to_string();
                return;
            }
        };

        self.tips.tips = None;
        self.tips.error = None;
        self.tips.acknowledged = false;
        self.tips.pending = true;
        self.message.clear();

        let (tx, rx) = channel();
        self.tips.rx = Some(rx);
        std::thread::spawn(move || {
            let _ = tx.send(tips::generate_tips(&request));
        });
    }

    /// Recoge el resultado del hilo de generación, si ya llegó.
    pub fn poll_tips_result(&mut self) {
        let maybe_result = self.tips.rx.as_ref().and_then(|rx| rx.try_recv().ok());
        if let Some(result) = maybe_result {
            self.tips.rx = None;
            self.apply_tips_result(result);
        }
    }

    pub(crate) fn apply_tips_result(&mut self, result: Result<Vec<String>, TipsError>) {
        self.tips.pending = false;
        match result {
            Ok(tips) => {
                self.tips.tips = Some(tips);
                // Cada tanda nueva se confirma por separado
                self.tips.acknowledged = false;
            }
            Err(e) => {
                log::warn!("La generación de consejos falló: {e}");
                self.tips.error = Some(
                    "Hubo un problema al comunicarse con la IA. Por favor, inténtalo de nuevo más tarde."
                        .to_owned(),
                );
            }
        }
    }

    /// Confirma la lectura de los consejos. Abona los puntos una sola vez
    /// por generación, aunque se pulse varias veces.
    pub fn confirmar_consejos(&mut self) {
        if self.tips.acknowledged || self.tips.tips.is_none() {
            return;
        }
        self.score.borrow_mut().add(TIPS_POINTS);
        self.tips.acknowledged = true;
        self.message = format!("¡Puntuación actualizada! Has ganado {TIPS_POINTS} puntos.");
    }
}
