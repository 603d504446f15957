// src/view_models.rs

use crate::model::ModuleKind;

/// A qué pantalla lleva una tarjeta de la pantalla de inicio.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum CardTarget {
    Quiz(ModuleKind),
    Tips,
}

/// Tarjeta de módulo que se pinta en la pantalla de inicio.
#[derive(Clone, Debug)]
pub struct ModuleCard {
    pub target: CardTarget,
    pub icon: &'static str,
    pub title: &'static str,
    pub description: &'static str,
    pub completed: bool,
}

impl ModuleCard {
    pub fn label(&self) -> String {
        if self.completed {
            format!("{} {} ✅", self.icon, self.title)
        } else {
            format!("{} {}", self.icon, self.title)
        }
    }
}

/// Cabecera de cada módulo de quiz: título y consigna.
pub fn module_heading(kind: ModuleKind) -> (&'static str, &'static str) {
    match kind {
        ModuleKind::Phishing => (
            "🐟 Simulación de Phishing",
            "Analiza el correo electrónico a continuación y determina si es un intento de phishing.",
        ),
        ModuleKind::Passwords => (
            "🔑 Seguridad de Contraseñas",
            "Pon a prueba tus conocimientos sobre las mejores prácticas de contraseñas.",
        ),
        ModuleKind::SocialEngineering => (
            "👥 Escenarios de Ingeniería Social",
            "Lee el escenario y elige el mejor curso de acción.",
        ),
    }
}

/// Los módulos de escenarios numeran "Escenario 1 de 3"; el de contraseñas,
/// "Pregunta 1 de 3".
pub fn question_noun(kind: ModuleKind) -> &'static str {
    match kind {
        ModuleKind::Passwords => "Pregunta",
        ModuleKind::Phishing | ModuleKind::SocialEngineering => "Escenario",
    }
}

/// Texto de despedida al completar un módulo.
pub fn completion_text(kind: ModuleKind) -> &'static str {
    match kind {
        ModuleKind::Phishing => {
            "Has completado la simulación de phishing. Revisa tu puntuación de conciencia actualizada en el encabezado."
        }
        ModuleKind::Passwords => "Has completado el módulo de seguridad de contraseñas. ¡Buen trabajo!",
        ModuleKind::SocialEngineering => {
            "Has terminado el módulo de ingeniería social. ¡Cada vez es más difícil engañarte!"
        }
    }
}
