use super::*;

impl TrainingApp {
    /// Tarjetas de la pantalla de inicio, en el orden en que se pintan.
    pub fn module_cards(&self) -> Vec<ModuleCard> {
        let mut cards: Vec<ModuleCard> = [
            (
                ModuleKind::Phishing,
                "🐟",
                "Simulación de Phishing",
                "Aprende a detectar y evitar intentos de phishing engañosos en tu bandeja de entrada.",
            ),
            (
                ModuleKind::Passwords,
                "🔑",
                "Seguridad de Contraseñas",
                "Domina el arte de crear contraseñas fuertes y únicas para tus cuentas.",
            ),
            (
                ModuleKind::SocialEngineering,
                "👥",
                "Ingeniería Social",
                "Reconoce y defiéndete de las tácticas de manipulación psicológica.",
            ),
        ]
        .into_iter()
        .map(|(kind, icon, title, description)| ModuleCard {
            target: CardTarget::Quiz(kind),
            icon,
            title,
            description,
            completed: self.completed_modules.contains(&kind),
        })
        .collect();

        cards.push(ModuleCard {
            target: CardTarget::Tips,
            icon: "💡",
            title: "Consejos Personalizados de IA",
            description: "Obtén consejos de ciberseguridad impulsados por IA y adaptados a tu rol específico.",
            completed: self.tips.acknowledged,
        });

        cards
    }
}
