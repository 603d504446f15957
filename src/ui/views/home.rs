use crate::TrainingApp;
use crate::view_models::CardTarget;
use egui::{Align, CentralPanel, Context, RichText, ScrollArea};

pub fn ui_home(app: &mut TrainingApp, ctx: &Context) {
    CentralPanel::default().show(ctx, |ui| {
        let max_width = 640.0;
        let panel_width = (ui.available_width() * 0.97).min(max_width);

        ui.with_layout(egui::Layout::top_down(Align::Center), |ui| {
            ui.add_space(24.0);
            ui.heading("Bienvenido al 🛡 Laboratorio CyberSafe");
            ui.label(
                "Un campo de entrenamiento interactivo para agudizar tus defensas \
                 contra las amenazas cibernéticas modernas.",
            );
            ui.add_space(6.0);
            ui.label(format!("Puntuación de conciencia: {}", app.score_total()));
            ui.add_space(16.0);

            ScrollArea::vertical().show(ui, |ui| {
                ui.set_width(panel_width);

                // Tarjeta de bienvenida
                egui::Frame::group(ui.style()).show(ui, |ui| {
                    ui.set_width(panel_width - 24.0);
                    ui.label(RichText::new("Tu Viaje de CiberSeguridad").strong());
                    ui.label(
                        "Completa los módulos a continuación para poner a prueba tus \
                         conocimientos y mejorar tu conciencia sobre ciberseguridad. \
                         Tu progreso se registrará a medida que avanzas.",
                    );
                });
                ui.add_space(8.0);

                for card in app.module_cards() {
                    egui::Frame::group(ui.style()).show(ui, |ui| {
                        ui.set_width(panel_width - 24.0);
                        ui.label(RichText::new(card.label()).strong());
                        ui.label(card.description);
                        ui.add_space(4.0);
                        if ui
                            .add_sized([panel_width - 24.0, 32.0], egui::Button::new("Iniciar Módulo ➡"))
                            .clicked()
                        {
                            match card.target {
                                CardTarget::Quiz(kind) => app.abrir_modulo(kind),
                                CardTarget::Tips => app.abrir_consejos(),
                            }
                        }
                    });
                    ui.add_space(8.0);
                }
            });
        });
    });
}
