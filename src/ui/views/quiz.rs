use crate::TrainingApp;
use crate::engine::Phase;
use crate::model::ModuleKind;
use crate::ui::layout::{centered_panel, two_button_row};
use crate::view_models::{completion_text, module_heading, question_noun};
use egui::{Align, CentralPanel, Context, ProgressBar, RichText, ScrollArea};

pub fn ui_quiz(app: &mut TrainingApp, ctx: &Context) {
    // Sin módulo activo no hay nada que pintar
    let Some(kind) = app.current_module else {
        app.volver_al_inicio();
        return;
    };

    // Datos de la pregunta en curso, copiados para no retener la sesión
    // mientras se procesan los clics.
    let (question, total, progress, selected, phase) = match app.session.as_ref() {
        Some(s) if s.phase() != Phase::Completed => (
            s.current_question().clone(),
            s.len(),
            s.progress(),
            s.selected(),
            s.phase(),
        ),
        Some(_) => {
            ui_module_completed(app, ctx, kind);
            return;
        }
        None => {
            app.volver_al_inicio();
            return;
        }
    };
    let revealed = phase == Phase::Revealed;
    let correct = revealed && selected == Some(question.correct_index);

    let (title, subtitle) = module_heading(kind);

    CentralPanel::default().show(ctx, |ui| {
        let max_width = 650.0;
        let panel_width = (ui.available_width() * 0.97).min(max_width);
        ui.add_space(12.0);

        ui.with_layout(egui::Layout::top_down(Align::Center), |ui| {
            ui.set_width(panel_width);
            ui.heading(title);
            ui.label(subtitle);
            ui.add_space(10.0);

            ui.label(format!(
                "{} {} de {}",
                question_noun(kind),
                question.id,
                total
            ));
            ui.add(ProgressBar::new(progress).desired_width(panel_width));
            ui.add_space(10.0);

            // Enunciado con scroll fijo (los correos ocupan varias líneas)
            let prompt_max_height = 220.0;
            egui::Frame::group(ui.style()).show(ui, |ui| {
                ui.set_width(panel_width - 24.0);
                ScrollArea::vertical()
                    .max_height(prompt_max_height)
                    .show(ui, |ui| {
                        ui.with_layout(egui::Layout::top_down(Align::Min), |ui| {
                            ui.label(&question.prompt);
                        });
                    });
            });
            ui.add_space(10.0);

            // Opciones: solo editables mientras se responde
            for (i, option) in question.options.iter().enumerate() {
                let marked = selected == Some(i);
                let radio = ui.add_enabled(!revealed, egui::RadioButton::new(marked, option));
                if radio.clicked() {
                    app.seleccionar_opcion(i);
                }
            }

            ui.add_space(8.0);

            if revealed {
                let (titulo, color) = if correct {
                    ("✅ ¡Correcto!", egui::Color32::from_rgb(0x2e, 0x7d, 0x32))
                } else {
                    ("❌ Incorrecto", egui::Color32::from_rgb(0xc6, 0x28, 0x28))
                };
                ui.label(RichText::new(titulo).color(color).strong());
                ui.label(&question.explanation);
                ui.add_space(8.0);
                if ui
                    .add_sized([panel_width, 36.0], egui::Button::new("Siguiente ➡"))
                    .clicked()
                {
                    app.avanzar();
                }
            } else {
                let verificar = ui.add_enabled(
                    selected.is_some(),
                    egui::Button::new("Verificar Respuesta").min_size([panel_width, 36.0].into()),
                );
                if verificar.clicked() {
                    app.verificar_respuesta();
                }
            }
        });
    });
}

fn ui_module_completed(app: &mut TrainingApp, ctx: &Context, kind: ModuleKind) {
    centered_panel(ctx, 260.0, 480.0, |ui| {
        ui.vertical_centered(|ui| {
            ui.heading("✅ ¡Módulo Completado!");
            ui.add_space(10.0);
            ui.label(completion_text(kind));
            ui.add_space(16.0);

            let (reintentar, volver) =
                two_button_row(ui, 440.0, "⟲ Intentar de Nuevo", "Volver al inicio");
            if reintentar {
                app.reintentar_modulo();
            }
            if volver {
                app.volver_al_inicio();
            }
        });
    });
}
