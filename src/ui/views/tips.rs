use crate::TrainingApp;
use crate::app::tips::TIPS_POINTS;
use crate::tips::{MAX_THREATS_LEN, Role};
use egui::{Align, CentralPanel, Context, RichText, ScrollArea, Spinner};

pub fn ui_tips(app: &mut TrainingApp, ctx: &Context) {
    CentralPanel::default().show(ctx, |ui| {
        let max_width = 640.0;
        let panel_width = (ui.available_width() * 0.97).min(max_width);
        ui.add_space(12.0);

        ui.with_layout(egui::Layout::top_down(Align::Center), |ui| {
            ui.set_width(panel_width);
            ui.heading("💡 Consejos Personalizados de IA");
            ui.label("Obtén consejos de ciberseguridad adaptados a tu rol, impulsados por IA.");
            ui.add_space(12.0);

            ScrollArea::vertical().show(ui, |ui| {
                // Formulario
                egui::Frame::group(ui.style()).show(ui, |ui| {
                    ui.set_width(panel_width - 24.0);
                    ui.label(RichText::new("Genera Tus Consejos").strong());
                    ui.label(
                        "Selecciona tu rol y proporciona contexto sobre las amenazas \
                         de seguridad actuales para recibir consejos personalizados.",
                    );
                    ui.add_space(8.0);

                    ui.add_enabled_ui(!app.tips.pending, |ui| {
                        egui::ComboBox::from_label("Tu Rol")
                            .selected_text(
                                app.tips
                                    .role
                                    .map(|r| r.label())
                                    .unwrap_or("Selecciona tu rol en la empresa"),
                            )
                            .show_ui(ui, |ui| {
                                ui.selectable_value(
                                    &mut app.tips.role,
                                    Some(Role::Worker),
                                    Role::Worker.label(),
                                );
                                ui.selectable_value(
                                    &mut app.tips.role,
                                    Some(Role::Admin),
                                    Role::Admin.label(),
                                );
                            });
                        ui.add_space(8.0);

                        ui.label("Panorama de Amenazas Actual");
                        ui.add(
                            egui::TextEdit::multiline(&mut app.tips.threats)
                                .desired_width(panel_width - 48.0)
                                .desired_rows(4),
                        );
                        ui.label(
                            RichText::new(format!(
                                "{}/{}",
                                app.tips.threats.chars().count(),
                                MAX_THREATS_LEN
                            ))
                            .weak(),
                        );
                    });
                    ui.add_space(8.0);

                    if app.tips.pending {
                        ui.horizontal(|ui| {
                            ui.add(Spinner::new());
                            ui.label("Generando...");
                        });
                    } else if ui
                        .add_sized([panel_width - 48.0, 32.0], egui::Button::new("✨ Generar Consejos"))
                        .clicked()
                    {
                        app.solicitar_consejos();
                    }
                });

                if let Some(error) = &app.tips.error {
                    ui.add_space(8.0);
                    ui.label(
                        RichText::new(format!("⚠ {error}"))
                            .color(egui::Color32::from_rgb(0xc6, 0x28, 0x28)),
                    );
                }

                if let Some(tips) = app.tips.tips.clone() {
                    ui.add_space(8.0);
                    egui::Frame::group(ui.style()).show(ui, |ui| {
                        ui.set_width(panel_width - 24.0);
                        ui.label(RichText::new("💡 Tus Consejos Personalizados").strong());
                        ui.add_space(4.0);
                        for tip in &tips {
                            ui.label(format!("✅ {tip}"));
                        }
                        ui.add_space(8.0);

                        let ack_label = if app.tips.acknowledged {
                            "¡Puntos Otorgados!".to_owned()
                        } else {
                            format!("Entendido (+{TIPS_POINTS} Puntos)")
                        };
                        let ack = ui.add_enabled(
                            !app.tips.acknowledged,
                            egui::Button::new(ack_label),
                        );
                        if ack.clicked() {
                            app.confirmar_consejos();
                        }
                    });
                }

                if !app.message.is_empty() {
                    ui.add_space(8.0);
                    ui.label(&app.message);
                }
            });
        });
    });
}
