pub mod layout;
pub mod views;

use crate::app::TrainingApp;
use crate::model::AppState;
use eframe::{App, Frame};
use egui::Context;
use layout::{bottom_panel, top_panel};

impl App for TrainingApp {
    fn update(&mut self, ctx: &Context, _frame: &mut Frame) {
        // Cabecera con la puntuación (en los módulos; el inicio va limpio)
        if self.state != AppState::Home {
            top_panel(self, ctx);
        }

        // PANEL INFERIOR TEMA OSCURO O CLARO
        bottom_panel(ctx);

        // Mientras hay una generación en vuelo, recogemos el resultado y
        // repintamos para que el spinner avance.
        if self.tips.pending {
            self.poll_tips_result();
            ctx.request_repaint_after(std::time::Duration::from_millis(150));
        }

        // Dispatch por estado a las funciones de views
        match self.state {
            AppState::Home => views::home::ui_home(self, ctx),
            AppState::Quiz => views::quiz::ui_quiz(self, ctx),
            AppState::Tips => views::tips::ui_tips(self, ctx),
        }

        if self.confirm_reset {
            self.confirm_reset(ctx);
        }
    }
}
