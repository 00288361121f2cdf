mod helpers;
pub mod layout;
pub mod views;

use crate::app::QuizApp;
use crate::model::AppState;
use eframe::{App, Frame};
use egui::Context;
use layout::{bottom_panel, top_panel};

impl App for QuizApp {
    fn update(&mut self, ctx: &Context, _frame: &mut Frame) {
        // Primero recoger el resultado de la petición, si llegó
        self.poll_fetch_result();

        top_panel(ctx);
        bottom_panel(ctx);

        // Dispatch por estado
        match self.state {
            AppState::Configuring | AppState::Loading => views::configure::ui_configure(self, ctx),
            AppState::Answering => views::quiz::ui_quiz(self, ctx),
            AppState::Graded => views::results::ui_results(self, ctx),
        }
    }
}
