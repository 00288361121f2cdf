use crate::QuizApp;
use crate::ui::helpers::feedback_frame;
use crate::ui::layout::{scroll_panel, wide_button};
use egui::{Color32, Context, RichText};

pub fn ui_results(app: &mut QuizApp, ctx: &Context) {
    let rows = app.feedback_rows();
    let mut try_again = false;

    scroll_panel(ctx, 820.0, |ui| {
        for row in &rows {
            ui.label(RichText::new(&row.prompt).size(17.0).strong());
            ui.add_space(4.0);
            feedback_frame(ui, row.correct, |ui| {
                ui.label(
                    RichText::new(format!("{} {}", row.status_icon(), row.your_answer_label()))
                        .color(Color32::BLACK),
                );
                ui.label(RichText::new(row.correct_answer_label()).color(Color32::BLACK));
            });
            ui.add_space(14.0);
        }

        ui.vertical_centered(|ui| {
            if let Some(result) = app.result() {
                ui.heading(format!("Score: {} / {}", result.score, result.total));
            }
        });
        ui.add_space(10.0);
        try_again = wide_button(ui, "Try Again", true);
    });

    if try_again {
        app.reset();
    }
}
