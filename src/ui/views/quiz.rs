use crate::QuizApp;
use crate::model::QuestionKind;
use crate::ui::helpers::error_label;
use crate::ui::layout::{scroll_panel, wide_button};
use egui::{Context, RichText, TextEdit};

pub fn ui_quiz(app: &mut QuizApp, ctx: &Context) {
    // Los cambios se aplican al final para no mutar mientras se recorre
    let mut edits: Vec<(usize, String)> = Vec::new();
    let mut submit = false;

    scroll_panel(ctx, 820.0, |ui| {
        if app.questions.is_empty() {
            ui.label("The service returned no questions.");
            ui.add_space(8.0);
        }

        for (idx, q) in app.questions.iter().enumerate() {
            ui.label(RichText::new(&q.prompt).size(17.0).strong());
            ui.add_space(4.0);

            let current = app.answers.get(&idx).map(String::as_str);
            match q.kind() {
                QuestionKind::Mcq => {
                    for option in &q.options {
                        if ui.radio(current == Some(option.as_str()), option.as_str()).clicked() {
                            edits.push((idx, option.clone()));
                        }
                    }
                }
                QuestionKind::FillInBlank => {
                    let mut buf = current.unwrap_or_default().to_owned();
                    let response = ui.add(
                        TextEdit::singleline(&mut buf)
                            .id_salt(("answer", idx))
                            .desired_width(f32::INFINITY),
                    );
                    if response.changed() {
                        edits.push((idx, buf));
                    }
                }
            }
            ui.add_space(14.0);
        }

        submit = wide_button(ui, "Submit Answers", true);
        ui.add_space(6.0);
        error_label(ui, &app.message);
    });

    for (idx, value) in edits {
        app.record_answer(idx, value);
    }
    if submit {
        app.submit();
    }
}
