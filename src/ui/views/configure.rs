use crate::QuizApp;
use crate::data::OTHER_TOPIC;
use crate::model::{Difficulty, QuestionType};
use crate::ui::helpers::{combo_select, error_label};
use crate::ui::layout::{scroll_panel, wide_button};
use egui::{ComboBox, Context, RichText, TextEdit};

const FEATURES: [&str; 4] = [
    "✅ Personalized Question Generation.",
    "✅ Adaptive Difficulty Levels.",
    "✅ Saves Time on Question Curation.",
    "✅ Covers Diverse Tech Topics.",
];

pub fn ui_configure(app: &mut QuizApp, ctx: &Context) {
    let loading = app.is_loading();
    let mut start = false;

    scroll_panel(ctx, 720.0, |ui| {
        ui.label(
            RichText::new("🚀 Prepare for Online Assessments & Tests with AI-Generated Questions")
                .heading(),
        );
        ui.add_space(12.0);

        ui.columns(2, |cols| {
            for feature in FEATURES {
                cols[0].label(feature);
            }

            let ui = &mut cols[1];
            ui.strong("Select Quiz Options");
            ui.add_space(8.0);

            // Nada editable mientras hay una petición en vuelo
            ui.add_enabled_ui(!loading, |ui| {
                ui.label("Topic:");
                ComboBox::from_id_salt("topic")
                    .width(ui.available_width())
                    .selected_text(app.config.topic.clone())
                    .show_ui(ui, |ui| {
                        for topic in &app.topics {
                            ui.selectable_value(&mut app.config.topic, topic.clone(), topic.as_str());
                        }
                    });

                if app.config.topic == OTHER_TOPIC {
                    ui.add(
                        TextEdit::singleline(&mut app.config.custom_topic)
                            .hint_text("Enter custom topic")
                            .desired_width(f32::INFINITY),
                    );
                }
                ui.add_space(6.0);

                ui.label("Question Type:");
                combo_select(
                    ui,
                    "question_type",
                    &mut app.config.question_type,
                    &QuestionType::ALL,
                    QuestionType::label,
                );
                ui.add_space(6.0);

                ui.label("Difficulty:");
                combo_select(
                    ui,
                    "difficulty",
                    &mut app.config.difficulty,
                    &Difficulty::ALL,
                    Difficulty::label,
                );
                ui.add_space(6.0);

                ui.label("Number of Questions:");
                ui.add(
                    TextEdit::singleline(&mut app.config.question_count)
                        .desired_width(f32::INFINITY),
                );
            });
            ui.add_space(10.0);

            let label = if loading { "Loading..." } else { "Start Quiz" };
            start = wide_button(ui, label, !loading);
            if loading {
                ui.add(egui::Spinner::new());
            }

            ui.add_space(6.0);
            error_label(ui, &app.message);
        });
    });

    if start {
        app.start_quiz(ctx);
    }
}
