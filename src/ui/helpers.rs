// src/ui/helpers.rs
use egui::{Color32, ComboBox, Frame, RichText, Ui};

/// Selector desplegable sobre una lista fija de valores.
pub fn combo_select<T: Copy + PartialEq>(
    ui: &mut Ui,
    id: &str,
    current: &mut T,
    values: &[T],
    label: impl Fn(T) -> &'static str,
) {
    ComboBox::from_id_salt(id)
        .width(ui.available_width())
        .selected_text(label(*current))
        .show_ui(ui, |ui| {
            for value in values {
                ui.selectable_value(current, *value, label(*value));
            }
        });
}

/// Recuadro verde o rojo según acierto
pub fn feedback_frame(ui: &mut Ui, correct: bool, inner: impl FnOnce(&mut Ui)) {
    let fill = if correct {
        Color32::from_rgb(187, 247, 208)
    } else {
        Color32::from_rgb(254, 202, 202)
    };
    Frame::default()
        .fill(fill)
        .corner_radius(4)
        .inner_margin(egui::Margin::symmetric(12, 8))
        .show(ui, |ui| {
            ui.set_width(ui.available_width());
            inner(ui);
        });
}

pub fn error_label(ui: &mut Ui, message: &str) {
    if !message.is_empty() {
        ui.label(RichText::new(format!("⚠ {message}")).color(Color32::LIGHT_RED));
    }
}
