use egui::{Button, CentralPanel, Context, Frame, RichText, ScrollArea, Ui, Visuals};

pub fn top_panel(ctx: &Context) {
    egui::TopBottomPanel::top("title_panel").show(ctx, |ui| {
        ui.vertical_centered(|ui| {
            ui.add_space(6.0);
            ui.label(
                RichText::new("pracTiceQ")
                    .heading()
                    .strong()
                    .color(egui::Color32::from_rgb(139, 92, 246)),
            );
            ui.add_space(6.0);
        });
    });
}

pub fn bottom_panel(ctx: &Context) {
    egui::TopBottomPanel::bottom("bottom_panel").show(ctx, |ui| {
        // ----------- BOTONES DE TEMA -----------
        ui.with_layout(egui::Layout::right_to_left(egui::Align::Center), |ui| {
            if ui.button("🌙 Dark mode").clicked() {
                ctx.set_visuals(Visuals::dark());
            }
            if ui.button("☀ Light mode").clicked() {
                ctx.set_visuals(Visuals::light());
            }
        });
    });
}

/// Panel centrado con ancho máximo y scroll vertical para listas largas.
pub fn scroll_panel(ctx: &Context, max_width: f32, inner: impl FnOnce(&mut Ui)) {
    CentralPanel::default().show(ctx, |ui| {
        ScrollArea::vertical().auto_shrink([false; 2]).show(ui, |ui| {
            ui.vertical_centered(|ui| {
                let w = ui.available_width().min(max_width);
                Frame::default()
                    .fill(ui.visuals().window_fill())
                    .inner_margin(egui::Margin::symmetric(16, 16))
                    .show(ui, |ui| {
                        ui.set_width(w);
                        inner(ui);
                    });
            });
        });
    });
}

/// Botón a ancho completo. Devuelve `true` si se pulsó.
pub fn wide_button(ui: &mut Ui, label: &str, enabled: bool) -> bool {
    let width = ui.available_width();
    ui.add_enabled(enabled, Button::new(label).min_size(egui::vec2(width, 40.0)))
        .clicked()
}
