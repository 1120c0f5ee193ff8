// src/gui/components/search_bar.rs
//
// Search box + buttons row. Search is a client-side filter over the current
// record list, triggered by the button or Enter; it never re-fetches.

use eframe::egui::{self, Align, Key, Layout};

use crate::gui::app::App;

pub fn draw(ui: &mut egui::Ui, app: &mut App) {
    let mut go = false;

    ui.horizontal(|ui| {
        ui.label("Identificación / No. de OM:");

        let resp = ui.add(
            egui::TextEdit::singleline(&mut app.state.gui.search_text)
                .desired_width(240.0)
                .hint_text("Buscar…"),
        );
        if resp.lost_focus() && ui.input(|i| i.key_pressed(Key::Enter)) {
            go = true;
        }

        if ui.button("Consultar").clicked() {
            go = true;
        }

        if ui.button("Indicadores").clicked() {
            app.state.gui.show_indicators = true;
        }

        ui.with_layout(Layout::right_to_left(Align::Center), |ui| {
            ui.label(app.status.clone());
        });
    });

    if go {
        app.run_search();
    }
}
