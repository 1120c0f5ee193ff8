// src/gui/components/summary_tiles.rs
//
// Six clickable counter tiles. Counts come from the summary aggregation over
// the search-filtered rows; clicking a tile re-filters the table by that
// tile's category.

use eframe::egui::{self, Color32, RichText, Stroke, Vec2};

use crate::group::FilterTag;
use crate::gui::app::App;

pub const COLOR_TOTAL: Color32 = Color32::from_rgb(0x6c, 0x75, 0x7d);
pub const COLOR_EXPEDITED: Color32 = Color32::from_rgb(0x28, 0xa7, 0x45);
pub const COLOR_IN_PROCESS: Color32 = Color32::from_rgb(0x17, 0xa2, 0xb8);
pub const COLOR_NOT_ISSUED: Color32 = Color32::from_rgb(0xdc, 0x35, 0x45);
pub const COLOR_PAID: Color32 = Color32::from_rgb(0x00, 0x7b, 0xff);
pub const COLOR_NOT_PAID: Color32 = Color32::from_rgb(0xff, 0xc1, 0x07);

pub fn draw(ui: &mut egui::Ui, app: &mut App) {
    let s = app.summary;
    let tiles: [(FilterTag, &str, usize, Color32); 6] = [
        (FilterTag::All, "Total", s.total, COLOR_TOTAL),
        (FilterTag::Expedited, "Expedidas", s.expedited, COLOR_EXPEDITED),
        (FilterTag::InProcess, "En expedición", s.in_process, COLOR_IN_PROCESS),
        (FilterTag::NotIssued, "Sin expedir", s.not_issued, COLOR_NOT_ISSUED),
        (FilterTag::Paid, "Pagados", s.paid, COLOR_PAID),
        (FilterTag::NotPaid, "No pagados", s.not_paid, COLOR_NOT_PAID),
    ];

    let mut clicked: Option<FilterTag> = None;

    ui.horizontal_wrapped(|ui| {
        for (tag, label, count, color) in tiles {
            let active = app.state.gui.active_filter == tag;
            let text = RichText::new(format!("{count}\n{label}"))
                .size(16.0)
                .color(Color32::WHITE)
                .strong();
            let mut button = egui::Button::new(text)
                .fill(color)
                .min_size(Vec2::new(130.0, 54.0));
            if active {
                button = button.stroke(Stroke::new(2.0, Color32::WHITE));
            }
            if ui.add(button).clicked() {
                clicked = Some(tag);
            }
        }
    });

    if let Some(tag) = clicked {
        app.set_filter(tag);
    }
}
