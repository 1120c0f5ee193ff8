// src/gui/components/indicators.rs
//
// Indicators window: five half-doughnut percentage gauges over the current
// summary (share of groups per category), each with a "xx.x% (n)" label.
// Gauges are painted fresh every frame; there are no retained chart handles.

use std::f32::consts::PI;

use eframe::egui::{self, Color32, Pos2, Shape, Stroke, Vec2};

use crate::group::Summary;
use crate::gui::app::App;

use super::summary_tiles::{
    COLOR_EXPEDITED, COLOR_IN_PROCESS, COLOR_NOT_ISSUED, COLOR_NOT_PAID, COLOR_PAID,
};

const GAUGE_SIZE: Vec2 = Vec2::new(132.0, 78.0);
const RING_RADIUS: f32 = 48.0;
const RING_THICKNESS: f32 = 14.0;
const TRACK_COLOR: Color32 = Color32::from_rgb(0xe0, 0xe0, 0xe0);

pub fn draw(ctx: &egui::Context, app: &mut App) {
    // nothing to chart before the first load
    if !app.state.gui.show_indicators || app.records.is_empty() {
        return;
    }

    let s = app.summary;
    let mut open = true;

    egui::Window::new("Indicadores")
        .open(&mut open)
        .resizable(false)
        .show(ctx, |ui| {
            ui.horizontal_wrapped(|ui| {
                gauge(ui, "Expedidas", s.expedited, s, COLOR_EXPEDITED);
                gauge(ui, "En expedición", s.in_process, s, COLOR_IN_PROCESS);
                gauge(ui, "Sin expedir", s.not_issued, s, COLOR_NOT_ISSUED);
                gauge(ui, "Pagados", s.paid, s, COLOR_PAID);
                gauge(ui, "No pagados", s.not_paid, s, COLOR_NOT_PAID);
            });
        });

    if !open {
        app.state.gui.show_indicators = false;
    }
}

fn gauge(ui: &mut egui::Ui, label: &str, value: usize, summary: Summary, color: Color32) {
    let percent = if summary.total > 0 {
        value as f32 / summary.total as f32 * 100.0
    } else {
        0.0
    };

    ui.vertical(|ui| {
        ui.set_width(GAUGE_SIZE.x);
        let (rect, _) = ui.allocate_exact_size(GAUGE_SIZE, egui::Sense::hover());
        let center = Pos2::new(rect.center().x, rect.bottom() - 8.0);
        let painter = ui.painter_at(rect);

        // full track, then the value arc on top
        half_arc(&painter, center, 1.0, TRACK_COLOR);
        if value > 0 {
            half_arc(&painter, center, percent / 100.0, color);
        }

        ui.vertical_centered(|ui| {
            ui.label(egui::RichText::new(format!("{percent:.1}% ({value})")).strong());
            ui.label(label);
        });
    });
}

/// Stroke a half-ring from the left horizontal, sweeping over the top.
/// `frac` is the swept share of the semicircle (0..=1).
fn half_arc(painter: &egui::Painter, center: Pos2, frac: f32, color: Color32) {
    let frac = frac.clamp(0.0, 1.0);
    let steps = (48.0 * frac).ceil().max(1.0) as usize;
    let points: Vec<Pos2> = (0..=steps)
        .map(|i| {
            // screen y grows downward, so PI..2PI is the upper semicircle
            let a = PI + frac * PI * (i as f32 / steps as f32);
            Pos2::new(
                center.x + RING_RADIUS * a.cos(),
                center.y + RING_RADIUS * a.sin(),
            )
        })
        .collect();
    painter.add(Shape::line(points, Stroke::new(RING_THICKNESS, color)));
}
