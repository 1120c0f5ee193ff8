// src/gui/components/detail.rs
//
// Detail window for one table group: a block per member row listing the
// non-empty detail fields with human labels, plus the two export buttons.

use eframe::egui::{self, RichText};

use crate::export;
use crate::group::contract_of;
use crate::gui::app::App;
use crate::record::DETAIL_FIELDS;

pub fn draw(ctx: &egui::Context, app: &mut App) {
    let Some(group) = app.detail.clone() else { return };

    let records = &app.records.records;
    let out_dir = app.state.options.export.out_dir();
    let first = &records[group.rows[0]];
    let title = format!("Detalle del contrato {}", contract_of(first));

    let mut open = true;
    let mut status_msg: Option<String> = None;

    egui::Window::new(title)
        .open(&mut open)
        .default_width(460.0)
        .vscroll(true)
        .show(ctx, |ui| {
            ui.horizontal(|ui| {
                if ui.button("Descargar CSV").clicked() {
                    status_msg = Some(match export::export_group_csv(out_dir, records, &group) {
                        Ok(p) => format!("CSV exportado: {}", p.display()),
                        Err(e) => {
                            loge!("Export: CSV failed: {}", e);
                            format!("Error al exportar CSV: {e}")
                        }
                    });
                }
                if ui.button("Descargar PDF").clicked() {
                    status_msg = Some(match export::export_group_pdf(out_dir, records, &group) {
                        Ok(p) => format!("PDF exportado: {}", p.display()),
                        Err(e) => {
                            loge!("Export: PDF failed: {}", e);
                            format!("Error al exportar PDF: {e}")
                        }
                    });
                }
            });

            ui.separator();

            for &ix in &group.rows {
                let record = &records[ix];
                for (label, value) in record.labeled_fields(&DETAIL_FIELDS) {
                    ui.horizontal_wrapped(|ui| {
                        ui.label(RichText::new(format!("{label}:")).strong());
                        ui.label(value);
                    });
                }
                ui.separator();
            }
        });

    if let Some(msg) = status_msg {
        app.status(msg);
    }
    if !open {
        app.detail = None;
    }
}
