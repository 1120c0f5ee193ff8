// src/gui/components/data_table.rs
//
// Draws the grouped results table. Purely a view: one row per table group,
// displayed fields from the group's first member, payment mark synthesized
// across all members. The status cell opens the detail window.

use eframe::egui::{self, Align, Color32, Layout, RichText, TextWrapMode};
use egui_extras::{Column as TableColumn, TableBuilder};

use crate::group::{self, PaymentMark};
use crate::gui::app::App;
use crate::record::{Column, TABLE_FIELDS};

const PAY_GREEN: Color32 = Color32::from_rgb(0x28, 0xa7, 0x45);
const PAY_AMBER: Color32 = Color32::from_rgb(0xd8, 0x8f, 0x00);
const PAY_RED: Color32 = Color32::from_rgb(0xdc, 0x35, 0x45);

fn headers() -> [&'static str; 7] {
    [
        Column::Contract.header(),
        Column::Identification.header(),
        Column::Client.header(),
        Column::PurchaseType.header(),
        Column::Buyer.header(),
        Column::Payment.header(),
        Column::Status.header(),
    ]
}

const WIDTHS: [f32; 7] = [150.0, 110.0, 180.0, 110.0, 160.0, 50.0, 120.0];

pub fn draw(ui: &mut egui::Ui, app: &mut App) {
    if app.table.is_empty() {
        // EmptyResult is a rendered state, not an error
        ui.vertical_centered(|ui| {
            ui.add_space(24.0);
            ui.label(RichText::new("No se encontraron registros.").italics());
        });
        return;
    }

    let records = &app.records.records;
    let groups = &app.table;
    let mut clicked: Option<usize> = None;

    let avail_h = ui.available_height();
    egui::ScrollArea::horizontal()
        .id_salt("results_table_hscroll")
        .max_height(avail_h)
        .show(ui, |ui| {
            let mut table = TableBuilder::new(ui)
                .striped(true)
                .min_scrolled_height(0.0)
                .id_salt("results_table");
            for w in WIDTHS {
                table = table.column(TableColumn::initial(w).resizable(true).clip(true).at_least(20.0));
            }

            table
                .header(24.0, |mut header| {
                    for h in headers() {
                        header.col(|ui| {
                            ui.scope(|ui| {
                                ui.style_mut().wrap_mode = Some(TextWrapMode::Extend);
                                ui.add(egui::Label::new(RichText::new(h).strong()).selectable(false));
                            });
                        });
                    }
                })
                .body(|body| {
                    body.rows(20.0, groups.len(), |mut row| {
                        let g = &groups[row.index()];
                        let group_ix = row.index();
                        let first = &records[g.rows[0]];

                        for col in TABLE_FIELDS {
                            row.col(|ui| {
                                ui.scope(|ui| {
                                    ui.style_mut().wrap_mode = Some(TextWrapMode::Extend);
                                    let text = if col == Column::Contract {
                                        group::contract_of(first)
                                    } else {
                                        first.get(col)
                                    };
                                    ui.with_layout(Layout::left_to_right(Align::Center), |ui| {
                                        ui.label(text);
                                    });
                                });
                            });
                        }

                        // payment mark, tri-state
                        let (mark, color) = match group::payment_mark(records, g) {
                            PaymentMark::Paid => ("✔", PAY_GREEN),
                            PaymentMark::Partial => ("⚠", PAY_AMBER),
                            PaymentMark::Unpaid => ("✘", PAY_RED),
                        };
                        row.col(|ui| {
                            ui.centered_and_justified(|ui| {
                                ui.label(RichText::new(mark).color(color).strong());
                            });
                        });

                        // status cell opens the detail window for the group
                        row.col(|ui| {
                            ui.with_layout(Layout::left_to_right(Align::Center), |ui| {
                                if ui.link(first.get(Column::Status)).clicked() {
                                    clicked = Some(group_ix);
                                }
                            });
                        });
                    });
                });
        });

    if let Some(ix) = clicked {
        app.open_detail(ix);
    }
}
