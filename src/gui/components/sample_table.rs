// src/gui/components/sample_table.rs
//
// Read-only table of whatever a scene is showing. Purely a view.

use eframe::egui;
use egui_extras::{Column, TableBuilder};

pub fn draw(ui: &mut egui::Ui, headers: &[&str], rows: &[Vec<String>], selected: Option<usize>) {
    let cols = headers.len();
    if cols == 0 { return; }

    let mut table = TableBuilder::new(ui)
        .striped(true)
        .column(Column::auto().at_least(60.0));
    for _ in 1..cols {
        table = table.column(Column::auto().at_least(50.0));
    }

    table
        .header(20.0, |mut header| {
            for h in headers {
                header.col(|ui| { ui.strong(*h); });
            }
        })
        .body(|mut body| {
            body.rows(18.0, rows.len(), |mut row| {
                let ix = row.index();
                row.set_selected(selected == Some(ix));
                if let Some(data) = rows.get(ix) {
                    for cell in data {
                        row.col(|ui| { ui.label(cell); });
                    }
                }
            });
        });
}
