//! Static page sections: hero, card rows, FAQ and footer

use eframe::egui::{self, RichText};

use zen_garden_landing::i18n::{Card, FaqItem};
use zen_garden_landing::ContentTree;

use crate::theme::Palette;

/// Section heading. Scrolls itself into view when `pending_scroll` names
/// this section, then clears it.
pub fn section_heading(ui: &mut egui::Ui, id: &str, title: &str, pending_scroll: &mut Option<&'static str>) {
    ui.add_space(36.0);
    let response = ui.heading(title);
    if *pending_scroll == Some(id) {
        response.scroll_to_me(Some(egui::Align::TOP));
        *pending_scroll = None;
    }
    ui.add_space(6.0);
}

pub fn eyebrow(ui: &mut egui::Ui, text: &str, palette: &Palette) {
    ui.label(RichText::new(text.to_uppercase()).small().strong().color(palette.accent));
}

pub fn description(ui: &mut egui::Ui, text: &str, palette: &Palette) {
    ui.label(RichText::new(text).color(palette.text_muted));
}

pub fn hero(ui: &mut egui::Ui, content: &ContentTree, palette: &Palette) {
    egui::Frame::none()
        .fill(palette.bg_card_alt)
        .rounding(32.0)
        .inner_margin(40.0)
        .show(ui, |ui| {
            ui.set_width(ui.available_width());
            eyebrow(ui, content.hero.eyebrow, palette);
            ui.add_space(12.0);
            ui.label(RichText::new(content.hero.title).size(36.0).strong());
            ui.add_space(12.0);
            description(ui, content.hero.description, palette);
        });
}

/// A row of equally wide cards
pub fn card_row(ui: &mut egui::Ui, cards: &[Card], palette: &Palette) {
    if cards.is_empty() {
        return;
    }
    ui.columns(cards.len(), |columns| {
        for (index, (column, card)) in columns.iter_mut().zip(cards).enumerate() {
            egui::Frame::none()
                .fill(palette.card_layer(index))
                .stroke(egui::Stroke::new(1.0, palette.border))
                .rounding(24.0)
                .inner_margin(20.0)
                .show(column, |ui| {
                    ui.set_min_height(150.0);
                    ui.label(RichText::new(card.title).strong().size(17.0));
                    ui.add_space(6.0);
                    description(ui, card.description, palette);
                });
        }
    });
}

pub fn faq(ui: &mut egui::Ui, items: &[FaqItem], palette: &Palette) {
    for (index, item) in items.iter().enumerate() {
        egui::Frame::none()
            .fill(palette.card_layer(index))
            .stroke(egui::Stroke::new(1.0, palette.border))
            .rounding(20.0)
            .inner_margin(12.0)
            .show(ui, |ui| {
                ui.set_width(ui.available_width());
                egui::CollapsingHeader::new(RichText::new(item.question).strong())
                    .id_source(("faq", index))
                    .show(ui, |ui| {
                        description(ui, item.answer, palette);
                    });
            });
        ui.add_space(6.0);
    }
}

pub fn footer(ui: &mut egui::Ui, content: &ContentTree, palette: &Palette) {
    egui::Frame::none()
        .fill(palette.bg_footer)
        .stroke(egui::Stroke::new(1.0, palette.border))
        .rounding(20.0)
        .inner_margin(20.0)
        .show(ui, |ui| {
            ui.set_width(ui.available_width());
            ui.vertical_centered(|ui| {
                ui.label(RichText::new(content.footer.whisper).small().color(palette.text_muted));
            });
        });
}
