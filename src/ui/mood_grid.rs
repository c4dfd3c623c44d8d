//! Mood library: filter chips and the four quadrant panels

use eframe::egui::{self, Align2, FontId, RichText};

use zen_garden_landing::controller::{FilterOption, QuadrantPanel};
use zen_garden_landing::models::mood::{PANEL_SHADOW_ALPHA, PANEL_TINT_ALPHA};
use zen_garden_landing::models::{Emphasis, GridCell, MoodEmotion, QuadrantFilter};
use zen_garden_landing::{ContentTree, Language};

use crate::theme::{quadrant_tint, Palette};

const BADGE_SIZE: egui::Vec2 = egui::vec2(96.0, 38.0);
const CELL_SPACING: f32 = 6.0;

/// Renders the chips and returns the one pressed this frame.
pub fn filter_chips(ui: &mut egui::Ui, options: &[FilterOption], palette: &Palette) -> Option<QuadrantFilter> {
    let mut pressed = None;
    ui.horizontal_wrapped(|ui| {
        for option in options {
            let text = RichText::new(option.label).strong();
            let text = if option.active { text.color(palette.on_accent) } else { text.color(palette.text_muted) };
            let chip = egui::Button::new(text)
                .rounding(16.0)
                .fill(if option.active { palette.accent } else { egui::Color32::TRANSPARENT })
                .stroke(egui::Stroke::new(1.0, palette.border));
            if ui.add(chip).clicked() {
                pressed = Some(option.filter);
            }
        }
    });
    pressed
}

fn badge(ui: &mut egui::Ui, emotion: &MoodEmotion, lang: Language, palette: &Palette, emphasis: Emphasis) {
    let scale = emphasis.scale;
    let (rect, response) = ui.allocate_exact_size(BADGE_SIZE * scale, egui::Sense::hover());
    let painter = ui.painter();

    painter.rect_filled(rect, rect.height() / 2.0, palette.badge_fill.gamma_multiply(emphasis.opacity));
    painter.text(
        rect.center() - egui::vec2(0.0, 6.0 * scale),
        Align2::CENTER_CENTER,
        emotion.primary_name(lang),
        FontId::proportional(11.5 * scale),
        palette.badge_text.gamma_multiply(emphasis.opacity),
    );
    painter.text(
        rect.center() + egui::vec2(0.0, 9.0 * scale),
        Align2::CENTER_CENTER,
        emotion.secondary_name(lang),
        FontId::proportional(8.5 * scale),
        palette.text_muted.gamma_multiply(emphasis.opacity),
    );

    response.on_hover_text(emotion.tooltip());
}

pub fn quadrant_panel(ui: &mut egui::Ui, panel: &QuadrantPanel<'_>, lang: Language, palette: &Palette) {
    let meta = panel.quadrant.meta();
    let emphasis = panel.emphasis;

    let mut frame = egui::Frame::none()
        .fill(quadrant_tint(meta, PANEL_TINT_ALPHA, emphasis.opacity))
        .stroke(egui::Stroke::new(1.0, palette.border))
        .rounding(24.0)
        .inner_margin(16.0);
    if panel.highlighted {
        frame = frame.shadow(egui::epaint::Shadow {
            offset: egui::vec2(0.0, 10.0),
            blur: 24.0,
            spread: 0.0,
            color: quadrant_tint(meta, PANEL_SHADOW_ALPHA, 1.0),
        });
    }

    frame.show(ui, |ui| {
        ui.horizontal(|ui| {
            ui.label(RichText::new(panel.label).small().strong().color(palette.text_muted));
            ui.with_layout(egui::Layout::right_to_left(egui::Align::Center), |ui| {
                ui.label(RichText::new(panel.count_label()).monospace().color(palette.text_muted));
            });
        });
        ui.add_space(8.0);

        egui::Grid::new(("quadrant_grid", panel.quadrant.key()))
            .num_columns(zen_garden_landing::limits::BADGES_PER_ROW)
            .spacing([CELL_SPACING, CELL_SPACING])
            .show(ui, |ui| {
                for row in &panel.rows {
                    for cell in row {
                        match cell {
                            GridCell::Emotion(emotion) => badge(ui, emotion, lang, palette, emphasis),
                            GridCell::Placeholder => {
                                ui.allocate_space(BADGE_SIZE * emphasis.scale);
                            }
                        }
                    }
                    ui.end_row();
                }
            });
    });
}

/// Library section body. Returns the filter chip pressed this frame.
pub fn mood_library(
    ui: &mut egui::Ui,
    content: &ContentTree,
    options: &[FilterOption],
    panels: &[QuadrantPanel<'_>],
    lang: Language,
    palette: &Palette,
) -> Option<QuadrantFilter> {
    let library = &content.library;
    ui.label(RichText::new(library.description).color(palette.text_muted));
    ui.add_space(12.0);

    let pressed = filter_chips(ui, options, palette);
    ui.label(RichText::new(library.callout).small().color(palette.text_muted));
    ui.add_space(12.0);

    let axis = |ui: &mut egui::Ui, text: &str| {
        ui.vertical_centered(|ui| {
            ui.label(RichText::new(text).small().strong().color(palette.accent));
        });
    };

    axis(ui, library.axes.energy_high);
    ui.horizontal(|ui| {
        ui.label(RichText::new(library.axes.pleasant_low).small().color(palette.text_muted));
        ui.with_layout(egui::Layout::right_to_left(egui::Align::Center), |ui| {
            ui.label(RichText::new(library.axes.pleasant_high).small().color(palette.text_muted));
        });
    });

    // two panels per row: unpleasant left, pleasant right
    for pair in panels.chunks(2) {
        ui.columns(2, |columns| {
            for (column, panel) in columns.iter_mut().zip(pair) {
                quadrant_panel(column, panel, lang, palette);
            }
        });
        ui.add_space(CELL_SPACING * 2.0);
    }
    axis(ui, library.axes.energy_low);

    pressed
}
