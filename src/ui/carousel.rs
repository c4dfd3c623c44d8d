use eframe::egui::{self, RichText};

use zen_garden_landing::controller::TestimonialView;

use super::text::HostText;
use crate::theme::Palette;

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum CarouselAction {
    Previous,
    Next,
}

/// Testimonial header with position and arrows, then the active quote.
pub fn testimonials(
    ui: &mut egui::Ui,
    view: Option<TestimonialView>,
    text: &HostText,
    palette: &Palette,
) -> Option<CarouselAction> {
    let mut action = None;

    ui.horizontal(|ui| {
        if let Some(view) = view {
            ui.label(RichText::new(view.position_label()).monospace().color(palette.text_muted));
        }
        ui.with_layout(egui::Layout::right_to_left(egui::Align::Center), |ui| {
            if ui.button("→").on_hover_text(text.carousel_next).clicked() {
                action = Some(CarouselAction::Next);
            }
            if ui.button("←").on_hover_text(text.carousel_previous).clicked() {
                action = Some(CarouselAction::Previous);
            }
        });
    });
    ui.add_space(8.0);

    let Some(view) = view else {
        return action;
    };

    egui::Frame::none()
        .fill(palette.bg_card)
        .stroke(egui::Stroke::new(1.0, palette.border))
        .rounding(28.0)
        .inner_margin(24.0)
        .show(ui, |ui| {
            ui.set_min_height(140.0);
            ui.label(RichText::new(format!("“{}”", view.item.quote)).size(19.0));
            ui.add_space(10.0);
            ui.label(
                RichText::new(format!("{} · {}", view.item.name, view.item.role).to_uppercase())
                    .small()
                    .color(palette.text_muted),
            );
        });

    action
}
