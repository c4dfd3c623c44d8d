//! App module - landing page window

use eframe::egui::{self, RichText};
use std::time::Duration;
use tracing::{info, warn};

use zen_garden_landing::{Language, MoodTaxonomy, PresentationController};

use crate::settings::{AppSettings, ThemeMode};
use crate::theme::{self, Palette};
use crate::ui::{host_text, mood_grid, sections, AboutDialog, CarouselAction, HostText};

pub struct LandingApp {
    pub controller: PresentationController,
    pub settings: AppSettings,
    pub palette: Palette,
    system_dark: bool,
    theme_dirty: bool,

    /// Section id the next frame should scroll to
    pub pending_scroll: Option<&'static str>,

    pub status_message: Option<(String, egui::Color32)>,
    pub status_timer: f64,

    pub about_dialog: AboutDialog,
}

/// Everything the user asked for during one frame; applied after rendering
#[derive(Default)]
struct FrameActions {
    language: Option<Language>,
    filter: Option<zen_garden_landing::QuadrantFilter>,
    carousel: Option<CarouselAction>,
    export: bool,
    cycle_theme: bool,
}

impl LandingApp {
    pub fn new(cc: &eframe::CreationContext<'_>, taxonomy: MoodTaxonomy, settings: AppSettings) -> Self {
        theme::install_hangul_font(&cc.egui_ctx);
        let system_dark = cc.egui_ctx.style().visuals.dark_mode;
        let controller = PresentationController::new(settings.controller_config(), taxonomy);

        Self {
            controller,
            palette: Palette::for_mode(settings.theme_mode, system_dark),
            settings,
            system_dark,
            theme_dirty: true,
            pending_scroll: None,
            status_message: None,
            status_timer: 0.0,
            about_dialog: AboutDialog::default(),
        }
    }

    fn set_success_message(&mut self, msg: String) {
        self.status_message = Some((msg, self.palette.accent));
        self.status_timer = 3.5;
    }

    fn set_error_message(&mut self, msg: String) {
        self.status_message = Some((msg, egui::Color32::from_rgb(220, 90, 90)));
        self.status_timer = 3.5;
    }

    fn export_catalog(&mut self) {
        let text = host_text(self.controller.language());
        let Some(path) = rfd::FileDialog::new()
            .add_filter("CSV Files", &["csv"])
            .set_file_name("mood-meter-100.csv")
            .save_file()
        else {
            return;
        };

        match zen_garden_landing::write_catalog_csv(self.controller.taxonomy(), &path) {
            Ok(()) => self.set_success_message(format!("{} {}", text.msg_exported, path.display())),
            Err(e) => {
                warn!("catalog export failed: {:#}", e);
                self.set_error_message(format!("{}: {:#}", text.msg_export_failed, e));
            }
        }
    }

    fn cycle_theme(&mut self) {
        self.settings.theme_mode = self.settings.theme_mode.next();
        self.palette = Palette::for_mode(self.settings.theme_mode, self.system_dark);
        self.theme_dirty = true;
        if let Err(e) = self.settings.save() {
            warn!("failed to save settings: {:#}", e);
        } else {
            info!(mode = self.settings.theme_mode.as_str(), "theme changed");
        }
    }

    fn theme_label(&self, text: &HostText) -> &'static str {
        match self.settings.theme_mode {
            ThemeMode::System => text.theme_system,
            ThemeMode::Light => text.theme_light,
            ThemeMode::Dark => text.theme_dark,
        }
    }

    fn top_bar(&mut self, ctx: &egui::Context, text: &HostText, actions: &mut FrameActions) {
        let current = self.controller.language();
        let theme_label = self.theme_label(text);

        egui::TopBottomPanel::top("nav_bar")
            .frame(egui::Frame::none().fill(self.palette.bg_card).inner_margin(egui::Margin::symmetric(20.0, 12.0)))
            .show(ctx, |ui| {
                ui.horizontal(|ui| {
                    ui.label(RichText::new("Zen Garden").strong().size(18.0));
                    ui.add_space(16.0);
                    for item in self.controller.nav_items() {
                        if ui.link(item.label).clicked() {
                            self.pending_scroll = Some(item.id);
                        }
                    }

                    ui.with_layout(egui::Layout::right_to_left(egui::Align::Center), |ui| {
                        ui.menu_button(text.menu, |ui| {
                            if ui.button(text.action_export).clicked() {
                                actions.export = true;
                                ui.close_menu();
                            }
                            if ui.button(format!("{}: {}", text.action_theme, theme_label)).clicked() {
                                actions.cycle_theme = true;
                                ui.close_menu();
                            }
                            ui.separator();
                            if ui.button(text.action_about).clicked() {
                                self.about_dialog.open = true;
                                ui.close_menu();
                            }
                        });

                        // right-to-left, so walk the languages backwards
                        for &lang in Language::ALL.iter().rev() {
                            let short = zen_garden_landing::content(lang).language_short;
                            if ui.selectable_label(lang == current, short).clicked() {
                                actions.language = Some(lang);
                            }
                        }
                    });
                });
            });
    }

    fn page(&mut self, ctx: &egui::Context, text: &HostText, actions: &mut FrameActions) {
        let lang = self.controller.language();
        let content = self.controller.content();
        let palette = &self.palette;
        let pending = &mut self.pending_scroll;

        egui::CentralPanel::default().show(ctx, |ui| {
            egui::ScrollArea::vertical().auto_shrink([false; 2]).show(ui, |ui| {
                ui.add_space(16.0);
                sections::hero(ui, content, palette);

                sections::section_heading(ui, "why", content.why.title, pending);
                sections::description(ui, content.why.description, palette);
                ui.add_space(12.0);
                sections::card_row(ui, content.why.cards, palette);

                sections::section_heading(ui, "pipeline", content.pipeline.title, pending);
                sections::description(ui, content.pipeline.description, palette);
                ui.add_space(12.0);
                sections::card_row(ui, content.pipeline.steps, palette);

                ui.add_space(36.0);
                sections::eyebrow(ui, content.ritual.eyebrow, palette);
                sections::section_heading(ui, "ritual", content.ritual.title, pending);
                sections::description(ui, content.ritual.description, palette);
                ui.add_space(12.0);
                sections::card_row(ui, content.ritual.features, palette);

                sections::section_heading(ui, "library", content.library.title, pending);
                let options = self.controller.filter_options();
                let panels = self.controller.quadrant_panels();
                actions.filter = mood_grid::mood_library(ui, content, &options, &panels, lang, palette);

                sections::section_heading(ui, "tech", content.tech.title, pending);
                sections::description(ui, content.tech.description, palette);
                ui.add_space(12.0);
                sections::card_row(ui, content.tech.points, palette);
                ui.label(RichText::new(content.tech.meta).small().color(palette.text_muted));

                sections::section_heading(ui, "testimonials", content.testimonials.title, pending);
                actions.carousel = crate::ui::carousel::testimonials(ui, self.controller.testimonial(), text, palette);

                sections::section_heading(ui, "faq", content.faq.title, pending);
                sections::faq(ui, content.faq.items, palette);

                ui.add_space(48.0);
                sections::footer(ui, content, palette);
                ui.add_space(24.0);
            });
        });
    }

    fn apply(&mut self, actions: FrameActions) {
        if let Some(filter) = actions.filter {
            self.controller.set_quadrant_filter(filter);
        }
        match actions.carousel {
            Some(CarouselAction::Next) => self.controller.next_testimonial(),
            Some(CarouselAction::Previous) => self.controller.previous_testimonial(),
            None => {}
        }
        if let Some(lang) = actions.language {
            self.controller.set_language(lang);
        }
        if actions.cycle_theme {
            self.cycle_theme();
        }
        if actions.export {
            self.export_catalog();
        }
    }
}

impl eframe::App for LandingApp {
    fn update(&mut self, ctx: &egui::Context, _frame: &mut eframe::Frame) {
        if self.theme_dirty {
            self.palette.apply(ctx);
            self.theme_dirty = false;
        }

        let now = Duration::from_secs_f64(ctx.input(|i| i.time).max(0.0));
        self.controller.tick(now);
        if let Some(wait) = self.controller.time_until_next(now) {
            ctx.request_repaint_after(wait);
        }

        if self.status_timer > 0.0 {
            self.status_timer -= ctx.input(|i| i.stable_dt) as f64;
            if self.status_timer <= 0.0 {
                self.status_message = None;
            } else {
                ctx.request_repaint();
            }
        }

        let text = host_text(self.controller.language());
        let mut actions = FrameActions::default();

        self.top_bar(ctx, text, &mut actions);

        if let Some((msg, color)) = &self.status_message {
            egui::TopBottomPanel::bottom("status_bar").show(ctx, |ui| {
                ui.label(RichText::new(msg).color(*color));
            });
        }

        self.page(ctx, text, &mut actions);
        self.about_dialog.show(ctx, text);

        self.apply(actions);
    }
}
