use eframe::egui::{self, Color32};
use std::fs;
use tracing::{debug, warn};

use crate::settings::ThemeMode;
use zen_garden_landing::models::mood::{QuadrantMeta, Rgb};

// grey base tones plus one muted "dawn" accent
#[derive(Debug, Clone, PartialEq)]
pub struct Palette {
    pub is_dark: bool,

    pub bg_page: Color32,
    pub bg_card: Color32,
    pub bg_card_alt: Color32,
    pub bg_footer: Color32,

    pub border: Color32,

    pub text_primary: Color32,
    pub text_muted: Color32,
    pub accent: Color32,
    pub on_accent: Color32,

    pub badge_fill: Color32,
    pub badge_text: Color32,
}

impl Palette {
    pub fn light() -> Self {
        Self {
            is_dark: false,
            bg_page: Color32::from_rgb(241, 241, 241),
            bg_card: Color32::from_rgb(250, 250, 250),
            bg_card_alt: Color32::from_rgb(232, 232, 232),
            bg_footer: Color32::from_rgb(250, 250, 250),
            border: Color32::from_rgba_unmultiplied(51, 50, 57, 30),
            text_primary: Color32::from_rgb(51, 50, 57),
            text_muted: Color32::from_rgb(110, 109, 116),
            accent: Color32::from_rgb(122, 139, 132),
            on_accent: Color32::from_rgb(250, 250, 250),
            badge_fill: Color32::from_rgb(214, 214, 214),
            badge_text: Color32::from_rgb(51, 50, 57),
        }
    }

    pub fn dark() -> Self {
        Self {
            is_dark: true,
            bg_page: Color32::from_rgb(28, 28, 31),
            bg_card: Color32::from_rgb(40, 40, 44),
            bg_card_alt: Color32::from_rgb(48, 48, 53),
            bg_footer: Color32::from_rgb(22, 22, 25),
            border: Color32::from_rgba_unmultiplied(241, 241, 241, 24),
            text_primary: Color32::from_rgb(230, 230, 232),
            text_muted: Color32::from_rgb(160, 160, 166),
            accent: Color32::from_rgb(150, 170, 162),
            on_accent: Color32::from_rgb(28, 28, 31),
            badge_fill: Color32::from_rgb(70, 70, 76),
            badge_text: Color32::from_rgb(235, 235, 238),
        }
    }

    pub fn for_mode(mode: ThemeMode, system_dark: bool) -> Self {
        match mode {
            ThemeMode::Light => Self::light(),
            ThemeMode::Dark => Self::dark(),
            ThemeMode::System if system_dark => Self::dark(),
            ThemeMode::System => Self::light(),
        }
    }

    /// Alternating card backgrounds
    pub fn card_layer(&self, index: usize) -> Color32 {
        if index % 2 == 0 { self.bg_card } else { self.bg_card_alt }
    }

    pub fn apply(&self, ctx: &egui::Context) {
        let mut visuals = if self.is_dark { egui::Visuals::dark() } else { egui::Visuals::light() };

        visuals.window_fill = self.bg_card;
        visuals.panel_fill = self.bg_page;
        visuals.faint_bg_color = self.bg_card_alt;
        visuals.hyperlink_color = self.accent;
        visuals.selection.bg_fill = self.accent;
        visuals.selection.stroke = egui::Stroke::new(1.0, self.on_accent);
        visuals.override_text_color = Some(self.text_primary);

        visuals.window_rounding = egui::Rounding::same(12.0);
        visuals.window_shadow = egui::epaint::Shadow {
            offset: egui::vec2(0.0, 6.0),
            blur: 18.0,
            spread: 0.0,
            color: egui::Color32::from_black_alpha(40),
        };
        visuals.popup_shadow = visuals.window_shadow;

        ctx.set_visuals(visuals);

        let mut style = (*ctx.style()).clone();
        style.spacing.item_spacing = egui::vec2(10.0, 8.0);
        style.text_styles.insert(egui::TextStyle::Heading, egui::FontId::proportional(26.0));
        style.text_styles.insert(egui::TextStyle::Body, egui::FontId::proportional(15.0));
        ctx.set_style(style);
    }
}

/// Translucent quadrant tint, faded further by `opacity`
pub fn quadrant_tint(meta: &QuadrantMeta, alpha: f32, opacity: f32) -> Color32 {
    let (r, g, b, a) = meta.rgb().unwrap_or(Rgb { r: 128, g: 128, b: 128 }).with_alpha(alpha);
    Color32::from_rgba_unmultiplied(r, g, b, (a * 255.0).round() as u8).gamma_multiply(opacity)
}

// egui's bundled fonts have no Hangul; borrow a system CJK font as fallback
const HANGUL_FONT_CANDIDATES: &[&str] = &[
    "C:\\Windows\\Fonts\\malgun.ttf",
    "/System/Library/Fonts/AppleSDGothicNeo.ttc",
    "/usr/share/fonts/opentype/noto/NotoSansCJK-Regular.ttc",
    "/usr/share/fonts/noto-cjk/NotoSansCJK-Regular.ttc",
    "/usr/share/fonts/truetype/nanum/NanumGothic.ttf",
];

pub fn install_hangul_font(ctx: &egui::Context) {
    let Some((path, bytes)) = HANGUL_FONT_CANDIDATES
        .iter()
        .find_map(|p| fs::read(p).ok().map(|b| (*p, b)))
    else {
        warn!("no Hangul font found, Korean copy may not render");
        return;
    };

    let mut fonts = egui::FontDefinitions::default();
    fonts.font_data.insert("hangul".to_owned(), egui::FontData::from_owned(bytes));
    for family in [egui::FontFamily::Proportional, egui::FontFamily::Monospace] {
        fonts.families.entry(family).or_default().push("hangul".to_owned());
    }
    ctx.set_fonts(fonts);
    debug!(path, "Hangul font installed");
}
