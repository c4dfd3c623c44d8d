use regex::Regex;
use serde::Serialize;
use std::fmt;
use std::sync::OnceLock;

use crate::i18n::Language;

/// 무드미터 사분면: 활력(높음/낮음) × 쾌(즐거움/불편함)
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize)]
#[serde(rename_all = "lowercase")]
pub enum MoodQuadrant {
    Yellow,
    Red,
    Green,
    Blue,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Energy { High, Low }

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Valence { Pleasant, Unpleasant }

impl MoodQuadrant {
    /// Construction order of the catalog
    pub const ALL: [MoodQuadrant; 4] = [
        MoodQuadrant::Yellow,
        MoodQuadrant::Red,
        MoodQuadrant::Green,
        MoodQuadrant::Blue,
    ];

    /// Panel order on screen: high energy on top, unpleasant on the left
    pub const DISPLAY_ORDER: [MoodQuadrant; 4] = [
        MoodQuadrant::Red,
        MoodQuadrant::Yellow,
        MoodQuadrant::Blue,
        MoodQuadrant::Green,
    ];

    pub fn key(&self) -> &'static str {
        match self {
            MoodQuadrant::Yellow => "yellow",
            MoodQuadrant::Red => "red",
            MoodQuadrant::Green => "green",
            MoodQuadrant::Blue => "blue",
        }
    }

    pub fn energy(&self) -> Energy {
        match self {
            MoodQuadrant::Yellow | MoodQuadrant::Red => Energy::High,
            MoodQuadrant::Green | MoodQuadrant::Blue => Energy::Low,
        }
    }

    pub fn valence(&self) -> Valence {
        match self {
            MoodQuadrant::Yellow | MoodQuadrant::Green => Valence::Pleasant,
            MoodQuadrant::Red | MoodQuadrant::Blue => Valence::Unpleasant,
        }
    }

    pub fn meta(&self) -> &'static QuadrantMeta {
        match self {
            MoodQuadrant::Yellow => &YELLOW_META,
            MoodQuadrant::Red => &RED_META,
            MoodQuadrant::Green => &GREEN_META,
            MoodQuadrant::Blue => &BLUE_META,
        }
    }
}

impl fmt::Display for MoodQuadrant {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.key())
    }
}

/// 감정 하나
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct MoodEmotion {
    /// `{quadrant}-{slot + 1}`
    pub id: String,
    pub name_ko: &'static str,
    pub name_en: &'static str,
    pub quadrant: MoodQuadrant,
    /// 사분면 내 정의 순서 (0부터)
    pub slot: usize,
}

impl MoodEmotion {
    pub fn name(&self, lang: Language) -> &'static str {
        match lang {
            Language::Ko => self.name_ko,
            Language::En => self.name_en,
        }
    }

    /// Badge headline in the active language
    pub fn primary_name(&self, lang: Language) -> &'static str {
        self.name(lang)
    }

    /// Small line under the headline, in the other language
    pub fn secondary_name(&self, lang: Language) -> &'static str {
        self.name(lang.counterpart())
    }

    pub fn tooltip(&self) -> String {
        format!("{} · {}", self.name_ko, self.name_en)
    }
}

/// Quadrant highlight state selected in the library
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum QuadrantFilter {
    #[default]
    All,
    Only(MoodQuadrant),
}

impl QuadrantFilter {
    /// Filter chips in display order: all, then every quadrant
    pub const OPTIONS: [QuadrantFilter; 5] = [
        QuadrantFilter::All,
        QuadrantFilter::Only(MoodQuadrant::Yellow),
        QuadrantFilter::Only(MoodQuadrant::Red),
        QuadrantFilter::Only(MoodQuadrant::Green),
        QuadrantFilter::Only(MoodQuadrant::Blue),
    ];

    /// Result of pressing `key` while `self` is active.
    /// Pressing the active quadrant again goes back to `All`.
    pub fn toggle(self, key: QuadrantFilter) -> QuadrantFilter {
        match key {
            QuadrantFilter::All => QuadrantFilter::All,
            QuadrantFilter::Only(_) if self == key => QuadrantFilter::All,
            only => only,
        }
    }

    pub fn highlights(&self, quadrant: MoodQuadrant) -> bool {
        match self {
            QuadrantFilter::All => true,
            QuadrantFilter::Only(active) => *active == quadrant,
        }
    }

    pub fn key(&self) -> &'static str {
        match self {
            QuadrantFilter::All => "all",
            QuadrantFilter::Only(q) => q.key(),
        }
    }
}

/// Visual weight of a quadrant panel. Dimmed panels stay interactive.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Emphasis {
    pub opacity: f32,
    pub scale: f32,
}

impl Emphasis {
    pub const HIGHLIGHTED: Emphasis = Emphasis { opacity: 1.0, scale: 1.0 };
    pub const DIMMED: Emphasis = Emphasis { opacity: 0.45, scale: 0.95 };

    pub fn for_highlight(highlighted: bool) -> Self {
        if highlighted { Self::HIGHLIGHTED } else { Self::DIMMED }
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Rgb {
    pub r: u8,
    pub g: u8,
    pub b: u8,
}

static HEX_COLOR: OnceLock<Option<Regex>> = OnceLock::new();

impl Rgb {
    pub fn parse_hex(hex: &str) -> Option<Self> {
        let re = HEX_COLOR
            .get_or_init(|| Regex::new(r"^#?([0-9A-Fa-f]{6})$").ok())
            .as_ref()?;
        let digits = re.captures(hex)?.get(1)?.as_str();
        let value = u32::from_str_radix(digits, 16).ok()?;
        Some(Self {
            r: ((value >> 16) & 0xFF) as u8,
            g: ((value >> 8) & 0xFF) as u8,
            b: (value & 0xFF) as u8,
        })
    }

    /// `(r, g, b, alpha)` with alpha clamped to `0.0..=1.0`
    pub fn with_alpha(&self, alpha: f32) -> (u8, u8, u8, f32) {
        (self.r, self.g, self.b, alpha.clamp(0.0, 1.0))
    }
}

/// Per-quadrant label and tint
#[derive(Debug, PartialEq, Eq)]
pub struct QuadrantMeta {
    pub label_ko: &'static str,
    pub label_en: &'static str,
    pub color: &'static str,
}

impl QuadrantMeta {
    pub fn label(&self, lang: Language) -> &'static str {
        match lang {
            Language::Ko => self.label_ko,
            Language::En => self.label_en,
        }
    }

    pub fn rgb(&self) -> Option<Rgb> {
        Rgb::parse_hex(self.color)
    }
}

pub const PANEL_TINT_ALPHA: f32 = 0.16;
pub const PANEL_SHADOW_ALPHA: f32 = 0.18;

pub const YELLOW_META: QuadrantMeta = QuadrantMeta {
    label_ko: "높은 활력 · 즐거움",
    label_en: "High Energy · Pleasant",
    color: "#F8E27A",
};

pub const RED_META: QuadrantMeta = QuadrantMeta {
    label_ko: "높은 활력 · 불편함",
    label_en: "High Energy · Unpleasant",
    color: "#FF9A7A",
};

pub const GREEN_META: QuadrantMeta = QuadrantMeta {
    label_ko: "낮은 활력 · 즐거움",
    label_en: "Low Energy · Pleasant",
    color: "#8DE0C0",
};

pub const BLUE_META: QuadrantMeta = QuadrantMeta {
    label_ko: "낮은 활력 · 불편함",
    label_en: "Low Energy · Unpleasant",
    color: "#7AA6FF",
};

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_toggle_same_quadrant_twice_returns_to_all() {
        let once = QuadrantFilter::All.toggle(QuadrantFilter::Only(MoodQuadrant::Red));
        assert_eq!(once, QuadrantFilter::Only(MoodQuadrant::Red));
        let twice = once.toggle(QuadrantFilter::Only(MoodQuadrant::Red));
        assert_eq!(twice, QuadrantFilter::All);
    }

    #[test]
    fn test_toggle_switches_between_quadrants() {
        let f = QuadrantFilter::Only(MoodQuadrant::Red).toggle(QuadrantFilter::Only(MoodQuadrant::Blue));
        assert_eq!(f, QuadrantFilter::Only(MoodQuadrant::Blue));
        assert_eq!(f.toggle(QuadrantFilter::All), QuadrantFilter::All);
        assert_eq!(QuadrantFilter::All.toggle(QuadrantFilter::All), QuadrantFilter::All);
    }

    #[test]
    fn test_highlights() {
        for q in MoodQuadrant::ALL {
            assert!(QuadrantFilter::All.highlights(q));
        }
        let green = QuadrantFilter::Only(MoodQuadrant::Green);
        assert!(green.highlights(MoodQuadrant::Green));
        assert!(!green.highlights(MoodQuadrant::Yellow));
        assert_eq!(Emphasis::for_highlight(false), Emphasis::DIMMED);
    }

    #[test]
    fn test_quadrant_axes() {
        assert_eq!(MoodQuadrant::Yellow.energy(), Energy::High);
        assert_eq!(MoodQuadrant::Yellow.valence(), Valence::Pleasant);
        assert_eq!(MoodQuadrant::Red.valence(), Valence::Unpleasant);
        assert_eq!(MoodQuadrant::Green.energy(), Energy::Low);
        assert_eq!(MoodQuadrant::Blue.energy(), Energy::Low);
        assert_eq!(MoodQuadrant::Blue.valence(), Valence::Unpleasant);
        assert_eq!(MoodQuadrant::Green.to_string(), "green");
    }

    #[test]
    fn test_parse_hex() {
        assert_eq!(Rgb::parse_hex("#F8E27A"), Some(Rgb { r: 0xF8, g: 0xE2, b: 0x7A }));
        assert_eq!(Rgb::parse_hex("7aa6ff"), Some(Rgb { r: 0x7A, g: 0xA6, b: 0xFF }));
        assert_eq!(Rgb::parse_hex("#FFF"), None);
        assert_eq!(Rgb::parse_hex("#GG0000"), None);
        assert_eq!(Rgb::parse_hex("#FF9A7A").map(|c| c.with_alpha(1.6)), Some((255, 154, 122, 1.0)));
        // pattern is compiled once and reused
        assert!(HEX_COLOR.get().is_some_and(|re| re.is_some()));
    }

    #[test]
    fn test_meta_labels_match_language() {
        assert_eq!(MoodQuadrant::Blue.meta().label(Language::En), "Low Energy · Unpleasant");
        assert_eq!(MoodQuadrant::Yellow.meta().label(Language::Ko), "높은 활력 · 즐거움");
    }

    #[test]
    fn test_emotion_names() {
        let e = MoodEmotion {
            id: "green-1".to_string(),
            name_ko: "평온한",
            name_en: "Serene",
            quadrant: MoodQuadrant::Green,
            slot: 0,
        };
        assert_eq!(e.primary_name(Language::Ko), "평온한");
        assert_eq!(e.secondary_name(Language::Ko), "Serene");
        assert_eq!(e.primary_name(Language::En), "Serene");
        assert_eq!(e.tooltip(), "평온한 · Serene");
    }
}
