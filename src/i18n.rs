//! i18n module - localized copy for every section of the landing page
//!
//! Both languages are compiled in as `'static` trees with the same shape.
//! Lookup is an exhaustive match over [`Language`], so there is no missing
//! translation branch; [`validate_content`] checks the shape once at startup.

use crate::error::ContentError;
use crate::models::{MoodQuadrant, QuadrantFilter};

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Language { Ko, En }

impl Language {
    pub const ALL: [Language; 2] = [Language::Ko, Language::En];

    /// Language shown before any user interaction
    pub const INITIAL: Language = Language::Ko;

    pub fn code(&self) -> &'static str {
        match self {
            Language::Ko => "ko",
            Language::En => "en",
        }
    }

    /// The other language, used for the secondary line of bilingual badges
    pub fn counterpart(&self) -> Self {
        match self {
            Language::Ko => Language::En,
            Language::En => Language::Ko,
        }
    }
}

impl Default for Language {
    fn default() -> Self {
        Language::INITIAL
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct NavItem {
    pub id: &'static str,
    pub label: &'static str,
}

/// Title/description pair shared by cards, steps, features and tech points
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Card {
    pub title: &'static str,
    pub description: &'static str,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Testimonial {
    pub quote: &'static str,
    pub name: &'static str,
    pub role: &'static str,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct FaqItem {
    pub question: &'static str,
    pub answer: &'static str,
}

pub struct Hero {
    pub eyebrow: &'static str,
    pub title: &'static str,
    pub description: &'static str,
}

pub struct WhySection {
    pub title: &'static str,
    pub description: &'static str,
    pub cards: &'static [Card],
}

pub struct PipelineSection {
    pub title: &'static str,
    pub description: &'static str,
    pub steps: &'static [Card],
}

pub struct FilterLabels {
    pub all: &'static str,
    pub yellow: &'static str,
    pub red: &'static str,
    pub green: &'static str,
    pub blue: &'static str,
}

pub struct AxisLabels {
    pub energy_high: &'static str,
    pub energy_low: &'static str,
    pub pleasant_high: &'static str,
    pub pleasant_low: &'static str,
}

pub struct LibrarySection {
    pub title: &'static str,
    pub description: &'static str,
    pub callout: &'static str,
    pub filters: FilterLabels,
    pub axes: AxisLabels,
}

pub struct RitualSection {
    pub eyebrow: &'static str,
    pub title: &'static str,
    pub description: &'static str,
    pub features: &'static [Card],
}

pub struct TechSection {
    pub title: &'static str,
    pub description: &'static str,
    pub points: &'static [Card],
    pub meta: &'static str,
}

pub struct TestimonialSection {
    pub title: &'static str,
    pub items: &'static [Testimonial],
}

pub struct FaqSection {
    pub title: &'static str,
    pub items: &'static [FaqItem],
}

pub struct Footer {
    pub whisper: &'static str,
}

/// Full copy for one language
pub struct ContentTree {
    pub language_label: &'static str,
    pub language_short: &'static str,
    pub nav: &'static [NavItem],
    pub hero: Hero,
    pub why: WhySection,
    pub pipeline: PipelineSection,
    pub library: LibrarySection,
    pub ritual: RitualSection,
    pub tech: TechSection,
    pub testimonials: TestimonialSection,
    pub faq: FaqSection,
    pub footer: Footer,
}

impl ContentTree {
    pub fn filter_label(&self, filter: QuadrantFilter) -> &'static str {
        match filter {
            QuadrantFilter::All => self.library.filters.all,
            QuadrantFilter::Only(quadrant) => self.quadrant_label(quadrant),
        }
    }

    pub fn quadrant_label(&self, quadrant: MoodQuadrant) -> &'static str {
        let filters = &self.library.filters;
        match quadrant {
            MoodQuadrant::Yellow => filters.yellow,
            MoodQuadrant::Red => filters.red,
            MoodQuadrant::Green => filters.green,
            MoodQuadrant::Blue => filters.blue,
        }
    }

    /// Sections holding ordered lists, with their lengths
    fn list_lengths(&self) -> [(&'static str, usize); 7] {
        [
            ("nav", self.nav.len()),
            ("why.cards", self.why.cards.len()),
            ("pipeline.steps", self.pipeline.steps.len()),
            ("ritual.features", self.ritual.features.len()),
            ("tech.points", self.tech.points.len()),
            ("testimonials.items", self.testimonials.items.len()),
            ("faq.items", self.faq.items.len()),
        ]
    }

    /// Every leaf string paired with its field path
    fn leaves(&self) -> Vec<(String, &'static str)> {
        let mut out: Vec<(String, &'static str)> = vec![
            ("language_label".into(), self.language_label),
            ("language_short".into(), self.language_short),
            ("hero.eyebrow".into(), self.hero.eyebrow),
            ("hero.title".into(), self.hero.title),
            ("hero.description".into(), self.hero.description),
            ("why.title".into(), self.why.title),
            ("why.description".into(), self.why.description),
            ("pipeline.title".into(), self.pipeline.title),
            ("pipeline.description".into(), self.pipeline.description),
            ("library.title".into(), self.library.title),
            ("library.description".into(), self.library.description),
            ("library.callout".into(), self.library.callout),
            ("library.filters.all".into(), self.library.filters.all),
            ("library.filters.yellow".into(), self.library.filters.yellow),
            ("library.filters.red".into(), self.library.filters.red),
            ("library.filters.green".into(), self.library.filters.green),
            ("library.filters.blue".into(), self.library.filters.blue),
            ("library.axes.energy_high".into(), self.library.axes.energy_high),
            ("library.axes.energy_low".into(), self.library.axes.energy_low),
            ("library.axes.pleasant_high".into(), self.library.axes.pleasant_high),
            ("library.axes.pleasant_low".into(), self.library.axes.pleasant_low),
            ("ritual.eyebrow".into(), self.ritual.eyebrow),
            ("ritual.title".into(), self.ritual.title),
            ("ritual.description".into(), self.ritual.description),
            ("tech.title".into(), self.tech.title),
            ("tech.description".into(), self.tech.description),
            ("tech.meta".into(), self.tech.meta),
            ("testimonials.title".into(), self.testimonials.title),
            ("faq.title".into(), self.faq.title),
            ("footer.whisper".into(), self.footer.whisper),
        ];

        for (i, item) in self.nav.iter().enumerate() {
            out.push((format!("nav[{}].id", i), item.id));
            out.push((format!("nav[{}].label", i), item.label));
        }
        for (section, cards) in [
            ("why.cards", self.why.cards),
            ("pipeline.steps", self.pipeline.steps),
            ("ritual.features", self.ritual.features),
            ("tech.points", self.tech.points),
        ] {
            for (i, card) in cards.iter().enumerate() {
                out.push((format!("{}[{}].title", section, i), card.title));
                out.push((format!("{}[{}].description", section, i), card.description));
            }
        }
        for (i, t) in self.testimonials.items.iter().enumerate() {
            out.push((format!("testimonials.items[{}].quote", i), t.quote));
            out.push((format!("testimonials.items[{}].name", i), t.name));
            out.push((format!("testimonials.items[{}].role", i), t.role));
        }
        for (i, f) in self.faq.items.iter().enumerate() {
            out.push((format!("faq.items[{}].question", i), f.question));
            out.push((format!("faq.items[{}].answer", i), f.answer));
        }
        out
    }
}

/// Resolves the copy for a language
pub type ContentSource = fn(Language) -> &'static ContentTree;

pub fn content(language: Language) -> &'static ContentTree {
    match language {
        Language::Ko => &KO_KR,
        Language::En => &EN_US,
    }
}

/// Check the compiled-in copy
pub fn validate_content() -> Result<(), ContentError> {
    validate_trees(content)
}

/// Check that every language tree has the same shape as the first one and
/// no empty strings.
pub fn validate_trees(source: ContentSource) -> Result<(), ContentError> {
    let reference = Language::ALL[0];
    let base = source(reference);

    for &language in &Language::ALL {
        let tree = source(language);

        for (field, text) in tree.leaves() {
            if text.trim().is_empty() {
                return Err(ContentError::EmptyText { field, language });
            }
        }

        if language == reference {
            continue;
        }

        for ((section, left_len), (_, right_len)) in base.list_lengths().into_iter().zip(tree.list_lengths()) {
            if left_len != right_len {
                return Err(ContentError::LengthMismatch {
                    section,
                    left: reference,
                    left_len,
                    right: language,
                    right_len,
                });
            }
        }

        for (index, (left, right)) in base.nav.iter().zip(tree.nav.iter()).enumerate() {
            if left.id != right.id {
                return Err(ContentError::NavIdMismatch {
                    index,
                    left: reference,
                    left_id: left.id,
                    right: language,
                    right_id: right.id,
                });
            }
        }
    }

    Ok(())
}

pub const KO_KR: ContentTree = ContentTree {
    language_label: "한국어",
    language_short: "KO",
    nav: &[
        NavItem { id: "why", label: "왜 Auto Zen Garden인가" },
        NavItem { id: "pipeline", label: "경험 흐름" },
        NavItem { id: "ritual", label: "감정 리추얼" },
        NavItem { id: "library", label: "감정 라이브러리" },
        NavItem { id: "testimonials", label: "정원의 목소리" },
        NavItem { id: "faq", label: "FAQ" },
    ],
    hero: Hero {
        eyebrow: "AI 반려돌 감정 정원",
        title: "대화가 감정으로 감정이 모래 위의 예술로",
        description: "Zen Garden 앱은 반려돌과 나눈 대화를 실시간 감정 분석과 샌드 아트 패턴으로 번역합니다. 그레이 톤의 감성 UI와 자동화된 기술이 어우러져, 도시 속에서도 차분한 리추얼을 발견하게 됩니다.",
    },
    why: WhySection {
        title: "왜 Auto Zen Garden인가",
        description: "반려돌과의 대화를 통해 감정을 재발견하고, 그것이 모래 위 시각 언어로 번져 나가는 과정을 한 자리에서 경험할 수 있습니다.",
        cards: &[
            Card {
                title: "깊어진 자기 통찰",
                description: "대화 내용이 감정 분석 리포트로 정리되어, 내가 느낀 감정을 다른 각도에서 확인할 수 있습니다.",
            },
            Card {
                title: "감성적인 정서 회복",
                description: "감정에 맞는 색과 패턴이 시각적 휴식을 제공합니다. 조용한 인터랙션이 마음을 안정시킵니다.",
            },
            Card {
                title: "기억에 남는 예술적 흔적",
                description: "샌드 패턴은 매번 달라집니다. 정원에서 기록된 감정은 나만의 감정 지도이자 새로운 예술이 됩니다.",
            },
        ],
    },
    pipeline: PipelineSection {
        title: "대화가 예술이 되는 흐름",
        description: "앱은 대화를 끊지 않고 감정을 포착하고, 모래 위에서 즉시 패턴으로 번역합니다.",
        steps: &[
            Card {
                title: "1. 반려돌과 대화",
                description: "따뜻하고 호기심 많은 톤으로 반려돌이 이야기를 이끕니다. 최소 다섯 턴 이후 자동 감정 분석이 시작됩니다.",
            },
            Card {
                title: "2. 감정 분석",
                description: "OpenAI Responses API가 감정을 구조화해 대표 감정, 신뢰도, 상위 감정 스코어를 제시합니다.",
            },
            Card {
                title: "3. 모래 패턴 탄생",
                description: "분석된 감정과 매핑된 G-code가 Zen Garden 하드웨어로 전송되어 차분한 패턴을 그려냅니다.",
            },
        ],
    },
    library: LibrarySection {
        title: "감정 무드미터 100",
        description: "플리에커–로웬 무드미터 축을 따라 100개의 감정을 한눈에 볼 수 있어요. 활력(세로)과 즐거움(가로) 좌표가 감정의 위치를 보여줍니다.",
        callout: "사분면 토글로 감정을 하이라이트하고, 말풍선을 눌러 한국어·영어 이름을 확인해 보세요.",
        filters: FilterLabels {
            all: "전체 감정",
            yellow: "높은 활력 · 즐거움",
            red: "높은 활력 · 불편함",
            green: "낮은 활력 · 즐거움",
            blue: "낮은 활력 · 불편함",
        },
        axes: AxisLabels {
            energy_high: "높은 활력",
            energy_low: "낮은 활력",
            pleasant_high: "즐거움",
            pleasant_low: "불편함",
        },
    },
    ritual: RitualSection {
        eyebrow: "앱 전용 기능",
        title: "나만의 감정 리추얼이 되는 이유",
        description: "앱은 단발성 체험에 머무르지 않습니다. 반복 방문할수록 감정 히스토리가 쌓여 나만의 정원이 완성됩니다.",
        features: &[
            Card {
                title: "감정 로그 타임라인",
                description: "감정 분석 결과가 날짜별로 저장되어, 지난 패턴과 감정 변화를 한눈에 볼 수 있습니다.",
            },
            Card {
                title: "패턴 히스토리 갤러리",
                description: "직접 체험한 모래 패턴이 이미지 클립으로 아카이빙되어 감정 지도처럼 누적됩니다.",
            },
            Card {
                title: "돌의 부드러운 속삭임",
                description: "반려돌은 같은 질문을 반복하지 않고, 사용자의 키워드를 되짚어 주며 대화를 이어갑니다.",
            },
        ],
    },
    tech: TechSection {
        title: "조용한 안정성을 만드는 기술",
        description: "감성적인 프런트 경험 뒤에는 안전한 기술 스택이 작동합니다. 운영자는 최소 개입으로 안정적인 순환을 보장합니다.",
        points: &[
            Card {
                title: "OpenAI Responses API",
                description: "감정 추출과 분석 결과를 구조화된 JSON으로 제공해 대화가 끊기지 않습니다.",
            },
            Card {
                title: "Firebase 세션 저장",
                description: "세션별 메시지, 감정 결과, 패턴 상태를 저장해 재방문 시 동일한 감정을 이어갈 수 있습니다.",
            },
            Card {
                title: "GRBL 기반 샌드 패턴",
                description: "Arduino Uno와 gShield가 감정에 맞는 G-code 패턴을 안정적으로 실행하고 진행률을 피드합니다.",
            },
        ],
        meta: "모든 데이터는 비공개 환경에서 처리되며, .env로 키가 관리됩니다.",
    },
    testimonials: TestimonialSection {
        title: "정원이 건네온 목소리",
        items: &[
            Testimonial {
                quote: "대화를 나눌수록 반려돌이 내 감정을 비춰주는 거울이 되었어요. 모래 패턴을 보는 순간 마음이 정리됐습니다.",
                name: "현우",
                role: "관람객",
            },
            Testimonial {
                quote: "전시 현장을 운영하면서도 앱이 세션을 자동으로 리셋해 주니 관람 동선이 매끄러웠습니다.",
                name: "지은",
                role: "큐레이터",
            },
            Testimonial {
                quote: "AI와 인터랙티브 아트가 이렇게 부드럽게 결합된 사례는 드뭅니다. 감정 데이터가 예술로 확장되는 순간이 인상적입니다.",
                name: "Leo",
                role: "Creative Technologist",
            },
        ],
    },
    faq: FaqSection {
        title: "자주 묻는 질문",
        items: &[
            FaqItem {
                question: "체험은 어떤 방식으로 진행되나요?",
                answer: "앱에서 반려돌과 대화를 나누면, 자동으로 감정 분석이 실행되고 패턴 실행을 요청할 수 있습니다. 대화는 감정 분석 중에도 지속됩니다.",
            },
            FaqItem {
                question: "얼마나 시간이 걸리나요?",
                answer: "평균 3~5분 정도 대화를 나누고 감정 분석을 확인한 뒤 패턴을 실행합니다. 패턴 실행은 5~10분 정도 소요됩니다.",
            },
            FaqItem {
                question: "접근성은 어떤가요?",
                answer: "큰 글자, 높은 대비의 다크 테마, 44px 이상의 버튼을 적용했습니다. 네트워크 장애 시에는 임시 감정 결과로 상황을 안내합니다.",
            },
            FaqItem {
                question: "네트워크가 불안정하면 어떻게 되나요?",
                answer: "감정 분석 응답이 실패하면 앱이 mock 결과를 표시하고, 안정화 이후 다시 분석 시도를 안내합니다.",
            },
        ],
    },
    footer: Footer {
        whisper: "“정원은 늘 여기서 너를 기다리고 있어.” – 반려돌",
    },
};

pub const EN_US: ContentTree = ContentTree {
    language_label: "English",
    language_short: "EN",
    nav: &[
        NavItem { id: "why", label: "Why Auto Zen Garden" },
        NavItem { id: "pipeline", label: "How It Flows" },
        NavItem { id: "ritual", label: "Ritual Loop" },
        NavItem { id: "library", label: "Emotion Library" },
        NavItem { id: "testimonials", label: "Voices" },
        NavItem { id: "faq", label: "FAQ" },
    ],
    hero: Hero {
        eyebrow: "AI Companion Sand Garden",
        title: "When conversation turns into emotion and art",
        description: "Auto Zen Garden translates your dialogue with a gentle AI companion into real-time emotion analysis and sand art patterns. Immersive dark aesthetics and calm automation shape a ritual you can always return to.",
    },
    why: WhySection {
        title: "Why people fall for Auto Zen Garden",
        description: "You witness your feelings being mirrored, understood, and finally painted as living sand art—without ever breaking the conversation.",
        cards: &[
            Card {
                title: "Deeper self insight",
                description: "Dialogue is distilled into clear emotion summaries so you can look at your feelings from a gentle new angle.",
            },
            Card {
                title: "Sensory emotional care",
                description: "Color, light, and motion align with the detected emotion, giving your mind a momentary breathing space.",
            },
            Card {
                title: "Memorable visual language",
                description: "Each sand pattern is unique. Your session becomes a personal emotion map you can revisit in the app.",
            },
        ],
    },
    pipeline: PipelineSection {
        title: "How conversation becomes art",
        description: "The app keeps the dialogue alive while your emotions are analysed and rendered into calming sand choreography.",
        steps: &[
            Card {
                title: "1. Share with the companion stone",
                description: "A caring, curious tone guides the exchange. After at least five turns, the first automated analysis begins.",
            },
            Card {
                title: "2. Emotion insight arrives",
                description: "OpenAI Responses API delivers structured results with confidence, top emotions, and a reflective summary.",
            },
            Card {
                title: "3. Sand pattern takes shape",
                description: "Mapped G-code streams to the Zen Garden hardware, turning emotion metadata into graceful motion.",
            },
        ],
    },
    library: LibrarySection {
        title: "Mood Meter · 100 Emotions",
        description: "Explore the Plutchik–Löwen mood meter across energy (vertical) and pleasantness (horizontal). Each dot keeps the companion app’s emotion palette within reach.",
        callout: "Toggle quadrants to highlight regions. Hover or tap an emotion to see its bilingual name.",
        filters: FilterLabels {
            all: "All emotions",
            yellow: "High Energy · Pleasant",
            red: "High Energy · Unpleasant",
            green: "Low Energy · Pleasant",
            blue: "Low Energy · Unpleasant",
        },
        axes: AxisLabels {
            energy_high: "High Energy",
            energy_low: "Low Energy",
            pleasant_high: "Pleasant",
            pleasant_low: "Unpleasant",
        },
    },
    ritual: RitualSection {
        eyebrow: "App-only rituals",
        title: "Why the app becomes a personal sanctuary",
        description: "Beyond a single exhibit visit, your app keeps gathering feelings and patterns so the garden grows with you.",
        features: &[
            Card {
                title: "Emotion log timeline",
                description: "Every analysis is stored by session, helping you trace emotional shifts with ease.",
            },
            Card {
                title: "Pattern history gallery",
                description: "Captured sand patterns live inside the app, forming a private atlas of your experiences.",
            },
            Card {
                title: "Soft-spoken companion",
                description: "The AI stone avoids repetitive questions and reflects your keywords to keep the flow organic.",
            },
        ],
    },
    tech: TechSection {
        title: "Technology that keeps the calm",
        description: "Under the poetic interface sits a resilient stack, letting operators focus on storytelling instead of troubleshooting.",
        points: &[
            Card {
                title: "OpenAI Responses API",
                description: "Structured outputs keep dialogue and analysis in sync without abrupt stops.",
            },
            Card {
                title: "Firebase session layer",
                description: "Session states, emotion results, and pattern progress persist for continuity across visits.",
            },
            Card {
                title: "GRBL-driven choreography",
                description: "Arduino Uno with gShield streams precise G-code, reporting progress back in real time.",
            },
        ],
        meta: "All secrets stay offline inside the exhibit network. Environment variables guard the keys.",
    },
    testimonials: TestimonialSection {
        title: "Voices from the garden",
        items: &[
            Testimonial {
                quote: "The companion stone mirrored my mood without judgment. Watching the sand move felt like reading my own diary.",
                name: "Hannah",
                role: "Visitor",
            },
            Testimonial {
                quote: "Automation kept the flow steady. We welcomed more guests with less intervention—pure magic for curators.",
                name: "Mina",
                role: "Curator",
            },
            Testimonial {
                quote: "Few installations marry AI and tangible art this gracefully. Emotion data blossoming into patterns is irresistible.",
                name: "Elias",
                role: "Creative Technologist",
            },
        ],
    },
    faq: FaqSection {
        title: "Frequently asked questions",
        items: &[
            FaqItem {
                question: "How does the experience unfold?",
                answer: "You chat with the companion stone, emotions are analysed automatically after several turns, and you can trigger the sand pattern without ending the dialogue.",
            },
            FaqItem {
                question: "How long does it take?",
                answer: "Expect 3–5 minutes for conversation and insight, then 5–10 minutes for the physical pattern drawing.",
            },
            FaqItem {
                question: "Is it accessible?",
                answer: "Large typography, high-contrast dark theme, and generous buttons support most visitors. If network issues occur, the app displays a temporary mock result.",
            },
            FaqItem {
                question: "What happens if the network is unstable?",
                answer: "The app generates a marked mock analysis and invites you to retry once the connection recovers.",
            },
        ],
    },
    footer: Footer {
        whisper: "“The garden is always here, waiting for you.” – Companion Stone",
    },
};

#[cfg(test)]
mod tests {
    use super::*;
    use pretty_assertions::assert_eq;

    #[test]
    fn test_reference_content_is_valid() {
        assert_eq!(validate_content(), Ok(()));
    }

    #[test]
    fn test_every_language_has_same_shape() {
        let base = content(Language::Ko);
        for &lang in &Language::ALL {
            let tree = content(lang);
            assert_eq!(tree.list_lengths(), base.list_lengths());
            let ids: Vec<_> = tree.nav.iter().map(|n| n.id).collect();
            let base_ids: Vec<_> = base.nav.iter().map(|n| n.id).collect();
            assert_eq!(ids, base_ids);
            let fields: Vec<_> = tree.leaves().into_iter().map(|(f, _)| f).collect();
            let base_fields: Vec<_> = base.leaves().into_iter().map(|(f, _)| f).collect();
            assert_eq!(fields, base_fields);
        }
    }

    #[test]
    fn test_lookup_returns_language_tree() {
        assert_eq!(content(Language::Ko).language_short, "KO");
        assert_eq!(content(Language::En).language_short, "EN");
        assert_eq!(content(Language::En).testimonials.items.len(), 3);
    }

    static SHORT_FAQ: ContentTree = ContentTree {
        faq: FaqSection {
            title: "Frequently asked questions",
            items: &[FaqItem { question: "Is it accessible?", answer: "Yes." }],
        },
        ..EN_US
    };

    static SWAPPED_NAV: ContentTree = ContentTree {
        nav: &[
            NavItem { id: "pipeline", label: "How It Flows" },
            NavItem { id: "why", label: "Why Auto Zen Garden" },
            NavItem { id: "ritual", label: "Ritual Loop" },
            NavItem { id: "library", label: "Emotion Library" },
            NavItem { id: "testimonials", label: "Voices" },
            NavItem { id: "faq", label: "FAQ" },
        ],
        ..EN_US
    };

    static BLANK_FOOTER: ContentTree = ContentTree {
        footer: Footer { whisper: "  " },
        ..EN_US
    };

    fn with_english(tree: &'static ContentTree) -> impl Fn(Language) -> &'static ContentTree {
        move |lang| match lang {
            Language::Ko => &KO_KR,
            Language::En => tree,
        }
    }

    fn short_faq(lang: Language) -> &'static ContentTree {
        with_english(&SHORT_FAQ)(lang)
    }

    fn swapped_nav(lang: Language) -> &'static ContentTree {
        with_english(&SWAPPED_NAV)(lang)
    }

    fn blank_footer(lang: Language) -> &'static ContentTree {
        with_english(&BLANK_FOOTER)(lang)
    }

    #[test]
    fn test_rejects_list_length_mismatch() {
        assert_eq!(
            validate_trees(short_faq),
            Err(ContentError::LengthMismatch {
                section: "faq.items",
                left: Language::Ko,
                left_len: 4,
                right: Language::En,
                right_len: 1,
            })
        );
    }

    #[test]
    fn test_rejects_nav_id_mismatch() {
        assert_eq!(
            validate_trees(swapped_nav),
            Err(ContentError::NavIdMismatch {
                index: 0,
                left: Language::Ko,
                left_id: "why",
                right: Language::En,
                right_id: "pipeline",
            })
        );
    }

    #[test]
    fn test_rejects_blank_text() {
        assert_eq!(
            validate_trees(blank_footer),
            Err(ContentError::EmptyText { field: "footer.whisper".to_string(), language: Language::En })
        );
    }

    #[test]
    fn test_language_codes() {
        assert_eq!(Language::Ko.code(), "ko");
        assert_eq!(Language::En.code(), "en");
        for lang in Language::ALL {
            assert_eq!(lang.counterpart().counterpart(), lang);
        }
        assert_eq!(Language::default(), Language::Ko);
    }

    #[test]
    fn test_filter_labels() {
        let en = content(Language::En);
        assert_eq!(en.filter_label(QuadrantFilter::All), "All emotions");
        assert_eq!(
            en.filter_label(QuadrantFilter::Only(MoodQuadrant::Red)),
            "High Energy · Unpleasant"
        );
    }
}
