//! Window chrome labels that are not part of the page copy

use zen_garden_landing::Language;

pub struct HostText {
    pub menu: &'static str,
    pub action_export: &'static str, pub action_theme: &'static str, pub action_about: &'static str,
    pub theme_system: &'static str, pub theme_light: &'static str, pub theme_dark: &'static str,
    pub carousel_previous: &'static str, pub carousel_next: &'static str,
    pub msg_exported: &'static str, pub msg_export_failed: &'static str,
    pub about_title: &'static str, pub about_tagline: &'static str, pub btn_ok: &'static str,
}

pub const KO_KR: HostText = HostText {
    menu: "메뉴",
    action_export: "감정 목록 내보내기 (CSV)...", action_theme: "테마", action_about: "정보",
    theme_system: "시스템", theme_light: "라이트", theme_dark: "다크",
    carousel_previous: "이전 후기", carousel_next: "다음 후기",
    msg_exported: "감정 목록을 저장했습니다.", msg_export_failed: "내보내기 실패",
    about_title: "Auto Zen Garden 정보", about_tagline: "감정 무드미터 랜딩 페이지", btn_ok: "확인",
};

pub const EN_US: HostText = HostText {
    menu: "Menu",
    action_export: "Export emotions (CSV)...", action_theme: "Theme", action_about: "About",
    theme_system: "System", theme_light: "Light", theme_dark: "Dark",
    carousel_previous: "Previous testimonial", carousel_next: "Next testimonial",
    msg_exported: "Emotion list saved.", msg_export_failed: "Export failed",
    about_title: "About Auto Zen Garden", about_tagline: "Mood meter landing page", btn_ok: "OK",
};

pub fn host_text(lang: Language) -> &'static HostText {
    match lang {
        Language::Ko => &KO_KR,
        Language::En => &EN_US,
    }
}
