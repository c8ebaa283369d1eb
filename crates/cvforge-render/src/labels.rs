//! Section headings for rendered resumes, keyed by document language.

/// Translated section headings used by the HTML templates.
///
/// Unknown language codes fall back to English.
#[derive(Debug, Clone, Copy)]
pub struct Labels {
    pub profile: &'static str,
    pub experience: &'static str,
    pub projects: &'static str,
    pub education: &'static str,
    pub certificates: &'static str,
    pub skills: &'static str,
    pub soft_skills: &'static str,
    pub languages: &'static str,
    pub interests: &'static str,
    pub since: &'static str,
}

const EN: Labels = Labels {
    profile: "Profile",
    experience: "Experience",
    projects: "Projects",
    education: "Education",
    certificates: "Certificates",
    skills: "Skills",
    soft_skills: "Soft skills",
    languages: "Languages",
    interests: "Interests",
    since: "Since",
};

const RU: Labels = Labels {
    profile: "Профиль",
    experience: "Опыт работы",
    projects: "Проекты",
    education: "Образование",
    certificates: "Сертификаты",
    skills: "Навыки",
    soft_skills: "Гибкие навыки",
    languages: "Языки",
    interests: "Интересы",
    since: "С",
};

const UZ: Labels = Labels {
    profile: "Profil",
    experience: "Ish tajribasi",
    projects: "Loyihalar",
    education: "Ta'lim",
    certificates: "Sertifikatlar",
    skills: "Ko'nikmalar",
    soft_skills: "Shaxsiy ko'nikmalar",
    languages: "Tillar",
    interests: "Qiziqishlar",
    since: "Dan beri",
};

impl Labels {
    pub fn for_lang(lang: &str) -> Self {
        match lang.to_ascii_lowercase().as_str() {
            "ru" => RU,
            "uz" => UZ,
            _ => EN,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn resolves_known_languages() {
        assert_eq!(Labels::for_lang("en").education, "Education");
        assert_eq!(Labels::for_lang("ru").education, "Образование");
        assert_eq!(Labels::for_lang("UZ").education, "Ta'lim");
    }

    #[test]
    fn unknown_language_falls_back_to_english() {
        assert_eq!(Labels::for_lang("de").skills, "Skills");
        assert_eq!(Labels::for_lang("").profile, "Profile");
    }
}
