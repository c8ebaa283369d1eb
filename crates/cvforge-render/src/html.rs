//! Builds a standalone HTML page from a resume document.
//!
//! The output is self-contained (inline CSS, no external assets) so the
//! PDF engine can render it without network access.

use std::fmt::Write;

use cvforge_core::{AppError, AppResult};
use cvforge_entity::resume::ResumeDocument;

use crate::labels::Labels;

/// Known resume templates.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Template {
    Classic,
}

impl Template {
    pub fn parse(name: &str) -> AppResult<Self> {
        match name {
            "classic" => Ok(Self::Classic),
            other => Err(AppError::validation(format!(
                "unknown resume template '{other}'"
            ))),
        }
    }
}

/// Renders the document into a complete HTML page using the template
/// named in its `meta` section.
pub fn render_html(doc: &ResumeDocument) -> AppResult<String> {
    let template = Template::parse(&doc.meta.template)?;
    let labels = Labels::for_lang(&doc.meta.lang);
    match template {
        Template::Classic => Ok(render_classic(doc, &labels)),
    }
}

/// Escapes text for safe interpolation into HTML.
fn esc(value: &str) -> String {
    let mut out = String::with_capacity(value.len());
    for ch in value.chars() {
        match ch {
            '&' => out.push_str("&amp;"),
            '<' => out.push_str("&lt;"),
            '>' => out.push_str("&gt;"),
            '"' => out.push_str("&quot;"),
            '\'' => out.push_str("&#39;"),
            _ => out.push(ch),
        }
    }
    out
}

fn date_range(start: &str, end: &str) -> String {
    match (start.is_empty(), end.is_empty()) {
        (true, _) => String::new(),
        (false, true) => format!("{} – present", esc(start)),
        (false, false) => format!("{} – {}", esc(start), esc(end)),
    }
}

const CLASSIC_CSS: &str = r#"
body { font-family: Georgia, 'Times New Roman', serif; color: #222; margin: 0; padding: 28px 36px; font-size: 11pt; }
header { border-bottom: 2px solid #222; padding-bottom: 10px; margin-bottom: 16px; }
h1 { margin: 0; font-size: 22pt; }
.title { font-size: 13pt; color: #555; margin-top: 2px; }
.contact { font-size: 9pt; color: #444; margin-top: 6px; }
.contact span + span::before { content: ' \2022 '; color: #999; }
h2 { font-size: 12pt; text-transform: uppercase; letter-spacing: 1px; border-bottom: 1px solid #bbb; padding-bottom: 2px; margin: 18px 0 8px; }
.entry { margin-bottom: 10px; }
.entry-head { display: flex; justify-content: space-between; }
.entry-head .what { font-weight: bold; }
.entry-head .when { color: #666; font-size: 9pt; }
.entry .where { font-style: italic; color: #555; font-size: 10pt; }
.entry .summary { margin: 3px 0 0; }
.tags { color: #555; font-size: 9pt; margin-top: 2px; }
ul.inline { list-style: none; margin: 0; padding: 0; }
ul.inline li { display: inline; }
ul.inline li + li::before { content: ', '; }
"#;

fn render_classic(doc: &ResumeDocument, labels: &Labels) -> String {
    let b = &doc.basics;
    let mut html = String::with_capacity(8 * 1024);

    let _ = write!(
        html,
        "<!DOCTYPE html>\n<html lang=\"{}\"><head><meta charset=\"utf-8\">\
         <title>{}</title><style>{}</style></head><body>",
        esc(&doc.meta.lang),
        esc(&b.name),
        CLASSIC_CSS
    );

    // Header: name, desired title, contact line.
    let _ = write!(html, "<header><h1>{}</h1>", esc(&b.name));
    if !b.label.is_empty() {
        let _ = write!(html, "<div class=\"title\">{}</div>", esc(&b.label));
    }
    html.push_str("<div class=\"contact\">");
    let mut contact: Vec<String> = Vec::new();
    contact.push(esc(&b.email));
    if !b.phone.is_empty() {
        contact.push(esc(&b.phone));
    }
    if !b.location.city.is_empty() {
        contact.push(esc(&b.location.city));
    }
    if !b.url.is_empty() {
        contact.push(esc(&b.url));
    }
    for profile in &b.profiles {
        contact.push(esc(&profile.url));
    }
    for item in contact {
        let _ = write!(html, "<span>{item}</span>");
    }
    html.push_str("</div></header>");

    if !b.summary.is_empty() {
        let _ = write!(
            html,
            "<h2>{}</h2><p>{}</p>",
            esc(labels.profile),
            esc(&b.summary)
        );
    }

    if !doc.work.is_empty() {
        let _ = write!(html, "<h2>{}</h2>", esc(labels.experience));
        for work in &doc.work {
            html.push_str("<div class=\"entry\"><div class=\"entry-head\">");
            let _ = write!(
                html,
                "<span class=\"what\">{} — {}</span>",
                esc(&work.position),
                esc(&work.company)
            );
            let _ = write!(
                html,
                "<span class=\"when\">{}</span></div>",
                date_range(&work.start_date, &work.end_date)
            );
            if !work.location.is_empty() || !work.contract_type.is_empty() {
                let mut meta: Vec<&str> = Vec::new();
                if !work.location.is_empty() {
                    meta.push(&work.location);
                }
                if !work.contract_type.is_empty() {
                    meta.push(&work.contract_type);
                }
                let _ = write!(
                    html,
                    "<div class=\"where\">{}</div>",
                    meta.iter().map(|m| esc(m)).collect::<Vec<_>>().join(", ")
                );
            }
            if !work.summary.is_empty() {
                let _ = write!(html, "<p class=\"summary\">{}</p>", esc(&work.summary));
            }
            if !work.skills.is_empty() {
                let _ = write!(
                    html,
                    "<div class=\"tags\">{}</div>",
                    work.skills.iter().map(|s| esc(s)).collect::<Vec<_>>().join(", ")
                );
            }
            html.push_str("</div>");
        }
    }

    if !doc.projects.is_empty() {
        let _ = write!(html, "<h2>{}</h2>", esc(labels.projects));
        for project in &doc.projects {
            html.push_str("<div class=\"entry\"><div class=\"entry-head\">");
            let _ = write!(html, "<span class=\"what\">{}</span>", esc(&project.name));
            if !project.url.is_empty() {
                let _ = write!(html, "<span class=\"when\">{}</span>", esc(&project.url));
            }
            html.push_str("</div>");
            if !project.description.is_empty() {
                let _ = write!(html, "<p class=\"summary\">{}</p>", esc(&project.description));
            }
            html.push_str("</div>");
        }
    }

    if !doc.education.is_empty() {
        let _ = write!(html, "<h2>{}</h2>", esc(labels.education));
        for edu in &doc.education {
            html.push_str("<div class=\"entry\"><div class=\"entry-head\">");
            let what = if edu.area.is_empty() {
                esc(&edu.institution)
            } else {
                format!("{} — {}", esc(&edu.institution), esc(&edu.area))
            };
            let _ = write!(html, "<span class=\"what\">{what}</span>");
            let _ = write!(
                html,
                "<span class=\"when\">{}</span></div>",
                date_range(&edu.start_date, &edu.end_date)
            );
            if !edu.study_type.is_empty() {
                let _ = write!(html, "<div class=\"where\">{}</div>", esc(&edu.study_type));
            }
            if !edu.courses.is_empty() {
                let _ = write!(
                    html,
                    "<div class=\"tags\">{}</div>",
                    edu.courses.iter().map(|c| esc(c)).collect::<Vec<_>>().join(", ")
                );
            }
            html.push_str("</div>");
        }
    }

    if !doc.certificates.is_empty() {
        let _ = write!(html, "<h2>{}</h2>", esc(labels.certificates));
        for cert in &doc.certificates {
            html.push_str("<div class=\"entry\"><div class=\"entry-head\">");
            let what = if cert.issuer.is_empty() {
                esc(&cert.title)
            } else {
                format!("{} — {}", esc(&cert.title), esc(&cert.issuer))
            };
            let _ = write!(html, "<span class=\"what\">{what}</span>");
            if !cert.date.is_empty() {
                let _ = write!(html, "<span class=\"when\">{}</span>", esc(&cert.date));
            }
            html.push_str("</div></div>");
        }
    }

    if !doc.skills.is_empty() {
        let _ = write!(html, "<h2>{}</h2><ul class=\"inline\">", esc(labels.skills));
        for skill in &doc.skills {
            let _ = write!(html, "<li>{}</li>", esc(&skill.name));
        }
        html.push_str("</ul>");
    }

    if !doc.soft_skills.is_empty() {
        let _ = write!(html, "<h2>{}</h2><ul class=\"inline\">", esc(labels.soft_skills));
        for skill in &doc.soft_skills {
            let _ = write!(html, "<li>{}</li>", esc(&skill.name));
        }
        html.push_str("</ul>");
    }

    if !doc.languages.is_empty() {
        let _ = write!(html, "<h2>{}</h2><ul class=\"inline\">", esc(labels.languages));
        for lang in &doc.languages {
            if lang.fluency.is_empty() {
                let _ = write!(html, "<li>{}</li>", esc(&lang.language));
            } else {
                let _ = write!(html, "<li>{} ({})</li>", esc(&lang.language), esc(&lang.fluency));
            }
        }
        html.push_str("</ul>");
    }

    if !doc.interests.is_empty() {
        let _ = write!(html, "<h2>{}</h2><ul class=\"inline\">", esc(labels.interests));
        for interest in &doc.interests {
            let _ = write!(html, "<li>{}</li>", esc(&interest.name));
        }
        html.push_str("</ul>");
    }

    html.push_str("</body></html>");
    html
}

#[cfg(test)]
mod tests {
    use super::*;

    fn sample_doc(template: &str) -> ResumeDocument {
        serde_json::from_value(serde_json::json!({
            "basics": {
                "name": "Jane <Doe>",
                "label": "Backend Engineer",
                "email": "jane@example.com",
                "summary": "Builds reliable services.",
                "location": {"city": "Tashkent", "countryCode": "UZ", "region": "Tashkent"},
                "salary": 3000,
                "job_location": "online",
                "job_type": "full-time",
                "experience_years": 4
            },
            "work": [{
                "position": "Engineer",
                "company": "Acme & Co",
                "startDate": "2021-01",
                "endDate": "",
                "skills": ["Rust", "Postgres"]
            }],
            "skills": [{"name": "Rust"}],
            "languages": [{"language": "English", "fluency": "Fluent"}],
            "meta": {"template": template, "lang": "en"}
        }))
        .unwrap()
    }

    #[test]
    fn renders_classic_template() {
        let html = render_html(&sample_doc("classic")).unwrap();
        assert!(html.starts_with("<!DOCTYPE html>"));
        assert!(html.contains("Experience"));
        assert!(html.contains("2021-01 – present"));
        assert!(html.contains("Rust, Postgres"));
    }

    #[test]
    fn escapes_user_content() {
        let html = render_html(&sample_doc("classic")).unwrap();
        assert!(html.contains("Jane &lt;Doe&gt;"));
        assert!(html.contains("Acme &amp; Co"));
        assert!(!html.contains("Jane <Doe>"));
    }

    #[test]
    fn rejects_unknown_template() {
        let err = render_html(&sample_doc("modern")).unwrap_err();
        assert_eq!(err.kind, cvforge_core::error::ErrorKind::Validation);
        assert!(err.message.contains("modern"));
    }
}
