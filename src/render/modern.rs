//! Modern template: grey banner with a thick accent left border, numbered
//! badge headings, and a two-column body with contact and bars on the right.

use super::html::{contact_fields, escape_html, fill_bar, skill_percent};
use super::{dates, Template, TemplateId, Theme};
use crate::model::ResumeData;

pub struct ModernTemplate;

const TEXT: &str = "#1D1D1F";
const BODY: &str = "#494949";
const MUTED: &str = "#86868B";
const BANNER: &str = "#F5F5F7";
const TRACK: &str = "#E5E7EB";

impl Template for ModernTemplate {
    fn id(&self) -> TemplateId {
        TemplateId::Modern
    }

    fn render_body(&self, data: &ResumeData, theme: &Theme) -> String {
        let mut out = String::new();
        out.push_str(&format!(
            "<div style=\"max-width:56rem;margin:0 auto;color:{}\">",
            TEXT
        ));

        // Banner
        out.push_str(&format!(
            "<header style=\"background:{};padding:32px 40px;border-left:8px solid {}\">",
            BANNER,
            theme.hex()
        ));
        out.push_str(&format!(
            "<h1 style=\"font-size:30px;font-weight:700;margin:0 0 4px\">{}</h1>",
            escape_html(&data.personal.full_name)
        ));
        if !data.personal.title.is_empty() {
            out.push_str(&format!(
                "<p style=\"font-size:17px;font-weight:500;margin:0;color:{}\">{}</p>",
                theme.hex(),
                escape_html(&data.personal.title)
            ));
        }
        out.push_str("</header>");

        out.push_str("<div style=\"display:flex;gap:32px;padding:28px 40px\">");
        self.main_column(&mut out, data, theme);
        self.side_column(&mut out, data, theme);
        out.push_str("</div></div>");
        out
    }
}

impl ModernTemplate {
    fn badge_heading(&self, out: &mut String, theme: &Theme, number: u8, text: &str) {
        out.push_str(&format!(
            "<h2 style=\"display:flex;align-items:center;font-size:17px;font-weight:600;\
             margin:0 0 14px\"><span style=\"width:24px;height:24px;border-radius:50%;\
             margin-right:8px;display:inline-flex;align-items:center;justify-content:center;\
             color:white;font-size:12px;background:{}\">{}</span>{}</h2>",
            theme.hex(),
            number,
            text
        ));
    }

    fn main_column(&self, out: &mut String, data: &ResumeData, theme: &Theme) {
        out.push_str("<div style=\"width:62%\">");
        let mut section = 1;

        if data.has_summary() {
            out.push_str("<section style=\"margin-bottom:26px\">");
            self.badge_heading(out, theme, section, "Summary");
            section += 1;
            out.push_str(&format!(
                "<p style=\"font-size:13px;line-height:1.6;margin:0;color:{}\">{}</p>",
                BODY,
                escape_html(&data.personal.summary)
            ));
            out.push_str("</section>");
        }

        if !data.work_experience.is_empty() {
            out.push_str("<section style=\"margin-bottom:26px\">");
            self.badge_heading(out, theme, section, "Experience");
            section += 1;
            for work in &data.work_experience {
                out.push_str("<div style=\"margin-bottom:16px\">");
                out.push_str("<div style=\"display:flex;justify-content:space-between\">");
                out.push_str(&format!(
                    "<h3 style=\"font-size:15px;font-weight:600;margin:0\">{}</h3>",
                    escape_html(&work.position)
                ));
                out.push_str(&format!(
                    "<span style=\"font-size:12px;color:{}\">{}</span>",
                    MUTED,
                    dates::format_range(&work.start_date, &work.end_date, work.current)
                ));
                out.push_str("</div>");
                out.push_str(&format!(
                    "<div style=\"font-size:13px;font-weight:500;color:{}\">{}</div>",
                    theme.hex(),
                    escape_html(&work.company)
                ));
                if !work.location.is_empty() {
                    out.push_str(&format!(
                        "<div style=\"font-size:12px;color:{}\">{}</div>",
                        MUTED,
                        escape_html(&work.location)
                    ));
                }
                if !work.description.is_empty() {
                    out.push_str(&format!(
                        "<p style=\"font-size:12px;line-height:1.6;margin:6px 0 0;color:{}\">{}</p>",
                        BODY,
                        escape_html(&work.description)
                    ));
                }
                out.push_str("</div>");
            }
            out.push_str("</section>");
        }

        if !data.education.is_empty() {
            out.push_str("<section style=\"margin-bottom:26px\">");
            self.badge_heading(out, theme, section, "Education");
            for edu in &data.education {
                out.push_str("<div style=\"margin-bottom:14px\">");
                out.push_str("<div style=\"display:flex;justify-content:space-between\">");
                out.push_str(&format!(
                    "<h3 style=\"font-size:15px;font-weight:600;margin:0\">{} in {}</h3>",
                    escape_html(&edu.degree),
                    escape_html(&edu.field)
                ));
                out.push_str(&format!(
                    "<span style=\"font-size:12px;color:{}\">{}</span>",
                    MUTED,
                    dates::format_range(&edu.start_date, &edu.end_date, false)
                ));
                out.push_str("</div>");
                out.push_str(&format!(
                    "<div style=\"font-size:13px;font-weight:500;color:{}\">{}</div>",
                    theme.hex(),
                    escape_html(&edu.institution)
                ));
                out.push_str("</div>");
            }
            out.push_str("</section>");
        }

        out.push_str("</div>");
    }

    fn side_column(&self, out: &mut String, data: &ResumeData, theme: &Theme) {
        out.push_str("<div style=\"width:38%\">");

        let contacts = contact_fields(&data.personal);
        if !contacts.is_empty() {
            out.push_str("<section style=\"margin-bottom:24px\">");
            self.side_heading(out, theme, "Contact");
            for (label, value) in contacts {
                out.push_str(&format!(
                    "<div style=\"font-size:12px;margin-bottom:6px\">\
                     <span style=\"text-transform:uppercase;color:{};margin-right:6px\">{}:</span>\
                     <span style=\"color:{}\">{}</span></div>",
                    MUTED,
                    label,
                    BODY,
                    escape_html(value)
                ));
            }
            out.push_str("</section>");
        }

        if !data.skills.is_empty() {
            out.push_str("<section style=\"margin-bottom:24px\">");
            self.side_heading(out, theme, "Skills");
            for skill in &data.skills {
                out.push_str("<div style=\"margin-bottom:8px\">");
                out.push_str(&format!(
                    "<div style=\"font-size:12px;margin-bottom:3px;color:{}\">{}</div>",
                    BODY,
                    escape_html(&skill.name)
                ));
                fill_bar(out, skill_percent(skill.level), theme.hex(), TRACK);
                out.push_str("</div>");
            }
            out.push_str("</section>");
        }

        if !data.languages.is_empty() {
            out.push_str("<section style=\"margin-bottom:24px\">");
            self.side_heading(out, theme, "Languages");
            for language in &data.languages {
                out.push_str("<div style=\"margin-bottom:8px\">");
                out.push_str(&format!(
                    "<div style=\"display:flex;justify-content:space-between;font-size:12px;\
                     margin-bottom:3px\"><span style=\"color:{}\">{}</span>\
                     <span style=\"color:{}\">{}</span></div>",
                    BODY,
                    escape_html(&language.name),
                    MUTED,
                    language.proficiency
                ));
                fill_bar(out, language.proficiency.percent(), &theme.muted(), TRACK);
                out.push_str("</div>");
            }
            out.push_str("</section>");
        }

        if !data.certifications.is_empty() {
            out.push_str("<section>");
            self.side_heading(out, theme, "Certifications");
            for cert in &data.certifications {
                out.push_str(&format!(
                    "<div style=\"font-size:12px;background:white;padding:6px 10px;\
                     margin-bottom:8px;border-left:3px solid {}\">\
                     <div style=\"font-weight:500;color:{}\">{}</div>\
                     <div style=\"color:{}\">{}</div></div>",
                    theme.hex(),
                    BODY,
                    escape_html(&cert.name),
                    MUTED,
                    escape_html(&cert.organization)
                ));
            }
            out.push_str("</section>");
        }

        out.push_str("</div>");
    }

    fn side_heading(&self, out: &mut String, theme: &Theme, text: &str) {
        out.push_str(&format!(
            "<h2 style=\"font-size:14px;font-weight:600;text-transform:uppercase;\
             letter-spacing:1px;margin:0 0 10px;color:{}\">{}</h2>",
            theme.hex(),
            text
        ));
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::render::AccentColor;

    #[test]
    fn test_banner_uses_accent_border() {
        let theme = Theme::new(AccentColor::Purple);
        let body = ModernTemplate.render_body(&ResumeData::sample(), &theme);
        assert!(body.contains("border-left:8px solid #8B5CF6"));
    }

    #[test]
    fn test_section_badges_number_in_order() {
        let body = ModernTemplate.render_body(&ResumeData::sample(), &Theme::default());
        let summary_pos = body.find("Summary").unwrap();
        let experience_pos = body.find("Experience").unwrap();
        assert!(summary_pos < experience_pos);
        assert!(body.contains(">1</span>Summary"));
        assert!(body.contains(">2</span>Experience"));
    }

    #[test]
    fn test_empty_resume_has_no_headings() {
        let body = ModernTemplate.render_body(&ResumeData::empty(), &Theme::default());
        assert!(!body.contains("Experience"));
        assert!(!body.contains("Contact"));
    }
}
