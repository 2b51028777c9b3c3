//! Creative template: gradient accent sidebar carrying identity, contact,
//! skills, and languages; the main column holds the narrative sections.

use super::html::{contact_fields, escape_html, fill_bar, initials, skill_percent};
use super::{dates, Template, TemplateId, Theme};
use crate::model::ResumeData;

pub struct CreativeTemplate;

const TEXT: &str = "#1D1D1F";
const BODY: &str = "#494949";
const MUTED: &str = "#86868B";
const SIDEBAR_TRACK: &str = "rgba(255,255,255,0.2)";

impl Template for CreativeTemplate {
    fn id(&self) -> TemplateId {
        TemplateId::Creative
    }

    fn render_body(&self, data: &ResumeData, theme: &Theme) -> String {
        let mut out = String::new();
        out.push_str("<div style=\"display:flex;max-width:56rem;margin:0 auto\">");
        self.side_column(&mut out, data, theme);
        self.main_column(&mut out, data, theme);
        out.push_str("</div>");
        out
    }
}

impl CreativeTemplate {
    fn side_heading(&self, out: &mut String, text: &str) {
        out.push_str(&format!(
            "<h2 style=\"font-size:16px;font-weight:600;margin:0 0 12px;padding-bottom:4px;\
             border-bottom:1px solid rgba(255,255,255,0.3)\">{}</h2>",
            text
        ));
    }

    fn main_heading(&self, out: &mut String, theme: &Theme, text: &str) {
        out.push_str(&format!(
            "<h2 style=\"font-size:18px;font-weight:600;margin:0 0 12px;padding-bottom:4px;\
             border-bottom:1px solid {};color:{}\">{}</h2>",
            theme.soft(),
            theme.hex(),
            text
        ));
    }

    fn side_column(&self, out: &mut String, data: &ResumeData, theme: &Theme) {
        out.push_str(&format!(
            "<div style=\"width:33%;padding:32px 24px;color:white;\
             background:linear-gradient(to bottom,{},{})\">",
            theme.hex(),
            theme.deep()
        ));

        // Identity badge
        out.push_str("<div style=\"text-align:center;margin-bottom:32px\">");
        let badge = initials(&data.personal.full_name);
        if !badge.is_empty() {
            out.push_str(&format!(
                "<div style=\"width:80px;height:80px;border-radius:50%;margin:0 auto 16px;\
                 background:rgba(255,255,255,0.2);display:flex;align-items:center;\
                 justify-content:center;font-size:24px;font-weight:700\">{}</div>",
                escape_html(&badge)
            ));
        }
        out.push_str(&format!(
            "<h1 style=\"font-size:24px;font-weight:700;margin:0 0 4px\">{}</h1>",
            escape_html(&data.personal.full_name)
        ));
        if !data.personal.title.is_empty() {
            out.push_str(&format!(
                "<p style=\"font-size:14px;font-weight:500;opacity:0.9;margin:0\">{}</p>",
                escape_html(&data.personal.title)
            ));
        }
        out.push_str("</div>");

        let contacts = contact_fields(&data.personal);
        if !contacts.is_empty() {
            out.push_str("<div style=\"margin-bottom:32px\">");
            self.side_heading(out, "Contact");
            out.push_str("<ul style=\"list-style:none;margin:0;padding:0;font-size:13px\">");
            for (_, value) in contacts {
                out.push_str(&format!(
                    "<li style=\"margin-bottom:10px\">{}</li>",
                    escape_html(value)
                ));
            }
            out.push_str("</ul></div>");
        }

        if !data.skills.is_empty() {
            out.push_str("<div style=\"margin-bottom:32px\">");
            self.side_heading(out, "Skills");
            for skill in &data.skills {
                out.push_str("<div style=\"margin-bottom:10px\">");
                out.push_str(&format!(
                    "<div style=\"display:flex;justify-content:space-between;font-size:13px;\
                     font-weight:500;margin-bottom:4px\"><span>{}</span>\
                     <span style=\"opacity:0.7;font-size:12px\">{}/5</span></div>",
                    escape_html(&skill.name),
                    skill.level.clamp(1, 5)
                ));
                fill_bar(out, skill_percent(skill.level), "white", SIDEBAR_TRACK);
                out.push_str("</div>");
            }
            out.push_str("</div>");
        }

        if !data.languages.is_empty() {
            out.push_str("<div>");
            self.side_heading(out, "Languages");
            for language in &data.languages {
                out.push_str("<div style=\"margin-bottom:10px\">");
                out.push_str(&format!(
                    "<div style=\"display:flex;justify-content:space-between;font-size:13px;\
                     margin-bottom:4px\"><span>{}</span>\
                     <span style=\"opacity:0.7;font-size:12px\">{}</span></div>",
                    escape_html(&language.name),
                    language.proficiency
                ));
                fill_bar(out, language.proficiency.percent(), "white", SIDEBAR_TRACK);
                out.push_str("</div>");
            }
            out.push_str("</div>");
        }

        out.push_str("</div>");
    }

    fn main_column(&self, out: &mut String, data: &ResumeData, theme: &Theme) {
        out.push_str(&format!(
            "<div style=\"width:67%;padding:32px;color:{}\">",
            TEXT
        ));

        if data.has_summary() {
            out.push_str("<section style=\"margin-bottom:28px\">");
            self.main_heading(out, theme, "About Me");
            out.push_str(&format!(
                "<p style=\"font-size:13px;line-height:1.6;margin:0;color:{}\">{}</p>",
                BODY,
                escape_html(&data.personal.summary)
            ));
            out.push_str("</section>");
        }

        if !data.work_experience.is_empty() {
            out.push_str("<section style=\"margin-bottom:28px\">");
            self.main_heading(out, theme, "Experience");
            for work in &data.work_experience {
                out.push_str("<div style=\"margin-bottom:16px\">");
                out.push_str(&format!(
                    "<h3 style=\"font-size:15px;font-weight:600;margin:0\">{}</h3>",
                    escape_html(&work.position)
                ));
                out.push_str(&format!(
                    "<div style=\"font-size:13px;color:{}\">{}</div>",
                    theme.hex(),
                    escape_html(&work.company)
                ));
                out.push_str(&format!(
                    "<div style=\"font-size:12px;color:{}\">{} \u{2022} {}</div>",
                    MUTED,
                    escape_html(&work.location),
                    dates::format_range(&work.start_date, &work.end_date, work.current)
                ));
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
            out.push_str("<section style=\"margin-bottom:28px\">");
            self.main_heading(out, theme, "Education");
            for edu in &data.education {
                out.push_str("<div style=\"margin-bottom:14px\">");
                out.push_str(&format!(
                    "<h3 style=\"font-size:15px;font-weight:600;margin:0\">{} in {}</h3>",
                    escape_html(&edu.degree),
                    escape_html(&edu.field)
                ));
                out.push_str(&format!(
                    "<div style=\"font-size:13px;color:{}\">{}</div>",
                    theme.hex(),
                    escape_html(&edu.institution)
                ));
                out.push_str(&format!(
                    "<div style=\"font-size:12px;color:{}\">{}</div>",
                    MUTED,
                    dates::format_range(&edu.start_date, &edu.end_date, false)
                ));
                out.push_str("</div>");
            }
            out.push_str("</section>");
        }

        if !data.certifications.is_empty() {
            out.push_str("<section>");
            self.main_heading(out, theme, "Certifications");
            for cert in &data.certifications {
                out.push_str("<div style=\"margin-bottom:10px;font-size:13px\">");
                out.push_str(&format!(
                    "<span style=\"font-weight:500\">{}</span>",
                    escape_html(&cert.name)
                ));
                out.push_str(&format!(
                    " <span style=\"color:{}\">\u{2014} {}</span>",
                    theme.hex(),
                    escape_html(&cert.organization)
                ));
                let date = dates::format_date(&cert.date);
                if !date.is_empty() {
                    out.push_str(&format!(
                        " <span style=\"color:{}\">({})</span>",
                        MUTED, date
                    ));
                }
                out.push_str("</div>");
            }
            out.push_str("</section>");
        }

        out.push_str("</div>");
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_sidebar_carries_initials_badge() {
        let body = CreativeTemplate.render_body(&ResumeData::sample(), &Theme::default());
        assert!(body.contains(">JA</div>"));
        assert!(body.contains("linear-gradient"));
    }

    #[test]
    fn test_empty_resume_has_no_section_headings() {
        let body = CreativeTemplate.render_body(&ResumeData::empty(), &Theme::default());
        for heading in ["Contact", "Skills", "Languages", "Experience", "Education"] {
            assert!(!body.contains(heading), "unexpected heading: {}", heading);
        }
    }
}
