//! Sidebar template: solid accent sidebar carrying contact, skills,
//! languages, education, and certifications; the main column keeps the
//! uppercase name, profile, and experience.

use super::html::{contact_fields, escape_html, fill_bar, initials, skill_percent};
use super::{dates, Template, TemplateId, Theme};
use crate::model::ResumeData;

pub struct SidebarTemplate;

const TEXT: &str = "#333333";
const SIDEBAR_TRACK: &str = "rgba(255,255,255,0.2)";

impl Template for SidebarTemplate {
    fn id(&self) -> TemplateId {
        TemplateId::Sidebar
    }

    fn render_body(&self, data: &ResumeData, theme: &Theme) -> String {
        let mut out = String::new();
        out.push_str(&format!(
            "<div style=\"display:flex;max-width:56rem;margin:0 auto;color:{}\">",
            TEXT
        ));
        self.sidebar(&mut out, data, theme);
        self.main_column(&mut out, data, theme);
        out.push_str("</div>");
        out
    }
}

impl SidebarTemplate {
    fn side_heading(&self, out: &mut String, text: &str) {
        out.push_str(&format!(
            "<h3 style=\"font-size:16px;font-weight:700;text-transform:uppercase;\
             margin:0 0 12px;padding-bottom:4px;\
             border-bottom:1px solid rgba(255,255,255,0.3)\">{}</h3>",
            text
        ));
    }

    fn main_heading(&self, out: &mut String, theme: &Theme, text: &str) {
        out.push_str(&format!(
            "<h3 style=\"font-size:17px;font-weight:700;text-transform:uppercase;\
             margin:0 0 12px;padding-bottom:4px;border-bottom:1px solid {}\">{}</h3>",
            theme.hex(),
            text
        ));
    }

    fn sidebar(&self, out: &mut String, data: &ResumeData, theme: &Theme) {
        out.push_str(&format!(
            "<div style=\"width:33%;padding:24px 20px;color:white;background:{}\">",
            theme.hex()
        ));

        let badge = initials(&data.personal.full_name);
        if !badge.is_empty() {
            out.push_str(&format!(
                "<div style=\"width:96px;height:96px;border-radius:50%;margin:0 auto 20px;\
                 background:rgba(255,255,255,0.2);display:flex;align-items:center;\
                 justify-content:center;font-size:32px\">{}</div>",
                escape_html(&badge)
            ));
        }

        let contacts = contact_fields(&data.personal);
        if !contacts.is_empty() {
            out.push_str("<div style=\"text-align:center;font-size:13px;margin-bottom:28px\">");
            for (_, value) in contacts {
                out.push_str(&format!(
                    "<div style=\"margin-bottom:6px\">{}</div>",
                    escape_html(value)
                ));
            }
            out.push_str("</div>");
        }

        if !data.skills.is_empty() {
            out.push_str("<div style=\"margin-bottom:24px\">");
            self.side_heading(out, "Skills");
            for skill in &data.skills {
                out.push_str("<div style=\"margin-bottom:8px\">");
                out.push_str(&format!(
                    "<div style=\"display:flex;justify-content:space-between;font-size:13px;\
                     margin-bottom:3px\"><span>{}</span><span>{}/5</span></div>",
                    escape_html(&skill.name),
                    skill.level.clamp(1, 5)
                ));
                fill_bar(out, skill_percent(skill.level), "white", SIDEBAR_TRACK);
                out.push_str("</div>");
            }
            out.push_str("</div>");
        }

        if !data.languages.is_empty() {
            out.push_str("<div style=\"margin-bottom:24px\">");
            self.side_heading(out, "Languages");
            out.push_str("<ul style=\"list-style:none;margin:0;padding:0;font-size:13px\">");
            for language in &data.languages {
                out.push_str(&format!(
                    "<li style=\"display:flex;justify-content:space-between;margin-bottom:4px\">\
                     <span>{}</span><span>{}</span></li>",
                    escape_html(&language.name),
                    language.proficiency
                ));
            }
            out.push_str("</ul></div>");
        }

        if !data.education.is_empty() {
            out.push_str("<div style=\"margin-bottom:24px\">");
            self.side_heading(out, "Education");
            for edu in &data.education {
                out.push_str("<div style=\"margin-bottom:10px;font-size:13px\">");
                out.push_str(&format!(
                    "<div style=\"font-weight:700\">{}</div><div>{}</div><div>{}</div>",
                    escape_html(&edu.degree),
                    escape_html(&edu.field),
                    escape_html(&edu.institution)
                ));
                out.push_str(&format!(
                    "<div style=\"font-size:12px;opacity:0.8\">{}</div>",
                    dates::format_range(&edu.start_date, &edu.end_date, false)
                ));
                out.push_str("</div>");
            }
            out.push_str("</div>");
        }

        if !data.certifications.is_empty() {
            out.push_str("<div>");
            self.side_heading(out, "Certifications");
            for cert in &data.certifications {
                out.push_str("<div style=\"margin-bottom:8px;font-size:13px\">");
                out.push_str(&format!(
                    "<div style=\"font-weight:500\">{}</div>\
                     <div style=\"font-size:12px\">{}</div>",
                    escape_html(&cert.name),
                    escape_html(&cert.organization)
                ));
                let date = dates::format_date(&cert.date);
                if !date.is_empty() {
                    out.push_str(&format!(
                        "<div style=\"font-size:12px;opacity:0.8\">{}</div>",
                        date
                    ));
                }
                out.push_str("</div>");
            }
            out.push_str("</div>");
        }

        out.push_str("</div>");
    }

    fn main_column(&self, out: &mut String, data: &ResumeData, theme: &Theme) {
        out.push_str("<div style=\"width:67%;padding:24px 28px\">");

        out.push_str("<div style=\"margin-bottom:24px\">");
        out.push_str(&format!(
            "<h1 style=\"font-size:30px;font-weight:800;text-transform:uppercase;\
             margin:0 0 4px;color:{}\">{}</h1>",
            theme.hex(),
            escape_html(&data.personal.full_name)
        ));
        if !data.personal.title.is_empty() {
            out.push_str(&format!(
                "<h2 style=\"font-size:17px;font-weight:400;opacity:0.8;margin:0\">{}</h2>",
                escape_html(&data.personal.title)
            ));
        }
        out.push_str("</div>");

        if data.has_summary() {
            out.push_str("<div style=\"margin-bottom:24px\">");
            self.main_heading(out, theme, "Profile");
            out.push_str(&format!(
                "<p style=\"font-size:13px;line-height:1.6;margin:0\">{}</p>",
                escape_html(&data.personal.summary)
            ));
            out.push_str("</div>");
        }

        if !data.work_experience.is_empty() {
            out.push_str("<div>");
            self.main_heading(out, theme, "Experience");
            for work in &data.work_experience {
                out.push_str("<div style=\"margin-bottom:16px\">");
                out.push_str("<div style=\"display:flex;justify-content:space-between;flex-wrap:wrap\">");
                out.push_str(&format!(
                    "<div><h4 style=\"font-size:15px;font-weight:700;margin:0\">{}</h4>\
                     <h5 style=\"font-size:13px;font-weight:500;margin:2px 0 0\">{}, {}</h5></div>",
                    escape_html(&work.position),
                    escape_html(&work.company),
                    escape_html(&work.location)
                ));
                out.push_str(&format!(
                    "<div style=\"font-size:12px;opacity:0.7\">{}</div>",
                    dates::format_range(&work.start_date, &work.end_date, work.current)
                ));
                out.push_str("</div>");
                if !work.description.is_empty() {
                    out.push_str(&format!(
                        "<p style=\"font-size:13px;line-height:1.6;margin:8px 0 0\">{}</p>",
                        escape_html(&work.description)
                    ));
                }
                out.push_str("</div>");
            }
            out.push_str("</div>");
        }

        out.push_str("</div>");
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::render::AccentColor;

    #[test]
    fn test_sidebar_background_is_accent() {
        let theme = Theme::new(AccentColor::Teal);
        let body = SidebarTemplate.render_body(&ResumeData::sample(), &theme);
        assert!(body.contains("background:#14B8A6"));
    }

    #[test]
    fn test_skill_shows_level_fraction() {
        let body = SidebarTemplate.render_body(&ResumeData::sample(), &Theme::default());
        assert!(body.contains("5/5"));
        assert!(body.contains("3/5"));
    }

    #[test]
    fn test_current_position_shows_present() {
        let body = SidebarTemplate.render_body(&ResumeData::sample(), &Theme::default());
        assert!(body.contains("Mar 2020 - Present"));
    }
}
