//! Minimal template: centered header, uppercase letterspaced headings with a
//! short accent underline, and skills as a dot-separated line.

use super::html::{contact_fields, escape_html};
use super::{dates, Template, TemplateId, Theme};
use crate::model::ResumeData;

pub struct MinimalTemplate;

const TEXT: &str = "#1D1D1F";
const BODY: &str = "#494949";
const MUTED: &str = "#86868B";

impl Template for MinimalTemplate {
    fn id(&self) -> TemplateId {
        TemplateId::Minimal
    }

    fn render_body(&self, data: &ResumeData, theme: &Theme) -> String {
        let mut out = String::new();
        out.push_str(&format!(
            "<div style=\"padding:40px;max-width:52rem;margin:0 auto;color:{}\">",
            TEXT
        ));

        self.header(&mut out, data, theme);
        self.summary(&mut out, data, theme);
        self.experience(&mut out, data, theme);
        self.education(&mut out, data, theme);
        self.skills(&mut out, data, theme);
        self.languages(&mut out, data, theme);
        self.certifications(&mut out, data, theme);

        out.push_str("</div>");
        out
    }
}

impl MinimalTemplate {
    fn heading(&self, out: &mut String, theme: &Theme, text: &str) {
        out.push_str(&format!(
            "<h2 style=\"font-size:15px;font-weight:400;text-transform:uppercase;\
             letter-spacing:3px;text-align:center;margin:0 0 8px;color:{}\">{}</h2>\
             <div style=\"width:64px;height:2px;margin:0 auto 24px;background:{}\"></div>",
            theme.hex(),
            text,
            theme.hex()
        ));
    }

    fn header(&self, out: &mut String, data: &ResumeData, theme: &Theme) {
        out.push_str("<header style=\"text-align:center;margin-bottom:40px\">");
        out.push_str(&format!(
            "<h1 style=\"font-size:32px;font-weight:300;letter-spacing:-0.5px;margin:0 0 8px\">{}</h1>",
            escape_html(&data.personal.full_name)
        ));
        if !data.personal.title.is_empty() {
            out.push_str(&format!(
                "<p style=\"font-size:15px;font-weight:500;margin:0 0 16px;color:{}\">{}</p>",
                theme.hex(),
                escape_html(&data.personal.title)
            ));
        }
        let contacts = contact_fields(&data.personal);
        if !contacts.is_empty() {
            let line = contacts
                .iter()
                .map(|(_, v)| escape_html(v))
                .collect::<Vec<_>>()
                .join(" \u{2022} ");
            out.push_str(&format!(
                "<div style=\"font-size:13px;color:{}\">{}</div>",
                MUTED, line
            ));
        }
        out.push_str("</header>");
    }

    fn summary(&self, out: &mut String, data: &ResumeData, theme: &Theme) {
        if !data.has_summary() {
            return;
        }
        out.push_str("<section style=\"margin-bottom:36px\">");
        self.heading(out, theme, "Profile");
        out.push_str(&format!(
            "<p style=\"font-size:13px;line-height:1.7;margin:0;text-align:center;color:{}\">{}</p>",
            BODY,
            escape_html(&data.personal.summary)
        ));
        out.push_str("</section>");
    }

    fn experience(&self, out: &mut String, data: &ResumeData, theme: &Theme) {
        if data.work_experience.is_empty() {
            return;
        }
        out.push_str("<section style=\"margin-bottom:36px\">");
        self.heading(out, theme, "Experience");
        for work in &data.work_experience {
            out.push_str("<div style=\"margin-bottom:20px\">");
            out.push_str("<div style=\"display:flex;justify-content:space-between\">");
            out.push_str(&format!(
                "<div><h3 style=\"font-size:15px;font-weight:500;margin:0\">{}</h3>\
                 <p style=\"font-size:13px;margin:2px 0 0;color:{}\">{} \u{2022} {}</p></div>",
                escape_html(&work.position),
                theme.hex(),
                escape_html(&work.company),
                escape_html(&work.location)
            ));
            out.push_str(&format!(
                "<div style=\"font-size:12px;color:{}\">{}</div>",
                MUTED,
                dates::format_range(&work.start_date, &work.end_date, work.current)
            ));
            out.push_str("</div>");
            if !work.description.is_empty() {
                out.push_str(&format!(
                    "<p style=\"font-size:12px;line-height:1.7;margin:8px 0 0;color:{}\">{}</p>",
                    BODY,
                    escape_html(&work.description)
                ));
            }
            out.push_str("</div>");
        }
        out.push_str("</section>");
    }

    fn education(&self, out: &mut String, data: &ResumeData, theme: &Theme) {
        if data.education.is_empty() {
            return;
        }
        out.push_str("<section style=\"margin-bottom:36px\">");
        self.heading(out, theme, "Education");
        for edu in &data.education {
            out.push_str("<div style=\"margin-bottom:16px\">");
            out.push_str("<div style=\"display:flex;justify-content:space-between\">");
            out.push_str(&format!(
                "<div><h3 style=\"font-size:15px;font-weight:500;margin:0\">{} in {}</h3>\
                 <p style=\"font-size:13px;margin:2px 0 0;color:{}\">{} \u{2022} {}</p></div>",
                escape_html(&edu.degree),
                escape_html(&edu.field),
                theme.hex(),
                escape_html(&edu.institution),
                escape_html(&edu.location)
            ));
            out.push_str(&format!(
                "<div style=\"font-size:12px;color:{}\">{}</div>",
                MUTED,
                dates::format_range(&edu.start_date, &edu.end_date, false)
            ));
            out.push_str("</div></div>");
        }
        out.push_str("</section>");
    }

    fn skills(&self, out: &mut String, data: &ResumeData, theme: &Theme) {
        if data.skills.is_empty() {
            return;
        }
        out.push_str("<section style=\"margin-bottom:36px\">");
        self.heading(out, theme, "Skills");
        let line = data
            .skills
            .iter()
            .map(|s| escape_html(&s.name))
            .collect::<Vec<_>>()
            .join(&format!(
                "<span style=\"color:{}\"> \u{2022} </span>",
                theme.hex()
            ));
        out.push_str(&format!(
            "<p style=\"font-size:13px;text-align:center;margin:0;color:{}\">{}</p>",
            BODY, line
        ));
        out.push_str("</section>");
    }

    fn languages(&self, out: &mut String, data: &ResumeData, theme: &Theme) {
        if data.languages.is_empty() {
            return;
        }
        out.push_str("<section style=\"margin-bottom:36px\">");
        self.heading(out, theme, "Languages");
        let line = data
            .languages
            .iter()
            .map(|l| {
                format!(
                    "{} <span style=\"color:{}\">({})</span>",
                    escape_html(&l.name),
                    MUTED,
                    l.proficiency
                )
            })
            .collect::<Vec<_>>()
            .join(&format!(
                "<span style=\"color:{}\"> \u{2022} </span>",
                theme.hex()
            ));
        out.push_str(&format!(
            "<p style=\"font-size:13px;text-align:center;margin:0;color:{}\">{}</p>",
            BODY, line
        ));
        out.push_str("</section>");
    }

    fn certifications(&self, out: &mut String, data: &ResumeData, theme: &Theme) {
        if data.certifications.is_empty() {
            return;
        }
        out.push_str("<section>");
        self.heading(out, theme, "Certifications");
        for cert in &data.certifications {
            out.push_str("<div style=\"text-align:center;margin-bottom:10px;font-size:13px\">");
            out.push_str(&format!(
                "<span style=\"font-weight:500;color:{}\">{}</span>",
                BODY,
                escape_html(&cert.name)
            ));
            out.push_str(&format!(
                " <span style=\"color:{}\">\u{2014} {}</span>",
                MUTED,
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
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_skills_render_as_inline_list() {
        let body = MinimalTemplate.render_body(&ResumeData::sample(), &Theme::default());
        assert!(body.contains("UI/UX Design"));
        assert!(body.contains("\u{2022}"));
        // Minimal shows skills without fill bars.
        assert!(!body.contains("border-radius:3px"));
    }

    #[test]
    fn test_empty_resume_renders_without_sections() {
        let body = MinimalTemplate.render_body(&ResumeData::empty(), &Theme::default());
        assert!(!body.contains("Experience"));
        assert!(!body.contains("Profile"));
    }
}
