//! Professional template: clean single-column layout with bordered section
//! headings, two-column skill bars, and languages beside certifications.

use super::html::{contact_fields, escape_html, fill_bar, skill_percent};
use super::{dates, Template, TemplateId, Theme};
use crate::model::ResumeData;

pub struct ProfessionalTemplate;

const TEXT: &str = "#1D1D1F";
const BODY: &str = "#494949";
const MUTED: &str = "#86868B";
const TRACK: &str = "#E5E7EB";

impl Template for ProfessionalTemplate {
    fn id(&self) -> TemplateId {
        TemplateId::Professional
    }

    fn render_body(&self, data: &ResumeData, theme: &Theme) -> String {
        let mut out = String::new();
        out.push_str(&format!(
            "<div style=\"padding:32px;max-width:56rem;margin:0 auto;color:{}\">",
            TEXT
        ));

        self.header(&mut out, data, theme);
        self.summary(&mut out, data, theme);
        self.experience(&mut out, data, theme);
        self.education(&mut out, data, theme);
        self.skills(&mut out, data, theme);

        if !data.languages.is_empty() || !data.certifications.is_empty() {
            out.push_str("<div style=\"display:flex;gap:32px\">");
            self.languages(&mut out, data, theme);
            self.certifications(&mut out, data, theme);
            out.push_str("</div>");
        }

        out.push_str("</div>");
        out
    }
}

impl ProfessionalTemplate {
    fn heading(&self, out: &mut String, theme: &Theme, text: &str) {
        out.push_str(&format!(
            "<h2 style=\"font-size:18px;font-weight:600;margin:0 0 12px;\
             padding-bottom:4px;border-bottom:1px solid {};color:{}\">{}</h2>",
            theme.soft(),
            TEXT,
            text
        ));
    }

    fn header(&self, out: &mut String, data: &ResumeData, theme: &Theme) {
        out.push_str("<header style=\"margin-bottom:32px\">");
        out.push_str(&format!(
            "<h1 style=\"font-size:32px;font-weight:700;margin:0 0 8px\">{}</h1>",
            escape_html(&data.personal.full_name)
        ));
        if !data.personal.title.is_empty() {
            out.push_str(&format!(
                "<p style=\"font-size:18px;font-weight:500;margin:0 0 12px;color:{}\">{}</p>",
                theme.hex(),
                escape_html(&data.personal.title)
            ));
        }

        let contacts = contact_fields(&data.personal);
        if !contacts.is_empty() {
            out.push_str(&format!(
                "<div style=\"font-size:13px;color:{};display:flex;flex-wrap:wrap;gap:16px\">",
                MUTED
            ));
            for (_, value) in contacts {
                out.push_str(&format!("<span>{}</span>", escape_html(value)));
            }
            out.push_str("</div>");
        }
        out.push_str("</header>");
    }

    fn summary(&self, out: &mut String, data: &ResumeData, theme: &Theme) {
        if !data.has_summary() {
            return;
        }
        out.push_str("<section style=\"margin-bottom:32px\">");
        self.heading(out, theme, "Summary");
        out.push_str(&format!(
            "<p style=\"font-size:13px;line-height:1.6;margin:0;color:{}\">{}</p>",
            BODY,
            escape_html(&data.personal.summary)
        ));
        out.push_str("</section>");
    }

    fn experience(&self, out: &mut String, data: &ResumeData, theme: &Theme) {
        if data.work_experience.is_empty() {
            return;
        }
        out.push_str("<section style=\"margin-bottom:32px\">");
        self.heading(out, theme, "Work Experience");
        for work in &data.work_experience {
            out.push_str("<div style=\"margin-bottom:18px\">");
            out.push_str("<div style=\"display:flex;justify-content:space-between;margin-bottom:6px\">");
            out.push_str(&format!(
                "<div><h3 style=\"font-size:15px;font-weight:500;margin:0\">{}</h3>\
                 <p style=\"font-size:13px;margin:2px 0 0;color:{}\">{}</p></div>",
                escape_html(&work.position),
                theme.hex(),
                escape_html(&work.company)
            ));
            out.push_str(&format!(
                "<div style=\"font-size:12px;text-align:right;color:{}\"><div>{}</div><div>{}</div></div>",
                MUTED,
                escape_html(&work.location),
                dates::format_range(&work.start_date, &work.end_date, work.current)
            ));
            out.push_str("</div>");
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

    fn education(&self, out: &mut String, data: &ResumeData, theme: &Theme) {
        if data.education.is_empty() {
            return;
        }
        out.push_str("<section style=\"margin-bottom:32px\">");
        self.heading(out, theme, "Education");
        for edu in &data.education {
            out.push_str("<div style=\"margin-bottom:18px\">");
            out.push_str("<div style=\"display:flex;justify-content:space-between;margin-bottom:6px\">");
            out.push_str(&format!(
                "<div><h3 style=\"font-size:15px;font-weight:500;margin:0\">{} in {}</h3>\
                 <p style=\"font-size:13px;margin:2px 0 0;color:{}\">{}</p></div>",
                escape_html(&edu.degree),
                escape_html(&edu.field),
                theme.hex(),
                escape_html(&edu.institution)
            ));
            out.push_str(&format!(
                "<div style=\"font-size:12px;text-align:right;color:{}\"><div>{}</div><div>{}</div></div>",
                MUTED,
                escape_html(&edu.location),
                dates::format_range(&edu.start_date, &edu.end_date, false)
            ));
            out.push_str("</div>");
            if !edu.description.is_empty() {
                out.push_str(&format!(
                    "<p style=\"font-size:12px;line-height:1.6;margin:6px 0 0;color:{}\">{}</p>",
                    BODY,
                    escape_html(&edu.description)
                ));
            }
            out.push_str("</div>");
        }
        out.push_str("</section>");
    }

    fn skills(&self, out: &mut String, data: &ResumeData, theme: &Theme) {
        if data.skills.is_empty() {
            return;
        }
        out.push_str("<section style=\"margin-bottom:32px\">");
        self.heading(out, theme, "Skills");
        out.push_str("<div style=\"display:grid;grid-template-columns:1fr 1fr;gap:12px\">");
        for skill in &data.skills {
            out.push_str("<div style=\"display:flex;align-items:center;gap:8px\">");
            out.push_str(&format!(
                "<span style=\"font-size:13px;white-space:nowrap;color:{}\">{}</span>",
                BODY,
                escape_html(&skill.name)
            ));
            fill_bar(out, skill_percent(skill.level), theme.hex(), TRACK);
            out.push_str("</div>");
        }
        out.push_str("</div></section>");
    }

    fn languages(&self, out: &mut String, data: &ResumeData, theme: &Theme) {
        if data.languages.is_empty() {
            return;
        }
        out.push_str("<section style=\"flex:1;margin-bottom:24px\">");
        self.heading(out, theme, "Languages");
        for language in &data.languages {
            out.push_str("<div style=\"margin-bottom:8px;font-size:13px\">");
            out.push_str(&format!(
                "<div style=\"display:flex;justify-content:space-between;margin-bottom:4px\">\
                 <span style=\"font-weight:500;color:{}\">{}</span>\
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

    fn certifications(&self, out: &mut String, data: &ResumeData, theme: &Theme) {
        if data.certifications.is_empty() {
            return;
        }
        out.push_str("<section style=\"flex:1;margin-bottom:24px\">");
        self.heading(out, theme, "Certifications");
        for cert in &data.certifications {
            out.push_str("<div style=\"margin-bottom:12px;font-size:13px\">");
            out.push_str(&format!(
                "<div style=\"font-weight:500;color:{}\">{}</div>",
                BODY,
                escape_html(&cert.name)
            ));
            out.push_str(&format!(
                "<div style=\"font-size:12px;color:{}\">{}</div>",
                theme.hex(),
                escape_html(&cert.organization)
            ));
            let mut line = dates::format_date(&cert.date);
            if let Some(id) = cert.credential_id.as_deref() {
                if !id.is_empty() {
                    if !line.is_empty() {
                        line.push_str(" \u{2022} ");
                    }
                    line.push_str("ID: ");
                    line.push_str(id);
                }
            }
            if !line.is_empty() {
                out.push_str(&format!(
                    "<div style=\"font-size:12px;color:{}\">{}</div>",
                    MUTED,
                    escape_html(&line)
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
    fn test_empty_sections_render_no_headings() {
        let body = ProfessionalTemplate.render_body(&ResumeData::empty(), &Theme::default());
        assert!(!body.contains("Work Experience"));
        assert!(!body.contains("Summary"));
        assert!(!body.contains("Skills"));
        assert!(!body.contains("Languages"));
    }

    #[test]
    fn test_sample_renders_all_sections() {
        let body = ProfessionalTemplate.render_body(&ResumeData::sample(), &Theme::default());
        for heading in ["Summary", "Work Experience", "Education", "Skills", "Languages", "Certifications"] {
            assert!(body.contains(heading), "missing heading: {}", heading);
        }
        assert!(body.contains("Mar 2020 - Present"));
        assert!(body.contains("ID: UX-2019-06542"));
    }
}
