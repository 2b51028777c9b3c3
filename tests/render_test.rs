//! Integration tests for the rendering module.

use cvforge::model::{Language, Proficiency, ResumeData, Skill};
use cvforge::render::{
    format_date, format_range, to_html, AccentColor, RenderOptions, TemplateId,
};

fn all_templates() -> [TemplateId; 5] {
    [
        TemplateId::Professional,
        TemplateId::Creative,
        TemplateId::Minimal,
        TemplateId::Modern,
        TemplateId::Sidebar,
    ]
}

fn fragment(template: TemplateId, accent: AccentColor, data: &ResumeData) -> String {
    let options = RenderOptions::new()
        .with_template(template)
        .with_accent(accent)
        .fragment();
    to_html(data, &options).unwrap()
}

#[test]
fn test_every_template_renders_sample_content() {
    let data = ResumeData::sample();
    for template in all_templates() {
        let html = fragment(template, AccentColor::Blue, &data);
        assert!(
            html.contains("John Appleseed"),
            "{:?} lost the name",
            template
        );
        assert!(
            html.contains("Apple Inc."),
            "{:?} lost the experience",
            template
        );
        assert!(html.contains("Figma"), "{:?} lost the skills", template);
    }
}

#[test]
fn test_empty_resume_renders_no_section_content() {
    let data = ResumeData::empty();
    for template in all_templates() {
        let html = fragment(template, AccentColor::Blue, &data);
        for heading in [
            "Experience",
            "Education",
            "Skills",
            "Languages",
            "Certifications",
            "Summary",
            "About Me",
            "Profile",
        ] {
            assert!(
                !html.contains(heading),
                "{:?} rendered '{}' for an empty resume",
                template,
                heading
            );
        }
    }
}

#[test]
fn test_accent_color_reaches_every_template() {
    let data = ResumeData::sample();
    for template in all_templates() {
        let html = fragment(template, AccentColor::Teal, &data);
        assert!(
            html.contains("#14B8A6"),
            "{:?} did not use the teal accent",
            template
        );
        assert!(
            !html.contains("#0071E3"),
            "{:?} leaked the default blue accent",
            template
        );
    }
}

#[test]
fn test_current_position_shows_present_everywhere() {
    let data = ResumeData::sample();
    for template in all_templates() {
        let html = fragment(template, AccentColor::Blue, &data);
        assert!(
            html.contains("Mar 2020 - Present"),
            "{:?} did not show the open-ended range",
            template
        );
    }
}

#[test]
fn test_out_of_range_skill_level_renders() {
    let mut data = ResumeData::empty();
    data.skills.push(Skill {
        id: "skill-test".to_string(),
        name: "Juggling".to_string(),
        level: 9,
    });

    // Level is clamped for display; nothing panics and no bar exceeds 100%.
    for template in all_templates() {
        let html = fragment(template, AccentColor::Blue, &data);
        assert!(html.contains("Juggling"), "{:?} lost the skill", template);
        assert!(!html.contains("180%"), "{:?} overflowed the bar", template);
    }
}

#[test]
fn test_markup_in_fields_is_escaped() {
    let mut data = ResumeData::empty();
    data.personal.full_name = "<script>alert(1)</script>".to_string();
    data.languages.push(Language {
        id: "lang-test".to_string(),
        name: "R&D <jargon>".to_string(),
        proficiency: Proficiency::Fluent,
    });

    for template in all_templates() {
        let html = fragment(template, AccentColor::Blue, &data);
        assert!(
            !html.contains("<script>"),
            "{:?} did not escape the name",
            template
        );
        assert!(html.contains("&lt;script&gt;"));
    }
}

#[test]
fn test_standalone_document_shell() {
    let data = ResumeData::sample();
    let html = to_html(&data, &RenderOptions::default()).unwrap();

    assert!(html.starts_with("<!DOCTYPE html>"));
    assert!(html.contains("<title>John Appleseed - Resume</title>"));
    assert!(html.ends_with("</html>"));
}

#[test]
fn test_date_formatting_fixed_points() {
    assert_eq!(format_date("2020-03"), "Mar 2020");
    assert_eq!(format_date("2019-12"), "Dec 2019");
    assert_eq!(format_date("2020/03/15"), "Mar 2020");
    assert_eq!(format_date(""), "");
    assert_eq!(format_date("March 2020"), "March 2020");
    assert_eq!(format_date("2020-13"), "2020-13");
}

#[test]
fn test_date_range_fixed_points() {
    assert_eq!(format_range("2020-03", "", true), "Mar 2020 - Present");
    assert_eq!(format_range("2016-06", "2020-02", false), "Jun 2016 - Feb 2020");
    assert_eq!(format_range("", "", false), " - ");
}

#[test]
fn test_unknown_selections_fall_back_to_defaults() {
    assert_eq!(TemplateId::parse("holographic"), TemplateId::Professional);
    assert_eq!(TemplateId::parse("creative"), TemplateId::Creative);
    assert_eq!(AccentColor::parse("mauve"), AccentColor::Blue);
    assert_eq!(AccentColor::parse("green"), AccentColor::Green);
}

#[test]
fn test_color_table() {
    let expected = [
        (AccentColor::Blue, "#0071E3"),
        (AccentColor::Teal, "#14B8A6"),
        (AccentColor::Orange, "#F97316"),
        (AccentColor::Purple, "#8B5CF6"),
        (AccentColor::Red, "#EF4444"),
        (AccentColor::Green, "#22C55E"),
    ];
    for (color, hex) in expected {
        assert_eq!(color.hex(), hex);
    }
}
