//! Shared HTML building blocks for the templates.

use crate::edit::clamp_level;
use crate::model::PersonalInfo;

/// Escape text for placement inside HTML element content or attributes.
pub fn escape_html(text: &str) -> String {
    let mut result = String::with_capacity(text.len());
    for c in text.chars() {
        match c {
            '&' => result.push_str("&amp;"),
            '<' => result.push_str("&lt;"),
            '>' => result.push_str("&gt;"),
            '"' => result.push_str("&quot;"),
            '\'' => result.push_str("&#39;"),
            _ => result.push(c),
        }
    }
    result
}

/// Initials badge text, one letter per name part.
pub fn initials(full_name: &str) -> String {
    full_name
        .split_whitespace()
        .filter_map(|part| part.chars().next())
        .collect()
}

/// Skill fill fraction as a percentage, with the level clamped into 1-5.
///
/// Out-of-range levels are a stored-data hazard, not an error; they clamp
/// rather than panic.
pub fn skill_percent(level: u8) -> u8 {
    clamp_level(level) * 20
}

/// The non-empty contact fields, in display order.
pub fn contact_fields(personal: &PersonalInfo) -> Vec<(&'static str, &str)> {
    let mut fields = Vec::new();
    if !personal.email.is_empty() {
        fields.push(("Email", personal.email.as_str()));
    }
    if !personal.phone.is_empty() {
        fields.push(("Phone", personal.phone.as_str()));
    }
    if !personal.location.is_empty() {
        fields.push(("Location", personal.location.as_str()));
    }
    if let Some(website) = personal.website.as_deref() {
        if !website.is_empty() {
            fields.push(("Website", website));
        }
    }
    fields
}

/// A horizontal progress bar, the shared shape of skill and language fills.
pub fn fill_bar(out: &mut String, percent: u8, fill: &str, track: &str) {
    out.push_str(&format!(
        "<div style=\"width:100%;height:6px;border-radius:3px;overflow:hidden;background:{}\">\
         <div style=\"height:100%;border-radius:3px;width:{}%;background:{}\"></div></div>",
        track, percent, fill
    ));
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_escape_html() {
        assert_eq!(escape_html("R&D <lead>"), "R&amp;D &lt;lead&gt;");
        assert_eq!(escape_html("\"quoted\""), "&quot;quoted&quot;");
    }

    #[test]
    fn test_initials() {
        assert_eq!(initials("John Appleseed"), "JA");
        assert_eq!(initials("Jane Q. Public"), "JQP");
        assert_eq!(initials(""), "");
    }

    #[test]
    fn test_skill_percent_clamps() {
        assert_eq!(skill_percent(1), 20);
        assert_eq!(skill_percent(5), 100);
        assert_eq!(skill_percent(0), 20);
        assert_eq!(skill_percent(200), 100);
    }

    #[test]
    fn test_contact_fields_skip_empty() {
        let personal = PersonalInfo {
            email: "a@b.c".to_string(),
            website: Some(String::new()),
            ..Default::default()
        };
        let fields = contact_fields(&personal);
        assert_eq!(fields, vec![("Email", "a@b.c")]);
    }
}
