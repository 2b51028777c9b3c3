//! JSON rendering of resume data.
//!
//! Produces the same layout the persistence adapter stores, so output from
//! here can be loaded back as a profile.

use crate::error::{Error, Result};
use crate::model::ResumeData;

/// JSON output format.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum JsonFormat {
    /// Pretty-printed JSON with indentation
    #[default]
    Pretty,
    /// Compact JSON without extra whitespace
    Compact,
}

/// Convert a resume to JSON.
pub fn to_json(data: &ResumeData, format: JsonFormat) -> Result<String> {
    let result = match format {
        JsonFormat::Pretty => serde_json::to_string_pretty(data),
        JsonFormat::Compact => serde_json::to_string(data),
    };

    result.map_err(|e| Error::Render(format!("JSON serialization error: {}", e)))
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_to_json_pretty() {
        let data = ResumeData::sample();
        let json = to_json(&data, JsonFormat::Pretty).unwrap();
        assert!(json.contains("\"fullName\""));
        assert!(json.contains("John Appleseed"));
        assert!(json.contains('\n'));
    }

    #[test]
    fn test_to_json_compact() {
        let data = ResumeData::empty();
        let json = to_json(&data, JsonFormat::Compact).unwrap();
        assert!(!json.contains('\n'));
    }

    #[test]
    fn test_json_round_trip() {
        let data = ResumeData::sample();
        let json = to_json(&data, JsonFormat::Compact).unwrap();
        let back: ResumeData = serde_json::from_str(&json).unwrap();
        assert_eq!(back, data);
    }
}
