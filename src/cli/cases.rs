//! Case files: batches of sample values checked by eye.
//!
//! A case file is a JSON object keyed by field type:
//!
//! ```json
//! {
//!   "PercentData": { "format": "0.0", "val": 0.256 },
//!   "GummeiData": { "val": "53941132997642" },
//!   "EnumData": { "val": 2, "enum": { "2": { "name": "Detach" } } }
//! }
//! ```
//!
//! Each entry renders as one `"<type> format:<spec> val:<raw> res:<formatted>"`
//! line.

use std::collections::BTreeMap;
use std::path::Path;

use crate::enumeration::EnumDefinition;
use crate::error::Result;
use crate::formatter::Formatter;
use crate::value::RawValue;

use super::args::read_json;

/// One sample value and its column settings.
#[derive(Debug, Clone, Default, PartialEq, serde::Deserialize)]
#[serde(default, deny_unknown_fields)]
pub struct Case {
    /// Format pattern.
    pub format: String,
    /// Raw value.
    pub val: RawValue,
    /// Enum definition for enum-typed fields.
    #[serde(rename = "enum")]
    pub enum_def: Option<EnumDefinition>,
}

/// Cases keyed by field type, in key order.
pub type CaseFile = BTreeMap<String, Case>;

/// Load a case file.
pub fn load_cases(path: &Path) -> Result<CaseFile> {
    read_json(path)
}

/// Render one case line.
pub fn render_case(formatter: &Formatter, field_type: &str, case: &Case) -> String {
    let result = formatter.format(field_type, &case.val, &case.format, case.enum_def.as_ref());
    format!(
        "{} format:{} val:{} res:{}",
        field_type, case.format, case.val, result
    )
}

/// Render every case of a file, one line each.
pub fn render_cases(formatter: &Formatter, cases: &CaseFile) -> Vec<String> {
    cases
        .iter()
        .map(|(field_type, case)| render_case(formatter, field_type, case))
        .collect()
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::error::Error;

    fn parse_cases(text: &str) -> Result<CaseFile> {
        serde_json::from_str(text).map_err(|e| Error::Input(e.to_string().into()).boxed())
    }

    const SAMPLE: &str = r#"{
        "PercentData": { "format": "0.0", "val": 0.256 },
        "GummeiData": { "val": "53941132997642" },
        "EndLatitudeData": { "format": "0.0", "val": [45.51, -73.56] },
        "EnumData": { "val": 2, "enum": { "2": { "name": "Detach" } } },
        "MillisecondDurationData": { "val": null }
    }"#;

    #[test]
    fn test_render_sample_file() {
        let cases = parse_cases(SAMPLE).unwrap();
        let lines = render_cases(&Formatter::default(), &cases);
        assert_eq!(
            lines,
            vec![
                "EndLatitudeData format:0.0 val:45.51,-73.56 res:-73.6,45.5",
                "EnumData format: val:2 res:Detach",
                "GummeiData format: val:53941132997642 res:310.26.4660.010",
                "MillisecondDurationData format: val:N/A res:N/A",
                "PercentData format:0.0 val:0.256 res:25.6%",
            ]
        );
    }

    #[test]
    fn test_unknown_case_field_rejected() {
        let err = parse_cases(r#"{"FloatData": {"value": 1}}"#).unwrap_err();
        assert!(matches!(*err, Error::Input(_)));
    }

    #[test]
    fn test_cases_must_be_object() {
        assert!(parse_cases("[1, 2]").is_err());
    }
}
