//! Declarative metadata extraction.
//!
//! An [`Extractor`] is an ordered list of [`FieldRule`]s. Every rule reads
//! either the document text or its file name, keeps the first capture group
//! of the first match and falls back to a fixed value otherwise, so a
//! missing field never fails a run.

use std::collections::BTreeMap;
use std::fmt;

use docsync_common_config::PatternOverrides;
use docsync_common_fs::path;
use regex::Regex;
use tracing::trace;

use crate::error::{DocError, DocResult};
use crate::record::{Record, RecordDate, UNKNOWN_DATE};

/// ADR title: first level-one heading.
pub const ADR_TITLE_PATTERN: &str = r"(?m)^# (.+?)$";
/// ADR status: the line following the status heading.
pub const ADR_STATUS_PATTERN: &str = r"(?i)## Estado\s+([^\n]+)";
/// ADR date: `Fecha: YYYY-MM-DD` anywhere in the text.
pub const ADR_DATE_PATTERN: &str = r"(?i)Fecha: (\d{4}-\d{2}-\d{2})";
/// Session report title.
pub const SESSION_TITLE_PATTERN: &str = r"(?m)^# Reporte de Avance: (.+?)$";
/// Session report summary: text after the executive summary heading.
pub const SESSION_SUMMARY_PATTERN: &str = r"(?i)## Resumen Ejecutivo\s+([^\n#]+)";
/// Session report date, matched against the file name.
pub const SESSION_DATE_PATTERN: &str = r"^(\d{4}-\d{2}-\d{2})";

pub const UNTITLED: &str = "Sin título";
pub const UNKNOWN_STATUS: &str = "Desconocido";
pub const NO_SUMMARY: &str = "No disponible";

/// Metadata fields a rule can fill.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash)]
pub enum Field {
    Title,
    Status,
    Summary,
    Date,
}

impl Field {
    pub fn as_str(&self) -> &'static str {
        match self {
            Self::Title => "title",
            Self::Status => "status",
            Self::Summary => "summary",
            Self::Date => "date",
        }
    }
}

impl fmt::Display for Field {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

/// What a rule's pattern is matched against.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum FieldSource {
    Content,
    FileName,
}

/// Value used when a pattern does not match.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Fallback {
    Text(String),
    /// The file name without its extension.
    FileStem,
}

impl Fallback {
    pub fn text(s: impl Into<String>) -> Self {
        Self::Text(s.into())
    }

    fn resolve(&self, file_name: &str) -> String {
        match self {
            Self::Text(text) => text.clone(),
            Self::FileStem => path::stem(file_name).unwrap_or_else(|| file_name.to_string()),
        }
    }
}

/// One `(field, pattern, source, fallback)` rule.
#[derive(Debug, Clone)]
pub struct FieldRule {
    field: Field,
    pattern: Regex,
    source: FieldSource,
    fallback: Fallback,
}

impl FieldRule {
    /// Compile a rule. The pattern must contain at least one capture group.
    pub fn new(
        field: Field,
        pattern: &str,
        source: FieldSource,
        fallback: Fallback,
    ) -> DocResult<Self> {
        let compiled = Regex::new(pattern).map_err(|source| DocError::InvalidPattern {
            field: field.to_string(),
            source,
        })?;
        if compiled.captures_len() < 2 {
            return Err(DocError::MissingCaptureGroup {
                field: field.to_string(),
                pattern: pattern.to_string(),
            });
        }
        Ok(Self {
            field,
            pattern: compiled,
            source,
            fallback,
        })
    }

    pub fn field(&self) -> Field {
        self.field
    }

    pub fn pattern(&self) -> &str {
        self.pattern.as_str()
    }

    fn capture<'t>(&self, text: &'t str, file_name: &'t str) -> Option<&'t str> {
        let haystack = match self.source {
            FieldSource::Content => text,
            FieldSource::FileName => file_name,
        };
        self.pattern
            .captures(haystack)
            .and_then(|caps| caps.get(1))
            .map(|m| m.as_str().trim())
    }
}

/// Field values extracted from one document.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct ExtractedFields {
    values: BTreeMap<Field, String>,
    date: RecordDate,
}

impl ExtractedFields {
    /// The value of a field, if the extractor has a rule for it.
    pub fn get(&self, field: Field) -> Option<&str> {
        self.values.get(&field).map(String::as_str)
    }

    /// The validated date; `Unknown` when absent or invalid.
    pub fn date(&self) -> RecordDate {
        self.date
    }
}

/// Ordered list of field rules applied uniformly to every document.
#[derive(Debug, Clone, Default)]
pub struct Extractor {
    rules: Vec<FieldRule>,
}

impl Extractor {
    pub fn new(rules: Vec<FieldRule>) -> Self {
        Self { rules }
    }

    /// Rules for architecture decision records.
    pub fn adr(overrides: &PatternOverrides) -> DocResult<Self> {
        Ok(Self::new(vec![
            FieldRule::new(
                Field::Title,
                pattern_or(&overrides.adr_title, ADR_TITLE_PATTERN),
                FieldSource::Content,
                Fallback::text(UNTITLED),
            )?,
            FieldRule::new(
                Field::Status,
                pattern_or(&overrides.adr_status, ADR_STATUS_PATTERN),
                FieldSource::Content,
                Fallback::text(UNKNOWN_STATUS),
            )?,
            FieldRule::new(
                Field::Date,
                pattern_or(&overrides.adr_date, ADR_DATE_PATTERN),
                FieldSource::Content,
                Fallback::text(UNKNOWN_DATE),
            )?,
        ]))
    }

    /// Rules for session reports. The date comes from the file name.
    pub fn session_report(overrides: &PatternOverrides) -> DocResult<Self> {
        Ok(Self::new(vec![
            FieldRule::new(
                Field::Title,
                pattern_or(&overrides.session_title, SESSION_TITLE_PATTERN),
                FieldSource::Content,
                Fallback::FileStem,
            )?,
            FieldRule::new(
                Field::Summary,
                pattern_or(&overrides.session_summary, SESSION_SUMMARY_PATTERN),
                FieldSource::Content,
                Fallback::text(NO_SUMMARY),
            )?,
            FieldRule::new(
                Field::Date,
                pattern_or(&overrides.session_date, SESSION_DATE_PATTERN),
                FieldSource::FileName,
                Fallback::text(UNKNOWN_DATE),
            )?,
        ]))
    }

    pub fn rules(&self) -> &[FieldRule] {
        &self.rules
    }

    /// Apply every rule in order. Each field with a rule gets a value.
    pub fn extract(&self, text: &str, file_name: &str) -> ExtractedFields {
        let mut fields = ExtractedFields::default();

        for rule in &self.rules {
            let captured = rule.capture(text, file_name);
            let value = match (rule.field, captured) {
                (Field::Date, Some(raw)) => match RecordDate::parse(raw) {
                    RecordDate::Known(date) => {
                        fields.date = RecordDate::Known(date);
                        Some(raw.to_string())
                    }
                    RecordDate::Unknown => None,
                },
                (_, Some(raw)) => Some(raw.to_string()),
                (_, None) => None,
            };

            let value = value.unwrap_or_else(|| {
                trace!(file = %file_name, field = %rule.field, "using fallback");
                rule.fallback.resolve(file_name)
            });
            fields.values.insert(rule.field, value);
        }

        fields
    }

    /// Extract a [`Record`]. Status and summary share one column.
    pub fn record(&self, text: &str, file_name: &str) -> Record {
        let fields = self.extract(text, file_name);
        let title = fields.get(Field::Title).unwrap_or(UNTITLED);
        let detail = fields
            .get(Field::Status)
            .or_else(|| fields.get(Field::Summary))
            .unwrap_or_default();
        Record::new(file_name, title, detail, fields.date())
    }
}

fn pattern_or<'a>(custom: &'a Option<String>, default: &'a str) -> &'a str {
    custom.as_deref().unwrap_or(default)
}

#[cfg(test)]
mod tests {
    use super::*;
    use test_case::test_case;

    fn adr() -> Extractor {
        Extractor::adr(&PatternOverrides::default()).unwrap()
    }

    fn session() -> Extractor {
        Extractor::session_report(&PatternOverrides::default()).unwrap()
    }

    const FULL_ADR: &str = "# Usar Firestore\n\nFecha: 2024-02-10\n\n## Estado\n\nAceptado\n\n## Contexto\n...";

    #[test_case(Field::Title, "Usar Firestore")]
    #[test_case(Field::Status, "Aceptado")]
    #[test_case(Field::Date, "2024-02-10")]
    fn test_adr_fields(field: Field, expected: &str) {
        let fields = adr().extract(FULL_ADR, "0002-firestore.md");
        assert_eq!(fields.get(field), Some(expected));
    }

    #[test_case(Field::Title, "Sin título")]
    #[test_case(Field::Status, "Desconocido")]
    #[test_case(Field::Date, "Sin fecha")]
    fn test_adr_fallbacks(field: Field, expected: &str) {
        let fields = adr().extract("just some prose\n", "0001-foo.md");
        assert_eq!(fields.get(field), Some(expected));
        assert_eq!(fields.date(), RecordDate::Unknown);
    }

    #[test]
    fn test_invalid_date_falls_back() {
        let fields = adr().extract("# T\nFecha: 2024-13-45\n", "0001-t.md");
        assert_eq!(fields.get(Field::Date), Some("Sin fecha"));
        assert_eq!(fields.date(), RecordDate::Unknown);
    }

    #[test]
    fn test_status_is_case_insensitive() {
        let fields = adr().extract("# T\n## ESTADO\n  Propuesto  \n", "0001-t.md");
        assert_eq!(fields.get(Field::Status), Some("Propuesto"));
    }

    #[test]
    fn test_title_requires_line_start() {
        let fields = adr().extract("intro # not a title\n## Sub\n", "x.md");
        assert_eq!(fields.get(Field::Title), Some("Sin título"));
    }

    #[test]
    fn test_session_fields() {
        let text = "# Reporte de Avance: [Sprint 4] Login\n\n## Resumen Ejecutivo\n\n  Se completó el login.\n\n## Detalles\n";
        let fields = session().extract(text, "2024-03-05-login.md");

        assert_eq!(fields.get(Field::Title), Some("[Sprint 4] Login"));
        assert_eq!(fields.get(Field::Summary), Some("Se completó el login."));
        assert_eq!(fields.get(Field::Date), Some("2024-03-05"));
        assert_eq!(fields.get(Field::Status), None);
        assert!(fields.date().is_known());
    }

    #[test]
    fn test_session_fallbacks() {
        let fields = session().extract("nothing here", "notas-sueltas.md");

        assert_eq!(fields.get(Field::Title), Some("notas-sueltas"));
        assert_eq!(fields.get(Field::Summary), Some("No disponible"));
        assert_eq!(fields.get(Field::Date), Some("Sin fecha"));
    }

    #[test]
    fn test_summary_stops_at_heading_marker() {
        let fields = session().extract("## Resumen Ejecutivo\nTexto # resto", "2024-01-01.md");
        assert_eq!(fields.get(Field::Summary), Some("Texto"));
    }

    #[test]
    fn test_record_from_adr() {
        let record = adr().record(FULL_ADR, "0002-firestore.md");

        assert_eq!(record.title, "Usar Firestore");
        assert_eq!(record.status_or_summary, "Aceptado");
        assert_eq!(record.ordinal, Some(2));
        assert_eq!(record.source_file, "0002-firestore.md");
    }

    #[test]
    fn test_override_pattern() {
        let overrides = PatternOverrides {
            adr_status: Some(r"(?m)^Status: (\w+)".to_string()),
            ..Default::default()
        };
        let extractor = Extractor::adr(&overrides).unwrap();
        let fields = extractor.extract("# T\nStatus: Accepted\n", "0001-t.md");
        assert_eq!(fields.get(Field::Status), Some("Accepted"));
    }

    #[test]
    fn test_invalid_override_is_config_error() {
        let overrides = PatternOverrides {
            adr_title: Some("(unclosed".to_string()),
            ..Default::default()
        };
        let err = Extractor::adr(&overrides).unwrap_err();
        assert!(matches!(err, DocError::InvalidPattern { .. }));
        assert!(err.is_config());
    }

    #[test]
    fn test_pattern_without_group_is_rejected() {
        let err = FieldRule::new(
            Field::Title,
            "^# .+$",
            FieldSource::Content,
            Fallback::text(UNTITLED),
        )
        .unwrap_err();
        assert!(matches!(err, DocError::MissingCaptureGroup { .. }));
    }
}
