//! Sorting and Markdown table rendering for index records.

use std::cmp::{Ordering, Reverse};
use std::collections::HashSet;

use crate::record::Record;

const ADR_COLUMNS: &str = "| Número | Título | Estado | Fecha |";
const ADR_SEPARATOR: &str = "|--------|--------|--------|-------|";
const SESSION_COLUMNS: &str = "| Fecha | Sesión | Enfoque Principal |";
const SESSION_SEPARATOR: &str = "|-------|--------|-------------------|";

/// Order ADRs by ordinal ascending. Unnumbered records go last.
pub fn adr_order(a: &Record, b: &Record) -> Ordering {
    (a.ordinal.is_none(), a.ordinal, &a.source_file).cmp(&(
        b.ordinal.is_none(),
        b.ordinal,
        &b.source_file,
    ))
}

/// Order records by date descending. Undated records go last.
pub fn recency_order(a: &Record, b: &Record) -> Ordering {
    (Reverse(a.date), &a.source_file).cmp(&(Reverse(b.date), &b.source_file))
}

/// Drop records whose source file was already seen, keeping the first.
pub fn dedup_by_source(records: Vec<Record>) -> Vec<Record> {
    let mut seen = HashSet::new();
    records
        .into_iter()
        .filter(|r| seen.insert(r.source_file.clone()))
        .collect()
}

/// The `count` most recent records.
pub fn most_recent(records: &[Record], count: usize) -> Vec<Record> {
    let mut sorted = dedup_by_source(records.to_vec());
    sorted.sort_by(recency_order);
    sorted.truncate(count);
    sorted
}

/// Keep at most `width` characters of `text`.
pub fn truncate_chars(text: &str, width: usize) -> &str {
    match text.char_indices().nth(width) {
        Some((idx, _)) => &text[..idx],
        None => text,
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
enum TableKind {
    Adr,
    SessionReport { summary_width: usize },
}

/// Sorted, deduplicated records rendered as a Markdown table.
#[derive(Debug, Clone)]
pub struct IndexTable {
    kind: TableKind,
    heading: String,
    records: Vec<Record>,
}

impl IndexTable {
    /// ADR index, ordered by number.
    pub fn adr(heading: impl Into<String>, records: Vec<Record>) -> Self {
        let mut records = dedup_by_source(records);
        records.sort_by(adr_order);
        Self {
            kind: TableKind::Adr,
            heading: heading.into(),
            records,
        }
    }

    /// Session report index, newest first.
    pub fn session_reports(
        heading: impl Into<String>,
        records: Vec<Record>,
        summary_width: usize,
    ) -> Self {
        let mut records = dedup_by_source(records);
        records.sort_by(recency_order);
        Self {
            kind: TableKind::SessionReport { summary_width },
            heading: heading.into(),
            records,
        }
    }

    pub fn heading(&self) -> &str {
        &self.heading
    }

    pub fn records(&self) -> &[Record] {
        &self.records
    }

    pub fn len(&self) -> usize {
        self.records.len()
    }

    pub fn is_empty(&self) -> bool {
        self.records.is_empty()
    }

    /// Render heading, column header, separator and one row per record.
    /// The result has no trailing newline.
    pub fn render(&self) -> String {
        let mut lines = Vec::with_capacity(self.records.len() + 4);
        lines.push(self.heading.clone());

        match self.kind {
            TableKind::Adr => {
                lines.push(String::new());
                lines.push(ADR_COLUMNS.to_string());
                lines.push(ADR_SEPARATOR.to_string());
                lines.extend(self.records.iter().map(adr_row));
            }
            TableKind::SessionReport { summary_width } => {
                lines.push(SESSION_COLUMNS.to_string());
                lines.push(SESSION_SEPARATOR.to_string());
                lines.extend(self.records.iter().map(|r| session_row(r, summary_width)));
            }
        }

        lines.join("\n")
    }
}

fn adr_row(record: &Record) -> String {
    format!(
        "| [{}](./{}) | {} | {} | {} |",
        record.adr_label(),
        record.source_file,
        record.title,
        record.status_or_summary,
        record.date
    )
}

fn session_row(record: &Record, summary_width: usize) -> String {
    let title: String = record.title.chars().filter(|c| *c != '[' && *c != ']').collect();
    format!(
        "| {} | [{}](./{}) | {}... |",
        record.date,
        title,
        record.source_file,
        truncate_chars(&record.status_or_summary, summary_width)
    )
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::record::RecordDate;
    use proptest::prelude::*;

    fn adr(file: &str, date: &str) -> Record {
        Record::new(file, format!("Title {file}"), "Aceptado", RecordDate::parse(date))
    }

    fn report(file: &str, title: &str, summary: &str) -> Record {
        let date = RecordDate::parse(file.get(..10).unwrap_or(""));
        Record::new(file, title, summary, date)
    }

    #[test]
    fn test_adr_table_mixed_dates() {
        let table = IndexTable::adr(
            "## Índice de ADRs",
            vec![
                Record::new("0003-bar.md", "Bar", "Aceptado", RecordDate::parse("2024-01-01")),
                Record::new("0001-foo.md", "Foo", "Propuesto", RecordDate::Unknown),
            ],
        );

        let expected = "## Índice de ADRs\n\
            \n\
            | Número | Título | Estado | Fecha |\n\
            |--------|--------|--------|-------|\n\
            | [ADR-001](./0001-foo.md) | Foo | Propuesto | Sin fecha |\n\
            | [ADR-003](./0003-bar.md) | Bar | Aceptado | 2024-01-01 |";
        assert_eq!(table.render(), expected);
    }

    #[test]
    fn test_empty_adr_table() {
        let table = IndexTable::adr("## Índice de ADRs", vec![]);
        assert_eq!(
            table.render(),
            "## Índice de ADRs\n\n| Número | Título | Estado | Fecha |\n|--------|--------|--------|-------|"
        );
    }

    #[test]
    fn test_unnumbered_adrs_last() {
        let table = IndexTable::adr(
            "## Índice de ADRs",
            vec![adr("zeta.md", ""), adr("0010-b.md", ""), adr("alpha.md", ""), adr("0002-a.md", "")],
        );
        let files: Vec<_> = table.records().iter().map(|r| r.source_file.as_str()).collect();
        assert_eq!(files, vec!["0002-a.md", "0010-b.md", "alpha.md", "zeta.md"]);
        assert!(table.render().contains("| [Sin número](./alpha.md) |"));
    }

    #[test]
    fn test_duplicates_dropped() {
        let table = IndexTable::adr(
            "## Índice de ADRs",
            vec![adr("0001-a.md", ""), adr("0001-a.md", "2024-01-01")],
        );
        assert_eq!(table.len(), 1);
        assert_eq!(table.records()[0].date, RecordDate::Unknown);
    }

    #[test]
    fn test_session_table() {
        let table = IndexTable::session_reports(
            "## Índice de Reportes",
            vec![
                report("2024-01-10-a.md", "[Sprint 1] Inicio", "Arranque del proyecto"),
                report("notas.md", "notas", "No disponible"),
                report(
                    "2024-03-02-b.md",
                    "Integración",
                    "Se integró el POS con sincronización nocturna y alertas de inventario",
                ),
            ],
            50,
        );

        let expected = "## Índice de Reportes\n\
            | Fecha | Sesión | Enfoque Principal |\n\
            |-------|--------|-------------------|\n\
            | 2024-03-02 | [Integración](./2024-03-02-b.md) | Se integró el POS con sincronización nocturna y al... |\n\
            | 2024-01-10 | [Sprint 1 Inicio](./2024-01-10-a.md) | Arranque del proyecto... |\n\
            | Sin fecha | [notas](./notas.md) | No disponible... |";
        assert_eq!(table.render(), expected);
    }

    #[test]
    fn test_truncate_chars_multibyte() {
        assert_eq!(truncate_chars("áéíóú", 3), "áéí");
        assert_eq!(truncate_chars("abc", 10), "abc");
        assert_eq!(truncate_chars("abc", 0), "");
    }

    #[test]
    fn test_most_recent() {
        let records = vec![
            adr("0001-a.md", "2023-05-01"),
            adr("0002-b.md", ""),
            adr("0003-c.md", "2024-01-01"),
            adr("0004-d.md", "2023-12-31"),
        ];
        let recent = most_recent(&records, 3);
        let files: Vec<_> = recent.iter().map(|r| r.source_file.as_str()).collect();
        assert_eq!(files, vec!["0003-c.md", "0004-d.md", "0001-a.md"]);
    }

    fn arb_file_name() -> impl Strategy<Value = String> {
        prop_oneof![
            (0u32..200).prop_map(|n| format!("{n:04}-adr.md")),
            "[a-z]{1,8}".prop_map(|s| format!("{s}.md")),
        ]
    }

    fn arb_date() -> impl Strategy<Value = RecordDate> {
        prop_oneof![
            Just(RecordDate::Unknown),
            (2000i32..2030, 1u32..13, 1u32..29).prop_map(|(y, m, d)| {
                RecordDate::parse(&format!("{y:04}-{m:02}-{d:02}"))
            }),
        ]
    }

    proptest! {
        #[test]
        fn adr_rows_non_decreasing(names in prop::collection::vec(arb_file_name(), 0..30)) {
            let records = names.iter().map(|n| adr(n, "")).collect();
            let table = IndexTable::adr("## Índice de ADRs", records);

            let ordinals: Vec<_> = table.records().iter().map(|r| r.ordinal).collect();
            let first_unnumbered = ordinals.iter().position(Option::is_none).unwrap_or(ordinals.len());
            prop_assert!(ordinals[first_unnumbered..].iter().all(Option::is_none));
            prop_assert!(ordinals[..first_unnumbered].windows(2).all(|w| w[0] <= w[1]));
        }

        #[test]
        fn session_rows_descending(entries in prop::collection::vec((arb_file_name(), arb_date()), 0..30)) {
            let records = entries
                .iter()
                .map(|(name, date)| Record::new(name.clone(), "t", "s", *date))
                .collect();
            let table = IndexTable::session_reports("## Índice de Reportes", records, 50);

            let dates: Vec<_> = table.records().iter().map(|r| r.date).collect();
            prop_assert!(dates.windows(2).all(|w| w[0] >= w[1]));

            let mut files: Vec<_> = table.records().iter().map(|r| &r.source_file).collect();
            let total = files.len();
            files.sort();
            files.dedup();
            prop_assert_eq!(files.len(), total);
        }
    }
}
