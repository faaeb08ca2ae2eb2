//! Markdown index and report generation.
//!
//! The pipeline has four stages run in sequence by each job:
//!
//! 1. [`scanner`] lists eligible files and counts files by extension.
//! 2. [`extract`] applies declarative field rules to each document.
//! 3. [`record`] and [`table`] order records and render index tables.
//! 4. [`splice`] and [`report`] write results, either by replacing a
//!    table region inside an existing file or by overwriting a whole
//!    document.
//!
//! [`Pipeline`] ties the stages to a project root and configuration and
//! exposes one method per job.

pub mod error;
pub mod extract;
pub mod indexes;
pub mod pipeline;
pub mod readme;
pub mod record;
pub mod report;
pub mod scanner;
pub mod splice;
pub mod status;
pub mod table;

pub use error::{DocError, DocResult};
pub use extract::{ExtractedFields, Extractor, Fallback, Field, FieldRule, FieldSource};
pub use indexes::IndexUpdate;
pub use pipeline::{load_records, Pipeline, ProjectPaths};
pub use record::{parse_ordinal, Record, RecordDate};
pub use report::{write_document, ReportDocument, Section};
pub use scanner::{count_files_by_extension, scan_dir, DirScan, ExtensionCounts, ScanRules};
pub use splice::{refresh_index, splice_table, IndexRefresh, SpliceOutcome, TableAnchor};
pub use table::IndexTable;
