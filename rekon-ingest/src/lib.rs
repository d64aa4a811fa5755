//! rekon-ingest: VA-BCA report text classification and batch accumulation.

pub mod batch;
pub mod parsers;

pub use batch::BatchConverter;
pub use parsers::va_bca::{LineKind, VaBcaParser, parse_va_bca_text};
