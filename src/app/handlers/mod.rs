//! Feature-Handler für die Command-Verarbeitung.

pub mod drafting;
pub mod editing;
