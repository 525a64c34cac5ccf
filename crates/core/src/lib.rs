//! Core types and traits for OCR language identification
//!
//! This crate provides the foundational types shared by the other crates:
//! - The closed language registry and candidate sets
//! - Script (writing system) classification
//! - Value types exchanged with collaborators
//! - Collaborator traits (OCR, classifier, PDF rasterizer)
//! - Error types

pub mod error;
pub mod language;
pub mod script;
pub mod traits;
pub mod types;

pub use error::{Error, Result};
pub use language::{list_supported_languages, CandidateSet, Language, SupportedLanguage};
pub use script::Script;
pub use types::{DetectedLanguage, ImageData, OcrOutput, PdfDocument, RawDetectionResult, Recognition};

pub use traits::{PageRasterizer, TextClassifier, TextExtractor};
