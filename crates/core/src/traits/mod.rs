//! Collaborator traits for the identification engine
//!
//! The engine owns none of the heavy machinery it depends on. OCR, PDF
//! rendering and the statistical classifier are injected behind these
//! traits, which keeps the engine testable with mocks and lets hosts
//! swap implementations without code changes.
//!
//! ```text
//! TextExtractor:   Image → OCR text + confidence   (async)
//! PageRasterizer:  PDF page → Image                (async)
//! TextClassifier:  Text + whitelist → taxonomy code
//! ```

mod classifier;
mod ocr;
mod rasterizer;

pub use classifier::TextClassifier;
pub use ocr::TextExtractor;
pub use rasterizer::PageRasterizer;
