//! PDF page rasterization trait

use async_trait::async_trait;

use crate::{ImageData, PdfDocument, Result};

/// Renders PDF pages to images the OCR engine can read
#[async_trait]
pub trait PageRasterizer: Send + Sync + 'static {
    /// Number of pages in the document
    ///
    /// Fails with [`Error::InvalidPdf`](crate::Error::InvalidPdf) when the
    /// bytes are not a readable PDF.
    async fn page_count(&self, pdf: &PdfDocument) -> Result<usize>;

    /// Render one page (1-based) at `scale` times its natural size
    async fn rasterize_page(&self, pdf: &PdfDocument, page: usize, scale: f32) -> Result<ImageData>;
}
