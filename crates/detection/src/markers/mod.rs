//! Per-language marker tables
//!
//! One module per language. Each holds the weighted tables its own
//! resolver scores with, plus a `scan` that other resolvers consult
//! before overriding a guess in that language's favor or against it.

pub mod filipino;
pub mod finnish;
pub mod indonesian;
pub mod italian;
pub mod scandinavian;
pub mod turkish;

pub use filipino::FilipinoSignals;
pub use finnish::FinnishSignals;
pub use indonesian::IndonesianSignals;
pub use scandinavian::ScandinavianMarkers;
pub use turkish::TurkishSignals;
