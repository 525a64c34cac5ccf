//! Language identification for OCR text
//!
//! Three stages, from cheap to precise:
//! - Script heuristic for text too short to classify
//! - Statistical classification restricted to the request's candidates
//! - Confusion resolvers for language groups the classifier mixes up
//!
//! [`LanguageIdentifier`] wires the stages together behind an injected OCR
//! engine.

pub mod identifier;
pub mod markers;
pub mod resolvers;
pub mod signals;
pub mod statistical;

pub use identifier::LanguageIdentifier;
pub use resolvers::{
    ConfusionResolver, FinnishResolver, IndonesianResolver, ResolverCascade, ResolverKind,
    ScandinavianResolver, TurkishResolver, RESOLVER_ORDER,
};
pub use signals::{ConfusionScore, FrequencyBonus, LetterFrequency, Signal, SignalTable};
pub use statistical::{StatisticalClassifier, WhatlangClassifier};
