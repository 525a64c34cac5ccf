//! Confusion resolvers
//!
//! The statistical classifier regularly mixes up certain language groups:
//! Danish/Swedish/Norwegian among themselves, and Finnish with Turkish,
//! Indonesian, Filipino and Italian. Each resolver re-scores one such group
//! with hand-tuned marker tables and may override the provisional answer.
//!
//! Resolvers never fail. When not triggered, or when the evidence is not
//! strong enough, they hand back the provisional language unchanged.
//!
//! ```text
//! provisional ─► Scandinavian ─► Indonesian ─► Finnish ─► Turkish ─► final
//! ```

mod finnish;
mod indonesian;
mod scandinavian;
mod turkish;

pub use finnish::FinnishResolver;
pub use indonesian::IndonesianResolver;
pub use scandinavian::ScandinavianResolver;
pub use turkish::TurkishResolver;

use ocrlang_config::ResolverConfig;
use ocrlang_core::{CandidateSet, Language};

/// Resolver identity, used for ordering, configuration and logs
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum ResolverKind {
    Scandinavian,
    Indonesian,
    Finnish,
    Turkish,
}

impl ResolverKind {
    pub fn name(&self) -> &'static str {
        match self {
            Self::Scandinavian => "scandinavian",
            Self::Indonesian => "indonesian",
            Self::Finnish => "finnish",
            Self::Turkish => "turkish",
        }
    }
}

impl std::fmt::Display for ResolverKind {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.write_str(self.name())
    }
}

/// Order the cascade runs resolvers in
///
/// Indonesian runs before Finnish so that a confident Indonesian answer is
/// settled before the Finnish resolver gets a chance to claim the text.
pub const RESOLVER_ORDER: [ResolverKind; 4] = [
    ResolverKind::Scandinavian,
    ResolverKind::Indonesian,
    ResolverKind::Finnish,
    ResolverKind::Turkish,
];

/// Re-scores a provisional answer for one group of confusable languages
pub trait ConfusionResolver: Send + Sync {
    fn kind(&self) -> ResolverKind;

    /// Return the resolved language
    ///
    /// `text` must be normalized and lowercased. The result is either
    /// `provisional` or a member of `candidates`.
    fn resolve(&self, text: &str, provisional: Language, candidates: &CandidateSet) -> Language;
}

/// Runs the enabled resolvers in [`RESOLVER_ORDER`]
pub struct ResolverCascade {
    resolvers: Vec<Box<dyn ConfusionResolver>>,
}

impl ResolverCascade {
    pub fn new(config: &ResolverConfig) -> Self {
        let resolvers = RESOLVER_ORDER
            .iter()
            .filter_map(|kind| -> Option<Box<dyn ConfusionResolver>> {
                match kind {
                    ResolverKind::Scandinavian if config.scandinavian => Some(Box::new(
                        ScandinavianResolver::new(
                            config.scandinavian_min_score,
                            config.scandinavian_min_margin,
                        ),
                    )),
                    ResolverKind::Indonesian if config.indonesian => {
                        Some(Box::new(IndonesianResolver))
                    }
                    ResolverKind::Finnish if config.finnish => Some(Box::new(FinnishResolver)),
                    ResolverKind::Turkish if config.turkish => Some(Box::new(TurkishResolver)),
                    _ => None,
                }
            })
            .collect();
        Self { resolvers }
    }

    /// Kinds of the enabled resolvers, in run order
    pub fn kinds(&self) -> Vec<ResolverKind> {
        self.resolvers.iter().map(|r| r.kind()).collect()
    }

    /// Thread the provisional answer through every enabled resolver
    ///
    /// Lowercases `text` once. Pure: the same input always yields the
    /// same language.
    pub fn run(&self, text: &str, provisional: Language, candidates: &CandidateSet) -> Language {
        let lowered = text.to_lowercase();
        let mut current = provisional;

        for resolver in &self.resolvers {
            let resolved = resolver.resolve(&lowered, current, candidates);
            if resolved != current {
                tracing::debug!(
                    resolver = %resolver.kind(),
                    from = %current,
                    to = %resolved,
                    "Resolver overrode language"
                );
                current = resolved;
            }
        }

        current
    }
}

impl Default for ResolverCascade {
    fn default() -> Self {
        Self::new(&ResolverConfig::default())
    }
}

impl std::fmt::Debug for ResolverCascade {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("ResolverCascade")
            .field("resolvers", &self.kinds())
            .finish()
    }
}
