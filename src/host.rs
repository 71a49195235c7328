//! Ingestion host: the parallel extraction seam and the one-way resolve.

use rayon::prelude::*;

use crate::base::Diagnostics;
use crate::graph::{Hierarchy, HierarchyBuilder};
use crate::model::SourceUnit;
use crate::resolve::PlatformIndex;

/// Owns all mutable state between extraction and resolve.
///
/// Feed units in any order, then call [`resolve`](Self::resolve) exactly
/// once. The host is consumed by the transition, so a half-built graph can
/// never be queried.
///
/// ```ignore
/// let mut host = HierarchyHost::new();
/// host.extract_and_add(files, |file| extractor.scan(file));
/// let (hierarchy, diagnostics) = host.resolve();
/// ```
#[derive(Debug, Default)]
pub struct HierarchyHost {
    builder: HierarchyBuilder,
}

impl HierarchyHost {
    pub fn new() -> Self {
        Self::default()
    }

    /// Host resolving against a caller-supplied platform allowlist.
    pub fn with_platform(platform: PlatformIndex) -> Self {
        Self {
            builder: HierarchyBuilder::with_platform(platform),
        }
    }

    /// Ingest one extracted source unit.
    pub fn add_unit(&mut self, unit: SourceUnit) {
        self.builder.add_unit(unit);
    }

    pub fn add_units<I>(&mut self, units: I)
    where
        I: IntoIterator<Item = SourceUnit>,
    {
        self.builder.add_units(units);
    }

    /// Run `extract` over the inputs in parallel and ingest every unit it
    /// produces, in input order.
    pub fn extract_and_add<I, F>(&mut self, inputs: Vec<I>, extract: F)
    where
        I: Send,
        F: Fn(I) -> Option<SourceUnit> + Send + Sync,
    {
        self.add_units(extract_units(inputs, extract));
    }

    /// Seal the graph. Consumes the host; there is no way back to building.
    pub fn resolve(self) -> (Hierarchy, Diagnostics) {
        self.builder.resolve()
    }
}

/// Map a caller-supplied extractor over inputs on the rayon pool.
///
/// Inputs that extract to `None` (unreadable, unparsable) are skipped; the
/// extractor reports those through its own channel. The output keeps input
/// order, so registration order and first-wins duplicate handling stay
/// deterministic regardless of worker scheduling. `collect` is the
/// join barrier: resolution never starts on a partial input set.
pub fn extract_units<I, F>(inputs: Vec<I>, extract: F) -> Vec<SourceUnit>
where
    I: Send,
    F: Fn(I) -> Option<SourceUnit> + Send + Sync,
{
    tracing::debug!("[BUILD] extracting {} inputs", inputs.len());
    inputs.into_par_iter().filter_map(extract).collect()
}
