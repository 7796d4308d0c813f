// Engine module - Facet filtering over a read-only catalog
// This layer sits between plain data (types) and the I/O collaborators (runtime, cli)

pub mod boost;
pub mod catalog;
pub mod filter;
pub mod session;
pub mod similarity;
pub mod stats;
pub mod summary;
pub mod sync;
pub mod viability;

pub use boost::{BoostGuide, BoostStep, ScentWeight, boost_guide};
pub use catalog::Catalog;
pub use filter::{EvalMode, compute_result_set, filter_items};
pub use session::{Session, Snapshot};
pub use similarity::{SimilarItem, find_similar};
pub use stats::{Distribution, ValueCount, distribution};
pub use summary::{BrandInfo, ResultSummary};
pub use sync::{Action, BrowserState, Chip, chips, reduce};
pub use viability::{FacetOptions, OptionState, Viability, compute_option_viability};

use scentdex_types::{Facet, Favorites, FilterState};

// Façade API - Stable public interface for runtime and CLI layers

/// Facet value distribution over the current result set
pub fn facet_statistics(
    catalog: &Catalog,
    state: &FilterState,
    favorites: &Favorites,
    facet: Facet,
) -> Distribution {
    let results = compute_result_set(catalog, state, favorites);
    distribution(&results, facet)
}
