//! Predicate query engine over the linked close-approach collection.
//!
//! A query is an ordered collection of unary boolean predicates over a
//! single [`LinkedApproach`]. The result stream yields, in store order,
//! exactly those approaches for which every predicate holds, each
//! exactly once. Evaluation short-circuits at the first failing
//! predicate, and the stream is produced lazily: an approach is tested
//! only when the caller advances the iterator, so a caller wanting the
//! first K matches never pays for the rest.

use crate::database::NeoDatabase;
use crate::models::{CloseApproach, NearEarthObject};

/// A close approach paired with its resolved NEO, as seen by
/// predicates and writers.
///
/// `neo` is `None` only for approaches left unresolved by the linker.
#[derive(Debug, Clone, Copy)]
pub struct LinkedApproach<'a> {
    /// The approach record.
    pub approach: &'a CloseApproach,
    /// The NEO the approach was linked to, if any.
    pub neo: Option<&'a NearEarthObject>,
}

/// A caller-supplied filter criterion over a single approach.
pub type Predicate = Box<dyn Fn(&LinkedApproach<'_>) -> bool>;

impl NeoDatabase {
    /// Stream the close approaches matching every predicate in
    /// `filters`, in store order.
    ///
    /// An empty `filters` slice yields the full collection unchanged.
    /// The returned iterator borrows the store and is consumed by
    /// traversal; to repeat a query, call `query` again. Nothing is
    /// mutated during evaluation.
    pub fn query<'a>(
        &'a self,
        filters: &'a [Predicate],
    ) -> impl Iterator<Item = LinkedApproach<'a>> {
        self.approaches()
            .iter()
            .map(|approach| LinkedApproach {
                approach,
                neo: self.neo_for(approach),
            })
            .filter(move |linked| filters.iter().all(|f| f(linked)))
    }
}
