//! The [`NeoDatabase`] aggregate: owner of both record collections, the
//! one-shot linker that joins them, and the [`LookupIndex`] for
//! designation and name lookups.
//!
//! Construction performs the join exactly once; the store is read-only
//! afterwards. Linking walks the approach collection a single time and
//! resolves each foreign key through the designation index, so the whole
//! pass is O(E + N) for E approaches and N NEOs.

use std::cell::RefCell;
use std::collections::HashMap;

use tracing::{debug, info, warn};

use crate::config::{DatabaseConfig, LinkPolicy};
use crate::error::{DatabaseError, Result};
use crate::models::{ApproachId, CloseApproach, NearEarthObject, NeoId};

// ---------------------------------------------------------------------------
// Lookup Index
// ---------------------------------------------------------------------------

/// Derived lookup structure mapping case-folded designations to NEO
/// handles.
///
/// The index is a cache over the NEO collection, not a second source of
/// truth: rebuilding it from the same collection always reproduces the
/// same mapping. Designation lookups additionally populate a
/// literal-query cache keyed by the exact query string as given, so
/// repeated lookups with the same literal input skip the case fold.
///
/// The query cache lives in a `RefCell`; the store is single-threaded
/// by design and has no internal locking, and the resulting `!Sync`
/// makes unsynchronized cross-thread sharing a compile error.
#[derive(Debug)]
pub struct LookupIndex {
    by_designation: HashMap<String, NeoId>,
    query_cache: RefCell<HashMap<String, NeoId>>,
}

impl LookupIndex {
    /// Build the index from an NEO collection.
    ///
    /// Designations are unique per the data contract; should a
    /// duplicate appear anyway, the first occurrence wins, matching
    /// what a front-to-back scan of the collection would find.
    #[must_use]
    pub fn build(neos: &[NearEarthObject]) -> Self {
        let mut by_designation = HashMap::with_capacity(neos.len());
        for (i, neo) in neos.iter().enumerate() {
            let key = neo.designation.to_lowercase();
            if by_designation.contains_key(&key) {
                warn!(designation = %neo.designation, "duplicate designation, keeping first");
                continue;
            }
            by_designation.insert(key, NeoId(i));
        }
        debug!(entries = by_designation.len(), "built designation index");
        Self {
            by_designation,
            query_cache: RefCell::new(HashMap::new()),
        }
    }

    /// Resolve a designation query to an NEO handle, case-insensitively.
    ///
    /// Hits are remembered under the exact query string as given, so a
    /// repeated lookup with the same literal input is answered from the
    /// cache without re-folding.
    pub fn resolve(&self, query: &str) -> Option<NeoId> {
        if let Some(&id) = self.query_cache.borrow().get(query) {
            return Some(id);
        }
        let id = self.resolve_folded(query)?;
        self.query_cache.borrow_mut().insert(query.to_owned(), id);
        Some(id)
    }

    /// Number of literal queries currently cached.
    #[must_use]
    pub fn cached_query_count(&self) -> usize {
        self.query_cache.borrow().len()
    }

    /// Plain map lookup after case-folding, bypassing the query cache.
    /// The linker uses this directly: its keys are raw foreign keys,
    /// not caller queries worth remembering.
    fn resolve_folded(&self, designation: &str) -> Option<NeoId> {
        self.by_designation.get(&designation.to_lowercase()).copied()
    }
}

// ---------------------------------------------------------------------------
// Store
// ---------------------------------------------------------------------------

/// The store: exclusive owner of the NEO and close-approach collections
/// and of the derived [`LookupIndex`].
///
/// Built once from two unlinked collections; linking runs exactly once
/// inside construction, and no record is mutated afterwards.
#[derive(Debug)]
pub struct NeoDatabase {
    neos: Vec<NearEarthObject>,
    approaches: Vec<CloseApproach>,
    index: LookupIndex,
}

impl NeoDatabase {
    /// Build a store from unlinked collections with the default
    /// unresolved-reference policy
    /// ([`LinkPolicy::LeaveUnresolved`]).
    #[must_use]
    pub fn new(neos: Vec<NearEarthObject>, approaches: Vec<CloseApproach>) -> Self {
        match Self::with_policy(neos, approaches, LinkPolicy::LeaveUnresolved) {
            Ok(db) => db,
            Err(_) => unreachable!("linking cannot fail under LeaveUnresolved"),
        }
    }

    /// Build a store using the policy carried by `config`.
    ///
    /// # Errors
    /// Returns [`DatabaseError::UnresolvedApproach`] under
    /// [`LinkPolicy::Fail`] when an approach's foreign key matches no
    /// NEO; the partially-linked store is dropped, never returned.
    pub fn with_config(
        neos: Vec<NearEarthObject>,
        approaches: Vec<CloseApproach>,
        config: &DatabaseConfig,
    ) -> Result<Self> {
        Self::with_policy(neos, approaches, config.link.policy)
    }

    /// Build a store with an explicit unresolved-reference policy.
    ///
    /// # Errors
    /// See [`NeoDatabase::with_config`].
    pub fn with_policy(
        mut neos: Vec<NearEarthObject>,
        mut approaches: Vec<CloseApproach>,
        policy: LinkPolicy,
    ) -> Result<Self> {
        let index = LookupIndex::build(&neos);
        link(&mut neos, &mut approaches, &index, policy)?;
        Ok(Self {
            neos,
            approaches,
            index,
        })
    }

    /// All NEOs, in input order.
    #[must_use]
    pub fn neos(&self) -> &[NearEarthObject] {
        &self.neos
    }

    /// All close approaches, in input order.
    #[must_use]
    pub fn approaches(&self) -> &[CloseApproach] {
        &self.approaches
    }

    /// Resolve an NEO handle.
    #[must_use]
    pub fn neo(&self, id: NeoId) -> Option<&NearEarthObject> {
        self.neos.get(id.0)
    }

    /// Resolve a close-approach handle.
    #[must_use]
    pub fn approach(&self, id: ApproachId) -> Option<&CloseApproach> {
        self.approaches.get(id.0)
    }

    /// The NEO a close approach was linked to, if any.
    #[must_use]
    pub fn neo_for(&self, approach: &CloseApproach) -> Option<&NearEarthObject> {
        approach.neo.and_then(|id| self.neo(id))
    }

    /// All close approaches linked to an NEO, in arrival order.
    pub fn approaches_of<'a>(
        &'a self,
        neo: &'a NearEarthObject,
    ) -> impl Iterator<Item = &'a CloseApproach> {
        neo.approaches.iter().filter_map(|&id| self.approach(id))
    }

    /// The designation lookup index.
    #[must_use]
    pub fn index(&self) -> &LookupIndex {
        &self.index
    }

    /// Find an NEO by primary designation.
    ///
    /// Matching is exact after case-folding both the query and the
    /// stored key; O(1) amortized through the designation index.
    /// Returns `None` when no NEO carries that designation.
    #[must_use]
    pub fn get_by_designation(&self, designation: &str) -> Option<&NearEarthObject> {
        self.index
            .resolve(designation)
            .and_then(|id| self.neo(id))
    }

    /// Find an NEO by name, case-insensitively.
    ///
    /// An empty query returns `None` immediately, without scanning.
    /// Unnamed bodies never match, whatever the query. Names are not
    /// guaranteed unique; the first match in collection order wins.
    #[must_use]
    pub fn get_by_name(&self, name: &str) -> Option<&NearEarthObject> {
        if name.is_empty() {
            return None;
        }
        let folded = name.to_lowercase();
        self.neos.iter().find(|neo| {
            neo.name
                .as_deref()
                .is_some_and(|n| !n.is_empty() && n.to_lowercase() == folded)
        })
    }
}

// ---------------------------------------------------------------------------
// Linker
// ---------------------------------------------------------------------------

/// Join the two collections in a single pass.
///
/// For each approach, in input order: resolve its foreign key through
/// the index; on a hit, write the `neo` handle and append the approach
/// handle to that NEO's back-reference list. Designations and foreign
/// keys are never rewritten. The caller runs this exactly once, on
/// collections whose link fields are still empty, so no back-reference
/// can be duplicated.
fn link(
    neos: &mut [NearEarthObject],
    approaches: &mut [CloseApproach],
    index: &LookupIndex,
    policy: LinkPolicy,
) -> Result<()> {
    let mut unresolved = 0usize;
    for (i, approach) in approaches.iter_mut().enumerate() {
        match index.resolve_folded(&approach.designation) {
            Some(id) => {
                approach.neo = Some(id);
                if let Some(neo) = neos.get_mut(id.0) {
                    neo.approaches.push(ApproachId(i));
                }
            }
            None => match policy {
                LinkPolicy::Fail => {
                    return Err(DatabaseError::UnresolvedApproach {
                        designation: approach.designation.clone(),
                        index: i,
                    });
                }
                LinkPolicy::LeaveUnresolved => {
                    warn!(
                        designation = %approach.designation,
                        index = i,
                        "close approach matches no NEO, leaving unresolved"
                    );
                    unresolved += 1;
                }
            },
        }
    }
    info!(
        neos = neos.len(),
        approaches = approaches.len(),
        unresolved,
        "linked close approaches to NEOs"
    );
    Ok(())
}
