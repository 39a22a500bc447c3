//! Record definitions for the NEO/close-approach data model.
//!
//! Both collections are owned by [`NeoDatabase`](crate::NeoDatabase);
//! cross-references between them are index handles ([`NeoId`],
//! [`ApproachId`]) into the store's vectors rather than owning pointers,
//! so records stay plainly serializable and the join stays cycle-free.

use chrono::NaiveDateTime;
use serde::{Deserialize, Serialize};
use std::fmt;

// ---------------------------------------------------------------------------
// Handle Types
// ---------------------------------------------------------------------------

/// Handle to a [`NearEarthObject`] inside its owning store.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(transparent)]
pub struct NeoId(pub usize);

/// Handle to a [`CloseApproach`] inside its owning store.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(transparent)]
pub struct ApproachId(pub usize);

impl fmt::Display for NeoId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "neo#{}", self.0)
    }
}

impl fmt::Display for ApproachId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "approach#{}", self.0)
    }
}

// ---------------------------------------------------------------------------
// Records
// ---------------------------------------------------------------------------

/// A near-Earth object — one physical body per record.
///
/// The `designation` is the primary key: unique across the collection,
/// stored exactly as given, and matched case-insensitively.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct NearEarthObject {
    /// Primary designation, unique across the collection.
    pub designation: String,
    /// IAU name, if any. `None` means the body is unnamed; an unnamed
    /// body never satisfies a name lookup.
    pub name: Option<String>,
    /// Diameter in kilometers, `None` when the source data omits it.
    pub diameter: Option<f64>,
    /// Whether NASA classifies the body as potentially hazardous.
    pub hazardous: bool,
    /// Back-references to this body's close approaches, in arrival
    /// order. Populated by the store's linker; empty before linking.
    #[serde(default)]
    pub approaches: Vec<ApproachId>,
}

impl NearEarthObject {
    /// Create an unlinked NEO.
    ///
    /// An empty `name` is normalized to `None` here, once, so that name
    /// lookups only ever compare against genuinely named bodies.
    #[must_use]
    pub fn new(
        designation: impl Into<String>,
        name: Option<String>,
        diameter: Option<f64>,
        hazardous: bool,
    ) -> Self {
        Self {
            designation: designation.into(),
            name: name.filter(|n| !n.is_empty()),
            diameter,
            hazardous,
            approaches: Vec::new(),
        }
    }

    /// Human-readable full name: `"433 (Eros)"`, or just the
    /// designation for unnamed bodies.
    #[must_use]
    pub fn fullname(&self) -> String {
        match &self.name {
            Some(name) => format!("{} ({name})", self.designation),
            None => self.designation.clone(),
        }
    }
}

impl fmt::Display for NearEarthObject {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "NEO {}", self.fullname())
    }
}

/// A close approach — one observed encounter per record.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct CloseApproach {
    /// Raw foreign key: the designation of the approaching body as it
    /// appears in the source data. Matched case-insensitively against
    /// [`NearEarthObject::designation`]; never rewritten by linking.
    pub designation: String,
    /// Moment of closest approach (UTC).
    pub time: NaiveDateTime,
    /// Nominal approach distance in astronomical units.
    pub distance: f64,
    /// Relative approach velocity in km/s.
    pub velocity: f64,
    /// Handle to the resolved NEO. `None` before linking, and after
    /// linking only when no NEO matched under
    /// [`LinkPolicy::LeaveUnresolved`](crate::LinkPolicy::LeaveUnresolved).
    #[serde(default)]
    pub neo: Option<NeoId>,
}

impl CloseApproach {
    /// Create an unlinked close approach.
    #[must_use]
    pub fn new(
        designation: impl Into<String>,
        time: NaiveDateTime,
        distance: f64,
        velocity: f64,
    ) -> Self {
        Self {
            designation: designation.into(),
            time,
            distance,
            velocity,
            neo: None,
        }
    }
}

impl fmt::Display for CloseApproach {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(
            f,
            "At {}, {} approaches Earth at a distance of {:.2} au and a velocity of {:.2} km/s",
            self.time.format("%Y-%m-%d %H:%M"),
            self.designation,
            self.distance,
            self.velocity
        )
    }
}
