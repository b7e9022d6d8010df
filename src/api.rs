//! Public data-model surface for the NEO crate.
//!
//! This file consolidates the entity types, their arena handles, and the
//! export row DTOs. Row types derive Serialize/Deserialize; their field
//! names are the stable wire contract consumed by CSV/JSON writers.

use std::fmt;

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};

use crate::models::time::format_approach_time;

/// Near-Earth object handle into a [`crate::db::NeoDatabase`] arena.
#[derive(Debug, Copy, Clone, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize)]
pub struct NeoId(pub usize);

/// Close-approach handle into a [`crate::db::NeoDatabase`] arena.
#[derive(Debug, Copy, Clone, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize)]
pub struct ApproachId(pub usize);

impl NeoId {
    pub fn new(value: usize) -> Self {
        NeoId(value)
    }

    pub fn value(&self) -> usize {
        self.0
    }
}

impl ApproachId {
    pub fn new(value: usize) -> Self {
        ApproachId(value)
    }

    pub fn value(&self) -> usize {
        self.0
    }
}

impl fmt::Display for NeoId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.0)
    }
}
impl fmt::Display for ApproachId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.0)
    }
}

/// A near-Earth object (NEO).
///
/// Encapsulates the semantic and physical parameters of one object: its
/// primary designation (required, unique across a dataset), IAU name
/// (optional), diameter in kilometers (NaN when unknown), and whether it
/// is marked potentially hazardous.
///
/// The collection of close approaches starts empty and is populated by
/// the linking pass in [`crate::db::NeoDatabase::new`]. It is
/// append-only and keeps link order.
#[derive(Clone)]
pub struct NearEarthObject {
    /// Primary designation; empty when the source field is missing.
    pub designation: String,
    /// IAU name, `None` when the source has no name for the object.
    /// An empty string is never stored here.
    pub name: Option<String>,
    /// Diameter in kilometers, NaN when unknown. Callers must compare
    /// NaN-aware.
    pub diameter: f64,
    /// Potentially-hazardous flag from the source dataset.
    pub hazardous: bool,
    /// Handles of this object's close approaches, in link order.
    pub approaches: Vec<ApproachId>,
}

impl NearEarthObject {
    /// Full name of this NEO: the designation plus the IAU name when one
    /// exists, e.g. `433 (Eros)`.
    pub fn fullname(&self) -> String {
        match &self.name {
            Some(name) => format!("{} ({})", self.designation, name),
            None => self.designation.clone(),
        }
    }

    /// Flat export row for CSV/JSON writers.
    pub fn to_row(&self) -> NeoRow {
        NeoRow {
            designation: self.designation.clone(),
            name: self.name.clone().unwrap_or_default(),
            diameter_km: self.diameter,
            potentially_hazardous: self.hazardous,
        }
    }
}

impl fmt::Display for NearEarthObject {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let verb = if self.hazardous { "is" } else { "is not" };
        write!(
            f,
            "NEO {} has a diameter of {:.3} km and {} potentially hazardous.",
            self.fullname(),
            self.diameter,
            verb
        )
    }
}

impl fmt::Debug for NearEarthObject {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("NearEarthObject")
            .field("designation", &self.designation)
            .field("name", &self.name)
            .field("diameter", &format_args!("{:.3}", self.diameter))
            .field("hazardous", &self.hazardous)
            .finish()
    }
}

/// A close approach to Earth by an NEO.
///
/// Holds the date and time (UTC) of closest approach, the nominal
/// approach distance in astronomical units, and the relative approach
/// velocity in kilometers per second.
///
/// The link to the approaching object is established in two phases:
/// construction stores only the object's designation, and the linking
/// pass in [`crate::db::NeoDatabase::new`] resolves it to a [`NeoId`]
/// handle. The designation is retained after linking.
#[derive(Clone)]
pub struct CloseApproach {
    /// Unresolved foreign key to the approaching object.
    pub(crate) designation: String,
    /// Time of closest approach (UTC); `None` when absent from the source.
    pub time: Option<DateTime<Utc>>,
    /// Nominal approach distance in astronomical units.
    pub distance: f64,
    /// Relative approach velocity in kilometers per second.
    pub velocity: f64,
    /// Handle of the approaching object, set once by the linking pass.
    pub neo: Option<NeoId>,
}

impl CloseApproach {
    /// Designation of the approaching object, as stored before linking.
    pub fn designation(&self) -> &str {
        &self.designation
    }

    /// Approach time formatted at minute precision, or `n/a date` when
    /// the source row had no time.
    ///
    /// The source data carries no seconds, so the default `DateTime`
    /// rendering would show significant figures that do not exist.
    pub fn time_str(&self) -> String {
        match self.time {
            Some(time) => format_approach_time(time),
            None => "n/a date".to_string(),
        }
    }

    /// Full name of the approaching object.
    ///
    /// Delegates to the linked NEO when one is supplied; falls back to
    /// the designation stored at construction time.
    pub fn fullname(&self, neo: Option<&NearEarthObject>) -> String {
        match neo {
            Some(neo) => neo.fullname(),
            None => self.designation.clone(),
        }
    }

    /// Human-readable one-line description of this approach.
    pub fn describe(&self, neo: Option<&NearEarthObject>) -> String {
        format!(
            "On {}, '{}' approaches Earth at a distance of {:.2} au and a velocity of {:.2} km/s.",
            self.time_str(),
            self.fullname(neo),
            self.distance,
            self.velocity
        )
    }

    /// Flat export row for CSV/JSON writers, with the object's row nested.
    ///
    /// `neo` must be the object this approach resolved to; use
    /// [`crate::db::NeoDatabase::serialize_approach`] to enforce that
    /// precondition from a handle.
    pub fn to_row(&self, neo: &NearEarthObject) -> ApproachRow {
        ApproachRow {
            datetime_utc: self.time.map(format_approach_time).unwrap_or_default(),
            distance_au: self.distance,
            velocity_km_s: self.velocity,
            neo: neo.to_row(),
        }
    }
}

impl fmt::Debug for CloseApproach {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("CloseApproach")
            .field("time", &self.time_str())
            .field("distance", &format_args!("{:.2}", self.distance))
            .field("velocity", &format_args!("{:.2}", self.velocity))
            .field("neo", &self.neo)
            .finish()
    }
}

/// Export row for a NEO.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct NeoRow {
    /// Primary designation.
    pub designation: String,
    /// IAU name, empty string when the object is unnamed.
    pub name: String,
    /// Diameter in kilometers, NaN when unknown.
    pub diameter_km: f64,
    /// Potentially-hazardous flag.
    pub potentially_hazardous: bool,
}

/// Export row for a close approach, nesting the object's row.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct ApproachRow {
    /// Formatted approach time, empty string when absent.
    pub datetime_utc: String,
    /// Approach distance in astronomical units.
    pub distance_au: f64,
    /// Approach velocity in kilometers per second.
    pub velocity_km_s: f64,
    /// The approaching object's own export row.
    pub neo: NeoRow,
}
