//! In-memory assembly database for NEOs and close approaches.

use std::collections::HashMap;

use log::{debug, warn};

use crate::api::{ApproachId, ApproachRow, CloseApproach, NearEarthObject, NeoId, NeoRow};
use crate::db::error::{DatabaseError, DbResult};

/// Arena storage for one loaded dataset, plus the designation index used
/// to resolve approach links.
///
/// Handles ([`NeoId`], [`ApproachId`]) are positions in the arenas and
/// stay valid for the life of the database; nothing is ever removed.
pub struct NeoDatabase {
    neos: Vec<NearEarthObject>,
    approaches: Vec<CloseApproach>,
    by_designation: HashMap<String, NeoId>,
}

impl NeoDatabase {
    /// Assemble a database from independently constructed collections.
    ///
    /// Runs the single linking pass: each approach whose designation
    /// matches a stored NEO gets its [`NeoId`], and the NEO's approach
    /// list grows by that approach's handle, so both sides of the link
    /// are recorded together and stay consistent. Approaches with an
    /// unknown designation stay unlinked; duplicate designations keep
    /// the first object. Both conditions are logged, not errors: the
    /// source dataset is known to be messy.
    pub fn new(neos: Vec<NearEarthObject>, approaches: Vec<CloseApproach>) -> Self {
        let mut db = NeoDatabase {
            by_designation: HashMap::with_capacity(neos.len()),
            neos,
            approaches,
        };

        for (index, neo) in db.neos.iter().enumerate() {
            let id = NeoId::new(index);
            if let Some(first) = db.by_designation.insert(neo.designation.clone(), id) {
                warn!(
                    "duplicate designation {:?} (ids {} and {}), keeping the first",
                    neo.designation, first, id
                );
                db.by_designation.insert(neo.designation.clone(), first);
            }
        }

        let mut unlinked = 0usize;
        for (index, approach) in db.approaches.iter_mut().enumerate() {
            match db.by_designation.get(&approach.designation) {
                Some(&neo_id) => {
                    approach.neo = Some(neo_id);
                    db.neos[neo_id.value()]
                        .approaches
                        .push(ApproachId::new(index));
                }
                None => unlinked += 1,
            }
        }

        if unlinked > 0 {
            warn!(
                "{} close approaches reference designations missing from the catalog",
                unlinked
            );
        }
        debug!(
            "linked {} close approaches across {} NEOs",
            db.approaches.len() - unlinked,
            db.neos.len()
        );

        db
    }

    /// All NEOs, in construction order.
    pub fn neos(&self) -> &[NearEarthObject] {
        &self.neos
    }

    /// All close approaches, in construction order.
    pub fn approaches(&self) -> &[CloseApproach] {
        &self.approaches
    }

    /// Look up a NEO by handle.
    pub fn neo(&self, id: NeoId) -> Option<&NearEarthObject> {
        self.neos.get(id.value())
    }

    /// Look up a close approach by handle.
    pub fn approach(&self, id: ApproachId) -> Option<&CloseApproach> {
        self.approaches.get(id.value())
    }

    /// Look up a NEO by its primary designation.
    pub fn neo_by_designation(&self, designation: &str) -> Option<&NearEarthObject> {
        self.by_designation
            .get(designation)
            .and_then(|&id| self.neo(id))
    }

    /// Resolve the object an approach was linked to, if any.
    pub fn neo_for(&self, approach: &CloseApproach) -> Option<&NearEarthObject> {
        approach.neo.and_then(|id| self.neo(id))
    }

    /// Export row for a NEO handle.
    pub fn serialize_neo(&self, id: NeoId) -> DbResult<NeoRow> {
        self.neo(id)
            .map(NearEarthObject::to_row)
            .ok_or(DatabaseError::NotFound {
                entity: "NEO",
                id: id.value(),
            })
    }

    /// Export row for an approach handle.
    ///
    /// Fails fast when the approach never resolved to a known NEO: the
    /// export contract nests the object's row and has no representation
    /// for a dangling link.
    pub fn serialize_approach(&self, id: ApproachId) -> DbResult<ApproachRow> {
        let approach = self.approach(id).ok_or(DatabaseError::NotFound {
            entity: "close approach",
            id: id.value(),
        })?;
        let neo = self
            .neo_for(approach)
            .ok_or_else(|| DatabaseError::Unlinked {
                designation: approach.designation().to_string(),
            })?;
        Ok(approach.to_row(neo))
    }

    /// Human-readable description of an approach, resolving its link.
    pub fn describe_approach(&self, id: ApproachId) -> Option<String> {
        self.approach(id)
            .map(|approach| approach.describe(self.neo_for(approach)))
    }
}
