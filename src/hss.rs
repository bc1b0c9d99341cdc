//! HSS hierarchy validation and wire-format lengths
//!
//! An HSS hierarchy is described by a level count and two per-level typecode
//! sequences, element `i` describing level `i` (level 0 is the topmost tree,
//! whose root is the public key). [`HierarchySpec::resolve`] validates such a
//! description in full before [`signature_len`] or [`public_key_len`] does
//! any arithmetic, so a malformed or adversarial description is rejected as a
//! typed error instead of producing a wrong byte count.

use crate::constants::{LEVELS_LEN, MAX_HSS_LEVELS};
use crate::error::LengthError;
use crate::lms::{self, LmsParams};
use crate::ots::{self, OtsParams};

/// One resolved hierarchy level
#[derive(Clone, Copy, Debug)]
pub struct LevelSpec {
    /// Tree parameters of this level
    pub lms: &'static LmsParams,
    /// One-time-signature parameters of this level
    pub ots: &'static OtsParams,
}

/// A fully validated HSS hierarchy description.
///
/// Construction through [`resolve`](Self::resolve) guarantees 1 to 8 levels,
/// each carrying registered parameter sets.
#[derive(Clone, Debug)]
pub struct HierarchySpec {
    levels: Vec<LevelSpec>,
}

impl HierarchySpec {
    /// Resolves a caller-supplied hierarchy description against the
    /// parameter registries.
    ///
    /// Checks run in order: `levels` must lie in `[1, 8]`; both slices must
    /// supply at least `levels` entries; every typecode within the first
    /// `levels` entries must be registered. Entries beyond `levels` are
    /// ignored, and a short slice is an error, never padded.
    pub fn resolve(levels: u32, lms_ids: &[u32], ots_ids: &[u32]) -> Result<Self, LengthError> {
        let levels = levels as usize;
        if levels < 1 || levels > MAX_HSS_LEVELS {
            return Err(LengthError::InvalidLevelCount(levels));
        }
        if lms_ids.len() < levels || ots_ids.len() < levels {
            return Err(LengthError::MissingParameterArray);
        }

        let mut resolved = Vec::with_capacity(levels);
        for (level, (&lms_id, &ots_id)) in
            lms_ids[..levels].iter().zip(&ots_ids[..levels]).enumerate()
        {
            let lms = lms::lookup(lms_id)
                .ok_or(LengthError::UnrecognizedParameterId { level, id: lms_id })?;
            let ots = ots::lookup(ots_id)
                .ok_or(LengthError::UnrecognizedParameterId { level, id: ots_id })?;
            resolved.push(LevelSpec { lms, ots });
        }
        Ok(Self { levels: resolved })
    }

    /// The resolved levels, topmost first
    pub fn levels(&self) -> &[LevelSpec] {
        &self.levels
    }

    /// Serialized HSS signature length for this hierarchy.
    ///
    /// The signature carries the level-count field, one signed layer per
    /// level, and the signed LMS public key of every level below the top.
    pub fn signature_len(&self) -> Result<usize, LengthError> {
        let mut total = LEVELS_LEN;
        for (level, spec) in self.levels.iter().enumerate() {
            if level > 0 {
                total = add(total, spec.lms.public_key_len())?;
            }
            total = add(total, spec.lms.signature_len(spec.ots))?;
        }
        Ok(total)
    }

    /// Serialized HSS public key length for this hierarchy.
    ///
    /// Only the top level contributes bytes; the key is the level-count
    /// field followed by the top tree's LMS public key. Lower levels were
    /// still validated by [`resolve`](Self::resolve).
    pub fn public_key_len(&self) -> Result<usize, LengthError> {
        add(LEVELS_LEN, self.levels[0].lms.public_key_len())
    }
}

/// Serialized HSS signature length for the given per-level typecodes.
pub fn signature_len(levels: u32, lms_ids: &[u32], ots_ids: &[u32]) -> Result<usize, LengthError> {
    HierarchySpec::resolve(levels, lms_ids, ots_ids)?.signature_len()
}

/// Serialized HSS public key length for the given per-level typecodes.
pub fn public_key_len(levels: u32, lms_ids: &[u32], ots_ids: &[u32]) -> Result<usize, LengthError> {
    HierarchySpec::resolve(levels, lms_ids, ots_ids)?.public_key_len()
}

/// Overflow-checked accumulation.
///
/// Registered parameter sets can never overflow a `usize`, but the counter
/// feeds allocations downstream, so a wrapped sum must be a hard error.
fn add(total: usize, part: usize) -> Result<usize, LengthError> {
    total.checked_add(part).ok_or(LengthError::SizeOverflow)
}
