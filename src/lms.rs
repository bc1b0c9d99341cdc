//! LMS parameter sets
//!
//! Every typecode registered by RFC 8554 section 5.1 and NIST SP 800-208
//! section 4, with its fixed tree geometry.

use static_assertions::const_assert_eq;

use crate::constants::{ID_LEN, TYPECODE_LEN};
use crate::ots::OtsParams;
use crate::types::HashAlg;

/// `LMS_SHA256_M32_H5`
pub const LMS_SHA256_M32_H5: u32 = 0x05;
/// `LMS_SHA256_M32_H10`
pub const LMS_SHA256_M32_H10: u32 = 0x06;
/// `LMS_SHA256_M32_H15`
pub const LMS_SHA256_M32_H15: u32 = 0x07;
/// `LMS_SHA256_M32_H20`
pub const LMS_SHA256_M32_H20: u32 = 0x08;
/// `LMS_SHA256_M32_H25`
pub const LMS_SHA256_M32_H25: u32 = 0x09;
/// `LMS_SHA256_M24_H5`
pub const LMS_SHA256_M24_H5: u32 = 0x0a;
/// `LMS_SHA256_M24_H10`
pub const LMS_SHA256_M24_H10: u32 = 0x0b;
/// `LMS_SHA256_M24_H15`
pub const LMS_SHA256_M24_H15: u32 = 0x0c;
/// `LMS_SHA256_M24_H20`
pub const LMS_SHA256_M24_H20: u32 = 0x0d;
/// `LMS_SHA256_M24_H25`
pub const LMS_SHA256_M24_H25: u32 = 0x0e;
/// `LMS_SHAKE_M32_H5`
pub const LMS_SHAKE_M32_H5: u32 = 0x0f;
/// `LMS_SHAKE_M32_H10`
pub const LMS_SHAKE_M32_H10: u32 = 0x10;
/// `LMS_SHAKE_M32_H15`
pub const LMS_SHAKE_M32_H15: u32 = 0x11;
/// `LMS_SHAKE_M32_H20`
pub const LMS_SHAKE_M32_H20: u32 = 0x12;
/// `LMS_SHAKE_M32_H25`
pub const LMS_SHAKE_M32_H25: u32 = 0x13;
/// `LMS_SHAKE_M24_H5`
pub const LMS_SHAKE_M24_H5: u32 = 0x14;
/// `LMS_SHAKE_M24_H10`
pub const LMS_SHAKE_M24_H10: u32 = 0x15;
/// `LMS_SHAKE_M24_H15`
pub const LMS_SHAKE_M24_H15: u32 = 0x16;
/// `LMS_SHAKE_M24_H20`
pub const LMS_SHAKE_M24_H20: u32 = 0x17;
/// `LMS_SHAKE_M24_H25`
pub const LMS_SHAKE_M24_H25: u32 = 0x18;

/// Fixed geometry of one registered LMS parameter set
#[derive(Clone, Copy, Debug, Eq, PartialEq)]
pub struct LmsParams {
    /// Registered typecode
    pub typecode: u32,
    /// Hash family
    pub hash: HashAlg,
    /// Node and root digest width in bytes
    pub m: usize,
    /// Tree height; the tree authenticates `2^h` one-time keys
    pub h: usize,
}

impl LmsParams {
    /// Number of leaves, `2^h`
    pub const fn leaves(&self) -> u64 {
        1 << self.h
    }

    /// Serialized authentication-path portion of an LMS signature: typecode
    /// plus `h` sibling digests
    pub const fn path_len(&self) -> usize {
        TYPECODE_LEN + self.m * self.h
    }

    /// Serialized LMS public key: LMS typecode, LM-OTS typecode, the 16-byte
    /// identifier `I`, and the root digest
    pub const fn public_key_len(&self) -> usize {
        TYPECODE_LEN + TYPECODE_LEN + ID_LEN + self.m
    }

    /// Serialized length of one signed layer: the LM-OTS signature followed
    /// by this tree's authentication path
    pub const fn signature_len(&self, ots: &OtsParams) -> usize {
        ots.signature_len() + self.path_len()
    }
}

const fn lms(typecode: u32, hash: HashAlg, m: usize, h: usize) -> LmsParams {
    LmsParams {
        typecode,
        hash,
        m,
        h,
    }
}

pub(crate) const LMS_PARAM_SETS: [LmsParams; 20] = [
    lms(LMS_SHA256_M32_H5, HashAlg::Sha256, 32, 5),
    lms(LMS_SHA256_M32_H10, HashAlg::Sha256, 32, 10),
    lms(LMS_SHA256_M32_H15, HashAlg::Sha256, 32, 15),
    lms(LMS_SHA256_M32_H20, HashAlg::Sha256, 32, 20),
    lms(LMS_SHA256_M32_H25, HashAlg::Sha256, 32, 25),
    lms(LMS_SHA256_M24_H5, HashAlg::Sha256, 24, 5),
    lms(LMS_SHA256_M24_H10, HashAlg::Sha256, 24, 10),
    lms(LMS_SHA256_M24_H15, HashAlg::Sha256, 24, 15),
    lms(LMS_SHA256_M24_H20, HashAlg::Sha256, 24, 20),
    lms(LMS_SHA256_M24_H25, HashAlg::Sha256, 24, 25),
    lms(LMS_SHAKE_M32_H5, HashAlg::Shake256, 32, 5),
    lms(LMS_SHAKE_M32_H10, HashAlg::Shake256, 32, 10),
    lms(LMS_SHAKE_M32_H15, HashAlg::Shake256, 32, 15),
    lms(LMS_SHAKE_M32_H20, HashAlg::Shake256, 32, 20),
    lms(LMS_SHAKE_M32_H25, HashAlg::Shake256, 32, 25),
    lms(LMS_SHAKE_M24_H5, HashAlg::Shake256, 24, 5),
    lms(LMS_SHAKE_M24_H10, HashAlg::Shake256, 24, 10),
    lms(LMS_SHAKE_M24_H15, HashAlg::Shake256, 24, 15),
    lms(LMS_SHAKE_M24_H20, HashAlg::Shake256, 24, 20),
    lms(LMS_SHAKE_M24_H25, HashAlg::Shake256, 24, 25),
];

/// Looks up a registered LMS parameter set by typecode.
pub fn lookup(typecode: u32) -> Option<&'static LmsParams> {
    LMS_PARAM_SETS.iter().find(|p| p.typecode == typecode)
}

// pin the derived sizes for the corner entries of the registry
const_assert_eq!(LMS_PARAM_SETS[0].path_len(), 164);
const_assert_eq!(LMS_PARAM_SETS[0].public_key_len(), 56);
const_assert_eq!(LMS_PARAM_SETS[4].path_len(), 804);
const_assert_eq!(LMS_PARAM_SETS[5].path_len(), 124);
const_assert_eq!(LMS_PARAM_SETS[5].public_key_len(), 48);
const_assert_eq!(LMS_PARAM_SETS[19].path_len(), 604);

#[cfg(test)]
mod tests {
    use super::*;

    macro_rules! lms_lookup_tests {
        (
            $(($name:ident, $m:expr, $h:expr)),+ $(,)?
        ) => {
            $(
                paste::paste! {
                    #[test]
                    fn [<lookup_ $name:lower>]() {
                        let params = lookup($name).unwrap();
                        assert_eq!(params.typecode, $name);
                        assert_eq!(params.m, $m);
                        assert_eq!(params.h, $h);
                        assert_eq!(params.leaves(), 1u64 << $h);
                        assert_eq!(params.path_len(), 4 + $m * $h);
                        assert_eq!(params.public_key_len(), 24 + $m);
                    }
                }
            )+
        };
    }

    lms_lookup_tests! {
        (LMS_SHA256_M32_H5, 32, 5),
        (LMS_SHA256_M32_H10, 32, 10),
        (LMS_SHA256_M32_H15, 32, 15),
        (LMS_SHA256_M32_H20, 32, 20),
        (LMS_SHA256_M32_H25, 32, 25),
        (LMS_SHA256_M24_H5, 24, 5),
        (LMS_SHA256_M24_H10, 24, 10),
        (LMS_SHA256_M24_H15, 24, 15),
        (LMS_SHA256_M24_H20, 24, 20),
        (LMS_SHA256_M24_H25, 24, 25),
        (LMS_SHAKE_M32_H5, 32, 5),
        (LMS_SHAKE_M32_H10, 32, 10),
        (LMS_SHAKE_M32_H15, 32, 15),
        (LMS_SHAKE_M32_H20, 32, 20),
        (LMS_SHAKE_M32_H25, 32, 25),
        (LMS_SHAKE_M24_H5, 24, 5),
        (LMS_SHAKE_M24_H10, 24, 10),
        (LMS_SHAKE_M24_H15, 24, 15),
        (LMS_SHAKE_M24_H20, 24, 20),
        (LMS_SHAKE_M24_H25, 24, 25),
    }

    #[test]
    fn lookup_rejects_unassigned() {
        // 0x01..=0x04 are LM-OTS codes, not LMS codes
        assert_eq!(lookup(0x01), None);
        assert_eq!(lookup(0x19), None);
        assert_eq!(lookup(u32::MAX), None);
    }

    #[test]
    fn signature_len_combines_ots_and_path() {
        let lms = lookup(LMS_SHA256_M32_H5).unwrap();
        let ots = crate::ots::lookup(crate::ots::LMOTS_SHA256_N32_W8).unwrap();
        assert_eq!(lms.signature_len(ots), 1124 + 164);
    }

    #[test]
    fn typecodes_are_unique() {
        for (i, a) in LMS_PARAM_SETS.iter().enumerate() {
            for b in &LMS_PARAM_SETS[i + 1..] {
                assert_ne!(a.typecode, b.typecode);
            }
        }
    }
}
