//! LM-OTS parameter sets
//!
//! Every typecode registered by RFC 8554 section 4.1 and NIST SP 800-208
//! section 4, with its fixed geometry. The table is const data; lookups never
//! allocate and an unknown typecode is an explicit `None`, never a zero-size
//! default.

use static_assertions::const_assert_eq;

use crate::constants::TYPECODE_LEN;
use crate::types::HashAlg;

/// `LMOTS_SHA256_N32_W1`
pub const LMOTS_SHA256_N32_W1: u32 = 0x01;
/// `LMOTS_SHA256_N32_W2`
pub const LMOTS_SHA256_N32_W2: u32 = 0x02;
/// `LMOTS_SHA256_N32_W4`
pub const LMOTS_SHA256_N32_W4: u32 = 0x03;
/// `LMOTS_SHA256_N32_W8`
pub const LMOTS_SHA256_N32_W8: u32 = 0x04;
/// `LMOTS_SHA256_N24_W1`
pub const LMOTS_SHA256_N24_W1: u32 = 0x05;
/// `LMOTS_SHA256_N24_W2`
pub const LMOTS_SHA256_N24_W2: u32 = 0x06;
/// `LMOTS_SHA256_N24_W4`
pub const LMOTS_SHA256_N24_W4: u32 = 0x07;
/// `LMOTS_SHA256_N24_W8`
pub const LMOTS_SHA256_N24_W8: u32 = 0x08;
/// `LMOTS_SHAKE_N32_W1`
pub const LMOTS_SHAKE_N32_W1: u32 = 0x09;
/// `LMOTS_SHAKE_N32_W2`
pub const LMOTS_SHAKE_N32_W2: u32 = 0x0a;
/// `LMOTS_SHAKE_N32_W4`
pub const LMOTS_SHAKE_N32_W4: u32 = 0x0b;
/// `LMOTS_SHAKE_N32_W8`
pub const LMOTS_SHAKE_N32_W8: u32 = 0x0c;
/// `LMOTS_SHAKE_N24_W1`
pub const LMOTS_SHAKE_N24_W1: u32 = 0x0d;
/// `LMOTS_SHAKE_N24_W2`
pub const LMOTS_SHAKE_N24_W2: u32 = 0x0e;
/// `LMOTS_SHAKE_N24_W4`
pub const LMOTS_SHAKE_N24_W4: u32 = 0x0f;
/// `LMOTS_SHAKE_N24_W8`
pub const LMOTS_SHAKE_N24_W8: u32 = 0x10;

/// Fixed geometry of one registered LM-OTS parameter set.
///
/// `p` and `ls` are deterministic functions of `n` and `w` (RFC 8554
/// appendix B); they live in the table so that a registered typecode binds
/// all four values at once and none is ever derived from caller input.
#[derive(Clone, Copy, Debug, Eq, PartialEq)]
pub struct OtsParams {
    /// Registered typecode
    pub typecode: u32,
    /// Hash family
    pub hash: HashAlg,
    /// Hash output width in bytes
    pub n: usize,
    /// Winternitz window in bits
    pub w: usize,
    /// Number of `w`-bit chains, message plus checksum
    pub p: usize,
    /// Left shift applied to the checksum
    pub ls: usize,
}

impl OtsParams {
    /// Serialized LM-OTS signature length: typecode, randomizer `C`, and `p`
    /// chain tips of `n` bytes each
    pub const fn signature_len(&self) -> usize {
        TYPECODE_LEN + self.n * (self.p + 1)
    }
}

const fn ots(typecode: u32, hash: HashAlg, n: usize, w: usize, p: usize, ls: usize) -> OtsParams {
    OtsParams {
        typecode,
        hash,
        n,
        w,
        p,
        ls,
    }
}

pub(crate) const OTS_PARAM_SETS: [OtsParams; 16] = [
    ots(LMOTS_SHA256_N32_W1, HashAlg::Sha256, 32, 1, 265, 7),
    ots(LMOTS_SHA256_N32_W2, HashAlg::Sha256, 32, 2, 133, 6),
    ots(LMOTS_SHA256_N32_W4, HashAlg::Sha256, 32, 4, 67, 4),
    ots(LMOTS_SHA256_N32_W8, HashAlg::Sha256, 32, 8, 34, 0),
    ots(LMOTS_SHA256_N24_W1, HashAlg::Sha256, 24, 1, 200, 8),
    ots(LMOTS_SHA256_N24_W2, HashAlg::Sha256, 24, 2, 101, 6),
    ots(LMOTS_SHA256_N24_W4, HashAlg::Sha256, 24, 4, 51, 4),
    ots(LMOTS_SHA256_N24_W8, HashAlg::Sha256, 24, 8, 26, 0),
    ots(LMOTS_SHAKE_N32_W1, HashAlg::Shake256, 32, 1, 265, 7),
    ots(LMOTS_SHAKE_N32_W2, HashAlg::Shake256, 32, 2, 133, 6),
    ots(LMOTS_SHAKE_N32_W4, HashAlg::Shake256, 32, 4, 67, 4),
    ots(LMOTS_SHAKE_N32_W8, HashAlg::Shake256, 32, 8, 34, 0),
    ots(LMOTS_SHAKE_N24_W1, HashAlg::Shake256, 24, 1, 200, 8),
    ots(LMOTS_SHAKE_N24_W2, HashAlg::Shake256, 24, 2, 101, 6),
    ots(LMOTS_SHAKE_N24_W4, HashAlg::Shake256, 24, 4, 51, 4),
    ots(LMOTS_SHAKE_N24_W8, HashAlg::Shake256, 24, 8, 26, 0),
];

/// Looks up a registered LM-OTS parameter set by typecode.
pub fn lookup(typecode: u32) -> Option<&'static OtsParams> {
    OTS_PARAM_SETS.iter().find(|p| p.typecode == typecode)
}

// make sure the table carries the lengths registered in RFC 8554 section 4.1
// and SP 800-208 table 3
const_assert_eq!(OTS_PARAM_SETS[0].signature_len(), 8516);
const_assert_eq!(OTS_PARAM_SETS[1].signature_len(), 4292);
const_assert_eq!(OTS_PARAM_SETS[2].signature_len(), 2180);
const_assert_eq!(OTS_PARAM_SETS[3].signature_len(), 1124);
const_assert_eq!(OTS_PARAM_SETS[4].signature_len(), 4828);
const_assert_eq!(OTS_PARAM_SETS[5].signature_len(), 2452);
const_assert_eq!(OTS_PARAM_SETS[6].signature_len(), 1252);
const_assert_eq!(OTS_PARAM_SETS[7].signature_len(), 652);
const_assert_eq!(OTS_PARAM_SETS[11].signature_len(), 1124);
const_assert_eq!(OTS_PARAM_SETS[15].signature_len(), 652);

#[cfg(test)]
mod tests {
    use super::*;

    // Macro generating one lookup test per registered LM-OTS parameter set
    macro_rules! ots_lookup_tests {
        (
            $(($name:ident, $n:expr, $w:expr, $p:expr, $ls:expr)),+ $(,)?
        ) => {
            $(
                paste::paste! {
                    #[test]
                    fn [<lookup_ $name:lower>]() {
                        let params = lookup($name).unwrap();
                        assert_eq!(params.typecode, $name);
                        assert_eq!(params.n, $n);
                        assert_eq!(params.w, $w);
                        assert_eq!(params.p, $p);
                        assert_eq!(params.ls, $ls);
                        assert_eq!(
                            params.signature_len(),
                            4 + $n * ($p + 1),
                        );
                    }
                }
            )+
        };
    }

    ots_lookup_tests! {
        (LMOTS_SHA256_N32_W1, 32, 1, 265, 7),
        (LMOTS_SHA256_N32_W2, 32, 2, 133, 6),
        (LMOTS_SHA256_N32_W4, 32, 4, 67, 4),
        (LMOTS_SHA256_N32_W8, 32, 8, 34, 0),
        (LMOTS_SHA256_N24_W1, 24, 1, 200, 8),
        (LMOTS_SHA256_N24_W2, 24, 2, 101, 6),
        (LMOTS_SHA256_N24_W4, 24, 4, 51, 4),
        (LMOTS_SHA256_N24_W8, 24, 8, 26, 0),
        (LMOTS_SHAKE_N32_W1, 32, 1, 265, 7),
        (LMOTS_SHAKE_N32_W2, 32, 2, 133, 6),
        (LMOTS_SHAKE_N32_W4, 32, 4, 67, 4),
        (LMOTS_SHAKE_N32_W8, 32, 8, 34, 0),
        (LMOTS_SHAKE_N24_W1, 24, 1, 200, 8),
        (LMOTS_SHAKE_N24_W2, 24, 2, 101, 6),
        (LMOTS_SHAKE_N24_W4, 24, 4, 51, 4),
        (LMOTS_SHAKE_N24_W8, 24, 8, 26, 0),
    }

    #[test]
    fn lookup_rejects_reserved() {
        assert_eq!(lookup(0x00), None);
    }

    #[test]
    fn lookup_rejects_unassigned() {
        assert_eq!(lookup(0x11), None);
        assert_eq!(lookup(u32::MAX), None);
    }

    #[test]
    fn typecodes_are_unique() {
        for (i, a) in OTS_PARAM_SETS.iter().enumerate() {
            for b in &OTS_PARAM_SETS[i + 1..] {
                assert_ne!(a.typecode, b.typecode);
            }
        }
    }
}
