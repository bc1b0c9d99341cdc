//! Shared types

/// The hash family behind a registered parameter set.
///
/// The digest width is carried separately (`n` for LM-OTS, `m` for LMS)
/// because SP 800-208 registers truncated variants of both families under
/// their own typecodes.
#[derive(Clone, Copy, Debug, Eq, PartialEq)]
pub enum HashAlg {
    /// SHA-256, possibly truncated to 192 bits
    Sha256,
    /// SHAKE256, read at 256 or 192 bits of output
    Shake256,
}
