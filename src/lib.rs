//! Wire-format sizing for HSS/LMS hash-based signatures.
//!
//! Given the per-level LMS and LM-OTS typecodes of an HSS hierarchy (RFC
//! 8554, extended by NIST SP 800-208), this crate reports the exact
//! serialized byte lengths of the public key and of a signature. A signing or
//! verification engine uses these lengths to pre-allocate buffers and to
//! reject wire blobs of the wrong length before any hash-tree work starts.
//! Every typecode is resolved against the registered parameter tables before
//! any arithmetic runs, so an unrecognized or attacker-chosen id can never
//! contribute to a byte count.
//!
//! No hashing, signing, verification, or key management happens here; see
//! [`hss::signature_len`] and [`hss::public_key_len`] for the two queries.

pub mod constants;
pub mod error;
pub mod hss;
pub mod lms;
pub mod ots;

mod types;

pub use error::LengthError;
pub use hss::{HierarchySpec, LevelSpec, public_key_len, signature_len};
pub use types::HashAlg;
