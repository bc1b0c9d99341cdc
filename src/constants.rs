//! Constants as defined in RFC 8554 and NIST SP 800-208

/// The length of the identifier `I`
pub const ID_LEN: usize = 16;

/// Serialized width of an algorithm typecode
pub const TYPECODE_LEN: usize = 4;

/// Serialized width of the level-count field heading an HSS public key or
/// signature
pub const LEVELS_LEN: usize = 4;

/// The deepest hierarchy allowed by RFC 8554 section 6
pub const MAX_HSS_LEVELS: usize = 8;
