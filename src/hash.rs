//! Identity hash for error codes.
//!
//! Hashes a `(category identity, value)` pair with two rounds of 64-bit
//! FNV-1a: one round for the category identity, one for the value. The
//! inputs are exactly the ones `ErrorCode` equality looks at, so equal
//! codes always hash equal.
//!
//! # Zero-Allocation Guarantee
//!
//! Pure arithmetic on two integers. No heap, no virtual calls beyond the
//! single `id()` lookup needed to obtain the category identity.

/// FNV-1a 64-bit offset basis.
pub const FNV_OFFSET_BASIS: u64 = 0xCBF2_9CE4_8422_2325;

/// FNV-1a 64-bit prime.
pub const FNV_PRIME: u64 = 0x0000_0100_0000_01B3;

/// Mix a category identity and a code value into a 64-bit hash.
///
/// The value contributes its 32-bit two's-complement pattern, so `-1`
/// and `0xFFFF_FFFF` hash identically (they are the same `i32`).
#[inline]
pub const fn hash_identity(category_identity: u64, value: i32) -> u64 {
    let mut hv = FNV_OFFSET_BASIS;

    hv ^= category_identity;
    hv = hv.wrapping_mul(FNV_PRIME);

    hv ^= value as u32 as u64;
    hv = hv.wrapping_mul(FNV_PRIME);

    hv
}
