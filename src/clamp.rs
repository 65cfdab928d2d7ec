//! Accumulator saturation rules shared by the multiply/accumulate family.
//!
//! All three rules look only at the mid and high accumulator words (plus the
//! low word for the low-result flavor). The mid/high pair is treated as one
//! signed 32-bit value per lane; a value is "in range" exactly when the mid
//! word survives a pack-with-signed-saturation unchanged.

use crate::sse2_wrapper::*;

/// Saturate the signed 32-bit (mid, high) pair of each lane to 16 bits:
/// the mid word itself when high is its sign-extension, otherwise 0x7FFF or
/// 0x8000.
#[inline(always)]
pub fn clamp_signed_mid(md: __wm128i, hi: __wm128i) -> __wm128i {
    let lo_pairs = _wmm_unpacklo_epi16(md, hi);
    let hi_pairs = _wmm_unpackhi_epi16(md, hi);
    _wmm_packs_epi32(lo_pairs, hi_pairs)
}

/// Low-word result used by the unsigned-product accumulators (VMADL/VMADN):
/// the low accumulator word while the mid/high pair is in range, otherwise
/// the saturated value XORed with 0x8000 (positive overflow reads 0xFFFF,
/// negative overflow reads 0x0000).
///
/// "In range" is decided by comparing the mid word against the saturated
/// value, not by a true 48-bit range test. An out-of-range accumulator whose
/// mid word happens to land exactly on the clamp bound therefore passes the
/// low word through untouched, which is what the hardware does.
#[inline(always)]
pub fn clamp_signed_low(lo: __wm128i, md: __wm128i, hi: __wm128i) -> __wm128i {
    let clamped = clamp_signed_mid(md, hi);
    let in_range = _wmm_cmpeq_epi16(clamped, md);
    let ones = _wmm_cmpeq_epi16(md, md);
    let out_of_range = _wmm_xor_si128(in_range, ones);

    let keep = _wmm_and_si128(lo, in_range);
    let sat = _wmm_and_si128(clamped, out_of_range);
    let merged = _wmm_or_si128(sat, keep);
    _wmm_xor_si128(merged, _wmm_slli_epi16::<15>(out_of_range))
}

/// Unsigned result for VMULU/VMACU: values below zero read 0x0000, values
/// that saturate the signed pack upward read 0xFFFF, anything else reads the
/// mid word. Shares the mid-word boundary behavior of [`clamp_signed_low`].
#[inline(always)]
pub fn clamp_unsigned_mid(md: __wm128i, hi: __wm128i) -> __wm128i {
    let clamped = clamp_signed_mid(md, hi);
    let saturated_up = _wmm_cmplt_epi16(md, clamped);
    let non_negative = _wmm_andnot_si128(_wmm_srai_epi16::<15>(clamped), clamped);
    _wmm_or_si128(non_negative, saturated_up)
}
