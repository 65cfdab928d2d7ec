//! The compare-select (clip) operations and their flag state machine.
//!
//! VCL and VCR pick, per lane, between the first operand and (a negation
//! of) the swizzled second operand, steering by and rebuilding the VCC
//! compare bits. VCL additionally consumes VCO/VCE to continue a multi-word
//! comparison started by an earlier instruction; both clear VCO and VCE on
//! the way out.

use crate::swizzle::source_lane;
use crate::vu::{Accumulator, Flags, VectorRegister};

/// Clip select, carry-aware. Lanes whose VCO carry bit is set continue the
/// low half of a double-width compare: the fresh less-or-equal test only
/// runs when the lane also compared equal, and folds in the VCE
/// carry-extension bit. Lanes without carry run a plain unsigned compare.
pub fn vcl(vs: VectorRegister, vt: VectorRegister, element: usize, acc: &mut Accumulator, flags: &mut Flags) -> VectorRegister {
    let mut out = [0i16; 8];

    for lane in 0..8 {
        let s = vs[lane] as u16;
        let t = vt[source_lane(element, lane)] as u16;
        let eq = !flags.not_equal(lane);

        let le;
        let ge;
        let result;
        if flags.carry(lane) {
            ge = flags.greater_equal(lane);
            if eq {
                let sum = u32::from(s) + u32::from(t);
                let low_zero = sum & 0xFFFF == 0;
                let no_carry = sum & 0xFFFF_0000 == 0;
                let ce = flags.extension(lane);
                le = (ce && (low_zero || no_carry)) || (!ce && low_zero && no_carry);
            } else {
                le = flags.less_equal(lane);
            }
            result = if le { t.wrapping_neg() } else { s };
        } else {
            le = flags.less_equal(lane);
            ge = if eq { s >= t } else { flags.greater_equal(lane) };
            result = if ge { t } else { s };
        }

        acc.lo[lane] = result;
        out[lane] = result as i16;
        flags.set_compare(lane, ge, le);
    }

    flags.vco = 0;
    flags.vce = 0;
    out
}

/// Clip select against one's-complement bounds; no carry chain. VCC is
/// rebuilt from scratch and VCO/VCE are cleared without being read.
pub fn vcr(vs: VectorRegister, vt: VectorRegister, element: usize, acc: &mut Accumulator, flags: &mut Flags) -> VectorRegister {
    let mut out = [0i16; 8];
    flags.vcc = 0;

    for lane in 0..8 {
        let s = vs[lane];
        let t = vt[source_lane(element, lane)];

        let le;
        let ge;
        let result;
        if (s ^ t) < 0 {
            ge = t < 0;
            le = i32::from(s) + i32::from(t) < 0; // s + t + 1 <= 0
            result = if le { !t } else { s };
        } else {
            // a negative vt clips from below, a non-negative one from above
            le = t < 0;
            ge = s >= t;
            result = if le || ge { t } else { s };
        }

        acc.lo[lane] = result as u16;
        out[lane] = result;
        flags.set_compare(lane, ge, le);
    }

    flags.vco = 0;
    flags.vce = 0;
    out
}
