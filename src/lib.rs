//! Arithmetic core of an RSP-style fixed-point vector co-processor.
//!
//! Eight 16-bit lanes, a persistent 48-bit accumulator per lane (held as
//! low/mid/high words), and the VCO/VCC/VCE flag registers. The crate
//! covers the multiply / multiply-accumulate family (VMULF through VMADH)
//! and the clip compare-selects (VCL, VCR), reproducing the hardware's
//! carry propagation and saturation behavior bit for bit, including the
//! -32768 * -32768 multiply and the offset saturation of the low-word
//! accumulators.
//!
//! The instruction decoder is the caller's business: it resolves register
//! indices and element codes and invokes one operation at a time. All state
//! lives in a [`VectorUnit`] value, so independent units don't interact.

pub mod clamp;
pub mod multiply;
pub mod select;
pub mod sse2_wrapper;
pub mod swizzle;
pub mod vu;

pub use vu::{Accumulator, Flags, VectorRegister, VectorUnit};
