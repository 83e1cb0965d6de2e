//! Direct access to hardware counter registers from user space.

use core::arch::asm;
use core::arch::x86_64::_mm_lfence;

/// Reads hardware counter register `reg` with the `rdpmc` instruction.
///
/// The counter must be scheduled on the current CPU and user-space reads
/// must be permitted, otherwise the instruction faults. The kernel
/// guarantees both whenever a mapped counter publishes a non-zero
/// register id.
#[inline(always)]
pub fn rdpmc(reg: u32) -> u64 {
    let lo: u32;
    let hi: u32;
    unsafe {
        asm!(
            "rdpmc",
            in("ecx") reg,
            lateout("eax") lo,
            lateout("edx") hi,
            options(nostack),
        );
    }
    lo as u64 | (hi as u64) << 32
}

/// Load-load execution fence (`lfence`), keeps the register read from
/// being reordered at the instruction level around the sequence checks.
#[inline(always)]
pub fn lfence() {
    unsafe { _mm_lfence() }
}
