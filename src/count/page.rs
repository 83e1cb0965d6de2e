use std::fs::File;
use std::io::Result;
use std::ptr::{addr_of, null_mut, NonNull};
use std::sync::atomic::{compiler_fence, AtomicI64, AtomicU32, AtomicU64, Ordering};

use crate::ffi::syscall::{mmap, munmap};
use crate::ffi::{bindings as b, pmc, Metadata, PAGE_SIZE};

/// Counter metadata page, mapped read-only over the perf event fd.
///
/// The kernel publishes everything a user-space read needs here: a seqlock
/// word (`lock`), the hardware register the counter currently occupies
/// (`index`, 0 if none) and a correction to add on top of the raw register
/// value (`offset`).
///
/// https://github.com/torvalds/linux/blob/v6.13/include/uapi/linux/perf_event.h#L580
#[derive(Debug)]
pub(super) struct MetaPage {
    ptr: NonNull<Metadata>,
    len: usize,
}

impl MetaPage {
    pub fn new(perf: &File) -> Result<Self> {
        let len = *PAGE_SIZE;
        // https://github.com/torvalds/linux/blob/v6.13/kernel/events/core.c#L6582
        let flags = libc::MAP_SHARED;
        let ptr = unsafe { mmap(null_mut(), len, libc::PROT_READ, flags, perf, 0) }?;
        Ok(Self { ptr, len })
    }

    /// Whether the kernel permits reading this counter with `rdpmc`
    /// from user space.
    pub fn user_rdpmc_capable(&self) -> bool {
        let ptr = self.ptr.as_ptr();
        let caps_ptr = unsafe { addr_of!((*ptr).__bindgen_anon_1) };
        let caps = unsafe { (*(caps_ptr as *const AtomicU64)).load(Ordering::Relaxed) };
        let caps = b::perf_event_mmap_page__bindgen_ty_1 { capabilities: caps };
        unsafe { caps.__bindgen_anon_1 }.cap_user_rdpmc() == 1
    }

    /// Lock-free read of the current counter value.
    ///
    /// Retries until the page was stable around the register read (the
    /// kernel bumps `lock` on every update). Never blocks and never
    /// enters the kernel.
    pub fn read_counter(&self) -> u64 {
        let ptr = self.ptr.as_ptr();

        // The kernel updates the page at any time, so all field loads go
        // through atomics. `Relaxed` is enough, ordering against the
        // seqlock word is enforced by the fences below.
        let (lock, index, offset) = unsafe {
            (
                &*(addr_of!((*ptr).lock) as *const AtomicU32),
                &*(addr_of!((*ptr).index) as *const AtomicU32),
                &*(addr_of!((*ptr).offset) as *const AtomicI64),
            )
        };

        pmc::lfence();
        loop {
            let seq = lock.load(Ordering::Relaxed);
            compiler_fence(Ordering::SeqCst);

            let idx = index.load(Ordering::Relaxed);
            let off = offset.load(Ordering::Relaxed);

            // Zero means the counter does not occupy a hardware register
            // right now (disabled or scheduled out).
            if idx == 0 {
                return 0;
            }

            let raw = pmc::rdpmc(idx - 1);

            compiler_fence(Ordering::SeqCst);
            if lock.load(Ordering::Relaxed) == seq {
                pmc::lfence();
                return raw.wrapping_add(off as u64);
            }
        }
    }
}

impl Drop for MetaPage {
    fn drop(&mut self) {
        if let Err(e) = unsafe { munmap(self.ptr.as_ptr(), self.len) } {
            log::warn!("Failed to unmap counter metadata page: {}", e);
        }
    }
}
