use std::fs::File;
use std::io::{self, Error};
use std::os::fd::AsRawFd;

use page::MetaPage;

use crate::event::Event;
use crate::ffi::syscall::{self, ioctl_arg, perf_event_open};
use crate::ffi::{bindings as b, Attr};

mod error;
mod page;

pub use error::*;

#[cfg(test)]
mod test;

/// Hardware performance counter.
///
/// A counter owns a perf event fd plus the kernel metadata page mapped over
/// it, through which [`read`][Self::read] obtains the count with a couple of
/// loads and one `rdpmc`, without entering the kernel.
///
/// The handle is bound to the thread that opened it and is neither `Send`
/// nor `Sync`.
///
/// # Examples
///
/// ```rust, no_run
/// use perf_counter::count::Counter;
/// use perf_counter::event::hw::Hardware;
///
/// // Count retired instructions on the calling thread.
/// let counter = Counter::new(Hardware::Instr, None).unwrap();
///
/// counter.enable().unwrap();
/// let before = counter.read();
/// let sum = (0..10_000).sum::<u64>();
/// let after = counter.read();
/// counter.disable().unwrap();
///
/// println!("{} instructions (sum {})", after - before, sum);
/// ```
#[derive(Debug)]
pub struct Counter {
    inner: Option<Inner>,
}

// Field order carries the teardown order on implicit drop: the page must
// be unmapped before the descriptor is released.
#[derive(Debug)]
struct Inner {
    page: MetaPage,
    perf: File,
}

impl Counter {
    /// Opens a counter for `event` on the calling thread, any CPU.
    ///
    /// The counter starts disabled and counts user space only. Without a
    /// group leader it is pinned to the PMU; as a group member it is
    /// scheduled together with its leader instead.
    pub fn new(event: impl Into<Event>, group: Option<&Counter>) -> Result<Self, OpenError> {
        let group_fd = raw_group_fd(group);
        let attr = counting_attr(event.into(), group_fd == -1);
        Self::open(&attr, group_fd)
    }

    /// Opens a counter from a raw event attr on the calling thread, any CPU.
    ///
    /// The attr is passed to the kernel as-is, every field including `size`
    /// is up to the caller. [`Attr`][crate::Attr] and the raw bindings are
    /// re-exported at the crate root for this.
    pub fn with_attr(attr: &Attr, group: Option<&Counter>) -> Result<Self, OpenError> {
        Self::open(attr, raw_group_fd(group))
    }

    fn open(attr: &Attr, group_fd: i32) -> Result<Self, OpenError> {
        let flags = b::PERF_FLAG_FD_CLOEXEC;
        // pid 0, cpu -1: the calling thread, on any CPU.
        let perf =
            perf_event_open(attr, 0, -1, group_fd, flags).map_err(OpenError::from_open)?;

        let page = match MetaPage::new(&perf) {
            Ok(page) => page,
            // Dropping `perf` closes the descriptor before we return.
            Err(e) => return Err(OpenError::MappingFailure(e)),
        };

        // Only PMU-backed events are read through the hardware register.
        // For those, a kernel that forbids user-space `rdpmc` would pin
        // every read at 0, so fail the open instead.
        if wants_rdpmc(attr.type_) && !page.user_rdpmc_capable() {
            return Err(OpenError::RdpmcUnavailable);
        }

        log::debug!(
            "Opened counter: type {}, config {:#x}, group fd {}",
            attr.type_,
            attr.config,
            group_fd
        );

        Ok(Self {
            inner: Some(Inner { page, perf }),
        })
    }

    /// An explicitly closed handle.
    ///
    /// Reads return 0, control requests fail with `EBADF`, and
    /// [`close`][Self::close] is a no-op.
    pub fn closed() -> Self {
        Self { inner: None }
    }

    /// The underlying perf event file, or `None` on a closed handle.
    pub fn file(&self) -> Option<&File> {
        self.inner.as_ref().map(|it| &it.perf)
    }

    fn open_file(&self) -> io::Result<&File> {
        self.file()
            .ok_or_else(|| Error::from_raw_os_error(libc::EBADF))
    }

    /// Starts counting, for this counter and any group it leads.
    pub fn enable(&self) -> io::Result<()> {
        let file = self.open_file()?;
        ioctl_arg(file, b::PERF_IOC_OP_ENABLE as _, b::PERF_IOC_FLAG_GROUP as _)?;
        Ok(())
    }

    /// Stops counting, for this counter and any group it leads.
    pub fn disable(&self) -> io::Result<()> {
        let file = self.open_file()?;
        ioctl_arg(file, b::PERF_IOC_OP_DISABLE as _, b::PERF_IOC_FLAG_GROUP as _)?;
        Ok(())
    }

    /// Whether the handle holds an open descriptor and a mapped metadata
    /// page.
    pub fn is_valid(&self) -> bool {
        self.inner.is_some()
    }

    /// Current counter value.
    ///
    /// The value comes from the hardware register published through the
    /// metadata page, the kernel is never entered. Returns 0 when the
    /// handle is closed or the counter does not occupy a hardware register
    /// right now (disabled, scheduled out, or a software event).
    pub fn read(&self) -> u64 {
        match &self.inner {
            Some(inner) => inner.page.read_counter(),
            None => 0,
        }
    }

    /// Closes the handle, unmapping the metadata page and then releasing
    /// the descriptor. Closing a closed handle is a no-op.
    pub fn close(&mut self) {
        if let Some(Inner { page, perf }) = self.inner.take() {
            drop(page);
            if let Err(e) = syscall::close(perf) {
                log::warn!("Failed to close counter descriptor: {}", e);
            }
        }
    }
}

impl Default for Counter {
    fn default() -> Self {
        Self::closed()
    }
}

impl Drop for Counter {
    fn drop(&mut self) {
        self.close();
    }
}

fn counting_attr(event: Event, standalone: bool) -> Attr {
    let Event(config) = event;

    let mut attr = Attr {
        size: size_of::<Attr>() as _,
        ..Default::default()
    };

    attr.type_ = config.ty;
    attr.config = config.config;

    attr.set_disabled(1);
    attr.set_exclude_kernel(1);
    attr.set_exclude_hv(1);
    // Pinning keeps a standalone counter on the PMU instead of letting the
    // kernel multiplex it. Group members are scheduled with their leader
    // and stay unpinned.
    attr.set_pinned(standalone as _);

    attr
}

fn wants_rdpmc(ty: u32) -> bool {
    matches!(
        ty,
        b::PERF_TYPE_HARDWARE | b::PERF_TYPE_HW_CACHE | b::PERF_TYPE_RAW
    )
}

// A closed leader contributes no descriptor, the open proceeds standalone.
fn raw_group_fd(group: Option<&Counter>) -> i32 {
    match group.and_then(|it| it.inner.as_ref()) {
        Some(inner) => inner.perf.as_raw_fd(),
        None => -1,
    }
}
