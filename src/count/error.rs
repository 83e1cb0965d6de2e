use std::io;

use thiserror::Error;

/// Why a counter could not be opened.
#[derive(Debug, Error)]
pub enum OpenError {
    /// The process descriptor table or the PMU itself is out of slots.
    #[error("counter resources exhausted")]
    ResourceExhaustion(#[source] io::Error),

    /// The kernel denied access to the event, usually because of
    /// `/proc/sys/kernel/perf_event_paranoid`.
    #[error("permission to open the event denied")]
    PermissionDenied(#[source] io::Error),

    /// The event is unknown to this kernel or PMU, or the attr is malformed.
    #[error("event not supported by this kernel or PMU")]
    UnsupportedEvent(#[source] io::Error),

    /// The descriptor opened but the counter metadata page could not be
    /// mapped. The descriptor has already been released.
    #[error("failed to map the counter metadata page")]
    MappingFailure(#[source] io::Error),

    /// The kernel does not permit user-space register reads for this event
    /// (`cap_user_rdpmc` is clear in the metadata page).
    #[error("user-space counter reads not permitted for this event")]
    RdpmcUnavailable,

    #[error(transparent)]
    Other(io::Error),
}

impl OpenError {
    /// Classifies a failed `perf_event_open` by its errno.
    pub(crate) fn from_open(e: io::Error) -> Self {
        match e.raw_os_error() {
            Some(libc::EMFILE | libc::ENFILE | libc::ENOSPC | libc::EBUSY) => {
                Self::ResourceExhaustion(e)
            }
            Some(libc::EACCES | libc::EPERM) => Self::PermissionDenied(e),
            Some(
                libc::EINVAL
                | libc::ENOENT
                | libc::ENODEV
                | libc::EOPNOTSUPP
                | libc::ENOSYS
                | libc::E2BIG
                | libc::EOVERFLOW,
            ) => Self::UnsupportedEvent(e),
            _ => Self::Other(e),
        }
    }
}
