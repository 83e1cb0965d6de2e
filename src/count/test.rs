use super::{counting_attr, Counter, OpenError};
use crate::event::hw::Hardware;
use crate::event::sw::Software;
use crate::event::Event;
use crate::ffi::{bindings as b, Attr};

// Not every environment grants access to the PMU, so tests that need a
// real counter skip quietly when the open fails.
fn try_open(event: impl Into<Event>, group: Option<&Counter>) -> Option<Counter> {
    Counter::new(event, group).ok()
}

// Assembly keeps the instruction count exact across debug and release
// builds: two instructions per iteration.
#[inline(never)]
fn spin(mut count: u64) {
    unsafe {
        core::arch::asm!(
            "2:",
            "sub {0}, 1",
            "jnz 2b",
            inout(reg) count,
        )
    }
    assert_eq!(count, 0);
}

#[test]
fn test_closed_handle() {
    let mut counter = Counter::closed();
    assert!(!counter.is_valid());
    assert!(counter.file().is_none());
    assert_eq!(counter.read(), 0);
    assert_eq!(counter.read(), 0);

    let err = counter.enable().unwrap_err();
    assert_eq!(err.raw_os_error(), Some(libc::EBADF));
    let err = counter.disable().unwrap_err();
    assert_eq!(err.raw_os_error(), Some(libc::EBADF));

    counter.close();
    counter.close();
    assert!(!counter.is_valid());
}

#[test]
fn test_default_is_closed() {
    let counter = Counter::default();
    assert!(!counter.is_valid());
    assert_eq!(counter.read(), 0);
}

#[test]
fn test_counting_attr() {
    let attr = counting_attr(Hardware::Instr.into(), true);
    assert_eq!(attr.size, size_of::<Attr>() as u32);
    assert_eq!(attr.type_, b::PERF_TYPE_HARDWARE);
    assert_eq!(attr.config, b::PERF_COUNT_HW_INSTRUCTIONS as u64);
    assert_eq!(attr.disabled(), 1);
    assert_eq!(attr.exclude_kernel(), 1);
    assert_eq!(attr.exclude_hv(), 1);
    assert_eq!(attr.exclude_user(), 0);
    assert_eq!(attr.pinned(), 1);

    let attr = counting_attr(Hardware::Instr.into(), false);
    assert_eq!(attr.pinned(), 0);
}

#[test]
fn test_open_error_classes() {
    use std::io::Error;

    let e = OpenError::from_open(Error::from_raw_os_error(libc::EMFILE));
    assert!(matches!(e, OpenError::ResourceExhaustion(_)));
    let e = OpenError::from_open(Error::from_raw_os_error(libc::EACCES));
    assert!(matches!(e, OpenError::PermissionDenied(_)));
    let e = OpenError::from_open(Error::from_raw_os_error(libc::ENOENT));
    assert!(matches!(e, OpenError::UnsupportedEvent(_)));
    let e = OpenError::from_open(Error::from_raw_os_error(libc::EINTR));
    assert!(matches!(e, OpenError::Other(_)));
}

#[test]
fn test_invalid_event() {
    let mut attr = Attr {
        size: b::PERF_ATTR_SIZE_VER0,
        ..Default::default()
    };
    attr.type_ = u32::MAX;
    attr.set_exclude_kernel(1);

    // Hardened kernels may refuse before they look at the event type.
    let err = Counter::with_attr(&attr, None).unwrap_err();
    assert!(matches!(
        err,
        OpenError::UnsupportedEvent(_) | OpenError::PermissionDenied(_)
    ));
}

#[test]
fn test_close_invalidates() {
    let Some(mut counter) = try_open(Software::CpuClock, None) else {
        return;
    };
    assert!(counter.is_valid());
    assert!(counter.file().is_some());

    counter.close();
    assert!(!counter.is_valid());
    assert_eq!(counter.read(), 0);
    assert!(counter.enable().is_err());

    counter.close();
    assert!(!counter.is_valid());
}

#[test]
fn test_read_before_enable() {
    let Some(counter) = try_open(Hardware::Instr, None) else {
        return;
    };
    // A disabled counter occupies no hardware register.
    assert_eq!(counter.read(), 0);
}

#[test]
fn test_count_instructions() {
    let Some(counter) = try_open(Hardware::Instr, None) else {
        return;
    };
    const ITERS: u64 = 1_000_000;

    counter.enable().unwrap();
    let before = counter.read();
    spin(ITERS);
    let after = counter.read();
    counter.disable().unwrap();

    let delta = after - before;
    assert!(delta >= 2 * ITERS);
    assert!(delta <= 2 * ITERS + 10_000); // read and call overhead
}

#[test]
fn test_disable_freezes_reads() {
    let Some(counter) = try_open(Hardware::Instr, None) else {
        return;
    };

    counter.enable().unwrap();
    let first = counter.read();
    spin(10_000);
    let second = counter.read();
    counter.disable().unwrap();

    assert!(second > first);
    // Off the PMU again, reads see the unbound register.
    assert_eq!(counter.read(), 0);
    assert_eq!(counter.read(), 0);
}

#[test]
fn test_group_enable() {
    let Some(leader) = try_open(Hardware::Instr, None) else {
        return;
    };
    let Some(member) = try_open(Hardware::CpuCycle, Some(&leader)) else {
        return;
    };

    // Enabling the leader starts the whole group.
    leader.enable().unwrap();
    spin(10_000);
    let instrs = leader.read();
    let cycles = member.read();
    leader.disable().unwrap();

    assert!(instrs > 0);
    assert!(cycles > 0);
}

#[test]
fn test_closed_leader_opens_standalone() {
    let closed = Counter::closed();
    let Some(counter) = try_open(Software::CpuClock, Some(&closed)) else {
        return;
    };
    assert!(counter.is_valid());
}
