use std::sync::LazyLock;

pub mod bindings;
#[cfg(target_arch = "x86_64")]
pub mod pmc;
pub mod syscall;

pub static PAGE_SIZE: LazyLock<usize> = LazyLock::new(|| {
    let name = libc::_SC_PAGE_SIZE;
    let size = unsafe { libc::sysconf(name) };
    size as _
});

pub type Attr = bindings::perf_event_attr;
pub type Metadata = bindings::perf_event_mmap_page;

#[cfg(test)]
mod test;
