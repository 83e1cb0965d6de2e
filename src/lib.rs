//! Low-overhead hardware performance counters with lock-free user-space reads.
//!
//! A [`Counter`][count::Counter] pairs a `perf_event_open` descriptor with the
//! kernel metadata page mapped over it. Opening configures the counter,
//! enable/disable start and stop it (group-wide), and reads run entirely in
//! user space: a seqlock around `rdpmc`, no system call on the hot path.
//!
//! ## Example
//!
//! Count how many instructions the (inefficient) fibonacci calculation
//! executes.
//!
//! ```rust, no_run
//! use perf_counter::count::Counter;
//! use perf_counter::event::hw::Hardware;
//!
//! // Count retired instructions on the calling thread.
//! let counter = Counter::new(Hardware::Instr, None).unwrap();
//!
//! counter.enable().unwrap(); // Start the counter.
//!
//! fn fib(n: usize) -> usize {
//!     match n {
//!         0 => 0,
//!         1 => 1,
//!         n => fib(n - 1) + fib(n - 2),
//!     }
//! }
//! let before = counter.read();
//! std::hint::black_box(fib(30));
//! let after = counter.read();
//!
//! counter.disable().unwrap(); // Stop the counter.
//!
//! println!("{} instructions retired", after - before);
//! ```
//!
//! ## Requirements
//!
//! Reads rely on the `rdpmc` instruction and on the kernel publishing counter
//! state through the mapped page, so this crate targets Linux on x86-64.
//! Access to the PMU is subject to `/proc/sys/kernel/perf_event_paranoid`.

#[cfg(not(any(target_os = "linux", target_os = "android")))]
compile_error!("This crate only supports Linux and Android.");

#[cfg(not(target_arch = "x86_64"))]
compile_error!("Counter reads require the x86-64 `rdpmc` instruction.");

pub mod count;
pub mod event;
mod ffi;

pub use ffi::{bindings, Attr};
