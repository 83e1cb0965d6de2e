use std::mem::{offset_of, transmute};

use super::bindings as b;
use super::{Attr, Metadata, PAGE_SIZE};

// The layouts below are kernel ABI, the kernel addresses the attr by its
// `size` field and the metadata page by fixed offsets.

#[test]
fn test_attr_layout() {
    assert_eq!(size_of::<Attr>(), 136);
    assert_eq!(size_of::<Attr>(), b::PERF_ATTR_SIZE_VER8 as usize);

    assert_eq!(offset_of!(Attr, type_), 0);
    assert_eq!(offset_of!(Attr, size), 4);
    assert_eq!(offset_of!(Attr, config), 8);
    assert_eq!(offset_of!(Attr, __bindgen_anon_1), 16);
    assert_eq!(offset_of!(Attr, sample_type), 24);
    assert_eq!(offset_of!(Attr, read_format), 32);
    assert_eq!(offset_of!(Attr, _bitfield_1), 40);
    assert_eq!(offset_of!(Attr, __bindgen_anon_2), 48);
    assert_eq!(offset_of!(Attr, bp_type), 52);
    assert_eq!(offset_of!(Attr, __bindgen_anon_3), 56);
    assert_eq!(offset_of!(Attr, __bindgen_anon_4), 64);
    assert_eq!(offset_of!(Attr, branch_sample_type), 72);
    assert_eq!(offset_of!(Attr, sample_regs_user), 80);
    assert_eq!(offset_of!(Attr, sample_stack_user), 88);
    assert_eq!(offset_of!(Attr, clockid), 92);
    assert_eq!(offset_of!(Attr, sample_regs_intr), 96);
    assert_eq!(offset_of!(Attr, aux_watermark), 104);
    assert_eq!(offset_of!(Attr, sample_max_stack), 108);
    assert_eq!(offset_of!(Attr, aux_sample_size), 112);
    assert_eq!(offset_of!(Attr, sig_data), 120);
    assert_eq!(offset_of!(Attr, config3), 128);
}

#[test]
fn test_attr_bitfield() {
    let mut attr = Attr::default();
    assert_eq!(attr.disabled(), 0);

    attr.set_disabled(1);
    attr.set_pinned(1);
    attr.set_exclude_kernel(1);
    attr.set_exclude_hv(1);

    assert_eq!(attr.disabled(), 1);
    assert_eq!(attr.pinned(), 1);
    assert_eq!(attr.exclude_kernel(), 1);
    assert_eq!(attr.exclude_hv(), 1);
    assert_eq!(attr.exclude_user(), 0);
    assert_eq!(attr.inherit(), 0);

    // disabled, pinned, exclude_kernel and exclude_hv are bits 0, 2, 5
    // and 6 of the word at byte 40.
    let bytes = unsafe { transmute::<Attr, [u8; 136]>(attr) };
    assert_eq!(bytes[40], 1 | 1 << 2 | 1 << 5 | 1 << 6);
    assert!(bytes[41..48].iter().all(|it| *it == 0));
}

#[test]
fn test_metadata_layout() {
    assert_eq!(size_of::<Metadata>(), 1088);

    assert_eq!(offset_of!(Metadata, version), 0);
    assert_eq!(offset_of!(Metadata, lock), 8);
    assert_eq!(offset_of!(Metadata, index), 12);
    assert_eq!(offset_of!(Metadata, offset), 16);
    assert_eq!(offset_of!(Metadata, time_enabled), 24);
    assert_eq!(offset_of!(Metadata, time_running), 32);
    assert_eq!(offset_of!(Metadata, __bindgen_anon_1), 40);
    assert_eq!(offset_of!(Metadata, pmc_width), 48);
    assert_eq!(offset_of!(Metadata, size), 72);
    assert_eq!(offset_of!(Metadata, data_head), 1024);
    assert_eq!(offset_of!(Metadata, data_tail), 1032);
}

#[test]
fn test_metadata_caps_bits() {
    // cap_user_rdpmc is bit 2 of the capabilities word.
    let mut caps = b::perf_event_mmap_page__bindgen_ty_1__bindgen_ty_1::default();
    caps.set_cap_user_rdpmc(1);

    let caps = b::perf_event_mmap_page__bindgen_ty_1 {
        __bindgen_anon_1: caps,
    };
    assert_eq!(unsafe { caps.capabilities }, 1 << 2);
}

#[test]
fn test_page_covers_metadata() {
    assert!(*PAGE_SIZE >= size_of::<Metadata>());
}
