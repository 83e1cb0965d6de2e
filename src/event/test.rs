use super::hw::{Hardware, Op, OpResult, Type};
use super::raw::Raw;
use super::sw::Software;
use super::Event;
use crate::ffi::bindings as b;

#[test]
fn test_from_hardware() {
    let Event(config): Event = Hardware::CpuCycle.into();
    assert_eq!(config.ty, b::PERF_TYPE_HARDWARE);
    assert_eq!(config.config, b::PERF_COUNT_HW_CPU_CYCLES as u64);

    let Event(config): Event = Hardware::Instr.into();
    assert_eq!(config.ty, b::PERF_TYPE_HARDWARE);
    assert_eq!(config.config, b::PERF_COUNT_HW_INSTRUCTIONS as u64);

    let Event(config): Event = Hardware::BranchMiss.into();
    assert_eq!(config.config, b::PERF_COUNT_HW_BRANCH_MISSES as u64);
}

#[test]
fn test_cache_config_encoding() {
    // id | (op << 8) | (op_result << 16)
    let hw = Hardware::Cache(Type::L1d, Op::Read, OpResult::Miss);
    let Event(config): Event = hw.into();
    assert_eq!(config.ty, b::PERF_TYPE_HW_CACHE);
    assert_eq!(config.config, 0x10000);

    let hw = Hardware::Cache(Type::Bpu, Op::Write, OpResult::Access);
    let Event(config): Event = hw.into();
    assert_eq!(config.config, 0x105);

    let hw = Hardware::Cache(Type::Ll, Op::Prefetch, OpResult::Miss);
    let Event(config): Event = hw.into();
    assert_eq!(config.config, 0x10202);
}

#[test]
fn test_from_software() {
    let Event(config): Event = Software::PageFault.into();
    assert_eq!(config.ty, b::PERF_TYPE_SOFTWARE);
    assert_eq!(config.config, b::PERF_COUNT_SW_PAGE_FAULTS as u64);

    let Event(config): Event = Software::CgroupSwitch.into();
    assert_eq!(config.config, b::PERF_COUNT_SW_CGROUP_SWITCHES as u64);
}

#[test]
fn test_from_raw() {
    // LLC references on recent Intel cores.
    let Event(config): Event = Raw { config: 0x4f2e }.into();
    assert_eq!(config.ty, b::PERF_TYPE_RAW);
    assert_eq!(config.config, 0x4f2e);
}

#[cfg(feature = "event-names")]
mod name {
    use crate::event::name::{known_events, resolve};
    use crate::event::Event;
    use crate::ffi::bindings as b;

    #[test]
    fn test_known_events_complete() {
        let events = known_events();
        // 10 hardware + 12 software + 7 caches * 3 ops * 2 results.
        assert_eq!(events.len(), 64);

        let mut names: Vec<_> = events.iter().map(|it| it.name.clone()).collect();
        names.sort();
        names.dedup();
        assert_eq!(names.len(), 64);
    }

    #[test]
    fn test_resolve_round_trips() {
        for it in known_events() {
            let Event(resolved) = resolve(&it.name).unwrap();
            let Event(expect) = it.event;
            assert_eq!(resolved.ty, expect.ty, "{}", it.name);
            assert_eq!(resolved.config, expect.config, "{}", it.name);
        }
    }

    #[test]
    fn test_resolve_cache_names() {
        let Event(config) = resolve("L1-dcache-load-misses").unwrap();
        assert_eq!(config.ty, b::PERF_TYPE_HW_CACHE);
        assert_eq!(config.config, 0x10000);

        let Event(config) = resolve("branch-loads").unwrap();
        assert_eq!(config.ty, b::PERF_TYPE_HW_CACHE);
        assert_eq!(config.config, 0x5);
    }

    #[test]
    fn test_resolve_unknown() {
        assert!(resolve("flux-capacitor-charges").is_none());
        assert!(resolve("").is_none());
    }
}
