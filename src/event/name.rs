//! Perf-style event names.
//!
//! Names follow the perf tool's symbolic event list (`perf list`), e.g.
//! `cpu-cycles`, `context-switches`, `L1-dcache-load-misses`.

use super::hw::{Hardware, Op, OpResult, Type};
use super::sw::Software;
use super::Event;

/// An event together with its perf-style name.
#[derive(Clone, Debug)]
pub struct NamedEvent {
    pub name: String,
    pub event: Event,
}

const HARDWARE: &[(&str, Hardware)] = &[
    ("cpu-cycles", Hardware::CpuCycle),
    ("instructions", Hardware::Instr),
    ("cache-references", Hardware::CacheAccess),
    ("cache-misses", Hardware::CacheMiss),
    ("branch-instructions", Hardware::BranchInstr),
    ("branch-misses", Hardware::BranchMiss),
    ("bus-cycles", Hardware::BusCycle),
    ("stalled-cycles-frontend", Hardware::FrontendStalledCycle),
    ("stalled-cycles-backend", Hardware::BackendStalledCycle),
    ("ref-cycles", Hardware::RefCpuCycle),
];

const SOFTWARE: &[(&str, Software)] = &[
    ("cpu-clock", Software::CpuClock),
    ("task-clock", Software::TaskClock),
    ("page-faults", Software::PageFault),
    ("context-switches", Software::CtxSwitch),
    ("cpu-migrations", Software::CpuMigration),
    ("minor-faults", Software::MinorPageFault),
    ("major-faults", Software::MajorPageFault),
    ("alignment-faults", Software::AlignFault),
    ("emulation-faults", Software::EmuFault),
    ("dummy", Software::Dummy),
    ("bpf-output", Software::BpfOutput),
    ("cgroup-switches", Software::CgroupSwitch),
];

const CACHES: &[(&str, Type)] = &[
    ("L1-dcache", Type::L1d),
    ("L1-icache", Type::L1i),
    ("LLC", Type::Ll),
    ("dTLB", Type::Dtlb),
    ("iTLB", Type::Itlb),
    ("branch", Type::Bpu),
    ("node", Type::Node),
];

const CACHE_OPS: &[(&str, Op)] = &[
    ("load", Op::Read),
    ("store", Op::Write),
    ("prefetch", Op::Prefetch),
];

fn cache_name(cache: &str, op: &str, result: &OpResult) -> String {
    match result {
        OpResult::Access => format!("{}-{}s", cache, op),
        OpResult::Miss => format!("{}-{}-misses", cache, op),
    }
}

/// Every event this crate can open by name: the generalized hardware and
/// software events plus the full hardware cache grid.
pub fn known_events() -> Vec<NamedEvent> {
    let mut events = Vec::new();

    for (name, hw) in HARDWARE {
        events.push(NamedEvent {
            name: (*name).into(),
            event: hw.into(),
        });
    }

    for (name, sw) in SOFTWARE {
        events.push(NamedEvent {
            name: (*name).into(),
            event: sw.into(),
        });
    }

    for (cache, ty) in CACHES {
        for (op_name, op) in CACHE_OPS {
            for result in [OpResult::Access, OpResult::Miss] {
                let name = cache_name(cache, op_name, &result);
                let hw = Hardware::Cache(ty.clone(), op.clone(), result);
                events.push(NamedEvent {
                    name,
                    event: hw.into(),
                });
            }
        }
    }

    events
}

/// Looks an event up by its perf-style name.
pub fn resolve(name: &str) -> Option<Event> {
    known_events()
        .into_iter()
        .find(|it| it.name == name)
        .map(|it| it.event)
}
