use super::EventConfig;
use crate::ffi::bindings as b;

/// A "raw" implementation-specific event.
///
/// The config value is PMU-specific; see your CPU vendor's manual or
/// `/sys/bus/event_source/devices/*/format`.
#[derive(Clone, Debug)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct Raw {
    /// Event config.
    pub config: u64,
}

super::into_event!(Raw, value, {
    let event_config = EventConfig {
        ty: b::PERF_TYPE_RAW,
        config: value.config,
    };

    Self(event_config)
});
