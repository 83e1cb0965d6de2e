pub mod hw;
#[cfg(feature = "event-names")]
pub mod name;
pub mod raw;
pub mod sw;

#[derive(Clone, Debug)]
pub struct Event(pub(super) EventConfig);

#[derive(Clone, Debug)]
pub(super) struct EventConfig {
    pub ty: u32,
    pub config: u64,
}

macro_rules! into_event {
    ($ty:ty, $value:ident, $impl: expr) => {
        impl From<&$ty> for crate::event::Event {
            fn from($value: &$ty) -> Self {
                $impl
            }
        }

        impl From<$ty> for crate::event::Event {
            fn from(value: $ty) -> Self {
                (&value).into()
            }
        }
    };
}
use into_event;

#[cfg(test)]
mod test;
