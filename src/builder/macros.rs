//! Macros for declaring state and event sets.

/// Declare an event enum together with its `Kind` tag enum and `Event` impl.
///
/// Variants may be unit-like or carry named fields. The tag enum gets one
/// variant per event variant, with the same name. The event enum derives
/// `Debug`; the tag enum derives serde's traits, so the calling crate needs
/// `serde` as a dependency.
///
/// # Example
///
/// ```
/// use statewise::event_set;
/// use statewise::core::Event;
///
/// event_set! {
///     #[derive(Clone, PartialEq)]
///     pub enum DoorEvent {
///         Open,
///         Close,
///         Lock { new_key: u32 },
///         Unlock { key: u32 },
///     }
///     kinds: DoorEventKind
/// }
///
/// assert_eq!(DoorEvent::Lock { new_key: 7 }.kind(), DoorEventKind::Lock);
/// assert_eq!(DoorEvent::kinds().len(), 4);
/// ```
#[macro_export]
macro_rules! event_set {
    (
        $(#[$meta:meta])*
        $vis:vis enum $name:ident {
            $(
                $(#[$variant_meta:meta])*
                $variant:ident $({ $($field:ident : $ty:ty),* $(,)? })?
            ),+ $(,)?
        }
        kinds: $kind:ident
    ) => {
        $(#[$meta])*
        #[derive(Debug)]
        $vis enum $name {
            $(
                $(#[$variant_meta])*
                $variant $({ $($field: $ty),* })?
            ),+
        }

        #[derive(Clone, Copy, PartialEq, Eq, Hash, Debug, serde::Serialize, serde::Deserialize)]
        $vis enum $kind {
            $($variant),+
        }

        impl $crate::core::Event for $name {
            type Kind = $kind;

            fn kind(&self) -> $kind {
                match self {
                    $(Self::$variant { .. } => $kind::$variant),+
                }
            }

            fn kinds() -> &'static [$kind] {
                &[$($kind::$variant),+]
            }
        }
    };
}

/// Declare a state set: the struct owning one value per state, the id enum
/// naming them, and the `StateSet` impl.
///
/// Each entry reads `Id => field: Type`. Declaration order is the order of
/// `StateSet::ids()`, so the first entry is the default initial state.
///
/// # Example
///
/// ```
/// use statewise::actions::{ActionKind, ByDefault, Will};
/// use statewise::core::{State, StateSet};
/// use statewise::{event_set, state_set};
/// use std::convert::Infallible;
///
/// event_set! {
///     pub enum Tick {
///         Advance,
///     }
///     kinds: TickKind
/// }
///
/// pub struct Idle;
/// pub struct Busy {
///     jobs: u32,
/// }
///
/// state_set! {
///     pub struct Worker: Tick, Infallible {
///         Idle => idle: Idle,
///         Busy => busy: Busy,
///     }
///     ids: WorkerState
/// }
///
/// impl State<Worker> for Idle {
///     fn behavior(&self) -> Will<WorkerState, TickKind> {
///         Will::new(ByDefault(ActionKind::TransitionTo(WorkerState::Busy)))
///     }
/// }
///
/// impl State<Worker> for Busy {
///     fn behavior(&self) -> Will<WorkerState, TickKind> {
///         Will::new(ByDefault(ActionKind::TransitionTo(WorkerState::Idle)))
///     }
///
///     fn on_enter(&mut self, _event: &Tick) -> Result<(), Infallible> {
///         self.jobs += 1;
///         Ok(())
///     }
/// }
///
/// assert_eq!(Worker::ids(), &[WorkerState::Idle, WorkerState::Busy]);
/// assert_eq!(WorkerState::Busy.name(), "Busy");
/// ```
#[macro_export]
macro_rules! state_set {
    (
        $(#[$meta:meta])*
        $vis:vis struct $name:ident : $event:ty, $error:ty {
            $(
                $(#[$variant_meta:meta])*
                $variant:ident => $field:ident : $state:ty
            ),+ $(,)?
        }
        ids: $id:ident
    ) => {
        $(#[$meta])*
        $vis struct $name {
            $($vis $field: $state),+
        }

        #[derive(Clone, Copy, PartialEq, Eq, Hash, Debug, serde::Serialize, serde::Deserialize)]
        $vis enum $id {
            $(
                $(#[$variant_meta])*
                $variant
            ),+
        }

        impl $id {
            /// Declared name of the state.
            pub fn name(self) -> &'static str {
                match self {
                    $(Self::$variant => stringify!($variant)),+
                }
            }
        }

        impl $crate::core::StateSet for $name {
            type Id = $id;
            type Event = $event;
            type Error = $error;

            fn ids() -> &'static [$id] {
                &[$($id::$variant),+]
            }

            fn state(&self, id: $id) -> &dyn $crate::core::State<Self> {
                match id {
                    $($id::$variant => &self.$field),+
                }
            }

            fn state_mut(&mut self, id: $id) -> &mut dyn $crate::core::State<Self> {
                match id {
                    $($id::$variant => &mut self.$field),+
                }
            }
        }
    };
}
