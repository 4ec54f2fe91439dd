//! # Waitline Core
//!
//! Core traits and types for the Waitline architecture.
//!
//! Waitline structures domain logic as pure reducers over explicit state:
//!
//! - **State**: owned domain state for a feature
//! - **Action**: all possible inputs to a reducer (commands and events)
//! - **Reducer**: `(State, Action, Environment) → Effects`
//! - **Effect**: side effect *descriptions*, executed by the runtime
//! - **Environment**: injected dependencies behind traits
//!
//! Reducers are deterministic and synchronous; everything asynchronous or
//! fallible lives behind the environment and comes back into the reducer as
//! an action.

// Re-export commonly used types
pub use chrono::{DateTime, Utc};
pub use smallvec::{SmallVec, smallvec};

/// Reducer module - the core trait for business logic.
pub mod reducer {
    use super::effect::Effect;
    use smallvec::SmallVec;

    /// The Reducer trait - core abstraction for business logic.
    ///
    /// A reducer validates an action, updates state in place, and returns
    /// descriptions of the side effects the runtime should perform. It never
    /// performs I/O itself.
    ///
    /// # Example
    ///
    /// ```ignore
    /// impl Reducer for WaitlistReducer {
    ///     type State = WaitlistState;
    ///     type Action = WaitlistAction;
    ///     type Environment = WaitlistEnvironment;
    ///
    ///     fn reduce(
    ///         &self,
    ///         state: &mut WaitlistState,
    ///         action: WaitlistAction,
    ///         env: &WaitlistEnvironment,
    ///     ) -> SmallVec<[Effect<WaitlistAction>; 4]> {
    ///         // Business logic here
    ///         SmallVec::new()
    ///     }
    /// }
    /// ```
    pub trait Reducer {
        /// The state type this reducer operates on
        type State;

        /// The action type this reducer processes
        type Action;

        /// The environment type with injected dependencies
        type Environment;

        /// Reduce an action into state changes and effects.
        ///
        /// This is a pure function that:
        /// 1. Validates the action
        /// 2. Updates state in place
        /// 3. Returns effect descriptions to be executed by the runtime
        fn reduce(
            &self,
            state: &mut Self::State,
            action: Self::Action,
            env: &Self::Environment,
        ) -> SmallVec<[Effect<Self::Action>; 4]>;
    }
}

/// Effect module - side effect descriptions.
///
/// Effects are values, not execution: reducers return them, the Store
/// runtime executes them. Actions produced by effects are fed back into the
/// reducer, closing the loop.
pub mod effect {
    use std::future::Future;
    use std::pin::Pin;
    use std::time::Duration;

    /// Describes a side effect to be executed by the Store runtime.
    ///
    /// # Type Parameters
    ///
    /// - `Action`: the action type effects can produce (feedback loop)
    pub enum Effect<Action> {
        /// No-op effect
        None,

        /// Run effects concurrently
        Parallel(Vec<Effect<Action>>),

        /// Run effects in order, waiting for each to complete
        Sequential(Vec<Effect<Action>>),

        /// Dispatch an action after a delay (timeouts, reminders)
        Delay {
            /// How long to wait
            duration: Duration,
            /// Action to dispatch after the delay
            action: Box<Action>,
        },

        /// Arbitrary async computation.
        ///
        /// Resolves to `Option<Action>`; a `Some` action is fed back into
        /// the reducer.
        Future(Pin<Box<dyn Future<Output = Option<Action>> + Send>>),
    }

    // Manual Debug implementation since Future doesn't implement Debug
    impl<Action> std::fmt::Debug for Effect<Action>
    where
        Action: std::fmt::Debug,
    {
        fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
            match self {
                Effect::None => write!(f, "Effect::None"),
                Effect::Parallel(effects) => {
                    f.debug_tuple("Effect::Parallel").field(effects).finish()
                },
                Effect::Sequential(effects) => {
                    f.debug_tuple("Effect::Sequential").field(effects).finish()
                },
                Effect::Delay { duration, action } => f
                    .debug_struct("Effect::Delay")
                    .field("duration", duration)
                    .field("action", action)
                    .finish(),
                Effect::Future(_) => write!(f, "Effect::Future(<future>)"),
            }
        }
    }

    impl<Action> Effect<Action> {
        /// Combine effects to run in parallel
        #[must_use]
        pub const fn merge(effects: Vec<Effect<Action>>) -> Effect<Action> {
            Effect::Parallel(effects)
        }

        /// Chain effects to run sequentially
        #[must_use]
        pub const fn chain(effects: Vec<Effect<Action>>) -> Effect<Action> {
            Effect::Sequential(effects)
        }
    }
}

/// Environment module - dependency injection traits.
///
/// All external dependencies (time, notification delivery, ...) are
/// abstracted behind traits and injected via the reducer's Environment
/// parameter, keeping reducers deterministic and testable.
pub mod environment {
    use chrono::{DateTime, Utc};

    /// Abstracts time so reducers stay deterministic under test.
    pub trait Clock: Send + Sync {
        /// Get the current time
        fn now(&self) -> DateTime<Utc>;
    }

    /// Production clock backed by the system time.
    #[derive(Clone, Copy, Debug, Default)]
    pub struct SystemClock;

    impl Clock for SystemClock {
        fn now(&self) -> DateTime<Utc> {
            Utc::now()
        }
    }

    /// Test clock that always returns a fixed instant.
    #[derive(Clone, Copy, Debug)]
    pub struct FixedClock {
        /// The instant this clock is frozen at
        pub time: DateTime<Utc>,
    }

    impl FixedClock {
        /// Creates a clock frozen at `time`
        #[must_use]
        pub const fn new(time: DateTime<Utc>) -> Self {
            Self { time }
        }
    }

    impl Clock for FixedClock {
        fn now(&self) -> DateTime<Utc> {
            self.time
        }
    }
}
