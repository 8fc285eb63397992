//! Spy test doubles with an ordered call log.
//!
//! A spy stands in for a real dependency behind a capability trait, doing
//! nothing except recording each invocation as an entry in its [`Spy`] log
//! and, optionally, serving a pre-configured return value from a
//! [`StubScript`] so the caller's control flow can proceed realistically.
//! Tests then compare the log against an expected sequence with
//! [`verify_calls`] or [`assert_calls!`].
//!
//! Logging calls into one ordered sequence, rather than toggling a boolean
//! per operation, is the point: a single comparison against an expected
//! sequence literal catches duplicate invocations, out-of-order
//! invocations, and wrong arguments, none of which a set of flags can
//! represent.
//!
//! One double per test case: construct the spy inside the test, inject a
//! clone of it into the unit under test through its constructor, and let
//! both drop at the end. Sharing a spy across test cases leaks call history
//! between unrelated assertions.
//!
//! ```
//! use tattle::{assert_calls, Spy};
//!
//! #[derive(Debug, Clone, PartialEq)]
//! enum AnalyticsCall {
//!     TrackScreenView,
//!     TrackAddressDeletion,
//! }
//!
//! let spy = Spy::new();
//! spy.record(AnalyticsCall::TrackScreenView);
//! spy.record(AnalyticsCall::TrackAddressDeletion);
//!
//! assert_calls!(
//!     spy.calls(),
//!     [AnalyticsCall::TrackScreenView, AnalyticsCall::TrackAddressDeletion]
//! );
//! ```

pub mod spy;
pub mod stub;
pub mod transcript;
pub mod verify;

pub use spy::Spy;
pub use stub::StubScript;
pub use verify::{verify_calls, CallMismatch};
