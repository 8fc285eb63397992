//! Sequence assertions for recorded call logs.

use std::fmt;

/// Describes how a recorded call sequence diverged from the expected one.
///
/// Rendered via `Display` as a human-readable test-failure message; the
/// differing entries are captured in their `Debug` form so the mismatch is
/// not generic over the record type.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum CallMismatch {
    /// The sequences have different lengths.
    Length {
        /// Number of expected calls.
        expected: usize,
        /// Number of recorded calls.
        actual: usize,
    },
    /// The sequences have equal length but differ at a position.
    Difference {
        /// Zero-based position of the first differing call.
        index: usize,
        /// The call expected at this position.
        expected: String,
        /// The call recorded at this position.
        actual: String,
    },
}

impl fmt::Display for CallMismatch {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::Length { expected, actual } => {
                write!(f, "expected {expected} calls, recorded {actual}")
            }
            Self::Difference { index, expected, actual } => {
                write!(f, "call {index} differs: expected {expected}, recorded {actual}")
            }
        }
    }
}

impl std::error::Error for CallMismatch {}

/// Compares a recorded call sequence against the expected one.
///
/// `Ok(())` iff the sequences have equal length and pairwise-equal entries.
/// A wrong count, a wrong case, a wrong argument value, or a wrong order at
/// any position is a mismatch.
///
/// # Errors
///
/// Returns [`CallMismatch::Length`] when the sequences have different
/// lengths, otherwise [`CallMismatch::Difference`] naming the first
/// position whose entries are unequal.
pub fn verify_calls<C>(actual: &[C], expected: &[C]) -> Result<(), CallMismatch>
where
    C: PartialEq + fmt::Debug,
{
    if actual.len() != expected.len() {
        return Err(CallMismatch::Length { expected: expected.len(), actual: actual.len() });
    }
    for (index, (recorded, wanted)) in actual.iter().zip(expected).enumerate() {
        if recorded != wanted {
            return Err(CallMismatch::Difference {
                index,
                expected: format!("{wanted:?}"),
                actual: format!("{recorded:?}"),
            });
        }
    }
    Ok(())
}

/// Asserts that a recorded call sequence equals the expected one.
///
/// Both sides may be anything that indexes to a slice of call records (a
/// `Vec` from [`Spy::calls`](crate::Spy::calls), an array literal). On
/// mismatch the test panics with the rendered [`CallMismatch`].
#[macro_export]
macro_rules! assert_calls {
    ($actual:expr, $expected:expr $(,)?) => {
        match $crate::verify::verify_calls(&$actual[..], &$expected[..]) {
            Ok(()) => {}
            Err(mismatch) => panic!("call log mismatch: {mismatch}"),
        }
    };
}

#[cfg(test)]
mod tests {
    use super::*;

    #[derive(Debug, Clone, PartialEq)]
    enum Call {
        ScreenView,
        Highlight(u32),
    }

    #[test]
    fn equal_sequences_verify_ok() {
        let log = [Call::ScreenView, Call::Highlight(3)];
        assert_eq!(verify_calls(&log, &[Call::ScreenView, Call::Highlight(3)]), Ok(()));
    }

    #[test]
    fn empty_log_matches_only_the_empty_expectation() {
        let log: [Call; 0] = [];
        assert_eq!(verify_calls(&log, &[]), Ok(()));
        assert_eq!(
            verify_calls(&log, &[Call::ScreenView]),
            Err(CallMismatch::Length { expected: 1, actual: 0 })
        );
    }

    #[test]
    fn order_difference_is_reported_at_the_first_position() {
        let log = [Call::ScreenView, Call::Highlight(1)];
        let err = verify_calls(&log, &[Call::Highlight(1), Call::ScreenView]).unwrap_err();
        assert_eq!(
            err,
            CallMismatch::Difference {
                index: 0,
                expected: "Highlight(1)".into(),
                actual: "ScreenView".into(),
            }
        );
    }

    #[test]
    fn argument_difference_fails_even_when_the_case_matches() {
        let log = [Call::Highlight(1)];
        let err = verify_calls(&log, &[Call::Highlight(2)]).unwrap_err();
        assert_eq!(
            err,
            CallMismatch::Difference {
                index: 0,
                expected: "Highlight(2)".into(),
                actual: "Highlight(1)".into(),
            }
        );
    }

    #[test]
    fn mismatch_renders_readably() {
        let length = CallMismatch::Length { expected: 2, actual: 3 };
        assert_eq!(length.to_string(), "expected 2 calls, recorded 3");

        let diff = CallMismatch::Difference {
            index: 1,
            expected: "ScreenView".into(),
            actual: "Highlight(9)".into(),
        };
        assert_eq!(diff.to_string(), "call 1 differs: expected ScreenView, recorded Highlight(9)");
    }

    #[test]
    fn assert_calls_passes_on_equal_sequences() {
        let log = vec![Call::ScreenView];
        assert_calls!(log, [Call::ScreenView]);
    }

    #[test]
    #[should_panic(expected = "call log mismatch")]
    fn assert_calls_panics_on_mismatch() {
        let log = vec![Call::ScreenView];
        assert_calls!(log, [Call::Highlight(5)]);
    }
}
