//! Invariants the engine upholds between calls.
//!
//! Checked after every accepted placement in debug builds and testable on
//! their own.

pub mod mark_balance;
pub mod terminal_consistency;
pub mod turn_parity;

pub use mark_balance::MarkBalanceInvariant;
pub use terminal_consistency::TerminalConsistencyInvariant;
pub use turn_parity::TurnParityInvariant;

use crate::GameEngine;
use tracing::error;

/// A logical property that must hold for a given state.
pub trait Invariant<S> {
    /// Checks if the invariant holds for the given state.
    fn holds(state: &S) -> bool;

    /// Human-readable description of the invariant.
    fn description() -> &'static str;
}

/// Violation of an invariant.
#[derive(Debug, Clone, PartialEq, Eq, derive_more::Display)]
#[display("Invariant violated: {}", description)]
pub struct InvariantViolation {
    /// Description of the violated invariant.
    pub description: &'static str,
}

/// Invariants checked together.
pub trait InvariantSet<S> {
    /// Checks every invariant, collecting all violations.
    fn check_all(state: &S) -> Result<(), Vec<InvariantViolation>>;
}

impl<S, I1, I2, I3> InvariantSet<S> for (I1, I2, I3)
where
    I1: Invariant<S>,
    I2: Invariant<S>,
    I3: Invariant<S>,
{
    fn check_all(state: &S) -> Result<(), Vec<InvariantViolation>> {
        let checks = [
            (I1::holds(state), I1::description()),
            (I2::holds(state), I2::description()),
            (I3::holds(state), I3::description()),
        ];
        let violations: Vec<InvariantViolation> = checks
            .into_iter()
            .filter(|(held, _)| !held)
            .map(|(_, description)| InvariantViolation { description })
            .collect();

        if violations.is_empty() {
            Ok(())
        } else {
            Err(violations)
        }
    }
}

/// All engine invariants.
pub type EngineInvariants = (
    MarkBalanceInvariant,
    TurnParityInvariant,
    TerminalConsistencyInvariant,
);

/// Panics in debug builds if the engine is in an impossible state.
pub(crate) fn assert_invariants(engine: &GameEngine) {
    if cfg!(debug_assertions) {
        if let Err(violations) = EngineInvariants::check_all(engine) {
            for violation in &violations {
                error!(%violation, "Engine invariant violated");
            }
            panic!("engine invariants violated: {:?}", violations);
        }
    }
}
