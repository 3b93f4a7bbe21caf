//! First-class invariants over the move history.
//!
//! Invariants are logical properties that must hold after every committed
//! ply. The controller checks them in debug builds; tests check them
//! directly against hand-built histories.

/// A logical property that must hold for a given state.
pub trait Invariant<S> {
    /// Checks if the invariant holds for the given state.
    fn holds(state: &S) -> bool;

    /// Human-readable description of the invariant.
    fn description() -> &'static str;
}

/// Violation of an invariant.
#[derive(Debug, Clone, PartialEq, Eq, derive_more::Display)]
#[display("{description}")]
pub struct InvariantViolation {
    /// Description of the violated invariant.
    pub description: String,
}

impl InvariantViolation {
    /// Creates a new invariant violation.
    pub fn new(description: impl Into<String>) -> Self {
        Self {
            description: description.into(),
        }
    }
}

/// A set of invariants that can be checked together.
///
/// Implemented for tuples of invariants.
pub trait InvariantSet<S> {
    /// Checks all invariants in the set, collecting every violation.
    fn check_all(state: &S) -> Result<(), Vec<InvariantViolation>>;
}

fn collect(checks: &[(bool, &'static str)]) -> Result<(), Vec<InvariantViolation>> {
    let violations: Vec<_> = checks
        .iter()
        .filter(|(holds, _)| !holds)
        .map(|(_, description)| InvariantViolation::new(*description))
        .collect();

    if violations.is_empty() {
        Ok(())
    } else {
        Err(violations)
    }
}

impl<S, I1, I2, I3> InvariantSet<S> for (I1, I2, I3)
where
    I1: Invariant<S>,
    I2: Invariant<S>,
    I3: Invariant<S>,
{
    fn check_all(state: &S) -> Result<(), Vec<InvariantViolation>> {
        collect(&[
            (I1::holds(state), I1::description()),
            (I2::holds(state), I2::description()),
            (I3::holds(state), I3::description()),
        ])
    }
}

impl<S, I1, I2> InvariantSet<S> for (I1, I2)
where
    I1: Invariant<S>,
    I2: Invariant<S>,
{
    fn check_all(state: &S) -> Result<(), Vec<InvariantViolation>> {
        collect(&[
            (I1::holds(state), I1::description()),
            (I2::holds(state), I2::description()),
        ])
    }
}

pub mod alternating_turn;
pub mod pointer_in_bounds;
pub mod single_ply;

pub use alternating_turn::AlternatingTurnInvariant;
pub use pointer_in_bounds::PointerInBoundsInvariant;
pub use single_ply::SinglePlyInvariant;

/// All history invariants as a composable set.
pub type HistoryInvariants = (
    PointerInBoundsInvariant,
    SinglePlyInvariant,
    AlternatingTurnInvariant,
);

/// Index of the one square that changed between consecutive snapshots.
///
/// `None` unless exactly one square went from empty to occupied and
/// nothing else changed.
pub(crate) fn placed_square(
    before: &super::Board,
    after: &super::Board,
) -> Option<(usize, super::Player)> {
    use super::Square;

    let mut placed = None;
    for (index, (old, new)) in before.squares().iter().zip(after.squares()).enumerate() {
        match (old, new) {
            (a, b) if a == b => {}
            (Square::Empty, Square::Occupied(player)) if placed.is_none() => {
                placed = Some((index, *player));
            }
            _ => return None,
        }
    }
    placed
}
