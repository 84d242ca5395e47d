//! Demo operands.

use crate::vector::FloatVector;

/// Left operand: 1 through 8.
pub const LHS: FloatVector = FloatVector::new([1.0, 2.0, 3.0, 4.0, 5.0, 6.0, 7.0, 8.0]);

/// Right operand: 8 down to 1.
pub const RHS: FloatVector = FloatVector::new([8.0, 7.0, 6.0, 5.0, 4.0, 3.0, 2.0, 1.0]);

/// Returns `(LHS, RHS)`. Every pairwise sum is exactly 9.
pub fn operands() -> (FloatVector, FloatVector) {
    (LHS, RHS)
}
