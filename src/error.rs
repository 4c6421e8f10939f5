//! Errors reported by strict vectors and the scripting bridge.

use thiserror::Error;

pub type Result<T> = std::result::Result<T, VectorError>;

#[derive(Error, Clone, Debug, PartialEq, Eq)]
pub enum VectorError {
    #[error("Invalid argument type for parameter `{parameter}`: expected {expected}, got {found}")]
    InvalidArgumentType {
        parameter: &'static str,
        expected: &'static str,
        found: &'static str,
    },

    #[error("Invalid operand for operator `{operator}`: expected {expected}")]
    InvalidOperand {
        operator: &'static str,
        expected: &'static str,
    },

    #[error("Tried to project onto a vector with zero magnitude")]
    DegenerateProjectionTarget,

    #[error("Tried to compute the angle between vectors where one has zero magnitude")]
    DegenerateAngleOperands,

    #[error("Type {type_name} has no method `{method}`")]
    UnknownMethod {
        type_name: &'static str,
        method: String,
    },
}
