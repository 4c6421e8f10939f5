//! Dynamically typed access to strict vectors, for bridging to scripting
//! hosts that pass untyped values.
//!
//! Rust callers get operand and argument checking from the type system. Here
//! the same rules are enforced at run time and reported as
//! [`VectorError::InvalidArgumentType`] and [`VectorError::InvalidOperand`].

use crate::{
    error::{Result, VectorError},
    memory::{ProcessMemory, Representation},
    vector::{StrictVector2, StrictVector3, StrictVector4},
};
use std::{
    fmt,
    ops::{Add, Div, Mul, Sub},
};

const COMPONENT_PARAMETERS: [&str; 4] = ["x", "y", "z", "w"];

/// A dynamically typed value.
#[derive(Clone, Debug, Default, PartialEq)]
pub enum Value {
    #[default]
    Nil,
    Boolean(bool),
    Number(f64),
    Text(String),
    Vector2(StrictVector2),
    Vector3(StrictVector3),
    Vector4(StrictVector4),
}

/// The vector types that can be constructed through [`construct`].
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash)]
pub enum VectorKind {
    Vector2,
    Vector3,
    Vector4,
}

#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash)]
pub enum BinaryOperator {
    Add,
    Sub,
    Mul,
    Div,
}

/// Operations shared by all vector types, for dispatching on values.
trait ScriptVector:
    Copy + Add<Output = Self> + Sub<Output = Self> + Mul<f64, Output = Self> + Div<f64, Output = Self>
{
    const TYPE_NAME: &'static str;

    fn from_value(value: &Value) -> Option<Self>;

    fn into_value(self) -> Value;

    fn magnitude(&self) -> f64;

    fn normalized(&self) -> Self;

    fn dot(&self, other: &Self) -> f64;

    fn lerp(&self, other: &Self, t: f64) -> Self;

    fn distance_to(&self, other: &Self) -> f64;
}

macro_rules! impl_script_vector {
    ($t:ty, $variant:ident) => {
        impl ScriptVector for $t {
            const TYPE_NAME: &'static str = stringify!($variant);

            fn from_value(value: &Value) -> Option<Self> {
                match value {
                    Value::$variant(vector) => Some(*vector),
                    _ => None,
                }
            }

            fn into_value(self) -> Value {
                Value::$variant(self)
            }

            fn magnitude(&self) -> f64 {
                <$t>::magnitude(self)
            }

            fn normalized(&self) -> Self {
                <$t>::normalized(self)
            }

            fn dot(&self, other: &Self) -> f64 {
                <$t>::dot(self, other)
            }

            fn lerp(&self, other: &Self, t: f64) -> Self {
                <$t>::lerp(self, other, t)
            }

            fn distance_to(&self, other: &Self) -> f64 {
                <$t>::distance_to(self, other)
            }
        }
    };
}

impl_script_vector!(StrictVector2, Vector2);
impl_script_vector!(StrictVector3, Vector3);
impl_script_vector!(StrictVector4, Vector4);

impl Value {
    /// The name of the value's type, as reported in errors.
    pub fn type_name(&self) -> &'static str {
        match self {
            Self::Nil => "nil",
            Self::Boolean(_) => "boolean",
            Self::Number(_) => "number",
            Self::Text(_) => "string",
            Self::Vector2(_) => StrictVector2::TYPE_NAME,
            Self::Vector3(_) => StrictVector3::TYPE_NAME,
            Self::Vector4(_) => StrictVector4::TYPE_NAME,
        }
    }

    /// The number held by the value, if it is a number.
    pub fn as_number(&self) -> Option<f64> {
        match self {
            Self::Number(number) => Some(*number),
            _ => None,
        }
    }
}

impl From<f64> for Value {
    fn from(number: f64) -> Self {
        Self::Number(number)
    }
}

impl From<StrictVector2> for Value {
    fn from(vector: StrictVector2) -> Self {
        Self::Vector2(vector)
    }
}

impl From<StrictVector3> for Value {
    fn from(vector: StrictVector3) -> Self {
        Self::Vector3(vector)
    }
}

impl From<StrictVector4> for Value {
    fn from(vector: StrictVector4) -> Self {
        Self::Vector4(vector)
    }
}

impl fmt::Display for Value {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::Nil => f.write_str("nil"),
            Self::Boolean(value) => write!(f, "{value}"),
            Self::Number(value) => write!(f, "{value}"),
            Self::Text(value) => f.write_str(value),
            Self::Vector2(vector) => fmt::Display::fmt(vector, f),
            Self::Vector3(vector) => fmt::Display::fmt(vector, f),
            Self::Vector4(vector) => fmt::Display::fmt(vector, f),
        }
    }
}

impl VectorKind {
    pub fn arity(self) -> usize {
        match self {
            Self::Vector2 => 2,
            Self::Vector3 => 3,
            Self::Vector4 => 4,
        }
    }
}

impl BinaryOperator {
    pub fn symbol(self) -> &'static str {
        match self {
            Self::Add => "+",
            Self::Sub => "-",
            Self::Mul => "*",
            Self::Div => "/",
        }
    }
}

/// Constructs a vector of the given kind from the given arguments. `Nil`
/// and missing arguments give zero components, and arguments beyond the
/// arity of the vector are ignored.
///
/// # Errors
/// Returns [`VectorError::InvalidArgumentType`] if a component argument is
/// neither a number nor `Nil`.
pub fn construct(kind: VectorKind, args: &[Value]) -> Result<Value> {
    let args = &args[..args.len().min(kind.arity())];
    let mut components = [0.0; 4];

    for ((component, arg), parameter) in components.iter_mut().zip(args).zip(COMPONENT_PARAMETERS) {
        match arg {
            Value::Number(number) => *component = *number,
            Value::Nil => {}
            other => {
                return Err(VectorError::InvalidArgumentType {
                    parameter,
                    expected: "number",
                    found: other.type_name(),
                });
            }
        }
    }

    let [x, y, z, w] = components;
    Ok(match kind {
        VectorKind::Vector2 => Value::Vector2(StrictVector2::new(x, y)),
        VectorKind::Vector3 => Value::Vector3(StrictVector3::new(x, y, z)),
        VectorKind::Vector4 => Value::Vector4(StrictVector4::new(x, y, z, w)),
    })
}

/// Reads a vector of the given kind from process memory, starting at the
/// given address.
///
/// # Errors
/// Returns [`VectorError::InvalidArgumentType`] if the address is not a
/// number holding a non-negative integer representable as `u64`. No memory
/// is read in that case.
pub fn from_memory<M: ProcessMemory + ?Sized>(
    kind: VectorKind,
    representation: Representation,
    address: &Value,
    memory: &M,
) -> Result<Value> {
    let address = address_arg(address)?;
    Ok(match (kind, representation) {
        (VectorKind::Vector2, Representation::Float32) => {
            StrictVector2::from_floats(memory, address).into()
        }
        (VectorKind::Vector2, Representation::Int32) => {
            StrictVector2::from_ints(memory, address).into()
        }
        (VectorKind::Vector3, Representation::Float32) => {
            StrictVector3::from_floats(memory, address).into()
        }
        (VectorKind::Vector3, Representation::Int32) => {
            StrictVector3::from_ints(memory, address).into()
        }
        (VectorKind::Vector4, Representation::Float32) => {
            StrictVector4::from_floats(memory, address).into()
        }
        (VectorKind::Vector4, Representation::Int32) => {
            StrictVector4::from_ints(memory, address).into()
        }
    })
}

/// Applies a binary operator. `+` and `-` require two vectors of the same
/// type, `*` a vector and a number in either order, and `/` a vector
/// followed by a number.
///
/// # Errors
/// Returns [`VectorError::InvalidOperand`] if the operands do not satisfy
/// these rules.
pub fn binary_op(operator: BinaryOperator, lhs: &Value, rhs: &Value) -> Result<Value> {
    match (lhs, rhs) {
        (Value::Vector2(vector), _) => vector_binary_op(operator, *vector, rhs),
        (Value::Vector3(vector), _) => vector_binary_op(operator, *vector, rhs),
        (Value::Vector4(vector), _) => vector_binary_op(operator, *vector, rhs),
        (Value::Number(_), Value::Vector2(vector)) if operator == BinaryOperator::Mul => {
            vector_binary_op(operator, *vector, lhs)
        }
        (Value::Number(_), Value::Vector3(vector)) if operator == BinaryOperator::Mul => {
            vector_binary_op(operator, *vector, lhs)
        }
        (Value::Number(_), Value::Vector4(vector)) if operator == BinaryOperator::Mul => {
            vector_binary_op(operator, *vector, lhs)
        }
        _ => Err(invalid_operand(operator, "vector")),
    }
}

fn vector_binary_op<V: ScriptVector>(operator: BinaryOperator, lhs: V, rhs: &Value) -> Result<Value> {
    let result = match operator {
        BinaryOperator::Add | BinaryOperator::Sub => {
            let rhs = V::from_value(rhs).ok_or_else(|| invalid_operand(operator, V::TYPE_NAME))?;
            if operator == BinaryOperator::Add {
                lhs + rhs
            } else {
                lhs - rhs
            }
        }
        BinaryOperator::Mul | BinaryOperator::Div => {
            let rhs = rhs
                .as_number()
                .ok_or_else(|| invalid_operand(operator, "number"))?;
            if operator == BinaryOperator::Mul {
                lhs * rhs
            } else {
                lhs / rhs
            }
        }
    };
    Ok(result.into_value())
}

/// Calls the named method on a vector value.
///
/// All vectors have `Magnitude`, `Normalize`, `Dot`, `Lerp` and
/// `DistanceTo`. `Vector2` and `Vector3` add `Project` and `AngleBetween`,
/// and `Vector3` adds `Cross` and `ProjectOnPlane`. Angles are returned in
/// radians.
///
/// # Errors
/// Returns [`VectorError::UnknownMethod`] if the receiver has no such
/// method, [`VectorError::InvalidArgumentType`] if an argument has the wrong
/// type, and any error reported by the method itself.
pub fn call_method(receiver: &Value, method: &str, args: &[Value]) -> Result<Value> {
    match receiver {
        Value::Vector2(vector) => match method {
            "Project" => Ok(vector.project(&vector_arg(args, 0, "other")?)?.into()),
            "AngleBetween" => Ok(Value::Number(
                vector.angle_between(&vector_arg(args, 0, "other")?)?.radians(),
            )),
            _ => common_method(*vector, method, args),
        },
        Value::Vector3(vector) => match method {
            "Project" => Ok(vector.project(&vector_arg(args, 0, "other")?)?.into()),
            "AngleBetween" => Ok(Value::Number(
                vector.angle_between(&vector_arg(args, 0, "other")?)?.radians(),
            )),
            "Cross" => Ok(vector.cross(&vector_arg(args, 0, "other")?).into()),
            "ProjectOnPlane" => Ok(vector
                .project_on_plane(&vector_arg(args, 0, "normal")?)?
                .into()),
            _ => common_method(*vector, method, args),
        },
        Value::Vector4(vector) => common_method(*vector, method, args),
        other => Err(unknown_method(other.type_name(), method)),
    }
}

fn common_method<V: ScriptVector>(vector: V, method: &str, args: &[Value]) -> Result<Value> {
    match method {
        "Magnitude" => Ok(Value::Number(vector.magnitude())),
        "Normalize" => Ok(vector.normalized().into_value()),
        "Dot" => Ok(Value::Number(vector.dot(&vector_arg(args, 0, "other")?))),
        "Lerp" => {
            let other = vector_arg(args, 0, "other")?;
            let t = number_arg(args, 1, "t")?;
            Ok(vector.lerp(&other, t).into_value())
        }
        "DistanceTo" => Ok(Value::Number(
            vector.distance_to(&vector_arg(args, 0, "other")?),
        )),
        _ => Err(unknown_method(V::TYPE_NAME, method)),
    }
}

fn vector_arg<V: ScriptVector>(args: &[Value], idx: usize, parameter: &'static str) -> Result<V> {
    let arg = args.get(idx).unwrap_or(&Value::Nil);
    V::from_value(arg).ok_or(VectorError::InvalidArgumentType {
        parameter,
        expected: V::TYPE_NAME,
        found: arg.type_name(),
    })
}

fn number_arg(args: &[Value], idx: usize, parameter: &'static str) -> Result<f64> {
    let arg = args.get(idx).unwrap_or(&Value::Nil);
    arg.as_number().ok_or(VectorError::InvalidArgumentType {
        parameter,
        expected: "number",
        found: arg.type_name(),
    })
}

#[allow(clippy::cast_possible_truncation, clippy::cast_sign_loss)]
fn address_arg(arg: &Value) -> Result<u64> {
    // 2^64, one past the largest `u64`.
    const ADDRESS_LIMIT: f64 = 18_446_744_073_709_551_616.0;

    match arg {
        Value::Number(number)
            if *number >= 0.0 && *number < ADDRESS_LIMIT && number.fract() == 0.0 =>
        {
            Ok(*number as u64)
        }
        other => Err(VectorError::InvalidArgumentType {
            parameter: "address",
            expected: "non-negative integer",
            found: other.type_name(),
        }),
    }
}

fn invalid_operand(operator: BinaryOperator, expected: &'static str) -> VectorError {
    VectorError::InvalidOperand {
        operator: operator.symbol(),
        expected,
    }
}

fn unknown_method(type_name: &'static str, method: &str) -> VectorError {
    VectorError::UnknownMethod {
        type_name,
        method: method.to_owned(),
    }
}
