//! Small fixed-size vectors with selectable validation, and construction of
//! vectors from the memory of another process.

#![warn(missing_debug_implementations)]
#![warn(rust_2018_idioms)]
#![warn(clippy::cast_lossless)]

#[macro_use]
mod macros;

pub mod angle;
pub mod error;
pub mod kernel;
pub mod memory;
pub mod policy;
pub mod script;
pub mod vector;

pub use angle::{Degrees, Radians};
pub use error::{Result, VectorError};
pub use memory::{MemorySnapshot, ProcessMemory, Representation};
pub use policy::{Fast, Strict, ValidationPolicy};
pub use vector::{
    FastVector2, FastVector3, FastVector4, StrictVector2, StrictVector3, StrictVector4, Vector2,
    Vector3, Vector4,
};
