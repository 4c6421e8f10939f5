//! Construction of vectors from the memory of another process.
//!
//! The actual memory access is provided by an implementation of
//! [`ProcessMemory`]. Vector components are read as consecutive 4-byte
//! values, and any read that fails is replaced by zero so that a complete
//! vector is always produced.

use crate::{
    policy::ValidationPolicy,
    vector::{Vector2, Vector3, Vector4},
};
use anyhow::{Context, Result};
use std::{fs, path::Path};

/// Number of bytes between consecutive vector components in memory.
pub const COMPONENT_STRIDE: u64 = 4;

/// Read access to the address space of a process.
pub trait ProcessMemory {
    /// Reads the 32-bit float at the given address, or returns [`None`] if
    /// the address can not be read.
    fn read_float(&self, address: u64) -> Option<f32>;

    /// Reads the 32-bit signed integer at the given address, or returns
    /// [`None`] if the address can not be read.
    fn read_int32(&self, address: u64) -> Option<i32>;
}

/// How the 4-byte components of a vector are represented in memory.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash)]
#[cfg_attr(feature = "cli", derive(::clap::ValueEnum))]
pub enum Representation {
    Float32,
    Int32,
}

/// A copy of a contiguous region of process memory, starting at a known base
/// address. Values are stored in native byte order.
#[derive(Clone, Debug, Default, PartialEq, Eq)]
pub struct MemorySnapshot {
    base_address: u64,
    bytes: Vec<u8>,
}

impl<M: ProcessMemory + ?Sized> ProcessMemory for &M {
    fn read_float(&self, address: u64) -> Option<f32> {
        (**self).read_float(address)
    }

    fn read_int32(&self, address: u64) -> Option<i32> {
        (**self).read_int32(address)
    }
}

impl<M: ProcessMemory + ?Sized> ProcessMemory for Box<M> {
    fn read_float(&self, address: u64) -> Option<f32> {
        (**self).read_float(address)
    }

    fn read_int32(&self, address: u64) -> Option<i32> {
        (**self).read_int32(address)
    }
}

impl Representation {
    /// Reads a single component with this representation and widens it to
    /// `f64`.
    pub fn read<M: ProcessMemory + ?Sized>(self, memory: &M, address: u64) -> Option<f64> {
        match self {
            Self::Float32 => memory.read_float(address).map(f64::from),
            Self::Int32 => memory.read_int32(address).map(f64::from),
        }
    }
}

impl MemorySnapshot {
    /// Creates a snapshot of the given bytes, which were located at
    /// `base_address` in the process.
    pub fn new(base_address: u64, bytes: Vec<u8>) -> Self {
        Self {
            base_address,
            bytes,
        }
    }

    /// Creates a snapshot holding the given floats back to back.
    pub fn from_floats(base_address: u64, values: &[f32]) -> Self {
        Self::new(base_address, bytemuck::cast_slice(values).to_vec())
    }

    /// Creates a snapshot holding the given integers back to back.
    pub fn from_ints(base_address: u64, values: &[i32]) -> Self {
        Self::new(base_address, bytemuck::cast_slice(values).to_vec())
    }

    /// Reads a snapshot from a raw memory dump file.
    ///
    /// # Errors
    /// Returns an error if the file can not be read.
    pub fn from_file(base_address: u64, path: impl AsRef<Path>) -> Result<Self> {
        let path = path.as_ref();
        let bytes = fs::read(path)
            .with_context(|| format!("Failed to read memory dump {}", path.display()))?;

        log::debug!(
            "Loaded {} bytes of memory at {:#x} from {}",
            bytes.len(),
            base_address,
            path.display()
        );

        Ok(Self::new(base_address, bytes))
    }

    /// The address of the first byte in the snapshot.
    pub fn base_address(&self) -> u64 {
        self.base_address
    }

    /// The number of bytes in the snapshot.
    pub fn len(&self) -> usize {
        self.bytes.len()
    }

    /// Whether the snapshot holds no bytes.
    pub fn is_empty(&self) -> bool {
        self.bytes.is_empty()
    }

    fn word_at(&self, address: u64) -> Option<&[u8]> {
        let offset = usize::try_from(address.checked_sub(self.base_address)?).ok()?;
        let end = offset.checked_add(4)?;
        self.bytes.get(offset..end)
    }
}

impl ProcessMemory for MemorySnapshot {
    fn read_float(&self, address: u64) -> Option<f32> {
        let value: Option<f32> = self.word_at(address).map(bytemuck::pod_read_unaligned);
        log::trace!("Read f32 at {address:#x}: {value:?}");
        value
    }

    fn read_int32(&self, address: u64) -> Option<i32> {
        let value: Option<i32> = self.word_at(address).map(bytemuck::pod_read_unaligned);
        log::trace!("Read i32 at {address:#x}: {value:?}");
        value
    }
}

/// Reads `N` consecutive components starting at `base_address`, spaced
/// [`COMPONENT_STRIDE`] bytes apart and in increasing address order. A
/// component whose read fails, or whose address would overflow, is zero.
pub fn read_components<M, const N: usize>(
    memory: &M,
    base_address: u64,
    representation: Representation,
) -> [f64; N]
where
    M: ProcessMemory + ?Sized,
{
    let mut components = [0.0; N];

    for (idx, component) in components.iter_mut().enumerate() {
        let address = base_address.checked_add(COMPONENT_STRIDE * idx as u64);

        match address.and_then(|address| representation.read(memory, address)) {
            Some(value) => *component = value,
            None => {
                log::debug!(
                    "Failed to read {:?} component {} of vector at {:#x}, using zero",
                    representation,
                    idx,
                    base_address
                );
            }
        }
    }

    components
}

impl<P: ValidationPolicy> Vector2<P> {
    /// Reads the vector from two consecutive 32-bit floats in process memory.
    /// Components that can not be read are zero.
    pub fn from_floats<M: ProcessMemory + ?Sized>(memory: &M, address: u64) -> Self {
        Self::from(read_components::<M, 2>(
            memory,
            address,
            Representation::Float32,
        ))
    }

    /// Reads the vector from two consecutive 32-bit integers in process
    /// memory. Components that can not be read are zero.
    pub fn from_ints<M: ProcessMemory + ?Sized>(memory: &M, address: u64) -> Self {
        Self::from(read_components::<M, 2>(
            memory,
            address,
            Representation::Int32,
        ))
    }
}

impl<P: ValidationPolicy> Vector3<P> {
    /// Reads the vector from three consecutive 32-bit floats in process
    /// memory. Components that can not be read are zero.
    pub fn from_floats<M: ProcessMemory + ?Sized>(memory: &M, address: u64) -> Self {
        Self::from(read_components::<M, 3>(
            memory,
            address,
            Representation::Float32,
        ))
    }

    /// Reads the vector from three consecutive 32-bit integers in process
    /// memory. Components that can not be read are zero.
    pub fn from_ints<M: ProcessMemory + ?Sized>(memory: &M, address: u64) -> Self {
        Self::from(read_components::<M, 3>(
            memory,
            address,
            Representation::Int32,
        ))
    }
}

impl<P: ValidationPolicy> Vector4<P> {
    /// Reads the vector from four consecutive 32-bit floats in process
    /// memory. Components that can not be read are zero.
    pub fn from_floats<M: ProcessMemory + ?Sized>(memory: &M, address: u64) -> Self {
        Self::from(read_components::<M, 4>(
            memory,
            address,
            Representation::Float32,
        ))
    }

    /// Reads the vector from four consecutive 32-bit integers in process
    /// memory. Components that can not be read are zero.
    pub fn from_ints<M: ProcessMemory + ?Sized>(memory: &M, address: u64) -> Self {
        Self::from(read_components::<M, 4>(
            memory,
            address,
            Representation::Int32,
        ))
    }
}
