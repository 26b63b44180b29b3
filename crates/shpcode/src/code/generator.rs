//! Tracking code generator.
//!
//! The serial segment comes from an injected [`SerialSource`] so callers can
//! pin the output in tests. Uniqueness is not checked here: the record store's
//! key constraint rejects a colliding code at insert time.

use rand::rngs::ThreadRng;
use rand::Rng;

use super::{Category, TrackingCode, SERIAL_SPACE};

/// Supplies the raw serial number for a new code.
///
/// Implementations should return values in `0..SERIAL_SPACE`. Larger values
/// are reduced modulo `SERIAL_SPACE` by the generator.
pub trait SerialSource {
    fn next_serial(&mut self) -> u64;
}

impl<F> SerialSource for F
where
    F: FnMut() -> u64,
{
    fn next_serial(&mut self) -> u64 {
        self()
    }
}

/// Uniform draws over `0..SERIAL_SPACE` from any `rand` RNG.
///
/// Not cryptographically meaningful; collisions are roughly one in 10^12 per
/// pair of codes with the same category.
#[derive(Debug, Clone)]
pub struct RngSerialSource<R> {
    rng: R,
}

impl<R: Rng> RngSerialSource<R> {
    pub fn new(rng: R) -> Self {
        Self { rng }
    }
}

impl RngSerialSource<ThreadRng> {
    pub fn thread() -> Self {
        Self::new(rand::thread_rng())
    }
}

impl<R: Rng> SerialSource for RngSerialSource<R> {
    fn next_serial(&mut self) -> u64 {
        self.rng.gen_range(0..SERIAL_SPACE)
    }
}

/// Produces tracking codes from a serial source.
pub struct CodeGenerator<S> {
    source: S,
}

impl<S: SerialSource> CodeGenerator<S> {
    pub fn new(source: S) -> Self {
        Self { source }
    }

    /// Draws a new code for `category`. Never fails.
    pub fn generate(&mut self, category: Category) -> TrackingCode {
        let serial = self.source.next_serial() % SERIAL_SPACE;
        TrackingCode::from_parts(serial, category)
    }
}

/// Generator backed by the thread-local RNG.
pub type ThreadCodeGenerator = CodeGenerator<RngSerialSource<ThreadRng>>;

impl Default for ThreadCodeGenerator {
    fn default() -> Self {
        Self::new(RngSerialSource::thread())
    }
}

/// Generates one code using the thread-local RNG.
pub fn generate_code(category: Category) -> TrackingCode {
    ThreadCodeGenerator::default().generate(category)
}
