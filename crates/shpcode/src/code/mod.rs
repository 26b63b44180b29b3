//! Tracking code generation and validation.
//!
//! A tracking code is 15 ASCII characters: the literal prefix `BR`, a
//! zero-padded 12-digit serial, and a one-letter [`Category`] suffix.
//!
//! ```rust
//! use shpcode::code::{is_valid_code, Category, CodeGenerator};
//!
//! let mut generator = CodeGenerator::new(|| 42u64);
//! let code = generator.generate(Category::F);
//! assert_eq!(code.as_str(), "BR000000000042F");
//! assert!(is_valid_code(code.as_str()));
//! ```

pub mod category;
pub mod generator;
pub mod tracking_code;
pub mod validator;

pub use category::Category;
pub use generator::{
    generate_code, CodeGenerator, RngSerialSource, SerialSource, ThreadCodeGenerator,
};
pub use tracking_code::TrackingCode;
pub use validator::{is_valid_code, normalize_query};

/// Literal prefix shared by every tracking code.
pub const CODE_PREFIX: &str = "BR";

/// Number of digits in the serial segment.
pub const SERIAL_DIGITS: usize = 12;

/// Exclusive upper bound of the serial segment (10^12).
pub const SERIAL_SPACE: u64 = 1_000_000_000_000;

/// Total length of a tracking code: prefix + serial + category.
pub const CODE_LEN: usize = 15;
