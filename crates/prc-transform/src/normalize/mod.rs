//! Per-value field normalization.
//!
//! Pure functions with fallback-on-failure semantics:
//! - **date**: ordered candidate-format parsing to canonical `YYYY-MM-DD`
//! - **phone**: digit extraction to `DDD-DDD-DDDD`, originals preserved on failure

pub mod date;
pub mod phone;

pub use date::{is_canonical_date, standardize_date};
pub use phone::standardize_phone;
