//! Shared building blocks for both CRC-32 families.
//!
//! This module provides:
//! - Const-fn lookup table generation for any reflected 32-bit polynomial
//! - The bitwise reference implementation (the correctness oracle)
//! - The generic byte-wise and slice-by-N kernels

pub mod portable;
pub mod reference;
pub mod tables;
