//! # Constants and type definitions for kepsolve
//!
//! This module centralizes the numeric constants and common type aliases
//! used throughout the `kepsolve` library.

/// 2π, useful for trigonometric conversions
pub const DPI: f64 = 2. * std::f64::consts::PI;

/// Angle in radians
pub type Radian = f64;

/// Newton steps performed when the caller does not choose a budget.
///
/// Six steps reach machine precision for the mild eccentricities of a
/// planetary animation loop while keeping the per-frame cost fixed.
pub const DEFAULT_NEWTON_STEPS: usize = 6;
