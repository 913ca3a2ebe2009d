//! ROI projection for a security operations baseline.
//!
//! Fixed improvement coefficients are applied to the current incident load,
//! investigation effort and detection time. Savings are split into three
//! additive categories: investigation efficiency, breach prevention and
//! faster detection.

pub mod input;
pub mod model;

pub use input::{RoiField, RoiInput};
pub use model::{
    compute_roi, CurrentState, ProjectedState, RoiCoefficients, RoiResult, Savings, SavingsCategory,
};
