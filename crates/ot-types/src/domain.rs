//! Parameter domain and candidate points.

use serde::{Deserialize, Serialize};

use crate::{validation_error, OtResult};

/// Closed box of valid values for each tunable dimension.
///
/// Immutable for the lifetime of a search run: construct once at startup and
/// pass by reference everywhere.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct Bounds {
    pub lr_min: f64,
    pub lr_max: f64,
    pub depth_min: i32,
    pub depth_max: i32,
    pub reg_min: f64,
    pub reg_max: f64,
}

impl Bounds {
    /// Creates a bounds box, checking `min <= max` for every dimension.
    pub fn new(
        lr_min: f64,
        lr_max: f64,
        depth_min: i32,
        depth_max: i32,
        reg_min: f64,
        reg_max: f64,
    ) -> OtResult<Self> {
        if !lr_min.is_finite() || !lr_max.is_finite() {
            return Err(validation_error!(
                "lr bounds must be finite: {} .. {}",
                lr_min,
                lr_max
            ));
        }
        if !reg_min.is_finite() || !reg_max.is_finite() {
            return Err(validation_error!(
                "reg bounds must be finite: {} .. {}",
                reg_min,
                reg_max
            ));
        }
        if lr_min > lr_max {
            return Err(validation_error!(
                "lr bounds inverted: {} > {}",
                lr_min,
                lr_max
            ));
        }
        if depth_min > depth_max {
            return Err(validation_error!(
                "depth bounds inverted: {} > {}",
                depth_min,
                depth_max
            ));
        }
        if reg_min > reg_max {
            return Err(validation_error!(
                "reg bounds inverted: {} > {}",
                reg_min,
                reg_max
            ));
        }
        Ok(Self {
            lr_min,
            lr_max,
            depth_min,
            depth_max,
            reg_min,
            reg_max,
        })
    }

    pub fn clamp_lr(&self, lr: f64) -> f64 {
        lr.clamp(self.lr_min, self.lr_max)
    }

    pub fn clamp_depth(&self, depth: i32) -> i32 {
        depth.clamp(self.depth_min, self.depth_max)
    }

    pub fn clamp_reg(&self, reg: f64) -> f64 {
        reg.clamp(self.reg_min, self.reg_max)
    }

    /// Midpoint of every dimension (integer midpoint for depth).
    pub fn center(&self) -> HyperParams {
        HyperParams {
            lr: (self.lr_min + self.lr_max) / 2.0,
            depth: (self.depth_min + self.depth_max) / 2,
            reg: (self.reg_min + self.reg_max) / 2.0,
        }
    }

    /// Returns `true` if every field of `params` lies inside the box.
    pub fn contains(&self, params: &HyperParams) -> bool {
        params.lr >= self.lr_min
            && params.lr <= self.lr_max
            && params.depth >= self.depth_min
            && params.depth <= self.depth_max
            && params.reg >= self.reg_min
            && params.reg <= self.reg_max
    }
}

impl Default for Bounds {
    fn default() -> Self {
        Self {
            lr_min: 0.001,
            lr_max: 0.1,
            depth_min: 1,
            depth_max: 10,
            reg_min: 0.0,
            reg_max: 1.0,
        }
    }
}

/// One concrete assignment of values within the domain.
///
/// Points are never mutated in place; every transformation produces a fresh
/// point and the calling engine decides whether to keep or discard it.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct HyperParams {
    /// Learning rate.
    pub lr: f64,
    /// Model depth (integer dimension).
    pub depth: i32,
    /// Regularization strength.
    pub reg: f64,
}

impl HyperParams {
    pub fn new(lr: f64, depth: i32, reg: f64) -> Self {
        Self { lr, depth, reg }
    }

    /// Returns a copy with every field clamped into `bounds`.
    pub fn clamped(&self, bounds: &Bounds) -> Self {
        Self {
            lr: bounds.clamp_lr(self.lr),
            depth: bounds.clamp_depth(self.depth),
            reg: bounds.clamp_reg(self.reg),
        }
    }
}

impl std::fmt::Display for HyperParams {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(
            f,
            "{{lr: {:.6}, depth: {}, reg: {:.4}}}",
            self.lr, self.depth, self.reg
        )
    }
}
