//! Stochastic neighbor generation over the bounded parameter domain.
//!
//! Every function here consumes entropy from the caller's RNG in a fixed
//! order (lr, then reg, then depth). That order is part of the contract:
//! reproducibility of a whole search run depends on it.

use rand::Rng;
use rand_distr::StandardNormal;

use ot_types::{Bounds, HyperParams};

/// Step scale used by hill climbing and beam search.
pub const DEFAULT_STEP_SCALE: f64 = 0.2;

/// Larger step scale used by simulated annealing proposals to encourage
/// broader exploration.
pub const ANNEAL_STEP_SCALE: f64 = 0.4;

/// Samples a uniformly random point inside `bounds`.
pub fn random_point<R: Rng>(rng: &mut R, bounds: &Bounds) -> HyperParams {
    HyperParams {
        lr: rng.gen_range(bounds.lr_min..=bounds.lr_max),
        depth: rng.gen_range(bounds.depth_min..=bounds.depth_max),
        reg: rng.gen_range(bounds.reg_min..=bounds.reg_max),
    }
}

/// Produces a perturbed copy of `params`, clamped back into `bounds`.
///
/// Each field gets an independent `N(0, step_scale)` draw: the learning rate
/// moves by `g * 0.02`, regularization by `g * 0.01`, and depth by
/// `round(g * 2.0)` (an integer delta). Clamping guarantees the domain
/// invariant regardless of perturbation magnitude.
pub fn local_neighbor<R: Rng>(
    params: &HyperParams,
    rng: &mut R,
    bounds: &Bounds,
    step_scale: f64,
) -> HyperParams {
    let g_lr: f64 = rng.sample::<f64, _>(StandardNormal) * step_scale;
    let g_reg: f64 = rng.sample::<f64, _>(StandardNormal) * step_scale;
    let g_depth: f64 = rng.sample::<f64, _>(StandardNormal) * step_scale;

    // Extreme step scales can push the depth delta past i32; widen to i64 so
    // the arithmetic cannot overflow before clamping takes over.
    let depth = (params.depth as i64)
        .saturating_add((g_depth * 2.0).round() as i64)
        .clamp(i64::from(i32::MIN), i64::from(i32::MAX)) as i32;

    HyperParams {
        lr: bounds.clamp_lr(params.lr + g_lr * 0.02),
        reg: bounds.clamp_reg(params.reg + g_reg * 0.01),
        depth: bounds.clamp_depth(depth),
    }
}

/// Generates `k` independent neighbors of `params` at the given step scale.
pub fn generate_neighbors<R: Rng>(
    params: &HyperParams,
    k: usize,
    rng: &mut R,
    bounds: &Bounds,
    step_scale: f64,
) -> Vec<HyperParams> {
    let mut neighbors = Vec::with_capacity(k);
    for _ in 0..k {
        neighbors.push(local_neighbor(params, rng, bounds, step_scale));
    }
    neighbors
}
