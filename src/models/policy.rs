//! Per-state action preference weights

use serde::{Deserialize, Serialize};

use crate::error::PolicyError;

/// `(num_states, num_actions)` matrix of action preference weights, row-major
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct PolicyWeights {
    num_states: usize,
    num_actions: usize,
    weights: Vec<f64>,
}

impl PolicyWeights {
    /// Build from one row of weights per state
    pub fn from_rows(rows: Vec<Vec<f64>>) -> Result<Self, PolicyError> {
        let num_actions = rows.first().map(|r| r.len()).unwrap_or(0);
        let mut weights = Vec::with_capacity(rows.len() * num_actions);
        for (i, row) in rows.iter().enumerate() {
            if row.len() != num_actions {
                return Err(PolicyError::Ragged { row: i, expected: num_actions, found: row.len() });
            }
            weights.extend_from_slice(row);
        }
        Ok(Self { num_states: rows.len(), num_actions, weights })
    }

    /// Build from a flat row-major buffer
    pub fn from_flat(weights: Vec<f64>, num_actions: usize) -> Result<Self, PolicyError> {
        if num_actions == 0 {
            if !weights.is_empty() {
                return Err(PolicyError::FlatLength { len: weights.len(), actions: 0 });
            }
            return Ok(Self { num_states: 0, num_actions: 0, weights });
        }
        if weights.len() % num_actions != 0 {
            return Err(PolicyError::FlatLength { len: weights.len(), actions: num_actions });
        }
        Ok(Self { num_states: weights.len() / num_actions, num_actions, weights })
    }

    /// One-hot policy from a deterministic action per state
    pub fn from_actions(actions: &[usize], num_actions: usize) -> Result<Self, PolicyError> {
        let mut weights = vec![0.0; actions.len() * num_actions];
        for (state, &action) in actions.iter().enumerate() {
            if action >= num_actions {
                return Err(PolicyError::ActionOutOfRange { state, action, actions: num_actions });
            }
            weights[state * num_actions + action] = 1.0;
        }
        Ok(Self { num_states: actions.len(), num_actions, weights })
    }

    pub fn num_states(&self) -> usize {
        self.num_states
    }

    pub fn num_actions(&self) -> usize {
        self.num_actions
    }

    /// Weights for state `s`
    pub fn row(&self, s: usize) -> Option<&[f64]> {
        if s >= self.num_states {
            return None;
        }
        let start = s * self.num_actions;
        self.weights.get(start..start + self.num_actions)
    }

    /// Sum of the weights of state `s`
    pub fn row_sum(&self, s: usize) -> f64 {
        self.row(s).map(|r| r.iter().sum()).unwrap_or(0.0)
    }

    /// Index of the largest weight of state `s`; ties go to the lowest index
    pub fn greedy_action(&self, s: usize) -> Option<usize> {
        self.row(s).and_then(argmax)
    }
}

/// First index of the maximum; a NaN wins as soon as it is seen
pub fn argmax(row: &[f64]) -> Option<usize> {
    let mut best: Option<(usize, f64)> = None;
    for (i, &w) in row.iter().enumerate() {
        if w.is_nan() {
            return Some(i);
        }
        match best {
            Some((_, b)) if w <= b => {}
            _ => best = Some((i, w)),
        }
    }
    best.map(|(i, _)| i)
}
