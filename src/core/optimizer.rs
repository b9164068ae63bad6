use crate::core::cost::CostMatrix;

/// Result of the local search
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct OptimizationOutcome {
    pub assignment: Vec<usize>,
    /// Sweeps actually run, at most the configured cap
    pub sweeps: usize,
    /// Swaps kept across all sweeps
    pub swaps: usize,
    /// `false` when the sweep cap stopped the search before a fixed point
    pub converged: bool,
}

/// Sum of the pair costs of an assignment
pub fn total_cost(matrix: &CostMatrix, assignment: &[usize]) -> u64 {
    assignment
        .iter()
        .enumerate()
        .map(|(lead, &junior)| matrix.get(lead, junior) as u64)
        .sum()
}

#[inline]
fn pair_sum(matrix: &CostMatrix, assignment: &[usize], i: usize, j: usize) -> u64 {
    matrix.get(i, assignment[i]) as u64 + matrix.get(j, assignment[j]) as u64
}

/// Pairwise-swap hill climbing
///
/// Every sweep visits each ordered pair of distinct team leads `(i, j)` in
/// row-major order, swaps their juniors and keeps the swap only if the total
/// cost strictly drops. A kept swap is the new baseline for the rest of the
/// sweep. Sweeps repeat until one keeps nothing or `max_sweeps` is reached.
///
/// Only the two touched pairs change, so comparing their summed costs decides
/// exactly what comparing the full totals would.
pub fn local_optimize(
    matrix: &CostMatrix,
    mut assignment: Vec<usize>,
    max_sweeps: usize,
) -> OptimizationOutcome {
    let n = assignment.len();
    let mut sweeps = 0;
    let mut swaps = 0;
    let mut improved = true;

    while improved && sweeps < max_sweeps {
        improved = false;
        sweeps += 1;

        for i in 0..n {
            for j in 0..n {
                if i == j {
                    continue;
                }

                let before = pair_sum(matrix, &assignment, i, j);
                assignment.swap(i, j);
                let after = pair_sum(matrix, &assignment, i, j);

                if after < before {
                    swaps += 1;
                    improved = true;
                } else {
                    assignment.swap(i, j);
                }
            }
        }

        tracing::trace!("sweep {} done, {} swaps so far", sweeps, swaps);
    }

    OptimizationOutcome {
        assignment,
        sweeps,
        swaps,
        converged: !improved,
    }
}
