use crate::core::cost::CostMatrix;

/// Initial assignment: `result[lead] = junior`
///
/// Team leads whose best option is cheapest pick first (stable on ties), each
/// taking the cheapest junior still free. The lowest junior index wins a tie.
pub fn greedy_assign(matrix: &CostMatrix) -> Vec<usize> {
    let n = matrix.size();

    let mut order: Vec<usize> = (0..n).collect();
    order.sort_by_key(|&lead| matrix.row_min(lead));

    let mut assignment = vec![0; n];
    let mut claimed = vec![false; n];

    for lead in order {
        let mut best: Option<(usize, u32)> = None;
        for (junior, &cost) in matrix.row(lead).iter().enumerate() {
            if claimed[junior] {
                continue;
            }
            if best.map_or(true, |(_, best_cost)| cost < best_cost) {
                best = Some((junior, cost));
            }
        }

        // n leads against n juniors, a free junior always remains
        if let Some((junior, _)) = best {
            assignment[lead] = junior;
            claimed[junior] = true;
        }
    }

    assignment
}
