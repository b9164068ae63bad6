// Unit tests for Team Builder

use team_builder::core::{
    cost::{build_cost_matrix, pair_cost, satisfaction, CostMatrix},
    greedy::greedy_assign,
    optimizer::{local_optimize, total_cost},
};
use team_builder::models::{Employee, EmptyWishlistPolicy, Wishlist};

fn group(ids: std::ops::Range<u32>) -> Vec<Employee> {
    ids.map(|id| Employee::new(id, format!("Employee {}", id))).collect()
}

#[test]
fn test_satisfaction_top_choice_is_one() {
    let wishlist = Wishlist::new(1, vec![5, 6, 7]);
    assert_eq!(satisfaction(Some(&wishlist), 5), 1.0);
}

#[test]
fn test_satisfaction_last_choice() {
    let wishlist = Wishlist::new(1, vec![5, 6, 7, 8, 9]);
    assert!((satisfaction(Some(&wishlist), 9) - 0.2).abs() < 1e-12);
}

#[test]
fn test_unknown_target_is_neutral() {
    let wishlist = Wishlist::new(1, vec![5, 6]);
    assert_eq!(satisfaction(Some(&wishlist), 42), 0.0);
    assert_eq!(pair_cost(0.0, satisfaction(Some(&wishlist), 42)), 1000);
}

#[test]
fn test_no_wishlists_cost_1000() {
    let leads = group(1..4);
    let juniors = group(11..14);

    let matrix = build_cost_matrix(&leads, &juniors, &[], &[], EmptyWishlistPolicy::TreatAsMissing)
        .unwrap();

    for lead in 0..3 {
        assert!(matrix.row(lead).iter().all(|&cost| cost == 1000));
    }
}

#[test]
fn test_lead_without_wishlist_and_junior_without_wishlist() {
    let leads = group(1..3);
    let juniors = group(11..13);
    // only lead 1 and junior 11 have lists; lead 2 and junior 12 have none
    let lead_lists = vec![Wishlist::new(1, vec![11, 12])];
    let junior_lists = vec![Wishlist::new(11, vec![1, 2])];

    let matrix = build_cost_matrix(
        &leads,
        &juniors,
        &lead_lists,
        &junior_lists,
        EmptyWishlistPolicy::TreatAsMissing,
    )
    .unwrap();

    assert_eq!(matrix.get(1, 1), 1000);
}

#[test]
fn test_cost_monotonic_in_rank() {
    let leads = group(1..2);
    let juniors = group(11..15);
    let lead_lists = vec![Wishlist::new(1, vec![11, 12, 13, 14])];

    let matrix = build_cost_matrix(
        &leads,
        &juniors,
        &lead_lists,
        &[],
        EmptyWishlistPolicy::TreatAsMissing,
    )
    .unwrap();

    let row = matrix.row(0);
    assert!(row.windows(2).all(|pair| pair[0] < pair[1]), "row: {:?}", row);
}

#[test]
fn test_greedy_then_optimize_never_worse() {
    let matrix = CostMatrix::from_rows(vec![
        vec![333, 400, 900, 1000],
        vec![350, 1000, 1000, 500],
        vec![340, 600, 1000, 1000],
        vec![1000, 450, 420, 1000],
    ]);

    let initial = greedy_assign(&matrix);
    let greedy_cost = total_cost(&matrix, &initial);
    let outcome = local_optimize(&matrix, initial, 1000);

    assert!(total_cost(&matrix, &outcome.assignment) <= greedy_cost);
    assert!(outcome.converged);
}

#[test]
fn test_optimizer_is_idempotent() {
    let matrix = CostMatrix::from_rows(vec![
        vec![333, 400, 900, 1000],
        vec![350, 1000, 1000, 500],
        vec![340, 600, 1000, 1000],
        vec![1000, 450, 420, 1000],
    ]);

    let first = local_optimize(&matrix, greedy_assign(&matrix), 1000);
    let second = local_optimize(&matrix, first.assignment.clone(), 1000);

    assert_eq!(
        total_cost(&matrix, &first.assignment),
        total_cost(&matrix, &second.assignment)
    );
    assert_eq!(second.swaps, 0);
}
