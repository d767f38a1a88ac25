//! Shared test utilities for `waypath-core`.

use proptest::prelude::*;
use proptest::test_runner::Config as ProptestConfig;
use rand::rngs::SmallRng;
use rand::{Rng, SeedableRng};
use waypath_test_support::proptest_profile::ProptestProfile;

use crate::{
    distance::{Metric, Weight},
    point::Point,
};

/// Builds a proptest configuration from the shared run profile.
#[must_use]
pub(crate) fn suite_proptest_config(default_cases: u32) -> ProptestConfig {
    let profile = ProptestProfile::load(default_cases);
    ProptestConfig {
        cases: profile.cases(),
        ..ProptestConfig::default()
    }
}

/// Converts coordinate pairs into points.
#[must_use]
pub(crate) fn points(coordinates: &[(u32, u32)]) -> Vec<Point> {
    coordinates.iter().copied().map(Point::from).collect()
}

/// Generates `count` points inside an `extent` x `extent` square.
#[must_use]
pub(crate) fn seeded_points(seed: u64, count: usize, extent: u32) -> Vec<Point> {
    let mut rng = SmallRng::seed_from_u64(seed);
    (0..count)
        .map(|_| Point::new(rng.gen_range(0..extent), rng.gen_range(0..extent)))
        .collect()
}

/// Small point sets, including coincident points, for exhaustive checks.
pub(crate) fn small_point_set(max_points: usize) -> impl Strategy<Value = Vec<Point>> {
    prop::collection::vec((0u32..48, 0u32..48).prop_map(Point::from), 2..=max_points)
}

/// Cost of the optimal tour, found by trying every ordering that starts at
/// vertex 0. Only usable for tiny inputs.
#[must_use]
pub(crate) fn brute_force_tour_cost<M: Metric>(metric: &M) -> Weight {
    fn search<M: Metric>(
        metric: &M,
        current: usize,
        visited: &mut [bool],
        remaining: usize,
        cost: Weight,
        best: &mut Weight,
    ) {
        if cost >= *best {
            return;
        }
        if remaining == 0 {
            *best = (*best).min(cost + metric.distance(current, 0));
            return;
        }
        for next in 0..visited.len() {
            if visited[next] {
                continue;
            }
            visited[next] = true;
            let step = metric.distance(current, next);
            search(metric, next, visited, remaining - 1, cost + step, best);
            visited[next] = false;
        }
    }

    let vertex_count = metric.vertex_count();
    let mut visited = vec![false; vertex_count];
    visited[0] = true;
    let mut best = Weight::MAX;
    search(metric, 0, &mut visited, vertex_count - 1, 0, &mut best);
    best
}

/// Weight of the lightest spanning tree, found by checking every subset of
/// `n - 1` edges. Only usable for tiny inputs.
#[must_use]
pub(crate) fn brute_force_mst_weight<M: Metric>(metric: &M) -> Weight {
    fn find(parent: &mut [usize], node: usize) -> usize {
        let mut current = node;
        while parent[current] != current {
            current = parent[current];
        }
        current
    }

    fn is_spanning_tree(vertex_count: usize, chosen: &[(usize, usize)]) -> bool {
        let mut parent: Vec<usize> = (0..vertex_count).collect();
        for &(left, right) in chosen {
            let left_root = find(&mut parent, left);
            let right_root = find(&mut parent, right);
            if left_root == right_root {
                return false;
            }
            parent[right_root] = left_root;
        }
        true
    }

    fn choose<M: Metric>(
        metric: &M,
        pairs: &[(usize, usize)],
        start: usize,
        chosen: &mut Vec<(usize, usize)>,
        best: &mut Weight,
    ) {
        let vertex_count = metric.vertex_count();
        if chosen.len() == vertex_count - 1 {
            if is_spanning_tree(vertex_count, chosen) {
                let weight = chosen
                    .iter()
                    .map(|&(left, right)| metric.distance(left, right))
                    .sum();
                *best = (*best).min(weight);
            }
            return;
        }
        for index in start..pairs.len() {
            chosen.push(pairs[index]);
            choose(metric, pairs, index + 1, chosen, best);
            chosen.pop();
        }
    }

    let vertex_count = metric.vertex_count();
    let pairs: Vec<(usize, usize)> = (0..vertex_count)
        .flat_map(|left| ((left + 1)..vertex_count).map(move |right| (left, right)))
        .collect();
    let mut best = Weight::MAX;
    choose(metric, &pairs, 0, &mut Vec::new(), &mut best);
    best
}

/// Asserts that `vertices` is a closed Hamiltonian cycle over
/// `0..vertex_count` starting and ending at vertex 0.
pub(crate) fn assert_hamiltonian(vertices: &[usize], vertex_count: usize) {
    assert_eq!(vertices.len(), vertex_count + 1, "tour length");
    assert_eq!(vertices.first(), Some(&0), "tour must start at vertex 0");
    assert_eq!(vertices.last(), Some(&0), "tour must end at vertex 0");
    let mut interior = vertices[..vertex_count].to_vec();
    interior.sort_unstable();
    let expected: Vec<usize> = (0..vertex_count).collect();
    assert_eq!(interior, expected, "tour must visit every vertex once");
}
