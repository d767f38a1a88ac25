//! End-to-end tests for the public tour API.

mod common;

use common::{LineMetric, points};
use rstest::{fixture, rstest};
use tracing::Level;
use tracing_subscriber::layer::SubscriberExt;
use waypath_core::{
    DistanceMatrix, MstErrorCode, Point, Strategy, TourError, TourErrorCode, TourSolverBuilder,
    build_spanning_tree, compute_approximate_tour, extract_eulerian_circuit, finalize_tour,
    match_odd_vertices, mst_preorder_tour, nearest_neighbour_tour,
};
use waypath_test_support::tracing::RecordingLayer;

#[fixture]
fn unit_square() -> Vec<Point> {
    points(&[(0, 0), (0, 1), (1, 0), (1, 1)])
}

#[rstest]
fn unit_square_walks_every_stage(unit_square: Vec<Point>) {
    let matrix = DistanceMatrix::from_points(&unit_square);
    let tree = build_spanning_tree(&matrix).expect("tree must build");
    assert_eq!(tree.weight(), 3);

    let multigraph = match_odd_vertices(&tree, &matrix).expect("matching must succeed");
    assert_eq!(multigraph.matching_edge_count(), 2);
    assert_eq!(multigraph.edge_count(), 5);

    let walk = extract_eulerian_circuit(multigraph).expect("circuit must exist");
    assert_eq!(walk, vec![0, 1, 0, 2, 3, 0]);

    let tour = finalize_tour(&walk, &matrix).expect("walk covers every vertex");
    assert_eq!(tour.vertices(), &[0, 1, 2, 3, 0]);
    assert_eq!(tour.cost(), 4);
    assert_eq!(tour, compute_approximate_tour(&unit_square).expect("tour"));
}

#[rstest]
fn two_points_make_an_out_and_back_tour() {
    let tour = compute_approximate_tour(&points(&[(0, 0), (5, 0)])).expect("tour");
    assert_eq!(tour.vertices(), &[0, 1, 0]);
    assert_eq!(tour.cost(), 10);
    assert_eq!(tour.into_vertices(), vec![0, 1, 0]);
}

#[rstest]
fn insufficient_points_are_reported_before_any_stage_runs() {
    let err = compute_approximate_tour(&points(&[(3, 4)])).expect_err("one point");
    assert_eq!(err, TourError::InsufficientPoints { got: 1 });
    assert_eq!(err.code(), TourErrorCode::InsufficientPoints);
    assert_eq!(err.mst_code(), None);
}

#[rstest]
fn spanning_tree_errors_keep_their_code() {
    let err = nearest_neighbour_tour(&LineMetric::new(Vec::new())).expect_err("empty metric");
    assert_eq!(err.code(), TourErrorCode::InsufficientPoints);

    let tree_err = build_spanning_tree(&LineMetric::new(vec![7])).expect_err("one vertex");
    let wrapped = TourError::from(tree_err);
    assert_eq!(wrapped.code(), TourErrorCode::SpanningTreeFailure);
    assert_eq!(wrapped.mst_code(), Some(MstErrorCode::InsufficientVertices));
}

#[rstest]
fn stages_accept_custom_metrics() {
    // Positions on a line, listed out of order.
    let metric = LineMetric::new(vec![0, 30, 10, 20]);
    let tree = build_spanning_tree(&metric).expect("tree must build");
    assert_eq!(tree.weight(), 30);

    let walk = extract_eulerian_circuit(match_odd_vertices(&tree, &metric).expect("matching"))
        .expect("circuit");
    let tour = finalize_tour(&walk, &metric).expect("tour");
    assert_eq!(tour.cost(), 60);
    assert!(tour.is_hamiltonian(4));

    let preorder = mst_preorder_tour(&tree, &metric).expect("preorder");
    assert_eq!(preorder.vertices(), &[0, 2, 3, 1, 0]);
    assert_eq!(preorder.cost(), 60);
}

#[rstest]
#[case(Strategy::Christofides)]
#[case(Strategy::NearestNeighbour)]
#[case(Strategy::MstPreorder)]
fn every_strategy_closes_the_unit_square(unit_square: Vec<Point>, #[case] strategy: Strategy) {
    let tour = TourSolverBuilder::new()
        .with_strategy(strategy)
        .build()
        .solve(&unit_square)
        .expect("tour must build");
    assert!(tour.is_hamiltonian(unit_square.len()));
    assert_eq!(tour.cost(), 4);
}

#[rstest]
fn solve_emits_stage_spans(unit_square: Vec<Point>) {
    let layer = RecordingLayer::default();
    let subscriber = tracing_subscriber::registry().with(layer.clone());
    let solver = TourSolverBuilder::new().build();

    let tour = tracing::subscriber::with_default(subscriber, || solver.solve(&unit_square))
        .expect("tour must build");
    assert_eq!(tour.cost(), 4);

    let solve = layer.span("core.solve").expect("core.solve span must exist");
    assert_eq!(solve.fields.get("points"), Some(&"4".to_owned()));
    assert_eq!(
        solve.fields.get("strategy"),
        Some(&"christofides".to_owned())
    );
    for stage in ["core.mst", "core.matching", "core.euler", "core.finalize"] {
        assert!(layer.span(stage).is_some(), "{stage} span must exist");
    }
    assert!(layer.has_event(Level::INFO, "tour computed"));
}

#[rstest]
fn failed_solves_record_the_error() {
    let layer = RecordingLayer::default();
    let subscriber = tracing_subscriber::registry().with(layer.clone());
    let solver = TourSolverBuilder::new().build();

    let result = tracing::subscriber::with_default(subscriber, || solver.solve(&[]));
    assert!(result.is_err());

    let events = layer.events();
    assert!(
        events.iter().any(|event| event.level == Level::ERROR),
        "instrumented solve must log its error"
    );
}
