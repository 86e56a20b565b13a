use super::*;
use crate::helpers::*;
use crate::utils::ErrorKind;
use rand::Rng;

parameterized_test! {can_evaluate_cost, (coordinates, tour, clustering, is_rounded, norm, expected), {
    let tour: Vec<usize> = tour;

    let cost = evaluate_cost(&coordinates, tour.as_slice(), &clustering, is_rounded, norm).expect("cannot evaluate cost");

    assert!((cost - expected).abs() < 1E-9, "cost: {cost}, expected: {expected}");
}}

can_evaluate_cost! {
    case01_square_rounded: (create_unit_square(), vec![0, 1, 2, 3], Clustering::default(), true, NormOrder::EUCLIDEAN, 4.),
    case02_square_exact: (create_unit_square(), vec![0, 1, 2, 3], Clustering::default(), false, NormOrder::EUCLIDEAN, 4.),
    case03_crossing_rounded: (create_unit_square(), vec![0, 2, 1, 3], Clustering::default(), true, NormOrder::EUCLIDEAN, 4.),
    case04_crossing_exact: (create_unit_square(), vec![0, 2, 1, 3], Clustering::default(), false, NormOrder::EUCLIDEAN, 2. + 2. * 2_f64.sqrt()),
    case05_crossing_manhattan: (create_unit_square(), vec![0, 2, 1, 3], Clustering::default(), true, NormOrder::MANHATTAN, 6.),
    case06_crossing_chebyshev: (create_unit_square(), vec![0, 2, 1, 3], Clustering::default(), false, NormOrder::CHEBYSHEV, 4.),
    case07_generalized_rounded: (create_unit_square(), vec![0, 2], Clustering::new(vec![vec![0, 1], vec![2, 3]]), true, NormOrder::EUCLIDEAN, 2.),
    case08_generalized_exact: (create_unit_square(), vec![0, 2], Clustering::new(vec![vec![0, 1], vec![2, 3]]), false, NormOrder::EUCLIDEAN, 2. * 2_f64.sqrt()),
}

parameterized_test! {can_round_half_to_even, (step, expected_rounded, expected_exact), {
    let coordinates = create_coordinates(&[(0., 0.), (step, 0.), (2. * step, 0.), (3. * step, 0.)]);

    let rounded = evaluate_cost(&coordinates, &[0, 1, 2, 3], &Clustering::default(), true, NormOrder::EUCLIDEAN);
    let exact = evaluate_cost(&coordinates, &[0, 1, 2, 3], &Clustering::default(), false, NormOrder::EUCLIDEAN);

    assert_eq!(rounded, Ok(expected_rounded));
    assert_eq!(exact, Ok(expected_exact));
}}

can_round_half_to_even! {
    // edges: 0.5 0.5 0.5 and closing 1.5
    case01_half: (0.5, 2., 3.),
    // edges: 2.5 2.5 2.5 and closing 7.5
    case02_two_and_half: (2.5, 14., 15.),
}

#[test]
fn can_reject_wrong_tour_length() {
    let result = evaluate_cost(&create_unit_square(), &[0, 1, 2], &Clustering::default(), true, NormOrder::EUCLIDEAN);

    assert_eq!(result, Err(CheckError::validation("tour has 3 vertices, expected 4")));
}

#[test]
fn can_reject_wrong_tour_length_for_generalized_problem() {
    let clustering = Clustering::new(vec![vec![0, 1], vec![2, 3]]);

    let result = evaluate_cost(&create_unit_square(), &[0, 1, 2, 3], &clustering, true, NormOrder::EUCLIDEAN);

    assert_eq!(result, Err(CheckError::validation("tour has 4 vertices, expected 2")));
}

#[test]
fn can_reject_out_of_range_vertex() {
    let result = evaluate_cost(&create_unit_square(), &[0, 1, 2, 7], &Clustering::default(), true, NormOrder::EUCLIDEAN);

    assert_eq!(result, Err(CheckError::validation("tour vertex 7 is out of range [0, 4)")));
}

#[test]
fn can_reject_vertex_with_huge_index() {
    let vertex = usize::MAX / 2;

    let result =
        evaluate_cost(&create_unit_square(), &[0, 1, 2, vertex], &Clustering::default(), true, NormOrder::EUCLIDEAN);

    assert_eq!(result, Err(CheckError::validation(format!("tour vertex {vertex} is out of range [0, 4)"))));
}

#[test]
fn can_reject_invalid_clustering() {
    let clustering = Clustering::new(vec![vec![0, 1], vec![1, 2, 3]]);

    let result = evaluate_cost(&create_unit_square(), &[0, 2], &clustering, true, NormOrder::EUCLIDEAN);

    assert_eq!(result.map_err(|err| err.kind), Err(ErrorKind::Validation));
}

#[test]
fn can_sum_exact_edge_lengths_when_rounding_is_disabled() {
    let mut rng = create_random(11);

    for _ in 0..50 {
        let size = rng.gen_range(4..30);
        let points = (0..size).map(|_| (rng.gen_range(-100. ..100.), rng.gen_range(-100. ..100.))).collect::<Vec<_>>();
        let coordinates = create_coordinates(points.as_slice());
        let tour = (0..size).collect::<Vec<_>>();

        let expected = (0..size)
            .map(|idx| {
                let (x1, y1) = points[idx];
                let (x2, y2) = points[(idx + 1) % size];
                ((x1 - x2).powi(2) + (y1 - y2).powi(2)).sqrt()
            })
            .sum::<Float>();

        let exact = evaluate_cost(&coordinates, tour.as_slice(), &Clustering::default(), false, NormOrder::EUCLIDEAN)
            .expect("cannot evaluate exact cost");
        let rounded = evaluate_cost(&coordinates, tour.as_slice(), &Clustering::default(), true, NormOrder::EUCLIDEAN)
            .expect("cannot evaluate rounded cost");

        assert!((exact - expected).abs() < 1E-6);
        assert_eq!(rounded.fract(), 0.);
        assert!((exact - rounded).abs() <= 0.5 * size as Float + 1E-9);
    }
}
