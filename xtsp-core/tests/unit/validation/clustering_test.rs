use super::*;
use crate::helpers::*;
use crate::utils::ErrorKind;
use rand::Rng;
use rand::seq::SliceRandom;

parameterized_test! {can_validate_clustering, (clusters, num_vertices, expected), {
    let clustering = Clustering::new(clusters);

    let result = validate_clustering(&clustering, num_vertices);

    assert_eq!(result.map_err(|err| err.cause), expected.map_err(|err: &str| err.to_string()));
}}

can_validate_clustering! {
    case01_partition: (vec![vec![0, 1], vec![2, 3]], 4, Ok(())),
    case02_single_cluster: (vec![vec![3, 2, 1, 0]], 4, Ok(())),
    case03_empty_means_plain: (vec![], 5, Ok(())),
    case04_too_few_vertices: (vec![vec![0, 1], vec![2]], 3, Err("expected more than 3 vertices, got 3")),
    case05_too_few_vertices_when_empty: (vec![], 3, Err("expected more than 3 vertices, got 3")),
    case06_duplicate_in_cluster: (vec![vec![0, 1, 1], vec![2, 3]], 4, Err("cluster 0 contains duplicate vertex")),
    case07_out_of_range: (vec![vec![0, 1], vec![2, 3, 4]], 4, Err("invalid vertex 4 in cluster 1: expected a value in [0, 4)")),
    case08_shared_vertex: (vec![vec![0, 1], vec![2, 3], vec![1, 4]], 5, Err("vertex 1 of cluster 2 already appeared in cluster 0")),
    case09_unassigned: (vec![vec![0, 1], vec![3]], 4, Err("vertex 2 is not assigned to any cluster")),
}

#[test]
fn can_report_validation_kind() {
    let result = validate_clustering(&Clustering::new(vec![vec![0], vec![0]]), 4);

    assert_eq!(result.map_err(|err| err.kind), Err(ErrorKind::Validation));
}

fn create_random_partition(rng: &mut impl Rng, num_vertices: usize, num_clusters: usize) -> Vec<Vec<usize>> {
    let mut vertices = (0..num_vertices).collect::<Vec<_>>();
    vertices.shuffle(rng);

    let mut clusters = vec![Vec::new(); num_clusters];
    vertices.into_iter().enumerate().for_each(|(idx, vertex)| {
        let cluster = if idx < num_clusters { idx } else { rng.gen_range(0..num_clusters) };
        clusters[cluster].push(vertex);
    });

    clusters
}

#[test]
fn can_accept_random_partitions() {
    let mut rng = create_random(42);

    for _ in 0..100 {
        let num_vertices = rng.gen_range(4..50);
        let num_clusters = rng.gen_range(1..=num_vertices);
        let clustering = Clustering::new(create_random_partition(&mut rng, num_vertices, num_clusters));

        assert_eq!(validate_clustering(&clustering, num_vertices), Ok(()));
    }
}

#[test]
fn can_reject_random_partitions_with_moved_or_removed_vertex() {
    let mut rng = create_random(7);

    for _ in 0..100 {
        let num_vertices = rng.gen_range(4..50);
        let num_clusters = rng.gen_range(2..=num_vertices);
        let mut clusters = create_random_partition(&mut rng, num_vertices, num_clusters);
        let source = rng.gen_range(0..num_clusters);
        let vertex = clusters[source][0];

        let mut removed = clusters.clone();
        removed[source].remove(0);
        let target = (source + 1) % num_clusters;
        clusters[target].push(vertex);

        assert!(validate_clustering(&Clustering::new(removed), num_vertices).is_err());
        assert!(validate_clustering(&Clustering::new(clusters), num_vertices).is_err());
    }
}
