use super::*;
use crate::vectorizer::{SparseRow, TermMatrix};

fn matrix_of(rows: Vec<Vec<f32>>) -> TermMatrix {
    let dim = rows[0].len();
    let vocabulary = (0..dim).map(|i| format!("t{i}")).collect();
    let rows = rows
        .into_iter()
        .map(|dense| {
            dense
                .into_iter()
                .enumerate()
                .filter(|(_, v)| *v != 0.0)
                .collect::<SparseRow>()
        })
        .collect();

    TermMatrix { vocabulary, rows }
}

#[test]
fn test_two_well_separated_groups() {
    let matrix = matrix_of(vec![
        vec![1.0, 0.0],
        vec![0.9, 0.1],
        vec![0.0, 1.0],
        vec![0.1, 0.9],
    ]);

    let res = kmeans(&matrix, 2, 20, DEFAULT_SEED).unwrap();

    assert_eq!(res.labels.len(), 4);
    assert_eq!(res.labels[0], res.labels[1]);
    assert_eq!(res.labels[2], res.labels[3]);
    assert_ne!(res.labels[0], res.labels[2]);
}

#[test]
fn test_k_one_gives_single_label() {
    let matrix = matrix_of(vec![vec![1.0, 0.0], vec![0.0, 1.0], vec![0.5, 0.5]]);

    let res = kmeans(&matrix, 1, 20, DEFAULT_SEED).unwrap();
    assert!(res.labels.iter().all(|&label| label == 0));
}

#[test]
fn test_k_equals_n_is_reproducible() {
    let matrix = matrix_of(vec![
        vec![1.0, 0.0, 0.0],
        vec![0.0, 1.0, 0.0],
        vec![0.0, 0.0, 1.0],
    ]);

    let first = kmeans(&matrix, 3, 20, DEFAULT_SEED).unwrap();
    let second = kmeans(&matrix, 3, 20, DEFAULT_SEED).unwrap();

    assert_eq!(first.labels, second.labels);
    // Three distinct rows, three clusters: all labels distinct.
    let mut labels = first.labels.clone();
    labels.sort_unstable();
    labels.dedup();
    assert_eq!(labels.len(), 3);
}

#[test]
fn test_labels_stay_in_range() {
    let matrix = matrix_of(vec![
        vec![1.0, 0.0],
        vec![0.8, 0.2],
        vec![0.2, 0.8],
        vec![0.0, 1.0],
        vec![0.5, 0.5],
    ]);

    let res = kmeans(&matrix, 3, 50, DEFAULT_SEED).unwrap();
    assert!(res.labels.iter().all(|&label| label < 3));
}

#[test]
fn test_k_zero_rejected() {
    let matrix = matrix_of(vec![vec![1.0]]);
    let err = kmeans(&matrix, 0, 20, DEFAULT_SEED).unwrap_err();
    assert_eq!(err.k, 0);
    assert_eq!(err.documents, 1);
}

#[test]
fn test_k_larger_than_rows_rejected() {
    let matrix = matrix_of(vec![vec![1.0, 0.0], vec![0.0, 1.0]]);
    assert!(kmeans(&matrix, 5, 20, DEFAULT_SEED).is_err());
}
