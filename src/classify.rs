//! Order-independent face classification and deduplication.
//!
//! A face is *boundary* when its vertex multiset occurs exactly once in the
//! face list and *interior* otherwise. Faces shared by more than two cells are
//! interior as well; no manifoldness check is made.

use std::collections::{HashMap, HashSet};

use serde::Serialize;

use crate::config::{BrepConfig, ClassifyStrategy};
use crate::face::{Face, FaceKey};

/// Faces split by occurrence count, each side in input order.
#[derive(Clone, Debug, Default, PartialEq, Eq, Serialize)]
pub struct Classification {
    /// Faces owned by exactly one cell.
    pub boundary: Vec<Face>,
    /// Faces shared by two or more cells.
    pub interior: Vec<Face>,
}

impl Classification {
    pub fn len(&self) -> usize {
        self.boundary.len() + self.interior.len()
    }

    pub fn is_empty(&self) -> bool {
        self.boundary.is_empty() && self.interior.is_empty()
    }
}

/// For every face, how many faces of `faces` share its vertex set (itself included).
pub fn occurrence_counts(faces: &[Face], config: &BrepConfig) -> Vec<usize> {
    let keys: Vec<FaceKey> = faces.iter().map(Face::key).collect();
    match config.strategy {
        ClassifyStrategy::Pairwise => pairwise_counts(&keys),
        ClassifyStrategy::Hashed => {
            let counts = count_keys(&keys, config.parallel_threshold);
            keys.iter()
                .map(|k| counts.get(k).copied().unwrap_or(0))
                .collect()
        }
    }
}

/// Split `faces` into boundary (count 1) and interior (count > 1) faces.
pub fn classify(faces: &[Face], config: &BrepConfig) -> Classification {
    let counts = occurrence_counts(faces, config);
    let mut result = Classification::default();
    for (face, count) in faces.iter().zip(counts) {
        if count == 1 {
            result.boundary.push(face.clone());
        } else {
            result.interior.push(face.clone());
        }
    }
    log::trace!(
        "classified {} faces: {} boundary, {} interior",
        faces.len(),
        result.boundary.len(),
        result.interior.len()
    );
    result
}

/// Keep the first face of every vertex set, in first-seen order.
pub fn dedup(faces: &[Face]) -> Vec<Face> {
    let mut seen = HashSet::with_capacity(faces.len());
    faces
        .iter()
        .filter(|face| seen.insert(face.key()))
        .cloned()
        .collect()
}

fn pairwise_counts(keys: &[FaceKey]) -> Vec<usize> {
    keys.iter()
        .map(|key| keys.iter().filter(|other| *other == key).count())
        .collect()
}

fn count_sequential(keys: &[FaceKey]) -> HashMap<&FaceKey, usize> {
    let mut counts = HashMap::with_capacity(keys.len());
    for key in keys {
        *counts.entry(key).or_insert(0) += 1;
    }
    counts
}

#[cfg(not(feature = "parallel"))]
fn count_keys(keys: &[FaceKey], _parallel_threshold: usize) -> HashMap<&FaceKey, usize> {
    count_sequential(keys)
}

#[cfg(feature = "parallel")]
fn count_keys(keys: &[FaceKey], parallel_threshold: usize) -> HashMap<&FaceKey, usize> {
    use rayon::prelude::*;

    if keys.len() < parallel_threshold.max(1) {
        return count_sequential(keys);
    }
    let shard = (keys.len() / rayon::current_num_threads()).max(1);
    log::trace!("counting {} face keys in shards of {shard}", keys.len());
    keys.par_chunks(shard)
        .map(count_sequential)
        .reduce(HashMap::new, |mut acc, part| {
            for (key, n) in part {
                *acc.entry(key).or_insert(0) += n;
            }
            acc
        })
}
