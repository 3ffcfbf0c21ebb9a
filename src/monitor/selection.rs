//! Pure selection helpers used by the monitor

use crate::media::MediaFile;
use rand::{Rng, seq::SliceRandom};
use std::{collections::HashSet, path::Path};

/// Picks up to `count` distinct items by shuffling a copy of `items` and
/// keeping the prefix
pub fn shuffle_and_take<T: Clone, R: Rng + ?Sized>(items: &[T], count: usize, rng: &mut R) -> Vec<T> {
    let mut shuffled = items.to_vec();
    shuffled.shuffle(rng);
    shuffled.truncate(count);
    shuffled
}

/// Files of `current` whose path does not appear in `previous`
pub fn new_entries<'a>(previous: &[MediaFile], current: &'a [MediaFile]) -> Vec<&'a MediaFile> {
    let known: HashSet<&Path> = previous.iter().map(MediaFile::path).collect();
    current
        .iter()
        .filter(|file| !known.contains(file.path()))
        .collect()
}
