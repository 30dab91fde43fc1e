//! 1-based position to 0-based index translation.

/// Index of an existing element: `position ∈ [1, length]`.
pub(crate) fn element_index(position: usize, length: usize) -> Option<usize> {
    position.checked_sub(1).filter(|&index| index < length)
}

/// Index of an insertion slot: `position ∈ [1, length + 1]`.
pub(crate) fn insert_index(position: usize, length: usize) -> Option<usize> {
    position.checked_sub(1).filter(|&index| index <= length)
}
