//! Bubble sort over byte records and typed slices.

use std::cmp::Ordering;

use crate::error::SortError;

/// Exchange records `a` and `b` (0-based record indices) byte by byte.
///
/// # Panics
///
/// Panics if either record extends past the end of `buf`.
pub fn swap_records(buf: &mut [u8], a: usize, b: usize, width: usize) {
    if a == b {
        return;
    }
    let (lo, hi) = if a < b { (a, b) } else { (b, a) };
    let (head, tail) = buf.split_at_mut(hi * width);
    head[lo * width..(lo + 1) * width].swap_with_slice(&mut tail[..width]);
}

/// Sort `count` records of `width` bytes in `buf` ascending by `cmp`.
///
/// Each pass bubbles the largest remaining record to the end by
/// swapping adjacent records that compare [`Ordering::Greater`]. Equal
/// records are never swapped, so the sort is stable. Bytes past
/// `count * width` are left alone.
///
/// # Errors
///
/// Returns [`SortError`] if `width` is zero or `buf` is too short for
/// `count` records.
pub fn sort_records<F>(
    buf: &mut [u8],
    count: usize,
    width: usize,
    mut cmp: F,
) -> Result<(), SortError>
where
    F: FnMut(&[u8], &[u8]) -> Ordering,
{
    if width == 0 {
        return Err(SortError::ZeroWidth);
    }
    let needed = count
        .checked_mul(width)
        .ok_or(SortError::LayoutOverflow { count, width })?;
    if buf.len() < needed {
        return Err(SortError::BufferTooSmall {
            needed,
            actual: buf.len(),
        });
    }
    for pass in 1..count {
        for j in 0..count - pass {
            let start = j * width;
            let (left, right) = buf[start..start + 2 * width].split_at(width);
            if cmp(left, right) == Ordering::Greater {
                swap_records(buf, j, j + 1, width);
            }
        }
    }
    Ok(())
}

/// Sort `values` ascending by `cmp` using the same passes as
/// [`sort_records`].
pub fn bubble_sort<T, F>(values: &mut [T], mut cmp: F)
where
    F: FnMut(&T, &T) -> Ordering,
{
    let count = values.len();
    for pass in 1..count {
        for j in 0..count - pass {
            if cmp(&values[j], &values[j + 1]) == Ordering::Greater {
                values.swap(j, j + 1);
            }
        }
    }
}
