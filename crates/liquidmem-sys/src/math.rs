pub const fn is_aligned(value: usize, align: usize) -> Option<bool> {
  if !align.is_power_of_two() {
    return None;
  }
  Some((value & (align - 1)) == 0)
}

/// Bytes covered by `count` items of `size` bytes each.
pub const fn span(count: usize, size: usize) -> Option<usize> {
  count.checked_mul(size)
}
