use core::ops::Range;

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum FixedError {
  OutOfMemory,
  Invalid,
}

pub type FixedResult<T> = Result<T, FixedError>;

/// Bump cursor over a region of `max` bytes.
///
/// Hands out consecutive, non-overlapping byte ranges. The offset only grows
/// until [`Fixed::reset`].
#[derive(Debug)]
pub struct Fixed {
  max: usize,
  offset: usize,
}

impl Fixed {
  pub const fn new(max: usize) -> Self {
    Self { max, offset: 0 }
  }

  #[inline(always)]
  pub const fn offset(&self) -> usize {
    self.offset
  }

  #[inline(always)]
  pub const fn remaining(&self) -> usize {
    self.max - self.offset
  }

  #[inline]
  pub const fn has(&self, needed: usize) -> bool {
    self.remaining() >= needed
  }

  fn end_range(&self, start: usize, required: usize) -> FixedResult<usize> {
    start.checked_add(required).ok_or(FixedError::Invalid)
  }

  /// Reserves the next `size` bytes and returns their range.
  pub fn allocate(&mut self, size: usize) -> FixedResult<Range<usize>> {
    if !self.has(size) {
      return Err(FixedError::OutOfMemory);
    }

    let start = self.offset;
    let end = self.end_range(start, size)?;
    self.offset = end;

    Ok(start..end)
  }

  pub fn reset(&mut self) {
    self.offset = 0;
  }
}
