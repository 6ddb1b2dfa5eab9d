#![cfg_attr(not(test), no_std)]


#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum BitmapError {
  InsufficientSize { have: usize, need: usize },
  OutOfBounds { index: usize, size: usize },
  Mismatch { left: usize, right: usize },
}

pub type BitmapResult<T> = Result<T, BitmapError>;

pub type BitmapWord = usize;

const USIZE_BITS: usize = usize::BITS as usize;

/// Words needed to hold `fields` bits.
#[inline(always)]
pub const fn words(fields: usize) -> usize {
  fields.div_ceil(USIZE_BITS)
}

#[inline(always)]
pub const fn bytes(fields: usize) -> usize {
  words(fields) * core::mem::size_of::<BitmapWord>()
}

/// A fixed number of bits over a word store.
///
/// Bits past `bits` in the last word are kept clear, so whole-word operations
/// never disturb the population count.
#[derive(Debug)]
pub struct Bitmap<S> {
  store: S,
  bits: usize,
  used: usize,
}

impl<S> Bitmap<S>
where
  S: AsRef<[BitmapWord]>,
{
  /// Number of set bits.
  #[inline(always)]
  pub const fn used(&self) -> usize {
    self.used
  }

  const fn position(&self, index: usize) -> BitmapResult<(usize, usize)> {
    if index >= self.bits {
      return Err(BitmapError::OutOfBounds {
        index,
        size: self.bits,
      });
    }
    let word_index = index / USIZE_BITS;
    let bit_index = index % USIZE_BITS;
    Ok((word_index, bit_index))
  }

  #[inline(always)]
  fn live(&self) -> &[BitmapWord] {
    &self.store.as_ref()[..words(self.bits)]
  }

  #[inline]
  pub fn get(&self, index: usize) -> BitmapResult<bool> {
    let (word_index, bit_index) = self.position(index)?;
    let value = self.store.as_ref()[word_index];
    Ok((value & (1usize << bit_index)) != 0)
  }

  /// Lowest clear bit at or after `start`.
  pub fn find_fc_from(&self, start: usize) -> Option<usize> {
    if start >= self.bits {
      return None;
    }

    let live = self.live();
    let mut word_index = start / USIZE_BITS;
    let mut inverted = !live[word_index] & (usize::MAX << (start % USIZE_BITS));

    loop {
      if inverted != 0 {
        let global_index = word_index * USIZE_BITS + inverted.trailing_zeros() as usize;
        return (global_index < self.bits).then_some(global_index);
      }

      word_index += 1;
      if word_index >= live.len() {
        return None;
      }
      inverted = !live[word_index];
    }
  }

  #[inline]
  pub const fn is_clear(&self) -> bool {
    self.used == 0
  }

  #[inline]
  pub const fn is_full(&self) -> bool {
    self.used == self.bits
  }
}

impl<S> Bitmap<S>
where
  S: AsRef<[BitmapWord]> + AsMut<[BitmapWord]>,
{
  /// Bitmap of `bits` clear bits over `store`.
  pub fn zero(store: S, bits: usize) -> BitmapResult<Self> {
    let available = store.as_ref().len() * USIZE_BITS;
    if bits > available {
      return Err(BitmapError::InsufficientSize {
        have: available,
        need: bits,
      });
    }

    let mut bitmap = Self {
      store,
      bits,
      used: 0,
    };
    bitmap.clear_all();
    Ok(bitmap)
  }

  #[inline]
  pub fn set(&mut self, index: usize) -> BitmapResult<()> {
    let (word_index, bit_index) = self.position(index)?;
    let mask = 1usize << bit_index;
    let word = &mut self.store.as_mut()[word_index];
    if *word & mask == 0 {
      *word |= mask;
      self.used += 1;
    }
    Ok(())
  }

  #[inline]
  pub fn clear(&mut self, index: usize) -> BitmapResult<()> {
    let (word_index, bit_index) = self.position(index)?;
    let mask = 1usize << bit_index;
    let word = &mut self.store.as_mut()[word_index];
    if *word & mask != 0 {
      *word &= !mask;
      self.used -= 1;
    }
    Ok(())
  }

  pub fn clear_all(&mut self) {
    self.store.as_mut().fill(0);
    self.used = 0;
  }

  /// Sets every bit that is set in `other`.
  pub fn union<T>(&mut self, other: &Bitmap<T>) -> BitmapResult<()>
  where
    T: AsRef<[BitmapWord]>,
  {
    self.combine(other, |left, right| left | right)
  }

  /// Clears every bit that is clear in `other`.
  pub fn intersect<T>(&mut self, other: &Bitmap<T>) -> BitmapResult<()>
  where
    T: AsRef<[BitmapWord]>,
  {
    self.combine(other, |left, right| left & right)
  }

  fn combine<T, F>(&mut self, other: &Bitmap<T>, op: F) -> BitmapResult<()>
  where
    T: AsRef<[BitmapWord]>,
    F: Fn(BitmapWord, BitmapWord) -> BitmapWord,
  {
    if self.bits != other.bits {
      return Err(BitmapError::Mismatch {
        left: self.bits,
        right: other.bits,
      });
    }

    let count = words(self.bits);
    let mut used = 0;
    for (left, &right) in self.store.as_mut()[..count].iter_mut().zip(other.live()) {
      *left = op(*left, right);
      used += left.count_ones() as usize;
    }
    self.used = used;
    Ok(())
  }
}
