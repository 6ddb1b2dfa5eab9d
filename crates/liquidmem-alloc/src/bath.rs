use core::ptr::NonNull;

use getset::CopyGetters;
use liquidmem_bitmap::{
  Bitmap,
  BitmapError,
  BitmapWord,
  bytes,
};
use liquidmem_extent::{
  Extent,
  ExtentError,
};
use liquidmem_sys::{
  GLOBAL_SYSTEM,
  math::{
    is_aligned,
    span,
  },
  prim::min_align,
  system::{
    SysOption,
    System,
  },
};
use tracing::debug;

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum BathError {
  /// Capacity or item size of zero.
  ZeroSize,
  /// `capacity * item_size` does not fit in a `usize`.
  Overflow,
  ExtentError(ExtentError),
  BitmapError(BitmapError),
  /// Every slot is occupied.
  Full,
  /// The pointer lies outside this bath.
  Foreign,
  /// The pointer lies inside this bath but not on an item boundary.
  Misaligned,
  /// The slot is already free.
  DoubleRelease,
}

pub type BathResult<T> = Result<T, BathError>;

/// Occupancy words, zeroed on creation.
struct BmStore {
  extent: Extent,
}

impl BmStore {
  fn new(bits: usize, system: &'static dyn System) -> BathResult<Self> {
    let extent =
      Extent::new_in(bytes(bits), SysOption::Zeroed, system).map_err(BathError::ExtentError)?;
    debug_assert_eq!(
      is_aligned(extent.as_ptr().as_ptr() as usize, min_align()),
      Some(true)
    );
    Ok(Self { extent })
  }

  fn words(&self) -> usize {
    self.extent.len() / core::mem::size_of::<BitmapWord>()
  }
}

impl AsRef<[BitmapWord]> for BmStore {
  fn as_ref(&self) -> &[BitmapWord] {
    if self.extent.is_empty() {
      return &[];
    }
    // SAFETY: the extent is zero-initialized, word aligned and owned by us.
    unsafe {
      core::slice::from_raw_parts(
        self.extent.as_ptr().as_ptr() as *const BitmapWord,
        self.words(),
      )
    }
  }
}

impl AsMut<[BitmapWord]> for BmStore {
  fn as_mut(&mut self) -> &mut [BitmapWord] {
    if self.extent.is_empty() {
      return &mut [];
    }
    // SAFETY: see `as_ref`; `&mut self` guarantees exclusive access.
    unsafe {
      core::slice::from_raw_parts_mut(
        self.extent.as_ptr().as_ptr() as *mut BitmapWord,
        self.words(),
      )
    }
  }
}

/// A fixed number of equally sized slots over one buffer.
///
/// `first_free` is the lowest free slot, or `capacity` once the bath is full.
/// Allocation takes it and scans forward for the next one; release only ever
/// lowers it.
#[derive(CopyGetters)]
pub struct Bath {
  #[getset(get_copy = "pub")]
  capacity: usize,
  #[getset(get_copy = "pub")]
  item_size: usize,
  #[getset(get_copy = "pub")]
  first_free: usize,
  bitmap: Bitmap<BmStore>,
  extent: Extent,
}

impl Bath {
  pub fn new(capacity: usize, item_size: usize) -> BathResult<Self> {
    Self::new_in(capacity, item_size, GLOBAL_SYSTEM)
  }

  pub fn new_in(
    capacity: usize,
    item_size: usize,
    system: &'static dyn System,
  ) -> BathResult<Self> {
    if capacity == 0 || item_size == 0 {
      return Err(BathError::ZeroSize);
    }
    let size = span(capacity, item_size).ok_or(BathError::Overflow)?;

    let store = BmStore::new(capacity, system)?;
    let bitmap = Bitmap::zero(store, capacity).map_err(BathError::BitmapError)?;
    let extent = Extent::new_in(size, SysOption::Uninit, system).map_err(BathError::ExtentError)?;

    Ok(Self {
      capacity,
      item_size,
      first_free: 0,
      bitmap,
      extent,
    })
  }

  /// Live items, read off the occupancy bitmap.
  #[inline]
  pub fn len(&self) -> usize {
    self.bitmap.used()
  }

  #[inline]
  pub fn is_empty(&self) -> bool {
    self.bitmap.is_clear()
  }

  #[inline]
  pub fn is_full(&self) -> bool {
    self.bitmap.is_full()
  }

  /// Whether `ptr` points into this bath's buffer.
  #[inline]
  pub fn owns(&self, ptr: NonNull<u8>) -> bool {
    self.extent.contains(ptr.as_ptr() as usize)
  }

  /// Whether `slot` currently holds a live item.
  pub fn is_live(&self, slot: usize) -> BathResult<bool> {
    self.bitmap.get(slot).map_err(BathError::BitmapError)
  }

  pub fn allocate(&mut self) -> BathResult<NonNull<u8>> {
    if self.is_full() {
      return Err(BathError::Full);
    }

    let slot = self.first_free;
    debug_assert!(!self.bitmap.get(slot).unwrap_or(true));

    self.bitmap.set(slot).map_err(BathError::BitmapError)?;
    self.first_free = self.bitmap.find_fc_from(slot + 1).unwrap_or(self.capacity);

    self
      .extent
      .at(slot * self.item_size)
      .map_err(BathError::ExtentError)
  }

  /// Slot index `ptr` refers to.
  pub fn slot_of(&self, ptr: NonNull<u8>) -> BathResult<usize> {
    let offset = self.extent.offset_of(ptr).ok_or(BathError::Foreign)?;
    if offset % self.item_size != 0 {
      return Err(BathError::Misaligned);
    }
    Ok(offset / self.item_size)
  }

  pub fn release(&mut self, ptr: NonNull<u8>) -> BathResult<()> {
    let slot = self.slot_of(ptr)?;

    if !self.is_live(slot)? {
      debug!(slot, "double release rejected");
      return Err(BathError::DoubleRelease);
    }

    self.bitmap.clear(slot).map_err(BathError::BitmapError)?;
    if slot < self.first_free {
      self.first_free = slot;
    }

    Ok(())
  }

  /// Frees every slot at once. Outstanding pointers become invalid.
  pub fn reset(&mut self) {
    self.bitmap.clear_all();
    self.first_free = 0;
  }

  pub fn destroy(self) {
    drop(self);
  }
}
