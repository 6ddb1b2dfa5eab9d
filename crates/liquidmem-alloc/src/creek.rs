use core::ptr::NonNull;

use getset::CopyGetters;
use liquidmem_extent::{
  Extent,
  ExtentError,
};
use liquidmem_fixed::Fixed;
use liquidmem_sys::{
  GLOBAL_SYSTEM,
  system::{
    SysOption,
    System,
  },
};

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum CreekError {
  ExtentError(ExtentError),
  /// Fewer than `requested` bytes are left.
  Insufficient { requested: usize, remaining: usize },
}

pub type CreekResult<T> = Result<T, CreekError>;

/// A byte buffer filled front to back.
///
/// Items are never released individually; [`Creek::reset`] reclaims all of
/// them at once.
#[derive(CopyGetters)]
pub struct Creek {
  #[getset(get_copy = "pub")]
  capacity: usize,
  dedicated: bool,
  fixed: Fixed,
  extent: Extent,
}

impl Creek {
  pub fn new(capacity: usize) -> CreekResult<Self> {
    Self::new_in(capacity, GLOBAL_SYSTEM)
  }

  pub fn new_in(capacity: usize, system: &'static dyn System) -> CreekResult<Self> {
    Self::build(capacity, false, system)
  }

  /// A creek holding exactly one item of `capacity` bytes.
  pub fn dedicated_in(capacity: usize, system: &'static dyn System) -> CreekResult<Self> {
    Self::build(capacity, true, system)
  }

  fn build(capacity: usize, dedicated: bool, system: &'static dyn System) -> CreekResult<Self> {
    let extent =
      Extent::new_in(capacity, SysOption::Uninit, system).map_err(CreekError::ExtentError)?;

    Ok(Self {
      capacity,
      dedicated,
      fixed: Fixed::new(capacity),
      extent,
    })
  }

  /// Bytes handed out so far.
  #[inline]
  pub const fn len(&self) -> usize {
    self.fixed.offset()
  }

  #[inline]
  pub const fn is_empty(&self) -> bool {
    self.fixed.offset() == 0
  }

  #[inline]
  pub const fn remaining(&self) -> usize {
    self.fixed.remaining()
  }

  #[inline]
  pub const fn is_dedicated(&self) -> bool {
    self.dedicated
  }

  #[inline]
  pub fn owns(&self, ptr: NonNull<u8>) -> bool {
    self.extent.contains(ptr.as_ptr() as usize)
  }

  pub fn allocate(&mut self, size: usize) -> CreekResult<NonNull<u8>> {
    let remaining = self.fixed.remaining();
    let range = self
      .fixed
      .allocate(size)
      .map_err(|_| CreekError::Insufficient {
        requested: size,
        remaining,
      })?;

    self
      .extent
      .at(range.start)
      .map_err(CreekError::ExtentError)
  }

  /// Forgets every item. Outstanding pointers become invalid.
  pub fn reset(&mut self) {
    self.fixed.reset();
  }

  pub fn destroy(self) {
    drop(self);
  }
}

#[cfg(test)]
mod tests {
  use super::*;
  use crate::tests::limited;

  #[test]
  fn creek_bumps_without_padding() {
    let mut creek = Creek::new(32).unwrap();
    let a = creek.allocate(3).unwrap();
    let b = creek.allocate(5).unwrap();
    let c = creek.allocate(8).unwrap();

    let base = a.as_ptr() as usize;
    assert_eq!(b.as_ptr() as usize, base + 3);
    assert_eq!(c.as_ptr() as usize, base + 8);
    assert_eq!(creek.len(), 16);
    assert_eq!(creek.remaining(), 16);
  }

  #[test]
  fn creek_insufficient_does_not_mutate() {
    let mut creek = Creek::new(16).unwrap();
    creek.allocate(10).unwrap();

    assert_eq!(
      creek.allocate(7).err(),
      Some(CreekError::Insufficient {
        requested: 7,
        remaining: 6
      })
    );
    assert_eq!(creek.len(), 10);
    assert!(creek.allocate(6).is_ok());
    assert_eq!(creek.remaining(), 0);
  }

  #[test]
  fn creek_items_do_not_overlap() {
    let mut creek = Creek::new(64).unwrap();
    let ptrs: Vec<_> = (0..8u8)
      .map(|i| {
        let ptr = creek.allocate(8).unwrap();
        unsafe { ptr.as_ptr().write_bytes(i, 8) };
        ptr
      })
      .collect();

    for (i, ptr) in ptrs.iter().enumerate() {
      let bytes = unsafe { core::slice::from_raw_parts(ptr.as_ptr(), 8) };
      assert!(bytes.iter().all(|&b| b == i as u8));
    }
  }

  #[test]
  fn creek_reset() {
    let mut creek = Creek::new(16).unwrap();
    let first = creek.allocate(16).unwrap();
    assert!(creek.allocate(1).is_err());

    creek.reset();
    assert!(creek.is_empty());
    assert_eq!(creek.capacity(), 16);
    assert_eq!(creek.allocate(4).unwrap(), first);
  }

  #[test]
  fn creek_owns() {
    let mut creek = Creek::new(16).unwrap();
    let ptr = creek.allocate(4).unwrap();
    let other = Creek::new(16).unwrap();

    assert!(creek.owns(ptr));
    assert!(!other.owns(ptr));
  }

  #[test]
  fn creek_empty() {
    let mut creek = Creek::new(0).unwrap();
    assert!(creek.allocate(0).is_ok());
    assert!(matches!(
      creek.allocate(1),
      Err(CreekError::Insufficient { .. })
    ));
  }

  #[test]
  fn creek_dedicated() {
    let system = limited(1);
    let creek = Creek::dedicated_in(20, system).unwrap();
    assert!(creek.is_dedicated());
    assert_eq!(creek.capacity(), 20);
  }

  #[test]
  fn creek_reports_allocation_failure() {
    let system = limited(0);
    assert!(matches!(
      Creek::new_in(16, system),
      Err(CreekError::ExtentError(_))
    ));
  }
}
