use alloc::vec::Vec;
use core::{
  cmp,
  ptr::NonNull,
};

use getset::CopyGetters;
use liquidmem_sys::{
  GLOBAL_SYSTEM,
  system::System,
};
use tracing::{
  debug,
  trace,
};

use crate::{
  bath::{
    Bath,
    BathError,
  },
  config::DEFAULT_BATH_CAPACITY,
};

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum PoolError {
  BathError(BathError),
  /// The bath list could not grow.
  OutOfMemory,
  /// No bath owns the pointer.
  Foreign,
}

pub type PoolResult<T> = Result<T, PoolError>;

/// A growable list of baths sharing one capacity and item size.
///
/// `vacant` is the lowest bath that may still have room. While filling it is
/// the newest bath; releases pull it back so freed slots are reused before
/// the pool grows.
#[derive(CopyGetters)]
pub struct Pool {
  #[getset(get_copy = "pub")]
  capacity: usize,
  #[getset(get_copy = "pub")]
  item_size: usize,
  baths: Vec<Bath>,
  vacant: usize,
  system: &'static dyn System,
}

impl Pool {
  pub fn new(capacity: usize, item_size: usize) -> PoolResult<Self> {
    Self::new_in(capacity, item_size, GLOBAL_SYSTEM)
  }

  /// Pool for items of type `T`, [`DEFAULT_BATH_CAPACITY`] per bath.
  pub fn for_type<T>() -> PoolResult<Self> {
    Self::new(DEFAULT_BATH_CAPACITY, core::mem::size_of::<T>())
  }

  pub fn new_in(
    capacity: usize,
    item_size: usize,
    system: &'static dyn System,
  ) -> PoolResult<Self> {
    let bath = Bath::new_in(capacity, item_size, system).map_err(PoolError::BathError)?;

    let mut baths = Vec::new();
    baths.try_reserve(1).map_err(|_| PoolError::OutOfMemory)?;
    baths.push(bath);

    Ok(Self {
      capacity,
      item_size,
      baths,
      vacant: 0,
      system,
    })
  }

  /// Live items across all baths.
  pub fn len(&self) -> usize {
    self.baths.iter().map(Bath::len).sum()
  }

  pub fn is_empty(&self) -> bool {
    self.baths.iter().all(Bath::is_empty)
  }

  pub fn bath_count(&self) -> usize {
    self.baths.len()
  }

  pub fn bath(&self, index: usize) -> Option<&Bath> {
    self.baths.get(index)
  }

  pub fn baths(&self) -> &[Bath] {
    &self.baths
  }

  fn grow(&mut self) -> PoolResult<&mut Bath> {
    self.baths.try_reserve(1).map_err(|_| PoolError::OutOfMemory)?;
    let bath =
      Bath::new_in(self.capacity, self.item_size, self.system).map_err(PoolError::BathError)?;

    self.baths.push(bath);
    self.vacant = self.baths.len() - 1;

    debug!(
      baths = self.baths.len(),
      capacity = self.capacity,
      item_size = self.item_size,
      "pool grew"
    );

    Ok(&mut self.baths[self.vacant])
  }

  pub fn allocate(&mut self) -> PoolResult<NonNull<u8>> {
    while let Some(bath) = self.baths.get_mut(self.vacant) {
      match bath.allocate() {
        Ok(ptr) => return Ok(ptr),
        Err(BathError::Full) => self.vacant += 1,
        Err(err) => return Err(PoolError::BathError(err)),
      }
    }

    self.grow()?.allocate().map_err(PoolError::BathError)
  }

  /// Hands `ptr` back to the bath that owns it.
  pub fn release(&mut self, ptr: NonNull<u8>) -> PoolResult<()> {
    for (index, bath) in self.baths.iter_mut().enumerate() {
      match bath.release(ptr) {
        Ok(()) => {
          self.vacant = cmp::min(self.vacant, index);
          return Ok(());
        }
        Err(BathError::Foreign) => continue,
        Err(err) => return Err(PoolError::BathError(err)),
      }
    }

    debug!(baths = self.baths.len(), "pool rejected foreign pointer");
    Err(PoolError::Foreign)
  }

  /// Drops every bath but the first and empties it.
  pub fn reset(&mut self) {
    trace!(baths = self.baths.len(), "pool reset");
    self.baths.truncate(1);
    if let Some(first) = self.baths.first_mut() {
      first.reset();
    }
    self.vacant = 0;
  }

  pub fn destroy(self) {
    trace!(baths = self.baths.len(), "pool destroyed");
    drop(self);
  }
}
