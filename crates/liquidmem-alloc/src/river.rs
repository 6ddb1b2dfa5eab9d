use alloc::vec::Vec;
use core::ptr::NonNull;

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
  config::DEFAULT_CREEK_SIZE,
  creek::{
    Creek,
    CreekError,
  },
};

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum RiverError {
  CreekError(CreekError),
  /// The creek list could not grow.
  OutOfMemory,
}

pub type RiverResult<T> = Result<T, RiverError>;

/// A growable list of creeks.
///
/// Requests up to `creek_size` bytes share nominal creeks, newest first.
/// Anything larger gets a dedicated creek of exactly its size that nothing
/// else is placed in.
#[derive(CopyGetters)]
pub struct River {
  #[getset(get_copy = "pub")]
  creek_size: usize,
  creeks: Vec<Creek>,
  system: &'static dyn System,
}

impl River {
  pub fn new(creek_size: usize) -> RiverResult<Self> {
    Self::new_in(creek_size, GLOBAL_SYSTEM)
  }

  /// River of [`DEFAULT_CREEK_SIZE`] byte creeks.
  pub fn with_default_size() -> RiverResult<Self> {
    Self::new(DEFAULT_CREEK_SIZE)
  }

  pub fn new_in(creek_size: usize, system: &'static dyn System) -> RiverResult<Self> {
    let creek = Creek::new_in(creek_size, system).map_err(RiverError::CreekError)?;

    let mut creeks = Vec::new();
    creeks.try_reserve(1).map_err(|_| RiverError::OutOfMemory)?;
    creeks.push(creek);

    Ok(Self {
      creek_size,
      creeks,
      system,
    })
  }

  /// Bytes handed out across all creeks.
  pub fn len(&self) -> usize {
    self.creeks.iter().map(Creek::len).sum()
  }

  pub fn is_empty(&self) -> bool {
    self.creeks.iter().all(Creek::is_empty)
  }

  pub fn creek_count(&self) -> usize {
    self.creeks.len()
  }

  pub fn creek(&self, index: usize) -> Option<&Creek> {
    self.creeks.get(index)
  }

  pub fn creeks(&self) -> &[Creek] {
    &self.creeks
  }

  fn grow(&mut self, size: usize, dedicated: bool) -> RiverResult<&mut Creek> {
    self.creeks.try_reserve(1).map_err(|_| RiverError::OutOfMemory)?;
    let creek = if dedicated {
      Creek::dedicated_in(size, self.system)
    } else {
      Creek::new_in(size, self.system)
    }
    .map_err(RiverError::CreekError)?;

    let index = self.creeks.len();
    self.creeks.push(creek);

    debug!(creeks = index + 1, size, dedicated, "river grew");

    Ok(&mut self.creeks[index])
  }

  pub fn allocate(&mut self, size: usize) -> RiverResult<NonNull<u8>> {
    if size > self.creek_size {
      return self
        .grow(size, true)?
        .allocate(size)
        .map_err(RiverError::CreekError);
    }

    for creek in self.creeks.iter_mut().rev() {
      if creek.is_dedicated() {
        continue;
      }
      if let Ok(ptr) = creek.allocate(size) {
        return Ok(ptr);
      }
    }

    self
      .grow(self.creek_size, false)?
      .allocate(size)
      .map_err(RiverError::CreekError)
  }

  /// Drops every creek but the first and empties it.
  pub fn reset(&mut self) {
    trace!(creeks = self.creeks.len(), "river reset");
    self.creeks.truncate(1);
    if let Some(first) = self.creeks.first_mut() {
      first.reset();
    }
  }

  pub fn destroy(self) {
    trace!(creeks = self.creeks.len(), "river destroyed");
    drop(self);
  }
}
