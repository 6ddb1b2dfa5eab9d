#![cfg_attr(not(test), no_std)]

use core::{
  ops::Range,
  ptr::NonNull,
};

use liquidmem_sys::{
  GLOBAL_SYSTEM,
  system::{
    SysError,
    SysOption,
    System,
  },
};

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ExtentError {
  SystemError(SysError),
  OutOfBounds,
}

pub type ExtentResult<T> = Result<T, ExtentError>;

/// A contiguous buffer owned exclusively until drop.
///
/// An empty extent never touches its system and owns no memory.
pub struct Extent {
  ptr: NonNull<u8>,
  len: usize,
  system: &'static dyn System,
}

impl Extent {
  pub fn new(size: usize, options: SysOption) -> ExtentResult<Extent> {
    Self::new_in(size, options, GLOBAL_SYSTEM)
  }

  pub fn new_in(
    size: usize,
    options: SysOption,
    system: &'static dyn System,
  ) -> ExtentResult<Extent> {
    if size == 0 {
      return Ok(Extent {
        ptr: NonNull::dangling(),
        len: 0,
        system,
      });
    }

    let ptr = unsafe { system.alloc(size, options) }.map_err(ExtentError::SystemError)?;

    Ok(Extent {
      ptr,
      len: size,
      system,
    })
  }

  #[inline(always)]
  pub const fn as_ptr(&self) -> NonNull<u8> {
    self.ptr
  }

  #[inline(always)]
  pub const fn len(&self) -> usize {
    self.len
  }

  #[inline(always)]
  pub const fn is_empty(&self) -> bool {
    self.len == 0
  }

  /// Address range covered by this extent.
  pub fn range(&self) -> Range<usize> {
    let start = self.ptr.as_ptr() as usize;
    start..start + self.len
  }

  #[inline]
  pub fn contains(&self, addr: usize) -> bool {
    self.range().contains(&addr)
  }

  /// Byte offset of `ptr` from the start of the extent, if the extent owns it.
  #[inline]
  pub fn offset_of(&self, ptr: NonNull<u8>) -> Option<usize> {
    let addr = ptr.as_ptr() as usize;
    if !self.contains(addr) {
      return None;
    }
    Some(addr - self.range().start)
  }

  pub fn check(&self, range: Range<usize>) -> ExtentResult<()> {
    if range.start > range.end || range.end > self.len {
      return Err(ExtentError::OutOfBounds);
    }
    Ok(())
  }

  /// Pointer `offset` bytes into the extent.
  pub fn at(&self, offset: usize) -> ExtentResult<NonNull<u8>> {
    self.check(offset..offset)?;
    Ok(unsafe { self.ptr.add(offset) })
  }
}

impl Drop for Extent {
  fn drop(&mut self) {
    if self.len == 0 {
      return;
    }
    let _ = unsafe { self.system.dealloc(self.ptr, self.len) };
  }
}
