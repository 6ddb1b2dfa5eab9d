use core::ptr::NonNull;

use crate::heap::HEAP_SYSTEM;

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum SysError {
  Unsupported,
  OutOfMemory,
  InvalidArgument,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum SysOption {
  /// Contents are unspecified.
  Uninit,
  /// Every byte reads as zero.
  Zeroed,
}

pub type SysResult<T> = Result<T, SysError>;

/// The general-purpose allocator every unit draws its buffers from.
///
/// # Safety
///
/// Implementors must ensure that:
/// - `alloc` returns a pointer to `size` writable bytes aligned to at least
///   [`min_align`](crate::prim::min_align), zeroed when asked for
///   [`SysOption::Zeroed`]
/// - distinct live allocations never overlap
/// - `dealloc` only releases memory previously returned by `alloc` on the
///   same system
pub unsafe trait System
where
  Self: Send + Sync,
{
  /// Allocates `size` bytes.
  ///
  /// # Safety
  ///
  /// The returned memory must only be accessed within `size` bytes and must
  /// eventually be handed back through [`System::dealloc`] with the same
  /// `size`.
  unsafe fn alloc(&self, size: usize, options: SysOption) -> SysResult<NonNull<u8>> {
    _ = (size, options);
    Err(SysError::Unsupported)
  }

  /// Releases memory previously returned by [`System::alloc`].
  ///
  /// # Safety
  ///
  /// Caller must ensure `ptr` came from this system with the same `size`, is
  /// still live, and will not be accessed after this call.
  unsafe fn dealloc(&self, ptr: NonNull<u8>, size: usize) -> SysResult<()> {
    _ = (ptr, size);
    Err(SysError::Unsupported)
  }
}

pub struct UnsupportedSystem {}
unsafe impl System for UnsupportedSystem {}

pub static GLOBAL_SYSTEM: &dyn System = &HEAP_SYSTEM;
