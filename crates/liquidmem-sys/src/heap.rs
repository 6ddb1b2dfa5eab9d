use core::ptr::NonNull;

use crate::system::{
  SysError,
  SysOption,
  SysResult,
  System,
};

/// [`System`] backed by the C heap.
pub struct HeapSystem {}

pub static HEAP_SYSTEM: HeapSystem = HeapSystem {};

impl HeapSystem {
  fn raw(size: usize, options: SysOption) -> *mut libc::c_void {
    match options {
      SysOption::Uninit => unsafe { libc::malloc(size) },
      SysOption::Zeroed => unsafe { libc::calloc(1, size) },
    }
  }
}

unsafe impl System for HeapSystem {
  unsafe fn alloc(&self, size: usize, options: SysOption) -> SysResult<NonNull<u8>> {
    // malloc(0) may hand out null or a unique pointer; neither is useful here
    if size == 0 {
      return Err(SysError::InvalidArgument);
    }

    NonNull::new(Self::raw(size, options) as *mut u8).ok_or(SysError::OutOfMemory)
  }

  unsafe fn dealloc(&self, ptr: NonNull<u8>, size: usize) -> SysResult<()> {
    _ = size;
    unsafe { libc::free(ptr.as_ptr() as *mut libc::c_void) };
    Ok(())
  }
}
