//! C interface. Every handle is an opaque heap object; null handles are
//! accepted everywhere and report failure.
//!
//! Allocation returns a pointer or null. Release and reset return `0` on
//! success and `-1` otherwise.

use core::ptr;

use libc::{
  c_int,
  c_void,
};
use liquidmem::prelude::*;

const OK: c_int = 0;
const FAIL: c_int = -1;

fn into_raw<T, E>(result: Result<T, E>) -> *mut T {
  match result {
    Ok(value) => Box::into_raw(Box::new(value)),
    Err(_) => ptr::null_mut(),
  }
}

fn status<E>(result: Result<(), E>) -> c_int {
  match result {
    Ok(()) => OK,
    Err(_) => FAIL,
  }
}

fn item<E>(result: Result<core::ptr::NonNull<u8>, E>) -> *mut c_void {
  match result {
    Ok(ptr) => ptr.as_ptr() as *mut c_void,
    Err(_) => ptr::null_mut(),
  }
}

/// Takes back ownership of a handle made by one of the `*_new` functions.
///
/// # Safety
///
/// `raw` must be null or a live handle of type `T` not freed before.
unsafe fn free_raw<T>(raw: *mut T) {
  if !raw.is_null() {
    drop(unsafe { Box::from_raw(raw) });
  }
}

#[unsafe(no_mangle)]
pub extern "C" fn lm_bath_new(capacity: usize, item_size: usize) -> *mut Bath {
  into_raw(Bath::new(capacity, item_size))
}

/// # Safety
///
/// `bath` must be null or a live handle from [`lm_bath_new`].
#[unsafe(no_mangle)]
pub unsafe extern "C" fn lm_bath_alloc(bath: *mut Bath) -> *mut c_void {
  match unsafe { bath.as_mut() } {
    Some(bath) => item(bath.allocate()),
    None => ptr::null_mut(),
  }
}

/// # Safety
///
/// `bath` must be null or a live handle from [`lm_bath_new`].
#[unsafe(no_mangle)]
pub unsafe extern "C" fn lm_bath_release(bath: *mut Bath, ptr: *mut c_void) -> c_int {
  match (unsafe { bath.as_mut() }, core::ptr::NonNull::new(ptr as *mut u8)) {
    (Some(bath), Some(ptr)) => status(bath.release(ptr)),
    _ => FAIL,
  }
}

/// # Safety
///
/// `bath` must be null or a live handle from [`lm_bath_new`].
#[unsafe(no_mangle)]
pub unsafe extern "C" fn lm_bath_reset(bath: *mut Bath) -> c_int {
  match unsafe { bath.as_mut() } {
    Some(bath) => {
      bath.reset();
      OK
    }
    None => FAIL,
  }
}

/// # Safety
///
/// `bath` must be null or a live handle from [`lm_bath_new`]; it is dangling
/// afterwards.
#[unsafe(no_mangle)]
pub unsafe extern "C" fn lm_bath_free(bath: *mut Bath) {
  unsafe { free_raw(bath) }
}

#[unsafe(no_mangle)]
pub extern "C" fn lm_pool_new(capacity: usize, item_size: usize) -> *mut Pool {
  into_raw(Pool::new(capacity, item_size))
}

/// # Safety
///
/// `pool` must be null or a live handle from [`lm_pool_new`].
#[unsafe(no_mangle)]
pub unsafe extern "C" fn lm_pool_alloc(pool: *mut Pool) -> *mut c_void {
  match unsafe { pool.as_mut() } {
    Some(pool) => item(pool.allocate()),
    None => ptr::null_mut(),
  }
}

/// # Safety
///
/// `pool` must be null or a live handle from [`lm_pool_new`].
#[unsafe(no_mangle)]
pub unsafe extern "C" fn lm_pool_release(pool: *mut Pool, ptr: *mut c_void) -> c_int {
  match (unsafe { pool.as_mut() }, core::ptr::NonNull::new(ptr as *mut u8)) {
    (Some(pool), Some(ptr)) => status(pool.release(ptr)),
    _ => FAIL,
  }
}

/// # Safety
///
/// `pool` must be null or a live handle from [`lm_pool_new`].
#[unsafe(no_mangle)]
pub unsafe extern "C" fn lm_pool_reset(pool: *mut Pool) -> c_int {
  match unsafe { pool.as_mut() } {
    Some(pool) => {
      pool.reset();
      OK
    }
    None => FAIL,
  }
}

/// # Safety
///
/// `pool` must be null or a live handle from [`lm_pool_new`]; it is dangling
/// afterwards.
#[unsafe(no_mangle)]
pub unsafe extern "C" fn lm_pool_free(pool: *mut Pool) {
  unsafe { free_raw(pool) }
}

#[unsafe(no_mangle)]
pub extern "C" fn lm_creek_new(capacity: usize) -> *mut Creek {
  into_raw(Creek::new(capacity))
}

/// # Safety
///
/// `creek` must be null or a live handle from [`lm_creek_new`].
#[unsafe(no_mangle)]
pub unsafe extern "C" fn lm_creek_alloc(creek: *mut Creek, size: usize) -> *mut c_void {
  match unsafe { creek.as_mut() } {
    Some(creek) => item(creek.allocate(size)),
    None => ptr::null_mut(),
  }
}

/// # Safety
///
/// `creek` must be null or a live handle from [`lm_creek_new`].
#[unsafe(no_mangle)]
pub unsafe extern "C" fn lm_creek_reset(creek: *mut Creek) -> c_int {
  match unsafe { creek.as_mut() } {
    Some(creek) => {
      creek.reset();
      OK
    }
    None => FAIL,
  }
}

/// # Safety
///
/// `creek` must be null or a live handle from [`lm_creek_new`]; it is
/// dangling afterwards.
#[unsafe(no_mangle)]
pub unsafe extern "C" fn lm_creek_free(creek: *mut Creek) {
  unsafe { free_raw(creek) }
}

#[unsafe(no_mangle)]
pub extern "C" fn lm_river_new(creek_size: usize) -> *mut River {
  into_raw(River::new(creek_size))
}

/// # Safety
///
/// `river` must be null or a live handle from [`lm_river_new`].
#[unsafe(no_mangle)]
pub unsafe extern "C" fn lm_river_alloc(river: *mut River, size: usize) -> *mut c_void {
  match unsafe { river.as_mut() } {
    Some(river) => item(river.allocate(size)),
    None => ptr::null_mut(),
  }
}

/// # Safety
///
/// `river` must be null or a live handle from [`lm_river_new`].
#[unsafe(no_mangle)]
pub unsafe extern "C" fn lm_river_reset(river: *mut River) -> c_int {
  match unsafe { river.as_mut() } {
    Some(river) => {
      river.reset();
      OK
    }
    None => FAIL,
  }
}

/// # Safety
///
/// `river` must be null or a live handle from [`lm_river_new`]; it is
/// dangling afterwards.
#[unsafe(no_mangle)]
pub unsafe extern "C" fn lm_river_free(river: *mut River) {
  unsafe { free_raw(river) }
}
