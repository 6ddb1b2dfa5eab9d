//! Slab pools and bump rivers over the C heap.
//!
//! ```
//! use liquidmem::prelude::*;
//!
//! let mut pool = Pool::new(64, core::mem::size_of::<u64>()).unwrap();
//! let item = pool.allocate().unwrap();
//! pool.release(item).unwrap();
//!
//! let mut river = River::new(4096).unwrap();
//! let bytes = river.allocate(100).unwrap();
//! unsafe { bytes.as_ptr().write_bytes(0, 100) };
//! river.reset();
//! ```

#![no_std]

pub mod prelude {
  pub use liquidmem_alloc::{
    Bath,
    BathError,
    BathResult,
    Creek,
    CreekError,
    CreekResult,
    Pool,
    PoolError,
    PoolResult,
    River,
    RiverError,
    RiverResult,
    config::{
      DEFAULT_BATH_CAPACITY,
      DEFAULT_CREEK_SIZE,
    },
  };
  pub use liquidmem_sys::prelude::*;
}
