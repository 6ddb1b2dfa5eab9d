//! Slab and arena allocators layered over a general-purpose [`System`].
//!
//! * [`Bath`] / [`Pool`]: fixed-size items that can be released one by one.
//! * [`Creek`] / [`River`]: variable-size items bump-allocated and reclaimed
//!   only all at once.
//!
//! None of these types are thread-safe. Pointers handed out stay valid until
//! they are released (baths and pools) or until the owning structure is reset
//! or dropped.
//!
//! [`System`]: liquidmem_sys::system::System

#![cfg_attr(not(test), no_std)]

extern crate alloc;

pub mod bath;
pub mod config;
pub mod creek;
pub mod pool;
pub mod river;

pub use bath::{
  Bath,
  BathError,
  BathResult,
};
pub use creek::{
  Creek,
  CreekError,
  CreekResult,
};
pub use pool::{
  Pool,
  PoolError,
  PoolResult,
};
pub use river::{
  River,
  RiverError,
  RiverResult,
};
