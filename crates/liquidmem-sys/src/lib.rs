#![cfg_attr(not(test), no_std)]

pub mod heap;
pub mod math;
pub mod prim;
pub mod system;

pub use system::GLOBAL_SYSTEM;

pub mod prelude {
  pub use super::{
    GLOBAL_SYSTEM,
    heap::{
      HEAP_SYSTEM,
      HeapSystem,
    },
    math::{
      is_aligned,
      span,
    },
    prim::min_align,
    system::{
      SysError,
      SysOption,
      SysResult,
      System,
    },
  };
}
