/// Slots per bath for [`Pool::for_type`](crate::pool::Pool::for_type).
pub const DEFAULT_BATH_CAPACITY: usize = 64;

/// Bytes per creek for [`River::with_default_size`](crate::river::River::with_default_size).
pub const DEFAULT_CREEK_SIZE: usize = 4096;
