/// Alignment every [`System`](crate::system::System) allocation honors.
pub const fn min_align() -> usize {
  core::mem::align_of::<usize>()
}
