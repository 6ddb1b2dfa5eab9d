use crate::fixed::{
  Fixed,
  FixedError,
};

#[test]
fn fixed_consecutive_ranges() {
  let mut fixed = Fixed::new(128);

  let first = fixed.allocate(24).unwrap();
  assert_eq!(first, 0..24);

  let second = fixed.allocate(7).unwrap();
  assert_eq!(second, 24..31);
  assert_eq!(fixed.offset(), 31);
  assert_eq!(fixed.remaining(), 97);
}

#[test]
fn fixed_no_alignment_padding() {
  let mut fixed = Fixed::new(16);

  assert_eq!(fixed.allocate(3).unwrap(), 0..3);
  assert_eq!(fixed.allocate(8).unwrap(), 3..11);
}

#[test]
fn fixed_reports_oom() {
  let mut fixed = Fixed::new(64);

  fixed.allocate(32).unwrap();
  fixed.allocate(32).unwrap();

  let err = fixed.allocate(1).unwrap_err();
  assert_eq!(err, FixedError::OutOfMemory);
  assert_eq!(fixed.offset(), 64, "Failed allocation must not move the cursor");
}

#[test]
fn fixed_exact_fit() {
  let mut fixed = Fixed::new(20);
  assert!(fixed.has(20));
  assert_eq!(fixed.allocate(20).unwrap(), 0..20);
  assert!(!fixed.has(1));
  assert!(fixed.has(0));
}

#[test]
fn fixed_zero_sized() {
  let mut fixed = Fixed::new(0);
  assert_eq!(fixed.allocate(0).unwrap(), 0..0);
  assert_eq!(fixed.allocate(1), Err(FixedError::OutOfMemory));
}

#[test]
fn fixed_huge_request() {
  let mut fixed = Fixed::new(64);
  fixed.allocate(1).unwrap();
  assert_eq!(fixed.allocate(usize::MAX), Err(FixedError::OutOfMemory));
}

#[test]
fn fixed_reset() {
  let mut fixed = Fixed::new(32);
  fixed.allocate(32).unwrap();
  assert!(!fixed.has(1));

  fixed.reset();
  assert_eq!(fixed.offset(), 0);
  assert_eq!(fixed.remaining(), 32);
  assert_eq!(fixed.allocate(8).unwrap(), 0..8);
}
