// crates/shared-kernel/tests/average_rounding.rs
use chandas_shared_kernel::Average;

#[test]
fn rounds_half_up_to_two_places() {
    assert_eq!(Average::of(1, 8).value(), 0.13);
    assert_eq!(Average::of(2, 3).value(), 0.67);
    assert_eq!(Average::of(10, 4).value(), 2.5);
}

#[test]
fn zero_denominator_is_zero() {
    assert_eq!(Average::of(5, 0), Average::ZERO);
}

#[test]
fn display_keeps_two_digits() {
    assert_eq!(Average::of(3, 1).to_string(), "3.00");
    assert_eq!(Average::of(7, 3).to_string(), "2.33");
}
