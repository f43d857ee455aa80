use super::*;

#[test]
fn test_number_display() {
    assert_eq!(Number::Int(-3).to_string(), "-3");
    assert_eq!(Number::float(2.0).to_string(), "2.0");
    assert_eq!(Number::float(2.5).to_string(), "2.5");
}

#[test]
fn test_number_compare_mixed() {
    assert_eq!(Number::Int(3).compare(Number::Int(4)), Some(Ordering::Less));
    assert_eq!(
        Number::Int(3).compare(Number::float(3.0)),
        Some(Ordering::Equal)
    );
    assert_eq!(Number::float(f64::NAN).compare(Number::Int(1)), None);
}

#[test]
fn test_number_float_equality_uses_bits() {
    assert_eq!(Number::float(0.5), Number::float(0.5));
    assert_ne!(Number::float(0.0), Number::float(-0.0));
    assert_eq!(Number::Int(7).as_int(), Some(7));
    assert_eq!(Number::float(7.0).as_int(), None);
}
