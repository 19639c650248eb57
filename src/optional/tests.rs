use crate::Optional;
use std::cell::Cell;

fn double(value: i32) -> i32 {
    value * 2
}

fn half(value: i32) -> Optional<i32> {
    if value % 2 == 0 {
        Optional::present(value / 2)
    } else {
        Optional::absent()
    }
}

fn third(value: i32) -> Optional<i32> {
    if value % 3 == 0 {
        Optional::present(value / 3)
    } else {
        Optional::absent()
    }
}

#[test]
fn test_map() {
    assert_eq!(Optional::<i32>::absent().map(double), Optional::absent());
    assert_eq!(Optional::present(2).map(double), Optional::present(4));
}

#[test]
fn test_map_identity() {
    assert_eq!(Optional::present(7).map(|value| value), Optional::present(7));
}

#[test]
fn test_map_skips_function_on_absence() {
    let invoked = Cell::new(false);

    let result = Optional::<i32>::absent().map(|value| {
        invoked.set(true);
        value
    });

    assert_eq!(result, Optional::absent());
    assert!(!invoked.get());
}

#[test]
fn test_flat_map() {
    assert_eq!(Optional::<i32>::absent().flat_map(half), Optional::absent());
    assert_eq!(Optional::present(4).flat_map(half), Optional::present(2));
    assert_eq!(Optional::present(3).flat_map(half), Optional::absent());
}

#[test]
fn test_flat_map_associativity() {
    let values = [
        Optional::absent(),
        Optional::present(5),
        Optional::present(12),
        Optional::present(9),
    ];

    for m in values {
        assert_eq!(
            m.flat_map(half).flat_map(third),
            m.flat_map(|value| half(value).flat_map(third)),
        );
    }
}

#[test]
fn test_default_is_absent() {
    assert_eq!(Optional::<i32>::default(), Optional::absent());
}

#[test]
fn test_display() {
    assert_eq!(Optional::<f64>::absent().to_string(), "nil");
    assert_eq!(Optional::present(123.321).to_string(), "some(123.321)");
    assert_eq!(Optional::present("male").to_string(), "some(male)");
}

#[test]
fn test_option_conversions() {
    assert_eq!(Optional::from(Some(1)), Optional::present(1));
    assert_eq!(Optional::from(None::<i32>), Optional::absent());
    assert_eq!(Option::from(Optional::present(1)), Some(1));
    assert_eq!(Option::<i32>::from(Optional::<i32>::absent()), None);
}
