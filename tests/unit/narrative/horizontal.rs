use super::*;

fn progress(offset: f64, vh: f64) -> f64 {
    compute_horizontal_progress(offset, vh, &ScrollWindows::default())
}

#[test]
fn zero_through_quote_phase() {
    assert_eq!(progress(0.0, 1000.0), 0.0);
    assert_eq!(progress(2000.0, 1000.0), 0.0);
    assert_eq!(progress(3000.0, 1000.0), 0.0);
}

#[test]
fn midpoint_of_transition_is_fifty() {
    assert_eq!(progress(3500.0, 1000.0), 50.0);
    for vh in [800.0, 1000.0, 1200.0] {
        assert!((progress(vh * 3.5, vh) - 50.0).abs() < 1e-9);
    }
}

#[test]
fn plateaus_at_hundred_through_hero_phase() {
    assert_eq!(progress(4000.0, 1000.0), 100.0);
    assert_eq!(progress(4500.0, 1000.0), 100.0);
    assert_eq!(progress(5000.0, 1000.0), 100.0);
    assert_eq!(progress(5500.0, 1000.0), 100.0);
    assert_eq!(progress(f64::INFINITY, 1000.0), 100.0);
}

#[test]
fn monotonic_across_transition_and_hero() {
    let mut prev = 0.0;
    let mut offset = 3000.0;
    while offset <= 5000.0 {
        let p = progress(offset, 1000.0);
        assert!(p >= prev, "progress fell at {offset}");
        assert!((0.0..=100.0).contains(&p));
        prev = p;
        offset += 12.5;
    }
}

#[test]
fn degenerate_input_is_zero() {
    assert_eq!(progress(3500.0, 0.0), 0.0);
    assert_eq!(progress(3500.0, -1000.0), 0.0);
    assert_eq!(progress(-10.0, 1000.0), 0.0);
    assert_eq!(progress(f64::NAN, 1000.0), 0.0);
}
