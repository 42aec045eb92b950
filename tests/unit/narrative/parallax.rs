use super::*;

fn all(base: f64) -> [f64; 3] {
    let speeds = ParallaxSpeeds::default();
    ParallaxLayer::ALL.map(|layer| compute_parallax(layer, base, &speeds))
}

#[test]
fn applies_layer_speeds() {
    assert_eq!(all(50.0), [40.0, 60.0, 45.0]);
    assert_eq!(all(0.0), [0.0, 0.0, 0.0]);
}

#[test]
fn clamps_out_of_range_progress() {
    assert_eq!(all(150.0), [100.0, 120.0, 90.0]);
    assert_eq!(all(-20.0), [0.0, 0.0, 0.0]);
    assert_eq!(all(f64::NAN), [0.0, 0.0, 0.0]);
}

#[test]
fn stays_within_bounds_over_extended_range() {
    let speeds = ParallaxSpeeds::default();
    let mut base = 0.0;
    while base <= 150.0 {
        for layer in ParallaxLayer::ALL {
            let (lo, hi) = layer.bounds(&speeds);
            let v = compute_parallax(layer, base, &speeds);
            assert!(v >= lo && v <= hi, "{layer:?} at {base} gave {v}");
        }
        base += 0.5;
    }
}

#[test]
fn full_progress_reaches_layer_bounds() {
    let [portrait, quote, hero] = all(100.0);
    assert!((portrait - 80.0).abs() < 1e-9);
    assert!((quote - 120.0).abs() < 1e-9);
    assert!((hero - 90.0).abs() < 1e-9);
}
