use super::*;

fn close(a: f64, b: f64) -> bool {
    (a - b).abs() < 1e-9
}

#[test]
fn top_of_page_is_landing_at_rest() {
    let s = compute_visual_state(0.0, 1000.0);
    assert_eq!(s.phase, NarrativePhase::Landing);
    assert_eq!(s.phase_progress, 0.0);
    assert_eq!(s.horizontal_progress_percent, 0.0);
    assert_eq!(s.portrait_parallax_percent, 0.0);
    assert_eq!(s.quote_parallax_percent, 0.0);
    assert_eq!(s.hero_parallax_percent, 0.0);
    assert_eq!(s.word_opacities[0], 0.15);
    assert!(s.word_opacities.iter().all(|&o| o == 0.15));
    assert!(!s.is_hero_fully_visible);
}

#[test]
fn mid_transition_moves_every_layer() {
    let s = compute_visual_state(3500.0, 1000.0);
    assert_eq!(s.phase, NarrativePhase::Transition);
    assert_eq!(s.horizontal_progress_percent, 50.0);
    assert_eq!(s.portrait_parallax_percent, 40.0);
    assert_eq!(s.quote_parallax_percent, 60.0);
    assert_eq!(s.hero_parallax_percent, 45.0);
    assert!(s.phase_info().is_transitioning);
    assert!(!s.is_hero_fully_visible);
}

#[test]
fn past_hero_is_vertical_with_layers_at_full_travel() {
    let s = compute_visual_state(5500.0, 1000.0);
    assert_eq!(s.phase, NarrativePhase::Vertical);
    assert_eq!(s.horizontal_progress_percent, 100.0);
    assert!(close(s.portrait_parallax_percent, 80.0));
    assert!(close(s.quote_parallax_percent, 120.0));
    assert!(close(s.hero_parallax_percent, 90.0));
    assert!(s.is_hero_fully_visible);
    assert!(s.word_opacities.iter().all(|&o| o == 1.0));
}

#[test]
fn hero_is_fully_visible_from_end_of_transition() {
    let s = compute_visual_state(4000.0, 1000.0);
    assert_eq!(s.phase, NarrativePhase::Transition);
    assert!(s.is_hero_fully_visible);

    let s = compute_visual_state(4500.0, 1000.0);
    assert_eq!(s.phase, NarrativePhase::Hero);
    assert_eq!(s.horizontal_progress_percent, 100.0);
}

#[test]
fn degenerate_viewport_yields_idle_state() {
    let calc = ScrollStateCalculator::default();
    for vh in [0.0, -500.0, f64::NAN] {
        let s = calc.compute(ScrollSignal::new(4200.0, vh));
        assert_eq!(s, calc.idle_state());
    }
}

#[test]
fn matches_individual_calculations() {
    let cfg = NarrativeConfig::default();
    let calc = ScrollStateCalculator::new(cfg).unwrap();
    let mut offset = 0.0;
    while offset <= 7000.0 {
        let s = calc.compute(ScrollSignal::new(offset, 900.0));
        assert_eq!(
            s.phase,
            crate::narrative::phase::compute_phase(offset, 900.0, &cfg.scroll)
        );
        let h = crate::narrative::horizontal::compute_horizontal_progress(
            offset,
            900.0,
            &cfg.scroll,
        );
        assert_eq!(s.horizontal_progress_percent, h);
        for layer in ParallaxLayer::ALL {
            assert_eq!(s.parallax(layer), compute_parallax(layer, h, &cfg.parallax));
        }
        let words = crate::narrative::quote::compute_word_opacities(
            offset,
            900.0,
            &cfg.scroll,
            &cfg.quote,
        );
        assert_eq!(s.word_opacities, words);
        offset += 37.0;
    }
}

#[test]
fn rejects_invalid_config() {
    let mut cfg = NarrativeConfig::default();
    cfg.scroll.hero_stable_end = 2.0;
    assert!(ScrollStateCalculator::new(cfg).is_err());
}

#[test]
fn custom_config_changes_windows() {
    let mut cfg = NarrativeConfig::default();
    cfg.scroll.quote_phase_end = 1.0;
    cfg.scroll.hero_transition_end = 2.0;
    cfg.scroll.hero_stable_end = 3.0;
    cfg.scroll.total_scroll_height = 4.0;
    let calc = ScrollStateCalculator::new(cfg).unwrap();
    let s = calc.compute(ScrollSignal::new(1500.0, 1000.0));
    assert_eq!(s.phase, NarrativePhase::Transition);
    assert_eq!(s.horizontal_progress_percent, 50.0);
}

#[test]
fn state_serializes_to_json() {
    let s = compute_visual_state(3500.0, 1000.0);
    let v = serde_json::to_value(&s).unwrap();
    assert_eq!(v["phase"], "transition");
    assert_eq!(v["horizontal_progress_percent"], 50.0);
    assert_eq!(v["word_opacities"].as_array().unwrap().len(), QUOTE_SLOT_COUNT);
}
