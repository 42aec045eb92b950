use super::*;
use crate::eval::calculator::compute_visual_state;

#[test]
fn layers_shift_left_by_their_offsets() {
    let state = compute_visual_state(3500.0, 1000.0);
    let frame = SceneFrame::build(&state, &QuoteContent::default());
    assert_eq!(frame.phase, NarrativePhase::Transition);
    assert_eq!(frame.transforms.content.translate_x_vw, -50.0);
    assert_eq!(frame.transforms.portrait.translate_x_vw, -40.0);
    assert_eq!(frame.transforms.quote.translate_x_vw, -60.0);
    assert_eq!(frame.transforms.hero.translate_x_vw, -45.0);
    assert_eq!(frame.transforms.quote.css(), "translateX(-60vw)");
}

#[test]
fn quote_lines_carry_word_opacities() {
    let state = compute_visual_state(1250.0, 1000.0);
    let frame = SceneFrame::build(&state, &QuoteContent::default());
    assert_eq!(frame.quote_lines.len(), 4);
    assert_eq!(frame.quote_lines[0][0].text, "Life");
    assert_eq!(frame.quote_lines[0][0].opacity, 1.0);
    let last = frame.quote_lines[3].last().unwrap();
    assert_eq!(last.index, 12);
    assert_eq!(last.opacity, 0.15);
    assert_eq!(frame.author, "-Søren Kierkegaard");
    assert!(!frame.hero_fully_visible);
}
