use super::*;

#[test]
fn click_beep_constants() {
    assert!((CLICK_BEEP.frequency_hz - 900.0).abs() < f32::EPSILON);
    assert!((CLICK_BEEP.start_gain - 0.12).abs() < f32::EPSILON);
    assert!(CLICK_BEEP.end_gain > 0.0);
}

#[test]
fn tone_stops_after_ramp_finishes() {
    let (ramp_end, stop) = CLICK_BEEP.schedule(10.0);
    assert!((ramp_end - 10.06).abs() < 1e-9);
    assert!((stop - 10.07).abs() < 1e-9);
    assert!(stop > ramp_end);
}
