#![allow(clippy::float_cmp)]

use super::*;

#[test]
fn offset_scales_with_speed_inside_first_viewport() {
    assert_eq!(background_offset(0.0, 900.0, 0.5), Some(0.0));
    assert_eq!(background_offset(400.0, 900.0, 0.5), Some(200.0));
}

#[test]
fn no_update_once_hero_is_past() {
    assert_eq!(background_offset(900.0, 900.0, 0.5), None);
    assert_eq!(background_offset(2000.0, 900.0, 0.5), None);
}
