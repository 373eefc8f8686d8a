use super::*;

#[test]
fn types_one_character_per_step() {
    let frames: Vec<String> = Typewriter::new("IT's").collect();
    assert_eq!(frames, vec!["I", "IT", "IT'", "IT's"]);
}

#[test]
fn multibyte_characters_are_not_split() {
    let frames: Vec<String> = Typewriter::new("café ✓").collect();
    assert_eq!(frames.len(), 6);
    assert_eq!(frames[3], "café");
    assert_eq!(frames.last().map(String::as_str), Some("café ✓"));
}

#[test]
fn empty_text_yields_nothing() {
    assert_eq!(Typewriter::new("").count(), 0);
}

#[test]
fn speed_attribute_overrides_default() {
    assert_eq!(speed_ms(Some("80"), 50), 80);
    assert_eq!(speed_ms(Some(" 30 "), 50), 30);
    assert_eq!(speed_ms(Some("fast"), 50), 50);
    assert_eq!(speed_ms(Some("0"), 50), 50);
    assert_eq!(speed_ms(None, 50), 50);
}
