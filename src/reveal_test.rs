use super::*;

#[test]
fn stagger_cycles_and_caps_at_four() {
    let steps: Vec<usize> = (0..8).map(stagger_step).collect();
    assert_eq!(steps, vec![1, 2, 3, 4, 4, 4, 1, 2]);
}

#[test]
fn stagger_class_names() {
    assert_eq!(stagger_class(0), "fade-in-delay-1");
    assert_eq!(stagger_class(5), "fade-in-delay-4");
}

#[test]
fn only_service_and_industry_cards_are_staggered() {
    assert!(is_staggered("service-card"));
    assert!(is_staggered("card industry-card highlighted"));
    assert!(!is_staggered("process-card"));
    assert!(!is_staggered("section-header"));
    assert!(!is_staggered("service-cards"));
}
