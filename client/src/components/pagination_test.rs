use super::*;

#[test]
fn page_label_is_one_based() {
    assert_eq!(page_label(0), "1");
    assert_eq!(page_label(9), "10");
}

#[test]
fn page_class_marks_current_page() {
    assert!(page_class(2, 2).contains("--active"));
    assert!(!page_class(1, 2).contains("--active"));
}
