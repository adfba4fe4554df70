use super::*;

#[test]
fn page_numbers_cover_every_page() {
    assert_eq!(page_numbers(3), vec![1, 2, 3]);
}

#[test]
fn page_numbers_never_empty() {
    assert_eq!(page_numbers(0), vec![1]);
}

#[test]
fn page_label_reads_page_of_total() {
    assert_eq!(page_label(2, 5), "Page 2 of 5");
    assert_eq!(page_label(1, 0), "Page 1 of 1");
}
