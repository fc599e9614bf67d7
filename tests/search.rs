use memcalc::util::search::search;

#[test]
fn empty_sequence_is_not_found() {
    let empty: Vec<i64> = Vec::new();
    assert_eq!(search(&empty, 0, &5), None);
    assert_eq!(search(&empty, 3, &5), None);
}

#[test]
fn first_match_wins() {
    let values = [5, 3, 5];
    assert_eq!(search(&values, values.len(), &5), Some(0));
    assert_eq!(search(&values, values.len(), &3), Some(1));
    assert_eq!(search(&values, values.len(), &9), None);
}

#[test]
fn declared_length_bounds_the_scan() {
    let values = [1, 2, 3, 4];
    assert_eq!(search(&values, 2, &3), None);
    assert_eq!(search(&values, 3, &3), Some(2));
    assert_eq!(search(&values, 0, &1), None);
    assert_eq!(search(&values, 100, &4), Some(3));
}

#[test]
fn works_for_floats_and_strings() {
    assert_eq!(search(&[0.5, 1.5], 2, &1.5), Some(1));
    assert_eq!(search(&["mi", "mc"], 2, &"mc"), Some(1));
}
