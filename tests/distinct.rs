use iso_datetime_radix::*;

fn fixture() -> Vec<DateTime> {
    [
        "0000-01-01T00:00:00Z",
        "0000-01-01T00:00:01Z",
        "0000-01-01T00:01:01Z",
        "0000-01-01T00:01:01Z",
        "0000-01-01T00:01:01Z",
        "0000-01-01T01:01:01Z",
        "1000-01-01T00:00:00Z",
        "1000-01-01T00:00:00Z",
    ]
    .iter()
    .map(|s| parse_iso(s).unwrap())
    .collect()
}

#[test]
fn test_distinct_removes_copies() {
    let records = fixture();
    let keys = distinct_datetimes(&records).unwrap();
    assert_eq!(keys.len(), 5);
    assert_eq!(keys, vec![0, 1, 2, 5, 6]);
    for w in keys.windows(2) {
        assert!(records[w[0]] < records[w[1]]);
    }
}

#[test]
fn test_distinct_is_idempotent() {
    let records = fixture();
    let keys = distinct_datetimes(&records).unwrap();
    let unique: Vec<DateTime> = keys.iter().map(|&k| records[k]).collect();

    let again = distinct_datetimes(&unique).unwrap();
    assert_eq!(again, identity_keys(unique.len()));
}

#[test]
fn test_distinct_follows_sort_order_not_input_order() {
    let late = parse_iso("2030-01-01T00:00:00Z").unwrap();
    let early = parse_iso("2020-01-01T00:00:00Z").unwrap();
    let records = vec![late, early, late, early];
    assert_eq!(distinct_datetimes(&records).unwrap(), vec![1, 0]);
}

#[test]
fn test_distinct_sorted_preconditions() {
    let records = fixture();
    assert!(distinct_sorted(&records, &[]).unwrap().is_empty());
    assert!(matches!(
        distinct_sorted(&records, &[0, 8]),
        Err(Error::PreconditionViolated(_))
    ));
    assert!(distinct_datetimes(&[]).unwrap().is_empty());
}

#[test]
fn test_distinct_propagates_sort_failure() {
    let records = vec![DateTime::new_unchecked(2000, 1, 1, 24, 0, 0)];
    assert!(matches!(
        distinct_datetimes(&records),
        Err(Error::InvalidKeyRange { value: 24, max: 23 })
    ));
}
