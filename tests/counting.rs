use iso_datetime_radix::*;

const VALUES: [u32; 10] = [2, 0, 3, 7, 6, 9, 4, 4, 3, 2];

fn by_value(v: &u32) -> u32 {
    *v
}

#[test]
fn test_counting_sort_values() {
    let keys = identity_keys(VALUES.len());
    let sorted = counting_sort(&VALUES, &keys, 9, &by_value).unwrap();
    let vals: Vec<u32> = sorted.iter().map(|&k| VALUES[k]).collect();
    assert_eq!(vals, vec![0, 2, 2, 3, 3, 4, 4, 6, 7, 9]);
}

#[test]
fn test_counting_sort_is_stable() {
    let keys = identity_keys(VALUES.len());
    let sorted = counting_sort(&VALUES, &keys, 9, &by_value).unwrap();
    // Equal values keep their input order: 2s at 0,9; 3s at 2,8; 4s at 6,7.
    assert_eq!(sorted, vec![1, 0, 9, 2, 8, 6, 7, 4, 3, 5]);
}

#[test]
fn test_counting_sort_closure_and_subset() {
    let sorted = counting_sort(&VALUES, &[5, 3, 1], 9, &|v: &u32| *v).unwrap();
    assert_eq!(sorted, vec![1, 3, 5]);

    // Descending via a projected key.
    let sorted = counting_sort(&VALUES, &[0, 1, 3], 9, &|v: &u32| 9 - *v).unwrap();
    assert_eq!(sorted, vec![3, 0, 1]);
}

#[test]
fn test_counting_sort_empty_and_single_bucket() {
    assert!(counting_sort(&VALUES, &[], 9, &by_value).unwrap().is_empty());

    let zeros = [0u32; 4];
    let sorted = counting_sort(&zeros, &identity_keys(4), 0, &by_value).unwrap();
    assert_eq!(sorted, vec![0, 1, 2, 3]);
}

#[test]
fn test_counting_sort_rejects_key_above_max() {
    let keys = identity_keys(VALUES.len());
    let mut out = vec![usize::MAX; VALUES.len()];
    let err = counting_sort_into(&VALUES, &keys, 8, &by_value, &mut out).unwrap_err();
    assert!(matches!(err, Error::InvalidKeyRange { value: 9, max: 8 }));
    assert!(out.iter().all(|&k| k == usize::MAX), "output must stay untouched");
}

#[test]
fn test_counting_sort_preconditions() {
    let err = counting_sort(&VALUES, &[0, 10], 9, &by_value).unwrap_err();
    assert!(matches!(err, Error::PreconditionViolated(_)));

    let mut short = vec![0usize; 3];
    let err = counting_sort_into(&VALUES, &identity_keys(4), 9, &by_value, &mut short).unwrap_err();
    assert!(matches!(err, Error::PreconditionViolated(_)));
}

#[test]
fn test_counting_sort_does_not_mutate_input_keys() {
    let keys = vec![9, 8, 7, 6, 5, 4, 3, 2, 1, 0];
    let _ = counting_sort(&VALUES, &keys, 9, &by_value).unwrap();
    assert_eq!(keys, vec![9, 8, 7, 6, 5, 4, 3, 2, 1, 0]);
}
