use proptest::prelude::*;

proptest! {
    /// Every element drawn from the sequence is found at an index holding an
    /// equal value (ties make the exact index unspecified).
    #[test]
    fn present_elements_are_found(mut seq in prop::collection::vec(any::<i32>(), 1..200), pick in any::<prop::sample::Index>()) {
        seq.sort();
        let target = seq[pick.index(seq.len())];

        let j = ordex::find(&seq, &target).expect("target drawn from the sequence");
        prop_assert_eq!(seq[j], target);
    }

    /// Values not present in the sequence come back as `None`.
    #[test]
    fn absent_values_are_none(mut seq in prop::collection::vec(any::<i32>(), 0..200), target in any::<i32>()) {
        seq.sort();
        prop_assume!(!seq.contains(&target));

        prop_assert_eq!(ordex::find(&seq, &target), None);
    }

    /// Presence/absence agrees with the standard library's binary search.
    #[test]
    fn agrees_with_std(mut seq in prop::collection::vec(any::<i16>(), 0..200), target in any::<i16>()) {
        seq.sort();

        match (ordex::find(&seq, &target), seq.binary_search(&target)) {
            (Some(j), Ok(_)) => prop_assert_eq!(seq[j], target),
            (None, Err(_)) => {}
            (ours, std) => prop_assert!(false, "ordex {:?} disagrees with std {:?}", ours, std),
        }
    }

    /// Same inputs, same answer — the operation is pure.
    #[test]
    fn idempotent(mut seq in prop::collection::vec(any::<i32>(), 0..100), target in any::<i32>()) {
        seq.sort();

        let first = ordex::find(&seq, &target);
        prop_assert_eq!(ordex::find(&seq, &target), first);
    }

    /// Validated construction accepts exactly the sorted inputs.
    #[test]
    fn sorted_slice_validation_matches_sortedness(seq in prop::collection::vec(any::<i32>(), 0..100)) {
        let sorted = seq.windows(2).all(|pair| pair[0] <= pair[1]);
        prop_assert_eq!(ordex::SortedSlice::new(&seq).is_ok(), sorted);
    }
}
