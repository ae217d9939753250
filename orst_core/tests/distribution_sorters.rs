use orst_core::orst::{
    CountingSorter, Error, RadixSorter, RangedBucketSorter, UniformBucketSorter,
};
use utilities::sorting::{
    is_permutation, is_sorted, is_stable, random_unit_floats, tagged, TestInputs,
};

#[test]
fn counting_sorts_every_input_shape() {
    let inputs = TestInputs::new();

    for stable in [false, true] {
        for (shape, input) in inputs.all() {
            let mut slice = input.to_vec();
            CountingSorter { stable }.try_sort(&mut slice).unwrap();
            assert!(is_sorted(&slice), "stable: {stable} on {shape}");
            assert!(is_permutation(&slice, input), "stable: {stable} on {shape}");

            let once = slice.clone();
            CountingSorter { stable }.try_sort(&mut slice).unwrap();
            assert_eq!(slice, once, "stable: {stable} is not idempotent on {shape}");
        }
    }
}

#[test]
fn signed_radix_sorts_every_input_shape() {
    let inputs = TestInputs::new();

    for (shape, input) in inputs.all() {
        let mut slice = input.to_vec();
        RadixSorter { signed: true }.try_sort(&mut slice).unwrap();
        assert!(is_sorted(&slice), "{shape}");
        assert!(is_permutation(&slice, input), "{shape}");

        let once = slice.clone();
        RadixSorter { signed: true }.try_sort(&mut slice).unwrap();
        assert_eq!(slice, once, "not idempotent on {shape}");
    }
}

#[test]
fn unsigned_radix_matches_signed_on_non_negative_input() {
    let inputs = TestInputs::new();

    let mut unsigned = inputs.random.clone();
    RadixSorter::default().try_sort(&mut unsigned).unwrap();

    let mut signed = inputs.random.clone();
    RadixSorter { signed: true }.try_sort(&mut signed).unwrap();

    assert_eq!(unsigned, signed);
    assert_eq!(unsigned, inputs.sorted);
}

#[test]
fn ranged_bucket_sorts_every_input_shape() {
    let inputs = TestInputs::new();

    for width in [1, 7, 10, 1000, i64::MAX] {
        for (shape, input) in inputs.all() {
            let mut slice = input.to_vec();
            RangedBucketSorter { width }.try_sort(&mut slice).unwrap();
            assert!(is_sorted(&slice), "width {width} on {shape}");
            assert!(is_permutation(&slice, input), "width {width} on {shape}");

            let once = slice.clone();
            RangedBucketSorter { width }.try_sort(&mut slice).unwrap();
            assert_eq!(slice, once, "width {width} is not idempotent on {shape}");
        }
    }
}

#[test]
fn uniform_bucket_sorts_random_floats() {
    let input = random_unit_floats(7, 1000);

    let mut slice = input.clone();
    UniformBucketSorter.try_sort(&mut slice).unwrap();

    let mut expected = input;
    expected.sort_by(|a, b| a.total_cmp(b));
    assert_eq!(slice, expected);

    UniformBucketSorter.try_sort(&mut slice).unwrap();
    assert_eq!(slice, expected);
}

#[test]
fn keyed_sorts_are_stable() {
    let inputs = TestInputs::new();

    for (shape, input) in inputs.all() {
        let mut slice = tagged(input);
        CountingSorter::try_sort_by_key(&mut slice, |t| t.value).unwrap();
        assert!(is_sorted(&slice), "counting on {shape}");
        assert!(is_stable(&slice), "counting on {shape}");
    }

    let mut slice = tagged(&inputs.few_unique);
    RadixSorter::try_sort_by_key(&mut slice, |t| t.value).unwrap();
    assert!(is_sorted(&slice));
    assert!(is_stable(&slice));
}

#[test]
fn agree_with_each_other() {
    let input = TestInputs::new().negatives;

    let mut counting = input.clone();
    CountingSorter::default().try_sort(&mut counting).unwrap();

    let mut radix = input.clone();
    RadixSorter { signed: true }.try_sort(&mut radix).unwrap();

    let mut bucket = input;
    RangedBucketSorter::default().try_sort(&mut bucket).unwrap();

    assert_eq!(counting, radix);
    assert_eq!(counting, bucket);
}

#[test]
fn scenarios() {
    for stable in [false, true] {
        let mut slice = [-5, -10, 0, -3, 8, 5, -1, 10];
        CountingSorter { stable }.try_sort(&mut slice).unwrap();
        assert_eq!(slice, [-10, -5, -3, -1, 0, 5, 8, 10]);
    }

    let mut slice = [-5, -10, 0, -3, 8, 5, -1, 10];
    RadixSorter { signed: true }.try_sort(&mut slice).unwrap();
    assert_eq!(slice, [-10, -5, -3, -1, 0, 5, 8, 10]);

    let mut slice = [0.42, 0.32, 0.23, 0.52, 0.25, 0.47, 0.51];
    UniformBucketSorter.try_sort(&mut slice).unwrap();
    assert_eq!(slice, [0.23, 0.25, 0.32, 0.42, 0.47, 0.51, 0.52]);

    let mut slice = [64, 34, 25, 12, 22, 11, 90];
    RangedBucketSorter::default().try_sort(&mut slice).unwrap();
    assert_eq!(slice, [11, 12, 22, 25, 34, 64, 90]);
}

#[test]
fn errors_leave_the_input_untouched() {
    let mut slice = [3, -1, 2];
    let err = RadixSorter::default().try_sort(&mut slice).unwrap_err();
    assert!(matches!(err, Error::InvalidRange(_)), "{err}");
    assert_eq!(slice, [3, -1, 2]);

    let mut slice = [i64::MIN, i64::MAX];
    let err = CountingSorter::default().try_sort(&mut slice).unwrap_err();
    assert!(matches!(err, Error::RangeOverflow(_)), "{err}");
    assert_eq!(slice, [i64::MIN, i64::MAX]);

    let mut slice = [3, 1, 2];
    let err = RangedBucketSorter { width: 0 }.try_sort(&mut slice).unwrap_err();
    assert!(matches!(err, Error::InvalidRange(_)), "{err}");
    assert_eq!(slice, [3, 1, 2]);

    let mut slice = [0.5, f64::NAN];
    let err = UniformBucketSorter.try_sort(&mut slice).unwrap_err();
    assert!(matches!(err, Error::TypeMismatch(_)), "{err}");
    assert_eq!(slice[0], 0.5);
}
