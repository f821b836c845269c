use permsort::prelude::*;
use rand::Rng;
use rand::rngs::StdRng;
use rand::SeedableRng;
use rstest::rstest;
use std::cmp::Ordering;

#[rstest]
#[case::sorted(vec![1, 2, 3, 4], vec![1, 2, 3, 4])]
#[case::shuffled(vec![4, 2, 3, 1], vec![1, 2, 3, 4])]
#[case::reversed(vec![4, 3, 2, 1], vec![1, 2, 3, 4])]
#[case::empty(vec![], vec![])]
#[case::single(vec![7], vec![7])]
#[case::duplicates(vec![3, 1, 3, 1, 2], vec![1, 1, 2, 3, 3])]
fn test_sort_ascending_natural(
    #[values(Algorithm::Bubble, Algorithm::Insertion, Algorithm::Quick, Algorithm::Selection)]
    algorithm: Algorithm,
    #[case] mut input: Vec<i32>,
    #[case] expected: Vec<i32>,
) {
    algorithm.sort_ascending(&mut input).unwrap();
    assert_eq!(input, expected, "{algorithm} produced the wrong order");
}

#[rstest]
#[case::sorted(vec![1, 2, 3, 4], vec![4, 3, 2, 1])]
#[case::shuffled(vec![4, 2, 3, 1], vec![4, 3, 2, 1])]
#[case::reversed(vec![4, 3, 2, 1], vec![4, 3, 2, 1])]
#[case::empty(vec![], vec![])]
fn test_sort_descending_natural(
    #[values(Algorithm::Bubble, Algorithm::Insertion, Algorithm::Quick, Algorithm::Selection)]
    algorithm: Algorithm,
    #[case] mut input: Vec<i32>,
    #[case] expected: Vec<i32>,
) {
    algorithm.sort_descending(&mut input).unwrap();
    assert_eq!(input, expected, "{algorithm} produced the wrong order");
}

#[rstest]
#[case::tail(vec![1, 2, 3, 4, 1, 2], vec![1, 2, 1, 2, 3, 4], 2, 4)]
#[case::whole(vec![4, 2, 3, 1], vec![1, 2, 3, 4], 0, 4)]
#[case::middle(vec![4, 3, 2, 1], vec![4, 2, 3, 1], 1, 2)]
#[case::empty_range(vec![4, 3, 2, 1], vec![4, 3, 2, 1], 4, 0)]
fn test_sort_ascending_range(
    #[values(Algorithm::Bubble, Algorithm::Insertion, Algorithm::Quick, Algorithm::Selection)]
    algorithm: Algorithm,
    #[case] mut input: Vec<i32>,
    #[case] expected: Vec<i32>,
    #[case] index: isize,
    #[case] count: isize,
) {
    algorithm
        .sort_ascending_range(Some(&mut input[..]), index, count, Some(Natural))
        .unwrap();
    assert_eq!(input, expected, "{algorithm} produced the wrong order");
}

#[rstest]
#[case::tail(vec![1, 2, 3, 4, 1, 2], vec![1, 2, 4, 3, 2, 1], 2, 4)]
#[case::whole(vec![4, 2, 3, 1], vec![4, 3, 2, 1], 0, 4)]
#[case::middle(vec![4, 3, 2, 1], vec![4, 3, 2, 1], 1, 2)]
fn test_sort_descending_range(
    #[values(Algorithm::Bubble, Algorithm::Insertion, Algorithm::Quick, Algorithm::Selection)]
    algorithm: Algorithm,
    #[case] mut input: Vec<i32>,
    #[case] expected: Vec<i32>,
    #[case] index: isize,
    #[case] count: isize,
) {
    algorithm
        .sort_descending_range(Some(&mut input[..]), index, count, Some(Natural))
        .unwrap();
    assert_eq!(input, expected, "{algorithm} produced the wrong order");
}

#[test]
fn test_each_sorter_type_directly() {
    let expected = vec![1, 2, 3, 4];

    let mut data = vec![4, 2, 3, 1];
    BubbleSort.sort_ascending(&mut data).unwrap();
    assert_eq!(data, expected);

    let mut data = vec![4, 2, 3, 1];
    InsertionSort.sort_ascending(&mut data).unwrap();
    assert_eq!(data, expected);

    let mut data = vec![4, 2, 3, 1];
    QuickSort.sort_ascending(&mut data).unwrap();
    assert_eq!(data, expected);

    let mut data = vec![4, 2, 3, 1];
    SelectionSort.sort_ascending(&mut data).unwrap();
    assert_eq!(data, expected);
}

#[test]
fn test_sort_strings_by_closure() {
    for algorithm in Algorithm::ALL {
        let mut data = vec!["pear", "fig", "banana", "kiwi"];
        algorithm
            .sort_ascending_by(&mut data, |a, b| a.len().cmp(&b.len()).then(a.cmp(b)))
            .unwrap();
        assert_eq!(data, vec!["fig", "kiwi", "pear", "banana"], "{algorithm}");

        algorithm
            .sort_descending_by(&mut data, |a, b| a.len().cmp(&b.len()).then(a.cmp(b)))
            .unwrap();
        assert_eq!(data, vec!["banana", "pear", "kiwi", "fig"], "{algorithm}");
    }
}

#[test]
fn test_sort_with_reversed_comparator_matches_descending() {
    for algorithm in Algorithm::ALL {
        let mut ascending_reversed = vec![5, 1, 4, 1, 5, 9, 2, 6];
        let mut descending = ascending_reversed.clone();

        algorithm
            .sort_ascending_with(&mut ascending_reversed, Reversed(Natural))
            .unwrap();
        algorithm.sort_descending(&mut descending).unwrap();

        assert_eq!(ascending_reversed, descending, "{algorithm}");
        assert_eq!(descending, vec![9, 6, 5, 5, 4, 2, 1, 1]);
    }
}

#[test]
fn test_double_reversal_restores_ascending() {
    let mut data = vec![3, 1, 2];
    QuickSort
        .sort_descending_with(&mut data, Reversed(Natural))
        .unwrap();
    assert_eq!(data, vec![1, 2, 3]);
}

#[test]
fn test_fuzz_random_against_std() {
    let mut rng = StdRng::seed_from_u64(7);

    for algorithm in Algorithm::ALL {
        for _ in 0..200 {
            let len = rng.random_range(0..64);
            let mut input: Vec<i16> = (0..len).map(|_| rng.random_range(-20..20)).collect();

            let mut expected = input.clone();
            expected.sort();

            algorithm.sort_ascending(&mut input).unwrap();
            assert_eq!(input, expected, "{algorithm}");
        }
    }
}

#[test]
fn test_fuzz_random_ranges_leave_outside_untouched() {
    let mut rng = StdRng::seed_from_u64(42);

    for algorithm in Algorithm::ALL {
        for _ in 0..200 {
            let len = rng.random_range(0..48);
            let input: Vec<u8> = (0..len).map(|_| rng.random_range(0..10)).collect();
            let index = rng.random_range(0..=len);
            let count = rng.random_range(0..=len - index);

            let mut actual = input.clone();
            algorithm
                .sort_ascending_range(
                    Some(&mut actual[..]),
                    index as isize,
                    count as isize,
                    Some(Natural),
                )
                .unwrap();

            let mut expected = input.clone();
            expected[index..index + count].sort();
            assert_eq!(actual, expected, "{algorithm} index={index} count={count}");
        }
    }
}

#[test]
fn test_fuzz_edge_cases() {
    for algorithm in Algorithm::ALL {
        // 1. All same
        let mut input = vec![7u8; 50];
        algorithm.sort_ascending(&mut input).unwrap();
        assert_eq!(input, vec![7u8; 50]);

        // 2. Reversed
        let mut input: Vec<u32> = (0..50).rev().collect();
        algorithm.sort_ascending(&mut input).unwrap();
        assert_eq!(input, (0..50).collect::<Vec<u32>>());

        // 3. Sorted
        let mut input: Vec<u32> = (0..50).collect();
        algorithm.sort_ascending(&mut input).unwrap();
        assert_eq!(input, (0..50).collect::<Vec<u32>>());

        // 4. Organ pipe
        let mut input: Vec<u32> = (0..25).chain((0..25).rev()).collect();
        let mut expected = input.clone();
        expected.sort();
        algorithm.sort_ascending(&mut input).unwrap();
        assert_eq!(input, expected);
    }
}

#[test]
fn test_non_clone_elements() {
    #[derive(Debug, PartialEq, Eq, PartialOrd, Ord)]
    struct Token(u32);

    for algorithm in Algorithm::ALL {
        let mut data = vec![Token(3), Token(1), Token(2)];
        algorithm.sort_ascending(&mut data).unwrap();
        assert_eq!(data, vec![Token(1), Token(2), Token(3)]);
    }
}

#[test]
fn test_inconsistent_comparator_is_accepted() {
    // Every pair compares Less: the result order is unspecified, but the
    // multiset must survive and the call must return.
    for algorithm in Algorithm::ALL {
        let mut data = vec![3, 1, 2];
        algorithm
            .sort_ascending_by(&mut data, |_, _| Ordering::Less)
            .unwrap();
        data.sort();
        assert_eq!(data, vec![1, 2, 3]);
    }
}

#[test]
fn test_algorithm_parse_and_display() {
    for algorithm in Algorithm::ALL {
        let parsed: Algorithm = algorithm.to_string().parse().unwrap();
        assert_eq!(parsed, algorithm);
    }

    assert_eq!(" Quick ".parse::<Algorithm>(), Ok(Algorithm::Quick));
    assert_eq!("SELECTION".parse::<Algorithm>(), Ok(Algorithm::Selection));

    let error = "heap".parse::<Algorithm>().unwrap_err();
    assert_eq!(error.to_string(), "unknown sorting algorithm: heap");
}
