use permsort::prelude::*;
use rand::Rng;
use std::time::Instant;

#[test]
fn test_quick_sort_100k() {
    let count: usize = 100_000;
    println!("Generating {} random elements...", count);

    let mut rng = rand::rng();
    let mut input: Vec<u64> = (0..count).map(|_| rng.random()).collect();

    println!("Sorting {} elements...", count);
    let start = Instant::now();
    QuickSort.sort_ascending(&mut input).unwrap();
    println!("Sorted {} elements in {:?}", count, start.elapsed());

    for i in 0..count - 1 {
        assert!(input[i] <= input[i + 1], "Sort failed at index {}", i);
    }
}

#[test]
fn test_quick_sort_sorted_and_reversed_100k() {
    // Middle pivot keeps presorted input balanced.
    let mut ascending: Vec<u32> = (0..100_000).collect();
    QuickSort.sort_ascending(&mut ascending).unwrap();
    assert!(ascending.windows(2).all(|pair| pair[0] <= pair[1]));

    let mut descending = ascending.clone();
    QuickSort.sort_descending(&mut descending).unwrap();
    assert!(descending.windows(2).all(|pair| pair[0] >= pair[1]));
}

#[test]
fn test_quadratic_sorts_2k() {
    let mut rng = rand::rng();
    let input: Vec<i32> = (0..2_000).map(|_| rng.random_range(-1000..1000)).collect();

    let mut expected = input.clone();
    expected.sort();

    for algorithm in [Algorithm::Bubble, Algorithm::Insertion, Algorithm::Selection] {
        let mut actual = input.clone();
        let start = Instant::now();
        algorithm.sort_ascending(&mut actual).unwrap();
        println!("{} sorted 2k elements in {:?}", algorithm, start.elapsed());
        assert_eq!(actual, expected);
    }
}

#[test]
#[ignore]
fn test_enumerate_ten_factorial() {
    // 10! = 3,628,800 permutations.
    let permutations = Permutations::new(0u8..10);

    let start = Instant::now();
    let mut enumerator = permutations.enumerator();
    let mut count: u128 = 0;
    while enumerator.advance() {
        count += 1;
    }
    println!("Enumerated {} permutations in {:?}", count, start.elapsed());

    assert_eq!(Some(count), permutations.distinct_count());
    assert_eq!(enumerator.current(), Some(&[9, 8, 7, 6, 5, 4, 3, 2, 1, 0][..]));
}
