//! Property-based checks of the pipeline's ordering and equivalence
//! guarantees against the standard iterator adapters.

use monad_stream::Stream;
use quickcheck::quickcheck;
use tokio::runtime::Runtime;

quickcheck! {
    fn prop_filter_matches_iterator_filter(input: Vec<i32>) -> bool {
        let rt = Runtime::new().unwrap();
        rt.block_on(async {
            let expected: Vec<i32> = input.iter().copied().filter(|x| x % 2 == 0).collect();
            let actual = Stream::of(input).filter(|&x| x % 2 == 0).to_slice().await;
            actual == expected
        })
    }

    fn prop_filter_retains_only_satisfying_elements(input: Vec<i32>) -> bool {
        let rt = Runtime::new().unwrap();
        rt.block_on(async {
            let retained = Stream::of(input).filter(|&x| x > 0).to_slice().await;
            retained.iter().all(|&x| x > 0)
        })
    }

    fn prop_map_matches_elementwise_application(input: Vec<i32>) -> bool {
        let rt = Runtime::new().unwrap();
        rt.block_on(async {
            let expected: Vec<i64> = input.iter().map(|&x| x as i64 * 2).collect();
            let actual = Stream::of(input).map(|x| x as i64 * 2).to_slice().await;
            actual == expected
        })
    }

    fn prop_skip_then_limit_slices(input: Vec<i32>, skip: usize, take: usize) -> bool {
        let rt = Runtime::new().unwrap();
        rt.block_on(async {
            let expected: Vec<i32> = input.iter().copied().skip(skip).take(take).collect();
            let actual = Stream::of(input).skip(skip).limit(take).to_slice().await;
            actual == expected
        })
    }

    fn prop_flat_map_matches_iterator_flat_map(input: Vec<u8>) -> bool {
        let rt = Runtime::new().unwrap();
        rt.block_on(async {
            let expected: Vec<u8> = input
                .iter()
                .flat_map(|&x| std::iter::repeat(x).take((x % 3) as usize))
                .collect();
            let actual = Stream::of(input)
                .flat_map(|x| Stream::of(std::iter::repeat(x).take((x % 3) as usize)))
                .to_slice()
                .await;
            actual == expected
        })
    }

    fn prop_any_match_agrees_with_find_first(input: Vec<i32>) -> bool {
        let rt = Runtime::new().unwrap();
        rt.block_on(async {
            let any = Stream::of(input.clone()).any_match(|&x| x % 3 == 0).await;
            let found = Stream::of(input).find_first(|&x| x % 3 == 0).await;
            any == found.is_present()
        })
    }

    fn prop_all_match_agrees_with_iterator_all(input: Vec<i32>) -> bool {
        let rt = Runtime::new().unwrap();
        rt.block_on(async {
            let expected = input.iter().all(|&x| x >= 0);
            let actual = Stream::of(input).all_match(|&x| x >= 0).await;
            actual == expected
        })
    }

    fn prop_reduce_is_always_present(input: Vec<i32>) -> bool {
        let rt = Runtime::new().unwrap();
        rt.block_on(async {
            let expected = input.iter().fold(0i32, |acc, &x| acc.wrapping_add(x));
            let result = Stream::of(input).reduce(|acc: i32, x| acc.wrapping_add(x)).await;
            result.is_present() && result.get() == Ok(expected)
        })
    }

    fn prop_reduce_with_identity_matches_fold(input: Vec<i32>, identity: i32) -> bool {
        let rt = Runtime::new().unwrap();
        rt.block_on(async {
            let expected = input.iter().fold(identity, |acc, &x| acc.wrapping_add(x));
            let actual = Stream::of(input)
                .reduce_with_identity(identity, |acc, x| acc.wrapping_add(x))
                .await;
            actual == expected
        })
    }

    fn prop_peek_never_reorders(input: Vec<i32>) -> bool {
        let rt = Runtime::new().unwrap();
        rt.block_on(async {
            let actual = Stream::of(input.clone()).peek(|_| {}).to_slice().await;
            actual == input
        })
    }
}
