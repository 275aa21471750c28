//! Properties of lockstep iteration over arbitrary sources.

use itertools::{izip, Itertools};
use lockstep::prelude::*;
use lockstep::{plain, wrap, Error, State};
use proptest::prelude::*;

fn arb_columns() -> impl Strategy<Value = Vec<Vec<i32>>> {
    prop::collection::vec(prop::collection::vec(any::<i32>(), 0..12), 0..6)
}

proptest! {
    #![proptest_config(ProptestConfig {
        cases: 128,
        .. ProptestConfig::default()
    })]

    // Property: zip yields one row per position of the shortest column, in order.
    #[test]
    fn zip_matches_transpose(columns in arb_columns()) {
        let shortest = columns.iter().map(Vec::len).min().unwrap_or(0);
        let expected: Vec<Vec<i32>> = (0..shortest)
            .map(|i| columns.iter().map(|c| c[i]).collect())
            .collect();

        let width = columns.len();
        let z = columns.into_iter().map(plain).collect_vec().zip().unwrap();
        let items = z.collect_vec();
        if width == 0 {
            prop_assert_eq!(items.len(), 1);
            prop_assert!(matches!(items[0], Err(Error::EmptyZip)));
        } else {
            let rows: Vec<Vec<i32>> = items
                .into_iter()
                .map(|row| row.unwrap().into_vec())
                .collect();
            prop_assert_eq!(rows, expected);
        }
    }

    // Property: an array zip agrees with `izip!`.
    #[test]
    fn array_zip_matches_izip(
        a in prop::collection::vec(any::<u8>(), 0..16),
        b in prop::collection::vec(any::<u8>(), 0..16),
        c in prop::collection::vec(any::<u8>(), 0..16),
    ) {
        let expected: Vec<[u8; 3]> = izip!(&a, &b, &c).map(|(a, b, c)| [*a, *b, *c]).collect();
        let z = [plain(a), plain(b), plain(c)].zip().unwrap();
        let rows: Vec<[u8; 3]> = z.map(Result::unwrap).collect();
        prop_assert_eq!(rows, expected);
    }

    // Property: combine applies its function to exactly the rows zip would produce.
    #[test]
    fn combine_is_zip_then_map(columns in arb_columns()) {
        let sums = |row: Vec<i32>| row.into_iter().map(i64::from).sum::<i64>();
        if columns.is_empty() {
            let c = Vec::<lockstep::Plain<std::vec::IntoIter<i32>>>::new().combine(sums);
            let is_arity_zero = matches!(c, Err(Error::Arity { found: 0 }));
            prop_assert!(is_arity_zero);
            return Ok(());
        }

        let zipped: Vec<i64> = columns
            .clone()
            .into_iter()
            .map(plain)
            .collect_vec()
            .zip()
            .unwrap()
            .map(|row| sums(row.unwrap().into_vec()))
            .collect();
        let combined: Vec<i64> = columns
            .into_iter()
            .map(plain)
            .collect_vec()
            .combine(sums)
            .unwrap()
            .map(Result::unwrap)
            .collect();
        prop_assert_eq!(combined, zipped);
    }

    // Property: once closed, a combinator only ever reports exhaustion.
    #[test]
    fn closed_stays_closed(columns in arb_columns(), advance in 0usize..4, calls in 1usize..8) {
        // A zero-width zip keeps reporting its width problem, even closed.
        let expected = if columns.is_empty() { Error::EmptyZip } else { Error::Exhausted };
        let mut z = columns.into_iter().map(plain).collect_vec().zip().unwrap();
        for _ in 0..advance {
            let _ = z.resume(None);
        }
        prop_assert_eq!(z.close(), Ok(()));
        prop_assert_eq!(z.state(), State::Closed);
        for _ in 0..calls {
            prop_assert_eq!(z.resume(None), Err(expected.clone()));
            prop_assert!(z.next().is_none());
            prop_assert_eq!(z.close(), Ok(()));
        }
    }

    // Property: an adapter yields exactly the sequence of the iterator it wraps.
    #[test]
    fn adapter_preserves_sequence(items in prop::collection::vec(any::<i64>(), 0..32)) {
        let adapted: Vec<i64> = wrap(plain(items.clone()))
            .unwrap()
            .map(Result::unwrap)
            .collect();
        prop_assert_eq!(adapted, items);
    }

    // Property: a zip rebuilt from its parts yields the same remaining rows as the original.
    #[test]
    fn reconstruction_yields_identical_sequences(columns in arb_columns(), advance in 0usize..4) {
        let mut z = columns.into_iter().map(plain).collect_vec().zip().unwrap();
        for _ in 0..advance {
            if z.resume(None).is_err() {
                break;
            }
        }
        let again = lockstep::vec::Zip::from_parts(z.parts()).unwrap();

        // Only a zero-width zip can yield an error here, and it ends the rows.
        let rest: Vec<Vec<i32>> = z
            .map_while(Result::ok)
            .map(|row| row.into_vec())
            .collect();
        let rebuilt: Vec<Vec<i32>> = again
            .map_while(Result::ok)
            .map(|row| row.into_vec())
            .collect();
        prop_assert_eq!(rebuilt, rest);
    }
}
