use std::collections::BTreeSet;
use std::error::Error;

use num_bigint::BigInt;
use proptest::collection::vec;
use proptest::prelude::*;
use sss::{ConsistencyVoter, Share, ShareDocument, ShareSet, TextReport, VoterConfig};
use sss_math::Division;
use sss_traits::ReportSink;
use sss_util::binomial;

fn eval(coeffs: &[i64], x: u64) -> BigInt {
    coeffs
        .iter()
        .rev()
        .fold(BigInt::from(0), |acc, c| acc * x + *c)
}

#[test]
fn one_corrupted_share_out_of_five() -> Result<(), Box<dyn Error>> {
    // f(x) = 3 + 2x + x^2; the genuine share at 5 is 38.
    let shares = vec![
        Share::new(1, 6),
        Share::new(2, 11),
        Share::new(3, 18),
        Share::new(4, 27),
        Share::new(5, 999),
    ];
    let set = ShareSet::new(shares, 5, 3)?;
    let outcome = ConsistencyVoter::new(&set, VoterConfig::default()).reconstruct()?;

    assert_eq!(outcome.secret, BigInt::from(3));
    assert_eq!(outcome.frequency, 4);
    assert_eq!(outcome.combinations, 10);
    assert_eq!(outcome.valid_ids, BTreeSet::from([1, 2, 3, 4]));
    assert_eq!(outcome.corrupted_ids, BTreeSet::from([5]));
    Ok(())
}

#[test]
fn duplicate_ids_have_no_consistent_secret() -> Result<(), Box<dyn Error>> {
    let set = ShareSet::new(vec![Share::new(1, 6), Share::new(1, 11)], 2, 2)?;
    let result = ConsistencyVoter::new(&set, VoterConfig::default()).reconstruct();
    assert_eq!(result, Err(sss::Error::no_consistent_secret(1, 1)));
    Ok(())
}

#[test]
fn document_to_report() -> Result<(), Box<dyn Error>> {
    // f(x) = 7 + 5x + 2x^2; the genuine share at 4 is 59.
    let document = ShareDocument::from_json(
        r#"{
            "keys": { "n": 6, "k": 3 },
            "1": { "base": "3", "value": "112" },
            "2": { "base": "2", "value": "11001" },
            "3": { "base": "36", "value": "14" },
            "4": { "base": "10", "value": "60" },
            "5": { "base": "16", "value": "52" },
            "6": { "base": "8", "value": "155" }
        }"#,
    )?;
    let set = ShareSet::from_source(&document)?;
    let outcome = ConsistencyVoter::new(&set, VoterConfig::default()).reconstruct()?;
    assert_eq!(outcome.frequency, 10);
    assert_eq!(outcome.combinations, 20);
    // 22/3 and 16/3 are rejected under exact division.
    assert_eq!(outcome.skipped, 2);

    let corrupted: Vec<u64> = outcome.corrupted_ids.iter().copied().collect();
    let mut report = TextReport::new(Vec::new());
    report.write_report(&outcome.secret, &corrupted)?;
    assert_eq!(
        String::from_utf8(report.into_inner())?,
        "Reconstructed Secret: 7\nCorrupted Shares: [4]\n"
    );
    Ok(())
}

#[test]
fn consistent_document() -> Result<(), Box<dyn Error>> {
    let document = ShareDocument::from_json(
        r#"{
            "keys": { "n": 4, "k": 3 },
            "1": { "base": "10", "value": "4" },
            "2": { "base": "2", "value": "111" },
            "3": { "base": "10", "value": "12" },
            "6": { "base": "4", "value": "213" }
        }"#,
    )?;
    let set = ShareSet::from_source(&document)?;
    let outcome = ConsistencyVoter::new(&set, VoterConfig::default()).reconstruct()?;
    assert_eq!(outcome.secret, BigInt::from(3));
    assert_eq!(outcome.frequency, 4);
    assert!(outcome.corrupted_ids.is_empty());
    Ok(())
}

#[test]
fn report_file() -> Result<(), Box<dyn Error>> {
    let path = std::env::temp_dir().join(format!("sss-report-{}.txt", std::process::id()));
    let mut report = TextReport::create(&path)?;
    report.write_report(&BigInt::from(3), &[5])?;
    drop(report);
    assert_eq!(
        std::fs::read_to_string(&path)?,
        "Reconstructed Secret: 3\nCorrupted Shares: [5]\n"
    );
    std::fs::remove_file(&path)?;
    Ok(())
}

proptest! {
    #![proptest_config(ProptestConfig::with_cases(64))]

    #[test]
    fn honest_majority_wins(
        coeffs in vec(-10_000i64..10_000, 1..4),
        extra in 1usize..4,
        corrupted in 0usize..3,
        offsets in vec(1i64..1_000, 3),
    ) {
        let k = coeffs.len();
        let n = k + extra;
        prop_assume!(corrupted < n);
        let honest = n - corrupted;
        prop_assume!(2 * binomial(honest, k).unwrap() > binomial(n, k).unwrap());

        let shares: Vec<Share> = (1..=n as u64)
            .map(|id| {
                let mut value = eval(&coeffs, id);
                if id as usize > honest {
                    value += offsets[id as usize - honest - 1];
                }
                Share { id, value }
            })
            .collect();
        let set = ShareSet::new(shares, n, k).unwrap();

        for config in [VoterConfig::default(), VoterConfig::default().with_parallel(true)] {
            let outcome = ConsistencyVoter::new(&set, config).reconstruct().unwrap();
            prop_assert_eq!(&outcome.secret, &BigInt::from(coeffs[0]));

            let honest_ids: BTreeSet<u64> = (1..=honest as u64).collect();
            prop_assert!(honest_ids.is_subset(&outcome.valid_ids));
            prop_assert!(outcome.corrupted_ids.is_disjoint(&outcome.valid_ids));
            prop_assert_eq!(
                outcome.corrupted_ids.union(&outcome.valid_ids).count(),
                n
            );
        }
    }

    #[test]
    fn parallel_matches_sequential(
        values in vec(-50i64..50, 2..8),
        k in 1usize..4,
        truncate in any::<bool>(),
    ) {
        let n = values.len();
        let shares = values
            .iter()
            .zip(1u64..)
            .map(|(&v, id)| Share::new(id, v))
            .collect();
        let set = ShareSet::new(shares, n, k).unwrap();
        let division = if truncate { Division::Truncate } else { Division::Exact };
        let config = VoterConfig::default().with_division(division);

        let sequential = ConsistencyVoter::new(&set, config).reconstruct();
        let parallel = ConsistencyVoter::new(&set, config.with_parallel(true)).reconstruct();
        prop_assert_eq!(sequential, parallel);
    }
}
