//! Property-based tests for chain evaluation
//!
//! **Feature: chain-evaluation**

use almanac_solver::{Almanac, Chain, OverlapPolicy, SeedMode, expand_seeds};
use proptest::prelude::*;

const CATEGORIES: [&str; 8] = [
    "seed",
    "soil",
    "fertilizer",
    "water",
    "light",
    "temperature",
    "humidity",
    "location",
];

/// Build almanac text with `links` maps chained from `seed`, each holding the given rows
fn almanac_text(seeds: &[u64], links: usize, rows: &[(u64, u64, u64)]) -> String {
    let mut text = format!(
        "seeds: {}\n",
        seeds.iter().map(u64::to_string).collect::<Vec<_>>().join(" ")
    );
    for pair in CATEGORIES[..=links].windows(2) {
        text.push_str(&format!("\n{}-to-{} map:\n", pair[0], pair[1]));
        for (dest, source, length) in rows {
            text.push_str(&format!("{} {} {}\n", dest, source, length));
        }
    }
    text
}

fn rows() -> impl Strategy<Value = Vec<(u64, u64, u64)>> {
    prop::collection::vec((0u64..200, 0u64..200, 1u64..50), 0..5)
}

proptest! {
    #![proptest_config(ProptestConfig::with_cases(50))]

    /// **Feature: chain-evaluation, Property 1: Chain termination**
    /// *For any* chain with `k` links, a walk visits exactly `k + 1` categories
    /// and ends at the last one.
    #[test]
    fn prop_walk_visits_every_link_once(links in 0usize..CATEGORIES.len(), seed in 0u64..300, rows in rows()) {
        let almanac = Almanac::parse(&almanac_text(&[seed], links, &rows)).unwrap();
        prop_assert_eq!(almanac.link_count(), links);

        let chain = Chain::resolve(&almanac, OverlapPolicy::LastMatch).unwrap();
        let record = chain.walk(seed);

        prop_assert_eq!(record.len(), links + 1);
        prop_assert_eq!(chain.terminal(), CATEGORIES[links]);
        let visited: Vec<&str> = record.iter().map(|(category, _)| category).collect();
        prop_assert_eq!(visited, CATEGORIES[..=links].to_vec());
    }

    /// **Feature: chain-evaluation, Property 2: Minimality**
    /// *For any* seeds and tables, the best terminal value is no greater than the
    /// terminal value of any evaluated seed, and it belongs to one of them.
    #[test]
    fn prop_best_is_minimal(
        seeds in prop::collection::vec(0u64..300, 1..12),
        links in 1usize..CATEGORIES.len(),
        rows in rows(),
    ) {
        let almanac = Almanac::parse(&almanac_text(&seeds, links, &rows)).unwrap();
        let chain = Chain::resolve(&almanac, OverlapPolicy::LastMatch).unwrap();
        let best = chain
            .evaluate(&expand_seeds(almanac.seeds(), SeedMode::Discrete))
            .unwrap();

        for &seed in &seeds {
            prop_assert!(best.lowest() <= chain.walk(seed).terminal().1);
        }
        prop_assert!(seeds.contains(&best.record.seed()));
        prop_assert_eq!(best.evaluated, seeds.len() as u64);
        prop_assert_eq!(chain.walk(best.record.seed()), best.record);
    }

    /// **Feature: chain-evaluation, Property 3: Chunk size does not change the answer**
    /// *For any* seed ranges, range mode gives the same lowest value whatever the chunk size.
    #[test]
    fn prop_chunk_size_is_transparent(
        pairs in prop::collection::vec((0u64..300, 1u64..40), 1..4),
        chunk_a in 1u64..10,
        chunk_b in 10u64..100,
        rows in rows(),
    ) {
        let seeds: Vec<u64> = pairs.iter().flat_map(|&(s, l)| [s, l]).collect();
        let almanac = Almanac::parse(&almanac_text(&seeds, 3, &rows)).unwrap();
        let chain = Chain::resolve(&almanac, OverlapPolicy::LastMatch).unwrap();

        let a = chain.evaluate(&expand_seeds(almanac.seeds(), SeedMode::chunked(chunk_a).unwrap()));
        let b = chain.evaluate(&expand_seeds(almanac.seeds(), SeedMode::chunked(chunk_b).unwrap()));
        prop_assert_eq!(a, b);
    }
}
