//! Integration tests for sampling scenarios.
//!
//! Exercises the public API end to end: the sampler over both entropy
//! families, the bias policies, and the generators built on top of them.

use approx::assert_abs_diff_eq;
use rundomizer_core::dictionary::Dictionary;
use rundomizer_core::generators::{
    CoinFlip, DiceRoll, Generator, Lottery, NameGenerator, NicknameGenerator, NumberGenerator,
    QuoteGenerator, ShareText, SingleNumberGenerator, WordGenerator,
};
use rundomizer_core::sampler::{BiasPolicy, EntropySource, Sampler, SeededEntropy};
use rundomizer_core::stats::{uniformity_check, UniformityReport};
use rundomizer_core::types::{SampleError, SampleRequest};

fn samplers() -> Vec<Sampler<SeededEntropy>> {
    vec![
        Sampler::new(SeededEntropy::from_seed(1001)).with_policy(BiasPolicy::Modulo),
        Sampler::new(SeededEntropy::from_seed(1002)).with_policy(BiasPolicy::Rejection),
    ]
}

/// Uniformity over a range holds for 100,000 trials under both policies.
#[test]
fn test_range_uniformity_both_policies() {
    for mut sampler in samplers() {
        for (min, max) in [(1, 6), (0, 36), (1, 1000)] {
            let report = uniformity_check(&mut sampler, min, max, 100_000).unwrap();
            assert!(report.covers_domain(), "[{}, {}] not covered", min, max);
            assert!(
                report.passes(),
                "{:?} [{}, {}]: chi-square {} > {}",
                sampler.policy(),
                min,
                max,
                report.statistic,
                report.critical
            );
        }
    }
}

#[test]
fn test_os_sampler_uniformity() {
    let mut sampler = Sampler::from_os();
    let report = uniformity_check(&mut sampler, 1, 10, 50_000).unwrap();
    assert!(report.covers_domain());
    assert!(report.passes());
}

#[test]
fn test_pick_three_names() {
    let names = ["Иван", "Пётр", "Анна"];
    for mut sampler in samplers() {
        let request = SampleRequest::list(&names).with_count(3000);
        let result = sampler.sample_many(&request).unwrap();
        assert_eq!(result.len(), 3000);

        let counts: Vec<u64> = names
            .iter()
            .map(|name| result.items().iter().filter(|picked| **picked == name).count() as u64)
            .collect();
        for &count in &counts {
            assert!((850..=1150).contains(&count), "counts: {:?}", counts);
        }
        assert!(UniformityReport::from_counts(&counts).passes());
    }
}

#[test]
fn test_two_dice_scenario() {
    for mut sampler in samplers() {
        let request = SampleRequest::range(1, 6).with_count(2).with_limit(6);
        let total: i64 = (0..10_000)
            .map(|_| sampler.sample_many(&request).unwrap().ints().iter().sum::<i64>())
            .sum();
        assert_abs_diff_eq!(total as f64 / 10_000.0, 7.0, epsilon = 0.1);
    }
}

#[test]
fn test_boundary_rejections() {
    let mut sampler = Sampler::new(SeededEntropy::from_seed(0));
    let empty: Vec<String> = Vec::new();

    assert!(sampler.sample_int(5, 5).unwrap_err().is_invalid_domain());
    assert!(sampler.sample_int(10, 1).unwrap_err().is_invalid_domain());
    assert_eq!(sampler.sample_pick(&empty), Err(SampleError::EmptyList));
}

/// Picks from a seeded sampler are reproducible from the seed alone.
#[test]
fn test_seeded_runs_reproducible() {
    let run = |seed| {
        let mut sampler = Sampler::new(SeededEntropy::from_seed(seed));
        let request = SampleRequest::range(1, 1_000_000).with_count(100);
        sampler.sample_many(&request).unwrap().ints()
    };
    assert_eq!(run(5), run(5));
    assert_ne!(run(5), run(6));
}

fn assert_generates<G: Generator, E: EntropySource>(generator: &G, sampler: &mut Sampler<E>) {
    let output = generator.generate(sampler).unwrap();
    assert!(!output.share_text().is_empty());
}

#[test]
fn test_every_generator_produces_output() {
    let dictionary = Dictionary::builtin();
    let lottery = Lottery::from_participants(["Иван", "Пётр", "Анна"]).unwrap();
    let mut sampler = Sampler::from_os().with_policy(BiasPolicy::Rejection);

    assert_generates(&NumberGenerator::new(1, 100, 10), &mut sampler);
    assert_generates(&SingleNumberGenerator, &mut sampler);
    assert_generates(&WordGenerator::new(&dictionary, 3), &mut sampler);
    assert_generates(&NameGenerator::new(&dictionary, None), &mut sampler);
    assert_generates(&NicknameGenerator::new(&dictionary, 2), &mut sampler);
    assert_generates(&QuoteGenerator::new(&dictionary), &mut sampler);
    assert_generates(&CoinFlip, &mut sampler);
    assert_generates(&DiceRoll::new(2), &mut sampler);
    assert_generates(&lottery, &mut sampler);
}
