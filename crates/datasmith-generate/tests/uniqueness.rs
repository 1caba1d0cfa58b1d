use std::collections::HashSet;

use rand::SeedableRng;
use rand_chacha::ChaCha8Rng;

use datasmith_generate::generators::semantic::{account_number, email, israeli_id, phone};
use datasmith_generate::{GeneratedValue, UniqueCategory, UniquenessRegistry};

fn collect_unique(
    generate: impl Fn(&mut UniquenessRegistry, &mut ChaCha8Rng) -> GeneratedValue,
    count: usize,
    seed: u64,
) -> Vec<String> {
    let mut registry = UniquenessRegistry::new();
    let mut rng = ChaCha8Rng::seed_from_u64(seed);
    (0..count)
        .map(|_| {
            generate(&mut registry, &mut rng)
                .as_str()
                .expect("text value")
                .to_string()
        })
        .collect()
}

#[test]
fn tracked_generators_never_repeat_within_a_run() {
    // Well past the retry bound times a reasonable multiplier.
    for (name, values) in [
        ("israeli_id", collect_unique(|r, g| israeli_id(r, g), 2000, 1)),
        ("phone", collect_unique(|r, g| phone(r, g), 2000, 2)),
        ("email", collect_unique(|r, g| email(r, g), 2000, 3)),
        (
            "account_number",
            collect_unique(|r, g| account_number(r, g), 2000, 4),
        ),
    ] {
        let distinct: HashSet<&String> = values.iter().collect();
        assert_eq!(distinct.len(), values.len(), "duplicates from {name}");
    }
}

#[test]
fn registries_do_not_leak_between_runs() {
    let first = collect_unique(|r, g| email(r, g), 50, 9);
    let second = collect_unique(|r, g| email(r, g), 50, 9);
    // Identical seeds and fresh registries reproduce the same sequence,
    // which is only possible when no state crosses runs.
    assert_eq!(first, second);
}

#[test]
fn every_issued_value_is_registered() {
    let mut registry = UniquenessRegistry::new();
    let mut rng = ChaCha8Rng::seed_from_u64(5);

    for _ in 0..200 {
        let value = phone(&mut registry, &mut rng);
        let number = value.as_str().expect("text value");
        assert!(registry.contains(UniqueCategory::Phone, number));
    }
    assert_eq!(registry.issued_count(UniqueCategory::Phone), 200);
}
