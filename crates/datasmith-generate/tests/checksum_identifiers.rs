use rand::SeedableRng;
use rand_chacha::ChaCha8Rng;

use datasmith_generate::generators::semantic::{
    credit_card, is_luhn_valid, is_valid_israeli_id, israeli_id,
};
use datasmith_generate::UniquenessRegistry;

#[test]
fn every_generated_id_revalidates_its_check_digit() {
    let mut registry = UniquenessRegistry::new();
    let mut rng = ChaCha8Rng::seed_from_u64(7);

    for _ in 0..1000 {
        let value = israeli_id(&mut registry, &mut rng);
        let id = value.as_str().expect("text value");
        assert_eq!(id.len(), 9);
        assert!(is_valid_israeli_id(id), "invalid checksum for {id}");
    }
}

#[test]
fn checksum_matches_known_vector() {
    // digits 1..8 weighted 1,2,1,2,... fold to 38, check digit 2
    assert!(is_valid_israeli_id("123456782"));
    assert!(!is_valid_israeli_id("123456789"));
    assert!(!is_valid_israeli_id("12345678"));
    assert!(!is_valid_israeli_id("12345678a"));
}

#[test]
fn card_numbers_are_sixteen_digit_luhn_valid() {
    let mut registry = UniquenessRegistry::new();
    let mut rng = ChaCha8Rng::seed_from_u64(11);

    for _ in 0..500 {
        let value = credit_card(&mut registry, &mut rng);
        let number = value.as_str().expect("text value");
        assert_eq!(number.len(), 16);
        assert!(is_luhn_valid(number), "luhn failure for {number}");
    }
}
