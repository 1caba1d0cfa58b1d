use rand::{Rng, RngCore};

use crate::registry::{UniqueCategory, UniquenessRegistry, MAX_UNIQUE_ATTEMPTS};
use crate::values::GeneratedValue;

const PHONE_PREFIXES: &[&str] = &["050", "052", "053", "054", "055", "057", "058"];
const EMAIL_DOMAINS: &[&str] = &["example.com", "example.org", "example.net"];

const FIRST_NAMES_HE: &[&str] = &[
    "יוסי", "דנה", "אבי", "רונית", "משה", "תמר", "דוד", "נועה", "איתן", "שירה",
];
const LAST_NAMES_HE: &[&str] = &[
    "כהן", "לוי", "מזרחי", "פרץ", "ביטון", "אברהם", "פרידמן", "אזולאי", "שפירא", "גבאי",
];
const CITIES_HE: &[&str] = &[
    "תל אביב", "ירושלים", "חיפה", "באר שבע", "ראשון לציון", "נתניה", "חולון", "רמת גן",
];
const STREETS_HE: &[&str] = &[
    "הרצל", "ויצמן", "רוטשילד", "ביאליק", "ז'בוטינסקי", "בן גוריון", "אלנבי", "דיזנגוף",
];

const FIRST_NAMES_EN: &[&str] = &[
    "Noa", "Daniel", "Maya", "Ethan", "Tamar", "David", "Shira", "Yonatan", "Ronit", "Avi",
];
const LAST_NAMES_EN: &[&str] = &[
    "Cohen", "Levi", "Mizrahi", "Peretz", "Friedman", "Azulay", "Shapira", "Gabay",
];
const CITIES_EN: &[&str] = &[
    "Tel Aviv", "Jerusalem", "Haifa", "Beer Sheva", "Rishon LeZion", "Netanya", "Holon",
];
const STREETS_EN: &[&str] = &[
    "Herzl", "Weizmann", "Rothschild", "Bialik", "Jabotinsky", "Ben Gurion", "Allenby",
];

fn hebrew(locale: &str) -> bool {
    locale.starts_with("he")
}

fn pick<'a>(pool: &[&'a str], rng: &mut dyn RngCore) -> &'a str {
    pool[rng.random_range(0..pool.len())]
}

/// Check digit of an Israeli ID: alternating 1/2 weights over the first
/// eight digits, products >= 10 folded by subtracting 9.
pub fn id_check_digit(digits: &[u8]) -> u8 {
    let mut weighted_sum = 0_u32;
    for (position, digit) in digits.iter().enumerate() {
        let product = u32::from(*digit) * if position % 2 == 0 { 1 } else { 2 };
        weighted_sum += if product < 10 { product } else { product - 9 };
    }
    ((10 - (weighted_sum % 10)) % 10) as u8
}

/// Whether a 9-digit string passes the Israeli ID checksum.
pub fn is_valid_israeli_id(value: &str) -> bool {
    if value.len() != 9 || !value.bytes().all(|byte| byte.is_ascii_digit()) {
        return false;
    }
    let digits: Vec<u8> = value.bytes().map(|byte| byte - b'0').collect();
    id_check_digit(&digits[..8]) == digits[8]
}

/// Luhn check digit over the given digits.
pub fn luhn_check_digit(digits: &[u8]) -> u8 {
    let mut sum = 0_u32;
    // Rightmost payload digit gets doubled first.
    for (index, digit) in digits.iter().rev().enumerate() {
        let mut product = u32::from(*digit);
        if index % 2 == 0 {
            product *= 2;
            if product > 9 {
                product -= 9;
            }
        }
        sum += product;
    }
    ((10 - (sum % 10)) % 10) as u8
}

/// Whether a digit string passes the Luhn check.
pub fn is_luhn_valid(value: &str) -> bool {
    if value.is_empty() || !value.bytes().all(|byte| byte.is_ascii_digit()) {
        return false;
    }
    let digits: Vec<u8> = value.bytes().map(|byte| byte - b'0').collect();
    luhn_check_digit(&digits[..digits.len() - 1]) == digits[digits.len() - 1]
}

/// Checksum-valid, run-unique Israeli ID number.
pub fn israeli_id(registry: &mut UniquenessRegistry, rng: &mut dyn RngCore) -> GeneratedValue {
    for _ in 0..MAX_UNIQUE_ATTEMPTS {
        let mut digits = [0_u8; 9];
        for digit in digits.iter_mut().take(8) {
            *digit = rng.random_range(0..=9);
        }
        digits[8] = id_check_digit(&digits[..8]);
        let id: String = digits.iter().map(|digit| char::from(b'0' + *digit)).collect();
        if registry.try_claim(UniqueCategory::NationalId, &id) {
            return GeneratedValue::Text(id);
        }
    }
    fallback(registry, UniqueCategory::NationalId, |n| format!("1{n:08}"))
}

/// Run-unique Israeli mobile number, `05X-NNNNNNN`.
pub fn phone(registry: &mut UniquenessRegistry, rng: &mut dyn RngCore) -> GeneratedValue {
    for _ in 0..MAX_UNIQUE_ATTEMPTS {
        let prefix = pick(PHONE_PREFIXES, rng);
        let number = format!("{prefix}-{:07}", rng.random_range(1_000_000..=9_999_999));
        if registry.try_claim(UniqueCategory::Phone, &number) {
            return GeneratedValue::Text(number);
        }
    }
    fallback(registry, UniqueCategory::Phone, |n| format!("059-{n:07}"))
}

/// Run-unique email address.
pub fn email(registry: &mut UniquenessRegistry, rng: &mut dyn RngCore) -> GeneratedValue {
    for _ in 0..MAX_UNIQUE_ATTEMPTS {
        let user = pick(FIRST_NAMES_EN, rng).to_lowercase();
        let domain = pick(EMAIL_DOMAINS, rng);
        let address = format!("{user}{}@{domain}", rng.random_range(1..=9999));
        if registry.try_claim(UniqueCategory::Email, &address) {
            return GeneratedValue::Text(address);
        }
    }
    fallback(registry, UniqueCategory::Email, |n| {
        format!("unique_{n}@example.com")
    })
}

/// Run-unique account number, six to eight digits.
pub fn account_number(registry: &mut UniquenessRegistry, rng: &mut dyn RngCore) -> GeneratedValue {
    for _ in 0..MAX_UNIQUE_ATTEMPTS {
        let number = rng.random_range(100_000..=99_999_999_u64).to_string();
        if registry.try_claim(UniqueCategory::AccountNumber, &number) {
            return GeneratedValue::Text(number);
        }
    }
    fallback(registry, UniqueCategory::AccountNumber, |n| format!("A{n:07}"))
}

/// Run-unique, Luhn-valid 16-digit card number.
pub fn credit_card(registry: &mut UniquenessRegistry, rng: &mut dyn RngCore) -> GeneratedValue {
    for _ in 0..MAX_UNIQUE_ATTEMPTS {
        let mut digits = [0_u8; 16];
        digits[0] = if rng.random_bool(0.5) { 4 } else { 5 };
        for digit in digits.iter_mut().take(15).skip(1) {
            *digit = rng.random_range(0..=9);
        }
        digits[15] = luhn_check_digit(&digits[..15]);
        let number: String = digits.iter().map(|digit| char::from(b'0' + *digit)).collect();
        if registry.try_claim(UniqueCategory::CreditCard, &number) {
            return GeneratedValue::Text(number);
        }
    }
    fallback(registry, UniqueCategory::CreditCard, |n| format!("4{n:015}"))
}

pub fn first_name(locale: &str, rng: &mut dyn RngCore) -> GeneratedValue {
    let pool = if hebrew(locale) { FIRST_NAMES_HE } else { FIRST_NAMES_EN };
    GeneratedValue::Text(pick(pool, rng).to_string())
}

pub fn last_name(locale: &str, rng: &mut dyn RngCore) -> GeneratedValue {
    let pool = if hebrew(locale) { LAST_NAMES_HE } else { LAST_NAMES_EN };
    GeneratedValue::Text(pick(pool, rng).to_string())
}

pub fn city(locale: &str, rng: &mut dyn RngCore) -> GeneratedValue {
    let pool = if hebrew(locale) { CITIES_HE } else { CITIES_EN };
    GeneratedValue::Text(pick(pool, rng).to_string())
}

/// Street, house number and city on one line.
pub fn address(locale: &str, rng: &mut dyn RngCore) -> GeneratedValue {
    let (streets, cities) = if hebrew(locale) {
        (STREETS_HE, CITIES_HE)
    } else {
        (STREETS_EN, CITIES_EN)
    };
    let street = pick(streets, rng);
    let number = rng.random_range(1..=120);
    let city = pick(cities, rng);
    GeneratedValue::Text(format!("{street} {number}, {city}"))
}

/// Deterministic, registered fallback once the retry bound is exhausted.
///
/// Counts upward from the registry size until a free value is found, so the
/// result is collision-free and generation always terminates.
fn fallback(
    registry: &mut UniquenessRegistry,
    category: UniqueCategory,
    render: impl Fn(usize) -> String,
) -> GeneratedValue {
    let mut n = registry.issued_count(category);
    loop {
        let candidate = render(n);
        if registry.try_claim(category, &candidate) {
            return GeneratedValue::Text(candidate);
        }
        n += 1;
    }
}
