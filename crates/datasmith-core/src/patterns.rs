use crate::types::GeneratorKind;

/// Field-name fragments mapped to semantic generator kinds, in both
/// supported languages. Exact matches win over substring matches.
pub const NAME_PATTERNS: &[(&str, GeneratorKind)] = &[
    // Hebrew
    ("תעודת_זהות", GeneratorKind::NationalId),
    ("מספר_כרטיס", GeneratorKind::CreditCard),
    ("מספר_חשבון", GeneratorKind::AccountNumber),
    ("טלפון", GeneratorKind::Phone),
    ("דואר_אלקטרוני", GeneratorKind::Email),
    ("שם_פרטי", GeneratorKind::FirstName),
    ("שם_משפחה", GeneratorKind::LastName),
    ("כתובת", GeneratorKind::Address),
    ("עיר", GeneratorKind::City),
    // English
    ("israeli_id", GeneratorKind::NationalId),
    ("id_number", GeneratorKind::NationalId),
    ("credit_card_number", GeneratorKind::CreditCard),
    ("card_number", GeneratorKind::CreditCard),
    ("account_number", GeneratorKind::AccountNumber),
    ("phone", GeneratorKind::Phone),
    ("email", GeneratorKind::Email),
    ("first_name", GeneratorKind::FirstName),
    ("last_name", GeneratorKind::LastName),
    ("address", GeneratorKind::Address),
    ("city", GeneratorKind::City),
];

/// Resolve a field name against the pattern registry.
///
/// Exact matches are tried first, then case-insensitive substring matches,
/// preserving registration order so more specific fragments win.
pub fn match_field_name(name: &str) -> Option<GeneratorKind> {
    for (pattern, kind) in NAME_PATTERNS {
        if *pattern == name {
            return Some(*kind);
        }
    }

    let lower = name.to_lowercase();
    for (pattern, kind) in NAME_PATTERNS {
        if lower.contains(pattern) {
            return Some(*kind);
        }
    }

    None
}
