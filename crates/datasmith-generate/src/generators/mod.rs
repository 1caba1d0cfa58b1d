pub mod primitives;
pub mod semantic;

use datasmith_core::GeneratorKind;
use rand::RngCore;

use crate::binding::BoundField;
use crate::registry::UniquenessRegistry;
use crate::values::GeneratedValue;

/// Produce one value for a bound field.
///
/// Never fails for constraint input that passed translation-time
/// validation; uniqueness-tracked kinds resolve exhaustion internally via
/// their deterministic fallbacks.
pub fn generate_value(
    field: &BoundField,
    registry: &mut UniquenessRegistry,
    rng: &mut dyn RngCore,
) -> GeneratedValue {
    match field.kind {
        GeneratorKind::Text => primitives::text(&field.constraints, rng),
        GeneratorKind::Integer => primitives::integer(&field.constraints, rng),
        GeneratorKind::Decimal => primitives::decimal(&field.constraints, field.decimals, rng),
        GeneratorKind::Date => primitives::date(field.days_back, rng),
        GeneratorKind::DateTime => primitives::datetime(field.days_back, rng),
        GeneratorKind::Boolean => primitives::boolean(rng),
        GeneratorKind::Choice => primitives::choice(&field.constraints, rng),
        GeneratorKind::Email => semantic::email(registry, rng),
        GeneratorKind::Phone => semantic::phone(registry, rng),
        GeneratorKind::NationalId => semantic::israeli_id(registry, rng),
        GeneratorKind::CreditCard => semantic::credit_card(registry, rng),
        GeneratorKind::AccountNumber => semantic::account_number(registry, rng),
        GeneratorKind::FirstName => semantic::first_name(&field.locale, rng),
        GeneratorKind::LastName => semantic::last_name(&field.locale, rng),
        GeneratorKind::Address => semantic::address(&field.locale, rng),
        GeneratorKind::City => semantic::city(&field.locale, rng),
    }
}
