use datasmith_core::{match_field_name, FieldDef, GeneratorKind};

/// Resolve the generator kind for a field.
///
/// Resolution order, first match wins:
/// 1. explicit override in the field's generation hints
/// 2. bilingual name-pattern registry (exact, then substring)
/// 3. the declared base type (text falls through to the generic
///    bounded-length text generator)
///
/// Pure function; safe to call without any registry or run state.
pub fn resolve_kind(field_name: &str, field: &FieldDef) -> GeneratorKind {
    if let Some(kind) = field.generation.as_ref().and_then(|hints| hints.generator) {
        return kind;
    }

    if let Some(kind) = match_field_name(field_name) {
        return kind;
    }

    GeneratorKind::from(field.field_type)
}

#[cfg(test)]
mod tests {
    use super::*;
    use datasmith_core::{FieldDef, FieldType, GenerationHints};

    #[test]
    fn explicit_hint_wins_over_name_and_type() {
        let mut field = FieldDef::new(FieldType::Text);
        field.generation = Some(GenerationHints {
            generator: Some(GeneratorKind::AccountNumber),
            ..GenerationHints::default()
        });
        // The name would resolve to Email, the type to Text.
        assert_eq!(
            resolve_kind("email", &field),
            GeneratorKind::AccountNumber
        );
    }

    #[test]
    fn name_patterns_win_over_declared_type() {
        let field = FieldDef::new(FieldType::Text);
        assert_eq!(resolve_kind("טלפון", &field), GeneratorKind::Phone);
        assert_eq!(
            resolve_kind("billing_address", &field),
            GeneratorKind::Address
        );
    }

    #[test]
    fn base_type_is_the_final_fallback() {
        assert_eq!(
            resolve_kind("quantity", &FieldDef::new(FieldType::Integer)),
            GeneratorKind::Integer
        );
        assert_eq!(
            resolve_kind("notes", &FieldDef::new(FieldType::Text)),
            GeneratorKind::Text
        );
    }
}
