use std::collections::{HashMap, HashSet};

/// Retry bound for uniqueness-tracked generators before the deterministic
/// fallback takes over.
pub const MAX_UNIQUE_ATTEMPTS: usize = 100;

/// Semantic categories whose values must not repeat within one run.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum UniqueCategory {
    NationalId,
    Phone,
    Email,
    AccountNumber,
    CreditCard,
}

/// Run-scoped record of already-issued values per tracked category.
///
/// Owned by a single generation run and passed into it explicitly; never a
/// process-wide singleton, so repeated or concurrent runs cannot leak state
/// into each other. It does not consult previously persisted data.
#[derive(Debug, Default)]
pub struct UniquenessRegistry {
    issued: HashMap<UniqueCategory, HashSet<String>>,
}

impl UniquenessRegistry {
    pub fn new() -> Self {
        Self::default()
    }

    /// Claim a candidate value; returns false when it was already issued.
    pub fn try_claim(&mut self, category: UniqueCategory, value: &str) -> bool {
        self.issued
            .entry(category)
            .or_default()
            .insert(value.to_string())
    }

    pub fn contains(&self, category: UniqueCategory, value: &str) -> bool {
        self.issued
            .get(&category)
            .is_some_and(|values| values.contains(value))
    }

    /// Number of values issued so far for a category; seeds the
    /// deterministic fallback values.
    pub fn issued_count(&self, category: UniqueCategory) -> usize {
        self.issued.get(&category).map_or(0, HashSet::len)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn claims_are_idempotent_per_category() {
        let mut registry = UniquenessRegistry::new();
        assert!(registry.try_claim(UniqueCategory::Email, "a@example.com"));
        assert!(!registry.try_claim(UniqueCategory::Email, "a@example.com"));
        // Same value under another category is a distinct claim.
        assert!(registry.try_claim(UniqueCategory::Phone, "a@example.com"));
        assert_eq!(registry.issued_count(UniqueCategory::Email), 1);
    }
}
