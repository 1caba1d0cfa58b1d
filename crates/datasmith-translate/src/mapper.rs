use std::collections::HashMap;

/// Hebrew/English field-name pairs carried between the source schema and the
/// translated Definition.
const NAME_PAIRS: &[(&str, &str)] = &[
    // Personal information
    ("תעודת_זהות", "israeli_id"),
    ("שם_פרטי", "first_name"),
    ("שם_משפחה", "last_name"),
    ("כתובת", "address"),
    ("עיר", "city"),
    ("טלפון", "phone"),
    ("דואר_אלקטרוני", "email"),
    ("תאריך_יצירה", "created_at"),
    ("תאריך_לידה", "birth_date"),
    // Banking fields
    ("מספר_חשבון", "account_number"),
    ("מספר_כרטיס", "card_number"),
    ("סוג_חשבון", "account_type"),
    ("סוג_כרטיס", "card_type"),
    ("יתרה", "balance"),
    ("מסגרת_אשראי", "credit_limit"),
    ("אשראי_זמין", "available_credit"),
    ("תשלומים_אחרונים", "last_payments"),
    ("דירוג_אשראי", "credit_score"),
    ("תוקף", "expiry_date"),
    ("תאריך_פתיחה", "opening_date"),
    ("תאריך_הנפקה", "issue_date"),
    ("סניף_בנק", "bank_branch"),
    // Transaction fields
    ("תאריך_עסקה", "transaction_date"),
    ("סכום", "amount"),
    ("קטגוריה", "category"),
    ("שם_עסק", "merchant_name"),
    ("סוג_עסקה", "transaction_type"),
    ("מספר_תשלומים", "installments"),
    ("תיאור", "description"),
    // Status fields
    ("סטטוס", "status"),
];

const DISPLAY_NAMES: &[(&str, &str)] = &[
    ("israeli_id", "Israeli ID"),
    ("first_name", "First Name"),
    ("last_name", "Last Name"),
    ("address", "Address"),
    ("city", "City"),
    ("phone", "Phone"),
    ("email", "Email"),
    ("account_number", "Account Number"),
    ("card_number", "Card Number"),
    ("balance", "Balance"),
    ("credit_limit", "Credit Limit"),
    ("transaction_date", "Transaction Date"),
    ("amount", "Amount"),
    ("merchant_name", "Merchant"),
    ("status", "Status"),
];

/// Maps between Hebrew and English field names, with display metadata.
#[derive(Debug, Clone)]
pub struct FieldNameMapper {
    hebrew_to_english: HashMap<&'static str, &'static str>,
    english_to_hebrew: HashMap<&'static str, &'static str>,
    display_names: HashMap<&'static str, &'static str>,
}

impl FieldNameMapper {
    pub fn new() -> Self {
        let hebrew_to_english: HashMap<_, _> = NAME_PAIRS.iter().copied().collect();
        let english_to_hebrew = NAME_PAIRS.iter().map(|(he, en)| (*en, *he)).collect();
        let display_names = DISPLAY_NAMES.iter().copied().collect();
        Self {
            hebrew_to_english,
            english_to_hebrew,
            display_names,
        }
    }

    /// English storage name for a source field; pass-through when unmapped.
    pub fn english_name<'a>(&self, name: &'a str) -> &'a str {
        self.hebrew_to_english.get(name).copied().unwrap_or(name)
    }

    /// Hebrew name for an English field; pass-through when unmapped.
    pub fn hebrew_name<'a>(&self, name: &'a str) -> &'a str {
        self.english_to_hebrew.get(name).copied().unwrap_or(name)
    }

    /// Human-readable display name, title-cased when no fixed entry exists.
    pub fn display_name(&self, name: &str) -> String {
        if let Some(display) = self.display_names.get(name) {
            return (*display).to_string();
        }
        let english = self.english_name(name);
        if let Some(display) = self.display_names.get(english) {
            return (*display).to_string();
        }
        title_case(english)
    }
}

impl Default for FieldNameMapper {
    fn default() -> Self {
        Self::new()
    }
}

fn title_case(name: &str) -> String {
    name.split('_')
        .map(|word| {
            let mut chars = word.chars();
            match chars.next() {
                Some(first) => first.to_uppercase().chain(chars).collect::<String>(),
                None => String::new(),
            }
        })
        .collect::<Vec<_>>()
        .join(" ")
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn maps_hebrew_names_to_english() {
        let mapper = FieldNameMapper::new();
        assert_eq!(mapper.english_name("תעודת_זהות"), "israeli_id");
        assert_eq!(mapper.english_name("מספר_חשבון"), "account_number");
        assert_eq!(mapper.english_name("already_english"), "already_english");
    }

    #[test]
    fn maps_english_names_back_to_hebrew() {
        let mapper = FieldNameMapper::new();
        assert_eq!(mapper.hebrew_name("israeli_id"), "תעודת_זהות");
        assert_eq!(mapper.hebrew_name("unmapped"), "unmapped");
    }

    #[test]
    fn display_names_fall_back_to_title_case() {
        let mapper = FieldNameMapper::new();
        assert_eq!(mapper.display_name("israeli_id"), "Israeli ID");
        assert_eq!(mapper.display_name("תעודת_זהות"), "Israeli ID");
        assert_eq!(mapper.display_name("opening_date"), "Opening Date");
    }
}
