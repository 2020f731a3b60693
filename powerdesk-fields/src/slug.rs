//! Slug and label derivation helpers.
//!
//! Field names and option/stage values are stable lower-case slugs; labels
//! are what users see. These helpers derive one from the other.

/// Slugify a display label: lower-cased, whitespace runs collapsed to a
/// single underscore. `"In Progress"` → `"in_progress"`.
pub fn slugify(label: &str) -> String {
    label
        .split_whitespace()
        .map(|word| word.to_lowercase())
        .collect::<Vec<_>>()
        .join("_")
}

/// Normalize raw field-name input. Applied on every input event while a new
/// field is being named; existing field names are immutable and skip this.
pub fn normalize_field_name(input: &str) -> String {
    slugify(input)
}

/// Title-case an entity slug for display: `"work_orders"` → `"Work Orders"`.
pub fn title_case(slug: &str) -> String {
    slug.split(['_', ' '])
        .filter(|word| !word.is_empty())
        .map(|word| {
            let mut chars = word.chars();
            match chars.next() {
                Some(first) => first.to_uppercase().collect::<String>() + chars.as_str(),
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
    fn slugify_lowercases_and_underscores() {
        assert_eq!(slugify("Customer Type"), "customer_type");
        assert_eq!(slugify("Retail"), "retail");
    }

    #[test]
    fn slugify_collapses_whitespace_runs() {
        assert_eq!(slugify("  Net   Total \t Due "), "net_total_due");
    }

    #[test]
    fn normalize_field_name_matches_slugify() {
        assert_eq!(normalize_field_name("Contact  Email"), "contact_email");
    }

    #[test]
    fn title_case_from_entity_slug() {
        assert_eq!(title_case("leads"), "Leads");
        assert_eq!(title_case("work_orders"), "Work Orders");
        assert_eq!(title_case(""), "");
    }
}
