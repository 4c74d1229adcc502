//! Form-side validation, shared so any client applies the same rules before
//! touching the network. The server deliberately checks less (presence of a
//! name, parseability of the count); these are the stricter UI rules.

/// Name rule from the invitation form: 2 to 50 characters once trimmed.
pub fn valid_name(value: &str) -> bool {
    let length = value.trim().chars().count();

    (2..=50).contains(&length)
}

/// Party size rule: blank counts as "left empty" (the server fills in 1);
/// anything else must be a whole number of zero or more people.
pub fn valid_count(value: &str) -> bool {
    let value = value.trim();

    value.is_empty() || value.parse::<i32>().is_ok_and(|n| n >= 0)
}

#[cfg(test)]
mod tests {
    use super::{valid_count, valid_name};

    #[test]
    fn name_length_bounds() {
        assert!(!valid_name("A"));
        assert!(valid_name("Dr"));
        assert!(valid_name("Ana Romero"));
        assert!(valid_name(&"x".repeat(50)));
        assert!(!valid_name(&"x".repeat(51)));
    }

    #[test]
    fn name_trims_before_counting() {
        assert!(!valid_name("  A  "));
        assert!(!valid_name("      "));
        assert!(valid_name("  Ana  "));
    }

    #[test]
    fn count_accepts_whole_numbers() {
        assert!(valid_count("0"));
        assert!(valid_count("3"));
        assert!(valid_count("20"));
    }

    #[test]
    fn count_rejects_negatives_and_garbage() {
        assert!(!valid_count("-1"));
        assert!(!valid_count("2.5"));
        assert!(!valid_count("five"));
    }

    #[test]
    fn blank_count_is_left_to_the_server() {
        assert!(valid_count(""));
        assert!(valid_count("   "));
    }
}
