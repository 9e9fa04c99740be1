//! Local sort/filter view recomputation.
//!
//! The visible table is always derived fresh from the full collection
//! plus the active sort and filter configuration, never mutated in
//! place, so clearing either restores the original view.

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum SortDirection {
    Asc,
    Desc,
}

impl SortDirection {
    fn flip(self) -> Self {
        match self {
            SortDirection::Asc => SortDirection::Desc,
            SortDirection::Desc => SortDirection::Asc,
        }
    }
}

/// The single active sort column and its direction.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct SortConfig<K> {
    pub key: K,
    pub direction: SortDirection,
}

impl<K: PartialEq + Copy> SortConfig<K> {
    /// Re-selecting the active column flips the direction; selecting a
    /// new column starts ascending.
    pub fn toggle(current: Option<Self>, key: K) -> Self {
        match current {
            Some(config) if config.key == key => Self {
                key,
                direction: config.direction.flip(),
            },
            _ => Self {
                key,
                direction: SortDirection::Asc,
            },
        }
    }
}

/// Sort a derived view by a string-valued field.
pub fn sort_view<T, F>(items: &mut [T], direction: SortDirection, field: F)
where
    F: Fn(&T) -> String,
{
    items.sort_by(|a, b| {
        let ordering = field(a).cmp(&field(b));
        match direction {
            SortDirection::Asc => ordering,
            SortDirection::Desc => ordering.reverse(),
        }
    });
}

/// Case-insensitive substring match used by the name filters. An empty
/// needle matches everything.
pub fn matches_substring(haystack: &str, needle: &str) -> bool {
    haystack.to_lowercase().contains(&needle.to_lowercase())
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn toggle_flips_direction_on_same_key_only() {
        let first = SortConfig::toggle(None, "name");
        assert_eq!(first.direction, SortDirection::Asc);

        let second = SortConfig::toggle(Some(first), "name");
        assert_eq!(second.direction, SortDirection::Desc);

        let third = SortConfig::toggle(Some(second), "email");
        assert_eq!(third.key, "email");
        assert_eq!(third.direction, SortDirection::Asc);
    }

    #[test]
    fn sort_view_orders_by_field() {
        let mut items = vec!["pear", "apple", "plum"];
        sort_view(&mut items, SortDirection::Asc, |s| s.to_string());
        assert_eq!(items, vec!["apple", "pear", "plum"]);

        sort_view(&mut items, SortDirection::Desc, |s| s.to_string());
        assert_eq!(items, vec!["plum", "pear", "apple"]);
    }

    #[test]
    fn substring_match_is_case_insensitive() {
        assert!(matches_substring("Alice", "ali"));
        assert!(matches_substring("SALIM", "ali"));
        assert!(!matches_substring("Bob", "ali"));
        assert!(matches_substring("anything", ""));
    }
}
