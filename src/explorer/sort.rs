//! Sort state and comparators for the working copy.

use std::cmp::Ordering;

use crate::api::models::RequestRecord;

use super::fields::SortField;

/// Active sort field and direction.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct SortState {
    /// Field the working copy is ordered by.
    pub current_field: SortField,
    /// `true` for ascending order.
    pub is_ascending: bool,
}

impl Default for SortState {
    /// Newest requests first.
    fn default() -> Self {
        Self {
            current_field: SortField::Requested,
            is_ascending: false,
        }
    }
}

impl SortState {
    /// Creates a sort state.
    #[must_use]
    pub const fn new(current_field: SortField, is_ascending: bool) -> Self {
        Self {
            current_field,
            is_ascending,
        }
    }

    /// Compares two records under this state.
    #[must_use]
    pub fn compare(&self, left: &RequestRecord, right: &RequestRecord) -> Ordering {
        let ordering = compare_by_field(self.current_field, left, right);
        if self.is_ascending {
            ordering
        } else {
            ordering.reverse()
        }
    }

    /// Sorts `records` in place. The sort is stable.
    pub fn sort(&self, records: &mut [RequestRecord]) {
        records.sort_by(|left, right| self.compare(left, right));
    }

    /// Short arrow for the current direction.
    #[must_use]
    pub const fn direction_arrow(&self) -> &'static str {
        if self.is_ascending { "\u{2191}" } else { "\u{2193}" }
    }
}

/// Ascending comparison of two records by `field`.
#[must_use]
pub fn compare_by_field(field: SortField, left: &RequestRecord, right: &RequestRecord) -> Ordering {
    match field {
        SortField::Description => locale_compare(&left.description, &right.description),
        SortField::Id => left.id.cmp(&right.id),
        SortField::RequesterName => locale_compare(&left.requester_name, &right.requester_name),
        SortField::Requested => left.created_on.cmp(&right.created_on),
        SortField::Status => {
            locale_compare(left.approval_state.as_str(), right.approval_state.as_str())
        }
    }
}

/// Locale-style string ordering.
///
/// Strings are compared in three passes. The first ignores case and folds
/// accented Latin letters onto their base letter, so `"Émile"` sorts beside
/// `"emile"`. Ties are broken by putting unaccented letters before accented
/// ones, then lowercase before uppercase. Letters outside Latin-1 have no
/// base letter and compare by code point, as do `æ`, `ø` and `ß`.
#[must_use]
pub fn locale_compare(left: &str, right: &str) -> Ordering {
    let primary = folded(left).cmp(folded(right));
    primary
        .then_with(|| first_difference(lowercased(left), lowercased(right), accent_rank))
        .then_with(|| first_difference(left.chars(), right.chars(), case_rank))
}

fn lowercased(text: &str) -> impl Iterator<Item = char> + '_ {
    text.chars().flat_map(char::to_lowercase)
}

fn folded(text: &str) -> impl Iterator<Item = char> + '_ {
    lowercased(text).map(base_letter)
}

/// Orders by `rank` at the first position where the two sequences differ.
fn first_difference(
    left: impl Iterator<Item = char>,
    right: impl Iterator<Item = char>,
    rank: fn(char) -> u8,
) -> Ordering {
    left.zip(right)
        .find(|(l, r)| l != r)
        .map_or(Ordering::Equal, |(l, r)| rank(l).cmp(&rank(r)))
}

/// Maps a lowercase Latin-1 letter with a diacritic to its base letter.
const fn base_letter(ch: char) -> char {
    match ch {
        'à'..='å' => 'a',
        'ç' => 'c',
        'è'..='ë' => 'e',
        'ì'..='ï' => 'i',
        'ñ' => 'n',
        'ò'..='ö' => 'o',
        'ù'..='ü' => 'u',
        'ý' | 'ÿ' => 'y',
        other => other,
    }
}

const fn accent_rank(ch: char) -> u8 {
    if base_letter(ch) == ch { 0 } else { 1 }
}

fn case_rank(ch: char) -> u8 {
    if ch.is_uppercase() { 1 } else { 0 }
}

#[cfg(test)]
mod tests {
    use rstest::rstest;

    use super::*;
    use crate::api::models::ApprovalState;
    use crate::api::models::test_support::{request, two_requests};

    fn ids(records: &[RequestRecord]) -> Vec<u64> {
        records.iter().map(|record| record.id).collect()
    }

    #[rstest]
    #[case::ascending(true, vec![1, 2])]
    #[case::descending(false, vec![2, 1])]
    fn id_sort_orders_numerically(#[case] ascending: bool, #[case] expected: Vec<u64>) {
        let mut records = two_requests();
        SortState::new(SortField::Id, ascending).sort(&mut records);
        assert_eq!(ids(&records), expected);
    }

    #[test]
    fn id_sort_is_numeric_not_lexical() {
        let mut records = vec![
            request(10, "a", "a", "2020-01-01", ApprovalState::Approved),
            request(9, "a", "a", "2020-01-01", ApprovalState::Approved),
        ];
        SortState::new(SortField::Id, true).sort(&mut records);
        assert_eq!(ids(&records), vec![9, 10]);
    }

    #[test]
    fn requested_sort_orders_by_timestamp() {
        let mut records = vec![
            request(1, "a", "a", "2021-06-01T00:00:00Z", ApprovalState::Approved),
            request(2, "a", "a", "2020-06-01", ApprovalState::Approved),
            request(3, "a", "a", "2021-01-01T12:00:00+05:00", ApprovalState::Approved),
        ];
        SortState::new(SortField::Requested, true).sort(&mut records);
        assert_eq!(ids(&records), vec![2, 3, 1]);
    }

    #[test]
    fn status_sort_uses_wire_values() {
        let mut records = vec![
            request(1, "a", "a", "2020-01-01", ApprovalState::PendingApproval),
            request(2, "a", "a", "2020-01-01", ApprovalState::Approved),
            request(3, "a", "a", "2020-01-01", ApprovalState::Denied),
        ];
        SortState::new(SortField::Status, true).sort(&mut records);
        assert_eq!(ids(&records), vec![2, 3, 1]);
    }

    #[test]
    fn alpha_sort_ignores_case_first() {
        let mut records = vec![
            request(1, "beta", "a", "2020-01-01", ApprovalState::Approved),
            request(2, "Alpha", "a", "2020-01-01", ApprovalState::Approved),
            request(3, "Gamma", "a", "2020-01-01", ApprovalState::Approved),
        ];
        SortState::new(SortField::Description, true).sort(&mut records);
        assert_eq!(ids(&records), vec![2, 1, 3]);
    }

    #[rstest]
    #[case("a", "A", Ordering::Less)]
    #[case("A", "b", Ordering::Less)]
    #[case("abc", "ab", Ordering::Greater)]
    #[case("same", "same", Ordering::Equal)]
    #[case("\u{c9}mile", "Zoe", Ordering::Less)]
    #[case("emile", "\u{e9}mile", Ordering::Less)]
    #[case("\u{e9}mile", "Emile", Ordering::Greater)]
    #[case("\u{e9}mile", "emilie", Ordering::Less)]
    fn locale_compare_orders_like_a_collator(
        #[case] left: &str,
        #[case] right: &str,
        #[case] expected: Ordering,
    ) {
        assert_eq!(locale_compare(left, right), expected);
    }

    #[test]
    fn requester_sort_places_accented_names_with_their_base_letter() {
        let mut records = vec![
            request(1, "a", "Zoe", "2020-01-01", ApprovalState::Approved),
            request(2, "a", "\u{c9}mile", "2020-01-01", ApprovalState::Approved),
            request(3, "a", "Adam", "2020-01-01", ApprovalState::Approved),
        ];
        SortState::new(SortField::RequesterName, true).sort(&mut records);
        assert_eq!(ids(&records), vec![3, 2, 1]);
    }

    #[test]
    fn toggling_direction_twice_keeps_equal_keys_in_place() {
        let original = vec![
            request(1, "same", "x", "2020-01-01", ApprovalState::Approved),
            request(2, "same", "y", "2020-01-01", ApprovalState::Approved),
            request(3, "other", "z", "2020-01-01", ApprovalState::Approved),
            request(4, "same", "w", "2020-01-01", ApprovalState::Approved),
        ];
        let mut records = original.clone();

        SortState::new(SortField::Description, true).sort(&mut records);
        let ascending = ids(&records);
        SortState::new(SortField::Description, false).sort(&mut records);
        SortState::new(SortField::Description, true).sort(&mut records);

        assert_eq!(ids(&records), ascending);
        assert_eq!(ascending, vec![3, 1, 2, 4]);
    }

    #[test]
    fn default_sort_is_newest_first() {
        let state = SortState::default();
        assert_eq!(state.current_field, SortField::Requested);
        assert!(!state.is_ascending);
        assert_eq!(state.direction_arrow(), "\u{2193}");
    }
}
