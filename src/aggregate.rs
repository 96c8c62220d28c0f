use std::cmp::Reverse;
use std::collections::HashMap;

use chrono::{DateTime, Utc};

use crate::model::card::Card;
use crate::util::dates::display_date;

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum SortOrder {
    OldestFirst,
    NewestFirst,
}

/// "Nya leveranser" is read top-down as a feed, everything else as a queue.
pub fn sort_order(list_name: &str) -> SortOrder {
    let lower = list_name.to_lowercase();
    if lower.contains("ny") && lower.contains("leverans") {
        SortOrder::NewestFirst
    } else {
        SortOrder::OldestFirst
    }
}

pub fn sort_cards(list_name: &str, cards: &mut [Card]) {
    let key = |c: &Card| display_date(c).unwrap_or(DateTime::<Utc>::MIN_UTC);
    match sort_order(list_name) {
        SortOrder::OldestFirst => cards.sort_by_cached_key(key),
        SortOrder::NewestFirst => cards.sort_by_cached_key(|c| Reverse(key(c))),
    }
}

pub fn group_by_list(cards: Vec<Card>) -> HashMap<String, Vec<Card>> {
    let mut grouped: HashMap<String, Vec<Card>> = HashMap::new();
    for card in cards {
        grouped.entry(card.id_list.clone()).or_default().push(card);
    }
    grouped
}

#[cfg(test)]
mod tests {
    use super::*;

    fn dated(name: &str, date: &str) -> Card {
        Card {
            id: format!("card-{date}"),
            name: format!("{name} {date}"),
            ..Card::default()
        }
    }

    fn names(cards: &[Card]) -> Vec<&str> {
        cards.iter().map(|c| c.name.as_str()).collect()
    }

    #[test]
    fn nya_leveranser_sorts_newest_first() {
        let mut cards = vec![
            dated("a", "2024-01-02"),
            dated("b", "2024-03-01"),
            dated("c", "2024-02-15"),
        ];
        sort_cards("Nya leveranser", &mut cards);
        assert_eq!(names(&cards), ["b 2024-03-01", "c 2024-02-15", "a 2024-01-02"]);
    }

    #[test]
    fn other_lists_sort_oldest_first() {
        let mut cards = vec![
            dated("a", "2024-01-02"),
            dated("b", "2024-03-01"),
            dated("c", "2024-02-15"),
        ];
        sort_cards("Under bearbetning", &mut cards);
        assert_eq!(names(&cards), ["a 2024-01-02", "c 2024-02-15", "b 2024-03-01"]);
    }

    #[test]
    fn special_case_needs_both_keywords() {
        assert_eq!(sort_order("NYA LEVERANSER"), SortOrder::NewestFirst);
        assert_eq!(sort_order("Nya ordrar"), SortOrder::OldestFirst);
        assert_eq!(sort_order("Leveranser"), SortOrder::OldestFirst);
    }

    #[test]
    fn undated_cards_sort_as_earliest() {
        let mut cards = vec![
            dated("a", "2024-01-02"),
            Card {
                id: "zz".into(),
                name: "undated".into(),
                ..Card::default()
            },
        ];
        sort_cards("Klara", &mut cards);
        assert_eq!(cards[0].name, "undated");
    }

    #[test]
    fn groups_by_parent_list() {
        let cards = vec![
            Card { id: "1".into(), id_list: "l1".into(), ..Card::default() },
            Card { id: "2".into(), id_list: "l2".into(), ..Card::default() },
            Card { id: "3".into(), id_list: "l1".into(), ..Card::default() },
        ];
        let grouped = group_by_list(cards);
        assert_eq!(grouped["l1"].len(), 2);
        assert_eq!(grouped["l2"].len(), 1);
    }
}
