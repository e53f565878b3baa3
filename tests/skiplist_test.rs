//! Behavioral tests for the sorted-list core: range endpoint resolution,
//! duplicate handling, and the search walk, driven through the public API.

use bytes::Bytes;
use slistdb::core::storage::slist::{RangeSpec, SortedList, Token};

fn list_of(pairs: &[(&'static [u8], &'static [u8])]) -> SortedList {
    let mut list = SortedList::new();
    for (score, member) in pairs {
        list.insert(Token::from_static(score), Token::from_static(member));
    }
    list
}

fn spec(min: &'static [u8], max: &'static [u8]) -> RangeSpec {
    RangeSpec::parse(&Bytes::from_static(min), &Bytes::from_static(max)).unwrap()
}

fn scores(list: &SortedList, range: &RangeSpec) -> Vec<Bytes> {
    list.range(range)
        .into_iter()
        .map(|e| e.score.raw().clone())
        .collect()
}

#[test]
fn first_in_range_lands_on_leftmost_qualifier() {
    let list = list_of(&[(b"b", b"1"), (b"d", b"1"), (b"d", b"2"), (b"f", b"1")]);

    let entry = list.first_in_range(&spec(b"[d", b"[f")).unwrap();
    assert_eq!(entry.score.raw(), &Bytes::from_static(b"d"));
    assert_eq!(entry.member.raw(), &Bytes::from_static(b"1"));

    // An exclusive low bound skips the whole equal run.
    let entry = list.first_in_range(&spec(b"(d", b"[f")).unwrap();
    assert_eq!(entry.score.raw(), &Bytes::from_static(b"f"));

    // A low bound between stored scores lands on the next larger one.
    let entry = list.first_in_range(&spec(b"[c", b"[f")).unwrap();
    assert_eq!(entry.score.raw(), &Bytes::from_static(b"d"));
}

#[test]
fn first_in_range_rejects_when_minimum_exceeds_high_bound() {
    let list = list_of(&[(b"m", b"1"), (b"n", b"1")]);
    assert!(list.first_in_range(&spec(b"[a", b"[b")).is_none());
}

#[test]
fn first_in_range_exclusive_min_can_walk_off_the_end() {
    let list = list_of(&[(b"x", b"1"), (b"x", b"2")]);
    assert!(list.first_in_range(&spec(b"(x", b"[z")).is_none());
}

#[test]
fn last_in_range_lands_on_rightmost_qualifier() {
    let list = list_of(&[(b"b", b"1"), (b"d", b"1"), (b"d", b"2"), (b"f", b"1")]);

    // Fast path: the tail sits strictly below the high bound.
    let entry = list.last_in_range(&spec(b"[a", b"[z")).unwrap();
    assert_eq!(entry.score.raw(), &Bytes::from_static(b"f"));

    // An inclusive bound on a duplicate run picks the run's last node.
    let entry = list.last_in_range(&spec(b"[a", b"[d")).unwrap();
    assert_eq!(entry.score.raw(), &Bytes::from_static(b"d"));
    assert_eq!(entry.member.raw(), &Bytes::from_static(b"2"));

    // An exclusive bound on the run backs off to the previous score.
    let entry = list.last_in_range(&spec(b"[a", b"(d")).unwrap();
    assert_eq!(entry.score.raw(), &Bytes::from_static(b"b"));
}

#[test]
fn last_in_range_exclusive_max_can_walk_off_the_head() {
    let list = list_of(&[(b"a", b"1"), (b"a", b"2"), (b"b", b"1")]);
    assert!(list.last_in_range(&spec(b"-", b"(a")).is_none());
}

#[test]
fn range_is_exactly_the_qualifying_set() {
    let list = list_of(&[(b"1", b"m"), (b"7", b"m")]);

    // Both endpoints fall in the interior gap; nothing qualifies even though
    // the raw endpoint searches land on real nodes.
    assert!(scores(&list, &spec(b"[3", b"[5")).is_empty());

    // The same list with a window around the upper element.
    assert_eq!(scores(&list, &spec(b"[5", b"[7")), vec![Bytes::from_static(b"7")]);
}

#[test]
fn last_in_range_overshoots_between_scores_and_range_filters_it() {
    // When no score equals the high bound, the high-end search stops on the
    // first node past it; the traversal is what trims the reply.
    let list = list_of(&[(b"a", b"1"), (b"c", b"1")]);
    let entry = list.last_in_range(&spec(b"[a", b"[b")).unwrap();
    assert_eq!(entry.score.raw(), &Bytes::from_static(b"c"));
    assert_eq!(scores(&list, &spec(b"[a", b"[b")), vec![Bytes::from_static(b"a")]);
}

#[test]
fn range_with_unbounded_ends() {
    let list = list_of(&[(b"a", b"1"), (b"b", b"1"), (b"c", b"1")]);
    assert_eq!(
        scores(&list, &spec(b"-", b"+")),
        vec![
            Bytes::from_static(b"a"),
            Bytes::from_static(b"b"),
            Bytes::from_static(b"c"),
        ]
    );
    assert_eq!(
        scores(&list, &spec(b"(a", b"+")),
        vec![Bytes::from_static(b"b"), Bytes::from_static(b"c")]
    );
    assert_eq!(scores(&list, &spec(b"-", b"(a")), Vec::<Bytes>::new());
}

#[test]
fn range_on_empty_list_is_empty() {
    let list = SortedList::new();
    assert!(list.range(&spec(b"-", b"+")).is_empty());
    assert!(list.first_in_range(&spec(b"-", b"+")).is_none());
    assert!(list.last_in_range(&spec(b"-", b"+")).is_none());
}

#[test]
fn integer_scores_range_numerically() {
    let list = list_of(&[(b"2", b"m"), (b"10", b"m"), (b"30", b"m")]);
    // Bytewise "10" < "2"; the integer fast path keeps 2 < 10 < 30.
    assert_eq!(
        scores(&list, &spec(b"[2", b"[10")),
        vec![Bytes::from_static(b"2"), Bytes::from_static(b"10")]
    );
}

#[test]
fn search_walk_visits_each_duplicate_once() {
    let mut list = SortedList::new();
    for i in 0..50u32 {
        list.insert(
            Token::from_static(b"dup"),
            Token::new(Bytes::from(format!("member{i:02}"))),
        );
    }
    list.insert(Token::from_static(b"aaa"), Token::from_static(b"x"));
    list.insert(Token::from_static(b"zzz"), Token::from_static(b"x"));

    let run = list.entries_with_score(&Token::from_static(b"dup"));
    assert_eq!(run.len(), 50);
    for (i, entry) in run.iter().enumerate() {
        assert_eq!(entry.member.raw(), &Bytes::from(format!("member{i:02}")));
    }
}

#[test]
fn large_population_search_and_cardinality() {
    let mut list = SortedList::new();
    for i in 0..5000u32 {
        list.insert(
            Token::new(Bytes::from(format!("score_{i}"))),
            Token::new(Bytes::from(format!("{i}"))),
        );
    }
    assert_eq!(list.len(), 5000);

    for i in [3u32, 1234, 4999] {
        let run = list.entries_with_score(&Token::new(Bytes::from(format!("score_{i}"))));
        assert_eq!(run.len(), 1);
        assert_eq!(run[0].member.raw(), &Bytes::from(format!("{i}")));
    }
    assert!(
        list.entries_with_score(&Token::from_static(b"score_5000"))
            .is_empty()
    );
}
