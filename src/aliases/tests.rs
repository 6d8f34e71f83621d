use crate::aliases::index::{AliasIndex, TAG_NONE};
use crate::aliases::similarity;
use crate::aliases::similarity::SimilarityAlgorithm;
use crate::emojis::emoji::Emoji;

fn emoji(unicode: &str, aliases: &[&str], tags: &[&str]) -> Emoji {
    Emoji {
        unicode: String::from(unicode),
        aliases: aliases.iter().map(|alias| String::from(*alias)).collect(),
        tags: tags.iter().map(|tag| String::from(*tag)).collect(),
        supports_fitzpatrick: false,
        description: None,
    }
}

/// Index under test:
/// 0 smile (happy, joy), 1 thumbsup/+1 (hands), 2 tm (untagged),
/// 3 sob (sad), 4 fire/dup (hot), 5 star/dup (night)
fn fixture() -> AliasIndex {
    let emojis = vec![
        emoji("\u{1f604}", &["smile"], &["happy", "joy"]),
        emoji("\u{1f44d}", &["thumbsup", "+1"], &["hands"]),
        emoji("\u{2122}", &["tm"], &[]),
        emoji("\u{1f62d}", &["sob"], &["sad"]),
        emoji("\u{1f525}", &["fire", "dup"], &["hot"]),
        emoji("\u{2b50}", &["star", "dup"], &["night"]),
    ];
    AliasIndex::new(&emojis)
}

#[test]
fn exact_lookup_strips_one_delimiter_pair() {
    let index = fixture();

    assert_eq!(index.resolve_exact("smile", None), Some(0));
    assert_eq!(index.resolve_exact(":smile:", None), Some(0));
    assert_eq!(index.resolve_exact(":smile:", Some("happy")), Some(0));
    assert_eq!(index.resolve_exact("::smile::", None), None);
}

#[test]
fn exact_lookup_is_tag_scoped() {
    let index = fixture();

    assert_eq!(index.resolve_exact("sob", Some("sad")), Some(3));
    assert_eq!(index.resolve_exact("smile", Some("sad")), None);
    assert_eq!(index.resolve_exact("smile", Some("joy")), Some(0));
}

#[test]
fn unknown_tag_resolves_to_nothing() {
    let index = fixture();

    assert_eq!(index.resolve_exact("smile", Some("nope")), None);
    assert_eq!(
        index.resolve_with_similarity("smile", Some("nope"), SimilarityAlgorithm::Levenshtein, 0.0),
        None
    );
}

#[test]
fn untagged_emojis_live_under_the_reserved_tag() {
    let index = fixture();

    assert_eq!(index.resolve_exact("tm", Some(TAG_NONE)), Some(2));
    assert_eq!(index.resolve_exact("tm", None), Some(2));
    // The reserved tag is not a real tag
    assert!(index.emojis_for_tag(TAG_NONE).is_none());
    assert!(index.tags().all(|tag| tag != TAG_NONE));
}

#[test]
fn empty_alias_resolves_to_nothing() {
    let index = fixture();

    assert_eq!(index.resolve_exact("", None), None);
    assert_eq!(
        index.resolve_with_similarity("", None, SimilarityAlgorithm::Levenshtein, 0.0),
        None
    );
}

#[test]
fn duplicated_alias_yields_some_winner() {
    let index = fixture();

    // "dup" is registered under two tags; the winner is unspecified but
    // must be one of the two
    let winner = index.resolve_exact("dup", None);
    assert!(winner == Some(4) || winner == Some(5));

    // With a tag there is no ambiguity
    assert_eq!(index.resolve_exact("dup", Some("hot")), Some(4));
    assert_eq!(index.resolve_exact("dup", Some("night")), Some(5));
}

#[test]
fn levenshtein_lookup_tolerates_a_typo() {
    let index = fixture();

    // Budget: round((1 - 0.5) * 4) = 2 allowed edits, "smile" is 1 away
    assert_eq!(
        index.resolve_with_similarity("smle", None, SimilarityAlgorithm::Levenshtein, 0.5),
        Some(0)
    );
    assert_eq!(
        index.resolve_with_similarity(":smle:", None, SimilarityAlgorithm::Levenshtein, 0.5),
        Some(0)
    );
}

#[test]
fn levenshtein_lookup_rejects_under_a_strict_threshold() {
    let index = fixture();

    // Budget: round((1 - 0.95) * 4) = 0, so even one edit is too much
    assert_eq!(
        index.resolve_with_similarity("smle", None, SimilarityAlgorithm::Levenshtein, 0.95),
        None
    );
}

#[test]
fn tag_scoped_similarity_only_sees_the_tag() {
    let index = fixture();

    // Budget: round((1 - 0.5) * 8) = 4
    assert_eq!(
        index.resolve_with_similarity(
            "thumbsip",
            Some("hands"),
            SimilarityAlgorithm::Levenshtein,
            0.5
        ),
        Some(1)
    );
    // "smile" is the only candidate under "happy" and is too far away
    assert_eq!(
        index.resolve_with_similarity(
            "thumbsip",
            Some("happy"),
            SimilarityAlgorithm::Levenshtein,
            0.5
        ),
        None
    );
}

#[test]
fn exact_hit_short_circuits_the_similarity_search() {
    let index = fixture();

    // Threshold 1.0 would reject every approximate candidate
    assert_eq!(
        index.resolve_with_similarity("+1", Some("hands"), SimilarityAlgorithm::Levenshtein, 1.0),
        Some(1)
    );
}

#[test]
fn fuzzy_lookup_finds_the_best_scoring_alias() {
    let index = fixture();

    // "thumbsup" scores far above every other alias for this query
    assert_eq!(
        index.resolve_with_similarity("thumbsuo", None, SimilarityAlgorithm::Fuzzy, 0.7),
        Some(1)
    );
}

#[test]
fn fuzzy_lookup_rejects_when_nothing_scores_above_the_budget() {
    let index = fixture();

    // No alias shares a single character with the query
    assert_eq!(
        index.resolve_with_similarity("zq", None, SimilarityAlgorithm::Fuzzy, 0.5),
        None
    );
}

#[test]
fn closest_takes_the_first_among_ties() {
    // Both candidates are one edit away; the first one encountered wins
    let winner = similarity::closest(
        vec!["smite", "smile"],
        "smide",
        SimilarityAlgorithm::Levenshtein,
        0.5,
    );
    assert_eq!(winner, Some("smite"));
}

#[test]
fn closest_applies_the_budget_strictly() {
    // Budget: round((1 - 0.7) * 4) = 1; a distance of 1 is not < 1
    let winner = similarity::closest(
        vec!["smile"],
        "smle",
        SimilarityAlgorithm::Levenshtein,
        0.7,
    );
    assert_eq!(winner, None);
}

#[test]
fn levenshtein_counts_scalar_values() {
    assert_eq!(similarity::levenshtein("flag", "flags"), 1);
    assert_eq!(similarity::levenshtein("a\u{1f604}c", "abc"), 1);
    assert_eq!(similarity::levenshtein("abc", "abc"), 0);
}

#[test]
fn fuzzy_score_rewards_consecutive_matches() {
    // One point per match, two extra per directly consecutive match
    assert_eq!(similarity::fuzzy_score("thumbsup", "thu"), 7);
    assert_eq!(similarity::fuzzy_score("thumbsup", "tu"), 2);
    assert_eq!(similarity::fuzzy_score("ThumbsUp", "thu"), 7);
}
