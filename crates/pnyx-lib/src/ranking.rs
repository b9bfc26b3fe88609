// ABOUTME: Systemic consensing rankings over an issue's suggestions
// ABOUTME: Score is the sum of ratings; the highest score is the least resisted option

use serde::Serialize;

/// A suggestion paired with its consensus score
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct ScoredSuggestion {
    /// Suggestion name within the issue
    pub suggestion: String,
    /// Sum of all rating values
    pub score: i64,
    /// Distinct stoners
    pub stones: u64,
    /// Number of ratings received
    pub rating_count: usize,
}

/// Sort suggestions by consensus score descending, ties broken by stone
/// count descending. The sort is stable, so equally placed suggestions keep
/// their input order.
pub fn rank_by_score(mut scored: Vec<ScoredSuggestion>) -> Vec<ScoredSuggestion> {
    scored.sort_by(|a, b| {
        b.score
            .cmp(&a.score)
            .then_with(|| b.stones.cmp(&a.stones))
    });
    scored
}

/// The consensus winner, or `None` when no suggestion has any rating
pub fn consensus_winner(scored: Vec<ScoredSuggestion>) -> Option<ScoredSuggestion> {
    let ranked = rank_by_score(scored);
    ranked.into_iter().next().filter(|top| top.rating_count > 0)
}

#[cfg(test)]
mod tests {
    use super::*;

    fn scored(suggestion: &str, score: i64, stones: u64, rating_count: usize) -> ScoredSuggestion {
        ScoredSuggestion {
            suggestion: suggestion.to_string(),
            score,
            stones,
            rating_count,
        }
    }

    #[test]
    fn test_rank_orders_by_score_descending() {
        let ranked = rank_by_score(vec![
            scored("a", -2, 0, 1),
            scored("b", 7, 0, 2),
            scored("c", 3, 0, 1),
        ]);
        let names: Vec<&str> = ranked.iter().map(|s| s.suggestion.as_str()).collect();
        assert_eq!(names, ["b", "c", "a"]);
    }

    #[test]
    fn test_ties_broken_by_stones() {
        let ranked = rank_by_score(vec![scored("a", 4, 1, 2), scored("b", 4, 3, 2)]);
        assert_eq!(ranked[0].suggestion, "b");
    }

    #[test]
    fn test_winner_requires_a_rating() {
        assert!(consensus_winner(vec![]).is_none());
        // An unrated top suggestion means nothing has been decided yet.
        assert!(consensus_winner(vec![scored("a", 0, 5, 0)]).is_none());

        let winner = consensus_winner(vec![scored("a", 2, 0, 1), scored("b", 6, 0, 2)]).unwrap();
        assert_eq!(winner.suggestion, "b");
        assert_eq!(winner.score, 6);
    }
}
