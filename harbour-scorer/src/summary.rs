//! Assemble a [`MatchResult`] from per-category scores.

use harbour_core::{
    Category, CategoryScores, CategoryWeights, Confidence, Factor, LocationRecord, MatchQuality,
    MatchResult, Preferences, ScoreResult,
};

const TOP_FACTORS: usize = 5;
const HIGHLIGHTS: usize = 3;
const INSIGHT_THRESHOLD: u8 = 80;
const HIGHLIGHT_THRESHOLD: u8 = 70;
const LOW_RATING: f32 = 5.0_f32;
const PERSONALISE_BELOW_COVERAGE: f32 = 0.4_f32;
const PERSONALISE_FROM_SCORE: u8 = 80;

/// Combine category results into the full match outcome.
pub(crate) fn summarise(
    results: Vec<ScoreResult>,
    weights: &CategoryWeights,
    preferences: &Preferences,
    location: &LocationRecord,
) -> MatchResult {
    let category_scores: CategoryScores = results.iter().cloned().collect();
    let total_score = weights.total(&category_scores);
    let all_factors: Vec<Factor> = results.into_iter().flat_map(|result| result.factors).collect();
    let preference_coverage = preferences.coverage();

    MatchResult {
        total_score,
        quality: MatchQuality::from_score(total_score),
        category_scores,
        top_factors: top_factors(&all_factors),
        warnings: warnings(&all_factors, location),
        all_factors,
        preference_coverage,
        personalization_note: personalization_note(preference_coverage, total_score),
        insights: insights(&category_scores),
        highlights: highlights(&category_scores),
        confidence: Confidence::from_average(category_scores.average()),
        value_rating: value_rating(category_scores.cost),
        appeal_statement: appeal_statement(&category_scores),
    }
}

/// The largest deltas first; ties keep category order.
fn top_factors(factors: &[Factor]) -> Vec<Factor> {
    let mut ranked = factors.to_vec();
    ranked.sort_by(|left, right| right.delta.cmp(&left.delta));
    ranked.truncate(TOP_FACTORS);
    ranked
}

fn warnings(factors: &[Factor], location: &LocationRecord) -> Vec<String> {
    let mut found: Vec<String> = factors
        .iter()
        .filter(|factor| factor.delta < 0)
        .map(|factor| factor.description.clone())
        .collect();
    if let Some(rating) = location.safety_score
        && rating < LOW_RATING
    {
        found.push(format!("Low safety rating ({rating:.1}/10)"));
    }
    if let Some(rating) = location.healthcare_score
        && rating < LOW_RATING
    {
        found.push(format!("Low healthcare rating ({rating:.1}/10)"));
    }
    found
}

fn personalization_note(coverage: f32, total: u8) -> Option<String> {
    (coverage < PERSONALISE_BELOW_COVERAGE && total >= PERSONALISE_FROM_SCORE).then(|| {
        "High score based on few preferences; add more to personalise this match".to_owned()
    })
}

const fn insight(category: Category) -> &'static str {
    match category {
        Category::Region => "Located where you want to be",
        Category::Climate => "Climate suits your preferences",
        Category::Culture => "Lifestyle and culture fit you well",
        Category::Hobbies => "Your activities are well supported",
        Category::Admin => "Strong healthcare, safety and governance",
        Category::Cost => "Comfortably within your budget",
    }
}

fn insights(scores: &CategoryScores) -> Vec<String> {
    scores
        .iter()
        .filter(|(_, score)| *score >= INSIGHT_THRESHOLD)
        .map(|(category, _)| insight(category).to_owned())
        .collect()
}

/// Categories best first; ties keep canonical order.
fn ranked(scores: &CategoryScores) -> Vec<(Category, u8)> {
    let mut ordered: Vec<(Category, u8)> = scores.iter().collect();
    ordered.sort_by(|left, right| right.1.cmp(&left.1));
    ordered
}

fn highlights(scores: &CategoryScores) -> Vec<String> {
    ranked(scores)
        .into_iter()
        .filter(|(_, score)| *score >= HIGHLIGHT_THRESHOLD)
        .take(HIGHLIGHTS)
        .map(|(category, score)| format!("Strong {} match ({score}%)", category.title()))
        .collect()
}

const fn value_rating(cost: u8) -> u8 {
    match cost {
        80.. => 5,
        60..=79 => 4,
        40..=59 => 3,
        _ => 2,
    }
}

fn appeal_statement(scores: &CategoryScores) -> Option<String> {
    ranked(scores)
        .first()
        .filter(|(_, score)| *score > 0)
        .map(|(category, score)| format!("{} Match: {score}%", category.title()))
}

#[cfg(test)]
mod tests {
    use super::*;
    use rstest::rstest;

    fn result(category: Category, score: u8, deltas: &[i32]) -> ScoreResult {
        let factors = deltas
            .iter()
            .enumerate()
            .map(|(index, change)| Factor::new(format!("{category} {index}"), *change))
            .collect();
        ScoreResult::new(category, score, factors)
    }

    fn sample() -> Vec<ScoreResult> {
        vec![
            result(Category::Region, 90, &[40, 30]),
            result(Category::Climate, 75, &[25, -5]),
            result(Category::Culture, 60, &[10]),
            result(Category::Hobbies, 100, &[15]),
            result(Category::Admin, 50, &[30]),
            result(Category::Cost, 85, &[40, 0]),
        ]
    }

    #[rstest]
    fn top_factors_are_stable_on_ties() {
        let outcome = summarise(
            sample(),
            &CategoryWeights::default(),
            &Preferences::default(),
            &LocationRecord::default(),
        );
        let order: Vec<&str> = outcome
            .top_factors
            .iter()
            .map(|factor| factor.description.as_str())
            .collect();
        assert_eq!(
            order,
            ["region 0", "cost 0", "region 1", "admin 0", "climate 0"]
        );
    }

    #[rstest]
    fn weighted_total_and_labels() {
        let outcome = summarise(
            sample(),
            &CategoryWeights::default(),
            &Preferences::default(),
            &LocationRecord::default(),
        );
        // 27 + 11.25 + 9 + 10 + 10 + 17
        assert_eq!(outcome.total_score, 84);
        assert_eq!(outcome.quality, MatchQuality::VeryGood);
        assert_eq!(outcome.value_rating, 5);
        assert_eq!(outcome.confidence, Confidence::Medium);
        assert_eq!(outcome.appeal_statement.as_deref(), Some("Hobbies Match: 100%"));
        assert_eq!(
            outcome.highlights,
            [
                "Strong Hobbies match (100%)",
                "Strong Region match (90%)",
                "Strong Cost match (85%)"
            ]
        );
        assert_eq!(outcome.insights.len(), 3);
    }

    #[rstest]
    fn negative_factors_and_low_ratings_warn() {
        let location = LocationRecord {
            safety_score: Some(3.0),
            healthcare_score: Some(8.0),
            ..LocationRecord::default()
        };
        let outcome = summarise(
            sample(),
            &CategoryWeights::default(),
            &Preferences::default(),
            &location,
        );
        assert_eq!(
            outcome.warnings,
            ["climate 1", "Low safety rating (3.0/10)"]
        );
    }

    #[rstest]
    #[case(85, 5)]
    #[case(60, 4)]
    #[case(59, 3)]
    #[case(10, 2)]
    fn value_rating_bands(#[case] cost: u8, #[case] expected: u8) {
        assert_eq!(value_rating(cost), expected);
    }

    #[rstest]
    fn sparse_preferences_with_high_score_get_a_note() {
        assert!(personalization_note(0.17, 85).is_some());
        assert!(personalization_note(0.17, 70).is_none());
        assert!(personalization_note(0.5, 95).is_none());
    }
}
