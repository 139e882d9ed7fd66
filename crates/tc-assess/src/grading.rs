//! Grading: per-item correctness, overall score, per-topic tally, tier.

use std::collections::BTreeMap;
use std::fmt;

use serde::{Deserialize, Serialize};

use crate::item::{Answer, AssessmentItem, ItemKind, Topic};

/// Submitted answers keyed by item id.
pub type AnswerSheet = BTreeMap<u32, Answer>;

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct ItemOutcome {
    pub id: u32,
    pub topic: Topic,
    pub kind: ItemKind,
    pub answered: bool,
    pub correct: bool,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
pub struct TopicTally {
    pub correct: u32,
    pub total: u32,
}

impl TopicTally {
    /// Mastery in whole percent. A tally with no items is 0.
    pub fn percent(&self) -> u32 {
        score_percent(self.correct, self.total)
    }
}

/// Badge awarded from the overall score.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum Tier {
    Participant,
    Practitioner,
    Expert,
    GrandMaster,
}

impl Tier {
    /// Minimum score for each tier, highest first.
    pub const LADDER: [(u32, Tier); 3] = [
        (90, Tier::GrandMaster),
        (75, Tier::Expert),
        (50, Tier::Practitioner),
    ];

    pub fn from_score(score: u32) -> Self {
        Self::LADDER
            .iter()
            .find(|(min, _)| score >= *min)
            .map(|(_, tier)| *tier)
            .unwrap_or(Tier::Participant)
    }

    pub fn label(self) -> &'static str {
        match self {
            Tier::GrandMaster => "Grand Master Termokimia",
            Tier::Expert => "Ahli Entalpi",
            Tier::Practitioner => "Praktisi Kalor",
            Tier::Participant => "Participant",
        }
    }
}

impl fmt::Display for Tier {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.label())
    }
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct GradeReport {
    pub outcomes: Vec<ItemOutcome>,
    pub correct: u32,
    pub total: u32,
    /// `round(100 · correct / total)`, 0 for an empty item list.
    pub score: u32,
    /// Only topics with at least one item appear.
    pub topics: BTreeMap<Topic, TopicTally>,
    pub tier: Tier,
}

impl GradeReport {
    pub fn outcome(&self, item_id: u32) -> Option<&ItemOutcome> {
        self.outcomes.iter().find(|o| o.id == item_id)
    }
}

/// Whole-percent score, rounded half up.
pub fn score_percent(correct: u32, total: u32) -> u32 {
    if total == 0 {
        return 0;
    }
    (100.0 * f64::from(correct) / f64::from(total)).round() as u32
}

/// Grade every item. Missing or malformed answers count as incorrect.
pub fn evaluate(items: &[AssessmentItem], answers: &AnswerSheet) -> GradeReport {
    let mut outcomes = Vec::with_capacity(items.len());
    let mut topics: BTreeMap<Topic, TopicTally> = BTreeMap::new();
    let mut correct = 0;

    for item in items {
        let answer = answers.get(&item.id);
        let is_correct = item.is_correct(answer);

        let tally = topics.entry(item.topic).or_default();
        tally.total += 1;
        if is_correct {
            tally.correct += 1;
            correct += 1;
        }

        outcomes.push(ItemOutcome {
            id: item.id,
            topic: item.topic,
            kind: item.kind(),
            answered: answer.is_some(),
            correct: is_correct,
        });
    }

    let total = items.len() as u32;
    let score = score_percent(correct, total);
    GradeReport {
        outcomes,
        correct,
        total,
        score,
        topics,
        tier: Tier::from_score(score),
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::bank::builtin_bank;

    #[test]
    fn tier_thresholds() {
        assert_eq!(Tier::from_score(100), Tier::GrandMaster);
        assert_eq!(Tier::from_score(90), Tier::GrandMaster);
        assert_eq!(Tier::from_score(89), Tier::Expert);
        assert_eq!(Tier::from_score(75), Tier::Expert);
        assert_eq!(Tier::from_score(74), Tier::Practitioner);
        assert_eq!(Tier::from_score(50), Tier::Practitioner);
        assert_eq!(Tier::from_score(49), Tier::Participant);
        assert_eq!(Tier::from_score(0), Tier::Participant);
    }

    #[test]
    fn empty_item_list_scores_zero() {
        let report = evaluate(&[], &AnswerSheet::new());
        assert_eq!(report.score, 0);
        assert_eq!(report.total, 0);
        assert!(report.topics.is_empty());
        assert_eq!(report.tier, Tier::Participant);
    }

    #[test]
    fn unanswered_bank_scores_zero() {
        let bank = builtin_bank();
        let report = evaluate(&bank.items, &AnswerSheet::new());
        assert_eq!(report.correct, 0);
        assert!(report.outcomes.iter().all(|o| !o.answered && !o.correct));
    }

    #[test]
    fn perfect_sheet_on_builtin_bank() {
        let bank = builtin_bank();
        let answers: AnswerSheet = [
            (1, Answer::Index(0)),
            (2, Answer::Index(1)),
            (3, Answer::Index(3)),
            (11, Answer::Bool(true)),
            (12, Answer::Bool(false)),
            (16, Answer::Number(670.0)),
            (21, Answer::Text("D (Selisih Awal-Akhir)".into())),
        ]
        .into_iter()
        .collect();

        let report = evaluate(&bank.items, &answers);
        assert_eq!(report.correct, 7);
        assert_eq!(report.score, 100);
        assert_eq!(report.tier, Tier::GrandMaster);
        assert_eq!(report.topics[&Topic::Calorimetry], TopicTally { correct: 2, total: 2 });
        assert!(!report.topics.contains_key(&Topic::Equation));
        assert!(!report.topics.contains_key(&Topic::Calculation));
    }

    #[test]
    fn partial_sheet_rounds_score() {
        let bank = builtin_bank();
        let answers: AnswerSheet = [
            (1, Answer::Index(0)),
            (2, Answer::Index(0)),
            (3, Answer::Index(0)),
            (11, Answer::Bool(true)),
            (16, Answer::Number(666.9)),
        ]
        .into_iter()
        .collect();

        let report = evaluate(&bank.items, &answers);
        // 2 of 7 = 28.57
        assert_eq!(report.correct, 2);
        assert_eq!(report.score, 29);
        assert_eq!(report.tier, Tier::Participant);
        assert_eq!(report.topics[&Topic::ReactionType].percent(), 0);
        assert_eq!(report.topics[&Topic::System].percent(), 100);

        let numeric = report.outcome(16).unwrap();
        assert!(numeric.answered && !numeric.correct);
    }

    #[test]
    fn topic_percent_rounds() {
        let tally = TopicTally { correct: 2, total: 3 };
        assert_eq!(tally.percent(), 67);
        assert_eq!(TopicTally::default().percent(), 0);
    }
}
