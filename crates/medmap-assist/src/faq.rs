//! The assistant's canned quick questions.

use serde::{Deserialize, Serialize};

/// Topic tag used to pick an icon for a quick question.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum FaqTopic {
    Blood,
    Beds,
    Medicine,
    Equipment,
    General,
}

/// One quick-question button.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct FaqEntry {
    pub question: &'static str,
    pub topic: FaqTopic,
}

/// The six quick questions offered alongside the input field. Each is
/// submitted verbatim as a query.
pub const FAQ_ENTRIES: [FaqEntry; 6] = [
    FaqEntry {
        question: "Where can I find O+ blood?",
        topic: FaqTopic::Blood,
    },
    FaqEntry {
        question: "Which hospital has available beds?",
        topic: FaqTopic::Beds,
    },
    FaqEntry {
        question: "Is there amoxicillin near me?",
        topic: FaqTopic::Medicine,
    },
    FaqEntry {
        question: "Where can I get oxygen tanks?",
        topic: FaqTopic::Equipment,
    },
    FaqEntry {
        question: "What facilities are near me?",
        topic: FaqTopic::General,
    },
    FaqEntry {
        question: "Which pharmacy has paracetamol?",
        topic: FaqTopic::Medicine,
    },
];

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn there_are_six_quick_questions() {
        assert_eq!(FAQ_ENTRIES.len(), 6);
    }

    #[test]
    fn every_topic_except_general_maps_to_a_resource_area() {
        assert!(FAQ_ENTRIES
            .iter()
            .any(|entry| entry.topic == FaqTopic::General));
        assert!(FAQ_ENTRIES
            .iter()
            .filter(|entry| entry.topic != FaqTopic::General)
            .count() >= 4);
    }
}
