use std::collections::HashMap;

/// Long-form question text exactly as the survey form exports it, paired with
/// the short display label used everywhere downstream. The source strings are
/// a verbatim contract with the spreadsheet, stray whitespace included; do
/// not tidy them.
const QUESTION_LABELS: [(&str, &str); 15] = [
    (
        "1- Do you face menstrual cycle irregularity ?",
        "Cycle Irregularity",
    ),
    (
        "2- Have you been educated or informed about how the menstrual cycle may influence recreational athletic activities?",
        "Education on Cycle Effects",
    ),
    (
        "3- Do you perceive the general effect of your menstrual cycle on your engagement in recreational physical activity ",
        "Effect on Engagement",
    ),
    (
        "4- Do you recognise fluctuations in your energy levels throughout different phases of your menstrual cycle?",
        "Energy Fluctuations",
    ),
    (
        "5- Do you have a specific pre warm up routine or rituals that you follow taking into account your menstrual cycle phases? ",
        "Adjusted Warm-Up",
    ),
    (
        "6- Does your motivation for physical activities get influenced by your menstrual cycle?",
        "Motivation Impact",
    ),
    (
        "7- Have you modified the intensity or duration of your recreational activities depending on the stage of your menstrual cycle?",
        "Modified Intensity/Duration",
    ),
    (
        "8- Do you notice alterations in strength or endurance during particular phases of your menstrual cycle? ",
        "Strength/Endurance Changes",
    ),
    (
        "9- Does your menstrual cycle impact the agility and coordination while participating in physical activity?",
        "Agility/Coordination Impact",
    ),
    (
        "10- Does your menstrual cycle affect your capacity to partake in high intensity exercise? ",
        "High Intensity Capability",
    ),
    (
        "11- Do you experience fluctuations in flexibility or joint health throughout your menstrual cycle? ",
        "Flexibility Changes",
    ),
    (
        "12- Do you sense greater fatigue or muscle soreness during specific periods of the menstrual cycle while performing any physical activity?",
        "Fatigue/Soreness",
    ),
    (
        "13- Does menstrual discomfort like cramps, bloating or changes in mood influence your training or competitive  performance?",
        "Discomfort Effect",
    ),
    (
        "14- Do you perceive difference in the duration it takes for recovery after participating in recreational activities during your menstrual cycle? ",
        "Recovery Time Change",
    ),
    (
        "15- Do you implement psychological strategies to sustain focus and a positive mindset during recreational athletic activities, particularly when navigating challenges associated with the menstrual cycle?",
        "Psychological Strategies",
    ),
];

/// The five labeled questions averaged into the impact score.
pub const IMPACT_QUESTIONS: [&str; 5] = [
    "Effect on Engagement",
    "Motivation Impact",
    "Strength/Endurance Changes",
    "High Intensity Capability",
    "Fatigue/Soreness",
];

/// The six metrics shown on the dashboard, in fixed display order.
pub const DASHBOARD_METRICS: [&str; 6] = [
    "Energy Fluctuations",
    "Strength/Endurance Changes",
    "Fatigue/Soreness",
    "High Intensity Capability",
    "Recovery Time Change",
    "Motivation Impact",
];

/// Bidirectional question-text/display-label map. Built once, never mutated.
#[derive(Debug, Clone)]
pub struct QuestionCatalog {
    entries: Vec<(String, String)>,
    label_by_source: HashMap<String, String>,
    source_by_label: HashMap<String, String>,
}

impl QuestionCatalog {
    /// The fixed catalog for the CyclePerform survey.
    pub fn standard() -> Self {
        Self::from_pairs(
            QUESTION_LABELS
                .iter()
                .map(|&(source, label)| (source.to_string(), label.to_string())),
        )
    }

    pub fn from_pairs(pairs: impl IntoIterator<Item = (String, String)>) -> Self {
        let entries: Vec<(String, String)> = pairs.into_iter().collect();
        let mut label_by_source = HashMap::new();
        let mut source_by_label = HashMap::new();
        for (source, label) in &entries {
            label_by_source.insert(source.clone(), label.clone());
            source_by_label.insert(label.clone(), source.clone());
        }
        Self {
            entries,
            label_by_source,
            source_by_label,
        }
    }

    pub fn label_for(&self, source: &str) -> Option<&str> {
        self.label_by_source.get(source).map(String::as_str)
    }

    /// Reverse lookup used to resolve query labels.
    pub fn source_for(&self, label: &str) -> Option<&str> {
        self.source_by_label.get(label).map(String::as_str)
    }

    /// (source text, display label) pairs in catalog order.
    pub fn entries(&self) -> impl Iterator<Item = (&str, &str)> {
        self.entries
            .iter()
            .map(|(source, label)| (source.as_str(), label.as_str()))
    }

    pub fn len(&self) -> usize {
        self.entries.len()
    }

    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }
}
