use serde::{Deserialize, Serialize};
use std::fmt;

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize, Default)]
#[serde(rename_all = "lowercase", from = "String")]
pub enum Emotion {
    Happy,
    Sad,
    Angry,
    #[default]
    Neutral,
}

pub const HAPPY_WORDS: &[&str] = &[
    "happy", "joy", "excited", "great", "awesome", "love", "fun", "good", "amazing", "wonderful",
    "smile", "laugh",
];

pub const SAD_WORDS: &[&str] = &[
    "sad",
    "crying",
    "upset",
    "hurt",
    "lonely",
    "miss",
    "worried",
    "scared",
    "tired",
    "disappointed",
];

pub const ANGRY_WORDS: &[&str] = &[
    "angry",
    "mad",
    "frustrated",
    "annoyed",
    "hate",
    "stupid",
    "unfair",
    "mean",
];

/// Card shown on the Learn tab.
pub struct EmotionGuide {
    pub name: &'static str,
    pub description: &'static str,
    pub tips: [&'static str; 3],
}

impl Emotion {
    /// Every label, in the order the chart legend lists them.
    pub const ALL: [Emotion; 4] = [
        Emotion::Happy,
        Emotion::Neutral,
        Emotion::Sad,
        Emotion::Angry,
    ];

    /// Parses a stored label. Anything unrecognised is treated as neutral.
    pub fn from_label(label: &str) -> Self {
        match label.trim().to_lowercase().as_str() {
            "happy" => Emotion::Happy,
            "sad" => Emotion::Sad,
            "angry" => Emotion::Angry,
            _ => Emotion::Neutral,
        }
    }

    pub fn label(self) -> &'static str {
        match self {
            Emotion::Happy => "happy",
            Emotion::Sad => "sad",
            Emotion::Angry => "angry",
            Emotion::Neutral => "neutral",
        }
    }

    /// Trigger words for this emotion. Neutral has none.
    pub fn keywords(self) -> &'static [&'static str] {
        match self {
            Emotion::Happy => HAPPY_WORDS,
            Emotion::Sad => SAD_WORDS,
            Emotion::Angry => ANGRY_WORDS,
            Emotion::Neutral => &[],
        }
    }

    /// Y-axis ordinal for the mood chart. Not an intensity score.
    pub fn chart_value(self) -> f64 {
        match self {
            Emotion::Happy => 4.0,
            Emotion::Neutral => 3.0,
            Emotion::Sad => 2.0,
            Emotion::Angry => 1.0,
        }
    }

    pub fn emoji(self) -> &'static str {
        match self {
            Emotion::Happy => "😊",
            Emotion::Sad => "😢",
            Emotion::Angry => "😡",
            Emotion::Neutral => "😐",
        }
    }

    /// RGB triple used for the mood's accent color.
    pub fn rgb(self) -> (u8, u8, u8) {
        match self {
            Emotion::Happy => (0x4C, 0xAF, 0x50),
            Emotion::Sad => (0x4F, 0xC3, 0xF7),
            Emotion::Angry => (0xFF, 0x52, 0x52),
            Emotion::Neutral => (0xFF, 0xEB, 0x3B),
        }
    }

    pub fn mascot_message(self) -> &'static str {
        match self {
            Emotion::Happy => "You seem happy today! 🌈 That's wonderful!",
            Emotion::Sad => "It's okay to feel sad 💙 Let's do something fun together!",
            Emotion::Angry => "Feeling angry is normal ❤️ Let's take some deep breaths!",
            Emotion::Neutral => "How are you feeling today? ☀️ I'm here to help!",
        }
    }

    pub fn mascot_face(self) -> &'static str {
        match self {
            Emotion::Happy => "(^‿^)",
            Emotion::Sad => "(╥﹏╥)",
            Emotion::Angry => "(>_<)",
            Emotion::Neutral => "(•‿•)",
        }
    }

    pub fn guide(self) -> EmotionGuide {
        match self {
            Emotion::Happy => EmotionGuide {
                name: "Happy",
                description: "Happiness makes us feel light and energetic! It happens when good things occur or when we do things we love.",
                tips: [
                    "Share your happiness with others",
                    "Remember what made you happy",
                    "Do activities you enjoy",
                ],
            },
            Emotion::Sad => EmotionGuide {
                name: "Sad",
                description: "Sadness is a normal emotion that everyone feels sometimes. It helps us process difficult situations.",
                tips: [
                    "Talk to someone you trust",
                    "Do gentle activities like reading",
                    "Remember that sad feelings will pass",
                ],
            },
            Emotion::Angry => EmotionGuide {
                name: "Angry",
                description: "Anger shows us when something isn't fair or right. It's important to express anger in healthy ways.",
                tips: [
                    "Take deep breaths",
                    "Count to ten before reacting",
                    "Talk about what made you angry",
                ],
            },
            Emotion::Neutral => EmotionGuide {
                name: "Neutral",
                description: "Feeling neutral or calm is peaceful! It's a great time to think about what you want to do next.",
                tips: [
                    "Explore new activities",
                    "Check in with yourself",
                    "Enjoy the peaceful moment",
                ],
            },
        }
    }
}

impl From<String> for Emotion {
    fn from(label: String) -> Self {
        Emotion::from_label(&label)
    }
}

impl fmt::Display for Emotion {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.label())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn serializes_as_lowercase_label() {
        assert_eq!(serde_json::to_string(&Emotion::Angry).unwrap(), "\"angry\"");
        let parsed: Emotion = serde_json::from_str("\"sad\"").unwrap();
        assert_eq!(parsed, Emotion::Sad);
        let unknown: Emotion = serde_json::from_str("\"sleepy\"").unwrap();
        assert_eq!(unknown, Emotion::Neutral);
    }

    #[test]
    fn unknown_label_falls_back_to_neutral() {
        assert_eq!(Emotion::from_label("HAPPY"), Emotion::Happy);
        assert_eq!(Emotion::from_label("confused"), Emotion::Neutral);
        assert_eq!(Emotion::from_label(""), Emotion::Neutral);
    }

    #[test]
    fn chart_ordinal_ranks_happy_highest_and_angry_lowest() {
        assert_eq!(Emotion::Happy.chart_value(), 4.0);
        assert_eq!(Emotion::Neutral.chart_value(), 3.0);
        assert_eq!(Emotion::Sad.chart_value(), 2.0);
        assert_eq!(Emotion::Angry.chart_value(), 1.0);
    }

    #[test]
    fn neutral_has_no_keywords() {
        assert!(Emotion::Neutral.keywords().is_empty());
        assert_eq!(Emotion::Happy.keywords().len(), 12);
        assert_eq!(Emotion::Sad.keywords().len(), 10);
        assert_eq!(Emotion::Angry.keywords().len(), 8);
    }
}
