//! Mood-keyed activity catalogs and the step scripts behind them.
//!
//! Both tables are static. Only some catalog activities have a script; picking
//! one without a script yields [`ActivityError::NotFound`] and the caller goes
//! back to the catalog.

use crate::emotion::Emotion;

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Icon {
    Music,
    Palette,
    Heart,
    Gift,
    TreePine,
    Zap,
    Smile,
    Gamepad,
    Star,
}

impl Icon {
    pub fn glyph(self) -> &'static str {
        match self {
            Icon::Music => "♪",
            Icon::Palette => "✎",
            Icon::Heart => "♥",
            Icon::Gift => "✉",
            Icon::TreePine => "♣",
            Icon::Zap => "⚡",
            Icon::Smile => "☺",
            Icon::Gamepad => "◆",
            Icon::Star => "★",
        }
    }
}

#[derive(Debug, PartialEq, Eq)]
pub struct Activity {
    pub id: &'static str,
    pub title: &'static str,
    pub description: &'static str,
    pub icon: Icon,
}

#[derive(Debug, PartialEq, Eq)]
pub struct ActivityCatalog {
    pub mood: Emotion,
    pub title: &'static str,
    pub subtitle: &'static str,
    pub activities: [Activity; 4],
}

#[derive(Debug, PartialEq, Eq)]
pub struct ActivityScript {
    pub id: &'static str,
    pub title: &'static str,
    pub icon: Icon,
    pub steps: &'static [&'static str],
}

#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
pub enum ActivityError {
    #[error("Activity not found: {0}")]
    NotFound(String),
}

static HAPPY_CATALOG: ActivityCatalog = ActivityCatalog {
    mood: Emotion::Happy,
    title: "You're feeling great! 🌟",
    subtitle: "Let's celebrate with some fun activities!",
    activities: [
        Activity {
            id: "dance",
            title: "Dance Party",
            description: "Move to your favorite music!",
            icon: Icon::Music,
        },
        Activity {
            id: "draw-celebration",
            title: "Victory Drawing",
            description: "Draw what made you happy today!",
            icon: Icon::Palette,
        },
        Activity {
            id: "gratitude",
            title: "Gratitude List",
            description: "Write 3 things you're grateful for!",
            icon: Icon::Heart,
        },
        Activity {
            id: "share-joy",
            title: "Share the Joy",
            description: "Tell someone about your good day!",
            icon: Icon::Gift,
        },
    ],
};

static SAD_CATALOG: ActivityCatalog = ActivityCatalog {
    mood: Emotion::Sad,
    title: "It's okay to feel sad 💙",
    subtitle: "Let's do something gentle to help you feel better",
    activities: [
        Activity {
            id: "breathing",
            title: "Calm Breathing",
            description: "Take deep, slow breaths together",
            icon: Icon::TreePine,
        },
        Activity {
            id: "comfort-drawing",
            title: "Comfort Coloring",
            description: "Color a peaceful scene",
            icon: Icon::Palette,
        },
        Activity {
            id: "gentle-music",
            title: "Soothing Music",
            description: "Listen to calming melodies",
            icon: Icon::Music,
        },
        Activity {
            id: "write-feelings",
            title: "Feeling Words",
            description: "Write about what's in your heart",
            icon: Icon::Heart,
        },
    ],
};

static ANGRY_CATALOG: ActivityCatalog = ActivityCatalog {
    mood: Emotion::Angry,
    title: "Feeling angry is normal ❤️",
    subtitle: "Let's find healthy ways to express these feelings",
    activities: [
        Activity {
            id: "deep-breathing",
            title: "Power Breathing",
            description: "Breathe out the anger, breathe in calm",
            icon: Icon::TreePine,
        },
        Activity {
            id: "physical-release",
            title: "Energy Release",
            description: "Do some jumping jacks or stretches",
            icon: Icon::Zap,
        },
        Activity {
            id: "anger-drawing",
            title: "Express Art",
            description: "Draw or scribble your feelings away",
            icon: Icon::Palette,
        },
        Activity {
            id: "problem-solving",
            title: "Talk It Out",
            description: "Think about solutions together",
            icon: Icon::Smile,
        },
    ],
};

static NEUTRAL_CATALOG: ActivityCatalog = ActivityCatalog {
    mood: Emotion::Neutral,
    title: "How are you feeling? ☀️",
    subtitle: "Let's explore some fun activities together!",
    activities: [
        Activity {
            id: "mood-check",
            title: "Mood Explorer",
            description: "Discover how you're really feeling",
            icon: Icon::Heart,
        },
        Activity {
            id: "creative-time",
            title: "Creative Time",
            description: "Draw, color, or make something!",
            icon: Icon::Palette,
        },
        Activity {
            id: "mini-game",
            title: "Brain Games",
            description: "Play a fun puzzle or game",
            icon: Icon::Gamepad,
        },
        Activity {
            id: "mindful-moment",
            title: "Mindful Moment",
            description: "Take a peaceful break",
            icon: Icon::Star,
        },
    ],
};

static SCRIPTS: &[ActivityScript] = &[
    ActivityScript {
        id: "breathing",
        title: "Calm Breathing Exercise",
        icon: Icon::TreePine,
        steps: &[
            "Sit comfortably and relax your shoulders",
            "Breathe in slowly through your nose for 4 counts",
            "Hold your breath gently for 4 counts",
            "Breathe out slowly through your mouth for 6 counts",
            "Great job! You've completed the breathing exercise!",
        ],
    },
    ActivityScript {
        id: "dance",
        title: "Happy Dance Party",
        icon: Icon::Music,
        steps: &[
            "Stand up and find some space to move",
            "Start by moving your arms to the rhythm",
            "Add some foot steps - left, right, left, right",
            "Now add your whole body - dance however feels good!",
            "Amazing! You're a fantastic dancer!",
        ],
    },
    ActivityScript {
        id: "draw-celebration",
        title: "Victory Drawing",
        icon: Icon::Palette,
        steps: &[
            "Get some paper and your favorite drawing tools",
            "Think about what made you happy today",
            "Draw a big sun or rainbow to start",
            "Add yourself doing something you love",
            "Beautiful artwork! You're so creative!",
        ],
    },
    ActivityScript {
        id: "gratitude",
        title: "Gratitude Practice",
        icon: Icon::Heart,
        steps: &[
            "Think of someone who makes you smile",
            "Think of something fun you did recently",
            "Think of your favorite place to be",
            "Say \"Thank you\" for these good things in your life",
            "Wonderful! Gratitude makes our hearts happy!",
        ],
    },
    ActivityScript {
        id: "physical-release",
        title: "Energy Release",
        icon: Icon::Zap,
        steps: &[
            "Stand up tall with your feet apart",
            "Jump up and down 10 times",
            "Do 5 big arm circles forward, then backward",
            "Take 3 deep breaths and shake your whole body",
            "Excellent! You've released that energy in a healthy way!",
        ],
    },
    ActivityScript {
        id: "mini-game",
        title: "Brain Game",
        icon: Icon::Gamepad,
        steps: &[
            "Let's count backwards from 20 to 1",
            "Now name 5 things you can see around you",
            "Think of 3 animals that start with the letter \"B\"",
            "Great thinking! Your brain is amazing!",
            "You're so smart! Brain games are fun!",
        ],
    },
];

pub fn select_catalog(mood: Emotion) -> &'static ActivityCatalog {
    match mood {
        Emotion::Happy => &HAPPY_CATALOG,
        Emotion::Sad => &SAD_CATALOG,
        Emotion::Angry => &ANGRY_CATALOG,
        Emotion::Neutral => &NEUTRAL_CATALOG,
    }
}

pub fn select_script(activity_id: &str) -> Result<&'static ActivityScript, ActivityError> {
    SCRIPTS
        .iter()
        .find(|script| script.id == activity_id)
        .ok_or_else(|| ActivityError::NotFound(activity_id.to_string()))
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn every_mood_has_four_activities() {
        for mood in Emotion::ALL {
            let catalog = select_catalog(mood);
            assert_eq!(catalog.mood, mood);
            assert_eq!(catalog.activities.len(), 4);
        }
    }

    #[test]
    fn unknown_mood_label_gets_the_neutral_catalog() {
        assert_eq!(select_catalog(Emotion::from_label("grumpy")), &NEUTRAL_CATALOG);
        assert_eq!(select_catalog(Emotion::from_label("sad")), &SAD_CATALOG);
    }

    #[test]
    fn activity_ids_are_unique_across_catalogs() {
        let mut ids: Vec<&str> = Emotion::ALL
            .iter()
            .flat_map(|mood| select_catalog(*mood).activities.iter().map(|a| a.id))
            .collect();
        let total = ids.len();
        ids.sort_unstable();
        ids.dedup();
        assert_eq!(ids.len(), total);
    }

    #[test]
    fn known_script_has_its_steps() {
        let script = select_script("breathing").unwrap();
        assert_eq!(script.title, "Calm Breathing Exercise");
        assert_eq!(script.steps.len(), 5);
        assert_eq!(script.steps[0], "Sit comfortably and relax your shoulders");
    }

    #[test]
    fn catalog_activity_without_script_is_not_found() {
        assert_eq!(
            select_script("gentle-music"),
            Err(ActivityError::NotFound("gentle-music".to_string()))
        );
        assert!(select_script("").is_err());
    }

    #[test]
    fn every_script_is_offered_by_some_catalog() {
        for script in SCRIPTS {
            assert!(!script.steps.is_empty());
            let offered = Emotion::ALL
                .iter()
                .any(|mood| select_catalog(*mood).activities.iter().any(|a| a.id == script.id));
            assert!(offered, "{} is unreachable", script.id);
        }
    }
}
