use crate::emotion::Emotion;

pub const NEUTRAL_CONFIDENCE: f64 = 0.6;
pub const MAX_CONFIDENCE: f64 = 0.95;

#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Analysis {
    pub emotion: Emotion,
    pub confidence: f64,
}

/// Number of distinct keywords of `emotion` that appear anywhere in `lowered`.
/// A keyword repeated in the text still counts once.
fn keyword_hits(lowered: &str, emotion: Emotion) -> usize {
    emotion
        .keywords()
        .iter()
        .filter(|word| lowered.contains(*word))
        .count()
}

fn confidence_for(hits: usize) -> f64 {
    // (7 + n) / 10 is 0.7 + 0.1n without the float drift
    let raw = (7 + hits) as f64 / 10.0;
    raw.min(MAX_CONFIDENCE)
}

/// Tags `text` with the dominant emotion. Ties resolve happy, then sad, then angry.
pub fn classify(text: &str) -> Analysis {
    let lowered = text.to_lowercase();

    let happy = keyword_hits(&lowered, Emotion::Happy);
    let sad = keyword_hits(&lowered, Emotion::Sad);
    let angry = keyword_hits(&lowered, Emotion::Angry);
    let max = happy.max(sad).max(angry);

    if max == 0 {
        return Analysis {
            emotion: Emotion::Neutral,
            confidence: NEUTRAL_CONFIDENCE,
        };
    }

    let emotion = if happy == max {
        Emotion::Happy
    } else if sad == max {
        Emotion::Sad
    } else {
        Emotion::Angry
    };

    Analysis {
        emotion,
        confidence: confidence_for(max),
    }
}

/// A text paired with its classification. The only way to build one is to
/// classify the text, so the pair always agrees.
#[derive(Debug, Clone, PartialEq)]
pub struct Classified {
    text: String,
    analysis: Analysis,
}

impl Classified {
    pub fn new(text: String) -> Self {
        let analysis = classify(&text);
        Classified { text, analysis }
    }

    pub fn text(&self) -> &str {
        &self.text
    }

    pub fn analysis(&self) -> Analysis {
        self.analysis
    }

    pub fn into_parts(self) -> (String, Analysis) {
        (self.text, self.analysis)
    }
}
