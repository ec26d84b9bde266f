use crate::activities::ActivityScript;
use tracing::info;

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Playback {
    Step(usize),
    Completed,
}

/// Playback of one activity script: one step per `advance`, forward only.
#[derive(Debug)]
pub struct GuidedActivity {
    script: &'static ActivityScript,
    state: Playback,
}

impl GuidedActivity {
    pub fn start(script: &'static ActivityScript) -> Self {
        let state = if script.steps.is_empty() {
            Playback::Completed
        } else {
            Playback::Step(0)
        };
        GuidedActivity { script, state }
    }

    pub fn script(&self) -> &'static ActivityScript {
        self.script
    }

    pub fn state(&self) -> Playback {
        self.state
    }

    pub fn is_completed(&self) -> bool {
        self.state == Playback::Completed
    }

    /// Moves to the next step, or to `Completed` from the last one.
    /// Does nothing once completed.
    pub fn advance(&mut self) -> Playback {
        if let Playback::Step(i) = self.state {
            self.state = if i + 1 < self.script.steps.len() {
                Playback::Step(i + 1)
            } else {
                Playback::Completed
            };
        }
        self.state
    }

    /// Ends playback; control goes back to activity selection.
    pub fn reset(self) {
        info!(
            activity = self.script.id,
            completed = self.is_completed(),
            "guided activity closed"
        );
    }

    pub fn current_step(&self) -> Option<&'static str> {
        match self.state {
            Playback::Step(i) => self.script.steps.get(i).copied(),
            Playback::Completed => None,
        }
    }

    pub fn step_label(&self) -> String {
        match self.state {
            Playback::Step(i) => format!("Step {} of {}", i + 1, self.script.steps.len()),
            Playback::Completed => "Completed".to_string(),
        }
    }

    pub fn progress_percent(&self) -> u16 {
        let total = self.script.steps.len().max(1);
        let done = match self.state {
            Playback::Step(i) => i + 1,
            Playback::Completed => total,
        };
        ((done as f64 / total as f64) * 100.0).round() as u16
    }

    pub fn action_label(&self) -> &'static str {
        match self.state {
            Playback::Step(i) if i + 1 < self.script.steps.len() => "Next Step",
            Playback::Step(_) => "Finish Activity",
            Playback::Completed => "Try Another Activity",
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::activities::{select_script, Icon};

    static TWO_STEPS: ActivityScript = ActivityScript {
        id: "two",
        title: "Two",
        icon: Icon::Star,
        steps: &["one", "two"],
    };

    #[test]
    fn starts_at_the_first_step() {
        let playback = GuidedActivity::start(&TWO_STEPS);
        assert_eq!(playback.state(), Playback::Step(0));
        assert_eq!(playback.current_step(), Some("one"));
        assert_eq!(playback.step_label(), "Step 1 of 2");
        assert_eq!(playback.action_label(), "Next Step");
    }

    #[test]
    fn completes_on_the_kth_advance_and_not_before() {
        let script = select_script("dance").unwrap();
        let k = script.steps.len();
        let mut playback = GuidedActivity::start(script);

        for i in 1..k {
            assert_eq!(playback.advance(), Playback::Step(i));
            assert!(!playback.is_completed());
        }
        assert_eq!(playback.advance(), Playback::Completed);
        assert!(playback.is_completed());
    }

    #[test]
    fn advancing_a_completed_playback_is_a_no_op() {
        let mut playback = GuidedActivity::start(&TWO_STEPS);
        playback.advance();
        playback.advance();
        assert_eq!(playback.advance(), Playback::Completed);
        assert_eq!(playback.current_step(), None);
        assert_eq!(playback.action_label(), "Try Another Activity");
        playback.reset();
    }

    #[test]
    fn last_step_offers_to_finish() {
        let mut playback = GuidedActivity::start(&TWO_STEPS);
        playback.advance();
        assert_eq!(playback.action_label(), "Finish Activity");
        assert_eq!(playback.progress_percent(), 100);
    }

    #[test]
    fn progress_counts_the_current_step() {
        let script = select_script("gratitude").unwrap();
        let mut playback = GuidedActivity::start(script);
        assert_eq!(playback.progress_percent(), 20);
        playback.advance();
        playback.advance();
        assert_eq!(playback.progress_percent(), 60);
    }
}
