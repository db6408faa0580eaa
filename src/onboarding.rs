use log::info;

use crate::catalog::Tone;

/// Extra panel rendered under a slide's feature list.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum SlideExtra {
    /// Value/label rows.
    Stats(&'static str, &'static [(&'static str, &'static str)]),
    Tags(&'static str, &'static [&'static str]),
    /// Value/label tiles laid out side by side.
    Impact(&'static str, &'static [(&'static str, &'static str)]),
    None,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct OnboardingSlide {
    pub id: u8,
    pub title: &'static str,
    pub subtitle: &'static str,
    pub description: &'static str,
    pub icon: &'static str,
    pub tone: Tone,
    pub features: &'static [&'static str],
    pub extra: SlideExtra,
}

pub static SLIDES: [OnboardingSlide; 4] = [
    OnboardingSlide {
        id: 1,
        title: "Water Crisis Challenge",
        subtitle: "Understanding the Problem",
        description: "India faces critical groundwater depletion with 60% of districts experiencing falling water levels.",
        icon: "dialog-warning-symbolic",
        tone: Tone::Red,
        features: &[
            "89% of groundwater used for irrigation",
            "40% of population affected by water scarcity",
            "21 major cities running out of groundwater",
            "Traditional monitoring lacks real-time insights",
        ],
        extra: SlideExtra::Stats(
            "Critical Statistics:",
            &[("25cm/year", "Average depletion rate"), ("₹2.5L Cr", "Annual economic impact")],
        ),
    },
    OnboardingSlide {
        id: 2,
        title: "HydroSpatial Solution",
        subtitle: "AI-Powered Water Management",
        description: "Revolutionary platform combining AI, blockchain, and IoT for intelligent water resource management.",
        icon: "applications-science-symbolic",
        tone: Tone::Blue,
        features: &[
            "Real-time DWLR data from 2,847+ stations",
            "AI-driven demand vs supply analysis",
            "Predictive modeling for water forecasts",
            "Automated pump control & alerts",
        ],
        extra: SlideExtra::Tags("Powered by:", &["AI/ML", "Blockchain", "IoT", "AR/VR"]),
    },
    OnboardingSlide {
        id: 3,
        title: "Community Impact",
        subtitle: "Empowering Local Communities",
        description: "Gamified platform bringing transparency and encouraging community participation in water conservation.",
        icon: "system-users-symbolic",
        tone: Tone::Green,
        features: &[
            "Village-wise water budget tracking",
            "Conservation leaderboards & rewards",
            "Blockchain-based transparent ledger",
            "Multilingual support for rural users",
        ],
        extra: SlideExtra::Impact(
            "Expected Impact:",
            &[("30%", "Water Savings"), ("50%", "Efficiency Gain")],
        ),
    },
    OnboardingSlide {
        id: 4,
        title: "Key Features",
        subtitle: "Complete Water Ecosystem",
        description: "Comprehensive suite of tools for farmers, officials, and communities to manage water resources effectively.",
        icon: "security-high-symbolic",
        tone: Tone::Purple,
        features: &[
            "AR/3D aquifer visualization",
            "IoT water quality monitoring",
            "Climate resilience insights",
            "Carbon footprint tracking",
        ],
        extra: SlideExtra::None,
    },
];

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Step {
    Slide(usize),
    Finished,
}

/// Forward-only walk over the slides. `Finished` is terminal.
#[derive(Debug, Clone)]
pub struct Navigator {
    slides: &'static [OnboardingSlide],
    step: Step,
}

impl Navigator {
    pub fn new(slides: &'static [OnboardingSlide]) -> Self {
        let step = if slides.is_empty() { Step::Finished } else { Step::Slide(0) };
        Self { slides, step }
    }

    pub fn is_finished(&self) -> bool {
        self.step == Step::Finished
    }

    pub fn current(&self) -> Option<&'static OnboardingSlide> {
        match self.step {
            Step::Slide(i) => self.slides.get(i),
            Step::Finished => None,
        }
    }

    pub fn is_last(&self) -> bool {
        matches!(self.step, Step::Slide(i) if i + 1 == self.slides.len())
    }

    pub fn advance(&mut self) -> Step {
        let previous = self.step;
        self.step = match previous {
            Step::Slide(i) if i + 1 < self.slides.len() => Step::Slide(i + 1),
            _ => Step::Finished,
        };
        if completes(previous, self.step) {
            info!("Onboarding completed");
        }
        self.step
    }

    pub fn skip(&mut self) -> Step {
        if let Step::Slide(i) = self.step {
            info!("Onboarding skipped at slide {}", i + 1);
        }
        self.step = Step::Finished;
        self.step
    }

    /// Footer counter, e.g. "2 of 4".
    pub fn counter_label(&self) -> Option<String> {
        match self.step {
            Step::Slide(i) => Some(format!("{} of {}", i + 1, self.slides.len())),
            Step::Finished => None,
        }
    }

    pub fn button_label(&self) -> &'static str {
        if self.is_last() { "Get Started" } else { "Next" }
    }

    /// `(filled, current)` per progress dot.
    pub fn dots(&self) -> Vec<(bool, bool)> {
        let current = match self.step {
            Step::Slide(i) => Some(i),
            Step::Finished => None,
        };
        (0..self.slides.len())
            .map(|i| match current {
                Some(c) => (i <= c, i == c),
                None => (true, false),
            })
            .collect()
    }
}

fn completes(from: Step, to: Step) -> bool {
    matches!((from, to), (Step::Slide(_), Step::Finished))
}

impl Default for Navigator {
    fn default() -> Self {
        Self::new(&SLIDES)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn starts_on_first_slide() {
        let nav = Navigator::default();
        assert!(!nav.is_finished());
        assert_eq!(nav.current().map(|s| s.id), Some(1));
        assert_eq!(nav.counter_label().as_deref(), Some("1 of 4"));
        assert_eq!(nav.button_label(), "Next");
    }

    #[test]
    fn advance_on_last_slide_finishes() {
        let mut nav = Navigator::default();
        assert_eq!(nav.advance(), Step::Slide(1));
        assert_eq!(nav.advance(), Step::Slide(2));
        assert_eq!(nav.advance(), Step::Slide(3));
        assert!(nav.is_last());
        assert_eq!(nav.button_label(), "Get Started");
        assert_eq!(nav.advance(), Step::Finished);
        assert!(nav.current().is_none());
        assert_eq!(nav.advance(), Step::Finished);
    }

    #[test]
    fn completion_is_reported_only_on_leaving_the_last_slide() {
        assert!(completes(Step::Slide(3), Step::Finished));
        assert!(!completes(Step::Slide(0), Step::Slide(1)));
        assert!(!completes(Step::Finished, Step::Finished));

        let mut nav = Navigator::default();
        nav.skip();
        for _ in 0..3 {
            assert_eq!(nav.advance(), Step::Finished);
            assert!(nav.current().is_none());
        }
    }

    #[test]
    fn skip_finishes_from_any_slide() {
        let mut nav = Navigator::default();
        nav.advance();
        assert_eq!(nav.skip(), Step::Finished);
        assert!(nav.is_finished());
        assert!(nav.counter_label().is_none());
    }

    #[test]
    fn empty_catalog_is_already_finished() {
        static NONE: [OnboardingSlide; 0] = [];
        let nav = Navigator::new(&NONE);
        assert!(nav.is_finished());
        assert!(!nav.is_last());
    }

    #[test]
    fn dots_fill_up_to_current() {
        let mut nav = Navigator::default();
        nav.advance();
        assert_eq!(
            nav.dots(),
            vec![(true, false), (true, true), (false, false), (false, false)]
        );
    }

    #[test]
    fn every_slide_lists_four_features() {
        assert!(SLIDES.iter().all(|s| s.features.len() == 4));
        assert_eq!(SLIDES[3].extra, SlideExtra::None);
    }
}
