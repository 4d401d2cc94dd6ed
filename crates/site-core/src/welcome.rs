use crate::constants::{HERO_HIDE_DELAY, HOME_ONLY_REVEAL_DELAY, HOME_REVEAL_DELAY};
use crate::session::SessionFlags;
use std::time::Duration;

/// What the page does on `load`.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum WelcomePlan {
    /// No `.home` section: just the background.
    BackgroundOnly,
    /// `.home` without a `.hero`: reveal home after a short delay.
    RevealHome { delay: Duration },
    /// Welcome already played this session: skip the hero.
    Skip { suppress_home_animation: bool },
    /// First visit: run the full [`welcome_timeline`].
    Play,
}

impl WelcomePlan {
    pub fn decide(has_home: bool, has_hero: bool, flags: SessionFlags) -> Self {
        if !has_home {
            return WelcomePlan::BackgroundOnly;
        }
        if !has_hero {
            return WelcomePlan::RevealHome {
                delay: HOME_ONLY_REVEAL_DELAY,
            };
        }
        if flags.seen_welcome {
            return WelcomePlan::Skip {
                suppress_home_animation: flags.seen_home_reveal,
            };
        }
        WelcomePlan::Play
    }

    #[inline]
    pub fn shows_hero(&self) -> bool {
        matches!(self, WelcomePlan::Play)
    }

    /// The orbit only exists on the home page proper.
    #[inline]
    pub fn starts_orbit(&self) -> bool {
        matches!(self, WelcomePlan::Play | WelcomePlan::Skip { .. })
    }
}

#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum WelcomeStep {
    /// Lock scrolling and fade the hero in.
    ShowHero,
    /// Start fading the hero out.
    HideHero,
    /// Remove the hero, reveal home, unlock scrolling, start the animations.
    RevealHome,
}

/// First-visit steps with their offsets from `load`, in firing order.
pub fn welcome_timeline() -> [(Duration, WelcomeStep); 3] {
    [
        (Duration::ZERO, WelcomeStep::ShowHero),
        (HERO_HIDE_DELAY, WelcomeStep::HideHero),
        (HOME_REVEAL_DELAY, WelcomeStep::RevealHome),
    ]
}
