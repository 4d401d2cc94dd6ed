// Host-side tests for the welcome plan, menu state and session flags.

use site_core::*;
use std::time::Duration;

fn flags(seen_welcome: bool, seen_home_reveal: bool) -> SessionFlags {
    SessionFlags {
        seen_welcome,
        seen_home_reveal,
    }
}

#[test]
fn pages_without_home_only_get_the_background() {
    for f in [flags(false, false), flags(true, true)] {
        assert_eq!(WelcomePlan::decide(false, true, f), WelcomePlan::BackgroundOnly);
        assert_eq!(WelcomePlan::decide(false, false, f), WelcomePlan::BackgroundOnly);
    }
}

#[test]
fn home_without_hero_is_revealed_after_a_short_delay() {
    let plan = WelcomePlan::decide(true, false, flags(false, false));
    assert_eq!(
        plan,
        WelcomePlan::RevealHome {
            delay: Duration::from_millis(120)
        }
    );
    assert!(!plan.shows_hero());
    assert!(!plan.starts_orbit());
}

#[test]
fn first_visit_plays_the_full_sequence() {
    let plan = WelcomePlan::decide(true, true, SessionFlags::default());
    assert_eq!(plan, WelcomePlan::Play);
    assert!(plan.shows_hero());
    assert!(plan.starts_orbit());
}

#[test]
fn timeline_shows_then_hides_hero_then_reveals_home() {
    let steps = welcome_timeline();
    let order: Vec<WelcomeStep> = steps.iter().map(|(_, s)| *s).collect();
    assert_eq!(
        order,
        [
            WelcomeStep::ShowHero,
            WelcomeStep::HideHero,
            WelcomeStep::RevealHome
        ]
    );
    assert_eq!(steps[0].0, Duration::ZERO);
    assert_eq!(steps[1].0, Duration::from_millis(2500));
    assert_eq!(steps[2].0, Duration::from_millis(3700));
    assert!(steps.windows(2).all(|w| w[0].0 < w[1].0));
}

#[test]
fn later_visits_in_the_same_session_skip_the_hero() {
    let mut store = MemoryStore::new();
    assert_eq!(
        WelcomePlan::decide(true, true, SessionFlags::load(&store)),
        WelcomePlan::Play
    );

    // First visit marks the welcome as seen immediately...
    mark_welcome_seen(&mut store).unwrap();
    let plan = WelcomePlan::decide(true, true, SessionFlags::load(&store));
    assert_eq!(
        plan,
        WelcomePlan::Skip {
            suppress_home_animation: false
        }
    );
    assert!(!plan.shows_hero());
    assert!(plan.starts_orbit());

    // ...and the home reveal once it has run.
    mark_home_reveal_seen(&mut store).unwrap();
    assert_eq!(
        WelcomePlan::decide(true, true, SessionFlags::load(&store)),
        WelcomePlan::Skip {
            suppress_home_animation: true
        }
    );
}

#[test]
fn only_the_set_marker_counts_as_a_flag() {
    let mut store = MemoryStore::new();
    store.set(KEY_SEEN_WELCOME, "true").unwrap();
    store.set(KEY_SEEN_HOME_REVEAL, "1").unwrap();
    assert_eq!(SessionFlags::load(&store), flags(false, true));
}

#[test]
fn menu_button_toggles_and_everything_else_closes() {
    let mut menu = MenuState::default();
    assert!(!menu.open);
    assert!(menu.apply(MenuEvent::ButtonClick));
    assert!(!menu.apply(MenuEvent::ButtonClick));

    for close in [
        MenuEvent::BackdropClick,
        MenuEvent::NavLinkClick,
        MenuEvent::Escape,
        MenuEvent::LeftMobileLayout,
    ] {
        menu.apply(MenuEvent::ButtonClick);
        assert!(menu.open);
        assert!(!menu.apply(close), "{close:?} should close");
        // Closing an already closed menu is a no-op
        assert!(!menu.apply(close));
    }
}

#[test]
fn menu_aria_attributes_follow_state() {
    let mut menu = MenuState::default();
    assert_eq!((menu.aria_expanded(), menu.aria_label()), ("false", "Open menu"));
    menu.apply(MenuEvent::ButtonClick);
    assert_eq!((menu.aria_expanded(), menu.aria_label()), ("true", "Close menu"));
}

#[test]
fn only_escape_maps_to_a_menu_event() {
    assert_eq!(menu_event_for_key("Escape"), Some(MenuEvent::Escape));
    assert_eq!(menu_event_for_key("Enter"), None);
    assert_eq!(menu_event_for_key("esc"), None);
}
