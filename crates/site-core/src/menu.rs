/// Inputs that can change the mobile menu.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum MenuEvent {
    ButtonClick,
    BackdropClick,
    NavLinkClick,
    Escape,
    /// The mobile media query stopped matching.
    LeftMobileLayout,
}

#[derive(Clone, Copy, Debug, Default, PartialEq, Eq)]
pub struct MenuState {
    pub open: bool,
}

impl MenuState {
    /// Apply an event; returns the new open state.
    pub fn apply(&mut self, event: MenuEvent) -> bool {
        self.open = match event {
            MenuEvent::ButtonClick => !self.open,
            MenuEvent::BackdropClick
            | MenuEvent::NavLinkClick
            | MenuEvent::Escape
            | MenuEvent::LeftMobileLayout => false,
        };
        self.open
    }

    #[inline]
    pub fn aria_expanded(&self) -> &'static str {
        if self.open {
            "true"
        } else {
            "false"
        }
    }

    #[inline]
    pub fn aria_label(&self) -> &'static str {
        if self.open {
            "Close menu"
        } else {
            "Open menu"
        }
    }
}

#[inline]
pub fn menu_event_for_key(key: &str) -> Option<MenuEvent> {
    match key {
        "Escape" => Some(MenuEvent::Escape),
        _ => None,
    }
}
