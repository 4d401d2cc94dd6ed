// DOM hooks the page markup must provide.

// Background canvas
pub const BG_CANVAS_ID: &str = "bg";
pub const DATA_STARTED: &str = "started"; // dataset key guarding a second start

// Orbit
pub const ORBIT_ID: &str = "orbit";
pub const ORBIT_SCENE_ID: &str = "orbitScene";
pub const ORBIT_ITEM_CLASS: &str = "orbit-item";

// Welcome sequence
pub const HERO_SELECTOR: &str = ".hero";
pub const HOME_SELECTOR: &str = ".home";

// Menu
pub const MENU_BUTTON_ID: &str = "hamburger";
pub const NAV_ID: &str = "globalNav";
pub const NAV_BACKDROP_ID: &str = "navBackdrop";

// Info list
pub const INFO_LIST_SELECTOR: &str = ".info-list";
pub const INFO_ITEM_SELECTOR: &str = ".info-item";
pub const INFO_PAGINATION_SELECTOR: &str = ".info-pagination";
pub const INFO_SYNC_LIST_SELECTOR: &str = ".info-list[data-info-source]";
pub const INFO_SOURCE_ATTR: &str = "data-info-source";
pub const INFO_SYNC_ITEM_SELECTOR: &str = ".info-list .info-item";

// Shared state classes
pub const CLASS_VISIBLE: &str = "is-visible";
pub const CLASS_HIDDEN: &str = "is-hidden";
pub const CLASS_LOCKED: &str = "is-locked";
pub const CLASS_WELCOME_ACTIVE: &str = "welcome-active";
pub const CLASS_HOME_NO_ANIM: &str = "home-no-anim";
pub const CLASS_MENU_OPEN: &str = "menu-open";
pub const CLASS_FIRST_VISIBLE: &str = "is-first-visible";
