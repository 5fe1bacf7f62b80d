mod nav_vm;
mod package_vm;
mod quiz_vm;
mod site_vm;

pub use nav_vm::{NAV_LINKS, NavLinkVm, NavMenuState, NavStyle, SCROLL_THRESHOLD_PX, Section, is_scrolled, nav_style};
pub use package_vm::{PackageCardVm, map_package_card, map_package_cards, package_interest_options};
pub use quiz_vm::{QuizIntent, QuizOptionVm, QuizOutcome, QuizVm, key_intent, start_quiz};
pub use site_vm::copyright_line;
