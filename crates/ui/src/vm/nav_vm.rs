/// Scroll offset past which the navigation bar switches to its solid style.
pub const SCROLL_THRESHOLD_PX: f64 = 50.0;

/// Page sections reachable from the navigation.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum Section {
    About,
    Packages,
    Process,
    Contact,
}

impl Section {
    /// DOM id of the section element.
    #[must_use]
    pub fn id(self) -> &'static str {
        match self {
            Section::About => "about",
            Section::Packages => "packages",
            Section::Process => "process",
            Section::Contact => "contact",
        }
    }
}

#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub struct NavLinkVm {
    pub label: &'static str,
    pub section: Section,
}

/// Menu entries, in display order. "Services" lands on the packages.
pub const NAV_LINKS: [NavLinkVm; 4] = [
    NavLinkVm { label: "About", section: Section::About },
    NavLinkVm { label: "Services", section: Section::Packages },
    NavLinkVm { label: "Process", section: Section::Process },
    NavLinkVm { label: "Contact", section: Section::Contact },
];

/// Open/closed state of the small-screen menu.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq)]
pub struct NavMenuState {
    open: bool,
}

impl NavMenuState {
    #[must_use]
    pub fn is_open(self) -> bool {
        self.open
    }

    pub fn toggle(&mut self) {
        self.open = !self.open;
    }

    /// Following a link always closes the menu.
    pub fn navigate(&mut self, section: Section) -> Section {
        self.open = false;
        section
    }
}

#[must_use]
pub fn is_scrolled(offset: f64) -> bool {
    offset > SCROLL_THRESHOLD_PX
}

/// Class names for the navigation bar in its current scroll state.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub struct NavStyle {
    pub bar: &'static str,
    pub links: &'static str,
    pub brand: &'static str,
}

#[must_use]
pub fn nav_style(scrolled: bool) -> NavStyle {
    if scrolled {
        NavStyle {
            bar: "nav nav--scrolled",
            links: "nav__links nav__links--dark",
            brand: "nav__brand nav__brand--dark",
        }
    } else {
        NavStyle {
            bar: "nav",
            links: "nav__links",
            brand: "nav__brand",
        }
    }
}
