//! Page navigation for the monitor shell.
//!
//! # Pages
//!
//! - [`Page::Dashboard`]: Barn summary with curing progress ring and a 2x2 gauge grid
//!   (temperature, humidity, air flow, battery)
//! - [`Page::BarnDetail`]: Barn overview, current conditions and manual override controls

/// Available pages in the monitor.
#[derive(Clone, Copy, PartialEq, Eq, Default, Debug)]
pub enum Page {
    /// Main barn dashboard.
    #[default]
    Dashboard,

    /// Detail view of a single barn.
    BarnDetail,
}

impl Page {
    /// Cycle to the next page.
    #[inline]
    pub const fn next(self) -> Self {
        match self {
            Self::Dashboard => Self::BarnDetail,
            Self::BarnDetail => Self::Dashboard,
        }
    }

    /// Header title for the page.
    pub const fn title(self) -> &'static str {
        match self {
            Self::Dashboard => "Barn Dashboard",
            Self::BarnDetail => "Barn Detail - Plot 7A",
        }
    }

    /// Short name used in file names and logs.
    pub const fn slug(self) -> &'static str {
        match self {
            Self::Dashboard => "dashboard",
            Self::BarnDetail => "barn-detail",
        }
    }
}
