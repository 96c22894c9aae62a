pub mod gate;

pub use gate::{can_access, navigation_for, NavItem, NavSection, RouteRequirement, NAV_ITEMS};
