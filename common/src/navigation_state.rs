use crate::{Screen, ScreenParams, Section};
use serde::{Deserialize, Serialize};

/// A screen together with the parameters it was opened with.
#[derive(Debug, Serialize, Deserialize, Eq, PartialEq, Clone)]
pub struct Route {
    pub screen: Screen,
    #[serde(default)]
    pub params: ScreenParams,
}

impl Route {
    pub fn new(screen: Screen, params: ScreenParams) -> Self {
        Self { screen, params }
    }

    pub fn bare(screen: Screen) -> Self {
        Self::new(screen, ScreenParams::default())
    }
}

/// The active section and its drill-down history, root first.
#[derive(Debug, Serialize, Deserialize, Eq, PartialEq, Clone)]
pub struct NavigationState {
    pub section: Section,
    pub routes: Vec<Route>,
}

impl NavigationState {
    pub fn new(section: Section, routes: Vec<Route>) -> Self {
        Self { section, routes }
    }

    /// The deepest route, i.e. the screen that is shown.
    pub fn current(&self) -> Option<&Route> {
        self.routes.last()
    }

    pub fn screens(&self) -> Vec<Screen> {
        self.routes.iter().map(|route| route.screen).collect()
    }
}
