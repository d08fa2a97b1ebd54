use std::fmt;

use serde::{Deserialize, Serialize};

/// The five views of the site. Exactly one is current at any time.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Page {
    #[default]
    Home,
    About,
    Projects,
    Login,
    Dashboard,
}

impl Page {
    pub const ALL: [Page; 5] = [
        Page::Home,
        Page::About,
        Page::Projects,
        Page::Login,
        Page::Dashboard,
    ];

    pub fn path(&self) -> &'static str {
        match self {
            Page::Home => "/",
            Page::About => "/about",
            Page::Projects => "/projects",
            Page::Login => "/login",
            Page::Dashboard => "/dashboard",
        }
    }

    pub fn label(&self) -> &'static str {
        match self {
            Page::Home => "Home",
            Page::About => "About & Resume",
            Page::Projects => "Projects & Contact",
            Page::Login => "Client Login",
            Page::Dashboard => "Dashboard",
        }
    }

    pub fn title(&self) -> &'static str {
        match self {
            Page::Home => "Home",
            Page::About => "About Me",
            Page::Projects => "Projects",
            Page::Login => "Client Portal",
            Page::Dashboard => "Dashboard",
        }
    }

    /// Resolves a location pathname to a page by its first segment.
    /// Anything unrecognised resolves to [`Page::Home`].
    pub fn from_path(path: &str) -> Self {
        let first = path
            .trim_start_matches('/')
            .split(['/', '?', '#'])
            .next()
            .unwrap_or_default();
        match first {
            "about" => Page::About,
            "projects" => Page::Projects,
            "login" => Page::Login,
            "dashboard" => Page::Dashboard,
            _ => Page::Home,
        }
    }

    pub fn topic(&self) -> Topic {
        topic_for(*self)
    }
}

/// Subject the career tip is generated about.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default)]
pub enum Topic {
    #[default]
    GeneralSoftwareEngineering,
    ProfessionalGrowth,
    InnovativeProjectBuilding,
    Cybersecurity,
}

impl Topic {
    pub fn as_str(&self) -> &'static str {
        match self {
            Topic::GeneralSoftwareEngineering => "general software engineering",
            Topic::ProfessionalGrowth => "professional growth",
            Topic::InnovativeProjectBuilding => "innovative project building",
            Topic::Cybersecurity => "cybersecurity",
        }
    }
}

impl fmt::Display for Topic {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

pub fn topic_for(page: Page) -> Topic {
    match page {
        Page::About => Topic::ProfessionalGrowth,
        Page::Projects => Topic::InnovativeProjectBuilding,
        Page::Login => Topic::Cybersecurity,
        Page::Home | Page::Dashboard => Topic::GeneralSoftwareEngineering,
    }
}

/// Decorative client-portal state. Flipped by the login form without any
/// credential check; it gates nothing but which view the dashboard route shows.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum Session {
    #[default]
    Anonymous,
    Authenticated,
}

impl Session {
    pub fn is_authenticated(&self) -> bool {
        matches!(self, Session::Authenticated)
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Theme {
    #[default]
    Dark,
    Light,
}

impl Theme {
    pub fn toggled(self) -> Self {
        match self {
            Theme::Dark => Theme::Light,
            Theme::Light => Theme::Dark,
        }
    }

    pub fn is_dark(&self) -> bool {
        matches!(self, Theme::Dark)
    }

    pub fn toggle_title(&self) -> &'static str {
        match self {
            Theme::Dark => "Switch to Light Mode",
            Theme::Light => "Switch to Dark Mode",
        }
    }
}
