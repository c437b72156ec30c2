use serde::{Deserialize, Serialize};
use std::str::FromStr;

use crate::error::AppError;

#[derive(Debug, Serialize, Deserialize, Clone, Copy, PartialEq, Eq)]
#[serde(rename_all = "lowercase")]
pub enum Route {
    Landing,
    Connections,
    Database,
}

impl Route {
    pub fn path(self) -> &'static str {
        match self {
            Route::Landing => "/",
            Route::Connections => "/connections",
            Route::Database => "/database",
        }
    }

    pub fn from_path(path: &str) -> Option<Self> {
        match path {
            "/" => Some(Route::Landing),
            "/connections" => Some(Route::Connections),
            "/database" => Some(Route::Database),
            _ => None,
        }
    }
}

impl FromStr for Route {
    type Err = AppError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        Route::from_path(s).ok_or_else(|| AppError::UnknownRoute(s.to_string()))
    }
}

#[derive(Debug, Serialize, Clone)]
#[serde(rename_all = "camelCase")]
pub struct LandingCard {
    pub route: Route,
    pub path: &'static str,
    pub icon: &'static str,
    pub title: &'static str,
    pub description: &'static str,
    pub blurb: &'static str,
    pub button: &'static str,
}

#[derive(Debug, Serialize, Clone)]
#[serde(rename_all = "camelCase")]
pub struct LandingView {
    pub title: &'static str,
    pub subtitle: &'static str,
    pub cards: Vec<LandingCard>,
    pub footer: &'static str,
}

pub fn landing_view() -> LandingView {
    LandingView {
        title: "DB Manager",
        subtitle: "Manage database connections and visualise their structure",
        cards: vec![
            LandingCard {
                route: Route::Connections,
                path: Route::Connections.path(),
                icon: "Network",
                title: "Connections",
                description: "Manage saved connections",
                blurb: "Browse and edit connections to PostgreSQL, MySQL and MongoDB",
                button: "Open connections",
            },
            LandingCard {
                route: Route::Database,
                path: Route::Database.path(),
                icon: "Table",
                title: "Database",
                description: "Table structure and contents",
                blurb: "Explore the database structure, tables and columns",
                button: "Open database",
            },
        ],
        // Display text only, nothing is encrypted.
        footer: "All connections are protected with encryption",
    }
}
