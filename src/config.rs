//! Page configuration read from the host element's `data-*` attributes.

use thiserror::Error;
use web_sys::Element;

use crate::models::AvatarKind;

pub const DEFAULT_MOUNT_SELECTOR: &str = "#avatar-page";
pub const CSRF_COOKIE: &str = "csrftoken";

const DEFAULT_AVATARS_ENDPOINT: &str = "/api/v0.1/avatars";
const DEFAULT_ACTIVATE_ENDPOINT: &str = "/avatar/activate";
const DEFAULT_SELECT_PRESET_ENDPOINT: &str = "/avatar/select-preset";

#[derive(Debug, Error, PartialEq, Eq)]
pub enum ConfigError {
    #[error("missing data-profile-id on the avatar page element")]
    MissingProfileId,
    #[error("invalid profile id {0:?}")]
    InvalidProfileId(String),
    #[error("unknown initial tab {0:?}")]
    UnknownTab(String),
}

#[derive(Clone, Debug, PartialEq, Eq)]
pub struct Endpoints {
    pub avatars: String,
    pub activate: String,
    pub select_preset: String,
}

impl Default for Endpoints {
    fn default() -> Self {
        Self {
            avatars: DEFAULT_AVATARS_ENDPOINT.to_string(),
            activate: DEFAULT_ACTIVATE_ENDPOINT.to_string(),
            select_preset: DEFAULT_SELECT_PRESET_ENDPOINT.to_string(),
        }
    }
}

impl Endpoints {
    pub fn my_avatars_url(&self, profile_id: u64) -> String {
        format!("{}?profile={}", self.avatars, profile_id)
    }

    pub fn preset_avatars_url(&self) -> String {
        format!("{}?recommended_by_staff=True", self.avatars)
    }
}

#[derive(Clone, Debug, PartialEq, Eq)]
pub struct PageConfig {
    pub profile_id: u64,
    pub csrf_token: String,
    pub endpoints: Endpoints,
    pub initial_tab: AvatarKind,
}

impl PageConfig {
    /// Builds the configuration from an attribute lookup. `cookies` is the raw
    /// `document.cookie` string, used when the element carries no CSRF token.
    pub fn from_attributes<F>(attr: F, cookies: Option<&str>) -> Result<Self, ConfigError>
    where
        F: Fn(&str) -> Option<String>,
    {
        let raw_profile = non_empty(attr("data-profile-id")).ok_or(ConfigError::MissingProfileId)?;
        let profile_id = raw_profile
            .trim()
            .parse::<u64>()
            .map_err(|_| ConfigError::InvalidProfileId(raw_profile.clone()))?;

        let csrf_token = non_empty(attr("data-csrf-token"))
            .or_else(|| cookies.and_then(|c| cookie_value(c, CSRF_COOKIE)))
            .unwrap_or_default();
        if csrf_token.is_empty() {
            log::warn!("no CSRF token found, avatar selection will likely be rejected");
        }

        let defaults = Endpoints::default();
        let endpoints = Endpoints {
            avatars: non_empty(attr("data-avatars-endpoint")).unwrap_or(defaults.avatars),
            activate: non_empty(attr("data-activate-endpoint")).unwrap_or(defaults.activate),
            select_preset: non_empty(attr("data-select-preset-endpoint"))
                .unwrap_or(defaults.select_preset),
        };

        let initial_tab = match non_empty(attr("data-initial-tab")) {
            Some(tab) => AvatarKind::parse(&tab).ok_or(ConfigError::UnknownTab(tab))?,
            None => AvatarKind::Mine,
        };

        Ok(Self {
            profile_id,
            csrf_token,
            endpoints,
            initial_tab,
        })
    }

    pub fn from_element(element: &Element, cookies: Option<&str>) -> Result<Self, ConfigError> {
        Self::from_attributes(|name| element.get_attribute(name), cookies)
    }
}

fn non_empty(value: Option<String>) -> Option<String> {
    value.filter(|v| !v.trim().is_empty())
}

/// Looks up one cookie in a `name=value; name2=value2` string.
pub fn cookie_value(cookies: &str, name: &str) -> Option<String> {
    cookies
        .split(';')
        .filter_map(|pair| pair.trim().split_once('='))
        .find(|(key, _)| *key == name)
        .map(|(_, value)| value.to_string())
        .filter(|value| !value.is_empty())
}
