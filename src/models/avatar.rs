use serde::Deserialize;

#[derive(Clone, Debug, PartialEq, Eq, Deserialize)]
pub struct Avatar {
    pub pk: u64,
    pub avatar_url: String,
    #[serde(default)]
    pub active: bool,
}

/// The two avatar lists shown by the picker, one per tab.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum AvatarKind {
    Mine,
    Preset,
}

impl AvatarKind {
    pub fn tab_id(self) -> &'static str {
        match self {
            AvatarKind::Mine => "my-avatars-tab",
            AvatarKind::Preset => "preset-avatars-tab",
        }
    }

    pub fn pane_id(self) -> &'static str {
        match self {
            AvatarKind::Mine => "my-avatars",
            AvatarKind::Preset => "preset-avatars",
        }
    }

    pub fn label(self) -> &'static str {
        match self {
            AvatarKind::Mine => "My avatars",
            AvatarKind::Preset => "Preset avatars",
        }
    }

    pub fn parse(value: &str) -> Option<Self> {
        match value.trim().to_ascii_lowercase().as_str() {
            "mine" | "my" | "my-avatars" => Some(AvatarKind::Mine),
            "preset" | "presets" | "preset-avatars" => Some(AvatarKind::Preset),
            _ => None,
        }
    }
}
