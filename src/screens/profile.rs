//! Profile screen. Static.

use crate::config::FocusConfig;

/// A headline number on the profile card
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ProfileStat {
    pub value: &'static str,
    pub label: &'static str,
}

/// A settings menu row
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct MenuEntry {
    pub glyph: &'static str,
    pub label: &'static str,
    pub description: &'static str,
}

const STATS: &[ProfileStat] = &[
    ProfileStat { value: "4", label: "Meetings" },
    ProfileStat { value: "87%", label: "Adherence" },
    ProfileStat { value: "142", label: "Active days" },
];

const MENU: &[MenuEntry] = &[
    MenuEntry { glyph: "♪", label: "Notifications", description: "Reminders and alerts" },
    MenuEntry { glyph: "♥", label: "Partner", description: "Manage connection" },
    MenuEntry { glyph: "↺", label: "History", description: "Past meetings" },
    MenuEntry { glyph: "⛨", label: "Privacy", description: "Data and security" },
    MenuEntry { glyph: "☾", label: "Appearance", description: "App theme" },
    MenuEntry { glyph: "⚙", label: "Settings", description: "General preferences" },
];

#[derive(Debug, Clone)]
pub struct ProfileScreen {
    user_name: String,
    member_since: String,
}

impl ProfileScreen {
    pub fn new(config: &FocusConfig) -> Self {
        Self {
            user_name: config.user_name.clone(),
            member_since: config.member_since.clone(),
        }
    }

    pub fn user_name(&self) -> &str {
        &self.user_name
    }

    pub fn member_since(&self) -> String {
        format!("Since {}", self.member_since)
    }

    pub fn stats(&self) -> &'static [ProfileStat] {
        STATS
    }

    pub fn menu(&self) -> &'static [MenuEntry] {
        MENU
    }

    pub fn sign_out_label(&self) -> &'static str {
        "Sign out"
    }

    pub fn version(&self) -> String {
        format!("Focus First v{}", env!("CARGO_PKG_VERSION"))
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_static_content() {
        let profile = ProfileScreen::new(&FocusConfig::default());
        assert_eq!(profile.user_name(), "Edu");
        assert_eq!(profile.member_since(), "Since January 2026");
        assert_eq!(profile.stats().len(), 3);
        assert_eq!(profile.menu().len(), 6);
        assert!(profile.version().starts_with("Focus First v"));
    }
}
