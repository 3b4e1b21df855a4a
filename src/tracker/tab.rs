//! Bottom navigation tabs

/// Top-level screens, in tab-bar order
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default)]
pub enum Tab {
    #[default]
    Today,
    Vision,
    Ritual,
    Profile,
}

impl Tab {
    pub const ALL: [Tab; 4] = [Tab::Today, Tab::Vision, Tab::Ritual, Tab::Profile];

    pub fn label(&self) -> &'static str {
        match self {
            Tab::Today => "Today",
            Tab::Vision => "Vision",
            Tab::Ritual => "Ritual",
            Tab::Profile => "Profile",
        }
    }

    pub fn index(&self) -> usize {
        match self {
            Tab::Today => 0,
            Tab::Vision => 1,
            Tab::Ritual => 2,
            Tab::Profile => 3,
        }
    }

    /// Tab at a 0-based bar position
    pub fn from_index(index: usize) -> Option<Tab> {
        Self::ALL.get(index).copied()
    }

    pub fn next(&self) -> Tab {
        Self::ALL[(self.index() + 1) % Self::ALL.len()]
    }

    pub fn previous(&self) -> Tab {
        Self::ALL[(self.index() + Self::ALL.len() - 1) % Self::ALL.len()]
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_cycle_wraps() {
        assert_eq!(Tab::Profile.next(), Tab::Today);
        assert_eq!(Tab::Today.previous(), Tab::Profile);
        assert_eq!(Tab::Vision.next(), Tab::Ritual);
    }

    #[test]
    fn test_index_roundtrip() {
        for tab in Tab::ALL {
            assert_eq!(Tab::from_index(tab.index()), Some(tab));
        }
        assert_eq!(Tab::from_index(4), None);
    }
}
