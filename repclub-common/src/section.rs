use std::fmt;

/// Which panel of the storefront is visible
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default)]
pub enum Section {
    #[default]
    Home,
    Rep,
    Patch,
    Books,
    Cart,
}

impl Section {
    /// All sections in tab-strip order.
    pub const ALL: [Section; 5] = [
        Section::Home,
        Section::Rep,
        Section::Patch,
        Section::Books,
        Section::Cart,
    ];

    /// Stable lowercase identifier, used as the render key.
    pub fn id(&self) -> &'static str {
        match self {
            Section::Home => "home",
            Section::Rep => "rep",
            Section::Patch => "patch",
            Section::Books => "books",
            Section::Cart => "cart",
        }
    }

    pub fn label(&self) -> &'static str {
        match self {
            Section::Home => "REPCLUB",
            Section::Rep => "REP",
            Section::Patch => "PANTHER'S FREE FOOD PROGRAM PATCH",
            Section::Books => "Books",
            Section::Cart => "Cart",
        }
    }
}

impl fmt::Display for Section {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.id())
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::collections::HashSet;

    #[test]
    fn test_default_is_home() {
        assert_eq!(Section::default(), Section::Home);
    }

    #[test]
    fn test_all_in_tab_order() {
        let ids: Vec<&str> = Section::ALL.iter().map(|s| s.id()).collect();
        assert_eq!(ids, vec!["home", "rep", "patch", "books", "cart"]);
    }

    #[test]
    fn test_ids_are_distinct_render_keys() {
        let keys: HashSet<String> = Section::ALL.iter().map(|s| s.to_string()).collect();
        assert_eq!(keys.len(), Section::ALL.len());
    }
}
