//! Declarative builder for TUI shortcuts

use super::Shortcut;

/// Builder for creating shortcut lists with common patterns
#[derive(Default)]
pub struct ShortcutsBuilder {
    shortcuts: Vec<Shortcut>,
}

impl ShortcutsBuilder {
    pub fn new() -> Self {
        Self::default()
    }

    /// Add j/k for row navigation
    pub fn with_navigation(mut self) -> Self {
        self.shortcuts.push(Shortcut::new("j/k", "Up/Down"));
        self
    }

    /// Add [/] for pages and s for page size
    pub fn with_paging(mut self) -> Self {
        self.shortcuts.push(Shortcut::new("[/]", "Prev/Next Page"));
        self.shortcuts.push(Shortcut::new("s", "Page Size"));
        self
    }

    /// Add / for search, Esc to clear
    pub fn with_search(mut self) -> Self {
        self.shortcuts.push(Shortcut::new("/", "Search"));
        self.shortcuts.push(Shortcut::new("Esc", "Clear"));
        self
    }

    /// Add q for quit
    pub fn with_quit(mut self) -> Self {
        self.shortcuts.push(Shortcut::new("q", "Quit"));
        self
    }

    /// Add a single custom shortcut
    pub fn add(mut self, key: &str, description: &str) -> Self {
        self.shortcuts.push(Shortcut::new(key, description));
        self
    }

    /// Build the shortcuts vector
    pub fn build(self) -> Vec<Shortcut> {
        self.shortcuts
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_paging_shortcuts() {
        let shortcuts = ShortcutsBuilder::new().with_paging().build();

        assert_eq!(shortcuts.len(), 2);
        assert!(shortcuts.iter().any(|s| s.key == "[/]"));
        assert!(shortcuts.iter().any(|s| s.key == "s"));
    }

    #[test]
    fn test_full_console_shortcuts() {
        let shortcuts = ShortcutsBuilder::new()
            .with_navigation()
            .with_paging()
            .with_search()
            .with_quit()
            .add("o", "Orphans")
            .build();

        assert_eq!(shortcuts.len(), 7);
        assert!(shortcuts.iter().any(|s| s.key == "j/k"));
        assert!(shortcuts.iter().any(|s| s.key == "/"));
        assert!(shortcuts.iter().any(|s| s.key == "q"));
        assert!(shortcuts.iter().any(|s| s.key == "o"));
    }

    #[test]
    fn test_empty_shortcuts() {
        let shortcuts = ShortcutsBuilder::new().build();

        assert_eq!(shortcuts.len(), 0);
    }
}
