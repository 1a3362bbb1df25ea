use eyre::Result;

/// Action attached to a context-menu entry, run by the host when picked.
pub type MenuAction = Box<dyn Fn() -> Result<()>>;

pub enum MenuEntry {
    Separator,
    Disabled(String),
    Item(String, MenuAction),
}

impl std::fmt::Debug for MenuEntry {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            Self::Separator => write!(f, "Separator"),
            Self::Disabled(l) => write!(f, "Disabled({:?})", l),
            Self::Item(l, _) => write!(f, "Item({:?})", l),
        }
    }
}

/// Collects entries appended by a stream's menu provider. The host renders
/// the result with its own menu widget.
#[derive(Debug, Default)]
pub struct MenuBuilder {
    pub entries: Vec<MenuEntry>,
}

impl MenuBuilder {
    pub fn new() -> Self {
        Self::default()
    }

    /// An empty label or one ending in `-` becomes a separator; a missing
    /// action becomes a disabled entry.
    pub fn append(&mut self, label: &str, action: Option<MenuAction>) {
        if label.is_empty() || label.ends_with('-') {
            self.entries.push(MenuEntry::Separator);
        } else if let Some(action) = action {
            self.entries.push(MenuEntry::Item(label.to_string(), action));
        } else {
            self.entries.push(MenuEntry::Disabled(label.to_string()));
        }
    }

    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }

    pub fn len(&self) -> usize {
        self.entries.len()
    }
}
