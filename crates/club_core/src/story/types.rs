//! Story graph core types.

use std::collections::HashMap;
use std::sync::Arc;

use crate::progress::{BarKind, Effects};
use serde::{Deserialize, Serialize};

/// One of the four fixed gameplay tracks. Each owns a story tree and is
/// canonically tied to a single progress bar.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize)]
pub enum Category {
    Finance,
    TechnicalTeam,
    Sponsors,
    Fans,
}

impl Category {
    pub const ALL: [Category; 4] =
        [Category::Finance, Category::TechnicalTeam, Category::Sponsors, Category::Fans];

    /// Display name, as authored in the story data.
    pub fn name(self) -> &'static str {
        match self {
            Category::Finance => "Finansal Yönetim",
            Category::TechnicalTeam => "Teknik Ekip",
            Category::Sponsors => "Sponsorlar",
            Category::Fans => "Taraftar İlişkileri",
        }
    }

    /// Resolves a display name back to a category. Unknown names are
    /// rejected here; past this point the set is closed.
    pub fn parse(name: &str) -> Option<Category> {
        Category::ALL.into_iter().find(|c| c.name() == name)
    }

    /// The bar this category canonically moves.
    pub fn bar(self) -> BarKind {
        match self {
            Category::Finance => BarKind::Finance,
            Category::TechnicalTeam => BarKind::TechnicalTeam,
            Category::Sponsors => BarKind::Sponsors,
            Category::Fans => BarKind::Fans,
        }
    }
}

/// One narrative beat. A node with no options is terminal.
#[derive(Debug, Clone)]
pub struct StoryNode {
    pub text: String,
    pub options: Vec<StoryOption>,
}

impl StoryNode {
    pub fn is_terminal(&self) -> bool {
        self.options.is_empty()
    }

    /// The chosen option's effects and successor. `None` for an
    /// out-of-range index; never panics, never mutates.
    pub fn select_option(&self, index: usize) -> Option<(&Effects, &Arc<StoryNode>)> {
        self.options.get(index).map(|opt| (&opt.effects, &opt.next))
    }
}

/// A choice leading out of a node. Successors are shared across branches
/// in the authored data, hence the `Arc`.
#[derive(Debug, Clone)]
pub struct StoryOption {
    pub text: String,
    pub effects: Effects,
    pub next: Arc<StoryNode>,
}

/// The authored story trees, one root per category.
///
/// The original data set also stored a "new stories this week" sentinel
/// string inside the same collection as the trees; that flag lives here
/// as a plain field instead.
#[derive(Clone)]
pub struct StoryCatalog {
    roots: HashMap<Category, Arc<StoryNode>>,
    story_week: u32,
}

impl StoryCatalog {
    /// Builds a catalog from explicit roots. Gameplay uses
    /// [`StoryCatalog::authored`]; this constructor exists for alternate
    /// or cut-down trees.
    pub fn with_roots(roots: HashMap<Category, Arc<StoryNode>>, story_week: u32) -> Self {
        StoryCatalog { roots, story_week }
    }

    /// Entry node for a category.
    pub fn root(&self, category: Category) -> Option<&Arc<StoryNode>> {
        self.roots.get(&category)
    }

    /// Week number of the currently authored story batch.
    pub fn story_week(&self) -> u32 {
        self.story_week
    }
}
