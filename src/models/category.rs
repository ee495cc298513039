use crate::error::ValidationError;

/// The fixed set of expense categories. There are no user-defined categories.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default)]
pub enum Category {
    #[default]
    Food,
    Travel,
    Shopping,
    Utilities,
    Entertainment,
    Healthcare,
    Education,
    Other,
}

impl Category {
    pub const COUNT: usize = 8;

    /// Lowercase key, e.g. `"food"`.
    pub fn as_str(&self) -> &'static str {
        match self {
            Self::Food => "food",
            Self::Travel => "travel",
            Self::Shopping => "shopping",
            Self::Utilities => "utilities",
            Self::Entertainment => "entertainment",
            Self::Healthcare => "healthcare",
            Self::Education => "education",
            Self::Other => "other",
        }
    }

    pub fn label(&self) -> &'static str {
        match self {
            Self::Food => "Food & Dining",
            Self::Travel => "Travel & Transport",
            Self::Shopping => "Shopping",
            Self::Utilities => "Utilities & Bills",
            Self::Entertainment => "Entertainment",
            Self::Healthcare => "Healthcare",
            Self::Education => "Education",
            Self::Other => "Other",
        }
    }

    /// All categories in declaration order. Summaries with equal totals keep this order.
    pub fn all() -> &'static [Category; Self::COUNT] {
        &[
            Self::Food,
            Self::Travel,
            Self::Shopping,
            Self::Utilities,
            Self::Entertainment,
            Self::Healthcare,
            Self::Education,
            Self::Other,
        ]
    }

    /// Position in [`Category::all`].
    pub fn index(&self) -> usize {
        *self as usize
    }

    /// The category after this one, wrapping around. Used to cycle a form field.
    pub fn next(&self) -> Self {
        let all = Self::all();
        all[(self.index() + 1) % all.len()]
    }

    pub fn prev(&self) -> Self {
        let all = Self::all();
        all[(self.index() + all.len() - 1) % all.len()]
    }
}

impl std::str::FromStr for Category {
    type Err = ValidationError;

    /// Accepts the key or the label, case-insensitively.
    fn from_str(s: &str) -> Result<Self, Self::Err> {
        let wanted = s.trim().to_lowercase();
        Self::all()
            .iter()
            .find(|c| c.as_str() == wanted || c.label().to_lowercase() == wanted)
            .copied()
            .ok_or_else(|| ValidationError::UnknownCategory(s.trim().to_string()))
    }
}

impl std::fmt::Display for Category {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}", self.label())
    }
}
