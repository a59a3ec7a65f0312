//! The registered grammar set and tree-sitter grammar loading.

/// Languages with a registered tree-sitter grammar. Snippets in any other
/// language take the generic regex path.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Language {
    Cpp,
    CSharp,
    Go,
    Python,
}

impl Language {
    /// Look up a dataset language tag. `None` means no registered grammar.
    pub fn from_name(name: &str) -> Option<Self> {
        match name.to_lowercase().as_str() {
            "c++" | "cpp" => Some(Self::Cpp),
            "c#" | "csharp" => Some(Self::CSharp),
            "go" | "golang" => Some(Self::Go),
            "python" | "python3" => Some(Self::Python),
            _ => None,
        }
    }

    /// Canonical lowercase name.
    pub fn name(self) -> &'static str {
        match self {
            Self::Cpp => "cpp",
            Self::CSharp => "csharp",
            Self::Go => "go",
            Self::Python => "python",
        }
    }

    /// Load the tree-sitter grammar for this language.
    pub fn ts_language(self) -> tree_sitter::Language {
        match self {
            Self::Cpp => tree_sitter_cpp::LANGUAGE.into(),
            Self::CSharp => tree_sitter_c_sharp::LANGUAGE.into(),
            Self::Go => tree_sitter_go::LANGUAGE.into(),
            Self::Python => tree_sitter_python::LANGUAGE.into(),
        }
    }
}

impl std::fmt::Display for Language {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.write_str(self.name())
    }
}
