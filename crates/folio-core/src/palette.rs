//! Technology chip colors.
//!
//! Brand colors for the technologies a project can be tagged with. Anything
//! not listed falls back to the page accent.

/// Chip color for technologies without a mapping.
pub const DEFAULT_ACCENT: &str = "var(--accent)";

// === LANGUAGES ===
pub const PYTHON: &str = "#3776ab";
pub const JAVASCRIPT: &str = "#f7df1e";
pub const TYPESCRIPT: &str = "#3178c6";
pub const RUST: &str = "#dea584";
pub const JAVA: &str = "#b07219";
pub const CPP: &str = "#00599c";
pub const GO: &str = "#00add8";
pub const HTML: &str = "#e34f26";
pub const CSS: &str = "#1572b6";
pub const SQL: &str = "#4479a1";

// === FRAMEWORKS ===
pub const REACT: &str = "#61dafb";
pub const NODE: &str = "#339933";
pub const FLASK: &str = "#8a8a8a";
pub const DJANGO: &str = "#44b78b";
pub const TAILWIND: &str = "#38bdf8";
pub const PYTORCH: &str = "#ee4c2c";
pub const TENSORFLOW: &str = "#ff6f00";
pub const PANDAS: &str = "#150458";

// === TOOLING ===
pub const DOCKER: &str = "#2496ed";
pub const GIT: &str = "#f05032";
pub const AWS: &str = "#ff9900";
pub const FIREBASE: &str = "#ffca28";
pub const MONGODB: &str = "#47a248";
pub const POSTGRES: &str = "#336791";

const TECH_COLORS: &[(&str, &str)] = &[
    ("python", PYTHON),
    ("javascript", JAVASCRIPT),
    ("js", JAVASCRIPT),
    ("typescript", TYPESCRIPT),
    ("ts", TYPESCRIPT),
    ("rust", RUST),
    ("java", JAVA),
    ("c++", CPP),
    ("go", GO),
    ("html", HTML),
    ("css", CSS),
    ("sql", SQL),
    ("react", REACT),
    ("node", NODE),
    ("node.js", NODE),
    ("flask", FLASK),
    ("django", DJANGO),
    ("tailwind", TAILWIND),
    ("pytorch", PYTORCH),
    ("tensorflow", TENSORFLOW),
    ("pandas", PANDAS),
    ("docker", DOCKER),
    ("git", GIT),
    ("aws", AWS),
    ("firebase", FIREBASE),
    ("mongodb", MONGODB),
    ("postgresql", POSTGRES),
];

/// Mapped color for a technology name, case-insensitively.
pub fn tech_color(name: &str) -> Option<&'static str> {
    let name = name.trim();
    TECH_COLORS
        .iter()
        .find(|(key, _)| key.eq_ignore_ascii_case(name))
        .map(|(_, color)| *color)
}

/// Color a chip is styled with: the mapped color or the default accent.
pub fn chip_color(name: &str) -> &'static str {
    tech_color(name).unwrap_or(DEFAULT_ACCENT)
}
