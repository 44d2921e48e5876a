//! Symbolic icon references
//!
//! Icons are names only; turning one into pixels belongs to the UI crate.

use serde::{Deserialize, Serialize};

/// Every icon the page can render
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "kebab-case")]
pub enum Icon {
    FileText,
    ClipboardList,
    Users,
    TrendingUp,
    PackageCheck,
    Truck,
    Sun,
    Moon,
    ArrowRight,
    Search,
}

impl Icon {
    /// Kebab-case name, matching the configuration spelling
    pub const fn name(self) -> &'static str {
        match self {
            Self::FileText => "file-text",
            Self::ClipboardList => "clipboard-list",
            Self::Users => "users",
            Self::TrendingUp => "trending-up",
            Self::PackageCheck => "package-check",
            Self::Truck => "truck",
            Self::Sun => "sun",
            Self::Moon => "moon",
            Self::ArrowRight => "arrow-right",
            Self::Search => "search",
        }
    }
}
