use ansi_term::Colour;
use serde::Serialize;

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
pub enum Category {
    Planning,     // Planejamento
    Training,     // Capacitação
    Innovation,   // Inovação
    PilotProject, // Projeto Piloto
    Event,        // Evento
}

impl Category {
    pub const ALL: [Category; 5] = [
        Category::Planning,
        Category::Training,
        Category::Innovation,
        Category::PilotProject,
        Category::Event,
    ];

    /// Convert enum → DB string
    pub fn to_db_str(&self) -> &'static str {
        match self {
            Category::Planning => "Planejamento",
            Category::Training => "Capacitação",
            Category::Innovation => "Inovação",
            Category::PilotProject => "Projeto Piloto",
            Category::Event => "Evento",
        }
    }

    /// Convert DB string → enum
    pub fn from_db_str(s: &str) -> Option<Self> {
        Category::ALL.into_iter().find(|c| c.to_db_str() == s)
    }

    /// Helper: accept the stored label or the English name from the CLI,
    /// ignoring case and surrounding blanks.
    pub fn from_input(s: &str) -> Option<Self> {
        let wanted = s.trim().to_lowercase();
        Category::ALL.into_iter().find(|c| {
            c.to_db_str().to_lowercase() == wanted
                || c.english_name().to_lowercase() == wanted
                || c.english_name().replace(' ', "-").to_lowercase() == wanted
        })
    }

    pub fn english_name(&self) -> &'static str {
        match self {
            Category::Planning => "Planning",
            Category::Training => "Training",
            Category::Innovation => "Innovation",
            Category::PilotProject => "Pilot Project",
            Category::Event => "Event",
        }
    }

    pub fn color(&self) -> BarColor {
        match self {
            Category::Planning => BarColor::Blue,
            Category::Training => BarColor::Green,
            Category::Innovation => BarColor::Purple,
            Category::PilotProject => BarColor::Orange,
            Category::Event => BarColor::Red,
        }
    }
}

/// Fill color of a chart bar. Fixed palette, no runtime configuration.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
pub enum BarColor {
    Blue,
    Green,
    Purple,
    Orange,
    Red,
}

impl BarColor {
    /// Used for any category outside the fixed table.
    pub const DEFAULT: BarColor = BarColor::Blue;

    /// Category text (as stored) → color, falling back to the default.
    pub fn for_category(category: &str) -> Self {
        Category::from_db_str(category.trim())
            .or_else(|| Category::from_input(category))
            .map(|c| c.color())
            .unwrap_or(Self::DEFAULT)
    }

    pub fn class_name(&self) -> &'static str {
        match self {
            BarColor::Blue => "blue",
            BarColor::Green => "green",
            BarColor::Purple => "purple",
            BarColor::Orange => "orange",
            BarColor::Red => "red",
        }
    }

    pub fn hex(&self) -> &'static str {
        match self {
            BarColor::Blue => "#3b82f6",
            BarColor::Green => "#10b981",
            BarColor::Purple => "#8b5cf6",
            BarColor::Orange => "#f97316",
            BarColor::Red => "#ef4444",
        }
    }

    pub fn terminal(&self) -> Colour {
        match self {
            BarColor::Blue => Colour::RGB(59, 130, 246),
            BarColor::Green => Colour::RGB(16, 185, 129),
            BarColor::Purple => Colour::RGB(139, 92, 246),
            BarColor::Orange => Colour::RGB(249, 115, 22),
            BarColor::Red => Colour::RGB(239, 68, 68),
        }
    }
}
