use serde::{Deserialize, Serialize};

/// Moderation state of a memory. Every submission starts out `Pending`;
/// the flip to `Approved` happens against the store, never through a
/// public request.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Status {
    Pending,
    Approved,
}

impl Status {
    pub fn as_str(&self) -> &'static str {
        match self {
            Status::Pending => "pending",
            Status::Approved => "approved",
        }
    }

    /// Unknown keywords parse as `Pending` so a corrupt row can never
    /// leak into a public read path.
    pub fn from_keyword(s: &str) -> Self {
        match s {
            "approved" => Status::Approved,
            _ => Status::Pending,
        }
    }
}

/// Color theme picked on the submission form. Anything the form (or an
/// old row) hands us that we don't recognize falls back to `Default`
/// instead of failing the request.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
#[serde(from = "String", into = "String")]
pub enum Color {
    #[default]
    Default,
    Blue,
    Gray,
    Purple,
    Navy,
    Maroon,
    Pink,
    Teal,
}

impl Color {
    pub fn as_str(&self) -> &'static str {
        match self {
            Color::Default => "default",
            Color::Blue => "blue",
            Color::Gray => "gray",
            Color::Purple => "purple",
            Color::Navy => "navy",
            Color::Maroon => "maroon",
            Color::Pink => "pink",
            Color::Teal => "teal",
        }
    }

    pub fn from_keyword(s: &str) -> Self {
        match s {
            "blue" => Color::Blue,
            "gray" => Color::Gray,
            "purple" => Color::Purple,
            "navy" => Color::Navy,
            "maroon" => Color::Maroon,
            "pink" => Color::Pink,
            "teal" => Color::Teal,
            _ => Color::Default,
        }
    }
}

impl From<String> for Color {
    fn from(s: String) -> Self {
        Color::from_keyword(&s)
    }
}

impl From<Color> for String {
    fn from(c: Color) -> Self {
        c.as_str().to_string()
    }
}

/// Decorative text effect for a letter. A single keyword replaces the
/// older letter-style + animation selector pair.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
#[serde(from = "String", into = "String")]
pub enum Effect {
    #[default]
    None,
    Bleeding,
    Broken,
    Neon,
    Handwritten,
}

impl Effect {
    pub fn as_str(&self) -> &'static str {
        match self {
            Effect::None => "none",
            Effect::Bleeding => "bleeding",
            Effect::Broken => "broken",
            Effect::Neon => "neon",
            Effect::Handwritten => "handwritten",
        }
    }

    pub fn from_keyword(s: &str) -> Self {
        match s {
            "bleeding" => Effect::Bleeding,
            "broken" => Effect::Broken,
            "neon" => Effect::Neon,
            "handwritten" => Effect::Handwritten,
            _ => Effect::None,
        }
    }
}

impl From<String> for Effect {
    fn from(s: String) -> Self {
        Effect::from_keyword(&s)
    }
}

impl From<Effect> for String {
    fn from(e: Effect) -> Self {
        e.as_str().to_string()
    }
}
