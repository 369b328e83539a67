use serde::{Deserialize, Serialize};

pub const DEFAULT_PRIMARY_COLOR: &str = "#6200ee";
pub const DEFAULT_ACCENT_COLOR: &str = "#03dac4";
pub const DEFAULT_BLOCK_COLOR: &str = "rgba(98, 0, 238, 0.2)";
pub const DEFAULT_LINE_COLOR: &str = "#e0e0e0";

/// Optional style overrides supplied by the host.
///
/// Colors are passed through to the host toolkit untouched, so any string
/// it understands is accepted.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct Theme {
    pub primary_color: Option<String>,
    pub accent_color: Option<String>,
    pub availability_block_color: Option<String>,
    pub timeline_line_color: Option<String>,
    pub font_family: Option<String>,
}

/// Theme with every default filled in.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct ResolvedTheme {
    pub primary_color: String,
    pub accent_color: String,
    pub availability_block_color: String,
    pub timeline_line_color: String,
    pub font_family: Option<String>,
}

impl Theme {
    pub fn resolve(&self) -> ResolvedTheme {
        ResolvedTheme {
            primary_color: pick(&self.primary_color, DEFAULT_PRIMARY_COLOR),
            accent_color: pick(&self.accent_color, DEFAULT_ACCENT_COLOR),
            availability_block_color: pick(&self.availability_block_color, DEFAULT_BLOCK_COLOR),
            timeline_line_color: pick(&self.timeline_line_color, DEFAULT_LINE_COLOR),
            font_family: self.font_family.clone().filter(|family| !family.is_empty()),
        }
    }
}

impl Default for ResolvedTheme {
    fn default() -> Self {
        Theme::default().resolve()
    }
}

// Empty strings count as unset.
fn pick(value: &Option<String>, default: &str) -> String {
    match value.as_deref() {
        Some(color) if !color.is_empty() => color.to_string(),
        _ => default.to_string(),
    }
}
