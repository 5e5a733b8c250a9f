use serde::{Deserialize, Serialize};
use serde_json::Value;

/// Compass placement for tooltips relative to the hovered block.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum TooltipPlacement {
    North,
    NorthEast,
    East,
    SouthEast,
    South,
    SouthWest,
    West,
    NorthWest,
}

impl TooltipPlacement {
    /// Parses the short compass form (`n`, `ne`, `e`, `se`, `s`, `sw`, `w`,
    /// `nw`). Returns `None` for anything else; callers that take placement
    /// strings from user config ignore invalid values silently.
    pub fn parse(raw: &str) -> Option<Self> {
        match raw.trim().to_ascii_lowercase().as_str() {
            "n" => Some(Self::North),
            "ne" => Some(Self::NorthEast),
            "e" => Some(Self::East),
            "se" => Some(Self::SouthEast),
            "s" => Some(Self::South),
            "sw" => Some(Self::SouthWest),
            "w" => Some(Self::West),
            "nw" => Some(Self::NorthWest),
            _ => None,
        }
    }

    pub fn as_str(&self) -> &'static str {
        match self {
            Self::North => "n",
            Self::NorthEast => "ne",
            Self::East => "e",
            Self::SouthEast => "se",
            Self::South => "s",
            Self::SouthWest => "sw",
            Self::West => "w",
            Self::NorthWest => "nw",
        }
    }
}

impl Default for TooltipPlacement {
    fn default() -> Self {
        Self::West
    }
}

/// Configuration for one graph instance.
///
/// The click callback is intentionally not part of this struct (it lives on
/// the graph handle) so the config stays `Clone` and `Debug` and can travel
/// through JSON.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct GraphConfig {
    /// Side length in pixels of one child block. Must be > 0.
    pub block_size: f64,
    /// Maximum blocks per row. `0` derives the limit from `available_width`.
    pub max_child_count: u32,
    /// Horizontal space the graph may occupy, used only when
    /// `max_child_count` is `0`.
    pub available_width: f64,
    pub show_tooltips: bool,
    /// When true, tooltips render `key: value` rows; otherwise values only.
    pub show_keys: bool,
    pub tooltip_placement: TooltipPlacement,
}

impl Default for GraphConfig {
    fn default() -> Self {
        Self {
            block_size: 24.0,
            max_child_count: 0,
            available_width: 960.0,
            show_tooltips: true,
            show_keys: true,
            tooltip_placement: TooltipPlacement::default(),
        }
    }
}

impl GraphConfig {
    /// Builds a config from a JSON object in the wire format
    /// (`blockSize`, `maxChildCount`, `availableWidth`, `showTooltips`,
    /// `showKeys`, `tooltipPlacement`). Unknown keys are ignored; missing or
    /// malformed keys keep their defaults, including an unrecognized
    /// `tooltipPlacement`.
    pub fn from_value(value: &Value) -> Self {
        let mut config = Self::default();
        if let Some(v) = config_f64(value, "blockSize") {
            config.block_size = v;
        }
        if let Some(v) = config_u32(value, "maxChildCount") {
            config.max_child_count = v;
        }
        if let Some(v) = config_f64(value, "availableWidth") {
            config.available_width = v;
        }
        if let Some(v) = config_bool(value, "showTooltips") {
            config.show_tooltips = v;
        }
        if let Some(v) = config_bool(value, "showKeys") {
            config.show_keys = v;
        }
        if let Some(p) = value
            .get("tooltipPlacement")
            .and_then(Value::as_str)
            .and_then(TooltipPlacement::parse)
        {
            config.tooltip_placement = p;
        }
        config
    }
}

fn config_bool(cfg: &Value, key: &str) -> Option<bool> {
    cfg.get(key)?.as_bool()
}

fn config_f64(cfg: &Value, key: &str) -> Option<f64> {
    let v = cfg.get(key)?;
    v.as_f64()
        .or_else(|| v.as_i64().map(|n| n as f64))
        .or_else(|| v.as_u64().map(|n| n as f64))
}

fn config_u32(cfg: &Value, key: &str) -> Option<u32> {
    cfg.get(key)?.as_u64().and_then(|n| u32::try_from(n).ok())
}
