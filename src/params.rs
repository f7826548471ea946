use crate::error::ConfigError;
use crate::host::Layer;
use crate::math::DEFAULT_TILE_SIZE;
use crate::paths::SegmentClass;

/// Stroke colour and target layer for one class of wall segment.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct SegmentStyle {
    pub layer: Layer,
    /// `#rrggbb` or `transparent`.
    pub stroke: String,
}

impl SegmentStyle {
    #[must_use]
    pub fn new(layer: Layer, stroke: &str) -> Self {
        Self {
            layer,
            stroke: stroke.to_owned(),
        }
    }
}

/// Parameters controlling wall synthesis.
#[derive(Debug, Clone, PartialEq)]
pub struct WallParams {
    /// Edge length of one grid tile, in page units.
    pub tile_size: f64,
    /// Tiles added around a subject when scanning for neighbours.
    pub expansion: usize,
    /// Character attribute holding the wall kind.
    pub wall_attribute: String,
    /// Layers whose tokens can carry walls.
    pub source_layers: Vec<Layer>,
    /// Fill written on every path.
    pub fill: String,
    pub static_style: SegmentStyle,
    pub dynamic_style: SegmentStyle,
    pub transition_style: SegmentStyle,
}

impl Default for WallParams {
    fn default() -> Self {
        Self {
            tile_size: DEFAULT_TILE_SIZE,
            expansion: 2,
            wall_attribute: "wall".to_owned(),
            source_layers: vec![Layer::Map, Layer::Objects],
            fill: "transparent".to_owned(),
            static_style: SegmentStyle::new(Layer::Walls, "#FF0000"),
            dynamic_style: SegmentStyle::new(Layer::GmLayer, "#0000FF"),
            transition_style: SegmentStyle::new(Layer::Walls, "#FF00FF"),
        }
    }
}

impl WallParams {
    /// Checks the parameters for values the engine cannot work with.
    ///
    /// # Errors
    ///
    /// Returns the first problem found: a non-positive tile size, a zero
    /// expansion, an empty attribute name, or a malformed colour.
    pub fn validate(&self) -> Result<(), ConfigError> {
        if self.tile_size.is_nan() || self.tile_size <= 0.0 {
            return Err(ConfigError::NonPositiveTileSize(self.tile_size));
        }
        if self.expansion == 0 {
            return Err(ConfigError::ZeroExpansion);
        }
        if self.wall_attribute.is_empty() {
            return Err(ConfigError::EmptyAttributeName);
        }
        validate_color(&self.fill)?;
        for style in [&self.static_style, &self.dynamic_style, &self.transition_style] {
            validate_color(&style.stroke)?;
        }
        Ok(())
    }

    /// Returns the style used for segments of the given class.
    #[must_use]
    pub fn style(&self, class: SegmentClass) -> &SegmentStyle {
        match class {
            SegmentClass::Static => &self.static_style,
            SegmentClass::Dynamic => &self.dynamic_style,
            SegmentClass::Transition => &self.transition_style,
        }
    }

    /// Neighbour-scan margin in page units.
    #[must_use]
    #[allow(clippy::cast_precision_loss)]
    pub fn margin(&self) -> f64 {
        self.tile_size * self.expansion as f64
    }

    /// Returns `true` if tokens on `layer` can carry walls.
    #[must_use]
    pub fn participates(&self, layer: Layer) -> bool {
        self.source_layers.contains(&layer)
    }
}

/// Accepts `transparent` or a `#rrggbb` hex colour.
///
/// # Errors
///
/// Returns [`ConfigError::InvalidColor`] for anything else.
pub fn validate_color(color: &str) -> Result<(), ConfigError> {
    let is_hex = color.len() == 7
        && color.starts_with('#')
        && color[1..].chars().all(|c| c.is_ascii_hexdigit());
    if color == "transparent" || is_hex {
        Ok(())
    } else {
        Err(ConfigError::InvalidColor(color.to_owned()))
    }
}
