use std::fs;
use std::path::Path;

use log::{debug, warn};
use rayon::prelude::*;
use serde::{Deserialize, Serialize};

use crate::color::{HexColor, parse_colors};
use crate::heights::LayerShape;
use crate::lcg::{Lcg, Seed};
use crate::utils::{HeightProfile, Timed, min_max};
use crate::{Error, Result};

// One mountain layer: its shape and its top-to-bottom colors
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct MountainLayer {
    #[serde(flatten)]
    pub shape: LayerShape,
    pub colors: Vec<String>,
}

impl MountainLayer {
    fn new(octaves: u32, flatness: f64, height_bias: f64, peaks: i32, colors: [&str; 2]) -> Self {
        Self {
            shape: LayerShape {
                octaves,
                flatness,
                height_bias,
                peaks,
            },
            colors: colors.iter().map(|c| c.to_string()).collect(),
        }
    }
}

// Everything needed to reproduce a mountain scene.
// Layers are drawn back to front in list order.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct SceneConfig {
    pub rng: Lcg,
    // Root seed; layer i uses seed + i
    pub seed: Seed,
    pub background: Vec<String>,
    pub mountains: Vec<MountainLayer>,
}

impl Default for SceneConfig {
    fn default() -> Self {
        Self {
            rng: Lcg::STANDARD,
            seed: 1,
            background: vec!["cbe8ff".to_string()],
            mountains: vec![
                MountainLayer::new(8, 3.0, 0.3, 5, ["a0d5ff", "498ec4"]),
                MountainLayer::new(8, 3.0, 0.05, 3, ["498ec4", "1d6caa"]),
                MountainLayer::new(8, 4.0, -0.2, 3, ["1d6caa", "0e5a95"]),
                MountainLayer::new(8, 2.0, 0.25, 3, ["0e5a95", "153b59"]),
                MountainLayer::new(8, 4.0, -0.4, 2, ["153b59", "001f37"]),
            ],
        }
    }
}

impl SceneConfig {
    pub fn from_json_str(json: &str) -> Result<Self> {
        let config: Self = serde_json::from_str(json)?;
        config.validate()?;
        Ok(config)
    }

    pub fn load(path: impl AsRef<Path>) -> Result<Self> {
        let json = fs::read_to_string(path)?;
        Self::from_json_str(&json)
    }

    pub fn to_json_string(&self) -> Result<String> {
        Ok(serde_json::to_string_pretty(self)?)
    }

    pub fn save(&self, path: impl AsRef<Path>) -> Result<()> {
        fs::write(path, self.to_json_string()?)?;
        Ok(())
    }

    // Checks everything that doesn't depend on the canvas size.
    // Wavelength depends on the width and is checked when heights are built.
    pub fn validate(&self) -> Result<()> {
        self.rng.validate()?;
        if self.background.is_empty() {
            return Err(Error::EmptyColors {
                layer: "background".to_string(),
            });
        }
        parse_colors(&self.background)?;

        for (index, layer) in self.mountains.iter().enumerate() {
            if layer.colors.is_empty() {
                return Err(Error::EmptyColors {
                    layer: format!("mountain {}", index),
                });
            }
            parse_colors(&layer.colors)?;
            if layer.shape.octaves < 1 {
                return Err(Error::InvalidOctaves {
                    octaves: layer.shape.octaves,
                });
            }
            if !(layer.shape.flatness > 0.0) {
                return Err(Error::InvalidFlatness {
                    flatness: layer.shape.flatness,
                });
            }
        }
        Ok(())
    }

    pub fn layer_seed(&self, index: usize) -> Seed {
        self.seed.wrapping_add(index as Seed)
    }

    // Move to the next scene: the root seed advances one generator step
    pub fn regenerate(&mut self) -> Seed {
        self.seed = self.rng.next_seed(self.seed);
        debug!("regenerate: root seed is now {}", self.seed);
        self.seed
    }
}

// Heights and colors of one layer, ready to draw
#[derive(Debug, Clone, PartialEq)]
pub struct LayerProfile {
    pub index: usize,
    pub seed: Seed,
    pub heights: HeightProfile,
    pub colors: Vec<HexColor>,
}

impl LayerProfile {
    // Highest point of the layer (smallest y)
    pub fn top(&self) -> Option<f64> {
        min_max(&self.heights).map(|(min, _)| min)
    }
}

// A scene evaluated for one canvas size
#[derive(Debug, Clone, PartialEq)]
pub struct Scene {
    pub width: u32,
    pub height: u32,
    pub background: Vec<HexColor>,
    pub layers: Vec<LayerProfile>,
}

impl Scene {
    // One height per pixel column
    pub fn build(config: &SceneConfig, width: u32, height: u32) -> Result<Self> {
        Self::build_with_samples(config, width, height, width as usize)
    }

    // `samples` heights per layer, spaced one pixel apart from x = 0
    pub fn build_with_samples(
        config: &SceneConfig,
        width: u32,
        height: u32,
        samples: usize,
    ) -> Result<Self> {
        if width == 0 || height == 0 {
            return Err(Error::InvalidCanvas { width, height });
        }
        config.validate()?;
        let _t = Timed::debug("scene layers");

        let background = parse_colors(&config.background)?;
        let canvas_height = height as f64;

        // Layers share no generator state, so they are built independently
        let layers = config
            .mountains
            .par_iter()
            .enumerate()
            .map(|(index, layer)| -> Result<LayerProfile> {
                let seed = config.layer_seed(index);
                let heights = layer.shape.heights(&config.rng, samples, canvas_height, seed)?;
                debug!(
                    "layer {}: seed {}, {} octaves, {} peaks",
                    index, seed, layer.shape.octaves, layer.shape.peaks
                );
                if let Some((min, _)) = min_max(&heights) {
                    if min >= canvas_height {
                        warn!("layer {} lies entirely below the canvas", index);
                    }
                }
                Ok(LayerProfile {
                    index,
                    seed,
                    heights,
                    colors: parse_colors(&layer.colors)?,
                })
            })
            .collect::<Result<Vec<_>>>()?;

        Ok(Self {
            width,
            height,
            background,
            layers,
        })
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn default_config_is_valid() {
        let config = SceneConfig::default();
        config.validate().unwrap();
        assert_eq!(config.mountains.len(), 5);
        assert_eq!(config.seed, 1);
    }

    #[test]
    fn config_json_roundtrip_keeps_names() {
        let json = SceneConfig::default().to_json_string().unwrap();
        assert!(json.contains("\"height_bias\""));
        assert!(json.contains("\"m\""));
        assert_eq!(SceneConfig::from_json_str(&json).unwrap(), SceneConfig::default());
    }

    #[test]
    fn config_accepts_short_layer_names() {
        let json = r#"{
            "seed": 9,
            "background": ["cbe8ff"],
            "mountains": [
                { "octaves": 4, "flatness": 2, "height": 0.1, "peaks": 2, "colors": ["a0d5ff"] }
            ]
        }"#;
        let config = SceneConfig::from_json_str(json).unwrap();
        assert_eq!(config.rng, Lcg::STANDARD);
        assert_eq!(config.mountains[0].shape.height_bias, 0.1);
    }

    #[test]
    fn config_rejects_bad_layers() {
        let mut config = SceneConfig::default();
        config.mountains[2].colors.clear();
        assert!(matches!(config.validate(), Err(Error::EmptyColors { .. })));

        let mut config = SceneConfig::default();
        config.mountains[0].colors[1] = "blue".to_string();
        assert!(matches!(config.validate(), Err(Error::InvalidColor(_))));

        let mut config = SceneConfig::default();
        config.mountains[1].shape.octaves = 0;
        assert!(matches!(config.validate(), Err(Error::InvalidOctaves { .. })));

        let mut config = SceneConfig::default();
        config.mountains[1].shape.flatness = 0.0;
        assert!(matches!(config.validate(), Err(Error::InvalidFlatness { .. })));
    }

    #[test]
    fn regenerate_advances_root_seed() {
        let mut config = SceneConfig::default();
        assert_eq!(config.regenerate(), 1_664_526);
        assert_eq!(config.layer_seed(3), 1_664_529);
    }

    #[test]
    fn scene_layers_use_offset_seeds() {
        let config = SceneConfig::default();
        let scene = Scene::build(&config, 200, 100).unwrap();
        assert_eq!(scene.layers.len(), 5);
        for (i, layer) in scene.layers.iter().enumerate() {
            assert_eq!(layer.index, i);
            assert_eq!(layer.seed, 1 + i as Seed);
            assert_eq!(layer.heights.len(), 200);
            let shape = &config.mountains[i].shape;
            let expected = shape.heights(&Lcg::STANDARD, 200, 100.0, layer.seed).unwrap();
            assert_eq!(layer.heights, expected);
        }
    }

    #[test]
    fn scene_rejects_empty_canvas() {
        let config = SceneConfig::default();
        assert!(matches!(
            Scene::build(&config, 0, 100),
            Err(Error::InvalidCanvas { .. })
        ));
        assert!(matches!(
            Scene::build(&config, 100, 0),
            Err(Error::InvalidCanvas { .. })
        ));
    }

    #[test]
    fn scene_surfaces_wavelength_errors() {
        let mut config = SceneConfig::default();
        config.mountains[4].shape.peaks = 0;
        assert!(matches!(
            Scene::build(&config, 100, 50),
            Err(Error::InvalidWavelength { .. })
        ));
    }
}
