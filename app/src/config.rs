use std::path::{Path, PathBuf};

use clap::ValueEnum;
use serde::Deserialize;
use vox_core::voxel::{ColorStrategy, DepthBanding, RawHeight, TileOrigin};
use vox_render::Viewport;

use crate::error::AppError;

#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Deserialize, ValueEnum)]
#[serde(rename_all = "kebab-case")]
pub enum ColorMode {
    /// Gray band over |y| between 400 and 430
    #[default]
    DepthBand,
    /// Quantized height written into every channel
    RawHeight,
}

impl ColorMode {
    pub fn strategy(self) -> Box<dyn ColorStrategy> {
        match self {
            ColorMode::DepthBand => Box::new(DepthBanding::default()),
            ColorMode::RawHeight => Box::new(RawHeight),
        }
    }
}

#[derive(Debug, Clone, PartialEq, Deserialize)]
#[serde(default, deny_unknown_fields)]
pub struct ViewerConfig {
    pub tile_x: i32,
    pub tile_y: i32,
    pub base_directory: PathBuf,
    /// Explicit point cloud file, used instead of the tile file name.
    pub input: Option<PathBuf>,
    pub color: ColorMode,
    pub frames: u32,
    pub viewport: [u32; 2],
}

impl Default for ViewerConfig {
    fn default() -> Self {
        Self {
            tile_x: 6830,
            tile_y: 2475,
            base_directory: PathBuf::from("."),
            input: None,
            color: ColorMode::default(),
            frames: 1,
            viewport: [800, 600],
        }
    }
}

impl ViewerConfig {
    pub fn from_json_file(path: &Path) -> Result<Self, AppError> {
        let contents = std::fs::read_to_string(path).map_err(|source| AppError::ConfigRead {
            path: path.to_path_buf(),
            source,
        })?;
        serde_json::from_str(&contents).map_err(|source| AppError::ConfigParse {
            path: path.to_path_buf(),
            source,
        })
    }

    pub fn tile_origin(&self) -> TileOrigin {
        TileOrigin::new(self.tile_x, self.tile_y)
    }

    pub fn input_path(&self) -> PathBuf {
        match &self.input {
            Some(input) => self.base_directory.join(input),
            None => self
                .base_directory
                .join(self.tile_origin().file_name("laz")),
        }
    }

    pub fn viewport(&self) -> Viewport {
        let [width, height] = self.viewport;
        Viewport { width, height }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn default_resolves_the_reference_tile() {
        let config = ViewerConfig::default();
        assert_eq!(config.tile_origin(), TileOrigin::new(6830, 2475));
        assert_eq!(config.input_path(), Path::new("./6830_2475.laz"));
    }

    #[test]
    fn input_override_is_relative_to_base_directory() {
        let config = ViewerConfig {
            base_directory: PathBuf::from("/data/lidar"),
            input: Some(PathBuf::from("survey.las")),
            ..Default::default()
        };
        assert_eq!(config.input_path(), Path::new("/data/lidar/survey.las"));

        let absolute = ViewerConfig {
            input: Some(PathBuf::from("/tmp/points.xyz")),
            ..config
        };
        assert_eq!(absolute.input_path(), Path::new("/tmp/points.xyz"));
    }

    #[test]
    fn partial_json_keeps_defaults() {
        let json = r#"{ "tile_x": -3, "color": "raw-height", "viewport": [1024, 768] }"#;
        let config: ViewerConfig = serde_json::from_str(json).unwrap();
        assert_eq!(config.tile_x, -3);
        assert_eq!(config.tile_y, 2475);
        assert_eq!(config.color, ColorMode::RawHeight);
        assert_eq!(config.viewport(), Viewport { width: 1024, height: 768 });
        assert_eq!(config.frames, 1);
    }

    #[test]
    fn unknown_keys_are_rejected() {
        assert!(serde_json::from_str::<ViewerConfig>(r#"{ "tile_z": 1 }"#).is_err());
    }

    #[test]
    fn config_file_errors_name_the_file() {
        let dir = tempfile::tempdir().unwrap();
        let missing = dir.path().join("missing.json");
        assert!(matches!(
            ViewerConfig::from_json_file(&missing),
            Err(AppError::ConfigRead { .. })
        ));

        let broken = dir.path().join("broken.json");
        std::fs::write(&broken, "{ tile_x: ").unwrap();
        match ViewerConfig::from_json_file(&broken) {
            Err(err @ AppError::ConfigParse { .. }) => {
                assert!(err.to_string().contains("broken.json"));
            }
            other => panic!("unexpected result: {other:?}"),
        }
    }
}
