use serde::Deserialize;

use crate::SeekBarError;

pub const DEFAULT_MIN: f32 = 0.0;
pub const DEFAULT_MAX: f32 = 1000.0;

/// Resource names resolved through an [`AssetSource`](crate::AssetSource).
#[derive(Clone, Debug, Deserialize, PartialEq, Eq)]
#[serde(default)]
pub struct AssetNames {
    pub background: String,
    pub progress: String,
    pub left_thumb: String,
    pub right_thumb: String,
}

impl Default for AssetNames {
    fn default() -> Self {
        Self {
            background: "seekbar_no_check.png".into(),
            progress: "seekbar_check.png".into(),
            // both thumbs share one image
            left_thumb: "seekbar_bg.png".into(),
            right_thumb: "seekbar_bg.png".into(),
        }
    }
}

/// Optional attributes a host may pass at construction.
#[derive(Clone, Debug, Deserialize, PartialEq)]
#[serde(default)]
pub struct SeekBarStyle {
    pub min: f32,
    pub max: f32,
    pub assets: AssetNames,
}

impl Default for SeekBarStyle {
    fn default() -> Self {
        Self {
            min: DEFAULT_MIN,
            max: DEFAULT_MAX,
            assets: AssetNames::default(),
        }
    }
}

impl SeekBarStyle {
    pub fn from_json_str(s: &str) -> Result<Self, SeekBarError> {
        Ok(serde_json::from_str(s)?)
    }
}
