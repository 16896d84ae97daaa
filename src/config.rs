use std::fs::File;
use std::io::BufReader;
use std::path::Path;

use crate::cursor::CursorParams;
use crate::form::FormConfig;
use crate::foundation::error::{RevealError, RevealResult};
use crate::grid::layout::GridConfig;
use crate::grid::reveal::RevealParams;
use crate::loader::LoaderParams;
use crate::scroll::carousel::CarouselParams;
use crate::scroll::smooth::SmoothScrollOptions;

/// Every tunable of the page, as one JSON document.
///
/// All sections are optional; missing fields take their defaults, so `{}` is a valid config.
#[derive(Clone, Debug, Default, PartialEq, serde::Serialize, serde::Deserialize)]
#[serde(default, deny_unknown_fields)]
pub struct RevealConfig {
    /// Triangle grid geometry.
    pub grid: GridConfig,
    /// Reveal animation and drawing.
    pub reveal: RevealParams,
    /// Card strip choreography.
    pub carousel: CarouselParams,
    /// Custom cursor.
    pub cursor: CursorParams,
    /// Load animation.
    pub loader: LoaderParams,
    /// Smooth-scroll emulation.
    pub smooth_scroll: SmoothScrollOptions,
    /// Contact form.
    pub form: FormConfig,
}

impl RevealConfig {
    /// Parse a config from a JSON reader.
    pub fn from_reader<R: std::io::Read>(r: R) -> RevealResult<Self> {
        serde_json::from_reader(r)
            .map_err(|e| RevealError::serde(format!("parse config JSON: {e}")))
    }

    /// Parse a config from a JSON file on disk.
    pub fn from_path(path: impl AsRef<Path>) -> RevealResult<Self> {
        let path = path.as_ref();
        let f = File::open(path)?;
        Self::from_reader(BufReader::new(f)).map_err(|e| match e {
            RevealError::Serde(msg) => RevealError::Serde(format!("{}: {msg}", path.display())),
            other => other,
        })
    }

    /// Validate every section.
    pub fn validate(&self) -> RevealResult<()> {
        self.grid.validate()?;
        self.reveal.validate()?;
        self.carousel.validate()?;
        self.cursor.validate()?;
        self.loader.validate()?;
        self.smooth_scroll.validate()?;
        self.form.validate()
    }
}

#[cfg(test)]
#[path = "../tests/unit/config.rs"]
mod tests;
