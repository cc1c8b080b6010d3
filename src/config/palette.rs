//! Chart color configuration

use serde::ser::{Serialize, SerializeMap, Serializer};

/// Bucket label to CSS color name. Labels are free-form, so this is a lookup
/// table rather than an enum.
#[derive(Debug)]
pub struct BucketColors {
    pub entries: &'static [(&'static str, &'static str)],
}

impl BucketColors {
    pub fn get(&self, bucket: &str) -> Option<&'static str> {
        self.entries
            .iter()
            .find(|(label, _)| *label == bucket)
            .map(|(_, color)| *color)
    }

    pub fn labels(&self) -> impl Iterator<Item = &'static str> {
        self.entries.iter().map(|(label, _)| *label)
    }

    /// Parse the configured color for `bucket` the same way a browser would.
    /// None if the bucket is unknown or the color name does not parse.
    pub fn rgba8(&self, bucket: &str) -> Option<[u8; 4]> {
        let name = self.get(bucket)?;
        colorgrad::Color::from_html(name)
            .ok()
            .map(|color| color.to_rgba8())
    }
}

// Emitted as a JSON object so the browser sees `palette.bucket["1000x"]`.
impl Serialize for BucketColors {
    fn serialize<S: Serializer>(&self, serializer: S) -> Result<S::Ok, S::Error> {
        let mut map = serializer.serialize_map(Some(self.entries.len()))?;
        for (label, color) in self.entries {
            map.serialize_entry(label, color)?;
        }
        map.end()
    }
}

#[derive(Debug, serde::Serialize)]
pub struct PaletteConfig {
    pub bucket: BucketColors,
}

pub const PALETTE: PaletteConfig = PaletteConfig {
    bucket: BucketColors {
        entries: &[
            ("1000x", "blue"),
            ("10000x", "red"),
        ],
    },
};
