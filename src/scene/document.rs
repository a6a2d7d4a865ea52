use std::collections::{BTreeMap, BTreeSet};
use std::fs::File;
use std::io::BufReader;
use std::path::Path;

use crate::foundation::error::{KinemaError, KinemaResult};
use crate::scene::model::{Animation, Element, Keyframe};

/// JSON-facing container for everything the evaluator reads.
///
/// This is the human-edited (or exported) input surface: a flat list of elements, animations and
/// keyframes linked by id, the same shape an external store hands to the render loop.
#[derive(Clone, Debug, Default, PartialEq, serde::Serialize, serde::Deserialize)]
pub struct Document {
    /// Animated elements.
    #[serde(default)]
    pub elements: Vec<Element>,
    /// Animations, in the order their results are merged.
    #[serde(default)]
    pub animations: Vec<Animation>,
    /// Keyframes of all animations, in any order.
    #[serde(default)]
    pub keyframes: Vec<Keyframe>,
}

impl Document {
    /// Parse a document from a JSON reader.
    pub fn from_reader<R: std::io::Read>(r: R) -> KinemaResult<Self> {
        serde_json::from_reader(r)
            .map_err(|e| KinemaError::serde(format!("parse document JSON: {e}")))
    }

    /// Parse a document from a JSON file on disk.
    pub fn from_path(path: impl AsRef<Path>) -> KinemaResult<Self> {
        let path = path.as_ref();
        let f = File::open(path).map_err(|e| {
            KinemaError::Other(
                anyhow::Error::new(e)
                    .context(format!("open document JSON '{}'", path.display())),
            )
        })?;
        Self::from_reader(BufReader::new(f))
    }

    /// Serialize as pretty-printed JSON.
    pub fn to_json_pretty(&self) -> KinemaResult<String> {
        serde_json::to_string_pretty(self)
            .map_err(|e| KinemaError::serde(format!("serialize document JSON: {e}")))
    }

    /// Look up an element by id.
    pub fn element(&self, id: &str) -> Option<&Element> {
        self.elements.iter().find(|e| e.id == id)
    }

    /// Append a preset-generated animation and its keyframes.
    pub fn push_animation(&mut self, animation: Animation, keyframes: Vec<Keyframe>) {
        self.animations.push(animation);
        self.keyframes.extend(keyframes);
    }

    /// Check referential integrity and timing invariants.
    ///
    /// The evaluator still accepts documents that fail this check.
    pub fn validate(&self) -> KinemaResult<()> {
        unique_ids("element", self.elements.iter().map(|e| e.id.as_str()))?;
        unique_ids("animation", self.animations.iter().map(|a| a.id.as_str()))?;
        unique_ids("keyframe", self.keyframes.iter().map(|k| k.id.as_str()))?;

        let element_ids: BTreeSet<&str> = self.elements.iter().map(|e| e.id.as_str()).collect();
        let mut keyframe_counts: BTreeMap<&str, usize> = BTreeMap::new();

        for a in &self.animations {
            if !element_ids.contains(a.element_id.as_str()) {
                return Err(KinemaError::validation(format!(
                    "animation '{}' references unknown element '{}'",
                    a.id, a.element_id
                )));
            }
            if !a.delay_ms.is_finite() || !a.duration_ms.is_finite() {
                return Err(KinemaError::validation(format!(
                    "animation '{}' has non-finite timing",
                    a.id
                )));
            }
            keyframe_counts.insert(a.id.as_str(), 0);
        }

        for k in &self.keyframes {
            let Some(count) = keyframe_counts.get_mut(k.animation_id.as_str()) else {
                return Err(KinemaError::validation(format!(
                    "keyframe '{}' references unknown animation '{}'",
                    k.id, k.animation_id
                )));
            };
            if !k.position_ms.is_finite() {
                return Err(KinemaError::validation(format!(
                    "keyframe '{}' has a non-finite position",
                    k.id
                )));
            }
            *count += 1;
        }

        for a in &self.animations {
            let count = keyframe_counts.get(a.id.as_str()).copied().unwrap_or(0);
            if count > 1 && a.duration_ms <= 0.0 {
                return Err(KinemaError::validation(format!(
                    "animation '{}' has {count} keyframes but duration_ms {} (must be > 0)",
                    a.id, a.duration_ms
                )));
            }
        }

        Ok(())
    }
}

fn unique_ids<'a>(kind: &str, ids: impl Iterator<Item = &'a str>) -> KinemaResult<()> {
    let mut seen = BTreeSet::new();
    for id in ids {
        if !seen.insert(id) {
            return Err(KinemaError::validation(format!("duplicate {kind} id '{id}'")));
        }
    }
    Ok(())
}

#[cfg(test)]
#[path = "../../tests/unit/scene/document.rs"]
mod tests;
