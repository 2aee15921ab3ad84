// Read-only snapshot of what the stage shows

use super::characters::{MotionController, Pose};
use super::wardrobe::{OutfitStore, SlotKind};

/// Shown in the current look panel for an empty slot
pub const NOT_SELECTED: &str = "Not selected";

/// One clothing layer drawn over the character
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Layer {
    pub kind: SlotKind,
    pub glyph: String,
    pub name: String,
}

/// Everything needed to draw the character for one frame
#[derive(Debug, Clone, PartialEq)]
pub struct CharacterView {
    /// Horizontal position, percent of stage width
    pub position: f32,
    pub flip_horizontal: bool,
    pub pose: Pose,
    /// Plays the outfit change effect
    pub changing: bool,
    /// Worn items in drawing order
    pub layers: Vec<Layer>,
}

impl CharacterView {
    pub fn capture(outfit: &OutfitStore, motion: &MotionController) -> Self {
        let layers = outfit
            .equipped()
            .into_iter()
            .map(|(kind, item)| Layer {
                kind,
                glyph: item.glyph.clone(),
                name: item.name.clone(),
            })
            .collect();

        Self {
            position: motion.position(),
            flip_horizontal: motion.state().flip_horizontal(),
            pose: motion.pose(),
            changing: outfit.is_changing(),
            layers,
        }
    }

    /// The layer worn in a slot
    pub fn layer(&self, kind: SlotKind) -> Option<&Layer> {
        self.layers.iter().find(|layer| layer.kind == kind)
    }

    /// One `(group, item name)` line per slot, empty slots included
    pub fn look(&self) -> Vec<(&'static str, &str)> {
        SlotKind::ALL
            .iter()
            .map(|kind| {
                let name = self.layer(*kind).map_or(NOT_SELECTED, |layer| layer.name.as_str());
                (kind.label(), name)
            })
            .collect()
    }

    /// The current look panel as one line, e.g. `Headwear: Beanie, Tops: Not selected`
    pub fn look_line(&self) -> String {
        self.look()
            .into_iter()
            .map(|(group, name)| format!("{}: {}", group, name))
            .collect::<Vec<_>>()
            .join(", ")
    }

    /// Compact one-line summary, e.g. `👕 👖 👟 | walk 62% ->`
    pub fn summary(&self) -> String {
        let mut line = String::new();

        if self.layers.is_empty() {
            line.push_str("(nothing worn)");
        } else {
            let glyphs: Vec<&str> = self.layers.iter().map(|l| l.glyph.as_str()).collect();
            line.push_str(&glyphs.join(" "));
        }

        let arrow = if self.flip_horizontal { "<-" } else { "->" };
        line.push_str(&format!(
            " | {} {:.0}% {}",
            self.pose.animation_name(),
            self.position,
            arrow
        ));

        if self.changing {
            line.push_str(" | changing");
        }
        line
    }
}
