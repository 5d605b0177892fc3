pub mod args;
pub mod input;
pub mod questions;
pub mod render;

#[derive(Debug, thiserror::Error)]
pub enum ReportError {
    #[error("IO error: {0}")]
    Io(#[from] std::io::Error),

    #[error("Malformed snapshot: {0}")]
    Json(#[from] serde_json::Error),

    #[error("Image error: {0}")]
    Image(#[from] image::ImageError),
}

/// Everything the questions need besides the rows themselves.
#[derive(Debug, Clone)]
pub struct Settings {
    pub team: String,
    pub attack_side: analysis::event::Side,
    pub defend_side: analysis::event::Side,
    pub zone: analysis::geometry::Zone,
    pub target_area: String,
    pub weapon_classes: analysis::inventory::WeaponClasses,
    pub min_weapons: usize,
    pub cell_size: f32,
    pub embed_png: bool,
}

impl Settings {
    pub fn annotation(&self) -> analysis::annotate::Config {
        analysis::annotate::Config {
            zone: self.zone.clone(),
            weapon_classes: self.weapon_classes.clone(),
        }
    }
}
