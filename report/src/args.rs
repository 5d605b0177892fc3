use analysis::event::Side;
use analysis::geometry::{Boundary, HeightBand, Vertex, Zone};

/// Light blue entry route towards B, used when no boundary is given.
pub const DEFAULT_BOUNDARY: &str = "-1735,250;-2024,398;-2806,742;-2472,1233;-1565,580";

#[derive(Debug, Clone, Copy, PartialEq, Eq, clap::ValueEnum)]
pub enum Format {
    Text,
    Json,
}

/// Answers tactical questions about the rows of recorded rounds
#[derive(Debug, clap::Parser)]
pub struct Args {
    /// Snapshot of event rows, as a JSON array or JSON lines
    pub input: std::path::PathBuf,

    #[arg(long, default_value = "Team2")]
    pub team: String,

    /// Side the entry route and timing questions look at
    #[arg(long, default_value = "T")]
    pub attack_side: Side,

    /// Side the hold position question looks at
    #[arg(long, default_value = "CT")]
    pub defend_side: Side,

    /// Entry route as `x,y;x,y;...`, closed automatically
    #[arg(long, value_parser = parse_boundary, default_value = DEFAULT_BOUNDARY, allow_hyphen_values = true)]
    pub boundary: Boundary,

    #[arg(long, default_value_t = HeightBand::DEFAULT.min, allow_negative_numbers = true)]
    pub z_min: f64,

    #[arg(long, default_value_t = HeightBand::DEFAULT.max, allow_negative_numbers = true)]
    pub z_max: f64,

    #[arg(long, default_value = "BombsiteB")]
    pub area: String,

    #[arg(long = "weapon-class", default_values = ["Rifle", "SMG"])]
    pub weapon_classes: Vec<String>,

    #[arg(long, default_value_t = 2)]
    pub min_weapons: usize,

    /// Heatmap cell size in world units
    #[arg(long, default_value_t = 50.0)]
    pub cell_size: f32,

    /// Write the hold position heatmap as PNG
    #[arg(long)]
    pub heatmap_out: Option<std::path::PathBuf>,

    /// Include the heatmap PNG in JSON output
    #[arg(long)]
    pub embed_png: bool,

    #[arg(long, value_enum, default_value_t = Format::Text)]
    pub format: Format,

    #[arg(short, long, action = clap::ArgAction::Count)]
    pub verbose: u8,
}

impl Args {
    pub fn settings(&self) -> crate::Settings {
        crate::Settings {
            team: self.team.clone(),
            attack_side: self.attack_side,
            defend_side: self.defend_side,
            zone: Zone::new(
                self.boundary.clone(),
                HeightBand {
                    min: self.z_min,
                    max: self.z_max,
                },
            ),
            target_area: self.area.clone(),
            weapon_classes: self.weapon_classes.iter().cloned().collect(),
            min_weapons: self.min_weapons,
            cell_size: self.cell_size,
            embed_png: self.embed_png,
        }
    }
}

pub fn parse_boundary(raw: &str) -> Result<Boundary, String> {
    let vertices = raw
        .split(';')
        .map(str::trim)
        .filter(|v| !v.is_empty())
        .map(|vertex| {
            let (x, y) = vertex
                .split_once(',')
                .ok_or_else(|| format!("Vertex {:?} is not `x,y`", vertex))?;

            let x: f64 = x.trim().parse().map_err(|e| format!("Vertex {:?}: {}", vertex, e))?;
            let y: f64 = y.trim().parse().map_err(|e| format!("Vertex {:?}: {}", vertex, e))?;

            Ok(Vertex { x, y })
        })
        .collect::<Result<Vec<_>, String>>()?;

    Boundary::new(vertices).map_err(|e| e.to_string())
}

#[cfg(test)]
mod tests {
    use super::*;
    use clap::Parser;

    #[test]
    fn defaults() {
        let args = Args::try_parse_from(["report", "rounds.json"]).unwrap();
        let settings = args.settings();

        assert_eq!("Team2", settings.team);
        assert_eq!(Side::T, settings.attack_side);
        assert_eq!(Side::CT, settings.defend_side);
        assert_eq!(5, settings.zone.boundary.vertices().len());
        assert_eq!(HeightBand::DEFAULT, settings.zone.band);
        assert_eq!(vec!["Rifle", "SMG"], settings.weapon_classes.iter().collect::<Vec<_>>());
        assert_eq!(Format::Text, args.format);
    }

    #[test]
    fn custom_boundary() {
        let args = Args::try_parse_from([
            "report",
            "rounds.json",
            "--boundary",
            "-10,0; 10,0; 0,10",
            "--z-min",
            "-50",
            "--format",
            "json",
        ])
        .unwrap();

        assert_eq!(3, args.boundary.vertices().len());
        assert_eq!(-50.0, args.z_min);
        assert_eq!(Format::Json, args.format);
    }

    #[test]
    fn invalid_boundary() {
        assert!(parse_boundary("0,0;1,1").is_err());
        assert!(parse_boundary("0,0;1;2,2").is_err());
        assert!(parse_boundary("0,0;1,x;2,2").is_err());
        assert!(parse_boundary("NaN,0;10,0;0,10").is_err());
        assert!(parse_boundary("0,0;inf,0;0,10").is_err());
    }
}
