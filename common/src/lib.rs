#[derive(Debug, Clone, PartialEq, Eq, serde::Serialize, serde::Deserialize)]
pub struct TeamSelection {
    pub team: String,
    pub side: String,
}

/// Whether a team tends to enter through a given route.
#[derive(Debug, Clone, PartialEq, Eq, serde::Serialize, serde::Deserialize)]
pub struct EntryRouteAnswer {
    pub selection: TeamSelection,
    pub pairs: Vec<PlayerRoundTally>,
    pub pairs_inside: usize,
    pub pairs_outside: usize,
    pub common: bool,
}

#[derive(Debug, Clone, PartialEq, Eq, serde::Serialize, serde::Deserialize)]
pub struct PlayerRoundTally {
    pub player: String,
    pub round_num: u32,
    pub inside: usize,
    pub outside: usize,
}

/// Average clock at which a team is in an area with enough weapons.
/// `average_clock` is `None` when that never happened.
#[derive(Debug, Clone, PartialEq, Eq, serde::Serialize, serde::Deserialize)]
pub struct EntryTimingAnswer {
    pub selection: TeamSelection,
    pub area: String,
    pub weapon_classes: Vec<String>,
    pub min_weapons: usize,
    pub latest: Vec<PlayerRoundClock>,
    pub average_clock: Option<String>,
}

#[derive(Debug, Clone, PartialEq, Eq, serde::Serialize, serde::Deserialize)]
pub struct PlayerRoundClock {
    pub player: String,
    pub round_num: u32,
    pub clock_time: String,
}

#[derive(Debug, Clone, PartialEq, serde::Serialize, serde::Deserialize)]
pub struct HoldPositionAnswer {
    pub selection: TeamSelection,
    pub area: String,
    pub samples: usize,
    pub hottest: Option<HotCell>,
    /// Base64 encoded PNG of the density.
    pub png_data: Option<String>,
}

#[derive(Debug, Clone, Copy, PartialEq, serde::Serialize, serde::Deserialize)]
pub struct HotCell {
    pub min_x: f64,
    pub min_y: f64,
    pub max_x: f64,
    pub max_y: f64,
    pub count: usize,
}

#[derive(Debug, Clone, Default, PartialEq, serde::Serialize, serde::Deserialize)]
pub struct TacticalReport {
    pub rows: usize,
    pub rejected_rows: usize,
    pub entry_route: Option<EntryRouteAnswer>,
    pub entry_timing: Option<EntryTimingAnswer>,
    pub hold_position: Option<HoldPositionAnswer>,
}
