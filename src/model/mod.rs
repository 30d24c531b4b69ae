//! The hex-flower weather model: closed enums, static per-pair tables and
//! the per-season adjacency built from the fixed flower layout.

pub mod layout;
pub mod manual;
mod tables;

use std::fmt;
use std::str::FromStr;

use serde::{Deserialize, Serialize};
use thiserror::Error;

pub use manual::{ManualOption, manual_options};

/// Number of cells in the hex flower.
pub const CELL_COUNT: usize = 37;
/// Number of climate/humidity table variants.
pub const PAIR_COUNT: usize = Climate::ALL.len() * Humidity::ALL.len();

// === Enums ===

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Climate {
    Cold,
    Temperate,
    Hot,
}

impl Climate {
    pub const ALL: [Climate; 3] = [Climate::Cold, Climate::Temperate, Climate::Hot];

    pub fn index(self) -> usize {
        self as usize
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Humidity {
    Barren,
    Modest,
    Verdant,
}

impl Humidity {
    pub const ALL: [Humidity; 3] = [Humidity::Barren, Humidity::Modest, Humidity::Verdant];

    pub fn index(self) -> usize {
        self as usize
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Season {
    Spring,
    Summer,
    Fall,
    Winter,
}

impl Season {
    pub const ALL: [Season; 4] = [Season::Spring, Season::Summer, Season::Fall, Season::Winter];

    pub fn index(self) -> usize {
        self as usize
    }

    pub fn from_index(index: usize) -> Option<Season> {
        Season::ALL.get(index).copied()
    }
}

/// Outcome of one random-walk draw. `Stay` keeps the current cell.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum Direction {
    Stay,
    N,
    NE,
    SE,
    S,
    SW,
    NW,
}

impl Direction {
    /// Draw order used by the sampler. Reordering changes seeded results.
    pub const ALL: [Direction; 7] = [
        Direction::Stay,
        Direction::N,
        Direction::NE,
        Direction::SE,
        Direction::S,
        Direction::SW,
        Direction::NW,
    ];

    /// The six moving directions, in adjacency-table column order.
    pub const MOVES: [Direction; 6] = [
        Direction::N,
        Direction::NE,
        Direction::SE,
        Direction::S,
        Direction::SW,
        Direction::NW,
    ];

    /// Column in the adjacency table, `None` for `Stay`.
    pub fn column(self) -> Option<usize> {
        match self {
            Direction::Stay => None,
            Direction::N => Some(0),
            Direction::NE => Some(1),
            Direction::SE => Some(2),
            Direction::S => Some(3),
            Direction::SW => Some(4),
            Direction::NW => Some(5),
        }
    }

    pub fn opposite(self) -> Direction {
        match self {
            Direction::Stay => Direction::Stay,
            Direction::N => Direction::S,
            Direction::NE => Direction::SW,
            Direction::SE => Direction::NW,
            Direction::S => Direction::N,
            Direction::SW => Direction::NE,
            Direction::NW => Direction::SE,
        }
    }
}

/// Visual/audio effect associated with a cell. Opaque to the engine.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "kebab-case")]
pub enum WeatherEffect {
    Calm,
    Clouds,
    Fog,
    Rain,
    HeavyRain,
    Thunder,
    Snow,
    Blizzard,
    Sleet,
    Hail,
    Heat,
    Wind,
    Sandstorm,
}

impl WeatherEffect {
    pub fn id(self) -> &'static str {
        match self {
            WeatherEffect::Calm => "calm",
            WeatherEffect::Clouds => "clouds",
            WeatherEffect::Fog => "fog",
            WeatherEffect::Rain => "rain",
            WeatherEffect::HeavyRain => "heavy-rain",
            WeatherEffect::Thunder => "thunder",
            WeatherEffect::Snow => "snow",
            WeatherEffect::Blizzard => "blizzard",
            WeatherEffect::Sleet => "sleet",
            WeatherEffect::Hail => "hail",
            WeatherEffect::Heat => "heat",
            WeatherEffect::Wind => "wind",
            WeatherEffect::Sandstorm => "sandstorm",
        }
    }
}

/// Index of a hex-flower cell. Persisted values are not trusted until
/// checked with [`WeatherModel::validate_weather_parameters`].
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize)]
#[serde(transparent)]
pub struct HexCell(pub u8);

impl HexCell {
    pub fn index(self) -> usize {
        self.0 as usize
    }
}

impl fmt::Display for HexCell {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.0)
    }
}

macro_rules! lowercase_names {
    ($ty:ident { $($variant:ident => $name:literal),+ $(,)? }) => {
        impl $ty {
            pub fn name(self) -> &'static str {
                match self {
                    $($ty::$variant => $name,)+
                }
            }
        }

        impl fmt::Display for $ty {
            fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
                f.write_str(self.name())
            }
        }

        impl FromStr for $ty {
            type Err = String;

            fn from_str(s: &str) -> Result<Self, Self::Err> {
                match s.trim().to_ascii_lowercase().as_str() {
                    $($name => Ok($ty::$variant),)+
                    other => Err(format!(
                        "unknown {} '{}', expected one of {:?}",
                        stringify!($ty).to_ascii_lowercase(),
                        other,
                        [$($name),+]
                    )),
                }
            }
        }
    };
}

lowercase_names!(Climate { Cold => "cold", Temperate => "temperate", Hot => "hot" });
lowercase_names!(Humidity { Barren => "barren", Modest => "modest", Verdant => "verdant" });
lowercase_names!(Season { Spring => "spring", Summer => "summer", Fall => "fall", Winter => "winter" });

// === Errors ===

#[derive(Debug, Clone, PartialEq, Error)]
pub enum ModelError {
    #[error("no weather for cell {cell} in {climate}/{humidity}")]
    InvalidParameters {
        climate: Climate,
        humidity: Humidity,
        cell: HexCell,
    },
    #[error("{season} transition from cell {from} leads to {to}, outside the {season} region")]
    TransitionLeavesRegion { season: Season, from: HexCell, to: HexCell },
    #[error("{season} region cell {cell} is missing a transition")]
    MissingTransition { season: Season, cell: HexCell },
    #[error("cell {cell} is outside the {season} region but has {season} transitions")]
    StrayTransition { season: Season, cell: HexCell },
    #[error("{season} starting cell {cell} is outside the {season} region")]
    StartOutsideRegion { season: Season, cell: HexCell },
    #[error("{season} has no starting cells")]
    NoStartingCells { season: Season },
    #[error("description id {id} in {climate}/{humidity} cell {cell} is not in the catalogue")]
    UnknownDescription {
        climate: Climate,
        humidity: Humidity,
        cell: HexCell,
        id: u8,
    },
    #[error("{season} direction probabilities sum to {sum}, expected 1.0")]
    ProbabilitySum { season: Season, sum: f64 },
    #[error("{season} direction probability {value} is negative")]
    NegativeProbability { season: Season, value: f64 },
}

// === Model ===

/// Transitions for one season: `[cell][direction column]`, `None` is the
/// unreachable sentinel.
pub type AdjacencyTable = [[Option<HexCell>; 6]; CELL_COUNT];

pub(crate) fn pair_index(climate: Climate, humidity: Humidity) -> usize {
    climate.index() * Humidity::ALL.len() + humidity.index()
}

/// Read-only weather tables plus per-season adjacency and starting cells.
///
/// Construction checks every table for completeness so lookups at
/// generation time only have to range-check the cell.
#[derive(Debug, Clone)]
pub struct WeatherModel {
    adjacency: [AdjacencyTable; 4],
    starting_cells: [Vec<HexCell>; 4],
}

impl WeatherModel {
    pub fn new() -> Result<Self, ModelError> {
        let adjacency = Season::ALL.map(layout::build_adjacency);
        let starting_cells = Season::ALL.map(layout::starting_cells);
        let model = WeatherModel {
            adjacency,
            starting_cells,
        };
        model.check_tables()?;
        Ok(model)
    }

    fn check_tables(&self) -> Result<(), ModelError> {
        for season in Season::ALL {
            let table = &self.adjacency[season.index()];
            for (i, row) in table.iter().enumerate() {
                let cell = HexCell(i as u8);
                let in_region = layout::season_region(cell) == Some(season);
                for next in row {
                    match (in_region, next) {
                        (true, None) => return Err(ModelError::MissingTransition { season, cell }),
                        (true, Some(to)) if layout::season_region(*to) != Some(season) => {
                            return Err(ModelError::TransitionLeavesRegion {
                                season,
                                from: cell,
                                to: *to,
                            });
                        }
                        (false, Some(_)) => {
                            return Err(ModelError::StrayTransition { season, cell });
                        }
                        _ => {}
                    }
                }
            }

            let starts = &self.starting_cells[season.index()];
            if starts.is_empty() {
                return Err(ModelError::NoStartingCells { season });
            }
            if let Some(&cell) = starts.iter().find(|c| !self.is_in_season(**c, season)) {
                return Err(ModelError::StartOutsideRegion { season, cell });
            }
        }

        for climate in Climate::ALL {
            for humidity in Humidity::ALL {
                let row = &tables::DESCRIPTIONS[pair_index(climate, humidity)];
                for (i, &id) in row.iter().enumerate() {
                    if id as usize >= tables::DESCRIPTION_TEXT.len() {
                        return Err(ModelError::UnknownDescription {
                            climate,
                            humidity,
                            cell: HexCell(i as u8),
                            id,
                        });
                    }
                }
            }
        }
        Ok(())
    }

    /// Check that `cell` lies within the table range for the pair.
    pub fn validate_weather_parameters(
        &self,
        climate: Climate,
        humidity: Humidity,
        cell: HexCell,
    ) -> Result<(), ModelError> {
        if cell.index() < tables::TEMPERATURES[pair_index(climate, humidity)].len() {
            Ok(())
        } else {
            Err(ModelError::InvalidParameters {
                climate,
                humidity,
                cell,
            })
        }
    }

    pub fn temperature(&self, climate: Climate, humidity: Humidity, cell: HexCell) -> Option<i32> {
        tables::TEMPERATURES[pair_index(climate, humidity)]
            .get(cell.index())
            .copied()
    }

    pub fn description_id(&self, climate: Climate, humidity: Humidity, cell: HexCell) -> Option<u8> {
        tables::DESCRIPTIONS[pair_index(climate, humidity)]
            .get(cell.index())
            .copied()
    }

    pub fn description(
        &self,
        climate: Climate,
        humidity: Humidity,
        cell: HexCell,
    ) -> Option<&'static str> {
        let id = self.description_id(climate, humidity, cell)?;
        tables::DESCRIPTION_TEXT.get(id as usize).copied()
    }

    pub fn effect(&self, climate: Climate, humidity: Humidity, cell: HexCell) -> Option<WeatherEffect> {
        tables::EFFECTS[pair_index(climate, humidity)]
            .get(cell.index())
            .copied()
    }

    pub fn starting_cells(&self, season: Season) -> &[HexCell] {
        &self.starting_cells[season.index()]
    }

    /// Follow one step of the walk. `None` means the sentinel was hit,
    /// which includes staying on a cell outside the season's region.
    pub fn next_cell(&self, season: Season, cell: HexCell, direction: Direction) -> Option<HexCell> {
        let row = self.adjacency[season.index()].get(cell.index())?;
        match direction.column() {
            Some(col) => row[col],
            None => self.is_in_season(cell, season).then_some(cell),
        }
    }

    /// A cell belongs to a season when that season defines transitions from it.
    pub fn is_in_season(&self, cell: HexCell, season: Season) -> bool {
        self.adjacency[season.index()]
            .get(cell.index())
            .is_some_and(|row| row.iter().any(Option::is_some))
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn model() -> WeatherModel {
        WeatherModel::new().unwrap()
    }

    #[test]
    fn builtin_tables_pass_construction_checks() {
        assert!(WeatherModel::new().is_ok());
    }

    #[test]
    fn every_pair_defines_every_cell() {
        let model = model();
        for climate in Climate::ALL {
            for humidity in Humidity::ALL {
                for i in 0..CELL_COUNT as u8 {
                    let cell = HexCell(i);
                    assert!(model.validate_weather_parameters(climate, humidity, cell).is_ok());
                    assert!(model.temperature(climate, humidity, cell).is_some());
                    assert!(model.description(climate, humidity, cell).is_some());
                    assert!(model.effect(climate, humidity, cell).is_some());
                }
            }
        }
    }

    #[test]
    fn out_of_range_cell_is_rejected() {
        let model = model();
        let err = model
            .validate_weather_parameters(Climate::Hot, Humidity::Verdant, HexCell(37))
            .unwrap_err();
        assert!(matches!(err, ModelError::InvalidParameters { cell: HexCell(37), .. }));
        assert!(model.temperature(Climate::Hot, Humidity::Verdant, HexCell(200)).is_none());
    }

    #[test]
    fn season_regions_are_disjoint_and_cover_the_flower() {
        let model = model();
        for i in 0..CELL_COUNT as u8 {
            let owners: Vec<Season> = Season::ALL
                .into_iter()
                .filter(|s| model.is_in_season(HexCell(i), *s))
                .collect();
            assert_eq!(owners.len(), 1, "cell {} belongs to {:?}", i, owners);
        }
    }

    #[test]
    fn starting_cells_lie_in_their_season() {
        let model = model();
        for season in Season::ALL {
            assert!(!model.starting_cells(season).is_empty());
            for &cell in model.starting_cells(season) {
                assert!(model.is_in_season(cell, season));
            }
        }
    }

    #[test]
    fn stay_keeps_cell_and_off_region_moves_hit_sentinel() {
        let model = model();
        assert_eq!(
            model.next_cell(Season::Spring, HexCell(17), Direction::Stay),
            Some(HexCell(17))
        );
        // Cell 15 sits at the top of the flower, inside the winter region.
        for dir in Direction::ALL {
            assert_eq!(model.next_cell(Season::Summer, HexCell(15), dir), None);
        }
    }

    #[test]
    fn winter_is_colder_than_summer_on_average() {
        let model = model();
        let avg = |season: Season| {
            let cells: Vec<HexCell> = (0..CELL_COUNT as u8)
                .map(HexCell)
                .filter(|c| model.is_in_season(*c, season))
                .collect();
            let sum: i32 = cells
                .iter()
                .map(|c| model.temperature(Climate::Temperate, Humidity::Modest, *c).unwrap())
                .sum();
            sum as f64 / cells.len() as f64
        };
        assert!(avg(Season::Winter) < avg(Season::Summer));
    }

    #[test]
    fn enum_names_parse_case_insensitively() {
        assert_eq!("Temperate".parse::<Climate>().unwrap(), Climate::Temperate);
        assert_eq!(" verdant ".parse::<Humidity>().unwrap(), Humidity::Verdant);
        assert_eq!("FALL".parse::<Season>().unwrap(), Season::Fall);
        let err = "autumnal".parse::<Season>().unwrap_err();
        assert!(err.contains("season"));
    }

    #[test]
    fn effect_ids_match_serde_names() {
        let json = serde_json::to_string(&WeatherEffect::HeavyRain).unwrap();
        assert_eq!(json, format!("\"{}\"", WeatherEffect::HeavyRain.id()));
    }
}
