use serde::{Deserialize, Serialize};

use super::{CELL_COUNT, Climate, HexCell, Humidity, Season, WeatherModel};

/// Weather kinds offered for manual selection, as description ids.
const MANUAL_KINDS: [u8; 10] = [
    0,  // Clear skies
    3,  // Overcast
    4,  // Thick fog
    6,  // Steady rain
    7,  // Heavy downpour
    8,  // Thunderstorm
    9,  // Light snowfall
    11, // Blizzard
    14, // Scorching heat
    16, // Dust storm
];

/// A curated manual weather choice, borrowed from an ordinary cell.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct ManualOption {
    pub label: String,
    pub climate: Climate,
    pub humidity: Humidity,
    pub cell: HexCell,
    /// The source cell belongs to the requested pair and season.
    pub valid: bool,
}

/// Manual options for a season/climate/humidity selection.
///
/// Each kind is looked up first in the requested pair within the season's
/// region, then anywhere in the requested pair, then in the other pairs in
/// enum order. Kinds no table contains are left out.
pub fn manual_options(
    model: &WeatherModel,
    season: Season,
    climate: Climate,
    humidity: Humidity,
) -> Vec<ManualOption> {
    let cells = || (0..CELL_COUNT as u8).map(HexCell);
    let others = Climate::ALL
        .into_iter()
        .flat_map(|c| Humidity::ALL.into_iter().map(move |h| (c, h)))
        .filter(|pair| *pair != (climate, humidity));

    let mut options = Vec::new();
    for kind in MANUAL_KINDS {
        let matches = |c: Climate, h: Humidity, cell: HexCell| {
            model.description_id(c, h, cell) == Some(kind)
        };

        let source = cells()
            .find(|cell| model.is_in_season(*cell, season) && matches(climate, humidity, *cell))
            .map(|cell| (climate, humidity, cell))
            .or_else(|| {
                cells()
                    .find(|cell| matches(climate, humidity, *cell))
                    .map(|cell| (climate, humidity, cell))
            })
            .or_else(|| {
                others.clone().find_map(|(c, h)| {
                    cells().find(|cell| matches(c, h, *cell)).map(|cell| (c, h, cell))
                })
            });

        let Some((c, h, cell)) = source else {
            continue;
        };
        let Some(label) = model.description(c, h, cell) else {
            continue;
        };
        options.push(ManualOption {
            label: label.to_string(),
            climate: c,
            humidity: h,
            cell,
            valid: c == climate && h == humidity && model.is_in_season(cell, season),
        });
    }
    options
}
