//! Static weather tables for every climate/humidity pair.
//!
//! Tables are flat arrays indexed by `pair * CELL_COUNT + cell` through
//! [`super::pair_index`]. Temperatures are degrees Fahrenheit.

use super::WeatherEffect::{self, *};
use super::{CELL_COUNT, PAIR_COUNT};

/// Shared description catalogue. Per-pair description tables index into this.
pub(crate) const DESCRIPTION_TEXT: [&str; 20] = [
    "Clear skies",
    "Sunny with a light breeze",
    "Partly cloudy",
    "Overcast",
    "Thick fog",
    "Light drizzle",
    "Steady rain",
    "Heavy downpour",
    "Thunderstorm",
    "Light snowfall",
    "Heavy snow",
    "Blizzard",
    "Freezing rain",
    "Hailstorm",
    "Scorching heat",
    "Dry, gusty winds",
    "Dust storm",
    "Muggy and humid",
    "Bitter cold under clear skies",
    "Snow flurries",
];

pub(crate) const TEMPERATURES: [[i32; CELL_COUNT]; PAIR_COUNT] = [
    // Cold / Barren
    [
        10, 33, 27, 47, 10, 28, 36, 31, 50, 7, 10, 33,
        27, 47, 55, 1, 9, 32, 35, 30, 49, 57, 8, 11,
        34, 23, 48, 56, 8, 31, 34, 29, 53, 11, 34, 23,
        48,
    ],
    // Cold / Modest
    [
        7, 30, 24, 44, 7, 25, 33, 28, 47, 4, 7, 30,
        24, 44, 52, -2, 6, 29, 32, 27, 46, 54, 5, 8,
        31, 20, 45, 53, 5, 28, 31, 26, 50, 8, 31, 20,
        45,
    ],
    // Cold / Verdant
    [
        5, 28, 22, 42, 5, 23, 31, 26, 45, 2, 5, 28,
        22, 42, 50, -4, 4, 27, 30, 25, 44, 52, 3, 6,
        29, 18, 43, 51, 3, 26, 29, 24, 48, 6, 29, 18,
        43,
    ],
    // Temperate / Barren
    [
        38, 61, 55, 75, 38, 56, 64, 59, 78, 35, 38, 61,
        55, 75, 83, 29, 37, 60, 63, 58, 77, 85, 36, 39,
        62, 51, 76, 84, 36, 59, 62, 57, 81, 39, 62, 51,
        76,
    ],
    // Temperate / Modest
    [
        35, 58, 52, 72, 35, 53, 61, 56, 75, 32, 35, 58,
        52, 72, 80, 26, 34, 57, 60, 55, 74, 82, 33, 36,
        59, 48, 73, 81, 33, 56, 59, 54, 78, 36, 59, 48,
        73,
    ],
    // Temperate / Verdant
    [
        33, 56, 50, 70, 33, 51, 59, 54, 73, 30, 33, 56,
        50, 70, 78, 24, 32, 55, 58, 53, 72, 80, 31, 34,
        57, 46, 71, 79, 31, 54, 57, 52, 76, 34, 57, 46,
        71,
    ],
    // Hot / Barren
    [
        62, 85, 79, 99, 62, 80, 88, 83, 102, 59, 62, 85,
        79, 99, 107, 53, 61, 84, 87, 82, 101, 109, 60, 63,
        86, 75, 100, 108, 60, 83, 86, 81, 105, 63, 86, 75,
        100,
    ],
    // Hot / Modest
    [
        59, 82, 76, 96, 59, 77, 85, 80, 99, 56, 59, 82,
        76, 96, 104, 50, 58, 81, 84, 79, 98, 106, 57, 60,
        83, 72, 97, 105, 57, 80, 83, 78, 102, 60, 83, 72,
        97,
    ],
    // Hot / Verdant
    [
        57, 80, 74, 94, 57, 75, 83, 78, 97, 54, 57, 80,
        74, 94, 102, 48, 56, 79, 82, 77, 96, 104, 55, 58,
        81, 70, 95, 103, 55, 78, 81, 76, 100, 58, 81, 70,
        95,
    ],
];

pub(crate) const DESCRIPTIONS: [[u8; CELL_COUNT]; PAIR_COUNT] = [
    // Cold / Barren
    [
        18, 0, 18, 0, 18, 0, 0, 0, 0, 18, 18, 0,
        18, 0, 0, 0, 0, 2, 2, 2, 1, 1, 3, 3,
        3, 3, 3, 3, 19, 3, 3, 3, 4, 9, 4, 9,
        5,
    ],
    // Cold / Modest
    [
        18, 0, 18, 0, 0, 0, 2, 2, 1, 3, 3, 3,
        3, 3, 3, 19, 19, 4, 4, 19, 4, 4, 9, 9,
        4, 9, 5, 5, 10, 12, 12, 10, 7, 11, 9, 11,
        8,
    ],
    // Cold / Verdant
    [
        3, 3, 3, 2, 19, 19, 3, 19, 4, 9, 9, 4,
        9, 5, 5, 10, 10, 10, 12, 10, 6, 6, 11, 11,
        9, 11, 8, 8, 11, 11, 9, 11, 8, 11, 9, 11,
        8,
    ],
    // Temperate / Barren
    [
        0, 0, 0, 0, 0, 0, 0, 0, 0, 0, 0, 0,
        0, 0, 14, 2, 2, 1, 1, 1, 1, 15, 3, 3,
        3, 3, 3, 15, 3, 4, 4, 4, 16, 4, 5, 5,
        5,
    ],
    // Temperate / Modest
    [
        0, 0, 0, 0, 2, 1, 1, 1, 1, 3, 3, 3,
        3, 3, 17, 19, 4, 4, 4, 4, 4, 2, 4, 4,
        5, 5, 5, 2, 12, 7, 7, 7, 7, 9, 8, 8,
        8,
    ],
    // Temperate / Verdant
    [
        3, 2, 2, 2, 3, 4, 4, 4, 4, 4, 4, 5,
        5, 5, 5, 10, 12, 6, 6, 6, 6, 8, 9, 9,
        8, 8, 8, 8, 9, 8, 13, 8, 8, 9, 8, 8,
        8,
    ],
    // Hot / Barren
    [
        0, 14, 0, 14, 0, 14, 14, 14, 14, 0, 0, 14,
        0, 14, 14, 1, 1, 15, 15, 15, 15, 15, 3, 3,
        15, 3, 15, 15, 4, 16, 16, 16, 16, 5, 0, 5,
        0,
    ],
    // Hot / Modest
    [
        0, 14, 0, 14, 1, 1, 0, 0, 0, 3, 3, 17,
        3, 17, 17, 4, 4, 2, 2, 4, 2, 2, 5, 5,
        2, 5, 2, 2, 7, 8, 8, 7, 8, 8, 7, 8,
        7,
    ],
    // Hot / Verdant
    [
        2, 17, 2, 17, 4, 4, 17, 4, 17, 5, 5, 2,
        5, 2, 2, 6, 6, 6, 8, 6, 8, 8, 8, 8,
        7, 8, 7, 7, 8, 8, 7, 8, 7, 8, 7, 8,
        7,
    ],
];

pub(crate) const EFFECTS: [[WeatherEffect; CELL_COUNT]; PAIR_COUNT] = [
    // Cold / Barren
    [
        Calm, Calm, Calm, Calm, Calm, Calm, Calm,
        Calm, Calm, Calm, Calm, Calm, Calm, Calm,
        Calm, Calm, Calm, Clouds, Clouds, Clouds, Calm,
        Calm, Clouds, Clouds, Clouds, Clouds, Clouds, Clouds,
        Snow, Clouds, Clouds, Clouds, Fog, Snow, Fog,
        Snow, Rain,
    ],
    // Cold / Modest
    [
        Calm, Calm, Calm, Calm, Calm, Calm, Clouds,
        Clouds, Calm, Clouds, Clouds, Clouds, Clouds, Clouds,
        Clouds, Snow, Snow, Fog, Fog, Snow, Fog,
        Fog, Snow, Snow, Fog, Snow, Rain, Rain,
        Snow, Sleet, Sleet, Snow, HeavyRain, Blizzard, Snow,
        Blizzard, Thunder,
    ],
    // Cold / Verdant
    [
        Clouds, Clouds, Clouds, Clouds, Snow, Snow, Clouds,
        Snow, Fog, Snow, Snow, Fog, Snow, Rain,
        Rain, Snow, Snow, Snow, Sleet, Snow, Rain,
        Rain, Blizzard, Blizzard, Snow, Blizzard, Thunder, Thunder,
        Blizzard, Blizzard, Snow, Blizzard, Thunder, Blizzard, Snow,
        Blizzard, Thunder,
    ],
    // Temperate / Barren
    [
        Calm, Calm, Calm, Calm, Calm, Calm, Calm,
        Calm, Calm, Calm, Calm, Calm, Calm, Calm,
        Heat, Clouds, Clouds, Calm, Calm, Calm, Calm,
        Wind, Clouds, Clouds, Clouds, Clouds, Clouds, Wind,
        Clouds, Fog, Fog, Fog, Sandstorm, Fog, Rain,
        Rain, Rain,
    ],
    // Temperate / Modest
    [
        Calm, Calm, Calm, Calm, Clouds, Calm, Calm,
        Calm, Calm, Clouds, Clouds, Clouds, Clouds, Clouds,
        Heat, Snow, Fog, Fog, Fog, Fog, Fog,
        Clouds, Fog, Fog, Rain, Rain, Rain, Clouds,
        Sleet, HeavyRain, HeavyRain, HeavyRain, HeavyRain, Snow, Thunder,
        Thunder, Thunder,
    ],
    // Temperate / Verdant
    [
        Clouds, Clouds, Clouds, Clouds, Clouds, Fog, Fog,
        Fog, Fog, Fog, Fog, Rain, Rain, Rain,
        Rain, Snow, Sleet, Rain, Rain, Rain, Rain,
        Thunder, Snow, Snow, Thunder, Thunder, Thunder, Thunder,
        Snow, Thunder, Hail, Thunder, Thunder, Snow, Thunder,
        Thunder, Thunder,
    ],
    // Hot / Barren
    [
        Calm, Heat, Calm, Heat, Calm, Heat, Heat,
        Heat, Heat, Calm, Calm, Heat, Calm, Heat,
        Heat, Calm, Calm, Wind, Wind, Wind, Wind,
        Wind, Clouds, Clouds, Wind, Clouds, Wind, Wind,
        Fog, Sandstorm, Sandstorm, Sandstorm, Sandstorm, Rain, Calm,
        Rain, Calm,
    ],
    // Hot / Modest
    [
        Calm, Heat, Calm, Heat, Calm, Calm, Calm,
        Calm, Calm, Clouds, Clouds, Heat, Clouds, Heat,
        Heat, Fog, Fog, Clouds, Clouds, Fog, Clouds,
        Clouds, Rain, Rain, Clouds, Rain, Clouds, Clouds,
        HeavyRain, Thunder, Thunder, HeavyRain, Thunder, Thunder, HeavyRain,
        Thunder, HeavyRain,
    ],
    // Hot / Verdant
    [
        Clouds, Heat, Clouds, Heat, Fog, Fog, Heat,
        Fog, Heat, Rain, Rain, Clouds, Rain, Clouds,
        Clouds, Rain, Rain, Rain, Thunder, Rain, Thunder,
        Thunder, Thunder, Thunder, HeavyRain, Thunder, HeavyRain, HeavyRain,
        Thunder, Thunder, HeavyRain, Thunder, HeavyRain, Thunder, HeavyRain,
        Thunder, HeavyRain,
    ],
];
