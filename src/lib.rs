//! Season-statistics client: fetches drivers, races, and the season
//! overview from an external JSON API, caches responses in memory, and
//! shapes them into chart-ready and comparison-ready series.

pub mod api;
pub mod cache;
pub mod compare;
pub mod filter;
pub mod logging;
pub mod model;
pub mod race;
pub mod render;
pub mod series;
pub mod state;
