pub mod calendar;
pub mod cli {
    pub mod commands;
}
pub mod config {
    pub mod weather;
}
pub mod model;
pub mod persistence;
pub mod weather;
