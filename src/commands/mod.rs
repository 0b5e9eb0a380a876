pub mod links;
pub mod projects;
pub mod render;
pub mod tags;
pub mod theme;
