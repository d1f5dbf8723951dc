pub mod cities;
pub mod find_routes;
pub mod trains;
