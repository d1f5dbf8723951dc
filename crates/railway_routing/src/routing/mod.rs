pub mod alternative_routes;
pub mod dijkstra;
pub mod route_option;
pub mod shortest_path;
