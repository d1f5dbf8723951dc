pub mod city;
pub mod constants;
pub mod distance_matrix;
pub mod error;
pub mod matrix_file;
pub mod network;
pub mod network_store;
pub mod routing;
mod utils;

#[cfg(test)]
pub(crate) mod test_utils;
