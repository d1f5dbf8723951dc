use crate::{city::CityIdx, distance_matrix::Distance, distance_matrix::DistanceMatrix};

#[derive(Debug, Clone, PartialEq)]
pub struct ShortestPath {
    pub distance: Distance,
    pub path: Vec<CityIdx>,
}

impl ShortestPath {
    pub fn edges(&self) -> impl Iterator<Item = (CityIdx, CityIdx)> + '_ {
        self.path.windows(2).map(|pair| (pair[0], pair[1]))
    }
}

pub trait ShortestPathAlgorithm {
    /// Computes the minimum-weight path from `start` to `end`, or `None` when
    /// `end` cannot be reached.
    fn calc_path(
        &mut self,
        matrix: &DistanceMatrix,
        start: CityIdx,
        end: CityIdx,
    ) -> Option<ShortestPath>;
}
