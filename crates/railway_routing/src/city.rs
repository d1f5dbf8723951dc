use crate::{constants::DEFAULT_CITIES, error::RoutingError};

crate::define_index_newtype!(CityIdx);

/// Ordered list of city names. The position of a name is its node index in
/// the distance matrix.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Cities(Vec<String>);

impl Cities {
    pub fn new(names: Vec<String>) -> Self {
        Cities(names)
    }

    pub fn len(&self) -> usize {
        self.0.len()
    }

    pub fn is_empty(&self) -> bool {
        self.0.is_empty()
    }

    pub fn name(&self, idx: CityIdx) -> Option<&str> {
        self.0.get(idx.get()).map(String::as_str)
    }

    pub fn index_of(&self, name: &str) -> Option<CityIdx> {
        self.0.iter().position(|city| city == name).map(CityIdx::new)
    }

    pub fn iter(&self) -> impl Iterator<Item = &str> {
        self.0.iter().map(String::as_str)
    }

    pub fn names(&self) -> &[String] {
        &self.0
    }

    /// Maps a path of indices to city names. Indices come from a matrix of the
    /// same size, so every lookup succeeds.
    pub fn path_names(&self, path: &[CityIdx]) -> Vec<String> {
        path.iter().map(|&idx| self.0[idx].clone()).collect()
    }

    /// Resolves a source/destination pair of names, rejecting unknown names and
    /// identical endpoints.
    pub fn resolve_pair(
        &self,
        source: &str,
        destination: &str,
    ) -> Result<(CityIdx, CityIdx), RoutingError> {
        let source_idx = self
            .index_of(source)
            .ok_or_else(|| RoutingError::UnknownCity(source.to_string()))?;
        let destination_idx = self
            .index_of(destination)
            .ok_or_else(|| RoutingError::UnknownCity(destination.to_string()))?;

        if source_idx == destination_idx {
            return Err(RoutingError::SameEndpoints);
        }

        Ok((source_idx, destination_idx))
    }
}

impl Default for Cities {
    fn default() -> Self {
        Cities(DEFAULT_CITIES.iter().map(|name| name.to_string()).collect())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_default_cities_order() {
        let cities = Cities::default();
        assert_eq!(cities.len(), 8);
        assert_eq!(cities.index_of("Mumbai"), Some(CityIdx::new(0)));
        assert_eq!(cities.index_of("Delhi"), Some(CityIdx::new(3)));
        assert_eq!(cities.index_of("Ahmedabad"), Some(CityIdx::new(7)));
        assert_eq!(cities.name(CityIdx::new(6)), Some("Shimla"));
        assert_eq!(cities.name(CityIdx::new(8)), None);
    }

    #[test]
    fn test_index_of_is_case_sensitive() {
        let cities = Cities::default();
        assert_eq!(cities.index_of("mumbai"), None);
    }

    #[test]
    fn test_resolve_pair() {
        let cities = Cities::default();

        assert_eq!(
            cities.resolve_pair("Jaipur", "Shimla"),
            Ok((CityIdx::new(5), CityIdx::new(6)))
        );
        assert_eq!(
            cities.resolve_pair("Jaipur", "Atlantis"),
            Err(RoutingError::UnknownCity(String::from("Atlantis")))
        );
        assert_eq!(
            cities.resolve_pair("Delhi", "Delhi"),
            Err(RoutingError::SameEndpoints)
        );
    }
}
