use crate::domain::Location;

/// Case-insensitive prefix match on location names. An empty query matches nothing.
pub fn filter(query: &str, locations: &[Location]) -> Vec<Location> {
    if query.is_empty() {
        return Vec::new();
    }

    let query = query.to_lowercase();
    locations
        .iter()
        .filter(|location| location.name.to_lowercase().starts_with(&query))
        .cloned()
        .collect()
}

#[cfg(test)]
mod tests {
    use super::*;
    use pretty_assertions::assert_eq;
    use rstest::rstest;

    fn locations() -> Vec<Location> {
        vec![
            Location::new("Netherlands", 52.5, 5.75),
            Location::new("Nepal", 28.0, 84.0),
            Location::new("New Zealand", -41.0, 174.0),
            Location::new("Norway", 62.0, 10.0),
            Location::new("Benin", 9.5, 2.25),
        ]
    }

    fn names(locations: &[Location]) -> Vec<&str> {
        locations.iter().map(|location| location.name.as_str()).collect()
    }

    #[test]
    fn filter_returns_nothing_for_an_empty_query() {
        assert!(filter("", &locations()).is_empty());
    }

    #[rstest]
    #[case("ne", vec!["Netherlands", "Nepal", "New Zealand"])]
    #[case("NE", vec!["Netherlands", "Nepal", "New Zealand"])]
    #[case("nEw", vec!["New Zealand"])]
    #[case("norway", vec!["Norway"])]
    #[case("n", vec!["Netherlands", "Nepal", "New Zealand", "Norway"])]
    #[case("nin", vec![])]
    #[case("zealand", vec![])]
    fn filter_matches_name_prefixes_ignoring_case(#[case] query: &str, #[case] expected: Vec<&str>) {
        assert_eq!(names(&filter(query, &locations())), expected);
    }

    #[test]
    fn filter_keeps_the_coordinates_of_matches() {
        assert_eq!(filter("ben", &locations()), vec![Location::new("Benin", 9.5, 2.25)]);
    }

    #[test]
    fn filter_on_an_empty_list_returns_nothing() {
        assert!(filter("a", &[]).is_empty());
    }

    #[test]
    fn filter_handles_non_ascii_names() {
        let locations = vec![Location::new("Åland Islands", 60.116667, 19.9), Location::new("Aland", 0.0, 0.0)];

        assert_eq!(names(&filter("åla", &locations)), vec!["Åland Islands"]);
        assert_eq!(names(&filter("ÅLA", &locations)), vec!["Åland Islands"]);
    }
}
