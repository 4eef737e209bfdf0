//! Embedded world-city gazetteer.
//!
//! A compact offline database of well-known cities used to resolve free-text
//! city queries to coordinates without a network round-trip. Coverage follows
//! the regional spread of common IANA zones (several cities per continent)
//! plus the default city, Lentilly.

/// A single gazetteer row.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct City {
    pub name: &'static str,
    pub country: &'static str,
    /// Geographic latitude in degrees (-90 to +90)
    pub latitude: f64,
    /// Geographic longitude in degrees (-180 to +180)
    pub longitude: f64,
}

/// The embedded city table, ordered alphabetically by name.
pub const CITIES: &[City] = &[
    City { name: "Amsterdam", country: "Netherlands", latitude: 52.374031, longitude: 4.88969 },
    City { name: "Anchorage", country: "United States", latitude: 61.218056, longitude: -149.900278 },
    City { name: "Athens", country: "Greece", latitude: 37.97945, longitude: 23.71622 },
    City { name: "Auckland", country: "New Zealand", latitude: -36.866667, longitude: 174.766667 },
    City { name: "Bangkok", country: "Thailand", latitude: 13.75398, longitude: 100.50144 },
    City { name: "Barcelona", country: "Spain", latitude: 41.385064, longitude: 2.173403 },
    City { name: "Beijing", country: "China", latitude: 39.9075, longitude: 116.397228 },
    City { name: "Berlin", country: "Germany", latitude: 52.524368, longitude: 13.41053 },
    City { name: "Bogota", country: "Colombia", latitude: 4.609706, longitude: -74.081749 },
    City { name: "Buenos Aires", country: "Argentina", latitude: -34.613152, longitude: -58.377232 },
    City { name: "Cairo", country: "Egypt", latitude: 30.06263, longitude: 31.24967 },
    City { name: "Cape Town", country: "South Africa", latitude: -33.925839, longitude: 18.423218 },
    City { name: "Chicago", country: "United States", latitude: 41.850033, longitude: -87.650055 },
    City { name: "Denver", country: "United States", latitude: 39.739154, longitude: -104.984703 },
    City { name: "Dubai", country: "United Arab Emirates", latitude: 25.258172, longitude: 55.304717 },
    City { name: "Helsinki", country: "Finland", latitude: 60.169521, longitude: 24.935451 },
    City { name: "Honolulu", country: "United States", latitude: 21.30694, longitude: -157.858337 },
    City { name: "Istanbul", country: "Turkey", latitude: 41.01384, longitude: 28.94966 },
    City { name: "Jakarta", country: "Indonesia", latitude: -6.214621, longitude: 106.845131 },
    City { name: "Johannesburg", country: "South Africa", latitude: -26.202271, longitude: 28.043631 },
    City { name: "Kolkata", country: "India", latitude: 22.562627, longitude: 88.363044 },
    City { name: "Lagos", country: "Nigeria", latitude: 6.453056, longitude: 3.395833 },
    City { name: "Lentilly", country: "France", latitude: 45.816669, longitude: 4.66667 },
    City { name: "Lima", country: "Peru", latitude: -12.043184, longitude: -77.028236 },
    City { name: "Lisbon", country: "Portugal", latitude: 38.716667, longitude: -9.133333 },
    City { name: "London", country: "United Kingdom", latitude: 51.508415, longitude: -0.125533 },
    City { name: "Longyearbyen", country: "Norway", latitude: 78.2232, longitude: 15.64689 },
    City { name: "Los Angeles", country: "United States", latitude: 34.052231, longitude: -118.243683 },
    City { name: "Madrid", country: "Spain", latitude: 40.416691, longitude: -3.700345 },
    City { name: "Melbourne", country: "Australia", latitude: -37.813999, longitude: 144.963318 },
    City { name: "Mexico City", country: "Mexico", latitude: 19.428471, longitude: -99.127663 },
    City { name: "Moscow", country: "Russia", latitude: 55.752220, longitude: 37.615560 },
    City { name: "Mumbai", country: "India", latitude: 19.073980, longitude: 72.877426 },
    City { name: "Nairobi", country: "Kenya", latitude: -1.283253, longitude: 36.817245 },
    City { name: "New York City", country: "United States", latitude: 40.714269, longitude: -74.005974 },
    City { name: "Oslo", country: "Norway", latitude: 59.912731, longitude: 10.746092 },
    City { name: "Paris", country: "France", latitude: 48.856614, longitude: 2.352222 },
    City { name: "Prague", country: "Czechia", latitude: 50.088039, longitude: 14.420761 },
    City { name: "Reykjavik", country: "Iceland", latitude: 64.135338, longitude: -21.895210 },
    City { name: "Rio de Janeiro", country: "Brazil", latitude: -22.906847, longitude: -43.172897 },
    City { name: "Rome", country: "Italy", latitude: 41.892916, longitude: 12.482520 },
    City { name: "Santiago", country: "Chile", latitude: -33.456939, longitude: -70.648270 },
    City { name: "Sao Paulo", country: "Brazil", latitude: -23.547501, longitude: -46.636108 },
    City { name: "Seoul", country: "South Korea", latitude: 37.566536, longitude: 126.977966 },
    City { name: "Shanghai", country: "China", latitude: 31.230391, longitude: 121.473701 },
    City { name: "Singapore", country: "Singapore", latitude: 1.352083, longitude: 103.819836 },
    City { name: "Stockholm", country: "Sweden", latitude: 59.332581, longitude: 18.064903 },
    City { name: "Sydney", country: "Australia", latitude: -33.868820, longitude: 151.209290 },
    City { name: "Tokyo", country: "Japan", latitude: 35.676192, longitude: 139.650311 },
    City { name: "Toronto", country: "Canada", latitude: 43.653226, longitude: -79.383184 },
    City { name: "Vancouver", country: "Canada", latitude: 49.282729, longitude: -123.120738 },
    City { name: "Vienna", country: "Austria", latitude: 48.208174, longitude: 16.373819 },
    City { name: "Warsaw", country: "Poland", latitude: 52.229676, longitude: 21.012229 },
    City { name: "Wellington", country: "New Zealand", latitude: -41.286461, longitude: 174.776230 },
    City { name: "Zurich", country: "Switzerland", latitude: 47.376887, longitude: 8.541694 },
];

/// Look up a city by free-text query.
///
/// Matching is case-insensitive: an exact name match wins, otherwise the
/// first city whose name starts with the query is returned. Returns `None`
/// when nothing matches.
pub fn find(query: &str) -> Option<&'static City> {
    let needle = query.trim().to_lowercase();
    if needle.is_empty() {
        return None;
    }

    CITIES
        .iter()
        .find(|c| c.name.to_lowercase() == needle)
        .or_else(|| CITIES.iter().find(|c| c.name.to_lowercase().starts_with(&needle)))
}
