use serde::{Deserialize, Deserializer, Serialize};

// Mean earth radius, in meters.
const EARTH_RADIUS_M: f64 = 6_371_008.8;

/// A point on the map, in floating point degrees.
#[derive(Serialize, Debug, PartialEq, Clone, Copy)]
pub struct LatLng {
    pub lat: f64,
    pub lng: f64,
}

// The server is not consistent about how it spells a point: player positions
// come as {lat, lng}, building positions as {latitude, longitude}, some
// payloads wrap either spelling in a "coords" field. Normalize all of them
// here so the rest of the crate only ever sees a LatLng. A point in none of
// these shapes is a hard deserialization error, never a (0, 0) fallback.
impl<'de> Deserialize<'de> for LatLng {
    fn deserialize<D>(deserializer: D) -> Result<Self, D::Error>
        where D: Deserializer<'de> {
        #[derive(Deserialize)]
        #[serde(untagged)]
        enum Pair {
            Short { lat: f64, lng: f64 },
            Long { latitude: f64, longitude: f64 },
        }
        #[derive(Deserialize)]
        #[serde(untagged)]
        enum Shape {
            Bare(Pair),
            Wrapped { coords: Pair },
        }
        let pair = match Shape::deserialize(deserializer)? {
            Shape::Bare(pair) => pair,
            Shape::Wrapped { coords } => coords,
        };
        Ok(match pair {
            Pair::Short { lat, lng } => LatLng { lat, lng },
            Pair::Long { latitude, longitude } => LatLng {
                lat: latitude,
                lng: longitude,
            },
        })
    }
}

/// Great-circle distance between two points, rounded to whole meters.
pub fn distance_m(a: &LatLng, b: &LatLng) -> u32 {
    let lat_a = a.lat.to_radians();
    let lat_b = b.lat.to_radians();
    let d_lat = (b.lat - a.lat).to_radians();
    let d_lng = (b.lng - a.lng).to_radians();
    let h = (d_lat / 2.0).sin().powi(2)
        + lat_a.cos() * lat_b.cos() * (d_lng / 2.0).sin().powi(2);
    // Floating point can push h a hair past 1 on near-antipodal points.
    let arc = 2.0 * h.min(1.0).sqrt().asin();
    (arc * EARTH_RADIUS_M).round() as u32
}

/// Point a given fraction of the way from 'a' to 'b', linear in degrees.
pub fn lerp(a: &LatLng, b: &LatLng, fraction: f64) -> LatLng {
    LatLng {
        lat: a.lat + (b.lat - a.lat) * fraction,
        lng: a.lng + (b.lng - a.lng) * fraction,
    }
}

#[cfg(test)]
mod tests {
    use serde_json::json;
    use super::*;

    #[test]
    fn test_distance_one_degree_of_latitude() {
        let a = LatLng { lat: 0.0, lng: 0.0 };
        let b = LatLng { lat: 1.0, lng: 0.0 };
        assert_eq!(distance_m(&a, &b), 111195);
    }

    #[test]
    fn test_distance_rounds_to_whole_meters() {
        let a = LatLng { lat: 45.5017, lng: -73.5673 };
        let b = LatLng { lat: 45.5017 + 0.0001, lng: -73.5673 };
        assert_eq!(distance_m(&a, &b), 11);
    }

    #[test]
    fn test_distance_is_symmetric() {
        let a = LatLng { lat: 48.8566, lng: 2.3522 };
        let b = LatLng { lat: 45.5017, lng: -73.5673 };
        assert_eq!(distance_m(&a, &b), distance_m(&b, &a));
    }

    #[test]
    fn test_same_point_in_both_wire_shapes_is_zero_meters_apart() {
        let bare: LatLng = serde_json::from_value(
            json!({"lat": 10.0, "lng": 20.0})).unwrap();
        let wrapped: LatLng = serde_json::from_value(
            json!({"coords": {"latitude": 10.0, "longitude": 20.0}})).unwrap();
        assert_eq!(distance_m(&bare, &wrapped), 0);
    }

    #[test]
    fn test_long_spelling_parses() {
        let point: LatLng = serde_json::from_value(
            json!({"latitude": -33.8688, "longitude": 151.2093})).unwrap();
        assert_eq!(point, LatLng { lat: -33.8688, lng: 151.2093 });
    }

    #[test]
    fn test_point_missing_a_coordinate_is_an_error() {
        let parsed: Result<LatLng, _> =
            serde_json::from_value(json!({"lat": 10.0}));
        assert!(parsed.is_err());
        let parsed: Result<LatLng, _> =
            serde_json::from_value(json!({"coords": {"latitude": 10.0}}));
        assert!(parsed.is_err());
    }

    #[test]
    fn test_lerp_midpoint() {
        let a = LatLng { lat: 10.0, lng: 20.0 };
        let b = LatLng { lat: 12.0, lng: 26.0 };
        assert_eq!(lerp(&a, &b, 0.5), LatLng { lat: 11.0, lng: 23.0 });
    }

    #[test]
    fn test_lerp_endpoints() {
        let a = LatLng { lat: 10.0, lng: 20.0 };
        let b = LatLng { lat: 12.0, lng: 26.0 };
        assert_eq!(lerp(&a, &b, 0.0), a);
        assert_eq!(lerp(&a, &b, 1.0), b);
    }
}
