use serde::de::DeserializeOwned;
use serde::{Deserialize, Serialize};

use crate::error::SplineError;
use crate::keypoint::{AbsoluteKeyPoints, KeyPoint, KeyPoints};

#[derive(Deserialize)]
struct StoredKeyPoints<V> {
    points: Vec<KeyPoint<f64, V>>,
}

/// Parse a key point document into an absolute collection.
///
/// Format: `{ "points": [ { "position": 0.0, "value": <V> }, ... ] }` with `V` in
/// its serde form. Points may appear in any order; positions must be finite and
/// unique.
pub fn parse_key_points_json<V: DeserializeOwned>(
    s: &str,
) -> Result<AbsoluteKeyPoints<f64, V>, SplineError> {
    let stored: StoredKeyPoints<V> = serde_json::from_str(s)?;
    let expected = stored.points.len();
    let mut collection = AbsoluteKeyPoints::new();
    for point in stored.points {
        if !point.position.is_finite() {
            return Err(SplineError::InvalidKeyPoints {
                reason: format!("position {} is not finite", point.position),
            });
        }
        collection.insert(point.position, point.value)?;
    }
    if collection.len() != expected {
        return Err(SplineError::InvalidKeyPoints {
            reason: format!(
                "{} duplicate position(s) in document",
                expected - collection.len()
            ),
        });
    }
    Ok(collection)
}

/// Serialize a collection in the format read by [`parse_key_points_json`].
pub fn to_key_points_json<V: Serialize>(
    points: &AbsoluteKeyPoints<f64, V>,
) -> Result<String, SplineError> {
    Ok(serde_json::to_string_pretty(points)?)
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::value::Vector3;

    #[test]
    fn parses_unordered_points() {
        let json = r#"{ "points": [
            { "position": 2.0, "value": { "x": 2.0, "y": 0.0, "z": 0.0 } },
            { "position": 0.0, "value": { "x": 0.0, "y": 0.0, "z": 0.0 } }
        ] }"#;
        let points = parse_key_points_json::<Vector3>(json).unwrap();
        assert_eq!(points.position(0), Some(0.0));
        assert_eq!(points.value(1), Some(&Vector3::new(2.0, 0.0, 0.0)));
    }

    #[test]
    fn rejects_duplicates_and_bad_json() {
        let dup = r#"{ "points": [ { "position": 1.0, "value": 1.0 }, { "position": 1.0, "value": 2.0 } ] }"#;
        assert!(matches!(
            parse_key_points_json::<f64>(dup),
            Err(SplineError::InvalidKeyPoints { .. })
        ));
        assert!(matches!(
            parse_key_points_json::<f64>("{"),
            Err(SplineError::Serialization { .. })
        ));
    }

    #[test]
    fn written_documents_parse_back() {
        let points = AbsoluteKeyPoints::from_pairs([(0.0, 1.0), (0.5, -1.0)]).unwrap();
        let json = to_key_points_json(&points).unwrap();
        assert_eq!(parse_key_points_json::<f64>(&json).unwrap(), points);
    }
}
