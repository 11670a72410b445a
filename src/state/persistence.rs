use std::fs;
use std::io;
use std::path::Path;

use log::{error, info, warn};
use thiserror::Error;

use super::scene::Scene;
use crate::color::Rgb;
use crate::point::Point;
use crate::shape::{RecordTag, Shape};

/// Number of fields after the coordinates of a shape record: `r g b filled`
const TRAILING_FIELDS: usize = 4;

/// Errors that can occur while saving or loading a scene
#[derive(Debug, Error)]
pub enum PersistenceError {
    #[error("failed to access save file: {0}")]
    Io(#[from] io::Error),

    #[error("invalid data on line {line}: {reason}")]
    Malformed { line: usize, reason: String },
}

/// Result type for persistence operations
pub type PersistenceResult<T> = Result<T, PersistenceError>;

/// What a load did to the scene
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum LoadOutcome {
    /// The scene was replaced with the file's contents
    Loaded { shapes: usize, points: usize },
    /// There was no save file; the scene is untouched
    NothingToLoad,
}

/// Serializes the scene, one record per line.
///
/// Each shape is written as `tag x1 y1 .. xN yN r g b filled`. Pending
/// points, if any, follow as a single `0 x1 y1 ..` line.
pub fn encode_scene(scene: &Scene) -> String {
    let mut out = String::new();
    for shape in scene.shapes() {
        let mut fields = vec![RecordTag::Shape(shape.kind()).to_string()];
        fields.extend(point_fields(shape.points()));
        let c = shape.color();
        fields.extend([c.r, c.g, c.b].iter().map(f64::to_string));
        fields.push(u8::from(shape.is_filled()).to_string());
        out.push_str(&fields.join(" "));
        out.push('\n');
    }
    if !scene.in_progress().is_empty() {
        let mut fields = vec![RecordTag::InProgress.to_string()];
        fields.extend(point_fields(scene.in_progress()));
        out.push_str(&fields.join(" "));
        out.push('\n');
    }
    out
}

fn point_fields(points: &[Point]) -> impl Iterator<Item = String> + '_ {
    points.iter().flat_map(|p| [p.x.to_string(), p.y.to_string()])
}

/// Clears `scene` and fills it from `text`.
///
/// Records are applied in order. On the first malformed record decoding
/// stops and the error is returned; the records before it stay in the scene.
pub fn decode_into(scene: &mut Scene, text: &str) -> PersistenceResult<()> {
    scene.clear();
    for (index, raw) in text.lines().enumerate() {
        let line = index + 1;
        let mut fields = raw.split_whitespace();
        let Some(tag) = fields.next() else {
            continue;
        };
        let malformed = |reason: String| PersistenceError::Malformed { line, reason };

        let tag: RecordTag = tag.parse().map_err(malformed)?;
        let values = fields
            .map(|f| match f.parse::<f64>() {
                Ok(value) if value.is_finite() => Ok(value),
                _ => Err(malformed(format!("'{}' is not a finite number", f))),
            })
            .collect::<Result<Vec<f64>, _>>()?;

        match tag {
            RecordTag::InProgress => {
                for point in pairs(&values).map_err(malformed)? {
                    scene.push_point(point);
                }
            }
            RecordTag::Shape(kind) => {
                if values.len() < TRAILING_FIELDS {
                    return Err(malformed(format!(
                        "{} record has {} fields, needs at least {}",
                        kind,
                        values.len(),
                        TRAILING_FIELDS
                    )));
                }
                let (coords, trailing) = values.split_at(values.len() - TRAILING_FIELDS);
                let points = pairs(coords).map_err(malformed)?;
                let channels = &trailing[..3];
                if let Some(bad) = channels.iter().find(|c| !(0.0..=1.0).contains(*c)) {
                    return Err(malformed(format!("colour channel {} outside [0, 1]", bad)));
                }
                let color = Rgb::new(channels[0], channels[1], channels[2]);
                let filled = trailing[3] != 0.0;
                let shape = Shape::new(kind, points, color, filled)
                    .map_err(|err| malformed(err.to_string()))?;
                scene.add_shape(shape);
            }
        }
    }
    Ok(())
}

fn pairs(values: &[f64]) -> Result<Vec<Point>, String> {
    if values.len() % 2 != 0 {
        return Err(format!("odd number of coordinates ({})", values.len()));
    }
    Ok(values
        .chunks_exact(2)
        .map(|xy| Point::new(xy[0], xy[1]))
        .collect())
}

/// Writes the scene to `path`, replacing any previous save
pub fn save_scene(scene: &Scene, path: &Path) -> PersistenceResult<()> {
    fs::write(path, encode_scene(scene))?;
    info!(
        "saved {} shapes and {} pending points to {}",
        scene.shapes().len(),
        scene.in_progress().len(),
        path.display()
    );
    Ok(())
}

/// Replaces the scene with the contents of `path`.
///
/// A missing file leaves the scene untouched. A malformed record stops the
/// load and is returned as an error, with the records before it loaded.
pub fn load_scene(scene: &mut Scene, path: &Path) -> PersistenceResult<LoadOutcome> {
    let text = match fs::read_to_string(path) {
        Ok(text) => text,
        Err(err) if err.kind() == io::ErrorKind::NotFound => {
            warn!("nothing to load: {} does not exist", path.display());
            return Ok(LoadOutcome::NothingToLoad);
        }
        Err(err) => return Err(err.into()),
    };

    if let Err(err) = decode_into(scene, &text) {
        error!("error loading {}: {}", path.display(), err);
        return Err(err);
    }

    let outcome = LoadOutcome::Loaded {
        shapes: scene.shapes().len(),
        points: scene.in_progress().len(),
    };
    info!("loaded {:?} from {}", outcome, path.display());
    Ok(outcome)
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::shape::ShapeKind;

    fn scene_with_line() -> Scene {
        let mut scene = Scene::new();
        scene.push_point(Point::new(250.0, 300.0));
        scene.push_point(Point::new(400.0, 300.0));
        scene
            .commit(ShapeKind::Line, Rgb::new(0.25, 0.5, 0.75), true)
            .unwrap();
        scene
    }

    #[test]
    fn test_encode_line() {
        assert_eq!(encode_scene(&scene_with_line()), "1 250 300 400 300 0.25 0.5 0.75 0\n");
    }

    #[test]
    fn test_encode_rectangle_writes_all_corners() {
        let mut scene = Scene::new();
        scene.push_point(Point::new(0.0, 0.0));
        scene.push_point(Point::new(10.0, 5.5));
        scene.commit(ShapeKind::Rectangle, Rgb::BLACK, true).unwrap();
        assert_eq!(encode_scene(&scene), "3 0 0 10 5.5 0 5.5 10 0 0 0 0 1\n");
    }

    #[test]
    fn test_encode_empty_scene() {
        assert_eq!(encode_scene(&Scene::new()), "");
    }

    #[test]
    fn test_decode_skips_blank_lines_and_accepts_names() {
        let mut scene = Scene::new();
        decode_into(&mut scene, "\nLINE 0 0 1 1 1 0 0 0\n\n  \nNONE 5 5\n").unwrap();
        assert_eq!(scene.shapes().len(), 1);
        assert_eq!(scene.in_progress(), &[Point::new(5.0, 5.0)]);
    }

    #[test]
    fn test_decode_rejects_missing_trailing_fields() {
        let mut scene = Scene::new();
        let err = decode_into(&mut scene, "1 0 0 1 1 0.5 0.5 0.5\n6 0 0 3 4 1 1 1 1\n").unwrap_err();
        assert!(matches!(err, PersistenceError::Malformed { line: 1, .. }));
        assert!(scene.shapes().is_empty());
    }

    #[test]
    fn test_decode_keeps_records_before_failure() {
        let mut scene = Scene::new();
        let text = "1 0 0 1 1 0 0 0 0\n4 0 0 1 1 0 0 0 1\n6 0 0 3 4 1 1 1 1\n";
        let err = decode_into(&mut scene, text).unwrap_err();
        assert!(matches!(err, PersistenceError::Malformed { line: 2, .. }));
        assert_eq!(scene.shapes().len(), 1);
        assert_eq!(scene.shapes()[0].kind(), ShapeKind::Line);
    }

    #[test]
    fn test_decode_rejects_garbage() {
        let mut scene = Scene::new();
        assert!(decode_into(&mut scene, "1 0 zero 1 1 0 0 0 0").is_err());
        assert!(decode_into(&mut scene, "12 0 0 1 1 0 0 0 0").is_err());
        assert!(decode_into(&mut scene, "0 1 2 3").is_err());
    }

    #[test]
    fn test_decode_rejects_non_finite_numbers() {
        for text in ["6 nan 0 3 4 0 0 0 1", "6 0 0 inf 4 0 0 0 1", "0 1 -inf", "1 0 0 1 1 0 NaN 0 0"] {
            let mut scene = Scene::new();
            let err = decode_into(&mut scene, text).unwrap_err();
            assert!(matches!(err, PersistenceError::Malformed { line: 1, .. }), "{}", text);
            assert!(scene.is_empty());
        }
    }

    #[test]
    fn test_decode_rejects_colour_out_of_range() {
        let mut scene = Scene::new();
        let text = "1 0 0 10 10 0.5 0.5 0.5 0\n1 0 0 10 10 5 -2 0 1\n";
        let err = decode_into(&mut scene, text).unwrap_err();
        assert!(matches!(err, PersistenceError::Malformed { line: 2, .. }));
        assert_eq!(scene.shapes().len(), 1);

        decode_into(&mut scene, "1 0 0 10 10 0 1 0.5 0").unwrap();
        assert_eq!(scene.shapes()[0].color(), Rgb::new(0.0, 1.0, 0.5));
    }

    #[test]
    fn test_decode_rejects_skewed_rectangle() {
        let mut scene = Scene::new();
        let err = decode_into(&mut scene, "3 0 0 10 10 50 50 -7 3 0 0 0 1").unwrap_err();
        assert!(matches!(err, PersistenceError::Malformed { line: 1, .. }));
        assert!(scene.shapes().is_empty());

        decode_into(&mut scene, "3 0 0 10 10 0 10 10 0 0 0 0 1").unwrap();
        assert_eq!(scene.shapes()[0].num_points(), 4);
    }

    #[test]
    fn test_decode_replaces_existing_scene() {
        let mut scene = scene_with_line();
        scene.push_point(Point::new(9.0, 9.0));
        decode_into(&mut scene, "0 1 2").unwrap();
        assert!(scene.shapes().is_empty());
        assert_eq!(scene.in_progress(), &[Point::new(1.0, 2.0)]);
    }

    #[test]
    fn test_loaded_shapes_are_unselected() {
        let mut scene = Scene::new();
        decode_into(&mut scene, &encode_scene(&scene_with_line())).unwrap();
        assert!(!scene.shapes()[0].is_selected());
        assert_eq!(scene.selected_shape_index(), None);
    }
}
