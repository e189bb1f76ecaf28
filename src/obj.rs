//! Reader for a minimal subset of the Wavefront OBJ format.
//!
//! Only two kinds of lines matter:
//!
//! ```text
//! v -3.000000 1.800000 0.000000
//! f 1 2 3
//! ```
//!
//! Any line starting with `v` is read as a vertex and must carry exactly three
//! coordinates after its first word; any line starting with `f` is a face of
//! exactly three 1-based vertex indices. That makes `vt 0.5 0.5` an error.
//! Every other line (comments, groups, blanks) is skipped.

use std::{fs, path::Path, str::FromStr};

use crate::{vec3::Vec3, Error, Result};

#[derive(Clone, Debug, Default, PartialEq)]
pub struct ObjModel {
    pub vertices: Vec<Vec3<f64>>,
    /// Vertex index lists, 1-based as written in the file.
    pub faces: Vec<Vec<usize>>,
}

/// Skips the leading keyword of `line` and parses exactly three fields after it.
fn fields<T: FromStr>(line: &str) -> Result<[T; 3]> {
    let mut words = line.split_whitespace();
    if words.next().is_none() {
        return Err(Error::malformed(line));
    }

    let mut parse = || words.next().and_then(|w| w.parse::<T>().ok()).ok_or_else(|| Error::malformed(line));
    let a = parse()?;
    let b = parse()?;
    let c = parse()?;

    if words.next().is_some() {
        return Err(Error::malformed(line));
    }

    Ok([a, b, c])
}

/// Parses a `v x y z` line.
pub fn parse_vertex(line: &str) -> Result<Vec3<f64>> {
    fields::<f64>(line).map(Vec3::from)
}

/// Parses an `f a b c` line, keeping the indices 1-based.
pub fn parse_face(line: &str) -> Result<Vec<usize>> {
    fields::<usize>(line).map(|indices| indices.to_vec())
}

pub fn parse(text: &str) -> Result<ObjModel> {
    let mut model = ObjModel::default();

    for line in text.lines() {
        if line.starts_with('v') {
            model.vertices.push(parse_vertex(line)?);
        } else if line.starts_with('f') {
            model.faces.push(parse_face(line)?);
        }
    }

    Ok(model)
}

pub fn load<P: AsRef<Path>>(path: P) -> Result<ObjModel> {
    let path = path.as_ref();
    let text = fs::read_to_string(path).map_err(|err| Error::io(path, err))?;

    let model = parse(&text)?;
    log::info!(
        "loaded {:?}: {} vertices, {} faces",
        path,
        model.vertices.len(),
        model.faces.len()
    );

    Ok(model)
}

#[cfg(test)]
mod tests {
    use super::*;
    use approx::assert_abs_diff_eq;

    #[test]
    fn vertex() {
        let v = parse_vertex("v -3.000000 1.800000 0.000000").unwrap();

        assert_abs_diff_eq!(-3.0, v.x);
        assert_abs_diff_eq!(1.8, v.y);
        assert_abs_diff_eq!(0.0, v.z);
    }

    #[test]
    fn vertex_missing_field() {
        match parse_vertex("v -3.000000 1.800000") {
            Err(Error::Malformed { line }) => assert_eq!("v -3.000000 1.800000", line),
            other => panic!("unexpected result: {:?}", other),
        }
    }

    #[test]
    fn vertex_bad_number() {
        assert!(parse_vertex("v -3.000a00 1.800000 0.000000").is_err());
    }

    #[test]
    fn vertex_extra_field() {
        assert!(parse_vertex("v 1 2 3 4").is_err());
    }

    #[test]
    fn face() {
        assert_eq!(vec![1234, 4321, 7], parse_face("f 1234 4321 7").unwrap());
    }

    #[test]
    fn face_bad_index() {
        assert!(parse_face("f 1234a 4321 7").is_err());
        assert!(parse_face("f -1 2 3").is_err());
    }

    #[test]
    fn face_missing_index() {
        assert!(parse_face("f 1234 4321").is_err());
    }

    #[test]
    fn whole_file() {
        let text = "# a triangle\n\
                    o tri\n\
                    v 0 0 0\n\
                    v 1 0 0\r\n\
                    v 0 1 0\n\
                    \n\
                    f 1 2 3\n";

        let model = parse(text).unwrap();
        assert_eq!(3, model.vertices.len());
        assert_eq!(Vec3::new(1.0, 0.0, 0.0), model.vertices[1]);
        assert_eq!(vec![vec![1, 2, 3]], model.faces);
    }

    #[test]
    fn texture_coordinates_are_malformed() {
        match parse("v 0 0 0\nvt 0.5 0.5\n") {
            Err(Error::Malformed { line }) => assert_eq!("vt 0.5 0.5", line),
            other => panic!("unexpected result: {:?}", other),
        }
    }

    #[test]
    fn any_v_prefix_is_a_vertex() {
        let model = parse("v 0 0 0\nvn 0 0 1\n").unwrap();
        assert_eq!(vec![Vec3::ZERO, Vec3::new(0.0, 0.0, 1.0)], model.vertices);
    }

    #[test]
    fn indented_lines_are_skipped() {
        let model = parse("  v 1 2\n\tf 1\nv 0 0 0\n").unwrap();
        assert_eq!(1, model.vertices.len());
        assert!(model.faces.is_empty());
    }

    #[test]
    fn malformed_line_stops_parsing() {
        let err = parse("v 0 0 0\nv 1 1\nf 1 2 3\n").unwrap_err();
        assert_eq!("malformed entry: 'v 1 1'", err.to_string());
    }

    #[test]
    fn missing_file_is_io_error() {
        match load("thisDoesNotExist.obj") {
            Err(Error::Io { .. }) => {}
            other => panic!("unexpected result: {:?}", other),
        }
    }

    #[test]
    fn load_from_disk() {
        let path = std::env::temp_dir().join(format!("solari-obj-{}.obj", std::process::id()));
        std::fs::write(&path, "v 0 0 0\nv 1 0 0\nv 0 1 0\nf 1 2 3\n").unwrap();

        let model = load(&path).unwrap();
        std::fs::remove_file(&path).unwrap();

        assert_eq!(3, model.vertices.len());
        assert_eq!(1, model.faces.len());
    }
}
