//! A narrow Wavefront OBJ parser: only `v` (vertex) and `f` (triangular
//! face) lines are recognized, everything else — including `#` comments —
//! is skipped. Face indices are 1-based in the file and rewritten to
//! 0-based on load. One flat normal is derived per face from its first two
//! edges, not per vertex.

use crate::vector::Vector3;

#[derive(Debug, Clone, PartialEq)]
pub enum ObjError {
    /// A `v` or `f` line did not have the expected number of fields.
    MalformedLine(String),
    /// An `f` line referenced a vertex index outside the positions read so far.
    IndexOutOfRange { index: i64, vertex_count: usize },
}

impl std::fmt::Display for ObjError {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            ObjError::MalformedLine(line) => write!(f, "malformed OBJ line: {:?}", line),
            ObjError::IndexOutOfRange { index, vertex_count } => {
                write!(f, "face index {} out of range ({} vertices loaded)", index, vertex_count)
            }
        }
    }
}

impl std::error::Error for ObjError {}

/// Parsed geometry: flat vertex positions, one normal per triangle, and the
/// 0-based index buffer (`indices.len() == normals.len() * 3`).
pub struct ParsedMesh {
    pub positions: Vec<Vector3>,
    pub normals: Vec<Vector3>,
    pub indices: Vec<u32>,
}

/// Parses the narrow `v`/`f`/`#` grammar described above from an in-memory
/// string. Any other leading token on a line is ignored, matching the
/// original loader's line-skipping behavior.
pub fn parse_obj(contents: &str) -> Result<ParsedMesh, ObjError> {
    let mut positions = Vec::new();
    let mut indices = Vec::new();

    for line in contents.lines() {
        let mut fields = line.split_whitespace();
        let command = match fields.next() {
            Some(c) => c,
            None => continue,
        };

        match command {
            "#" => continue,
            "v" => {
                let coords: Vec<&str> = fields.collect();
                if coords.len() != 3 {
                    return Err(ObjError::MalformedLine(line.to_string()));
                }
                let x = parse_f32(coords[0], line)?;
                let y = parse_f32(coords[1], line)?;
                let z = parse_f32(coords[2], line)?;
                positions.push(Vector3::new(x, y, z));
            }
            "f" => {
                let raw: Vec<&str> = fields.collect();
                if raw.len() != 3 {
                    return Err(ObjError::MalformedLine(line.to_string()));
                }
                for field in raw {
                    let vertex_token = field.split('/').next().unwrap_or(field);
                    let one_based: i64 = vertex_token
                        .parse()
                        .map_err(|_| ObjError::MalformedLine(line.to_string()))?;
                    let zero_based = one_based - 1;
                    if zero_based < 0 || zero_based as usize >= positions.len() {
                        return Err(ObjError::IndexOutOfRange {
                            index: one_based,
                            vertex_count: positions.len(),
                        });
                    }
                    indices.push(zero_based as u32);
                }
            }
            _ => continue,
        }
    }

    let mut normals = Vec::with_capacity(indices.len() / 3);
    for triangle in indices.chunks(3) {
        let v0 = positions[triangle[0] as usize];
        let v1 = positions[triangle[1] as usize];
        let v2 = positions[triangle[2] as usize];
        let edge0 = v1 - v0;
        let edge1 = v2 - v0;
        normals.push(edge0.cross(edge1).normalized());
    }

    Ok(ParsedMesh { positions, normals, indices })
}

fn parse_f32(token: &str, line: &str) -> Result<f32, ObjError> {
    token.parse().map_err(|_| ObjError::MalformedLine(line.to_string()))
}
