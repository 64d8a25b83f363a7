mod bounding_box;
mod mesh;
mod plane;
mod sphere;
mod triangle;

pub use self::bounding_box::BoundingBox;
pub use self::mesh::TriangleMesh;
pub use self::plane::Plane;
pub use self::sphere::Sphere;
pub use self::triangle::Triangle;

/// Which side of a triangle's winding is considered front-facing for
/// closest-hit purposes. Any-hit (shadow) tests invert this, since a shadow
/// ray travels from the surface toward the light rather than from the
/// camera toward the surface.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum CullMode {
    BackFaceCulling,
    FrontFaceCulling,
    NoCulling,
}
