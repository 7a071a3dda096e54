//! # Hull Margin
//!
//! Incremental 3D convex hull construction and hull margin extrusion for
//! deriving collision geometry from arbitrary point clouds.
//!
//! ## Architecture
//!
//! ```text
//! point cloud → ConvexMesh → (add_margin → point cloud → ConvexMesh) → Mesh
//! ```
//!
//! - [`Triangle`]: oriented plane of three vertex handles with the half-space
//!   test used everywhere else
//! - [`ConvexMesh`]: owns the vertex store, the triangle arena and an
//!   interior reference point; bootstraps a tetrahedron and inserts points
//!   with horizon detection
//! - [`add_margin`]: reads a finished hull and builds an inflated one
//!
//! Data flows one way and nothing mutates a hull it did not build.
//!
//! ## Usage
//!
//! ```rust
//! use glam::DVec3;
//! use hull_margin::ConvexMesh;
//!
//! let points = [
//!     DVec3::new(0.0, 0.0, 0.0),
//!     DVec3::new(1.0, 0.0, 0.0),
//!     DVec3::new(0.0, 1.0, 0.0),
//!     DVec3::new(0.0, 0.0, 1.0),
//!     DVec3::new(0.1, 0.1, 0.1), // interior, absorbed
//! ];
//! let hull = ConvexMesh::from_points(&points)?;
//! assert_eq!(hull.vertex_count(), 4);
//!
//! let skin = hull.with_margin(0.05)?;
//! skin.validate()?;
//! let mesh = skin.to_mesh();
//! assert!(mesh.triangle_count() > 4);
//! # Ok::<(), hull_margin::HullError>(())
//! ```

pub mod config;
pub mod edge;
pub mod error;
pub mod hull;
pub mod mesh;
pub mod ops;
pub mod triangle;

pub use config::HullConfig;
pub use edge::Edge;
pub use error::{HullError, HullResult};
pub use hull::{ConvexMesh, TriangleKey};
pub use mesh::Mesh;
pub use ops::margin::{add_margin, extrusion_points};
pub use triangle::{Face, Triangle, VertexId};
