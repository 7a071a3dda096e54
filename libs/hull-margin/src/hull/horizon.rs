//! # Visible Region
//!
//! Selects the triangles a new point replaces and the cone of triangles that
//! closes the hole again.
//!
//! With a plane tolerance, a triangle seen by less than the tolerance can
//! survive between removed neighbours and split the horizon. The region is
//! therefore grown as one edge-connected patch from the most visible
//! triangle, then widened until:
//!
//! - the horizon is a single loop with no vertex on it twice
//! - no retained triangle is enclosed by the region
//! - every edge of the cone, and every horizon edge, is convex within
//!   tolerance
//!
//! The triangle with the lowest `side(p)` anchors the retained part. When it
//! would have to go, the point is absorbed instead.

use std::collections::{BTreeSet, HashMap, HashSet, VecDeque};

use glam::DVec3;

use crate::triangle::{Triangle, VertexId};

use super::{ConvexMesh, TriangleKey};

type DirectedEdge = (VertexId, VertexId);

/// Outcome of a successful visibility query.
pub(super) struct VisibleRegion {
    /// Triangles to remove, in key order
    pub(super) removed: Vec<TriangleKey>,
    /// New triangles from the point to each horizon edge, in loop order
    pub(super) cone: Vec<Triangle>,
}

/// Shape of a candidate horizon.
enum HorizonShape {
    /// One closed loop, edges in walking order
    Loop(Vec<DirectedEdge>),
    /// A vertex starts two horizon edges
    Pinched(VertexId),
    /// Several disjoint loops
    Split,
}

impl ConvexMesh {
    /// Computes the region `point` replaces when it becomes vertex `id`.
    ///
    /// Returns `None` when nothing is visible beyond `tolerance`, or when no
    /// consistent region exists.
    pub(super) fn visible_region(
        &self,
        id: VertexId,
        point: DVec3,
        tolerance: f64,
    ) -> Option<VisibleRegion> {
        let sides: Vec<(TriangleKey, f64)> = self
            .triangles
            .iter()
            .map(|(key, tri)| (key, tri.side(point)))
            .collect();
        let (seed, seed_side) = sides
            .iter()
            .copied()
            .max_by(|a, b| a.1.total_cmp(&b.1))?;
        if seed_side.is_nan() || seed_side <= tolerance {
            return None;
        }
        let (anchor, _) = sides
            .iter()
            .copied()
            .min_by(|a, b| a.1.total_cmp(&b.1))?;
        let side_of: HashMap<TriangleKey, f64> = sides.into_iter().collect();

        let owners: HashMap<DirectedEdge, TriangleKey> = self
            .triangles
            .iter()
            .flat_map(|(key, tri)| tri.directed_edges().map(move |edge| (edge, key)))
            .collect();

        let visible = |key: &TriangleKey| side_of.get(key).is_some_and(|&s| s > tolerance);
        let mut region: HashSet<TriangleKey> = HashSet::from([seed]);
        self.flood(&mut region, vec![seed], &owners, &visible);
        if region.contains(&anchor) {
            return None;
        }

        // Every round removes at least one more triangle
        for _ in 0..self.triangles.len() {
            let horizon = self.horizon_edges(&region, &owners);
            let widen = match horizon_shape(&horizon) {
                HorizonShape::Pinched(vertex) => self.retained_around(vertex, &region),
                HorizonShape::Split => self.enclosed(anchor, &region, &owners),
                HorizonShape::Loop(edges) => {
                    let cone = self.cone(id, point, &edges);
                    let reflex =
                        self.reflex_triangles(id, tolerance, &edges, &cone, &region, &owners);
                    if reflex.is_empty() {
                        let mut removed: Vec<TriangleKey> = region.into_iter().collect();
                        removed.sort_unstable();
                        return Some(VisibleRegion { removed, cone });
                    }
                    reflex
                }
            };

            if widen.is_empty() || widen.contains(&anchor) {
                return None;
            }
            region.extend(widen.iter().copied());
            // Visible triangles next to the widened part go too
            self.flood(&mut region, widen.into_iter().collect(), &owners, &visible);
            if region.contains(&anchor) {
                return None;
            }
        }
        None
    }

    /// Grows `region` from `start` across shared edges into triangles that
    /// satisfy `include`.
    fn flood(
        &self,
        region: &mut HashSet<TriangleKey>,
        start: Vec<TriangleKey>,
        owners: &HashMap<DirectedEdge, TriangleKey>,
        include: &dyn Fn(&TriangleKey) -> bool,
    ) {
        let mut queue = VecDeque::from(start);
        while let Some(key) = queue.pop_front() {
            for neighbor in self.neighbors(key, owners) {
                if include(&neighbor) && region.insert(neighbor) {
                    queue.push_back(neighbor);
                }
            }
        }
    }

    /// Triangles sharing an edge with `key`.
    fn neighbors(
        &self,
        key: TriangleKey,
        owners: &HashMap<DirectedEdge, TriangleKey>,
    ) -> Vec<TriangleKey> {
        self.triangles
            .get(key)
            .map(|tri| {
                tri.directed_edges()
                    .iter()
                    .filter_map(|&(a, b)| owners.get(&(b, a)).copied())
                    .collect()
            })
            .unwrap_or_default()
    }

    /// Directed region edges whose neighbour is retained, sorted.
    fn horizon_edges(
        &self,
        region: &HashSet<TriangleKey>,
        owners: &HashMap<DirectedEdge, TriangleKey>,
    ) -> Vec<DirectedEdge> {
        let mut horizon: Vec<DirectedEdge> = region
            .iter()
            .filter_map(|&key| self.triangles.get(key))
            .flat_map(|tri| tri.directed_edges())
            .filter(|&(a, b)| {
                owners
                    .get(&(b, a))
                    .map_or(true, |neighbor| !region.contains(neighbor))
            })
            .collect();
        horizon.sort_unstable();
        horizon
    }

    /// Retained triangles touching `vertex`.
    fn retained_around(
        &self,
        vertex: VertexId,
        region: &HashSet<TriangleKey>,
    ) -> BTreeSet<TriangleKey> {
        self.triangles
            .iter()
            .filter(|(key, tri)| tri.has_vertex(vertex) && !region.contains(key))
            .map(|(key, _)| key)
            .collect()
    }

    /// Retained triangles cut off from the anchor by the region.
    fn enclosed(
        &self,
        anchor: TriangleKey,
        region: &HashSet<TriangleKey>,
        owners: &HashMap<DirectedEdge, TriangleKey>,
    ) -> BTreeSet<TriangleKey> {
        let mut reached: HashSet<TriangleKey> = HashSet::from([anchor]);
        self.flood(&mut reached, vec![anchor], owners, &|key: &TriangleKey| {
            !region.contains(key)
        });

        self.triangles
            .keys()
            .filter(|key| !region.contains(key) && !reached.contains(key))
            .collect()
    }

    /// One triangle from the new vertex to each horizon edge.
    fn cone(&self, id: VertexId, point: DVec3, edges: &[DirectedEdge]) -> Vec<Triangle> {
        edges
            .iter()
            .map(|&(a, b)| {
                Triangle::oriented(
                    [id, a, b],
                    [point, self.position(a), self.position(b)],
                    self.center,
                )
            })
            .collect()
    }

    /// Retained triangles that would meet the cone at a reflex edge.
    ///
    /// Checks each cone triangle against the retained neighbour across its
    /// horizon edge and against the next cone triangle. A cone triangle whose
    /// orientation disagrees with the horizon winding also counts.
    fn reflex_triangles(
        &self,
        id: VertexId,
        tolerance: f64,
        edges: &[DirectedEdge],
        cone: &[Triangle],
        region: &HashSet<TriangleKey>,
        owners: &HashMap<DirectedEdge, TriangleKey>,
    ) -> BTreeSet<TriangleKey> {
        let outside = |side: f64| side.is_nan() || side > tolerance;
        let mut reflex = BTreeSet::new();

        for (i, (&(a, b), tri)) in edges.iter().zip(cone).enumerate() {
            if let Some(key) = owners.get(&(b, a)).copied() {
                let flipped = tri.vertices() != [id, a, b] || !tri.normal().is_finite();
                let bent = self
                    .triangles
                    .get(key)
                    .and_then(|neighbor| {
                        neighbor.vertices().into_iter().find(|&v| v != a && v != b)
                    })
                    .is_some_and(|c| outside(tri.side(self.position(c))));
                if flipped || bent {
                    reflex.insert(key);
                }
            }

            // The next cone triangle is (p, b, c)
            let (_, c) = edges[(i + 1) % edges.len()];
            if outside(tri.side(self.position(c))) {
                reflex.extend(self.retained_around(b, region));
            }
        }
        reflex
    }
}

/// Orders horizon edges into one loop, or reports why they do not form one.
fn horizon_shape(horizon: &[DirectedEdge]) -> HorizonShape {
    let mut next: HashMap<VertexId, VertexId> = HashMap::with_capacity(horizon.len());
    for &(a, b) in horizon {
        if next.insert(a, b).is_some() {
            return HorizonShape::Pinched(a);
        }
    }

    let Some(&(start, _)) = horizon.first() else {
        return HorizonShape::Split;
    };
    let mut edges = Vec::with_capacity(horizon.len());
    let mut current = start;
    while let Some(&following) = next.get(&current) {
        edges.push((current, following));
        current = following;
        if current == start || edges.len() > horizon.len() {
            break;
        }
    }

    if current == start && edges.len() == horizon.len() {
        HorizonShape::Loop(edges)
    } else {
        HorizonShape::Split
    }
}
