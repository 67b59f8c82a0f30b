//! Python Bindings for Region Algebra
//!
//! Exposes the Rust region algebra to Python via PyO3.
//!
//! ## Usage
//! ```python
//! from region_algebra import Region, in_range
//!
//! ring = Region.circle(10.0).difference(Region.circle(2.0))
//! ring.shift(3.0, 4.0).contains(8.0, 4.0)   # True
//!
//! in_range((0, 0), (5, 0), (100, 100), 10.0, 2.0)  # True
//! ```

use std::sync::Arc;

use pyo3::prelude::*;

use crate::core::{self, Point, Region};

// =============================================================================
// Region
// =============================================================================

/// A boolean membership predicate over the plane
///
/// Every method returns a new Region; the receiver is never modified.
#[pyclass(name = "Region", frozen)]
#[derive(Clone)]
pub struct PyRegion {
    inner: Arc<dyn Region>,
}

impl PyRegion {
    fn wrap<R: Region + 'static>(region: R) -> Self {
        Self {
            inner: Arc::new(region),
        }
    }
}

#[pymethods]
impl PyRegion {
    /// Disk of `radius` around the origin
    #[staticmethod]
    fn circle(radius: f64) -> Self {
        Self::wrap(core::circle(radius))
    }

    /// Disk of `radius` around (x, y)
    #[staticmethod]
    fn circle2(radius: f64, x: f64, y: f64) -> Self {
        Self::wrap(core::circle2(radius, Point::new(x, y)))
    }

    /// Translate by (dx, dy)
    fn shift(&self, dx: f64, dy: f64) -> Self {
        Self::wrap(core::shift(Point::new(dx, dy), Arc::clone(&self.inner)))
    }

    /// Complement
    fn invert(&self) -> Self {
        Self::wrap(core::invert(Arc::clone(&self.inner)))
    }

    /// Points in both regions
    fn intersection(&self, other: &PyRegion) -> Self {
        Self::wrap(core::intersection(
            Arc::clone(&self.inner),
            Arc::clone(&other.inner),
        ))
    }

    /// Points in either region
    fn union(&self, other: &PyRegion) -> Self {
        Self::wrap(core::union(
            Arc::clone(&self.inner),
            Arc::clone(&other.inner),
        ))
    }

    /// Points in this region but not in `other`
    fn difference(&self, other: &PyRegion) -> Self {
        Self::wrap(core::difference(
            Arc::clone(&self.inner),
            Arc::clone(&other.inner),
        ))
    }

    /// Membership test for (x, y)
    fn contains(&self, x: f64, y: f64) -> bool {
        self.inner.contains(Point::new(x, y))
    }

    fn __repr__(&self) -> String {
        format!("Region({})", self.inner.name())
    }
}

// =============================================================================
// Targeting
// =============================================================================

/// Is `target` a valid target from `own`, clear of `friendly`?
#[pyfunction]
fn in_range(
    own: (f64, f64),
    target: (f64, f64),
    friendly: (f64, f64),
    range: f64,
    minimum_distance: f64,
) -> bool {
    core::in_range(
        own.into(),
        target.into(),
        friendly.into(),
        range,
        minimum_distance,
    )
}

// =============================================================================
// Module Definition
// =============================================================================

#[pymodule]
#[pyo3(name = "_core")]
fn region_algebra(m: &Bound<'_, PyModule>) -> PyResult<()> {
    m.add_class::<PyRegion>()?;
    m.add_function(wrap_pyfunction!(in_range, m)?)?;

    m.add("__doc__", "Region Algebra: composable 2D membership predicates.")?;
    m.add("__version__", env!("CARGO_PKG_VERSION"))?;

    Ok(())
}
