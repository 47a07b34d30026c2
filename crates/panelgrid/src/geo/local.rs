use super::GeoPoint;
use crate::linalg::Vec3;

/// Cartesian frame in meters around `center` (x east, y north, z = 0).
#[derive(Clone, Copy, Debug, PartialEq)]
pub struct LocalCoordinateSystem {
    pub center: GeoPoint,
}

impl LocalCoordinateSystem {
    #[inline]
    pub fn new(center: GeoPoint) -> Self {
        Self { center }
    }

    #[inline]
    pub fn to_local(&self, point: &GeoPoint) -> Vec3 {
        self.center.grid_offsets(point)
    }

    pub fn to_local_path(&self, path: &[GeoPoint]) -> Vec<Vec3> {
        path.iter().map(|p| self.to_local(p)).collect()
    }

    pub fn to_local_paths(&self, paths: &[Vec<GeoPoint>]) -> Vec<Vec<Vec3>> {
        paths.iter().map(|p| self.to_local_path(p)).collect()
    }

    #[inline]
    pub fn to_geo(&self, v: &Vec3) -> GeoPoint {
        self.center.offset_vector(v)
    }

    pub fn to_geo_path(&self, path: &[Vec3]) -> Vec<GeoPoint> {
        path.iter().map(|v| self.to_geo(v)).collect()
    }

    pub fn to_geo_paths(&self, paths: &[Vec<Vec3>]) -> Vec<Vec<GeoPoint>> {
        paths.iter().map(|p| self.to_geo_path(p)).collect()
    }
}
