use crate::bounds::Bounds;
use crate::error::{ensure_finite, GeomError};
use crate::linalg::Vec3;
use crate::math::{to_degrees, to_radians};

/// Sphere radius in meters (WGS84 equatorial radius).
pub const RADIUS_OF_EARTH: f64 = 6_378_137.0;

/// Compass bearing in `[0, 360)` of a local (east, north) displacement.
pub fn bearing_from_vector(v: &Vec3) -> f64 {
    (to_degrees(std::f64::consts::FRAC_PI_2 - v.y.atan2(v.x)) + 360.0) % 360.0
}

/// Latitude/longitude in degrees.
#[derive(Clone, Copy, Debug, PartialEq)]
pub struct GeoPoint {
    pub latitude: f64,
    pub longitude: f64,
}

impl GeoPoint {
    #[inline]
    pub fn new(latitude: f64, longitude: f64) -> Self {
        Self {
            latitude,
            longitude,
        }
    }

    /// Checked constructor; rejects non-finite coordinates.
    pub fn try_new(latitude: f64, longitude: f64) -> Result<Self, GeomError> {
        ensure_finite(latitude, "latitude")?;
        ensure_finite(longitude, "longitude")?;
        Ok(Self::new(latitude, longitude))
    }

    /// Great-circle (haversine) distance in meters.
    pub fn distance(&self, other: &GeoPoint) -> f64 {
        let d_lat = to_radians(self.latitude - other.latitude);
        let d_lng = to_radians(self.longitude - other.longitude);
        let x = (d_lat / 2.0).sin().powi(2)
            + to_radians(self.latitude).cos()
                * to_radians(other.latitude).cos()
                * (d_lng / 2.0).sin().powi(2);
        let arc = 2.0 * x.sqrt().atan2((1.0 - x).sqrt());
        RADIUS_OF_EARTH * arc
    }

    /// Initial bearing toward `other` in degrees, in `[-180, 180]`.
    ///
    /// Due south reports either sign of 180 depending on the sign of the
    /// longitude difference (`-0.0` gives `-180`).
    pub fn bearing(&self, other: &GeoPoint) -> f64 {
        let d_lng = to_radians(other.longitude - self.longitude);
        let lat1 = to_radians(self.latitude);
        let lat2 = to_radians(other.latitude);
        let y = d_lng.sin() * lat2.cos();
        let x = lat1.cos() * lat2.sin() - lat1.sin() * lat2.cos() * d_lng.cos();
        to_degrees(y.atan2(x))
    }

    /// Point reached by travelling `distance` meters along `heading` degrees.
    #[inline]
    pub fn offset(&self, distance: f64, heading: f64) -> GeoPoint {
        self.offset_with_radius(distance, heading, RADIUS_OF_EARTH)
    }

    /// Forward spherical offset on a sphere of the given `radius`.
    pub fn offset_with_radius(&self, distance: f64, heading: f64, radius: f64) -> GeoPoint {
        let angular = distance / radius;
        let heading = to_radians(heading);
        let lat = to_radians(self.latitude);
        let lng = to_radians(self.longitude);
        let (sin_d, cos_d) = angular.sin_cos();
        let (sin_lat, cos_lat) = lat.sin_cos();
        let x = cos_d * sin_lat + sin_d * cos_lat * heading.cos();
        GeoPoint::new(
            to_degrees(x.asin()),
            to_degrees(lng + (sin_d * cos_lat * heading.sin()).atan2(cos_d - sin_lat * x)),
        )
    }

    /// Offset by a local (east, north) displacement; `z` is ignored.
    pub fn offset_vector(&self, v: &Vec3) -> GeoPoint {
        let surface = v.x.hypot(v.y);
        self.offset(surface, bearing_from_vector(v))
    }

    #[inline]
    pub fn offset_xy(&self, x: f64, y: f64) -> GeoPoint {
        self.offset_vector(&Vec3::new(x, y, 0.0))
    }

    /// Local (east, north) meters from `self` to `other`; inverse of `offset_xy`.
    pub fn grid_offsets(&self, other: &GeoPoint) -> Vec3 {
        let distance = self.distance(other);
        let bearing = to_radians(self.bearing(other));
        Vec3::new(bearing.sin() * distance, bearing.cos() * distance, 0.0)
    }
}

/// Midpoint of the lat/lng bounding box of `path`.
///
/// Breaks down when the path crosses the 0/360 longitude seam.
pub fn geo_path_midpoint(path: &[GeoPoint]) -> Result<GeoPoint, GeomError> {
    if path.is_empty() {
        return Err(GeomError::invalid("geo midpoint needs at least one point"));
    }
    let mut bounds = Bounds::new();
    for p in path {
        bounds.extend_point(&Vec3::new(p.longitude, p.latitude, 0.0));
    }
    let mid = bounds.midpoint();
    Ok(GeoPoint::new(mid.y, mid.x))
}
