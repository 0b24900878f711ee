//! Great-circle distance between two points given in decimal degrees.
//!
//! Uses the spherical law of cosines. Distances are computed in
//! nautical miles first and converted to kilometres, matching the
//! figures published by the usual online haversine calculators.

pub const EARTH_RADIUS_NM: f64 = 3440.1;
pub const NM_TO_KM: f64 = 1.852;

pub fn distance_nm(lat_a: f64, long_a: f64, lat_b: f64, long_b: f64) -> f64 {
    // For identical points the law-of-cosines argument can round to
    // just under 1.0, turning a zero distance into a spurious few
    // centimetres. The distance to oneself is zero by definition.
    if lat_a == lat_b && long_a == long_b {
        return 0.0;
    }

    let lat_a_rad = lat_a.to_radians();
    let long_a_rad = long_a.to_radians();
    let lat_b_rad = lat_b.to_radians();
    let long_b_rad = long_b.to_radians();

    let arg = lat_a_rad.sin() * lat_b_rad.sin()
        + lat_a_rad.cos() * lat_b_rad.cos() * (long_a_rad - long_b_rad).cos();

    // Rounding can push the argument just past 1.0 for antipodal or
    // near-identical points, which would make acos return NaN.
    EARTH_RADIUS_NM * arg.clamp(-1.0, 1.0).acos()
}

pub fn distance_km(lat_a: f64, long_a: f64, lat_b: f64, long_b: f64) -> f64 {
    distance_nm(lat_a, long_a, lat_b, long_b) * NM_TO_KM
}

pub fn is_within_radius(distance_km: f64, radius_km: f64) -> bool {
    distance_km <= radius_km
}
