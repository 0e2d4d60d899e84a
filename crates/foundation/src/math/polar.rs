use crate::math::vec::Vec2;

/// Offsets of `count` points spread evenly on a circle of `radius`.
///
/// Point `i` sits at angle `2πi / count`, measured from +x towards +y
/// (screen coordinates, so +y points down).
pub fn fan_out(count: usize, radius: f64) -> Vec<Vec2> {
    if count == 0 {
        return Vec::new();
    }
    let step = std::f64::consts::TAU / count as f64;
    (0..count)
        .map(|i| {
            let angle = step * i as f64;
            Vec2::new(angle.cos() * radius, angle.sin() * radius)
        })
        .collect()
}
