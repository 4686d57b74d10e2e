use glam::Vec3;

use super::contact::TrackedObject;
use crate::config::FocusConfig;

/// Is `point` inside the view cone around `forward`?
pub fn in_view(eye: Vec3, forward: Vec3, point: Vec3, focus: &FocusConfig) -> bool {
    let to_point = point - eye;
    if to_point.length_squared() == 0.0 {
        return false;
    }
    let cos_limit = focus.half_angle_degrees.to_radians().cos();
    to_point.normalize().dot(forward.normalize_or_zero()) >= cos_limit
}

/// Index of the closest tracked object the camera is looking at
///
/// Ties keep the earlier object in the feed.
pub fn focus_target(eye: Vec3, forward: Vec3, objects: &[TrackedObject], focus: &FocusConfig) -> Option<usize> {
    objects
        .iter()
        .enumerate()
        .filter(|(_, object)| in_view(eye, forward, object.position, focus))
        .map(|(index, object)| (index, eye.distance_squared(object.position)))
        .fold(None, |best: Option<(usize, f32)>, (index, dist)| match best {
            Some((_, best_dist)) if best_dist <= dist => best,
            _ => Some((index, dist)),
        })
        .map(|(index, _)| index)
}

#[cfg(test)]
mod tests {
    use super::*;

    fn objects() -> Vec<TrackedObject> {
        vec![
            TrackedObject::new("behind", Vec3::new(0.0, 0.0, 100.0)),
            TrackedObject::new("ahead-far", Vec3::new(0.0, 0.0, -5000.0)),
            TrackedObject::new("ahead-near", Vec3::new(100.0, 0.0, -1000.0)),
            TrackedObject::new("off-axis", Vec3::new(-500.0, 0.0, -10.0)),
        ]
    }

    #[test]
    fn picks_closest_object_in_view() {
        let focus = FocusConfig::default();
        let index = focus_target(Vec3::ZERO, Vec3::NEG_Z, &objects(), &focus);
        assert_eq!(index, Some(2));
    }

    #[test]
    fn nothing_in_view() {
        let focus = FocusConfig::default();
        assert_eq!(focus_target(Vec3::ZERO, Vec3::Y, &objects(), &focus), None);
    }

    #[test]
    fn object_at_eye_is_not_in_view() {
        let focus = FocusConfig::default();
        assert!(!in_view(Vec3::ONE, Vec3::NEG_Z, Vec3::ONE, &focus));
    }
}
