use glam::Vec3;

/// Rejections raised before a request reaches the navigation core
#[derive(Debug, Clone, PartialEq, thiserror::Error)]
pub enum NavError {
    #[error("target point {0} is not finite")]
    NonFiniteTarget(Vec3),

    #[error("aim point {aim} coincides with the ship position")]
    TargetAtPosition { aim: Vec3 },

    #[error("unknown tracked object '{0}'")]
    UnknownObject(String),

    #[error("invalid {field}: {reason}")]
    InvalidConfig { field: &'static str, reason: String },
}
