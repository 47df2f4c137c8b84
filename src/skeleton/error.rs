use thiserror::Error;

#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum SkeletonError {
    #[error("bone '{bone}' references unknown parent '{parent}'")]
    UnknownParent { bone: String, parent: String },
    #[error("bone name '{0}' is used more than once")]
    DuplicateName(String),
    #[error("bone '{0}' is its own ancestor")]
    Cycle(String),
    #[error("rig expects a bone named '{0}'")]
    MissingBone(String),
}
