pub mod git;

pub use git::{Publisher, PublishError};
