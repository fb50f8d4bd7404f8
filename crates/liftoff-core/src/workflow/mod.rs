//! Workflow orchestration for liftoff

mod changelog;
mod document;
mod notes;
mod release;
mod template;
mod validation;

pub use changelog::*;
pub use document::*;
pub use notes::*;
pub use release::*;
pub use template::*;
pub use validation::*;
