pub mod resume;

pub use resume::{Contact, Education, ResumeRecord, Role, SkillMap};
