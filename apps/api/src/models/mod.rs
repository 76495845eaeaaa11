pub mod appearance;
pub mod feedback;
pub mod resume;
