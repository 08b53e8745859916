mod eras;
mod quiz;
mod timeline;

#[cfg(test)]
mod test_harness;
#[cfg(test)]
mod view_smoke;

pub use eras::ErasView;
pub use quiz::QuizView;
pub use timeline::TimelineView;
