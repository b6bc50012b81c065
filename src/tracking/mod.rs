pub mod tracker;

pub use tracker::FaceTracker;
