pub mod body;
pub mod clock;
pub mod scene;
pub mod trail;
pub mod transform;
