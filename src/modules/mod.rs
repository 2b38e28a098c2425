pub mod departments;
pub mod health;
pub mod navigation;
pub mod permissions;
