pub mod controller;
pub mod ray;
pub mod scene;
