pub mod classifier;
pub mod descriptor;
