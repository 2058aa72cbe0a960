pub mod panels;
pub mod scatter;
