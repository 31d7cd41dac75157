pub mod chart;
pub mod panels;
