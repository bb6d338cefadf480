pub mod pointer;
pub mod render;
