pub mod basis;
pub mod batch;
pub mod canvas;
pub mod figure;
pub mod gradient;
pub mod portrait;
