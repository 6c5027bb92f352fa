mod tiny_vec;
pub use tiny_vec::TinyVec;
