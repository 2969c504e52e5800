pub mod api;
pub mod gemini;
pub mod vehicle;
