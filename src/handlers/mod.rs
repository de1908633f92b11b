pub mod materials_handler;
pub mod quiz_handler;
pub mod status_handler;

pub use materials_handler::send_quiz_materials;
pub use quiz_handler::generate_quiz;
pub use status_handler::{health, index, not_found};
