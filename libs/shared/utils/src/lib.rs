pub mod extractor;
pub mod state;
pub mod test_utils;

pub use extractor::{body_rejection, validate_body};
pub use state::AppState;
