pub mod app_data;
pub mod course;
pub mod course_stats;
pub mod round;
pub mod score;
pub mod stats;
pub mod utils;

pub use app_data::*;
pub use course::*;
pub use course_stats::*;
pub use round::*;
pub use score::*;
pub use stats::*;
pub use utils::*;
