pub mod animator;
pub mod constants;
pub mod controller;
pub mod engine;
pub mod error;
pub mod gesture;
pub mod hand;
pub mod overlay;
pub mod photo;
pub mod settings;
pub mod shapes;
pub mod state;
pub mod swing;
pub mod synthetic;
pub mod timer;

pub use animator::*;
pub use constants::*;
pub use controller::*;
pub use engine::*;
pub use error::*;
pub use gesture::*;
pub use hand::*;
pub use overlay::*;
pub use photo::*;
pub use settings::*;
pub use shapes::*;
pub use state::*;
pub use swing::*;
pub use timer::*;
