mod events;
mod recording;
mod replay;
pub use events::*;
pub use recording::*;
pub use replay::*;
