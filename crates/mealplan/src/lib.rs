mod calories;
mod generate;
mod pattern;
mod plan;
mod preference;
mod random;
mod request;
mod selector;
mod store;

pub use calories::*;
pub use generate::*;
pub use pattern::*;
pub use plan::*;
pub use preference::*;
pub use random::*;
pub use request::*;
pub use selector::*;
pub use store::*;
