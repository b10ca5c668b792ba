pub mod identifier;
pub mod mask;
pub mod resource;
pub mod rights;
pub mod rule;

pub use identifier::*;
pub use mask::*;
pub use resource::*;
pub use rights::*;
pub use rule::*;
