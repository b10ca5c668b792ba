pub mod decoder;
pub mod encoder;
pub mod translate;
pub mod validator;

pub use decoder::decode;
pub use encoder::encode;
pub use translate::{translate, translate_with, EnglishLocale, Localizer};
pub use validator::validate;
