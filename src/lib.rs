/// ACL rule model: identifiers, resource kinds, rights, numeric masks.
pub mod acl;
/// Encode/decode/validate/translate operations over the textual rule form.
pub mod codec;
/// Common error types.
pub mod error;
/// Display-name lookup tables supplied by the caller.
pub mod lookup;

// -----------------------------------------------------------------------------
//  Frequently used public types
// -----------------------------------------------------------------------------

/// Rule value and its building blocks.
pub use acl::{
    AclRule, Identifier, IdentifierScope, IdentifierType, NumericRule, ResourceKind,
    ResourceScope, Right, RightsMask,
};
/// Codec operations: `#5 HOST+VM/@12 USE+MANAGE #3` <-> `AclRule`.
pub use codec::{decode, encode, translate, translate_with, validate, EnglishLocale, Localizer};
/// Operation errors and result alias.
pub use error::{AclError, AclResult};
/// `{ID, NAME}` pools for display-name resolution.
pub use lookup::{LookupEntry, Lookups};
