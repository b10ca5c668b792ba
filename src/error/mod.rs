pub mod acl;

pub use acl::{AclError, AclResult};
