//! Registrar client implementations

mod porkbun;

pub use porkbun::{PorkbunClient, PorkbunCredentials};
