//! Route views. Only login/register carry real logic; the content views are
//! thin shells over the control layer (list fetches, polling, profile).

pub mod chat;
pub mod knowledge;
pub mod login;
pub mod register;
pub mod system;
