//! Execute handlers for the WrapLock contract.
//!
//! This module contains all execute message handlers, organized by category:
//! - `admin` - Init, Enable, Disable and the lifecycle guards
//! - `registry` - AddContract and DelContract
//! - `deposit` - CW20 Receive (lock) and the self-issued EmitXfer
//! - `release` - WithdrawA/B and CancelA/B

mod admin;
mod deposit;
mod registry;
mod release;

pub use admin::*;
pub use deposit::*;
pub use registry::*;
pub use release::*;
