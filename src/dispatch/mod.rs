//! Dispatch Module
//!
//! Maps one command-line action onto one session lifecycle.
//!
//! ## Actions
//! - `create`: truncate the file, write an empty image
//! - `get ID`: load, read one slot
//! - `set ID NAME EMAIL`: load, fill a slot, write
//! - `delete ID`: load, clear a slot, write
//! - `list`: load, read every occupied slot
//!
//! Only the first character of the action token matters, so `c`, `cr`, and
//! `create` are the same action.

mod action;
mod outcome;

pub use action::{Action, ActionType};
pub use outcome::Outcome;

use tracing::debug;

use crate::config::Config;
use crate::error::Result;
use crate::session::{OpenMode, Session};

/// Execute one action against the database named by `config`
///
/// The session is closed before returning. On error it is dropped, which
/// releases the file all the same; nothing is written after a failed step.
pub fn execute(config: &Config, action: &Action) -> Result<Outcome> {
    debug!(?action, path = %config.path.display(), "Executing action");

    let mode = match action {
        Action::Create => OpenMode::Create,
        _ => OpenMode::Existing,
    };
    let mut session = Session::open(config.clone(), mode)?;

    let outcome = match action {
        Action::Create => {
            session.write()?;
            Outcome::Created
        }
        Action::Get { id } => Outcome::Record(session.get(*id)?.clone()),
        Action::Set { id, name, email } => {
            let stored = session.set(*id, name, email)?.clone();
            session.write()?;
            Outcome::Stored(stored)
        }
        Action::Delete { id } => {
            session.delete(*id)?;
            session.write()?;
            Outcome::Deleted { id: *id }
        }
        Action::List => Outcome::Records(session.list().cloned().collect()),
    };

    session.close();
    Ok(outcome)
}
