//! Action definitions
//!
//! Represents one command-line request against the database.

use crate::error::{Result, SlotError};
use crate::table::SlotTable;

/// Action types, keyed by the first letter of the action token
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ActionType {
    Create,
    Get,
    Set,
    Delete,
    List,
}

impl ActionType {
    /// Match an action token on its first character (`c`, `g`, `s`, `d`, `l`)
    pub fn from_token(token: &str) -> Result<Self> {
        match token.chars().next() {
            Some('c') => Ok(ActionType::Create),
            Some('g') => Ok(ActionType::Get),
            Some('s') => Ok(ActionType::Set),
            Some('d') => Ok(ActionType::Delete),
            Some('l') => Ok(ActionType::List),
            _ => Err(SlotError::Usage(format!(
                "invalid action '{}', only: c=create, g=get, s=set, d=del, l=list",
                token
            ))),
        }
    }

    /// Number of parameters the action takes after the token
    pub fn arity(&self) -> usize {
        match self {
            ActionType::Create | ActionType::List => 0,
            ActionType::Get | ActionType::Delete => 1,
            ActionType::Set => 3,
        }
    }
}

/// A parsed action
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Action {
    /// Create (or truncate) the database with an empty table
    Create,

    /// Print one occupied slot
    Get { id: usize },

    /// Fill an unoccupied slot
    Set {
        id: usize,
        name: String,
        email: String,
    },

    /// Clear a slot
    Delete { id: usize },

    /// Print every occupied slot
    List,
}

impl Action {
    /// Parse an action token and its parameters
    ///
    /// Parameter counts and ids are checked here, before any file is opened.
    pub fn parse<S: AsRef<str>>(token: &str, params: &[S]) -> Result<Self> {
        let action_type = ActionType::from_token(token)?;

        if params.len() != action_type.arity() {
            let message = match action_type {
                ActionType::Create => "create takes no parameters",
                ActionType::Get => "need an id to get",
                ActionType::Set => "need id, name, email to set",
                ActionType::Delete => "need an id to delete",
                ActionType::List => "list takes no parameters",
            };
            return Err(SlotError::Usage(message.to_string()));
        }

        let action = match action_type {
            ActionType::Create => Action::Create,
            ActionType::Get => Action::Get {
                id: parse_id(params[0].as_ref())?,
            },
            ActionType::Set => Action::Set {
                id: parse_id(params[0].as_ref())?,
                name: params[1].as_ref().to_string(),
                email: params[2].as_ref().to_string(),
            },
            ActionType::Delete => Action::Delete {
                id: parse_id(params[0].as_ref())?,
            },
            ActionType::List => Action::List,
        };

        Ok(action)
    }

    /// Get the action type
    pub fn action_type(&self) -> ActionType {
        match self {
            Action::Create => ActionType::Create,
            Action::Get { .. } => ActionType::Get,
            Action::Set { .. } => ActionType::Set,
            Action::Delete { .. } => ActionType::Delete,
            Action::List => ActionType::List,
        }
    }
}

fn parse_id(raw: &str) -> Result<usize> {
    let id: i64 = raw
        .trim()
        .parse()
        .map_err(|_| SlotError::Usage(format!("id must be an integer, got '{}'", raw)))?;
    SlotTable::check_id(id)
}
