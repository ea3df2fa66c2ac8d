//! Contact store contract and shared entity types.

use async_trait::async_trait;
use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use thiserror::Error;

mod traits;
mod types;

pub use traits::{ContactReader, ContactStore, ContactWriter};
pub use types::{Contact, ContactInput, ContactStoreError};
