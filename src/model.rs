//! Todo entity and request payload.

use serde::{Deserialize, Serialize};
use utoipa::ToSchema;

/// A stored todo item. `id` is assigned by the store.
#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize, ToSchema)]
#[serde(rename_all = "camelCase")]
pub struct Todo {
    #[schema(example = 1)]
    pub id: i64,
    #[schema(example = "walk dog")]
    pub name: Option<String>,
    pub is_complete: bool,
}

/// Body of POST and PUT. Any `id` sent by the client is ignored.
#[derive(Clone, Debug, Default, PartialEq, Eq, Serialize, Deserialize, ToSchema)]
#[serde(rename_all = "camelCase")]
pub struct TodoInput {
    #[serde(default)]
    #[schema(example = "walk dog")]
    pub name: Option<String>,
    #[serde(default)]
    pub is_complete: bool,
}

impl Todo {
    pub(crate) fn from_input(id: i64, input: TodoInput) -> Self {
        Self {
            id,
            name: input.name,
            is_complete: input.is_complete,
        }
    }

    /// Full overwrite of the mutable fields.
    pub(crate) fn apply(&mut self, input: TodoInput) {
        self.name = input.name;
        self.is_complete = input.is_complete;
    }
}
