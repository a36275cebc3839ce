//! Shared fixtures for the composer tests.

use crate::ArgumentMap;
use crate::FieldTree;

/// Build an [`ArgumentMap`] from a JSON object literal, keeping its key order.
pub fn arg_map(value: serde_json::Value) -> ArgumentMap {
    serde_json::from_value(value).unwrap()
}

/// `{ id, name }`
pub fn simple_schema() -> FieldTree {
    FieldTree::new()
        .leaf("id")
        .leaf("name")
}

/// `{ details { levelTwo, moreDetails { andAnotherDetailLevel, levelThree } }, id, levelOne, name }`
pub fn nested_schema() -> FieldTree {
    FieldTree::new()
        .subtree("details", FieldTree::new()
            .leaf("levelTwo")
            .subtree("moreDetails", FieldTree::new()
                .leaf("andAnotherDetailLevel")
                .leaf("levelThree")))
        .leaf("id")
        .leaf("levelOne")
        .leaf("name")
}

/// Root keys are the operations `getAllArtists` and `queryArtists`.
pub fn artists_schema() -> FieldTree {
    FieldTree::new()
        .subtree("getAllArtists", FieldTree::new()
            .subtree("artist", FieldTree::new()
                .leaf("name")
                .leaf("power")))
        .subtree("queryArtists", FieldTree::new()
            .leaf("id")
            .leaf("image")
            .leaf("name"))
}
