use indexmap::IndexMap;
use serde::de;
use serde::de::MapAccess;
use serde::de::SeqAccess;
use serde::de::Visitor;
use serde::Deserialize;
use serde::Deserializer;
use std::fmt;

/// A single entry in a [`FieldTree`]: either a plain field or a field with a
/// nested selection.
#[derive(Clone, Debug, PartialEq, Eq)]
pub enum FieldNode {
    Leaf,
    SubTree(FieldTree),
}
impl FieldNode {
    pub fn as_subtree(&self) -> Option<&FieldTree> {
        if let Self::SubTree(tree) = self {
            Some(tree)
        } else {
            None
        }
    }

    pub fn into_subtree(self) -> Option<FieldTree> {
        if let Self::SubTree(tree) = self {
            Some(tree)
        } else {
            None
        }
    }

    pub fn is_leaf(&self) -> bool {
        matches!(self, Self::Leaf)
    }
}
impl std::convert::From<FieldTree> for FieldNode {
    fn from(value: FieldTree) -> Self {
        Self::SubTree(value)
    }
}
impl std::convert::From<serde_json::Value> for FieldNode {
    /// Objects and arrays nest; every other value (including `null`) is a leaf
    /// whose content is ignored.
    fn from(value: serde_json::Value) -> Self {
        match FieldTree::from_structured(value) {
            Some(tree) => Self::SubTree(tree),
            None => Self::Leaf,
        }
    }
}

/// An ordered selection of fields, possibly nested.
///
/// Field names are unique within one level of the tree and iterate in the order
/// they were first inserted. Re-inserting an existing name replaces its node
/// but keeps its original position.
#[derive(Clone, Debug, Default, PartialEq, Eq)]
pub struct FieldTree {
    fields: IndexMap<String, FieldNode>,
}
impl FieldTree {
    pub fn new() -> Self {
        Self::default()
    }

    /// Build a tree from a JSON object or array.
    ///
    /// Array elements are keyed by their index. Returns `None` for scalars and
    /// `null`, which cannot hold a selection.
    pub fn from_structured(value: serde_json::Value) -> Option<Self> {
        match value {
            serde_json::Value::Object(map) => Some(map.into()),
            serde_json::Value::Array(items) => Some(
                items.into_iter()
                    .enumerate()
                    .map(|(idx, item)| (idx.to_string(), FieldNode::from(item)))
                    .collect(),
            ),
            _ => None,
        }
    }

    pub fn get(&self, name: &str) -> Option<&FieldNode> {
        self.fields.get(name)
    }

    /// Insert `node` under `name`, returning the node it replaced (if any).
    pub fn insert(
        &mut self,
        name: impl Into<String>,
        node: impl Into<FieldNode>,
    ) -> Option<FieldNode> {
        self.fields.insert(name.into(), node.into())
    }

    pub fn is_empty(&self) -> bool {
        self.fields.is_empty()
    }

    pub fn iter(&self) -> indexmap::map::Iter<'_, String, FieldNode> {
        self.fields.iter()
    }

    /// Add a plain field.
    pub fn leaf(mut self, name: impl Into<String>) -> Self {
        self.fields.insert(name.into(), FieldNode::Leaf);
        self
    }

    pub fn len(&self) -> usize {
        self.fields.len()
    }

    pub fn names(&self) -> impl Iterator<Item = &str> {
        self.fields.keys().map(String::as_str)
    }

    /// Add a field with a nested selection.
    pub fn subtree(mut self, name: impl Into<String>, tree: FieldTree) -> Self {
        self.fields.insert(name.into(), FieldNode::SubTree(tree));
        self
    }
}
impl std::convert::From<serde_json::Map<String, serde_json::Value>> for FieldTree {
    fn from(value: serde_json::Map<String, serde_json::Value>) -> Self {
        value.into_iter()
            .map(|(name, value)| (name, FieldNode::from(value)))
            .collect()
    }
}
impl std::iter::FromIterator<(String, FieldNode)> for FieldTree {
    fn from_iter<T: IntoIterator<Item = (String, FieldNode)>>(iter: T) -> Self {
        Self {
            fields: iter.into_iter().collect(),
        }
    }
}
impl<'a> std::iter::IntoIterator for &'a FieldTree {
    type Item = (&'a String, &'a FieldNode);
    type IntoIter = indexmap::map::Iter<'a, String, FieldNode>;

    fn into_iter(self) -> Self::IntoIter {
        self.fields.iter()
    }
}

/// Render the selection-set body for `tree`.
///
/// Plain fields render as their name and nested fields as `name {...}`. Entries
/// are joined by `,` with no whitespace, in insertion order. Recursion depth
/// equals tree depth.
pub fn stringify_fields(tree: &FieldTree) -> String {
    let mut out = String::new();
    write_fields(tree, &mut out);
    out
}

fn write_fields(tree: &FieldTree, out: &mut String) {
    for (idx, (name, node)) in tree.iter().enumerate() {
        if idx > 0 {
            out.push(',');
        }
        out.push_str(name);
        if let FieldNode::SubTree(subtree) = node {
            out.push_str(" {");
            write_fields(subtree, out);
            out.push('}');
        }
    }
}

/// Deserializes a node without an intermediate `serde_json::Value`: objects and
/// arrays nest, every other value is a leaf.
impl<'de> Deserialize<'de> for FieldNode {
    fn deserialize<D>(deserializer: D) -> Result<Self, D::Error>
    where
        D: Deserializer<'de>,
    {
        deserializer.deserialize_any(FieldNodeVisitor)
    }
}

/// Accepts a JSON object or array (keyed by index); anything else is an error.
impl<'de> Deserialize<'de> for FieldTree {
    fn deserialize<D>(deserializer: D) -> Result<Self, D::Error>
    where
        D: Deserializer<'de>,
    {
        deserializer.deserialize_any(FieldTreeVisitor)
    }
}

struct FieldTreeVisitor;

impl<'de> Visitor<'de> for FieldTreeVisitor {
    type Value = FieldTree;

    fn expecting(&self, formatter: &mut fmt::Formatter) -> fmt::Result {
        formatter.write_str("an object or array of fields")
    }

    fn visit_map<A>(self, mut map: A) -> Result<FieldTree, A::Error>
    where
        A: MapAccess<'de>,
    {
        let mut tree = FieldTree::new();
        while let Some((name, node)) = map.next_entry::<String, FieldNode>()? {
            tree.insert(name, node);
        }
        Ok(tree)
    }

    fn visit_seq<A>(self, mut seq: A) -> Result<FieldTree, A::Error>
    where
        A: SeqAccess<'de>,
    {
        let mut tree = FieldTree::new();
        let mut idx: usize = 0;
        while let Some(node) = seq.next_element::<FieldNode>()? {
            tree.insert(idx.to_string(), node);
            idx += 1;
        }
        Ok(tree)
    }
}

struct FieldNodeVisitor;

impl<'de> Visitor<'de> for FieldNodeVisitor {
    type Value = FieldNode;

    fn expecting(&self, formatter: &mut fmt::Formatter) -> fmt::Result {
        formatter.write_str("a field value")
    }

    fn visit_map<A>(self, map: A) -> Result<FieldNode, A::Error>
    where
        A: MapAccess<'de>,
    {
        FieldTreeVisitor.visit_map(map).map(FieldNode::SubTree)
    }

    fn visit_seq<A>(self, seq: A) -> Result<FieldNode, A::Error>
    where
        A: SeqAccess<'de>,
    {
        FieldTreeVisitor.visit_seq(seq).map(FieldNode::SubTree)
    }

    fn visit_bool<E: de::Error>(self, _value: bool) -> Result<FieldNode, E> {
        Ok(FieldNode::Leaf)
    }

    fn visit_i64<E: de::Error>(self, _value: i64) -> Result<FieldNode, E> {
        Ok(FieldNode::Leaf)
    }

    fn visit_u64<E: de::Error>(self, _value: u64) -> Result<FieldNode, E> {
        Ok(FieldNode::Leaf)
    }

    fn visit_f64<E: de::Error>(self, _value: f64) -> Result<FieldNode, E> {
        Ok(FieldNode::Leaf)
    }

    fn visit_str<E: de::Error>(self, _value: &str) -> Result<FieldNode, E> {
        Ok(FieldNode::Leaf)
    }

    fn visit_none<E: de::Error>(self) -> Result<FieldNode, E> {
        Ok(FieldNode::Leaf)
    }

    fn visit_unit<E: de::Error>(self) -> Result<FieldNode, E> {
        Ok(FieldNode::Leaf)
    }
}
