//! Assigns every operation to a named group; each group becomes one
//! generated API class.

use indexmap::IndexMap;
use serde::{Deserialize, Serialize};

use crate::codegen::CodegenOperation;

/// How operations are partitioned into API classes. Closed set, selected by
/// configuration.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Deserialize)]
#[serde(rename_all = "kebab-case")]
pub enum GroupingStrategy {
    /// Group by the first path segment: `/employees`, `/employees/{id}` and
    /// `/offices` yield the two groups `employees` and `offices`.
    ByBasePath,
    /// Like [`Self::ByBasePath`], but an `x-client-group` extension on the
    /// operation overrides the computed group key. The base path is still
    /// computed and recorded as the operation's group name.
    ByClientGroup,
    /// One group per operation, keyed by operation id.
    ByOperationId,
    /// Every operation in a single group named `global`.
    SingleGroup,
}

/// Named buckets of operations, in first-seen order.
#[derive(Debug, Default, Serialize)]
#[serde(transparent)]
pub struct OperationGroups {
    groups: IndexMap<String, Vec<CodegenOperation>>,
}

impl OperationGroups {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn len(&self) -> usize {
        self.groups.len()
    }

    pub fn is_empty(&self) -> bool {
        self.groups.is_empty()
    }

    pub fn get(&self, name: &str) -> Option<&[CodegenOperation]> {
        self.groups.get(name).map(Vec::as_slice)
    }

    pub fn iter(&self) -> impl Iterator<Item = (&str, &[CodegenOperation])> {
        self.groups
            .iter()
            .map(|(name, ops)| (name.as_str(), ops.as_slice()))
    }

    pub fn names(&self) -> impl Iterator<Item = &str> {
        self.groups.keys().map(String::as_str)
    }

    /// Submits an operation to its group under the given strategy.
    ///
    /// Must be called exactly once per (operation, tag) pair; because the
    /// driving loop does call it once per tag, a repeat submission of an
    /// operation id already present in the target group is a silent no-op
    /// with no metadata mutation. On first insertion the operation's group
    /// name and subresource flag are set before it is stored; the flag is
    /// true iff the resource path extends past its base segment (the base
    /// segment belongs to the generated class, not the method). Under the
    /// client-group strategy the `x-client-group` value only selects the
    /// bucket; the recorded group name is still the base path. Returns
    /// whether the operation was inserted.
    pub fn add_operation_to_group(
        &mut self,
        strategy: GroupingStrategy,
        _tag: &str,
        resource_path: &str,
        operation: &mut CodegenOperation,
    ) -> bool {
        let (group_key, group_name) = match strategy {
            GroupingStrategy::ByBasePath => {
                let base = base_path_group(resource_path);
                (base.clone(), base)
            }
            GroupingStrategy::ByClientGroup => {
                let base = base_path_group(resource_path);
                let key = operation
                    .vendor_extensions
                    .client_group()
                    .map(str::to_string)
                    .unwrap_or_else(|| base.clone());
                (key, base)
            }
            GroupingStrategy::ByOperationId => {
                (operation.operation_id.clone(), operation.operation_id.clone())
            }
            GroupingStrategy::SingleGroup => ("global".to_string(), "global".to_string()),
        };

        let members = self.groups.entry(group_key).or_default();
        if members
            .iter()
            .any(|member| member.operation_id == operation.operation_id)
        {
            return false;
        }

        operation.group_name = group_name;
        operation.subresource_operation = !sub_resource_path(resource_path).is_empty();
        members.push(operation.clone());
        true
    }
}

impl<'a> IntoIterator for &'a OperationGroups {
    type Item = (&'a String, &'a Vec<CodegenOperation>);
    type IntoIter = indexmap::map::Iter<'a, String, Vec<CodegenOperation>>;

    fn into_iter(self) -> Self::IntoIter {
        self.groups.iter()
    }
}

/// The part of the resource path after its base segment: `/employees/{id}`
/// yields `/{id}`, `/employees` yields the empty string.
fn sub_resource_path(resource_path: &str) -> &str {
    let trimmed = resource_path.trim_start_matches('/');
    match trimmed.find('/') {
        Some(index) => &trimmed[index..],
        None => "",
    }
}

/// First non-empty path segment with every non-letter stripped; `default`
/// when the path has no segment at all.
fn base_path_group(resource_path: &str) -> String {
    let segment = resource_path
        .trim_start_matches('/')
        .split('/')
        .next()
        .unwrap_or("");

    if segment.is_empty() {
        "default".to_string()
    } else {
        segment.chars().filter(char::is_ascii_alphabetic).collect()
    }
}
