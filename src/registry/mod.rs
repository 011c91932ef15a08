//! Namespace/tool registry and command resolution.
//!
//! The registry is built once from the static catalog and is read-only for
//! the rest of the process. Resolution never mutates it.

pub mod catalog;
pub mod descriptor;

pub use descriptor::{Integration, NamespaceDescriptor, ParamKind, ParamSpec, ToolDescriptor};

use crate::command::CommandError;

/// A resolved `namespace:action` pair.
#[derive(Debug, Clone, Copy)]
pub struct Target {
    pub namespace: &'static NamespaceDescriptor,
    pub tool: &'static ToolDescriptor,
}

impl Target {
    /// Canonical `namespace:action` form.
    pub fn qualified_name(&self) -> String {
        format!("{}:{}", self.namespace.name, self.tool.name)
    }
}

/// Read-only lookup table of namespaces.
#[derive(Debug, Clone, Copy)]
pub struct Registry {
    namespaces: &'static [NamespaceDescriptor],
}

impl Default for Registry {
    fn default() -> Self {
        Self::builtin()
    }
}

impl Registry {
    /// Registry over the built-in catalog.
    pub fn builtin() -> Self {
        Self {
            namespaces: catalog::NAMESPACES,
        }
    }

    pub fn namespaces(&self) -> &'static [NamespaceDescriptor] {
        self.namespaces
    }

    pub fn namespace(&self, name: &str) -> Option<&'static NamespaceDescriptor> {
        self.namespaces.iter().find(|ns| ns.name == name)
    }

    pub fn namespace_names(&self) -> Vec<String> {
        self.namespaces.iter().map(|ns| ns.name.to_string()).collect()
    }

    /// Resolve a leading command token to its canonical target.
    ///
    /// The token is split on the first `:`. The namespace must match exactly;
    /// the action is matched by canonical name first, then by alias.
    pub fn resolve(&self, head: &str) -> Result<Target, CommandError> {
        let (namespace_name, action) = head.split_once(':').unwrap_or((head, ""));

        let namespace =
            self.namespace(namespace_name)
                .ok_or_else(|| CommandError::UnknownNamespace {
                    namespace: namespace_name.to_string(),
                    valid: self.namespace_names(),
                })?;

        let tool = namespace
            .tool(action)
            .ok_or_else(|| CommandError::UnknownAction {
                namespace: namespace.name.to_string(),
                action: action.to_string(),
                valid: namespace.tool_names(),
            })?;

        Ok(Target { namespace, tool })
    }

    /// Every valid `namespace`, `namespace:tool` and `namespace:alias` string.
    pub fn completions(&self) -> Vec<String> {
        let mut results = self.namespace_names();
        for ns in self.namespaces {
            for tool in ns.tools {
                results.push(format!("{}:{}", ns.name, tool.name));
                for alias in tool.aliases {
                    results.push(format!("{}:{}", ns.name, alias));
                }
            }
        }
        results
    }

    /// Parameter key completions (`key:`) for a command head.
    pub fn param_completions(&self, head: &str) -> Vec<String> {
        match self.resolve(head) {
            Ok(target) => target
                .tool
                .params
                .iter()
                .map(|p| format!("{}:", p.name))
                .collect(),
            Err(_) => Vec::new(),
        }
    }
}
