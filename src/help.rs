//! Help text at three levels: overview, namespace, single tool.

use std::fmt::Write as _;

use crate::registry::{NamespaceDescriptor, Registry, ToolDescriptor};
use crate::session::Integrations;

/// Top-level overview: every namespace, the syntax and the builtins.
pub fn overview(registry: &Registry) -> String {
    let mut out = String::from("soco - marketing command console\n\nNamespaces:\n");
    let width = registry
        .namespaces()
        .iter()
        .map(|ns| ns.name.len())
        .max()
        .unwrap_or(0);
    for ns in registry.namespaces() {
        let _ = writeln!(
            out,
            "  {:<width$}  {} ({} tools)",
            ns.name,
            ns.description,
            ns.tools.len(),
            width = width
        );
    }
    out.push_str(
        "\nUsage:\n  <namespace>:<action> key:value key:\"quoted value\" ...\n\n\
         Builtins:\n  help [namespace | namespace:action]\n  agents\n  context\n  \
         history\n  clear\n  exit | quit\n",
    );
    out
}

/// Every tool of one namespace with its aliases and short description.
pub fn namespace(ns: &NamespaceDescriptor) -> String {
    let mut out = format!("{} - {}\n\n", ns.name, ns.description);
    for tool in ns.tools {
        let aliases = if tool.aliases.is_empty() {
            String::new()
        } else {
            format!(" (aliases: {})", tool.aliases.join(", "))
        };
        let _ = writeln!(out, "  {}:{}{}", ns.name, tool.name, aliases);
        let _ = writeln!(out, "      {}", tool.description);
    }
    let _ = write!(out, "\nRun `help {}:<action>` for parameters and examples.", ns.name);
    out
}

/// Full help for one tool: parameters, examples, integrations, duration.
pub fn tool(ns: &NamespaceDescriptor, tool: &ToolDescriptor) -> String {
    let mut out = format!("{}:{}\n\n{}\n", ns.name, tool.name, tool.long_help);

    if !tool.aliases.is_empty() {
        let _ = writeln!(out, "\nAliases: {}", tool.aliases.join(", "));
    }

    if !tool.params.is_empty() {
        out.push_str("\nParameters:\n");
        for param in tool.params {
            let mut notes = Vec::new();
            if param.required {
                notes.push("required".to_string());
            }
            if let Some(default) = param.default {
                notes.push(format!("default: {}", default));
            }
            if let Some(options) = param.options {
                notes.push(format!("one of: {}", options.join(", ")));
            }
            let notes = if notes.is_empty() {
                String::new()
            } else {
                format!(" [{}]", notes.join("; "))
            };
            let _ = writeln!(out, "  {:<18} {}{}", param.name, param.description, notes);
        }
    }

    if !tool.examples.is_empty() {
        out.push_str("\nExamples:\n");
        for example in tool.examples {
            let _ = writeln!(out, "  {}", example);
        }
    }

    if !tool.integrations.is_empty() {
        let names: Vec<&str> = tool.integrations.iter().map(|i| i.name()).collect();
        let _ = writeln!(out, "\nRequires: {}", names.join(", "));
    }
    let _ = write!(out, "Estimated time: ~{}s", tool.estimated_seconds);
    out
}

/// Resolve a help topic (`ns` or `ns:action`) and render it.
///
/// `None` renders the overview. Unknown topics produce the resolver's error
/// message so the user sees the valid choices.
pub fn topic(registry: &Registry, topic: Option<&str>) -> String {
    let Some(topic) = topic.map(str::trim).filter(|t| !t.is_empty()) else {
        return overview(registry);
    };

    if !topic.contains(':') {
        if let Some(ns) = registry.namespace(topic) {
            return namespace(ns);
        }
    }

    match registry.resolve(topic) {
        Ok(target) => tool(target.namespace, target.tool),
        Err(e) => e.to_string(),
    }
}

/// Namespace listing with integration readiness, for the `agents` builtin.
pub fn agents(registry: &Registry, integrations: &Integrations) -> String {
    let mut out = String::from("Agents:\n");
    for ns in registry.namespaces() {
        let mut missing: Vec<&str> = ns
            .tools
            .iter()
            .flat_map(|t| t.integrations.iter())
            .filter(|i| !integrations.is_ready(**i))
            .map(|i| i.name())
            .collect();
        missing.sort_unstable();
        missing.dedup();

        let status = if missing.is_empty() {
            "ready".to_string()
        } else {
            format!("needs {}", missing.join(", "))
        };
        let _ = writeln!(out, "  {:<9} {:<50} {}", ns.name, ns.description, status);
    }
    out
}
