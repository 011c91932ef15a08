//! Static tool schema: namespaces, tools and their parameters.

use crate::agents::Handler;

/// External backend a tool relies on.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Integration {
    Xai,
    Arcade,
    Pages,
    Composio,
}

impl Integration {
    pub fn name(self) -> &'static str {
        match self {
            Integration::Xai => "xai",
            Integration::Arcade => "arcade",
            Integration::Pages => "pages",
            Integration::Composio => "composio",
        }
    }

    pub fn label(self) -> &'static str {
        match self {
            Integration::Xai => "XAI/Grok for content generation",
            Integration::Arcade => "Arcade.dev for social posting",
            Integration::Pages => "HTTP page snapshots for page analysis",
            Integration::Composio => "Composio for third-party APIs",
        }
    }

    pub fn setup_hint(self) -> &'static str {
        match self {
            Integration::Xai => "Set XAI_API_KEY in the environment or ~/.soco/settings.json",
            Integration::Arcade => "Set ARCADE_API_KEY and ARCADE_USER_ID",
            Integration::Pages => "Page fetching is disabled for this session",
            Integration::Composio => "Composio is not available in this build",
        }
    }
}

/// Semantic role of a parameter value.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ParamKind {
    Text,
    Url,
}

/// One declared parameter of a tool.
#[derive(Debug, Clone, Copy)]
pub struct ParamSpec {
    pub name: &'static str,
    pub description: &'static str,
    pub required: bool,
    pub default: Option<&'static str>,
    pub options: Option<&'static [&'static str]>,
    pub kind: ParamKind,
}

impl ParamSpec {
    pub const fn optional(name: &'static str, description: &'static str) -> Self {
        Self {
            name,
            description,
            required: false,
            default: None,
            options: None,
            kind: ParamKind::Text,
        }
    }

    pub const fn required(name: &'static str, description: &'static str) -> Self {
        let mut spec = Self::optional(name, description);
        spec.required = true;
        spec
    }

    pub const fn default(mut self, value: &'static str) -> Self {
        self.default = Some(value);
        self
    }

    pub const fn options(mut self, options: &'static [&'static str]) -> Self {
        self.options = Some(options);
        self
    }

    pub const fn url(mut self) -> Self {
        self.kind = ParamKind::Url;
        self
    }
}

/// Static registration record for one tool.
#[derive(Debug)]
pub struct ToolDescriptor {
    pub name: &'static str,
    pub description: &'static str,
    pub long_help: &'static str,
    pub aliases: &'static [&'static str],
    pub examples: &'static [&'static str],
    pub integrations: &'static [Integration],
    pub params: &'static [ParamSpec],
    pub estimated_seconds: u32,
}

impl ToolDescriptor {
    pub fn param(&self, name: &str) -> Option<&ParamSpec> {
        self.params.iter().find(|p| p.name == name)
    }

    /// Required parameter names, in declaration order.
    pub fn required_parameters(&self) -> impl Iterator<Item = &'static str> + '_ {
        self.params.iter().filter(|p| p.required).map(|p| p.name)
    }
}

/// A top-level grouping of tools served by one handler.
#[derive(Debug)]
pub struct NamespaceDescriptor {
    pub name: &'static str,
    pub description: &'static str,
    pub handler: Handler,
    pub tools: &'static [ToolDescriptor],
}

impl NamespaceDescriptor {
    /// Look up a tool by canonical name first, then by alias.
    pub fn tool(&self, name: &str) -> Option<&'static ToolDescriptor> {
        self.tools
            .iter()
            .find(|t| t.name == name)
            .or_else(|| self.tools.iter().find(|t| t.aliases.contains(&name)))
    }

    pub fn tool_names(&self) -> Vec<String> {
        self.tools.iter().map(|t| t.name.to_string()).collect()
    }
}
