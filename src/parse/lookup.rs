//! Namespace-tolerant attribute and child lookup.
//!
//! Documents in the wild may bind the BPMN and platform namespaces to any
//! prefix, to the default namespace, or not at all. Every lookup tries the
//! namespace-qualified form first and falls back to the bare local name.

use roxmltree::Node;

use crate::options::ValidatorOptions;

#[derive(Debug, Clone, Copy)]
pub struct Lookup<'o> {
    pub bpmn_ns: &'o str,
    pub platform_ns: &'o str,
}

impl<'o> Lookup<'o> {
    pub fn new(options: &'o ValidatorOptions) -> Self {
        Lookup {
            bpmn_ns: &options.bpmn_namespace,
            platform_ns: &options.platform_namespace,
        }
    }

    /// Attribute value by logical name: platform-qualified, then unqualified.
    /// Empty values count as absent.
    pub fn attr<'a>(&self, node: Node<'a, '_>, name: &str) -> Option<&'a str> {
        node.attribute((self.platform_ns, name))
            .or_else(|| node.attribute(name))
            .filter(|v| !v.trim().is_empty())
    }

    /// First element child with the given local name, preferring the
    /// BPMN-qualified form, then the platform-qualified one, then any namespace.
    pub fn child<'a, 'input>(
        &self,
        node: Node<'a, 'input>,
        name: &str,
    ) -> Option<Node<'a, 'input>> {
        let children = || node.children().filter(|c| c.is_element());
        children()
            .find(|c| c.has_tag_name((self.bpmn_ns, name)))
            .or_else(|| children().find(|c| c.has_tag_name((self.platform_ns, name))))
            .or_else(|| children().find(|c| local_name(*c) == name))
    }

    /// First descendant (excluding `node` itself) with the given local name,
    /// with the same namespace preference as [`Lookup::child`].
    pub fn descendant<'a, 'input>(
        &self,
        node: Node<'a, 'input>,
        name: &str,
    ) -> Option<Node<'a, 'input>> {
        let below = || node.descendants().skip(1).filter(|c| c.is_element());
        below()
            .find(|c| c.has_tag_name((self.bpmn_ns, name)))
            .or_else(|| below().find(|c| c.has_tag_name((self.platform_ns, name))))
            .or_else(|| below().find(|c| local_name(*c) == name))
    }

    /// Value given either as an attribute or as the text of a child element.
    pub fn attr_or_child_text<'a>(&self, node: Node<'a, '_>, name: &str) -> Option<&'a str> {
        self.attr(node, name).or_else(|| {
            self.child(node, name)
                .and_then(|c| c.text())
                .filter(|t| !t.trim().is_empty())
        })
    }
}

/// Namespace-stripped tag name.
pub fn local_name<'a>(node: Node<'a, '_>) -> &'a str {
    node.tag_name().name()
}

/// Tag name as written in the source, including any prefix.
pub fn qualified_name(node: Node<'_, '_>) -> String {
    let local = local_name(node);
    match node
        .tag_name()
        .namespace()
        .and_then(|ns| node.lookup_prefix(ns))
    {
        Some(prefix) if !prefix.is_empty() => format!("{}:{}", prefix, local),
        _ => local.to_string(),
    }
}
