//! Registration scaffold selection.

use std::fmt;

use jsxgen_manifest::ToolkitConfig;

use super::{ClassGraphProvider, ancestor_chain};
use crate::Result;

/// How an element is attached to the native view tree.
///
/// Computed once from the class and its ancestor chain; the nearest
/// recognized class wins.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum WrappingKind {
    /// A view without children; child insertion must be written by hand.
    PlainView,
    /// A view with a single content child.
    ContentContainer,
    /// A view laying out any number of children.
    LayoutContainer,
    /// No recognized toolkit base class in the chain.
    Unsupported,
}

impl WrappingKind {
    /// Classify a class by walking it and its ancestors.
    pub fn classify<P: ClassGraphProvider>(
        provider: &P,
        class: &P::Class,
        toolkit: &ToolkitConfig,
    ) -> Result<Self> {
        if let Some(kind) = Self::match_name(&provider.class_name(class), toolkit) {
            return Ok(kind);
        }

        for ancestor in ancestor_chain(provider, class)? {
            if let Some(kind) = Self::match_name(&provider.class_name(&ancestor), toolkit) {
                return Ok(kind);
            }
        }

        Ok(WrappingKind::Unsupported)
    }

    fn match_name(name: &str, toolkit: &ToolkitConfig) -> Option<Self> {
        let has = |list: &[String]| list.iter().any(|n| n == name);

        if has(&toolkit.layout_containers) {
            Some(WrappingKind::LayoutContainer)
        } else if has(&toolkit.content_containers) {
            Some(WrappingKind::ContentContainer)
        } else if has(&toolkit.plain_views) {
            Some(WrappingKind::PlainView)
        } else {
            None
        }
    }

    pub fn as_str(&self) -> &'static str {
        match self {
            WrappingKind::PlainView => "plain view",
            WrappingKind::ContentContainer => "content container",
            WrappingKind::LayoutContainer => "layout container",
            WrappingKind::Unsupported => "unsupported",
        }
    }
}

impl fmt::Display for WrappingKind {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.as_str())
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::graph::testing::FakeProvider;

    fn provider() -> FakeProvider {
        FakeProvider::default()
            .class("core/view-base", "ViewBase", None, &[])
            .class("core/view", "View", Some("ViewBase"), &[])
            .class("core/content-view", "ContentView", Some("View"), &[])
            .class("core/layout-base", "LayoutBase", Some("View"), &[])
            .class("ui/drawer", "RadSideDrawer", Some("View"), &[])
            .class("ui/page", "Page", Some("ContentView"), &[])
            .class("ui/grid", "GridLayout", Some("LayoutBase"), &[])
            .class("ui/odd", "Odd", Some("ViewBase"), &[])
    }

    fn classify(name: &str) -> WrappingKind {
        let provider = provider();
        WrappingKind::classify(&provider, &provider.get(name), &ToolkitConfig::default()).unwrap()
    }

    #[test]
    fn test_nearest_recognized_ancestor_wins() {
        assert_eq!(classify("RadSideDrawer"), WrappingKind::PlainView);
        assert_eq!(classify("Page"), WrappingKind::ContentContainer);
        assert_eq!(classify("GridLayout"), WrappingKind::LayoutContainer);
    }

    #[test]
    fn test_class_itself_counts() {
        assert_eq!(classify("ContentView"), WrappingKind::ContentContainer);
        assert_eq!(classify("View"), WrappingKind::PlainView);
    }

    #[test]
    fn test_unsupported() {
        assert_eq!(classify("Odd"), WrappingKind::Unsupported);
        assert_eq!(classify("ViewBase"), WrappingKind::Unsupported);
    }

    #[test]
    fn test_custom_toolkit() {
        let provider = provider();
        let toolkit = ToolkitConfig {
            plain_views: vec![],
            content_containers: vec![],
            layout_containers: vec!["ViewBase".to_string()],
        };
        let kind = WrappingKind::classify(&provider, &provider.get("Odd"), &toolkit).unwrap();
        assert_eq!(kind, WrappingKind::LayoutContainer);
    }
}
