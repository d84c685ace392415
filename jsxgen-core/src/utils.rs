//! Shared naming rules for generated declarations.

/// Convert a string to PascalCase (e.g., "list-view" -> "ListView").
///
/// Any character that is not alphanumeric separates words. The first
/// character of every word is upper-cased and the rest is kept as written,
/// so names that are already PascalCase pass through unchanged.
pub fn to_pascal_case(s: &str) -> String {
    s.split(|c: char| !c.is_alphanumeric())
        .map(|part| {
            let mut chars = part.chars();
            match chars.next() {
                None => String::new(),
                Some(c) => c.to_uppercase().chain(chars).collect(),
            }
        })
        .collect()
}

/// Lower-case the first character (e.g., "RadSideDrawer" -> "radSideDrawer").
pub fn to_lower_first(s: &str) -> String {
    let mut chars = s.chars();
    match chars.next() {
        None => String::new(),
        Some(c) => c.to_lowercase().chain(chars).collect(),
    }
}

/// Name of the attribute type generated for a class (e.g., "View" -> "ViewAttributes").
pub fn attribute_class_name(class_name: &str) -> String {
    format!("{}Attributes", to_pascal_case(class_name))
}

/// Last segment of a module path (e.g., "@scope/ui/list-view/list-view" -> "list-view").
pub fn module_basename(module_path: &str) -> &str {
    let trimmed = module_path.trim_end_matches('/');
    trimmed.rsplit('/').next().unwrap_or(trimmed)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_to_pascal_case() {
        assert_eq!(to_pascal_case("hello"), "Hello");
        assert_eq!(to_pascal_case("hello_world"), "HelloWorld");
        assert_eq!(to_pascal_case("list-view"), "ListView");
        assert_eq!(to_pascal_case("tab-navigation-base"), "TabNavigationBase");
        assert_eq!(to_pascal_case("RadSideDrawer"), "RadSideDrawer");
        assert_eq!(to_pascal_case("hElLo"), "HElLo");
        assert_eq!(to_pascal_case(""), "");
    }

    #[test]
    fn test_to_lower_first() {
        assert_eq!(to_lower_first("RadSideDrawer"), "radSideDrawer");
        assert_eq!(to_lower_first("x"), "x");
        assert_eq!(to_lower_first(""), "");
    }

    #[test]
    fn test_attribute_class_name() {
        assert_eq!(attribute_class_name("View"), "ViewAttributes");
        assert_eq!(attribute_class_name("list_view"), "ListViewAttributes");
    }

    #[test]
    fn test_module_basename() {
        assert_eq!(
            module_basename("@nativescript/core/ui/list-view/list-view"),
            "list-view"
        );
        assert_eq!(module_basename("m/foo"), "foo");
        assert_eq!(module_basename("index"), "index");
        assert_eq!(module_basename("pkg/index/"), "index");
    }
}
