use serde::Deserialize;

/// Project metadata.
#[derive(Debug, Clone, Deserialize)]
pub struct ProjectConfig {
    /// Project name
    pub name: String,

    /// Project description
    pub description: Option<String>,
}

/// Toolkit base classes used to pick a registration scaffold.
#[derive(Debug, Clone, Deserialize)]
#[serde(default)]
pub struct ToolkitConfig {
    pub plain_views: Vec<String>,
    pub content_containers: Vec<String>,
    pub layout_containers: Vec<String>,
}

impl Default for ToolkitConfig {
    fn default() -> Self {
        Self {
            plain_views: vec!["View".to_string()],
            content_containers: vec!["ContentView".to_string()],
            layout_containers: vec!["LayoutBase".to_string()],
        }
    }
}

/// Output locations, relative to the output directory.
#[derive(Debug, Clone, Deserialize)]
#[serde(default)]
pub struct OutputConfig {
    pub ambient_dir: String,
    pub ambient_prefix: String,
    pub exported_dir: String,
    pub exported_prefix: String,
}

impl Default for OutputConfig {
    fn default() -> Self {
        Self {
            ambient_dir: "svelte-native-defs".to_string(),
            ambient_prefix: "svelte-native-jsx-".to_string(),
            exported_dir: "react-nativescript-defs".to_string(),
            exported_prefix: "react-nativescript-jsx-".to_string(),
        }
    }
}

impl OutputConfig {
    /// Relative path of the ambient declaration file for an export.
    pub fn ambient_path(&self, export: &str) -> String {
        format!("{}/{}{}.d.ts", self.ambient_dir, self.ambient_prefix, export)
    }

    /// Relative path of the exported declaration file for an export.
    pub fn exported_path(&self, export: &str) -> String {
        format!("{}/{}{}.ts", self.exported_dir, self.exported_prefix, export)
    }
}
