use crate::error::RegistryError;
use crate::nodes::web_crawlers;
use crate::schema::NodeTemplate;
use ahash::AHashMap;
use log::{debug, warn};

/// Defines the built-in template table: registration of every provider and lookup by task name.
macro_rules! define_node_templates {
    ( $( ($task_name:expr, $provider:path) ),* $(,)? ) => {
        /// Task names of every built-in template.
        pub const DEFAULT_TASK_NAMES: &[&str] = &[ $( $task_name ),* ];

        fn register_default_templates(templates: &mut Vec<NodeTemplate>) {
            $( templates.push($provider()); )*
        }

        /// Creates a fresh built-in template by its task name.
        pub fn create_template_by_name(task_name: &str) -> Option<NodeTemplate> {
            match task_name {
                $( name if name == $task_name => Some($provider()), )*
                _ => None,
            }
        }
    };
}

define_node_templates! {
    (web_crawlers::BILIBILI_CRAWLER, web_crawlers::bilibili_crawler),
}

/// An immutable mapping from task name to node template.
///
/// Built once through [`TemplateRegistry::builder`]; every template in it has passed lint.
#[derive(Debug, Clone, Default)]
pub struct TemplateRegistry {
    templates: AHashMap<String, NodeTemplate>,
}

impl TemplateRegistry {
    pub fn builder() -> TemplateRegistryBuilder {
        TemplateRegistryBuilder::new()
    }

    /// A registry holding only the built-in templates.
    pub fn default_registry() -> Result<Self, RegistryError> {
        Self::builder().with_defaults().build()
    }

    pub fn get(&self, task_name: &str) -> Option<&NodeTemplate> {
        self.templates.get(task_name)
    }

    /// Like [`get`](Self::get), but an unknown task is an error.
    pub fn require(&self, task_name: &str) -> Result<&NodeTemplate, RegistryError> {
        self.get(task_name)
            .ok_or_else(|| RegistryError::UnknownTask(task_name.to_string()))
    }

    pub fn contains(&self, task_name: &str) -> bool {
        self.templates.contains_key(task_name)
    }

    /// Registered task names in lexical order.
    pub fn task_names(&self) -> Vec<&str> {
        let mut names: Vec<&str> = self.templates.keys().map(String::as_str).collect();
        names.sort_unstable();
        names
    }

    pub fn len(&self) -> usize {
        self.templates.len()
    }

    pub fn is_empty(&self) -> bool {
        self.templates.is_empty()
    }

    pub fn iter(&self) -> impl Iterator<Item = (&str, &NodeTemplate)> {
        self.templates.iter().map(|(k, v)| (k.as_str(), v))
    }
}

/// Collects templates, then lints and indexes them in [`build`](Self::build).
#[derive(Debug, Default)]
pub struct TemplateRegistryBuilder {
    templates: Vec<NodeTemplate>,
    pending_error: Option<RegistryError>,
}

impl TemplateRegistryBuilder {
    pub fn new() -> Self {
        Self::default()
    }

    /// Registers every built-in template.
    pub fn with_defaults(mut self) -> Self {
        register_default_templates(&mut self.templates);
        self
    }

    pub fn with_template(mut self, template: NodeTemplate) -> Self {
        self.templates.push(template);
        self
    }

    /// Loads one template from a JSON file. A read or parse failure surfaces from `build`.
    pub fn with_template_file(mut self, path: &str) -> Self {
        match NodeTemplate::from_file(path) {
            Ok(template) => self.templates.push(template),
            Err(e) if self.pending_error.is_none() => self.pending_error = Some(e),
            Err(_) => {}
        }
        self
    }

    pub fn build(self) -> Result<TemplateRegistry, RegistryError> {
        if let Some(err) = self.pending_error {
            return Err(err);
        }

        let mut templates = AHashMap::with_capacity(self.templates.len());
        for template in self.templates {
            if let Err(source) = template.validate() {
                warn!("Rejecting template '{}': {}", template.task_name, source);
                return Err(RegistryError::InvalidTemplate {
                    task_name: template.task_name,
                    source,
                });
            }
            if templates.contains_key(&template.task_name) {
                return Err(RegistryError::DuplicateTask(template.task_name));
            }
            debug!(
                "Registered template '{}' with {} fields",
                template.task_name,
                template.fields.len()
            );
            templates.insert(template.task_name.clone(), template);
        }

        Ok(TemplateRegistry { templates })
    }
}
