use crate::engine::definition::{DefinitionVersion, FlowNode};

pub struct DefinitionFactory {
    key: String,
    version: u32,
    tenant_id: Option<String>,
    user_tasks: Vec<FlowNode>,
}

impl DefinitionFactory {
    pub fn new(key: &str) -> Self {
        Self {
            key: key.to_string(),
            version: 1,
            tenant_id: None,
            user_tasks: Vec::new(),
        }
    }

    pub fn with_version(mut self, version: u32) -> Self {
        self.version = version;
        self
    }

    pub fn with_tenant(mut self, tenant_id: &str) -> Self {
        self.tenant_id = Some(tenant_id.to_string());
        self
    }

    pub fn with_user_task(mut self, id: &str) -> Self {
        self.user_tasks.push(FlowNode::new(id, None));
        self
    }

    pub fn with_named_user_task(mut self, id: &str, name: &str) -> Self {
        self.user_tasks.push(FlowNode::new(id, Some(name)));
        self
    }

    pub fn with_user_tasks(mut self, ids: &[&str]) -> Self {
        for id in ids {
            self.user_tasks.push(FlowNode::new(id, None));
        }
        self
    }

    pub fn create(self) -> DefinitionVersion {
        DefinitionVersion {
            key: self.key,
            version: self.version,
            tenant_id: self.tenant_id,
            user_tasks: self.user_tasks,
        }
    }
}
