use crate::engine::source::{ProcessInstance, UserTaskInstance};

pub struct ProcessInstanceFactory {
    id: String,
    definition_key: String,
    definition_version: u32,
    tenant_id: Option<String>,
    user_tasks: Vec<UserTaskInstance>,
}

impl ProcessInstanceFactory {
    pub fn new(id: &str) -> Self {
        Self {
            id: id.to_string(),
            definition_key: "aProcess".to_string(),
            definition_version: 1,
            tenant_id: None,
            user_tasks: Vec::new(),
        }
    }

    pub fn for_definition(mut self, key: &str, version: u32) -> Self {
        self.definition_key = key.to_string();
        self.definition_version = version;
        self
    }

    pub fn with_tenant(mut self, tenant_id: &str) -> Self {
        self.tenant_id = Some(tenant_id.to_string());
        self
    }

    pub fn with_task(mut self, task: UserTaskInstance) -> Self {
        self.user_tasks.push(task);
        self
    }

    pub fn create(self) -> ProcessInstance {
        ProcessInstance {
            id: self.id,
            definition_key: self.definition_key,
            definition_version: self.definition_version,
            tenant_id: self.tenant_id,
            user_tasks: self.user_tasks,
        }
    }
}
