pub mod definition_factory;
pub mod process_instance_factory;
pub mod report_spec_factory;
pub mod sample_factory;
pub mod user_task_factory;

pub use definition_factory::DefinitionFactory;
pub use process_instance_factory::ProcessInstanceFactory;
pub use report_spec_factory::ReportSpecFactory;
pub use sample_factory::SampleFactory;
pub use user_task_factory::{UserTaskFactory, base_time, at_ms};

#[cfg(test)]
mod report_spec_factory_test;
#[cfg(test)]
mod user_task_factory_test;
