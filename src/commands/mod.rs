//! One module per sample, each a descriptor plus a linear
//! validate → build → call → render pipeline.

pub mod create_model_vision_object_detection;
pub mod vision_classification_predict;

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct ParamSpec {
    pub name: &'static str,
    pub help: &'static str,
    pub required: bool,
}

/// Static metadata naming a sample and the parameters it takes.
///
/// The command-line parser takes subcommand names and help text from here;
/// `params` lists arguments in the order they are accepted.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct CommandDescriptor {
    pub name: &'static str,
    pub help: &'static str,
    pub params: &'static [ParamSpec],
}

pub static DESCRIPTORS: &[&CommandDescriptor] = &[
    &vision_classification_predict::DESCRIPTOR,
    &create_model_vision_object_detection::DESCRIPTOR,
];

pub(crate) const PROJECT_ID: ParamSpec = ParamSpec {
    name: "project_id",
    help: "GCP project ID",
    required: true,
};
