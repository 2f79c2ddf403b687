//! Protobuf descriptor mirrors, as they appear when Singularity serializes
//! Mesos messages reflectively.

dto_enum! {
    pub enum OptimizeMode {
        Speed = "SPEED",
        CodeSize = "CODE_SIZE",
        LiteRuntime = "LITE_RUNTIME",
    }
}

dto! {
    pub struct MessageOptions {
        message_set_wire_format: bool = "messageSetWireFormat",
        no_standard_descriptor_accessor: bool = "noStandardDescriptorAccessor",
        uninterpreted_option_count: i32 = "uninterpretedOptionCount",
    }
    list MessageOptionsList;
}

dto! {
    pub struct FileOptions {
        cc_generic_services: bool = "ccGenericServices",
        go_package: String = "goPackage",
        java_generate_equals_and_hash: bool = "javaGenerateEqualsAndHash",
        java_generic_services: bool = "javaGenericServices",
        java_multiple_files: bool = "javaMultipleFiles",
        java_outer_classname: String = "javaOuterClassname",
        java_package: String = "javaPackage",
        optimize_for: OptimizeMode = "optimizeFor",
        py_generic_services: bool = "pyGenericServices",
        uninterpreted_option_count: i32 = "uninterpretedOptionCount",
    }
    list FileOptionsList;
}

dto! {
    /// A message type. Parent type and file are boxed since both can lead
    /// back to this descriptor.
    pub struct Descriptor {
        containing_type: Box<Descriptor> = "containingType",
        file: Box<FileDescriptor> = "file",
        full_name: String = "fullName",
        index: i32 = "index",
        name: String = "name",
        nested_types: Vec<Descriptor> = "nestedTypes",
        options: MessageOptions = "options",
    }
    list DescriptorList;
}

dto! {
    pub struct FileDescriptor {
        dependencies: Vec<FileDescriptor> = "dependencies",
        message_types: Vec<Descriptor> = "messageTypes",
        name: String = "name",
        options: FileOptions = "options",
        package: String = "package",
        public_dependencies: Vec<FileDescriptor> = "publicDependencies",
    }
    list FileDescriptorList;
}

#[cfg(test)]
mod tests {
    use schemars::schema_for;
    use serde_json::json;

    use super::{Descriptor, FileDescriptor, OptimizeMode};
    use crate::swagger::{Dto, Fielder};

    #[test]
    fn nested_descriptors_decode() {
        let mut file = FileDescriptor::default();
        file.populate(
            json!({
                "name": "mesos.proto",
                "package": "mesos",
                "options": {"javaPackage": "org.apache.mesos", "optimizeFor": "SPEED"},
                "messageTypes": [{
                    "name": "Offer",
                    "fullName": "mesos.Offer",
                    "index": 0,
                    "nestedTypes": [{
                        "name": "Operation",
                        "fullName": "mesos.Offer.Operation",
                        "containingType": {"name": "Offer"}
                    }]
                }]
            })
            .to_string()
            .as_bytes(),
        )
        .unwrap();

        assert_eq!(
            file.options.as_ref().and_then(|o| o.optimize_for.clone()),
            Some(OptimizeMode::Speed)
        );
        let offer = &file.message_types.as_ref().unwrap()[0];
        let operation = &offer.nested_types.as_ref().unwrap()[0];
        assert_eq!(
            operation.containing_type.as_ref().and_then(|d| d.name.as_deref()),
            Some("Offer")
        );
    }

    #[test]
    fn boxed_fields_set_by_name() {
        let mut descriptor = Descriptor::default();
        descriptor
            .set_field("file", json!({"name": "mesos.proto"}))
            .unwrap();

        assert_eq!(descriptor.get_field("file").unwrap(), json!({"name": "mesos.proto"}));
        assert!(descriptor.set_field("file", json!("mesos.proto")).is_err());
    }

    #[test]
    fn recursive_schema_uses_definitions() {
        let schema = serde_json::to_value(schema_for!(Descriptor)).unwrap();

        assert!(schema["properties"]["containingType"].is_object());
        assert!(schema["definitions"]["FileDescriptor"].is_object());
        assert!(schema["definitions"]["MessageOptions"].is_object());
    }
}
