use crate::{Config, FieldInfo, Inspect, MemberInfo};

/// Everything the report needs to know about an object's type.
///
/// A thin layer over [`Inspect::type_info`] that fills in what the type left
/// unspecified: the root superclass and the implicit constructor.
#[derive(Debug, Clone)]
pub struct TypeMetadata {
    pub class_name: &'static str,
    pub superclass: &'static str,
    pub interfaces: Vec<&'static str>,
    pub fields: Vec<FieldInfo>,
    pub constructors: Vec<MemberInfo>,
    pub methods: Vec<MemberInfo>,
}

impl TypeMetadata {
    pub fn read(instance: &dyn Inspect, config: &Config) -> Self {
        let info = instance.type_info();

        let mut constructors = info.constructors;
        if constructors.is_empty() {
            constructors.extend(info.implicit_constructor);
        }

        Self {
            class_name: info.name,
            superclass: info.superclass.unwrap_or(config.root_type_name),
            interfaces: info.interfaces,
            fields: info.fields,
            constructors,
            methods: info.methods,
        }
    }
}
