//! Java import classification (SPEC_FULL §4.1 "Java").

use super::Classification;
use crate::model::ModuleDescriptor;

const JAVA_SYSTEM_PREFIXES: &[&str] = &[
    "java.", "javax.", "jakarta.", "org.w3c.", "org.xml.", "org.omg.", "org.ietf.",
    "org.iso.", "org.unicode.", "com.sun.", "sun.", "jdk.",
];

pub struct JavaSystemPrefixes;

impl JavaSystemPrefixes {
    pub fn new() -> Self {
        Self
    }

    pub fn classify(&self, name: &str, modules: &ModuleDescriptor) -> Classification {
        if JAVA_SYSTEM_PREFIXES.iter().any(|p| name.starts_with(p)) {
            return Classification::System;
        }
        if modules.java_package_prefix.iter().any(|p| name.starts_with(p.as_str())) {
            return Classification::Project;
        }
        Classification::Unknown
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn jdk_prefixes_are_system() {
        let c = JavaSystemPrefixes::new();
        let modules = ModuleDescriptor::default();
        for name in ["java.util.List", "javax.annotation.Nonnull", "jakarta.inject.Inject", "com.sun.tools.javac"] {
            assert_eq!(c.classify(name, &modules), Classification::System, "{name}");
        }
    }

    #[test]
    fn configured_prefix_is_project() {
        let c = JavaSystemPrefixes::new();
        let modules = ModuleDescriptor { java_package_prefix: vec!["com.acme.".into()], ..Default::default() };
        assert_eq!(c.classify("com.acme.service.UserService", &modules), Classification::Project);
        assert_eq!(c.classify("com.other.Thing", &modules), Classification::Unknown);
    }
}
