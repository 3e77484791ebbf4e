//! C/C++ header classification (SPEC_FULL §4.1 "C/C++").

use std::collections::HashSet;

use super::Classification;
use crate::model::ModuleDescriptor;

const C_HEADERS: &[&str] = &[
    "assert.h", "complex.h", "ctype.h", "errno.h", "fenv.h", "float.h", "inttypes.h",
    "iso646.h", "limits.h", "locale.h", "math.h", "setjmp.h", "signal.h",
    "stdalign.h", "stdarg.h", "stdatomic.h", "stdbool.h", "stddef.h", "stdint.h",
    "stdio.h", "stdlib.h", "stdnoreturn.h", "string.h", "tgmath.h", "threads.h",
    "time.h", "uchar.h", "wchar.h", "wctype.h",
];

const CPP_HEADERS: &[&str] = &[
    "algorithm", "any", "array", "atomic", "bitset", "chrono", "complex",
    "condition_variable", "deque", "exception", "filesystem", "forward_list",
    "fstream", "functional", "future", "initializer_list", "iomanip", "ios",
    "iosfwd", "iostream", "istream", "iterator", "limits", "list", "locale", "map",
    "memory", "mutex", "new", "numeric", "optional", "ostream", "queue", "random",
    "ranges", "ratio", "regex", "scoped_allocator", "set", "shared_mutex", "span",
    "sstream", "stack", "stdexcept", "streambuf", "string", "string_view",
    "system_error", "thread", "tuple", "type_traits", "typeindex", "typeinfo",
    "unordered_map", "unordered_set", "utility", "valarray", "variant", "vector",
];

/// Strips surrounding `<>` or `"..."` delimiters and, for C++, a trailing `.h`
/// (SPEC_FULL §4.1: `<vector>` and `"vector.h"` both resolve to the `vector`
/// system entry).
pub fn strip_header_delims(name: &str, is_cpp: bool) -> &str {
    let trimmed = name
        .strip_prefix('<')
        .and_then(|s| s.strip_suffix('>'))
        .or_else(|| name.strip_prefix('"').and_then(|s| s.strip_suffix('"')))
        .unwrap_or(name);
    if is_cpp {
        trimmed.strip_suffix(".h").unwrap_or(trimmed)
    } else {
        trimmed
    }
}

/// Project-local match against `modules.cpp_includes`: substring or prefix
/// match, since C/C++ include roots are typically directories, not exact names.
pub fn classify_project(stripped_name: &str, modules: &ModuleDescriptor) -> Classification {
    for root in &modules.cpp_includes {
        if stripped_name == root.as_str()
            || stripped_name.starts_with(&format!("{root}/"))
        {
            return Classification::Project;
        }
    }
    Classification::Unknown
}

pub struct CHeaderSet {
    headers: HashSet<&'static str>,
}

impl CHeaderSet {
    pub fn new() -> Self {
        Self { headers: C_HEADERS.iter().copied().collect() }
    }

    pub fn contains(&self, stripped_name: &str) -> bool {
        self.headers.contains(stripped_name)
    }

    pub fn classify(&self, name: &str, modules: &ModuleDescriptor) -> Classification {
        let stripped = strip_header_delims(name, false);
        if self.contains(stripped) {
            Classification::System
        } else {
            classify_project(stripped, modules)
        }
    }
}

pub struct CppHeaderSet {
    headers: HashSet<&'static str>,
}

impl CppHeaderSet {
    pub fn new() -> Self {
        Self { headers: CPP_HEADERS.iter().copied().collect() }
    }

    pub fn contains(&self, stripped_name: &str) -> bool {
        self.headers.contains(stripped_name)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn angle_bracket_header_is_system() {
        let c = CHeaderSet::new();
        let modules = ModuleDescriptor::default();
        assert_eq!(c.classify("<stdio.h>", &modules), Classification::System);
    }

    #[test]
    fn cpp_header_without_extension_is_system() {
        let cpp = CppHeaderSet::new();
        assert!(cpp.contains(strip_header_delims("<vector>", true)));
        assert!(cpp.contains(strip_header_delims("\"vector.h\"", true)));
    }

    #[test]
    fn project_include_prefix_matches() {
        let modules = ModuleDescriptor { cpp_includes: vec!["acme/core".into()], ..Default::default() };
        assert_eq!(classify_project("acme/core/widget.h", &modules), Classification::Project);
        assert_eq!(classify_project("other/widget.h", &modules), Classification::Unknown);
    }
}
